pub mod dispatch;
pub mod error;
pub mod event;
pub mod extension;
pub mod filter;
pub mod item;

pub use dispatch::{UiDispatcher, UiHandle};
pub use error::{Result, TvError};
pub use event::Message;
pub use extension::{ContextMenu, Extension, ExtensionContext, MenuAction, MenuEntry};
pub use filter::{FilterRegistry, ItemFilter};
pub use item::{ItemId, ItemInfo, VisualState};

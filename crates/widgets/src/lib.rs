pub mod button;
pub mod item_row;
pub mod label;
pub mod menu;
pub mod surface;
pub mod thumbnail;

pub use button::ChromeButton;
pub use item_row::ItemRow;
pub use label::LabelBox;
pub use menu::{context_menu, filter_bar};
pub use surface::RenderedSurface;
pub use thumbnail::Thumbnail;

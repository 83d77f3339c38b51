use crate::{error::Result, filter::ItemFilter, item::{ItemId, ItemInfo}};
use std::path::PathBuf;
use std::sync::Arc;

/// What the host hands an extension when loading it.
#[derive(Debug, Clone)]
pub struct ExtensionContext {
    /// Directory the extension may persist its own data in.
    pub data_dir: PathBuf,
}

/// Command attached to a context-menu entry.  The host routes it back to the
/// extension that inserted the entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuAction {
    pub extension: String,
    pub command: String,
    pub items: Vec<ItemId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: String,
    pub action: MenuAction,
}

/// The mutable item context menu the host builds before showing it.
pub trait ContextMenu {
    fn insert(&mut self, position: usize, entry: MenuEntry);
}

impl ContextMenu for Vec<MenuEntry> {
    fn insert(&mut self, position: usize, entry: MenuEntry) {
        Vec::insert(self, position.min(self.len()), entry);
    }
}

/// Contract between the host and a user extension.
pub trait Extension {
    /// Unique name, also used to route [`MenuAction`]s.
    fn name(&self) -> &str;

    fn load(&mut self, ctx: &ExtensionContext) -> Result<()>;

    fn unload(&mut self);

    /// Filters to offer in the item list.
    fn item_filters(&self) -> Vec<Arc<dyn ItemFilter>> {
        Vec::new()
    }

    /// Add extension entries to the context menu for `selection`.
    fn update_item_context_menu(&self, _selection: &[ItemInfo], _menu: &mut dyn ContextMenu) {}

    /// Run a command previously inserted by this extension.
    fn handle_action(&self, _action: &MenuAction) {}
}

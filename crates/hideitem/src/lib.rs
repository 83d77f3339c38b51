//! Hide-item extension: lets the user hide items from the item list.
//!
//! An item is hidden while its id is present in the extension's key-value
//! store.  The extension contributes two list filters (`hidden` and
//! `non-hidden`) and one context-menu entry that toggles the selection.

pub mod model;
pub mod store;
pub mod view;

pub use model::HideItemModel;
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};
pub use view::{HideItemView, ItemFilterHidden, ItemFilterNonHidden, EXTENSION_NAME, TOGGLE_COMMAND};

use std::sync::Arc;
use tracing::{info, warn};
use tv_core::{
    ContextMenu, Extension, ExtensionContext, ItemFilter, ItemInfo, MenuAction, Result, TvError,
};

/// File name of the store inside the extension data directory.
pub const STORE_FILE: &str = "hideitem.json";

/// The extension as the host sees it.  Inert until [`Extension::load`].
#[derive(Default)]
pub struct HideItemExtension {
    view: Option<HideItemView>,
    preset_store: Option<Arc<dyn KeyValueStore>>,
}

impl HideItemExtension {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `store` instead of opening the JSON file on load.
    pub fn with_store(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            view: None,
            preset_store: Some(store),
        }
    }

    pub fn view(&self) -> Option<&HideItemView> {
        self.view.as_ref()
    }

    pub fn is_hidden(&self, item: &ItemInfo) -> bool {
        self.view
            .as_ref()
            .is_some_and(|v| v.model().is_hidden_item(&item.id))
    }
}

impl Extension for HideItemExtension {
    fn name(&self) -> &str {
        EXTENSION_NAME
    }

    fn load(&mut self, ctx: &ExtensionContext) -> Result<()> {
        let store: Arc<dyn KeyValueStore> = match &self.preset_store {
            Some(store) => store.clone(),
            None => {
                let path = ctx.data_dir.join(STORE_FILE);
                Arc::new(JsonFileStore::open(&path).map_err(|e| TvError::Storage(e.to_string()))?)
            }
        };
        self.view = Some(HideItemView::new(Arc::new(HideItemModel::new(store))));
        info!("Extension: Hide Item: loaded");
        Ok(())
    }

    fn unload(&mut self) {
        if let Some(view) = self.view.take() {
            view.unload();
        }
        info!("Extension: Hide Item: unloaded");
    }

    fn item_filters(&self) -> Vec<Arc<dyn ItemFilter>> {
        self.view
            .as_ref()
            .map(HideItemView::item_list_filters)
            .unwrap_or_default()
    }

    fn update_item_context_menu(&self, selection: &[ItemInfo], menu: &mut dyn ContextMenu) {
        if let Some(view) = &self.view {
            view.update_item_context_menu(selection, menu);
        }
    }

    fn handle_action(&self, action: &MenuAction) {
        let Some(view) = &self.view else {
            warn!("Extension: Hide Item: action before load ignored");
            return;
        };
        if action.command == TOGGLE_COMMAND {
            view.context_menu_action(&action.items);
        } else {
            warn!("Extension: Hide Item: unknown command '{}'", action.command);
        }
    }
}

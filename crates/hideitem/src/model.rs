use crate::store::{KeyValueStore, StoreError};
use std::sync::Arc;
use tracing::error;
use tv_core::ItemId;

/// Which items are hidden.
///
/// An item is hidden exactly when its id is present in the store.  Every
/// operation reports success as a `bool`; store failures are logged and
/// never reach the caller.
pub struct HideItemModel {
    store: Arc<dyn KeyValueStore>,
}

impl HideItemModel {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn hide_item(&self, item: &ItemId) -> bool {
        match self.store.set_value(item.as_str(), true) {
            Ok(()) => true,
            Err(e) => {
                error!(item = %item, "Extension: Hide Item: failed to hide item: {e}");
                false
            }
        }
    }

    pub fn unhide_item(&self, item: &ItemId) -> bool {
        match self.store.clear_value(item.as_str()) {
            Ok(()) => true,
            Err(e) => {
                error!(item = %item, "Extension: Hide Item: failed to unhide item: {e}");
                false
            }
        }
    }

    pub fn is_hidden_item(&self, item: &ItemId) -> bool {
        match self.store.get_value(item.as_str()) {
            Ok(hidden) => hidden,
            Err(StoreError::NotFound(_)) => false,
            Err(e) => {
                error!(item = %item, "Extension: Hide Item: cannot read hidden state: {e}");
                false
            }
        }
    }

    /// Hide a visible item or unhide a hidden one.
    pub fn toggle_hidden(&self, item: &ItemId) -> bool {
        if self.is_hidden_item(item) {
            self.unhide_item(item)
        } else {
            self.hide_item(item)
        }
    }

    pub fn unload(&self) {
        if let Err(e) = self.store.flush() {
            error!("Extension: Hide Item: failed to flush store: {e}");
        }
    }
}

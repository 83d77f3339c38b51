use crate::model::HideItemModel;
use std::sync::Arc;
use tracing::debug;
use tv_core::{ContextMenu, ItemFilter, ItemInfo, MenuAction, MenuEntry};

pub const EXTENSION_NAME: &str = "hideitem";
pub const TOGGLE_COMMAND: &str = "toggle-hidden";

const HIDE_LABEL: &str = "Hide Item";
const UNHIDE_LABEL: &str = "Unhide Item";

/// Shows only hidden items.
pub struct ItemFilterHidden {
    model: Arc<HideItemModel>,
}

impl ItemFilter for ItemFilterHidden {
    fn key(&self) -> &str {
        "hidden"
    }

    fn label(&self) -> &str {
        "Hidden"
    }

    fn matches(&self, item: &ItemInfo) -> bool {
        let hidden = self.model.is_hidden_item(&item.id);
        if hidden {
            debug!("Extension: Hide Item: found hidden item: {}", item.name);
        }
        hidden
    }
}

/// Shows everything that is not hidden.
pub struct ItemFilterNonHidden {
    model: Arc<HideItemModel>,
}

impl ItemFilter for ItemFilterNonHidden {
    fn key(&self) -> &str {
        "non-hidden"
    }

    fn label(&self) -> &str {
        "Filtered"
    }

    fn matches(&self, item: &ItemInfo) -> bool {
        !self.model.is_hidden_item(&item.id)
    }
}

/// Menu entries and filters of the hide-item extension.
pub struct HideItemView {
    model: Arc<HideItemModel>,
}

impl HideItemView {
    pub fn new(model: Arc<HideItemModel>) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &Arc<HideItemModel> {
        &self.model
    }

    pub fn item_list_filters(&self) -> Vec<Arc<dyn ItemFilter>> {
        vec![
            Arc::new(ItemFilterHidden { model: self.model.clone() }),
            Arc::new(ItemFilterNonHidden { model: self.model.clone() }),
        ]
    }

    /// Toggle every item in `selection`.  Returns how many toggles succeeded.
    pub fn context_menu_action(&self, selection: &[tv_core::ItemId]) -> usize {
        selection
            .iter()
            .filter(|id| self.model.toggle_hidden(id))
            .count()
    }

    /// Put one "Hide Item(s)" / "Unhide Item(s)" entry at the top of `menu`.
    ///
    /// The first selected item decides which of the two it is.
    pub fn update_item_context_menu(&self, selection: &[ItemInfo], menu: &mut dyn ContextMenu) {
        let Some(first) = selection.first() else {
            return;
        };
        let mut label = if self.model.is_hidden_item(&first.id) {
            UNHIDE_LABEL.to_string()
        } else {
            HIDE_LABEL.to_string()
        };
        if selection.len() > 1 {
            label.push('s');
        }

        menu.insert(
            0,
            MenuEntry {
                label,
                action: MenuAction {
                    extension: EXTENSION_NAME.to_string(),
                    command: TOGGLE_COMMAND.to_string(),
                    items: selection.iter().map(|i| i.id.clone()).collect(),
                },
            },
        );
    }

    pub fn unload(&self) {
        self.model.unload();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use tv_core::FilterRegistry;

    fn view() -> HideItemView {
        HideItemView::new(Arc::new(HideItemModel::new(Arc::new(MemoryStore::new()))))
    }

    fn items() -> Vec<ItemInfo> {
        vec![
            ItemInfo::new("a", "Alpha"),
            ItemInfo::new("b", "Beta"),
            ItemInfo::new("c", "Gamma"),
        ]
    }

    #[test]
    fn single_selection_label() {
        let view = view();
        let items = items();
        let mut menu: Vec<MenuEntry> = vec![MenuEntry {
            label: "Play".into(),
            action: MenuAction {
                extension: "host".into(),
                command: "play".into(),
                items: vec![],
            },
        }];

        view.update_item_context_menu(&items[..1], &mut menu);
        assert_eq!(menu.len(), 2);
        assert_eq!(menu[0].label, "Hide Item");
        assert_eq!(menu[0].action.items, vec![items[0].id.clone()]);
        assert_eq!(menu[1].label, "Play");
    }

    #[test]
    fn plural_label_follows_first_item() {
        let view = view();
        let items = items();
        view.model().hide_item(&items[0].id);

        let mut menu: Vec<MenuEntry> = Vec::new();
        view.update_item_context_menu(&items, &mut menu);
        assert_eq!(menu.len(), 1);
        assert_eq!(menu[0].label, "Unhide Items");
        assert_eq!(menu[0].action.command, TOGGLE_COMMAND);
    }

    #[test]
    fn empty_selection_adds_nothing() {
        let mut menu: Vec<MenuEntry> = Vec::new();
        view().update_item_context_menu(&[], &mut menu);
        assert!(menu.is_empty());
    }

    #[test]
    fn action_toggles_each_selected_item() {
        let view = view();
        let items = items();
        view.model().hide_item(&items[1].id);

        let ids: Vec<_> = items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(view.context_menu_action(&ids), 3);
        assert!(view.model().is_hidden_item(&items[0].id));
        assert!(!view.model().is_hidden_item(&items[1].id));
        assert!(view.model().is_hidden_item(&items[2].id));
    }

    #[test]
    fn filters_partition_items() {
        let view = view();
        let items = items();
        view.model().hide_item(&items[2].id);

        let mut registry = FilterRegistry::new();
        for filter in view.item_list_filters() {
            registry.register(filter);
        }
        let hidden: Vec<_> = registry.apply(Some("hidden"), &items).into_iter().map(|i| i.name.as_str()).collect();
        let shown: Vec<_> = registry.apply(Some("non-hidden"), &items).into_iter().map(|i| i.name.as_str()).collect();
        assert_eq!(hidden, vec!["Gamma"]);
        assert_eq!(shown, vec!["Alpha", "Beta"]);
        assert_eq!(registry.get("non-hidden").map(|f| f.label().to_string()), Some("Filtered".into()));
    }
}

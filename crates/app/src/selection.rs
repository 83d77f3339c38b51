use tv_core::{ItemId, ItemInfo};

/// Ordered set of selected item ids.  Order is click order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<ItemId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &[ItemId] {
        &self.ids
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.ids.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Add `id`, or remove it if already selected.
    pub fn toggle(&mut self, id: ItemId) {
        match self.ids.iter().position(|s| *s == id) {
            Some(idx) => {
                self.ids.remove(idx);
            }
            None => self.ids.push(id),
        }
    }

    /// Right-clicking outside the selection replaces it with that item;
    /// inside, the selection is kept as is.
    pub fn focus(&mut self, id: ItemId) {
        if !self.contains(&id) {
            self.ids = vec![id];
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drop ids that no longer name an item, e.g. after a config reload.
    pub fn retain_known(&mut self, items: &[ItemInfo]) {
        self.ids.retain(|id| items.iter().any(|i| i.id == *id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut sel = Selection::new();
        sel.toggle("a".into());
        sel.toggle("b".into());
        assert_eq!(sel.ids(), &[ItemId::from("a"), ItemId::from("b")]);
        sel.toggle("a".into());
        assert_eq!(sel.ids(), &[ItemId::from("b")]);
    }

    #[test]
    fn focus_keeps_an_existing_multi_selection() {
        let mut sel = Selection::new();
        sel.toggle("a".into());
        sel.toggle("b".into());
        sel.focus("b".into());
        assert_eq!(sel.ids().len(), 2);

        sel.focus("c".into());
        assert_eq!(sel.ids(), &[ItemId::from("c")]);
    }

    #[test]
    fn retain_known_drops_vanished_items() {
        let mut sel = Selection::new();
        sel.toggle("a".into());
        sel.toggle("gone".into());
        sel.retain_known(&[ItemInfo::new("a", "A")]);
        assert_eq!(sel.ids(), &[ItemId::from("a")]);
    }
}

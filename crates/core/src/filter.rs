use crate::item::ItemInfo;
use std::sync::Arc;

/// A named predicate the item list can offer as a view filter.
///
/// Extensions register implementations; the host only ever iterates the
/// registry and calls `matches`.
pub trait ItemFilter: Send + Sync {
    /// Stable identifier, e.g. `"hidden"`.
    fn key(&self) -> &str;

    /// Label shown in the filter bar.
    fn label(&self) -> &str;

    /// `true` when `item` should be shown while this filter is active.
    fn matches(&self, item: &ItemInfo) -> bool;
}

/// Ordered list of filters contributed by the loaded extensions.
#[derive(Default, Clone)]
pub struct FilterRegistry {
    filters: Vec<Arc<dyn ItemFilter>>,
}

impl FilterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `filter`.  A filter whose key is already registered replaces
    /// the earlier one in place.
    pub fn register(&mut self, filter: Arc<dyn ItemFilter>) {
        match self.filters.iter().position(|f| f.key() == filter.key()) {
            Some(idx) => self.filters[idx] = filter,
            None => self.filters.push(filter),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Arc<dyn ItemFilter>> {
        self.filters.iter().find(|f| f.key() == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn ItemFilter>> {
        self.filters.iter()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Items passing the filter registered under `key`.  An unknown key or
    /// `None` keeps every item.
    pub fn apply<'a>(&self, key: Option<&str>, items: &'a [ItemInfo]) -> Vec<&'a ItemInfo> {
        match key.and_then(|k| self.get(k)) {
            Some(filter) => items.iter().filter(|i| filter.matches(i)).collect(),
            None => items.iter().collect(),
        }
    }
}

impl std::fmt::Debug for FilterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.filters.iter().map(|x| x.key())).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NameStartsWith(&'static str, &'static str);

    impl ItemFilter for NameStartsWith {
        fn key(&self) -> &str {
            self.0
        }
        fn label(&self) -> &str {
            self.0
        }
        fn matches(&self, item: &ItemInfo) -> bool {
            item.name.starts_with(self.1)
        }
    }

    fn items() -> Vec<ItemInfo> {
        vec![ItemInfo::new("1", "alpha"), ItemInfo::new("2", "beta")]
    }

    #[test]
    fn apply_known_filter() {
        let mut reg = FilterRegistry::new();
        reg.register(Arc::new(NameStartsWith("a", "a")));
        let items = items();
        let shown = reg.apply(Some("a"), &items);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].name, "alpha");
    }

    #[test]
    fn unknown_key_keeps_everything() {
        let reg = FilterRegistry::new();
        let items = items();
        assert_eq!(reg.apply(Some("missing"), &items).len(), 2);
        assert_eq!(reg.apply(None, &items).len(), 2);
    }

    #[test]
    fn register_replaces_same_key() {
        let mut reg = FilterRegistry::new();
        reg.register(Arc::new(NameStartsWith("x", "a")));
        reg.register(Arc::new(NameStartsWith("x", "b")));
        assert_eq!(reg.len(), 1);
        let items = items();
        assert_eq!(reg.apply(Some("x"), &items)[0].name, "beta");
    }
}

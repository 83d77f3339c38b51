use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a feed item.  Used verbatim as the persistence key
/// by extensions that track per-item state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Read-only view of a single item as the item list presents it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemInfo {
    pub id: ItemId,
    pub name: String,
    /// Image asset name for the item thumbnail, if any.
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl ItemInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(id),
            name: name.into(),
            thumbnail: None,
        }
    }
}

/// Rendering mode of a piece of chrome; selects which image set is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisualState {
    #[default]
    Normal,
    Pressed,
    Disabled,
}

impl VisualState {
    pub const ALL: [Self; 3] = [Self::Normal, Self::Pressed, Self::Disabled];

    /// Suffix appended to the asset basename for this state, before the
    /// slice name (`btn` + `_active` + `_left`).
    pub fn asset_suffix(self) -> &'static str {
        match self {
            Self::Normal   => "",
            Self::Pressed  => "_active",
            Self::Disabled => "_inactive",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_id_displays_raw_key() {
        assert_eq!(ItemId::from("item_42").to_string(), "item_42");
    }

    #[test]
    fn state_suffixes() {
        assert_eq!(VisualState::Normal.asset_suffix(), "");
        assert_eq!(VisualState::Pressed.asset_suffix(), "_active");
        assert_eq!(VisualState::Disabled.asset_suffix(), "_inactive");
    }
}

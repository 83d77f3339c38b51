use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tv_core::ItemInfo;

/// Root configuration structure parsed from `tv.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TvConfig {
    /// Paths and window settings.
    pub global: GlobalConfig,
    /// Theme / visual settings.
    pub theme: ThemeConfig,
    /// Items shown in the list.
    pub items: Vec<ItemInfo>,
}

/// Global application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Root of the resource bundle; images live in `<resources_dir>/images`.
    pub resources_dir: PathBuf,
    /// Where extensions persist their data.
    pub data_dir: PathBuf,
    /// Initial window size in logical pixels.
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            resources_dir: PathBuf::from("resources"),
            data_dir:      crate::default_data_dir(),
            window_width:  640.0,
            window_height: 480.0,
        }
    }
}

/// Theme / styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Window background color (hex, e.g. `"#1e1e2e"`).
    pub background: String,
    /// Primary text/foreground color.
    pub foreground: String,
    /// Accent / highlight color.
    pub accent: String,
    /// Fill used around icons smaller than their box.
    pub icon_fill: String,
    /// Font size in points.
    pub font_size: f32,
    /// Corner radius for rounded chrome (pixels).
    pub corner_radius: f32,
    /// Space between a button's left cap and its label.
    pub label_pad_left: u16,
    /// Space between a button's label and its right cap.
    pub label_pad_right: u16,
    /// Asset basename of the three-slice toolbar button.
    pub button_basename: String,
    /// Thumbnail box size (square, pixels).
    pub thumbnail_size: u32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background:      "#1e1e2e".to_string(),
            foreground:      "#cdd6f4".to_string(),
            accent:          "#cba6f7".to_string(),
            icon_fill:       "#000000".to_string(),
            font_size:       13.0,
            corner_radius:   3.0,
            label_pad_left:  6,
            label_pad_right: 6,
            button_basename: "toolbar_button".to_string(),
            thumbnail_size:  48,
        }
    }
}

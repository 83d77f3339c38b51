pub mod colors;

pub use colors::Color;

use tv_config::ThemeConfig;

/// Compiled theme derived from [`ThemeConfig`].
///
/// All colors are pre-parsed from hex strings into normalised `[0, 1]` RGBA.
/// Calling [`Theme::from_config`] is infallible: invalid color strings fall
/// back to safe defaults.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background:      Color,
    pub foreground:      Color,
    pub accent:          Color,
    /// Fill painted around icons that are smaller than their box.
    pub icon_fill:       Color,
    pub font_size:       f32,
    pub corner_radius:   f64,
    pub label_pad_left:  u16,
    pub label_pad_right: u16,
    pub button_basename: String,
    pub thumbnail_size:  u32,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        Self {
            background:      Color::from_hex(&cfg.background).unwrap_or(Color::DARK),
            foreground:      Color::from_hex(&cfg.foreground).unwrap_or(Color::TEXT),
            accent:          Color::from_hex(&cfg.accent).unwrap_or(Color::PURPLE),
            icon_fill:       Color::from_hex(&cfg.icon_fill).unwrap_or(Color::BLACK),
            font_size:       cfg.font_size,
            corner_radius:   f64::from(cfg.corner_radius.max(0.0)),
            label_pad_left:  cfg.label_pad_left,
            label_pad_right: cfg.label_pad_right,
            button_basename: cfg.button_basename.clone(),
            thumbnail_size:  cfg.thumbnail_size.max(1),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

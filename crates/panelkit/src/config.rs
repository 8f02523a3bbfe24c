//! Configuration types for panel layouts and their debug views.
//!
//! All types implement [`serde::Deserialize`] and fall back to defaults for
//! every missing key, so an empty TOML file is a valid configuration.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Default margins used when a layout document omits them.
//! - [`StyleConfig`] - Colours and spacing of the SVG debug view.
//!
//! # Example
//!
//! ```
//! # use panelkit::config::AppConfig;
//! let config: AppConfig = toml::from_str("[layout]\nmargin = 3.0").unwrap();
//! assert_eq!(config.layout().margin(), 3.0);
//! assert!(config.style().inside_color().is_ok());
//! ```

use serde::Deserialize;

use panelkit_core::color::Color;

use crate::layout::DEFAULT_MARGIN;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    layout: LayoutConfig,

    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Defaults applied by layout documents.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Gap between nodes of a line or columns of a grid.
    #[serde(default = "default_margin")]
    margin: f64,

    /// Gap between rows of a grid.
    #[serde(default = "default_margin")]
    row_margin: f64,
}

fn default_margin() -> f64 {
    DEFAULT_MARGIN
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            row_margin: DEFAULT_MARGIN,
        }
    }
}

impl LayoutConfig {
    pub fn new(margin: f64, row_margin: f64) -> Self {
        Self { margin, row_margin }
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    pub fn row_margin(&self) -> f64 {
        self.row_margin
    }
}

/// Appearance of the SVG debug view.
///
/// Colour fields hold CSS colour strings and are parsed lazily; an invalid
/// string surfaces as an error when the view is rendered.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background of the whole drawing; transparent when unset.
    #[serde(default)]
    background_color: Option<String>,

    /// Panel outline; the face colour when unset.
    #[serde(default)]
    panel_color: Option<String>,

    #[serde(default = "default_inside_color")]
    inside_color: String,

    #[serde(default = "default_outside_color")]
    outside_color: String,

    #[serde(default = "default_label_color")]
    label_color: String,

    /// Dot drawn at each part's nominal position.
    #[serde(default = "default_marker_color")]
    marker_color: String,

    #[serde(default = "default_show_labels")]
    show_labels: bool,

    /// Empty space around the panel, in millimetres.
    #[serde(default = "default_padding")]
    padding: f64,
}

fn default_inside_color() -> String {
    "magenta".to_string()
}

fn default_outside_color() -> String {
    "cyan".to_string()
}

fn default_label_color() -> String {
    "black".to_string()
}

fn default_marker_color() -> String {
    "red".to_string()
}

fn default_show_labels() -> bool {
    true
}

fn default_padding() -> f64 {
    10.0
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            panel_color: None,
            inside_color: default_inside_color(),
            outside_color: default_outside_color(),
            label_color: default_label_color(),
            marker_color: default_marker_color(),
            show_labels: default_show_labels(),
            padding: default_padding(),
        }
    }
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid colour.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the parsed panel outline [`Color`], or `None` if unset.
    pub fn panel_color(&self) -> Result<Option<Color>, String> {
        self.panel_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| format!("Invalid panel color in config: {err}"))
    }

    pub fn inside_color(&self) -> Result<Color, String> {
        Color::new(&self.inside_color).map_err(|err| format!("Invalid inside color in config: {err}"))
    }

    pub fn outside_color(&self) -> Result<Color, String> {
        Color::new(&self.outside_color)
            .map_err(|err| format!("Invalid outside color in config: {err}"))
    }

    pub fn label_color(&self) -> Result<Color, String> {
        Color::new(&self.label_color).map_err(|err| format!("Invalid label color in config: {err}"))
    }

    pub fn marker_color(&self) -> Result<Color, String> {
        Color::new(&self.marker_color)
            .map_err(|err| format!("Invalid marker color in config: {err}"))
    }

    pub fn show_labels(&self) -> bool {
        self.show_labels
    }

    pub fn padding(&self) -> f64 {
        self.padding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();

        assert_eq!(config.layout().margin(), DEFAULT_MARGIN);
        assert_eq!(config.layout().row_margin(), DEFAULT_MARGIN);
        assert_eq!(config.style().background_color(), Ok(None));
        assert_eq!(config.style().panel_color(), Ok(None));
        assert_eq!(config.style().inside_color(), Color::new("magenta"));
        assert_eq!(config.style().outside_color(), Color::new("cyan"));
        assert!(config.style().show_labels());
        assert_eq!(config.style().padding(), 10.0);
    }

    #[test]
    fn test_partial_style_section() {
        let config: AppConfig = toml::from_str(
            r##"
            [style]
            background_color = "white"
            inside_color = "#00ff00"
            show_labels = false
            "##,
        )
        .unwrap();

        assert!(config.style().background_color().unwrap().is_some());
        assert_eq!(config.style().inside_color(), Color::new("#00ff00"));
        assert_eq!(config.style().outside_color(), Color::new("cyan"));
        assert!(!config.style().show_labels());
    }

    #[test]
    fn test_invalid_color_is_reported_on_access() {
        let config: AppConfig = toml::from_str("[style]\noutside_color = \"sky\"").unwrap();
        let err = config.style().outside_color().unwrap_err();
        assert!(err.contains("outside color"));
    }
}

//! Panelkit - footprint-aware layout of parts on enclosure panels.
//!
//! Parts such as buttons, jacks and screens occupy one rectangle on the inner
//! side of a panel and another on the outer side. The [`layout`] module packs
//! them into lines, fixed-width lines and grids so that neither footprint
//! collides, and [`panel::Panel`] records the resulting positions. Layouts can
//! be written in code or described by a TOML [`document`].

pub mod catalog;
pub mod config;
pub mod document;
pub mod export;
pub mod layout;
pub mod panel;

mod error;

pub use panelkit_core::{color, footprint, geometry};

pub use document::DocumentError;
pub use error::PanelkitError;

use std::path::Path;

use log::{debug, info, trace};

use config::AppConfig;
use document::LayoutDocument;
use export::Exporter;
use layout::{LayoutNode, Placeable};
use panel::{Panel, Placement};

/// Builder for parsing layout documents and placing them on panels.
///
/// # Examples
///
/// ```rust
/// use panelkit::{LayoutBuilder, config::AppConfig};
///
/// let source = r#"
///     [panel]
///     width = 100
///     length = 40
///     wall_thickness = 2
///
///     [[parts]]
///     category = "button"
///     type = "SPST"
///     inside_footprint = [12, 12]
///     outside_footprint = [8, 8]
///
///     [[layout]]
///     kind = "line"
///     margin = 4
///
///     [[layout.children]]
///     kind = "part"
///     label = "Play"
///     category = "button"
///
///     [[layout.children]]
///     kind = "part"
///     label = "Stop"
///     category = "button"
/// "#;
///
/// let builder = LayoutBuilder::new(AppConfig::default());
/// let document = builder.parse(source).expect("Failed to parse");
/// let panel = builder.build(&document).expect("Failed to build");
///
/// let xs: Vec<f64> = panel.placements().iter().map(|p| p.position().x()).collect();
/// assert_eq!(xs, vec![42.0, 58.0]);
/// ```
#[derive(Debug, Default)]
pub struct LayoutBuilder {
    config: AppConfig,
}

impl LayoutBuilder {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parses a TOML layout document.
    ///
    /// # Errors
    ///
    /// Returns [`PanelkitError::Document`] for malformed documents.
    pub fn parse(&self, source: &str) -> Result<LayoutDocument, PanelkitError> {
        info!("Parsing layout document");

        let document = LayoutDocument::from_toml(source)?;

        debug!(
            parts = document.parts().len(),
            trees = document.layout().len();
            "Layout document parsed"
        );
        trace!(document:?; "Parsed document");

        Ok(document)
    }

    /// Lays out every tree of `document` and places its parts on a panel.
    ///
    /// Layout trees are centred on the panel; `offset` entries in the document
    /// move them from there.
    ///
    /// # Errors
    ///
    /// Returns [`PanelkitError::Catalog`] when a node names an unknown part and
    /// [`PanelkitError::Layout`] when a layout factory rejects its input.
    pub fn build(&self, document: &LayoutDocument) -> Result<Panel, PanelkitError> {
        let spec = document.panel();
        info!(face = spec.face().name(); "Building panel");

        let catalog = document.catalog()?;
        let nodes = document.build_nodes(&catalog, self.config.layout())?;

        let mut panel = Panel::new(spec.face(), spec.size());
        for node in &nodes {
            match node {
                LayoutNode::Group(group) => {
                    panel.add_group(group);
                }
                LayoutNode::Element(element) => {
                    if let Some(part) = element.part() {
                        panel.add(
                            element.label(),
                            part.clone(),
                            Placement::Relative(element.position()),
                        );
                    }
                }
            }
        }

        info!(placements = panel.placements().len(); "Panel built");
        Ok(panel)
    }

    /// Renders `panel` to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`PanelkitError::Config`] for invalid style colours and
    /// [`PanelkitError::Export`] if rendering fails.
    pub fn render_svg(&self, panel: &Panel) -> Result<String, PanelkitError> {
        let svg = export::svg::SvgBuilder::new()
            .with_style(self.config.style())
            .build()?;
        let document = svg.render_panel(panel)?;

        info!("SVG rendered successfully");
        Ok(document.to_string())
    }

    /// Renders `panel` and writes the SVG to `path`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::render_svg`], plus [`PanelkitError::Export`] when the
    /// file cannot be written.
    pub fn write_svg(&self, panel: &Panel, path: impl AsRef<Path>) -> Result<(), PanelkitError> {
        let mut svg = export::svg::SvgBuilder::new()
            .with_style(self.config.style())
            .with_output(path.as_ref().to_string_lossy())
            .build()?;
        svg.export_panel(panel)?;
        Ok(())
    }
}

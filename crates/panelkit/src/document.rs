//! TOML layout documents.
//!
//! A document describes one panel, the part types available to it and a list
//! of layout trees. Every tree is built with the layout factories and its
//! leaves are placed on the panel.
//!
//! ```toml
//! [panel]
//! width = 120
//! length = 60
//! wall_thickness = 2
//! face = "front"
//!
//! [[parts]]
//! category = "button"
//! type = "SPST"
//! inside_footprint = [12, 12]
//! outside_footprint = [8, 8]
//!
//! [[layout]]
//! kind = "line"
//! margin = 4
//!
//! [[layout.children]]
//! kind = "part"
//! label = "Play"
//! category = "button"
//!
//! [[layout.children]]
//! kind = "part"
//! label = "Stop"
//! category = "button"
//! ```
//!
//! Node kinds: `part`, `spacer`, `line`, `fixed_width_line` and `grid`. Every
//! kind except `spacer` accepts an `offset = [x, y]` that translates the built
//! node; inside a line the node keeps that offset relative to its slot.

use std::rc::Rc;

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use panelkit_core::{
    footprint::{Part, PartFootprint},
    geometry::{Axis, Point, Size},
};

use crate::{
    catalog::PartCatalog,
    config::LayoutConfig,
    error::PanelkitError,
    layout::{
        DEFAULT_SPACER_LABEL, FixedWidthOptions, LayoutElement, LayoutGroup, LayoutNode,
        LineOptions, Placeable,
    },
    panel::{Face, PanelSize},
};

/// Errors raised while reading a layout document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The source is not valid TOML or does not match the document schema.
    #[error("Invalid layout document: {}", err.message())]
    Parse { err: toml::de::Error, src: String },

    /// The document parsed but describes an impossible panel.
    #[error("Invalid panel: {0}")]
    InvalidPanel(String),
}

impl DocumentError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: toml::de::Error, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_spacer_axis() -> Axis {
    Axis::X
}

/// A parsed layout document.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutDocument {
    panel: PanelSpec,

    #[serde(default)]
    parts: Vec<PartSpec>,

    #[serde(default)]
    layout: Vec<NodeSpec>,
}

/// The `[panel]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PanelSpec {
    width: f64,
    length: f64,
    wall_thickness: f64,
    #[serde(default)]
    total_thickness: Option<f64>,
    #[serde(default)]
    face: Face,
}

/// One `[[parts]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartSpec {
    category: String,
    #[serde(rename = "type")]
    part_type: String,
    inside_footprint: Size,
    outside_footprint: Size,
    #[serde(default)]
    inside_footprint_offset: Point,
    /// Makes this the type used when a node names only the category.
    #[serde(default)]
    default: bool,
}

/// One node of a layout tree, tagged by `kind`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeSpec {
    Part {
        label: String,
        category: String,
        #[serde(rename = "type", default)]
        part_type: Option<String>,
        /// Overrides the width of both footprints.
        #[serde(default)]
        footprints_x: Option<f64>,
        /// Overrides the height of both footprints.
        #[serde(default)]
        footprints_y: Option<f64>,
        #[serde(default)]
        offset: Point,
    },
    Spacer {
        size: f64,
        #[serde(default = "default_spacer_axis")]
        axis: Axis,
        #[serde(default)]
        label: Option<String>,
    },
    Line {
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        margin: Option<f64>,
        #[serde(default = "default_true")]
        horizontal: bool,
        #[serde(default)]
        align_other_dimension_at_0: bool,
        #[serde(default)]
        align_to_outside_footprint: bool,
        #[serde(default)]
        align_start_to_outside_footprint: bool,
        #[serde(default = "default_true")]
        center_at_origin: bool,
        #[serde(default)]
        children: Vec<NodeSpec>,
        #[serde(default)]
        offset: Point,
    },
    FixedWidthLine {
        #[serde(default)]
        label: Option<String>,
        size: f64,
        #[serde(default = "default_true")]
        horizontal: bool,
        #[serde(default = "default_true")]
        add_margin_on_sides: bool,
        #[serde(default)]
        align_other_dimension_at_0: bool,
        #[serde(default)]
        align_to_outside_footprint: bool,
        #[serde(default = "default_true")]
        center_at_origin: bool,
        #[serde(default)]
        children: Vec<NodeSpec>,
        #[serde(default)]
        offset: Point,
    },
    Grid {
        label: String,
        category: String,
        #[serde(rename = "type", default)]
        part_type: Option<String>,
        rows: usize,
        cols: usize,
        #[serde(default)]
        margin_rows: Option<f64>,
        #[serde(default)]
        margin_cols: Option<f64>,
        #[serde(default)]
        offset: Point,
    },
}

impl LayoutDocument {
    /// Parses a document from TOML source.
    ///
    /// # Errors
    ///
    /// [`DocumentError::Parse`] for malformed TOML or schema mismatches,
    /// [`DocumentError::InvalidPanel`] for non-positive panel dimensions.
    pub fn from_toml(source: &str) -> Result<Self, DocumentError> {
        let document: Self =
            toml::from_str(source).map_err(|err| DocumentError::new_parse_error(err, source))?;
        document.panel.validate()?;
        Ok(document)
    }

    pub fn panel(&self) -> &PanelSpec {
        &self.panel
    }

    pub fn parts(&self) -> &[PartSpec] {
        &self.parts
    }

    /// Root layout trees in document order.
    pub fn layout(&self) -> &[NodeSpec] {
        &self.layout
    }

    /// Registers every `[[parts]]` entry in a fresh catalog.
    pub fn catalog(&self) -> Result<PartCatalog, PanelkitError> {
        let mut catalog = PartCatalog::new();
        for spec in &self.parts {
            catalog.register(&spec.category, &spec.part_type, spec.footprint())?;
            if spec.default {
                catalog.set_default_type(&spec.category, &spec.part_type)?;
            }
        }
        Ok(catalog)
    }

    /// Builds every root tree, resolving parts through `catalog`.
    pub fn build_nodes(
        &self,
        catalog: &PartCatalog,
        config: &LayoutConfig,
    ) -> Result<Vec<LayoutNode>, PanelkitError> {
        self.layout
            .iter()
            .map(|spec| spec.build(catalog, config))
            .collect()
    }
}

impl PanelSpec {
    fn validate(&self) -> Result<(), DocumentError> {
        for (name, value) in [
            ("width", self.width),
            ("length", self.length),
            ("wall_thickness", self.wall_thickness),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(DocumentError::InvalidPanel(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }

    pub fn face(&self) -> Face {
        self.face
    }

    pub fn size(&self) -> PanelSize {
        let size = PanelSize::new(self.width, self.length, self.wall_thickness);
        match self.total_thickness {
            Some(total) => size.with_total_thickness(total),
            None => size,
        }
    }
}

impl PartSpec {
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn part_type(&self) -> &str {
        &self.part_type
    }

    pub fn footprint(&self) -> PartFootprint {
        PartFootprint::new(self.inside_footprint, self.outside_footprint)
            .with_inside_offset(self.inside_footprint_offset)
    }
}

impl NodeSpec {
    /// Builds this node and its children.
    pub fn build(
        &self,
        catalog: &PartCatalog,
        config: &LayoutConfig,
    ) -> Result<LayoutNode, PanelkitError> {
        let (mut node, offset): (LayoutNode, Point) = match self {
            Self::Part {
                label,
                category,
                part_type,
                footprints_x,
                footprints_y,
                offset,
            } => {
                let part: Rc<dyn Part> = catalog.build(category, part_type.as_deref())?;
                let mut element = LayoutElement::from_part(label.as_str(), part);
                if let Some(width) = footprints_x {
                    element.set_footprints_x(*width);
                }
                if let Some(height) = footprints_y {
                    element.set_footprints_y(*height);
                }
                (element.into(), *offset)
            }
            Self::Spacer { size, axis, label } => {
                let element = match axis {
                    Axis::X => LayoutElement::spacer_x(*size),
                    Axis::Y => LayoutElement::spacer_y(*size),
                };
                let label = label.as_deref().unwrap_or(DEFAULT_SPACER_LABEL);
                (element.with_label(label).into(), Point::default())
            }
            Self::Line {
                label,
                margin,
                horizontal,
                align_other_dimension_at_0,
                align_to_outside_footprint,
                align_start_to_outside_footprint,
                center_at_origin,
                children,
                offset,
            } => {
                let options = LineOptions {
                    margin: margin.unwrap_or(config.margin()),
                    horizontal: *horizontal,
                    align_other_dimension_at_0: *align_other_dimension_at_0,
                    align_to_outside_footprint: *align_to_outside_footprint,
                    align_start_to_outside_footprint: *align_start_to_outside_footprint,
                    center_at_origin: *center_at_origin,
                };
                let nodes = build_children(children, catalog, config)?;
                let group = LayoutGroup::line_of_elements(nodes, &options)?;
                (with_optional_label(group, label).into(), *offset)
            }
            Self::FixedWidthLine {
                label,
                size,
                horizontal,
                add_margin_on_sides,
                align_other_dimension_at_0,
                align_to_outside_footprint,
                center_at_origin,
                children,
                offset,
            } => {
                let options = FixedWidthOptions {
                    horizontal: *horizontal,
                    add_margin_on_sides: *add_margin_on_sides,
                    align_other_dimension_at_0: *align_other_dimension_at_0,
                    align_to_outside_footprint: *align_to_outside_footprint,
                    center_at_origin: *center_at_origin,
                };
                let nodes = build_children(children, catalog, config)?;
                let group = LayoutGroup::fixed_width_line_of_elements(*size, nodes, &options)?;
                (with_optional_label(group, label).into(), *offset)
            }
            Self::Grid {
                label,
                category,
                part_type,
                rows,
                cols,
                margin_rows,
                margin_cols,
                offset,
            } => {
                let part: Rc<dyn Part> = catalog.build(category, part_type.as_deref())?;
                let group = LayoutGroup::grid_of_part(
                    label,
                    part,
                    *rows,
                    *cols,
                    margin_rows.unwrap_or(config.row_margin()),
                    margin_cols.unwrap_or(config.margin()),
                )?;
                (group.into(), *offset)
            }
        };

        if !offset.is_zero() {
            node.translate(offset);
        }
        debug!(label = node.label(); "Built layout node");
        Ok(node)
    }
}

fn build_children(
    children: &[NodeSpec],
    catalog: &PartCatalog,
    config: &LayoutConfig,
) -> Result<Vec<LayoutNode>, PanelkitError> {
    children
        .iter()
        .map(|child| child.build(catalog, config))
        .collect()
}

fn with_optional_label(group: LayoutGroup, label: &Option<String>) -> LayoutGroup {
    match label {
        Some(label) => group.with_label(label.as_str()),
        None => group,
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::{catalog::CatalogError, layout::LayoutError};

    const PANEL: &str = r#"
        [panel]
        width = 100
        length = 50
        wall_thickness = 2
    "#;

    const PARTS: &str = r#"
        [[parts]]
        category = "button"
        type = "SPST"
        inside_footprint = [12, 12]
        outside_footprint = [8, 8]

        [[parts]]
        category = "jack"
        type = "3.5mm"
        inside_footprint = [10, 14]
        outside_footprint = [8, 8]
        inside_footprint_offset = [0, 2]
        default = true

        [[parts]]
        category = "jack"
        type = "6.35mm"
        inside_footprint = [16, 20]
        outside_footprint = [12, 12]
    "#;

    fn parse(layout: &str) -> LayoutDocument {
        LayoutDocument::from_toml(&format!("{PANEL}\n{PARTS}\n{layout}")).unwrap()
    }

    fn build(document: &LayoutDocument) -> Result<Vec<LayoutNode>, PanelkitError> {
        let catalog = document.catalog()?;
        document.build_nodes(&catalog, &LayoutConfig::default())
    }

    #[test]
    fn test_panel_section() {
        let document = LayoutDocument::from_toml(
            "[panel]\nwidth = 80.5\nlength = 40\nwall_thickness = 2\ntotal_thickness = 6\nface = \"back\"",
        )
        .unwrap();

        assert_eq!(document.panel().face(), Face::Back);
        let size = document.panel().size();
        assert_eq!(size.width(), 80.5);
        assert_eq!(size.total_thickness(), 6.0);
        assert!(document.layout().is_empty());
    }

    #[test]
    fn test_invalid_panel_dimensions() {
        let err = LayoutDocument::from_toml("[panel]\nwidth = 0\nlength = 40\nwall_thickness = 2")
            .unwrap_err();
        assert!(matches!(err, DocumentError::InvalidPanel(_)));
        assert!(err.to_string().contains("width"));
    }

    #[test]
    fn test_parse_error_keeps_source() {
        let source = "[panel]\nwidth = \"wide\"";
        let err = LayoutDocument::from_toml(source).unwrap_err();
        match err {
            DocumentError::Parse { err, src } => {
                assert_eq!(src, source);
                assert!(err.span().is_some());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_node_kind_is_rejected() {
        let source = format!("{PANEL}\n[[layout]]\nkind = \"circle\"");
        assert!(matches!(
            LayoutDocument::from_toml(&source),
            Err(DocumentError::Parse { .. })
        ));
    }

    #[test]
    fn test_catalog_defaults() {
        let document = parse("");
        let catalog = document.catalog().unwrap();

        assert_eq!(catalog.categories(), vec!["button", "jack"]);
        assert_eq!(catalog.default_type("jack"), Some("3.5mm"));
        assert_eq!(document.parts()[0].category(), "button");
    }

    #[test]
    fn test_nested_line_document() {
        let document = parse(
            r#"
            [[layout]]
            kind = "line"
            label = "Controls"
            margin = 4
            offset = [0, 10]

            [[layout.children]]
            kind = "part"
            label = "Play"
            category = "button"

            [[layout.children]]
            kind = "spacer"
            size = 6

            [[layout.children]]
            kind = "part"
            label = "Stop"
            category = "button"
            "#,
        );

        let nodes = build(&document).unwrap();
        assert_eq!(nodes.len(), 1);
        let group = nodes[0].as_group().unwrap();
        assert_eq!(group.label(), "Controls");
        assert_eq!(group.elements().len(), 3);

        // 12 + 4 + 6 + 4 + 12 = 38 wide
        let elements = group.get_elements();
        assert_approx_eq!(f64, elements[0].position().x(), -13.0);
        assert_approx_eq!(f64, elements[1].position().x(), 13.0);
        assert_approx_eq!(f64, elements[0].position().y(), 10.0);
    }

    #[test]
    fn test_default_margin_comes_from_config() {
        let document = parse(
            r#"
            [[layout]]
            kind = "line"

            [[layout.children]]
            kind = "part"
            label = "A"
            category = "button"

            [[layout.children]]
            kind = "part"
            label = "B"
            category = "button"
            "#,
        );

        let catalog = document.catalog().unwrap();
        let nodes = document
            .build_nodes(&catalog, &LayoutConfig::new(10.0, 1.0))
            .unwrap();
        let elements = nodes[0].get_elements();
        assert_approx_eq!(f64, elements[1].position().x() - elements[0].position().x(), 22.0);
    }

    #[test]
    fn test_part_footprint_overrides() {
        let document = parse(
            r#"
            [[layout]]
            kind = "part"
            label = "Wide"
            category = "jack"
            type = "6.35mm"
            footprints_x = 30
            "#,
        );

        let nodes = build(&document).unwrap();
        let element = nodes[0].as_element().unwrap();
        assert_eq!(element.footprints().total(), Size::new(30.0, 20.0));
    }

    #[test]
    fn test_fixed_width_and_grid_nodes() {
        let document = parse(
            r#"
            [[layout]]
            kind = "fixed_width_line"
            size = 100
            offset = [0, -15]

            [[layout.children]]
            kind = "part"
            label = "In"
            category = "jack"

            [[layout.children]]
            kind = "part"
            label = "Out"
            category = "jack"

            [[layout]]
            kind = "grid"
            label = "Pad"
            category = "button"
            rows = 2
            cols = 2
            margin_rows = 3
            margin_cols = 3
            "#,
        );

        let nodes = build(&document).unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].get_elements().len(), 2);
        assert_eq!(nodes[0].label(), "Fixed width line");

        let pads: Vec<&str> = nodes[1].get_elements().iter().map(|e| e.label()).collect();
        assert_eq!(pads, vec!["Pad 1-1", "Pad 1-2", "Pad 2-1", "Pad 2-2"]);
    }

    #[test]
    fn test_build_errors_propagate() {
        let document = parse("[[layout]]\nkind = \"line\"");
        assert!(matches!(
            build(&document),
            Err(PanelkitError::Layout(LayoutError::EmptyInput(_)))
        ));

        let document = parse("[[layout]]\nkind = \"part\"\nlabel = \"S\"\ncategory = \"screen\"");
        assert!(matches!(
            build(&document),
            Err(PanelkitError::Catalog(CatalogError::UnknownCategory(_)))
        ));
    }
}

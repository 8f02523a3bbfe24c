//! SVG debug view of a placed panel.
//!
//! The view is the 2D counterpart of the footprint markers an enclosure
//! builder overlays on its 3D model: the panel outline, every inside
//! footprint, every outside footprint, a dot at each part's nominal position
//! and its label. Panel coordinates have Y growing upward, so every Y value
//! is flipped when written out.

mod layer;

use std::{fs::File, io::Write};

use log::{debug, error, info};
use svg::{Document, node::element as svg_element};

use panelkit_core::{
    color::Color,
    footprint::FootprintKind,
    geometry::{Bounds, Point},
};

use crate::{config::StyleConfig, error::PanelkitError, export, panel::Panel};

use layer::{LayeredOutput, RenderLayer};

const LABEL_FONT_SIZE: f64 = 3.0;
const MARKER_RADIUS: f64 = 0.8;
const STROKE_WIDTH: f64 = 0.3;
const INSIDE_FILL_OPACITY: f64 = 0.25;

/// Builder for [`Svg`].
#[derive(Debug, Default)]
pub struct SvgBuilder {
    file_name: Option<String>,
    style: StyleConfig,
}

impl SvgBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// File written by [`export::Exporter::export_panel`].
    pub fn with_output(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn with_style(mut self, style: &StyleConfig) -> Self {
        self.style = style.clone();
        self
    }

    /// Resolves the configured colours.
    ///
    /// # Errors
    ///
    /// Returns [`PanelkitError::Config`] if a colour string is invalid.
    pub fn build(self) -> Result<Svg, PanelkitError> {
        let style = &self.style;
        Ok(Svg {
            file_name: self.file_name,
            background: style.background_color().map_err(PanelkitError::Config)?,
            panel_color: style.panel_color().map_err(PanelkitError::Config)?,
            inside_color: style.inside_color().map_err(PanelkitError::Config)?,
            outside_color: style.outside_color().map_err(PanelkitError::Config)?,
            label_color: style.label_color().map_err(PanelkitError::Config)?,
            marker_color: style.marker_color().map_err(PanelkitError::Config)?,
            show_labels: style.show_labels(),
            padding: style.padding(),
        })
    }
}

/// SVG renderer with resolved styling.
#[derive(Debug)]
pub struct Svg {
    file_name: Option<String>,
    background: Option<Color>,
    panel_color: Option<Color>,
    inside_color: Color,
    outside_color: Color,
    label_color: Color,
    marker_color: Color,
    show_labels: bool,
    padding: f64,
}

impl Svg {
    /// Renders `panel` to an SVG document.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if a placement has a non-finite
    /// position.
    pub fn render_panel(&self, panel: &Panel) -> Result<Document, export::Error> {
        let size = panel.size();
        let width = size.width() + 2.0 * self.padding;
        let height = size.length() + 2.0 * self.padding;
        debug!(width, height; "SVG dimensions");

        let mut output = LayeredOutput::new();

        if let Some(background) = &self.background {
            output.add_to_layer(
                RenderLayer::Background,
                svg_element::Rectangle::new()
                    .set("x", -self.padding)
                    .set("y", -self.padding)
                    .set("width", width)
                    .set("height", height)
                    .set("fill", background),
            );
        }

        let panel_color = match &self.panel_color {
            Some(color) => *color,
            None => Color::new(panel.face().default_color()).map_err(export::Error::Render)?,
        };
        output.add_to_layer(
            RenderLayer::Panel,
            rectangle(size.length(), size.bounds())
                .set("fill", &panel_color)
                .set("fill-opacity", 0.15)
                .set("stroke", &panel_color)
                .set("stroke-width", STROKE_WIDTH * 2.0),
        );

        for placed in panel.placements() {
            let position = placed.position();
            if !position.x().is_finite() || !position.y().is_finite() {
                return Err(export::Error::Render(format!(
                    "part `{}` has a non-finite position",
                    placed.label()
                )));
            }

            let footprints = placed.footprints();
            output.add_to_layer(
                RenderLayer::Inside,
                rectangle(size.length(), footprints.bounds(FootprintKind::Inside))
                    .set("fill", &self.inside_color)
                    .set("fill-opacity", INSIDE_FILL_OPACITY)
                    .set("stroke", &self.inside_color)
                    .set("stroke-width", STROKE_WIDTH),
            );
            output.add_to_layer(
                RenderLayer::Outside,
                rectangle(size.length(), footprints.bounds(FootprintKind::Outside))
                    .set("fill", "none")
                    .set("stroke", &self.outside_color)
                    .set("stroke-width", STROKE_WIDTH)
                    .set("stroke-dasharray", "1 0.5"),
            );

            let centre = flip(size.length(), position);
            output.add_to_layer(
                RenderLayer::Marker,
                svg_element::Circle::new()
                    .set("cx", centre.x())
                    .set("cy", centre.y())
                    .set("r", MARKER_RADIUS)
                    .set("fill", &self.marker_color),
            );

            if self.show_labels {
                output.add_to_layer(
                    RenderLayer::Label,
                    svg_element::Text::new(placed.label())
                        .set("x", centre.x())
                        .set("y", centre.y() - MARKER_RADIUS - 0.5)
                        .set("font-size", LABEL_FONT_SIZE)
                        .set("font-family", "sans-serif")
                        .set("text-anchor", "middle")
                        .set("fill", &self.label_color),
                );
            }
        }

        let main_group = output.render().into_iter().fold(
            svg_element::Group::new().set(
                "transform",
                format!("translate({}, {})", self.padding, self.padding),
            ),
            |group, node| group.add(node),
        );

        Ok(Document::new()
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("width", format!("{width}mm"))
            .set("height", format!("{height}mm"))
            .set("data-face", panel.face().name())
            .add(main_group))
    }

    /// Writes a document to the configured output file.
    pub fn write_document(&self, doc: Document) -> Result<(), export::Error> {
        let Some(file_name) = &self.file_name else {
            return Err(export::Error::Render(
                "no output file configured for the SVG exporter".to_string(),
            ));
        };

        info!(file_name = file_name.as_str(); "Creating SVG file");
        let mut file = File::create(file_name).map_err(|err| {
            error!(file_name = file_name.as_str(), err:err; "Failed to create SVG file");
            export::Error::Io(err)
        })?;

        write!(file, "{doc}").map_err(|err| {
            error!(file_name = file_name.as_str(), err:err; "Failed to write SVG content");
            export::Error::Io(err)
        })
    }
}

impl export::Exporter for Svg {
    fn export_panel(&mut self, panel: &Panel) -> Result<(), export::Error> {
        let doc = self.render_panel(panel)?;
        debug!(placements = panel.placements().len(); "SVG document rendered");
        self.write_document(doc)
    }
}

/// Rectangle for `bounds`, given in panel coordinates.
fn rectangle(panel_length: f64, bounds: Bounds) -> svg_element::Rectangle {
    svg_element::Rectangle::new()
        .set("x", bounds.min_x())
        .set("y", panel_length - bounds.max_y())
        .set("width", bounds.width())
        .set("height", bounds.height())
}

/// Converts a panel point (Y up) to SVG coordinates (Y down).
fn flip(panel_length: f64, point: Point) -> Point {
    Point::new(point.x(), panel_length - point.y())
}

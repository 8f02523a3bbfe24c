//! Placing laid-out parts on an enclosure panel.
//!
//! The layout engine works in an origin-centred frame. A [`Panel`] records
//! placements in its own corner-based frame, where `(0, 0)` is the
//! bottom-left corner and `(width, length)` the top-right one.

use std::{fmt, rc::Rc};

use log::{debug, warn};
use serde::Deserialize;

use panelkit_core::{
    footprint::{FootprintKind, Footprints, Part},
    geometry::{Bounds, Point},
};

use crate::layout::{LayoutGroup, Placeable};

/// Outer dimensions of a panel, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSize {
    width: f64,
    length: f64,
    wall_thickness: f64,
    total_thickness: f64,
}

impl PanelSize {
    /// Creates a panel size whose total thickness equals the wall thickness.
    pub fn new(width: f64, length: f64, wall_thickness: f64) -> Self {
        Self {
            width,
            length,
            wall_thickness,
            total_thickness: wall_thickness,
        }
    }

    pub fn with_total_thickness(mut self, total_thickness: f64) -> Self {
        self.total_thickness = total_thickness;
        self
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn wall_thickness(&self) -> f64 {
        self.wall_thickness
    }

    pub fn total_thickness(&self) -> f64 {
        self.total_thickness
    }

    /// Converts an origin-centred position to the corner-based frame.
    pub fn abs_position(&self, relative: Point) -> Point {
        Point::new(self.width / 2.0 + relative.x(), self.length / 2.0 + relative.y())
    }

    /// Converts a corner-based position to the origin-centred frame.
    pub fn relative_position(&self, absolute: Point) -> Point {
        Point::new(absolute.x() - self.width / 2.0, absolute.y() - self.length / 2.0)
    }

    /// The panel rectangle in the corner-based frame.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(0.0, 0.0, self.width, self.length)
    }
}

/// Face of an enclosure a panel belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    #[default]
    Top,
    Bottom,
    Front,
    Back,
    Left,
    Right,
}

impl Face {
    pub fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Front => "front",
            Self::Back => "back",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Colour used for the panel outline when the style does not override it.
    pub fn default_color(self) -> &'static str {
        match self {
            Self::Top => "#577590",
            Self::Bottom => "#277da1",
            Self::Front => "#43aa8b",
            Self::Back => "#90be6d",
            Self::Left => "#f9844a",
            Self::Right => "#f9c74f",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where to put a part on a panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Origin-centred, as produced by the layout engine.
    Relative(Point),
    /// Corner-based.
    Absolute(Point),
}

/// A part positioned on a panel.
#[derive(Debug, Clone)]
pub struct PlacedPart {
    label: String,
    part: Rc<dyn Part>,
    position: Point,
}

impl PlacedPart {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn part(&self) -> &Rc<dyn Part> {
        &self.part
    }

    /// Corner-based position.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Footprints of the part at its corner-based position.
    pub fn footprints(&self) -> Footprints {
        let mut footprints = Footprints::from_part(self.part.as_ref());
        footprints.set_position(self.position);
        footprints
    }
}

/// One face of an enclosure and the parts placed on it.
#[derive(Debug, Clone)]
pub struct Panel {
    face: Face,
    size: PanelSize,
    placements: Vec<PlacedPart>,
}

impl Panel {
    pub fn new(face: Face, size: PanelSize) -> Self {
        Self {
            face,
            size,
            placements: Vec::new(),
        }
    }

    pub fn face(&self) -> Face {
        self.face
    }

    pub fn size(&self) -> &PanelSize {
        &self.size
    }

    /// Placements in insertion order.
    pub fn placements(&self) -> &[PlacedPart] {
        &self.placements
    }

    /// Places a part.
    ///
    /// A part whose outside footprint leaves the panel is still placed; the
    /// overflow is logged.
    pub fn add(
        &mut self,
        label: impl Into<String>,
        part: Rc<dyn Part>,
        placement: Placement,
    ) -> &mut Self {
        let position = match placement {
            Placement::Relative(relative) => self.size.abs_position(relative),
            Placement::Absolute(absolute) => absolute,
        };
        let placed = PlacedPart {
            label: label.into(),
            part,
            position,
        };

        let outside = placed.footprints().bounds(FootprintKind::Outside);
        let panel = self.size.bounds();
        if outside.min_x() < panel.min_x()
            || outside.min_y() < panel.min_y()
            || outside.max_x() > panel.max_x()
            || outside.max_y() > panel.max_y()
        {
            warn!(
                label = placed.label.as_str(),
                face = self.face.name(),
                x = position.x(),
                y = position.y();
                "Part overflows the panel"
            );
        }

        debug!(
            label = placed.label.as_str(),
            x = position.x(),
            y = position.y();
            "Placed part"
        );
        self.placements.push(placed);
        self
    }

    /// Places every leaf of `group` at its layout position.
    pub fn add_group(&mut self, group: &LayoutGroup) -> &mut Self {
        for element in group.get_elements() {
            if let Some(part) = element.part() {
                self.add(
                    element.label(),
                    Rc::clone(part),
                    Placement::Relative(element.position()),
                );
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use panelkit_core::{footprint::PartFootprint, geometry::Size};

    use super::*;
    use crate::layout::{LineOptions, PartEntry};

    fn button() -> Rc<dyn Part> {
        Rc::new(PartFootprint::new(Size::new(12.0, 12.0), Size::new(8.0, 8.0)))
    }

    #[test]
    fn test_panel_size_frames() {
        let size = PanelSize::new(100.0, 40.0, 2.0);
        assert_eq!(size.total_thickness(), 2.0);
        assert_eq!(size.with_total_thickness(5.0).total_thickness(), 5.0);

        let absolute = size.abs_position(Point::new(-10.0, 5.0));
        assert_eq!(absolute, Point::new(40.0, 25.0));
        assert_eq!(size.relative_position(absolute), Point::new(-10.0, 5.0));
    }

    #[test]
    fn test_add_relative_and_absolute() {
        let mut panel = Panel::new(Face::Front, PanelSize::new(100.0, 40.0, 2.0));
        panel
            .add("Centre", button(), Placement::Relative(Point::default()))
            .add("Corner", button(), Placement::Absolute(Point::new(10.0, 10.0)));

        let placements = panel.placements();
        assert_eq!(placements.len(), 2);
        assert_eq!(placements[0].label(), "Centre");
        assert_eq!(placements[0].position(), Point::new(50.0, 20.0));
        assert_eq!(placements[1].position(), Point::new(10.0, 10.0));
    }

    #[test]
    fn test_add_group_uses_leaf_positions() {
        let group = LayoutGroup::line_of_parts(
            [PartEntry::labeled("Play", button()), PartEntry::labeled("Stop", button())],
            &LineOptions::horizontal().with_margin(4.0),
        )
        .unwrap();

        let mut panel = Panel::new(Face::Top, PanelSize::new(60.0, 30.0, 2.0));
        panel.add_group(&group);

        let positions: Vec<Point> = panel.placements().iter().map(|p| p.position()).collect();
        assert_eq!(positions, vec![Point::new(22.0, 15.0), Point::new(38.0, 15.0)]);
    }

    #[test]
    fn test_overflowing_part_is_still_placed() {
        let mut panel = Panel::new(Face::Left, PanelSize::new(10.0, 10.0, 2.0));
        panel.add("Too big", button(), Placement::Relative(Point::default()));
        assert_eq!(panel.placements().len(), 1);
    }

    #[test]
    fn test_face_names_and_colors() {
        assert_eq!(Face::default(), Face::Top);
        assert_eq!(Face::Back.to_string(), "back");
        assert_eq!(Face::Right.default_color(), "#f9c74f");
    }
}

//! The [`Placeable`] contract and the [`LayoutNode`] tree node.

use panelkit_core::{
    footprint::{FootprintKind, Footprints},
    geometry::{Axis, Point},
};

use super::{LayoutElement, LayoutGroup};
use crate::panel::PanelSize;

/// Anything with footprints and a mutable position.
///
/// Positions are origin-centred panel coordinates. Mutators return
/// `&mut Self` so calls can be chained.
pub trait Placeable {
    /// Human-readable label.
    fn label(&self) -> &str;

    /// Current footprints, including the position.
    fn footprints(&self) -> &Footprints;

    /// Moves by a relative offset.
    fn translate(&mut self, delta: Point) -> &mut Self;

    /// Moves to an absolute position.
    fn move_to(&mut self, position: Point) -> &mut Self {
        let delta = position.sub_point(self.position());
        self.translate(delta)
    }

    /// Current position.
    fn position(&self) -> Point {
        self.footprints().position()
    }

    fn leftmost_point_in_footprint(&self, use_inside: bool) -> f64 {
        self.footprints().leftmost_point_in_footprint(use_inside)
    }

    fn rightmost_point_in_footprint(&self, use_inside: bool) -> f64 {
        self.footprints().rightmost_point_in_footprint(use_inside)
    }

    fn topmost_point_in_footprint(&self, use_inside: bool) -> f64 {
        self.footprints().topmost_point_in_footprint(use_inside)
    }

    fn bottommost_point_in_footprint(&self, use_inside: bool) -> f64 {
        self.footprints().bottommost_point_in_footprint(use_inside)
    }

    /// Moves along X so the centre of the `kind` footprint sits at `x = 0`.
    fn align_center_x(&mut self, kind: FootprintKind) -> &mut Self {
        self.align_center_on(Axis::X, kind)
    }

    /// Moves along Y so the centre of the `kind` footprint sits at `y = 0`.
    fn align_center_y(&mut self, kind: FootprintKind) -> &mut Self {
        self.align_center_on(Axis::Y, kind)
    }

    /// Moves so the centre of the `kind` footprint sits at the origin.
    fn align_center_to_origin(&mut self, kind: FootprintKind) -> &mut Self {
        let centre = self.footprints().bounds(kind).center();
        self.translate(centre.scale(-1.0))
    }

    #[doc(hidden)]
    fn align_center_on(&mut self, axis: Axis, kind: FootprintKind) -> &mut Self {
        let centre = self.footprints().bounds(kind).center().along(axis);
        self.translate(axis.point(-centre, 0.0))
    }

    /// Position in the panel's corner-based frame.
    fn abs_position(&self, panel: &PanelSize) -> Point {
        panel.abs_position(self.position())
    }
}

/// A child of a [`LayoutGroup`]: a leaf element or a nested group.
#[derive(Debug, Clone)]
pub enum LayoutNode {
    Element(LayoutElement),
    Group(LayoutGroup),
}

impl LayoutNode {
    /// Returns `true` for elements without a part.
    pub fn is_spacer(&self) -> bool {
        matches!(self, Self::Element(element) if element.is_spacer())
    }

    pub fn as_element(&self) -> Option<&LayoutElement> {
        match self {
            Self::Element(element) => Some(element),
            Self::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&LayoutGroup> {
        match self {
            Self::Element(_) => None,
            Self::Group(group) => Some(group),
        }
    }

    /// Leaves with a part, in packing order.
    pub fn get_elements(&self) -> Vec<&LayoutElement> {
        match self {
            Self::Element(element) if element.is_spacer() => Vec::new(),
            Self::Element(element) => vec![element],
            Self::Group(group) => group.get_elements(),
        }
    }
}

impl From<LayoutElement> for LayoutNode {
    fn from(element: LayoutElement) -> Self {
        Self::Element(element)
    }
}

impl From<LayoutGroup> for LayoutNode {
    fn from(group: LayoutGroup) -> Self {
        Self::Group(group)
    }
}

impl Placeable for LayoutNode {
    fn label(&self) -> &str {
        match self {
            Self::Element(element) => element.label(),
            Self::Group(group) => group.label(),
        }
    }

    fn footprints(&self) -> &Footprints {
        match self {
            Self::Element(element) => element.footprints(),
            Self::Group(group) => group.footprints(),
        }
    }

    fn translate(&mut self, delta: Point) -> &mut Self {
        match self {
            Self::Element(element) => {
                element.translate(delta);
            }
            Self::Group(group) => {
                group.translate(delta);
            }
        }
        self
    }

    fn move_to(&mut self, position: Point) -> &mut Self {
        match self {
            Self::Element(element) => {
                element.move_to(position);
            }
            Self::Group(group) => {
                group.move_to(position);
            }
        }
        self
    }
}

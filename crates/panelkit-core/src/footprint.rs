//! Footprint data model shared by layout elements and groups.
//!
//! A placeable item occupies two rectangles on a panel: the *inside*
//! footprint (board, screws and wiring behind the panel) and the *outside*
//! footprint (the visible face in front of it). Each rectangle has an offset
//! from the item's nominal position to its own centre, because many
//! connectors are not symmetric around their mounting point.
//!
//! # Overview
//!
//! - [`Part`]: the contract an external part catalog fulfils.
//! - [`PartFootprint`]: a plain-data [`Part`] that can be loaded from TOML.
//! - [`FootprintKind`]: selects which rectangle a query applies to.
//! - [`Footprints`]: position plus both rectangles and their offsets.

use std::fmt;

use serde::Deserialize;

use crate::geometry::{Axis, Bounds, Point, Size, Side};

/// Footprint metadata a part must expose to be laid out.
///
/// The outside footprint is assumed to be centred on the part's nominal
/// position; only the inside footprint may be off-centre.
pub trait Part: fmt::Debug {
    /// Space occupied behind the panel.
    fn inside_footprint(&self) -> Size;

    /// Space occupied in front of the panel.
    fn outside_footprint(&self) -> Size;

    /// Vector from the part's position to the centre of its inside footprint.
    fn inside_footprint_offset(&self) -> Point {
        Point::default()
    }
}

/// Footprint description of a catalog part.
///
/// # Examples
///
/// ```
/// use panelkit_core::footprint::{Part, PartFootprint};
/// use panelkit_core::geometry::{Point, Size};
///
/// let jack = PartFootprint::new(Size::new(16.0, 20.0), Size::new(12.0, 12.0))
///     .with_inside_offset(Point::new(0.0, 2.5));
/// assert_eq!(jack.inside_footprint_offset(), Point::new(0.0, 2.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PartFootprint {
    inside_footprint: Size,
    outside_footprint: Size,
    #[serde(default)]
    inside_footprint_offset: Point,
}

impl PartFootprint {
    /// Creates a footprint with a centred inside footprint.
    pub fn new(inside_footprint: Size, outside_footprint: Size) -> Self {
        Self {
            inside_footprint,
            outside_footprint,
            inside_footprint_offset: Point::default(),
        }
    }

    /// Sets the inside footprint offset (builder style).
    pub fn with_inside_offset(mut self, offset: Point) -> Self {
        self.inside_footprint_offset = offset;
        self
    }
}

impl Part for PartFootprint {
    fn inside_footprint(&self) -> Size {
        self.inside_footprint
    }

    fn outside_footprint(&self) -> Size {
        self.outside_footprint
    }

    fn inside_footprint_offset(&self) -> Point {
        self.inside_footprint_offset
    }
}

/// Which footprint rectangle a query or a packing pass refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FootprintKind {
    /// Space behind the panel.
    Inside,
    /// Space in front of the panel.
    Outside,
    /// Elementwise maximum of inside and outside, measured around the
    /// inside offset.
    Total,
}

impl FootprintKind {
    /// Maps the `use_inside` flag of the edge queries to a kind.
    pub fn from_use_inside(use_inside: bool) -> Self {
        if use_inside {
            Self::Inside
        } else {
            Self::Outside
        }
    }

    /// Returns a human-readable name for this kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Inside => "inside",
            Self::Outside => "outside",
            Self::Total => "total",
        }
    }
}

/// Position and footprints of a placeable item.
///
/// `total` is always the elementwise maximum of `inside` and `outside`; every
/// setter re-establishes it on the axis it touches.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Footprints {
    position: Point,
    inside: Size,
    outside: Size,
    total: Size,
    inside_offset: Point,
    outside_offset: Point,
}

impl Footprints {
    /// Creates footprints at the origin.
    pub fn new(inside: Size, outside: Size, inside_offset: Point, outside_offset: Point) -> Self {
        Self {
            position: Point::default(),
            inside,
            outside,
            total: inside.max(outside),
            inside_offset,
            outside_offset,
        }
    }

    /// Footprints of a part: outside offset starts at `(0, 0)`.
    pub fn from_part(part: &dyn Part) -> Self {
        Self::new(
            part.inside_footprint(),
            part.outside_footprint(),
            part.inside_footprint_offset(),
            Point::default(),
        )
    }

    /// Footprints where inside, outside and total are all `size`.
    pub fn uniform(size: Size) -> Self {
        Self::new(size, size, Point::default(), Point::default())
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn inside(&self) -> Size {
        self.inside
    }

    pub fn outside(&self) -> Size {
        self.outside
    }

    pub fn total(&self) -> Size {
        self.total
    }

    pub fn inside_offset(&self) -> Point {
        self.inside_offset
    }

    pub fn outside_offset(&self) -> Point {
        self.outside_offset
    }

    /// Returns the rectangle of the requested kind.
    pub fn footprint(&self, kind: FootprintKind) -> Size {
        match kind {
            FootprintKind::Inside => self.inside,
            FootprintKind::Outside => self.outside,
            FootprintKind::Total => self.total,
        }
    }

    /// Returns the offset of the requested kind; `Total` shares the inside offset.
    pub fn offset(&self, kind: FootprintKind) -> Point {
        match kind {
            FootprintKind::Inside | FootprintKind::Total => self.inside_offset,
            FootprintKind::Outside => self.outside_offset,
        }
    }

    /// World-space coordinate of one edge of a footprint:
    /// `position + offset ± footprint / 2` on the side's axis.
    pub fn edge(&self, kind: FootprintKind, side: Side) -> f64 {
        let axis = side.axis();
        self.position.along(axis)
            + self.offset(kind).along(axis)
            + side.sign() * self.footprint(kind).along(axis) / 2.0
    }

    /// World-space rectangle of a footprint.
    pub fn bounds(&self, kind: FootprintKind) -> Bounds {
        self.position
            .add_point(self.offset(kind))
            .to_bounds(self.footprint(kind))
    }

    pub fn leftmost_point_in_footprint(&self, use_inside: bool) -> f64 {
        self.edge(FootprintKind::from_use_inside(use_inside), Side::Left)
    }

    pub fn rightmost_point_in_footprint(&self, use_inside: bool) -> f64 {
        self.edge(FootprintKind::from_use_inside(use_inside), Side::Right)
    }

    pub fn topmost_point_in_footprint(&self, use_inside: bool) -> f64 {
        self.edge(FootprintKind::from_use_inside(use_inside), Side::Top)
    }

    pub fn bottommost_point_in_footprint(&self, use_inside: bool) -> f64 {
        self.edge(FootprintKind::from_use_inside(use_inside), Side::Bottom)
    }

    /// Moves to an absolute position.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Moves by a relative offset.
    pub fn translate(&mut self, delta: Point) {
        self.position = self.position.add_point(delta);
    }

    /// Replaces the inside footprint along one axis.
    pub fn set_inside_along(&mut self, axis: Axis, value: f64) {
        self.inside = self.inside.with_along(axis, value);
        self.refresh_total(axis);
    }

    /// Replaces the outside footprint along one axis.
    pub fn set_outside_along(&mut self, axis: Axis, value: f64) {
        self.outside = self.outside.with_along(axis, value);
        self.refresh_total(axis);
    }

    /// Replaces both footprints along one axis.
    pub fn set_both_along(&mut self, axis: Axis, value: f64) {
        self.inside = self.inside.with_along(axis, value);
        self.outside = self.outside.with_along(axis, value);
        self.refresh_total(axis);
    }

    fn refresh_total(&mut self, axis: Axis) {
        let max = self.inside.along(axis).max(self.outside.along(axis));
        self.total = self.total.with_along(axis, max);
    }
}

//! Packing parameters for the line factories.

use serde::Deserialize;

use panelkit_core::{footprint::FootprintKind, geometry::Axis};

/// Default gap between neighbouring nodes of a line, in millimetres.
pub const DEFAULT_MARGIN: f64 = 5.0;

/// Parameters of [`LayoutGroup::line_of_elements`].
///
/// Deserializes from a TOML table where every key is optional.
///
/// [`LayoutGroup::line_of_elements`]: super::LayoutGroup::line_of_elements
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LineOptions {
    /// Gap between consecutive footprints along the packing axis.
    pub margin: f64,
    /// Packs along X when `true`, along Y otherwise.
    pub horizontal: bool,
    /// Puts node positions at 0 on the cross axis instead of their footprint centres.
    pub align_other_dimension_at_0: bool,
    /// Sizes nodes by their outside footprint instead of the total one.
    pub align_to_outside_footprint: bool,
    /// Starts the line at the first node's outside footprint edge.
    pub align_start_to_outside_footprint: bool,
    /// Centres the packed extent on 0 along the packing axis.
    pub center_at_origin: bool,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            horizontal: true,
            align_other_dimension_at_0: false,
            align_to_outside_footprint: false,
            align_start_to_outside_footprint: false,
            center_at_origin: true,
        }
    }
}

impl LineOptions {
    /// Default options packing along X.
    pub fn horizontal() -> Self {
        Self::default()
    }

    /// Default options packing along Y.
    pub fn vertical() -> Self {
        Self {
            horizontal: false,
            ..Self::default()
        }
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_align_other_dimension_at_0(mut self, value: bool) -> Self {
        self.align_other_dimension_at_0 = value;
        self
    }

    pub fn with_align_to_outside_footprint(mut self, value: bool) -> Self {
        self.align_to_outside_footprint = value;
        self
    }

    pub fn with_align_start_to_outside_footprint(mut self, value: bool) -> Self {
        self.align_start_to_outside_footprint = value;
        self
    }

    pub fn with_center_at_origin(mut self, value: bool) -> Self {
        self.center_at_origin = value;
        self
    }

    /// Axis the line packs along.
    pub fn axis(&self) -> Axis {
        Axis::from_horizontal(self.horizontal)
    }

    /// Footprint used to size nodes and measure the packed extent.
    pub fn sizing_kind(&self) -> FootprintKind {
        if self.align_to_outside_footprint {
            FootprintKind::Outside
        } else {
            FootprintKind::Total
        }
    }
}

/// Parameters of [`LayoutGroup::fixed_width_line_of_elements`].
///
/// The margin is derived from the requested size, so there is no `margin`
/// field here.
///
/// [`LayoutGroup::fixed_width_line_of_elements`]: super::LayoutGroup::fixed_width_line_of_elements
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct FixedWidthOptions {
    pub horizontal: bool,
    /// Adds a margin before the first and after the last node.
    pub add_margin_on_sides: bool,
    pub align_other_dimension_at_0: bool,
    pub align_to_outside_footprint: bool,
    pub center_at_origin: bool,
}

impl Default for FixedWidthOptions {
    fn default() -> Self {
        Self {
            horizontal: true,
            add_margin_on_sides: true,
            align_other_dimension_at_0: false,
            align_to_outside_footprint: false,
            center_at_origin: true,
        }
    }
}

impl FixedWidthOptions {
    pub fn horizontal() -> Self {
        Self::default()
    }

    pub fn vertical() -> Self {
        Self {
            horizontal: false,
            ..Self::default()
        }
    }

    pub fn with_add_margin_on_sides(mut self, value: bool) -> Self {
        self.add_margin_on_sides = value;
        self
    }

    pub fn with_align_other_dimension_at_0(mut self, value: bool) -> Self {
        self.align_other_dimension_at_0 = value;
        self
    }

    pub fn with_align_to_outside_footprint(mut self, value: bool) -> Self {
        self.align_to_outside_footprint = value;
        self
    }

    pub fn with_center_at_origin(mut self, value: bool) -> Self {
        self.center_at_origin = value;
        self
    }

    /// Line options equivalent to these, with the given margin.
    pub fn line_options(&self, margin: f64) -> LineOptions {
        LineOptions {
            margin,
            horizontal: self.horizontal,
            align_other_dimension_at_0: self.align_other_dimension_at_0,
            align_to_outside_footprint: self.align_to_outside_footprint,
            align_start_to_outside_footprint: false,
            center_at_origin: self.center_at_origin,
        }
    }
}

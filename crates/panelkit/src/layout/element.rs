//! Leaf nodes of a layout.

use std::rc::Rc;

use panelkit_core::{
    footprint::{Footprints, Part},
    geometry::{Axis, Point, Size},
};
use uuid::Uuid;

use super::{LayoutError, Placeable};

/// Label given to spacers built with [`LayoutElement::spacer_x`] and
/// [`LayoutElement::spacer_y`].
pub const DEFAULT_SPACER_LABEL: &str = "Spacer";

/// A single placeable item: a part, or a spacer that only reserves room.
#[derive(Debug, Clone)]
pub struct LayoutElement {
    label: String,
    part: Option<Rc<dyn Part>>,
    footprints: Footprints,
}

impl LayoutElement {
    /// Creates an element from a part or, failing that, from a total footprint.
    ///
    /// With a part, every footprint is read from it and `total_footprint`
    /// is ignored. Without one the element is a spacer whose inside, outside
    /// and total footprints all equal `total_footprint`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConfiguration`] when neither a part nor a
    /// total footprint is given.
    pub fn new(
        label: impl Into<String>,
        part: Option<Rc<dyn Part>>,
        total_footprint: Option<Size>,
    ) -> Result<Self, LayoutError> {
        let label = label.into();
        match (part, total_footprint) {
            (Some(part), _) => Ok(Self::from_part(label, part)),
            (None, Some(size)) => Ok(Self::spacer(label, size)),
            (None, None) => Err(LayoutError::InvalidConfiguration(format!(
                "element `{label}` needs either a part or a total footprint"
            ))),
        }
    }

    /// Creates an element backed by `part`.
    pub fn from_part(label: impl Into<String>, part: Rc<dyn Part>) -> Self {
        let footprints = Footprints::from_part(part.as_ref());
        Self {
            label: label.into(),
            part: Some(part),
            footprints,
        }
    }

    /// Creates a spacer occupying `size` on both sides of the panel.
    pub fn spacer(label: impl Into<String>, size: Size) -> Self {
        Self {
            label: label.into(),
            part: None,
            footprints: Footprints::uniform(size),
        }
    }

    /// A spacer `size` wide and zero high.
    pub fn spacer_x(size: f64) -> Self {
        Self::spacer(DEFAULT_SPACER_LABEL, Size::new(size, 0.0))
    }

    /// A spacer `size` high and zero wide.
    pub fn spacer_y(size: f64) -> Self {
        Self::spacer(DEFAULT_SPACER_LABEL, Size::new(0.0, size))
    }

    /// Renames the element (builder style).
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn part(&self) -> Option<&Rc<dyn Part>> {
        self.part.as_ref()
    }

    /// Returns `true` when the element has no part.
    pub fn is_spacer(&self) -> bool {
        self.part.is_none()
    }

    pub fn set_inside_footprint_x(&mut self, value: f64) -> &mut Self {
        self.footprints.set_inside_along(Axis::X, value);
        self
    }

    pub fn set_inside_footprint_y(&mut self, value: f64) -> &mut Self {
        self.footprints.set_inside_along(Axis::Y, value);
        self
    }

    pub fn set_outside_footprint_x(&mut self, value: f64) -> &mut Self {
        self.footprints.set_outside_along(Axis::X, value);
        self
    }

    pub fn set_outside_footprint_y(&mut self, value: f64) -> &mut Self {
        self.footprints.set_outside_along(Axis::Y, value);
        self
    }

    /// Sets the width of both footprints.
    ///
    /// Handy for giving the neighbours of a centre element equal widths so
    /// the centre element stays on the origin.
    pub fn set_footprints_x(&mut self, value: f64) -> &mut Self {
        self.footprints.set_both_along(Axis::X, value);
        self
    }

    /// Sets the height of both footprints.
    pub fn set_footprints_y(&mut self, value: f64) -> &mut Self {
        self.footprints.set_both_along(Axis::Y, value);
        self
    }
}

impl Placeable for LayoutElement {
    fn label(&self) -> &str {
        &self.label
    }

    fn footprints(&self) -> &Footprints {
        &self.footprints
    }

    fn translate(&mut self, delta: Point) -> &mut Self {
        self.footprints.translate(delta);
        self
    }

    fn move_to(&mut self, position: Point) -> &mut Self {
        self.footprints.set_position(position);
        self
    }
}

/// A part waiting to become a [`LayoutElement`], optionally labelled.
#[derive(Debug, Clone)]
pub struct PartEntry {
    label: Option<String>,
    part: Rc<dyn Part>,
}

impl PartEntry {
    pub fn labeled(label: impl Into<String>, part: Rc<dyn Part>) -> Self {
        Self {
            label: Some(label.into()),
            part,
        }
    }

    /// An entry that receives a random unique label.
    pub fn unlabeled(part: Rc<dyn Part>) -> Self {
        Self { label: None, part }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Converts into an element, generating a v4 UUID label when none was set.
    pub fn into_element(self) -> LayoutElement {
        let label = self
            .label
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        LayoutElement::from_part(label, self.part)
    }
}

impl From<Rc<dyn Part>> for PartEntry {
    fn from(part: Rc<dyn Part>) -> Self {
        Self::unlabeled(part)
    }
}

impl<S: Into<String>> From<(S, Rc<dyn Part>)> for PartEntry {
    fn from((label, part): (S, Rc<dyn Part>)) -> Self {
        Self::labeled(label, part)
    }
}

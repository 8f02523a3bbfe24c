//! Footprint-aware layout engine.
//!
//! Elements are packed along a line, across a fixed width, or in a grid. The
//! engine never touches geometry: it only moves footprint rectangles around
//! and records the resulting positions, which callers hand to a [`Panel`].
//!
//! # Overview
//!
//! - [`LayoutElement`]: a single part (or spacer) with its footprints.
//! - [`LayoutGroup`]: a packed sequence of nodes with aggregated footprints.
//! - [`LayoutNode`]: either of the above, as stored inside a group.
//! - [`Placeable`]: the position and edge queries all three share.
//! - [`LineOptions`] / [`FixedWidthOptions`]: packing parameters.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//!
//! use panelkit::layout::{LayoutGroup, LineOptions, PartEntry, Placeable};
//! use panelkit_core::footprint::{Part, PartFootprint};
//! use panelkit_core::geometry::Size;
//!
//! let button: Rc<dyn Part> = Rc::new(PartFootprint::new(Size::new(12.0, 12.0), Size::new(8.0, 8.0)));
//! let line = LayoutGroup::line_of_parts(
//!     [
//!         PartEntry::labeled("Play", Rc::clone(&button)),
//!         PartEntry::labeled("Stop", Rc::clone(&button)),
//!     ],
//!     &LineOptions::horizontal().with_margin(4.0),
//! )
//! .unwrap();
//!
//! let positions: Vec<f64> = line.get_elements().iter().map(|e| e.position().x()).collect();
//! assert_eq!(positions, vec![-8.0, 8.0]);
//! ```
//!
//! [`Panel`]: crate::panel::Panel

mod element;
mod group;
mod node;
mod options;

pub use element::{DEFAULT_SPACER_LABEL, LayoutElement, PartEntry};
pub use group::{Extreme, LayoutGroup};
pub use node::{LayoutNode, Placeable};
pub use options::{DEFAULT_MARGIN, FixedWidthOptions, LineOptions};

use thiserror::Error;

/// Errors raised synchronously by element construction and the packing factories.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// An element was built with neither a part nor an explicit footprint.
    #[error("Invalid layout configuration: {0}")]
    InvalidConfiguration(String),

    /// A line or grid factory received nothing to lay out.
    #[error("Empty layout input: {0}")]
    EmptyInput(String),
}

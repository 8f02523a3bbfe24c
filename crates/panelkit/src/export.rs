//! Export of placed panels.
//!
//! This module provides the [`Exporter`] trait that turns a [`Panel`] into
//! an output file. It is the last stage of the pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Layout document (TOML)
//!     ↓ parse
//! LayoutDocument
//!     ↓ build (catalog + layout factories)
//! Panel with placements
//!     ↓ export (this module)
//! Output file
//! ```
//!
//! # Available Backends
//!
//! - [`svg`]: SVG debug view via [`svg::SvgBuilder`] and [`svg::Svg`]
//!
//! [`Panel`]: crate::panel::Panel

/// SVG export backend.
pub mod svg;

use crate::panel::Panel;

/// Abstraction for panel export backends.
pub trait Exporter {
    /// Exports a panel and its placements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the panel cannot be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export_panel(&mut self, panel: &Panel) -> Result<(), Error>;
}

/// Errors that can occur during export.
///
/// Converted into [`PanelkitError::Export`] at the crate boundary.
///
/// [`PanelkitError::Export`]: crate::PanelkitError::Export
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

//! Error types for panelkit operations.
//!
//! [`PanelkitError`] is the top-level error returned by [`LayoutBuilder`]. It
//! wraps the error of each stage: document parsing, part lookup, layout and
//! export.
//!
//! [`LayoutBuilder`]: crate::LayoutBuilder

use std::io;

use thiserror::Error;

use crate::{catalog::CatalogError, document::DocumentError, layout::LayoutError};

/// The main error type for panelkit operations.
///
/// # Diagnostic Variants
///
/// [`DocumentError::Parse`] keeps the document source next to the TOML error
/// so front ends can point at the offending span.
#[derive(Debug, Error)]
pub enum PanelkitError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("{0}")]
    Document(#[from] DocumentError),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<crate::export::Error> for PanelkitError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

//! Error adapter for converting PanelkitError to miette diagnostics.
//!
//! Document parse errors keep the TOML source, so the report points at the
//! offending span. Every other error is reported with a stable code only.

use std::fmt;

use miette::{Diagnostic, LabeledSpan, SourceSpan};

use panelkit::{DocumentError, PanelkitError};

/// Wraps a [`PanelkitError`] for rendering with miette.
pub struct ErrorAdapter<'a>(pub &'a PanelkitError);

impl ErrorAdapter<'_> {
    fn parse_error(&self) -> Option<(&toml::de::Error, &String)> {
        match self.0 {
            PanelkitError::Document(DocumentError::Parse { err, src }) => Some((err, src)),
            _ => None,
        }
    }
}

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl Diagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            PanelkitError::Io(_) => "panelkit::io",
            PanelkitError::Layout(_) => "panelkit::layout",
            PanelkitError::Catalog(_) => "panelkit::catalog",
            PanelkitError::Document(_) => "panelkit::document",
            PanelkitError::Export(_) => "panelkit::export",
            PanelkitError::Config(_) => "panelkit::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            PanelkitError::Catalog(_) => "declare the part type in a `[[parts]]` table",
            PanelkitError::Document(DocumentError::InvalidPanel(_)) => {
                "panel dimensions must be positive numbers"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.parse_error()
            .map(|(_, src)| src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let (err, _) = self.parse_error()?;
        let range = err.span()?;
        let span = SourceSpan::from(range.start..range.end);
        let label = LabeledSpan::new_primary_with_span(Some(err.message().to_string()), span);
        Some(Box::new(std::iter::once(label)))
    }
}

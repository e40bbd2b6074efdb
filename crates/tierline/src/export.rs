//! Export of laid-out diagrams.
//!
//! ```text
//! StaticDiagramView
//!     ↓ render
//! Diagram (node tree)
//!     ↓ layout
//! LayoutBox tree
//!     ↓ export (this module)
//! SVG document / text outline
//! ```
//!
//! # Available Backends
//!
//! - [`svg`]: SVG output via [`svg::SvgRenderer`]
//! - [`outline`]: indented plain-text dump of the laid-out tree
//!
//! Export operations return [`Error`], which converts into
//! [`TierlineError::Export`](crate::TierlineError::Export).

pub mod outline;
pub mod svg;

use crate::layout::LayoutBox;

/// Abstraction for diagram export backends.
pub trait Exporter {
    /// Converts a laid-out diagram to the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the layout cannot be represented in the
    /// target format.
    fn export(&self, layout: &LayoutBox<'_>) -> Result<String, Error>;
}

/// Errors that can occur during diagram export.
#[derive(Debug)]
pub enum Error {
    /// A rendering failure described by `message`.
    Render(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

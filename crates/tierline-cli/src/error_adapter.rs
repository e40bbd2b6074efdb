//! Error adapter for converting TierlineError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use tierline::TierlineError;

/// Adapter rendering a [`TierlineError`] as a miette diagnostic.
pub struct ErrorAdapter<'a>(pub &'a TierlineError);

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

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            TierlineError::Io(_) => "tierline::io",
            TierlineError::Config(_) => "tierline::config",
            TierlineError::Export(_) => "tierline::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            TierlineError::Io(_) => "check that the output directory exists and is writable",
            TierlineError::Config(_) => {
                "check the [layout] and [style] sections of the configuration file"
            }
            TierlineError::Export(_) => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Wrap a [`TierlineError`] for rendering with a miette report handler.
pub fn to_reportable(err: &TierlineError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}

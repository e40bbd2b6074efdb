//! Error types for Tierline operations.

use std::io;

use thiserror::Error;

/// The main error type for Tierline operations.
#[derive(Debug, Error)]
pub enum TierlineError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(#[from] crate::export::Error),
}

//! CLI logic for the Tierline diagram tool.
//!
//! Renders the fixed three-tier architecture diagram and writes it to disk.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, OutputFormat};

use std::fs;

use log::info;

use tierline::{DiagramRenderer, TierlineError};

/// Run the Tierline CLI application
///
/// Loads the configuration, renders the diagram in the requested format
/// and writes the result to the output file.
///
/// # Errors
///
/// Returns `TierlineError` for:
/// - Configuration loading errors
/// - Rendering errors
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), TierlineError> {
    info!(
        output_path = args.output,
        format:? = args.format;
        "Rendering diagram"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let renderer = DiagramRenderer::new(app_config);
    let output = renderer.render(args.format.into())?;

    fs::write(&args.output, output)?;

    info!(output_file = args.output; "Diagram exported successfully");

    Ok(())
}

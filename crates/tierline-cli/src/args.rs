//! Command-line argument definitions for the Tierline CLI.
//!
//! The diagram itself is fixed, so arguments only choose where the output
//! goes, in which format, with which configuration file and how verbosely.

use clap::{Parser, ValueEnum};

use tierline::Format;

/// Output formats selectable on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// SVG document
    #[default]
    Svg,
    /// Indented text outline of the laid-out tree
    Outline,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Svg => Format::Svg,
            OutputFormat::Outline => Format::Outline,
        }
    }
}

/// Command-line arguments for the Tierline diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the output file
    #[arg(short, long, default_value = "tierline.svg")]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Svg)]
    pub format: OutputFormat,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["tierline"]);
        assert_eq!(args.output, "tierline.svg");
        assert_eq!(args.format, OutputFormat::Svg);
        assert!(args.config.is_none());
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_outline_format() {
        let args = Args::parse_from(["tierline", "--format", "outline", "-o", "tree.txt"]);
        assert_eq!(args.format, OutputFormat::Outline);
        assert_eq!(Format::from(args.format), Format::Outline);
        assert_eq!(args.output, "tree.txt");
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Args::try_parse_from(["tierline", "--format", "png"]).is_err());
    }
}

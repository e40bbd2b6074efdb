//! Plain-text outline export.
//!
//! Writes one line per laid-out node, indented by depth:
//!
//! ```text
//! diagram "Azure Three-Tier Web Application Architecture" [0, 0, 1024x2310]
//!   header "Azure Three-Tier Web Application Architecture" (High Availability | ...) [...]
//!   canvas [...]
//!     endpoint "Internet" (End Users) <globe> [...]
//! ```

use std::fmt::Write;

use crate::{
    export::{self, Exporter},
    layout::LayoutBox,
};

/// Exports the layout tree as an indented outline.
#[derive(Debug, Clone, Copy)]
pub struct Outline {
    indent: usize,
    bounds: bool,
}

impl Default for Outline {
    fn default() -> Self {
        Self {
            indent: 2,
            bounds: true,
        }
    }
}

impl Outline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spaces per nesting level.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Whether to append each node's bounds.
    pub fn with_bounds(mut self, bounds: bool) -> Self {
        self.bounds = bounds;
        self
    }

    fn write_box(
        &self,
        out: &mut String,
        layout: &LayoutBox<'_>,
        depth: usize,
    ) -> std::fmt::Result {
        let node = layout.node();
        write!(out, "{:width$}{}", "", node.kind().name(), width = depth * self.indent)?;
        if !node.label().is_empty() {
            write!(out, " {:?}", node.label())?;
        }
        if let Some(caption) = node.caption() {
            write!(out, " ({caption})")?;
        }
        if let Some(icon) = node.icon() {
            write!(out, " <{icon}>")?;
        }
        if self.bounds {
            let bounds = layout.bounds();
            write!(
                out,
                " [{:.0}, {:.0}, {:.0}x{:.0}]",
                bounds.min_x(),
                bounds.min_y(),
                bounds.width(),
                bounds.height()
            )?;
        }
        out.push('\n');

        for child in layout.children() {
            self.write_box(out, child, depth + 1)?;
        }
        Ok(())
    }
}

impl Exporter for Outline {
    fn export(&self, layout: &LayoutBox<'_>) -> Result<String, export::Error> {
        let mut out = String::new();
        self.write_box(&mut out, layout, 0)
            .map_err(|err| export::Error::Render(err.to_string()))?;
        Ok(out)
    }
}

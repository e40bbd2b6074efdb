//! Drawable primitives for diagram rendering.
//!
//! All drawable elements implement the [`Drawable`] trait, which renders to a
//! [`LayeredOutput`] and reports the element's size.
//!
//! # Layer-Based Rendering
//!
//! Drawables render to one or more [`RenderLayer`]s, which are ordered during
//! final SVG generation so that text always lands above the surface it
//! annotates, regardless of the order in which elements were drawn.

mod layer;
mod panel;
mod stroke;
mod text;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use panel::{GradientDirection, Paint, Panel};
pub use stroke::StrokeDefinition;
pub use text::{FontWeight, Text, TextAnchor, TextDefinition};

use crate::geometry::{Point, Size};

/// Trait for drawable diagram elements that can be rendered to SVG layers.
pub trait Drawable: std::fmt::Debug {
    /// Renders this drawable to one or more layers.
    ///
    /// # Arguments
    ///
    /// * `position` - The anchor point of the drawable. Panels and centered
    ///   text use their center, start-anchored text uses its left edge.
    fn render_to_layers(&self, position: Point) -> LayeredOutput;

    /// Returns the size of this drawable.
    fn size(&self) -> Size;
}

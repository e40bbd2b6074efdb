//! Borders of diagram surfaces.
//!
//! Every border in a Tierline diagram is a solid line. [`StrokeDefinition`]
//! pairs its color with a width, and [`apply_stroke!`](crate::apply_stroke!)
//! writes both onto an SVG element as `stroke`, `stroke-opacity` and
//! `stroke-width`.

use crate::color::Color;

/// Color and width of a solid border.
///
/// # Examples
///
/// ```
/// use tierline_core::draw::StrokeDefinition;
/// use tierline_core::color::Color;
///
/// let stroke = StrokeDefinition::solid(Color::new("#4ade80").unwrap(), 4.0);
/// assert_eq!(stroke.width(), 4.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
}

impl StrokeDefinition {
    pub fn solid(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// # Examples
///
/// ```
/// use tierline_core::draw::StrokeDefinition;
/// use tierline_core::color::Color;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::solid(Color::new("#93c5fd").unwrap(), 4.0);
/// let rect = svg_element::Rectangle::new()
///     .set("width", 100)
///     .set("height", 50);
///
/// let rect = tierline_core::apply_stroke!(rect, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {
        $element
            .set("stroke", $stroke.color().opaque().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
    };
}

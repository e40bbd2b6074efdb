//! Rounded rectangular surfaces.
//!
//! A [`Panel`] is the single surface primitive of a Tierline diagram: page
//! background, section boxes, badges, chips and legend swatches are all
//! panels with different [`Paint`], stroke and corner radius.

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Point, Size},
};

/// Direction of a linear gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradientDirection {
    /// Left to right
    ToRight,
    /// Top to bottom
    ToBottom,
    /// Top-left to bottom-right
    ToBottomRight,
}

impl GradientDirection {
    /// Returns the `(x1, y1, x2, y2)` gradient vector in bounding-box units.
    pub fn vector(self) -> (f32, f32, f32, f32) {
        match self {
            Self::ToRight => (0.0, 0.0, 1.0, 0.0),
            Self::ToBottom => (0.0, 0.0, 0.0, 1.0),
            Self::ToBottomRight => (0.0, 0.0, 1.0, 1.0),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::ToRight => "r",
            Self::ToBottom => "b",
            Self::ToBottomRight => "br",
        }
    }
}

/// How the interior of a surface is filled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Solid(Color),
    Gradient {
        from: Color,
        to: Color,
        direction: GradientDirection,
    },
}

impl Paint {
    /// Returns the SVG id of the gradient definition this paint refers to, if any.
    ///
    /// The id is derived from the colors and direction alone, so two
    /// identical gradients share one definition.
    pub fn gradient_id(&self) -> Option<String> {
        match self {
            Self::Solid(_) => None,
            Self::Gradient {
                from,
                to,
                direction,
            } => Some(format!(
                "grad-{}-{}-{}",
                direction.name(),
                from.id_fragment(),
                to.id_fragment()
            )),
        }
    }

    /// Renders the `linearGradient` element for gradient paints.
    pub fn gradient_definition(&self) -> Option<svg_element::LinearGradient> {
        let id = self.gradient_id()?;
        let Self::Gradient {
            from,
            to,
            direction,
        } = self
        else {
            return None;
        };
        let (x1, y1, x2, y2) = direction.vector();

        let stop = |offset: &str, color: &Color| {
            svg_element::Stop::new()
                .set("offset", offset)
                .set("stop-color", color.opaque().to_string())
                .set("stop-opacity", color.alpha())
        };

        Some(
            svg_element::LinearGradient::new()
                .set("id", id)
                .set("x1", x1)
                .set("y1", y1)
                .set("x2", x2)
                .set("y2", y2)
                .add(stop("0", from))
                .add(stop("1", to)),
        )
    }

    /// Returns the `(fill, fill-opacity)` attribute values for this paint.
    fn fill_attributes(&self) -> (String, f32) {
        match self {
            Self::Solid(color) => (color.opaque().to_string(), color.alpha()),
            Self::Gradient { .. } => {
                let id = self.gradient_id().unwrap_or_default();
                (format!("url(#{id})"), 1.0)
            }
        }
    }
}

/// A rounded rectangle with optional fill, border and drop shadow.
///
/// # Examples
///
/// ```
/// # use tierline_core::draw::{Drawable, Paint, Panel};
/// # use tierline_core::color::Color;
/// # use tierline_core::geometry::{Point, Size};
/// let panel = Panel::new(Size::new(120.0, 40.0))
///     .with_fill(Paint::Solid(Color::new("white").unwrap()))
///     .with_corner_radius(8.0);
///
/// let output = panel.render_to_layers(Point::new(60.0, 20.0));
/// assert!(!output.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Panel {
    size: Size,
    fill: Option<Paint>,
    stroke: Option<StrokeDefinition>,
    corner_radius: f32,
    shadow: bool,
    layer: RenderLayer,
}

impl Panel {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            fill: None,
            stroke: None,
            corner_radius: 0.0,
            shadow: false,
            layer: RenderLayer::Surface,
        }
    }

    pub fn with_fill(mut self, fill: Paint) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_optional_fill(mut self, fill: Option<Paint>) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_stroke(mut self, stroke: Option<StrokeDefinition>) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn with_shadow(mut self, shadow: bool) -> Self {
        self.shadow = shadow;
        self
    }

    /// Places the panel on a layer other than [`RenderLayer::Surface`].
    pub fn on_layer(mut self, layer: RenderLayer) -> Self {
        self.layer = layer;
        self
    }

    pub fn fill(&self) -> Option<&Paint> {
        self.fill.as_ref()
    }

    fn rect(&self, min: Point) -> svg_element::Rectangle {
        svg_element::Rectangle::new()
            .set("x", min.x())
            .set("y", min.y())
            .set("width", self.size.width())
            .set("height", self.size.height())
            .set("rx", self.corner_radius)
    }
}

impl Drawable for Panel {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let min = position.to_bounds(self.size).min_point();

        if self.shadow {
            let shadow = self
                .rect(min.add_point(Point::new(0.0, 4.0)))
                .set("fill", "black")
                .set("fill-opacity", 0.08);
            output.add_to_layer(self.layer, Box::new(shadow));
        }

        let mut rect = self.rect(min);
        rect = match &self.fill {
            Some(paint) => {
                let (fill, opacity) = paint.fill_attributes();
                rect.set("fill", fill).set("fill-opacity", opacity)
            }
            None => rect.set("fill", "none"),
        };
        if let Some(stroke) = &self.stroke {
            rect = crate::apply_stroke!(rect, stroke);
        }

        output.add_to_layer(self.layer, Box::new(rect));
        output
    }

    fn size(&self) -> Size {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient() -> Paint {
        Paint::Gradient {
            from: Color::new("#3b82f6").unwrap(),
            to: Color::new("#2563eb").unwrap(),
            direction: GradientDirection::ToRight,
        }
    }

    #[test]
    fn test_solid_paint_has_no_gradient() {
        let paint = Paint::Solid(Color::new("white").unwrap());
        assert!(paint.gradient_id().is_none());
        assert!(paint.gradient_definition().is_none());
    }

    #[test]
    fn test_gradient_id_is_stable() {
        assert_eq!(gradient().gradient_id(), gradient().gradient_id());

        let id = gradient().gradient_id().unwrap();
        assert!(id.starts_with("grad-r-"));
        assert!(id.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-'));
    }

    #[test]
    fn test_gradient_direction_changes_id() {
        let Paint::Gradient { from, to, .. } = gradient() else {
            unreachable!()
        };
        let vertical = Paint::Gradient {
            from,
            to,
            direction: GradientDirection::ToBottom,
        };
        assert_ne!(gradient().gradient_id(), vertical.gradient_id());
    }

    #[test]
    fn test_panel_gradient_fill_references_definition() {
        let panel = Panel::new(Size::new(10.0, 10.0)).with_fill(gradient());
        let id = gradient().gradient_id().unwrap();

        let rendered: String = panel
            .render_to_layers(Point::new(5.0, 5.0))
            .render()
            .into_iter()
            .map(|node| node.to_string())
            .collect();

        assert!(rendered.contains(&format!("url(#{id})")));
    }

    #[test]
    fn test_panel_shadow_adds_node() {
        let plain = Panel::new(Size::new(10.0, 10.0));
        let shadowed = Panel::new(Size::new(10.0, 10.0)).with_shadow(true);

        assert_eq!(plain.render_to_layers(Point::default()).len(), 1);
        assert_eq!(shadowed.render_to_layers(Point::default()).len(), 2);
    }

    #[test]
    fn test_panel_without_fill_is_transparent() {
        let panel = Panel::new(Size::new(10.0, 10.0));
        assert!(panel.fill().is_none());

        let rendered: String = panel
            .render_to_layers(Point::default())
            .render()
            .into_iter()
            .map(|node| node.to_string())
            .collect();
        assert!(rendered.contains("fill=\"none\""));
    }
}

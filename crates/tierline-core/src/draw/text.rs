//! Text rendering definitions for diagram labels and content.
//!
//! - [`TextDefinition`] - Reusable text style configuration
//! - [`Text`] - A renderable text element combining content with a [`TextDefinition`]
//!
//! # Quick Start
//!
//! ```
//! # use tierline_core::draw::{FontWeight, Text, TextDefinition};
//! let mut style = TextDefinition::new();
//! style.set_font_size(14);
//! style.set_weight(FontWeight::Bold);
//!
//! let text = Text::new(&style, "WEB TIER");
//! let size = text.calculate_size();
//! assert!(size.height() > 0.0);
//! ```
//!
//! Text sizes are measured with cosmic-text against the fonts available on
//! the host. When no font can shape the content, the width falls back to an
//! estimate proportional to the character count.

use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Weight};
use log::info;
use svg::{self, node::Text as SvgText, node::element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Point, Size},
};

/// Font weight of a text element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Semibold,
    Bold,
}

impl FontWeight {
    /// Returns the CSS `font-weight` value.
    pub fn to_svg_value(self) -> u16 {
        match self {
            Self::Normal => 400,
            Self::Semibold => 600,
            Self::Bold => 700,
        }
    }
}

/// Horizontal anchoring of a text element relative to its position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    /// The position is the left edge of the text block
    Start,
    /// The position is the horizontal center of the text block
    #[default]
    Middle,
}

impl TextAnchor {
    fn to_svg_value(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
        }
    }
}

/// Defines the visual style for text elements in diagrams.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"Arial"` |
/// | Font size | `14` |
/// | Weight | Normal |
/// | Anchor | Middle |
/// | Text color | `None` (SVG default, black) |
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    weight: FontWeight,
    anchor: TextAnchor,
    color: Option<Color>,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in points.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the font family (e.g., "Arial", "Helvetica", "sans-serif").
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    pub fn set_weight(&mut self, weight: FontWeight) {
        self.weight = weight;
    }

    pub fn set_anchor(&mut self, anchor: TextAnchor) {
        self.anchor = anchor;
    }

    /// Sets the text color. `None` keeps the SVG default (black).
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }

    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size: 14,
            weight: FontWeight::Normal,
            anchor: TextAnchor::Middle,
            color: None,
        }
    }
}

/// A renderable text element combining content with styling.
///
/// Multi-line content is split on `\n` and rendered as one `<tspan>` per line.
///
/// # Examples
///
/// ```
/// # use tierline_core::draw::{TextDefinition, Text};
/// let style = TextDefinition::new();
/// let text = Text::new(&style, "Azure Bastion");
///
/// assert!(text.calculate_size().height() > 0.0);
/// assert_eq!(text.content(), "Azure Bastion");
/// ```
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
}

impl<'a> Text<'a> {
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
        }
    }

    /// Returns the text content of this element.
    pub fn content(&self) -> &str {
        self.content
    }

    /// Measures the rendered size of this text.
    pub fn calculate_size(&self) -> Size {
        TEXT_MANAGER
            .get_or_init(TextManager::new)
            .calculate_text_size(self.content, self.definition)
    }
}

impl<'a> Drawable for Text<'a> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let lines: Vec<&str> = self.content.lines().collect();
        if lines.is_empty() {
            return output;
        }

        let text_size = self.calculate_size();
        let line_height = text_size.height() / lines.len() as f32;
        let y_offset = -(text_size.height() + line_height) / 2.0;
        let x = position.x();

        let mut rendered_text = svg_element::Text::new("")
            .set("x", x)
            .set("y", position.y() + y_offset)
            .set("text-anchor", self.definition.anchor().to_svg_value())
            .set("dominant-baseline", "central")
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size())
            .set("font-weight", self.definition.weight().to_svg_value());

        if let Some(color) = self.definition.color() {
            rendered_text = rendered_text
                .set("fill", color.opaque().to_string())
                .set("fill-opacity", color.alpha());
        }

        for line in lines {
            let tspan = svg_element::TSpan::new("")
                .set("x", x)
                .set("dy", line_height)
                .add(SvgText::new(line));
            rendered_text = rendered_text.add(tspan);
        }

        output.add_to_layer(RenderLayer::Text, Box::new(rendered_text));
        output
    }

    fn size(&self) -> Size {
        self.calculate_size()
    }
}

/// Text measurement backed by a shared cosmic-text [`FontSystem`].
struct TextManager {
    font_system: Arc<Mutex<FontSystem>>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Arc::new(Mutex::new(FontSystem::new())),
        }
    }

    /// Calculate the size of text in pixels using real font metrics and shaping.
    fn calculate_text_size(&self, text: &str, text_def: &TextDefinition) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let mut font_system = self
            .font_system
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        // Points to pixels at standard DPI
        let font_size_px = text_def.font_size() as f32 * 1.33;
        let line_height = font_size_px * 1.15;
        let metrics = Metrics::new(font_size_px, line_height);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let weight = Weight(text_def.weight().to_svg_value());
        let attrs = Attrs::new()
            .family(Family::Name(text_def.font_family()))
            .weight(weight);

        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;

        for run in buffer.layout_runs() {
            if let Some(last) = run.glyphs.last() {
                max_width = max_width.max(last.x + last.w);
            }
            total_height += metrics.line_height;
        }

        // Hosts without usable fonts shape no glyphs
        let line_count = text.lines().count().max(1);
        if max_width == 0.0 {
            let longest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
            max_width = longest as f32 * font_size_px * 0.55;
        }
        total_height = total_height.max(line_count as f32 * metrics.line_height);

        Size::new(max_width, total_height)
    }
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_text_definition_defaults() {
        let def = TextDefinition::new();
        assert_eq!(def.font_size(), 14);
        assert_eq!(def.font_family(), "Arial");
        assert_eq!(def.weight(), FontWeight::Normal);
        assert_eq!(def.anchor(), TextAnchor::Middle);
        assert!(def.color().is_none());
    }

    #[test]
    fn test_text_definition_setters() {
        let mut def = TextDefinition::new();
        def.set_font_size(24);
        def.set_font_family("Helvetica");
        def.set_weight(FontWeight::Bold);
        def.set_anchor(TextAnchor::Start);
        def.set_color(Some(Color::new("navy").unwrap()));

        assert_eq!(def.font_size(), 24);
        assert_eq!(def.font_family(), "Helvetica");
        assert_eq!(def.weight(), FontWeight::Bold);
        assert_eq!(def.anchor(), TextAnchor::Start);
        assert!(def.color().is_some());
    }

    #[test]
    fn test_font_weight_values() {
        assert_eq!(FontWeight::Normal.to_svg_value(), 400);
        assert_eq!(FontWeight::Semibold.to_svg_value(), 600);
        assert_eq!(FontWeight::Bold.to_svg_value(), 700);
    }

    #[test]
    fn test_text_calculate_size_empty() {
        let def = TextDefinition::new();
        let size = Text::new(&def, "").calculate_size();
        assert_approx_eq!(f32, size.width(), 0.0);
        assert_approx_eq!(f32, size.height(), 0.0);
    }

    #[test]
    fn test_text_calculate_size_single_line() {
        let def = TextDefinition::new();
        let size = Text::new(&def, "Internal Load Balancer").calculate_size();
        assert!(size.width() > 0.0, "Width should be positive");
        assert!(size.height() > 0.0, "Height should be positive");
    }

    #[test]
    fn test_text_calculate_size_multiline() {
        let def = TextDefinition::new();
        let single = Text::new(&def, "Line 1").calculate_size();
        let multi = Text::new(&def, "Line 1\nLine 2\nLine 3").calculate_size();

        assert!(
            multi.height() > single.height(),
            "Multi-line text ({}) should be taller than single line ({})",
            multi.height(),
            single.height()
        );
    }

    #[test]
    fn test_text_calculate_size_larger_font() {
        let mut small_def = TextDefinition::new();
        small_def.set_font_size(12);
        let mut large_def = TextDefinition::new();
        large_def.set_font_size(24);

        let small = Text::new(&small_def, "Test").calculate_size();
        let large = Text::new(&large_def, "Test").calculate_size();

        assert!(large.height() > small.height());
    }

    #[test]
    fn test_text_render_start_anchor() {
        let mut def = TextDefinition::new();
        def.set_anchor(TextAnchor::Start);
        def.set_color(Some(Color::new("white").unwrap()));

        let rendered: String = Text::new(&def, "Internet")
            .render_to_layers(Point::new(10.0, 10.0))
            .render()
            .into_iter()
            .map(|node| node.to_string())
            .collect();

        assert!(rendered.contains("text-anchor=\"start\""));
        assert!(rendered.contains("Internet"));
        assert!(rendered.contains("data-layer=\"text\""));
    }

    #[test]
    fn test_text_render_empty_is_empty() {
        let def = TextDefinition::new();
        assert!(Text::new(&def, "").render_to_layers(Point::default()).is_empty());
    }
}

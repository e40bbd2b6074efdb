//! Styling collaborator: semantic style tokens resolved to visual properties.
//!
//! Diagram content never names concrete colors. It asks for a [`StyleToken`],
//! a [`Role`] (what the element is) paired with a [`Tone`] (which hue family
//! it belongs to), and a [`StyleResolver`] answers with [`VisualProps`].
//!
//! [`Theme`] is the default resolver. Its palette follows the familiar
//! 50–800 shade ramp of utility-first CSS frameworks.
//!
//! # Example
//!
//! ```
//! # use tierline_core::style::{Role, StyleResolver, StyleToken, Theme, Tone};
//! let theme = Theme::default();
//! let props = theme.resolve(StyleToken::new(Role::Card, Tone::Green));
//! assert!(props.fill().is_some());
//! assert!(props.stroke().is_some());
//! ```

use std::fmt;

use crate::{
    color::Color,
    draw::{FontWeight, GradientDirection, Paint, StrokeDefinition, TextAnchor, TextDefinition},
};

/// Hue family of a diagram element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Slate,
    Gray,
    Blue,
    Purple,
    Indigo,
    Green,
    Orange,
    Red,
    Yellow,
}

/// Lightness step within a [`Tone`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shade {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
}

impl Shade {
    fn index(self) -> usize {
        self as usize
    }
}

/// Shade ramps, 50 through 800.
fn ramp(tone: Tone) -> [&'static str; 9] {
    match tone {
        Tone::Slate => [
            "#f8fafc", "#f1f5f9", "#e2e8f0", "#cbd5e1", "#94a3b8", "#64748b", "#475569", "#334155",
            "#1e293b",
        ],
        Tone::Gray => [
            "#f9fafb", "#f3f4f6", "#e5e7eb", "#d1d5db", "#9ca3af", "#6b7280", "#4b5563", "#374151",
            "#1f2937",
        ],
        Tone::Blue => [
            "#eff6ff", "#dbeafe", "#bfdbfe", "#93c5fd", "#60a5fa", "#3b82f6", "#2563eb", "#1d4ed8",
            "#1e40af",
        ],
        Tone::Purple => [
            "#faf5ff", "#f3e8ff", "#e9d5ff", "#d8b4fe", "#c084fc", "#a855f7", "#9333ea", "#7e22ce",
            "#6b21a8",
        ],
        Tone::Indigo => [
            "#eef2ff", "#e0e7ff", "#c7d2fe", "#a5b4fc", "#818cf8", "#6366f1", "#4f46e5", "#4338ca",
            "#3730a3",
        ],
        Tone::Green => [
            "#f0fdf4", "#dcfce7", "#bbf7d0", "#86efac", "#4ade80", "#22c55e", "#16a34a", "#15803d",
            "#166534",
        ],
        Tone::Orange => [
            "#fff7ed", "#ffedd5", "#fed7aa", "#fdba74", "#fb923c", "#f97316", "#ea580c", "#c2410c",
            "#9a3412",
        ],
        Tone::Red => [
            "#fef2f2", "#fee2e2", "#fecaca", "#fca5a5", "#f87171", "#ef4444", "#dc2626", "#b91c1c",
            "#991b1b",
        ],
        Tone::Yellow => [
            "#fefce8", "#fef9c3", "#fef08a", "#fde047", "#facc15", "#eab308", "#ca8a04", "#a16207",
            "#854d0e",
        ],
    }
}

/// Returns the palette color for `tone` at `shade`.
pub fn shade(tone: Tone, shade: Shade) -> Color {
    Color::constant(ramp(tone)[shade.index()])
}

fn white() -> Color {
    Color::constant("white")
}

/// What an element is, independent of its hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Whole-page backdrop
    Page,
    /// The white sheet holding the architecture
    Canvas,
    /// Saturated call-out box (internet endpoint, gateway)
    Banner,
    /// Translucent white overlay on a banner
    Frosted,
    /// Thick-bordered network boundary
    Boundary,
    /// Tier and management sections
    Section,
    /// Solid title badge of a section
    Badge,
    /// White bordered card (instances, panels)
    Card,
    /// Light nested box inside a card
    Inset,
    /// Narrow rule strip (security groups, load balancers)
    Strip,
    /// Dark protocol label on a connector
    Chip,
    /// Small legend color square
    Swatch,
    /// Neutral container (legend)
    Plain,
    /// Feature summary tile
    Tile,
    /// Connector line. Solid segments use the ink, blends between two
    /// tones use the stroke color.
    Line,
    /// Icon glyph color
    Glyph,
    /// Page title
    Title,
    /// Page subtitle
    Subtitle,
    /// Bold section heading
    Heading,
    /// Bold item label
    Label,
    /// Secondary line under a heading or label
    Caption,
    /// Bullet text
    Body,
    /// Footer lines
    Footnote,
}

/// A role paired with a tone, handed to a [`StyleResolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleToken {
    role: Role,
    tone: Tone,
}

impl StyleToken {
    pub fn new(role: Role, tone: Tone) -> Self {
        Self { role, tone }
    }

    pub fn role(self) -> Role {
        self.role
    }

    pub fn tone(self) -> Tone {
        self.tone
    }
}

impl fmt::Display for StyleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}/{:?}", self.role, self.tone)
    }
}

/// Resolved appearance of a style token.
///
/// Surface roles carry a fill and usually a stroke; `text` is the style of
/// text drawn on that surface. Text roles carry only `text`.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualProps {
    fill: Option<Paint>,
    stroke: Option<StrokeDefinition>,
    corner_radius: f32,
    shadow: bool,
    text: TextDefinition,
}

impl VisualProps {
    pub fn new(text: TextDefinition) -> Self {
        Self {
            fill: None,
            stroke: None,
            corner_radius: 0.0,
            shadow: false,
            text,
        }
    }

    pub fn with_fill(mut self, fill: Paint) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn with_shadow(mut self) -> Self {
        self.shadow = true;
        self
    }

    pub fn fill(&self) -> Option<&Paint> {
        self.fill.as_ref()
    }

    pub fn stroke(&self) -> Option<&StrokeDefinition> {
        self.stroke.as_ref()
    }

    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    pub fn shadow(&self) -> bool {
        self.shadow
    }

    pub fn text(&self) -> &TextDefinition {
        &self.text
    }

    /// Color used for text and icons on this surface.
    pub fn ink(&self) -> Color {
        self.text.color().copied().unwrap_or_default()
    }
}

/// Maps semantic style tokens to visual appearance.
pub trait StyleResolver: fmt::Debug {
    fn resolve(&self, token: StyleToken) -> VisualProps;
}

/// Default [`StyleResolver`].
#[derive(Debug, Clone)]
pub struct Theme {
    font_family: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
        }
    }
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font_family(mut self, family: &str) -> Self {
        self.font_family = family.to_string();
        self
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    fn text(
        &self,
        size: u16,
        weight: FontWeight,
        color: Color,
        anchor: TextAnchor,
    ) -> TextDefinition {
        let mut text = TextDefinition::new();
        text.set_font_family(&self.font_family);
        text.set_font_size(size);
        text.set_weight(weight);
        text.set_color(Some(color));
        text.set_anchor(anchor);
        text
    }

    fn body_on(&self, color: Color) -> TextDefinition {
        self.text(12, FontWeight::Normal, color, TextAnchor::Start)
    }
}

impl StyleResolver for Theme {
    fn resolve(&self, token: StyleToken) -> VisualProps {
        use GradientDirection::*;
        use Shade::*;

        let tone = token.tone();
        let c = |s| shade(tone, s);
        let gradient = |from, to, direction| Paint::Gradient {
            from,
            to,
            direction,
        };

        match token.role() {
            Role::Page => VisualProps::new(self.body_on(shade(Tone::Gray, S800))).with_fill(
                gradient(shade(Tone::Slate, S50), shade(Tone::Blue, S50), ToBottomRight),
            ),
            Role::Canvas => VisualProps::new(self.body_on(shade(Tone::Gray, S700)))
                .with_fill(Paint::Solid(white()))
                .with_corner_radius(16.0)
                .with_shadow(),
            Role::Banner => VisualProps::new(self.body_on(white()))
                .with_fill(gradient(c(S500), c(S600), ToBottomRight))
                .with_corner_radius(10.0)
                .with_shadow(),
            Role::Frosted => VisualProps::new(self.body_on(white()))
                .with_fill(Paint::Solid(white().with_alpha(0.15)))
                .with_corner_radius(8.0),
            Role::Boundary => VisualProps::new(self.body_on(c(S800)))
                .with_fill(Paint::Solid(c(S50).with_alpha(0.3)))
                .with_stroke(StrokeDefinition::solid(c(S300), 4.0))
                .with_corner_radius(16.0),
            Role::Section => VisualProps::new(self.body_on(c(S800)))
                .with_fill(gradient(c(S100), c(S50), ToBottomRight))
                .with_stroke(StrokeDefinition::solid(c(S400), 2.0))
                .with_corner_radius(12.0)
                .with_shadow(),
            Role::Badge => {
                VisualProps::new(self.text(14, FontWeight::Bold, white(), TextAnchor::Start))
                    .with_fill(Paint::Solid(c(S500)))
                    .with_corner_radius(8.0)
            }
            Role::Card => VisualProps::new(self.body_on(shade(Tone::Gray, S700)))
                .with_fill(Paint::Solid(white()))
                .with_stroke(StrokeDefinition::solid(c(S500), 2.0))
                .with_corner_radius(8.0)
                .with_shadow(),
            Role::Inset => VisualProps::new(self.body_on(shade(Tone::Gray, S700)))
                .with_fill(Paint::Solid(c(S50)))
                .with_stroke(StrokeDefinition::solid(c(S200), 1.0))
                .with_corner_radius(8.0),
            Role::Strip => VisualProps::new(self.body_on(c(S800)))
                .with_fill(Paint::Solid(c(S200)))
                .with_stroke(StrokeDefinition::solid(c(S400), 1.0))
                .with_corner_radius(8.0),
            Role::Chip => {
                VisualProps::new(self.text(12, FontWeight::Normal, white(), TextAnchor::Middle))
                    .with_fill(Paint::Solid(shade(Tone::Gray, S600)))
                    .with_corner_radius(4.0)
            }
            Role::Swatch => VisualProps::new(self.body_on(c(S500)))
                .with_fill(Paint::Solid(c(S500)))
                .with_corner_radius(4.0),
            Role::Plain => VisualProps::new(self.body_on(c(S800)))
                .with_fill(Paint::Solid(c(S50)))
                .with_stroke(StrokeDefinition::solid(c(S300), 2.0))
                .with_corner_radius(12.0),
            Role::Tile => VisualProps::new(self.body_on(shade(Tone::Gray, S700)))
                .with_fill(gradient(c(S50), c(S100), ToBottomRight))
                .with_stroke(StrokeDefinition::solid(c(S400), 2.0))
                .with_corner_radius(8.0),
            Role::Line => VisualProps::new(self.body_on(c(S400)))
                .with_stroke(StrokeDefinition::solid(c(S500), 4.0)),
            Role::Glyph => VisualProps::new(self.body_on(c(S600))),
            Role::Title => VisualProps::new(self.text(
                30,
                FontWeight::Bold,
                shade(Tone::Gray, S800),
                TextAnchor::Middle,
            )),
            Role::Subtitle => VisualProps::new(self.text(
                16,
                FontWeight::Normal,
                shade(Tone::Gray, S600),
                TextAnchor::Middle,
            )),
            Role::Heading => {
                VisualProps::new(self.text(16, FontWeight::Bold, c(S800), TextAnchor::Start))
            }
            Role::Label => {
                VisualProps::new(self.text(13, FontWeight::Bold, c(S800), TextAnchor::Start))
            }
            Role::Caption => {
                VisualProps::new(self.text(12, FontWeight::Semibold, c(S600), TextAnchor::Start))
            }
            Role::Body => VisualProps::new(self.body_on(c(S700))),
            Role::Footnote => VisualProps::new(self.text(
                12,
                FontWeight::Semibold,
                shade(Tone::Gray, S600),
                TextAnchor::Middle,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROLES: [Role; 23] = [
        Role::Page,
        Role::Canvas,
        Role::Banner,
        Role::Frosted,
        Role::Boundary,
        Role::Section,
        Role::Badge,
        Role::Card,
        Role::Inset,
        Role::Strip,
        Role::Chip,
        Role::Swatch,
        Role::Plain,
        Role::Tile,
        Role::Line,
        Role::Glyph,
        Role::Title,
        Role::Subtitle,
        Role::Heading,
        Role::Label,
        Role::Caption,
        Role::Body,
        Role::Footnote,
    ];

    #[test]
    fn test_every_palette_entry_parses() {
        let tones = [
            Tone::Slate,
            Tone::Gray,
            Tone::Blue,
            Tone::Purple,
            Tone::Indigo,
            Tone::Green,
            Tone::Orange,
            Tone::Red,
            Tone::Yellow,
        ];
        for tone in tones {
            for hex in ramp(tone) {
                assert!(Color::new(hex).is_ok(), "{tone:?} shade {hex} should parse");
            }
        }
    }

    #[test]
    fn test_shades_differ_within_tone() {
        assert_ne!(shade(Tone::Green, Shade::S100), shade(Tone::Green, Shade::S500));
        assert_ne!(shade(Tone::Green, Shade::S500), shade(Tone::Red, Shade::S500));
    }

    #[test]
    fn test_every_role_resolves_with_text() {
        let theme = Theme::default();
        for role in ROLES {
            let props = theme.resolve(StyleToken::new(role, Tone::Blue));
            assert!(props.text().color().is_some(), "{role:?} should define ink");
        }
    }

    #[test]
    fn test_theme_font_family_reaches_text() {
        let theme = Theme::new().with_font_family("Inter");
        let props = theme.resolve(StyleToken::new(Role::Heading, Tone::Orange));
        assert_eq!(props.text().font_family(), "Inter");
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let theme = Theme::default();
        for role in ROLES {
            let token = StyleToken::new(role, Tone::Indigo);
            assert_eq!(theme.resolve(token), theme.resolve(token));
        }
    }

    #[test]
    fn test_banner_ink_is_white() {
        let theme = Theme::default();
        let props = theme.resolve(StyleToken::new(Role::Banner, Tone::Purple));
        assert_eq!(props.ink(), white());
        assert!(props.fill().and_then(|fill| fill.gradient_id()).is_some());
    }

    #[test]
    fn test_line_blends_darker_than_solid_segments() {
        let theme = Theme::default();
        let props = theme.resolve(StyleToken::new(Role::Line, Tone::Blue));
        assert_eq!(props.ink(), shade(Tone::Blue, Shade::S400));
        assert_eq!(
            props.stroke().map(|stroke| stroke.color()),
            Some(shade(Tone::Blue, Shade::S500))
        );
    }

    #[test]
    fn test_token_display() {
        let token = StyleToken::new(Role::Section, Tone::Red);
        assert_eq!(token.to_string(), "Section/Red");
    }
}

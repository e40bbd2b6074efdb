//! Icon identifiers and the icon-rendering collaborator.
//!
//! Diagram nodes only name an [`IconId`]; turning that name into a drawable
//! glyph is the job of an [`IconRenderer`]. [`OutlineIcons`] is the default
//! renderer: thin-stroke glyphs authored on a 24×24 grid and scaled to the
//! requested size.

use std::fmt;

use svg::node::element as svg_element;

use crate::{color::Color, draw::SvgNode, geometry::Point};

/// Identifier of an icon glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconId {
    Globe,
    Shield,
    Database,
    Server,
    MonitorDot,
    Lock,
    Zap,
    Cloud,
}

impl IconId {
    /// Every icon, in declaration order.
    pub const ALL: [IconId; 8] = [
        Self::Globe,
        Self::Shield,
        Self::Database,
        Self::Server,
        Self::MonitorDot,
        Self::Lock,
        Self::Zap,
        Self::Cloud,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Globe => "globe",
            Self::Shield => "shield",
            Self::Database => "database",
            Self::Server => "server",
            Self::MonitorDot => "monitor-dot",
            Self::Lock => "lock",
            Self::Zap => "zap",
            Self::Cloud => "cloud",
        }
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps an icon identifier to a drawable glyph.
pub trait IconRenderer: fmt::Debug {
    /// Renders `icon` centered on `center`, fitting a `size`×`size` square.
    ///
    /// Returns `None` when the renderer has no glyph for `icon`; callers draw
    /// nothing in its place.
    fn render(&self, icon: IconId, center: Point, size: f32, color: &Color) -> Option<SvgNode>;
}

/// One stroke primitive of a glyph, in 24×24 grid units.
#[derive(Debug, Clone, Copy)]
enum Stroke {
    Path(&'static str),
    Circle(f32, f32, f32),
    Rect(f32, f32, f32, f32, f32),
    Ellipse(f32, f32, f32, f32),
}

const GLOBE: &[Stroke] = &[
    Stroke::Circle(12.0, 12.0, 10.0),
    Stroke::Path("M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"),
    Stroke::Path("M2 12h20"),
];

const SHIELD: &[Stroke] = &[Stroke::Path(
    "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
)];

const DATABASE: &[Stroke] = &[
    Stroke::Ellipse(12.0, 5.0, 9.0, 3.0),
    Stroke::Path("M3 5V19A9 3 0 0 0 21 19V5"),
    Stroke::Path("M3 12A9 3 0 0 0 21 12"),
];

const SERVER: &[Stroke] = &[
    Stroke::Rect(2.0, 2.0, 20.0, 8.0, 2.0),
    Stroke::Rect(2.0, 14.0, 20.0, 8.0, 2.0),
    Stroke::Path("M6 6h.01"),
    Stroke::Path("M6 18h.01"),
];

const MONITOR_DOT: &[Stroke] = &[
    Stroke::Circle(19.0, 6.0, 3.0),
    Stroke::Path("M22 12v3a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h9"),
    Stroke::Path("M12 17v4"),
    Stroke::Path("M8 21h8"),
];

const LOCK: &[Stroke] = &[
    Stroke::Rect(3.0, 11.0, 18.0, 11.0, 2.0),
    Stroke::Path("M7 11V7a5 5 0 0 1 10 0v4"),
];

const ZAP: &[Stroke] = &[Stroke::Path(
    "M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z",
)];

const CLOUD: &[Stroke] = &[Stroke::Path(
    "M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z",
)];

/// Default icon renderer drawing outlined glyphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineIcons;

impl OutlineIcons {
    /// Grid size the glyphs are authored on.
    const GRID: f32 = 24.0;
    /// Stroke width in grid units.
    const STROKE_WIDTH: f32 = 2.0;

    pub fn new() -> Self {
        Self::default()
    }

    fn glyph(icon: IconId) -> &'static [Stroke] {
        match icon {
            IconId::Globe => GLOBE,
            IconId::Shield => SHIELD,
            IconId::Database => DATABASE,
            IconId::Server => SERVER,
            IconId::MonitorDot => MONITOR_DOT,
            IconId::Lock => LOCK,
            IconId::Zap => ZAP,
            IconId::Cloud => CLOUD,
        }
    }
}

impl IconRenderer for OutlineIcons {
    fn render(&self, icon: IconId, center: Point, size: f32, color: &Color) -> Option<SvgNode> {
        let scale = size / Self::GRID;
        let origin = center.sub_point(Point::new(size / 2.0, size / 2.0));

        let mut group = svg_element::Group::new()
            .set("data-icon", icon.name())
            .set(
                "transform",
                format!("translate({}, {}) scale({})", origin.x(), origin.y(), scale),
            )
            .set("fill", "none")
            .set("stroke", color.opaque().to_string())
            .set("stroke-opacity", color.alpha())
            .set("stroke-width", Self::STROKE_WIDTH)
            .set("stroke-linecap", "round")
            .set("stroke-linejoin", "round");

        for stroke in Self::glyph(icon) {
            group = match *stroke {
                Stroke::Path(d) => group.add(svg_element::Path::new().set("d", d)),
                Stroke::Circle(cx, cy, r) => group.add(
                    svg_element::Circle::new()
                        .set("cx", cx)
                        .set("cy", cy)
                        .set("r", r),
                ),
                Stroke::Rect(x, y, width, height, rx) => group.add(
                    svg_element::Rectangle::new()
                        .set("x", x)
                        .set("y", y)
                        .set("width", width)
                        .set("height", height)
                        .set("rx", rx),
                ),
                Stroke::Ellipse(cx, cy, rx, ry) => group.add(
                    svg_element::Ellipse::new()
                        .set("cx", cx)
                        .set("cy", cy)
                        .set("rx", rx)
                        .set("ry", ry),
                ),
            };
        }

        Some(Box::new(group))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_renders() {
        let icons = OutlineIcons::new();
        let color = Color::new("#2563eb").unwrap();

        for icon in IconId::ALL {
            let node = icons.render(icon, Point::new(12.0, 12.0), 24.0, &color);
            let rendered = node.expect("default glyph set covers every icon").to_string();
            assert!(rendered.contains(&format!("data-icon=\"{}\"", icon.name())));
        }
    }

    #[test]
    fn test_icon_scaled_to_size() {
        let icons = OutlineIcons::new();
        let rendered = icons
            .render(IconId::Lock, Point::new(50.0, 50.0), 48.0, &Color::default())
            .unwrap()
            .to_string();

        assert!(rendered.contains("translate(26, 26) scale(2)"));
    }

    #[test]
    fn test_icon_names_are_unique() {
        let mut names: Vec<_> = IconId::ALL.iter().map(|icon| icon.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), IconId::ALL.len());
    }

    #[test]
    fn test_glyph_scaled_to_size() {
        let rendered = OutlineIcons::new()
            .render(IconId::Zap, Point::new(20.0, 20.0), 12.0, &Color::default())
            .unwrap()
            .to_string();
        assert!(rendered.contains("stroke-width=\"2\""));
        assert!(rendered.contains("scale(0.5)"));
    }
}

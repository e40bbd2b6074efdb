//! Integration tests for the DiagramRenderer API
//!
//! These tests exercise the public API the way a host embedding the diagram
//! would: build the tree, query it, render it.

use tierline::{
    DiagramRenderer, Format, TierlineError,
    config::{AppConfig, LayoutConfig, StyleConfig},
    diagram::{Marker, NodeKind, Tier},
    icon::IconId,
    style::Tone,
    view::{EventResponse, InputEvent, PointerButton, StaticDiagramView},
};

fn count(kind: NodeKind) -> usize {
    StaticDiagramView::new()
        .render()
        .count(|node| node.kind() == kind)
}

#[test]
fn test_renderer_default() {
    let renderer = DiagramRenderer::default();
    let svg = renderer.render_svg().expect("Failed to render");
    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
}

#[test]
fn test_svg_is_deterministic() {
    let renderer = DiagramRenderer::default();
    let first = renderer.render_svg().unwrap();
    let second = renderer.render_svg().unwrap();
    assert_eq!(first, second);

    let other = DiagramRenderer::new(AppConfig::default());
    assert_eq!(first, other.render_svg().unwrap());
}

#[test]
fn test_section_counts() {
    assert_eq!(count(NodeKind::Gateway), 1);
    assert_eq!(count(NodeKind::Tier(Tier::Web)), 1);
    assert_eq!(count(NodeKind::Tier(Tier::App)), 1);
    assert_eq!(count(NodeKind::Tier(Tier::Database)), 1);
    assert_eq!(count(NodeKind::Management), 1);
    assert_eq!(count(NodeKind::Legend), 1);
    assert_eq!(count(NodeKind::Footer), 1);
}

#[test]
fn test_tier_order() {
    let diagram = StaticDiagramView::new().render();
    assert_eq!(diagram.tiers(), Tier::ORDER);
}

#[test]
fn test_tiers_contain_labeled_items() {
    let diagram = StaticDiagramView::new().render();
    let expected: [(Tier, &[&str]); 3] = [
        (Tier::Web, &["VMSS Web-0", "VMSS Web-1", "NSG: nsg-webtier"]),
        (
            Tier::App,
            &[
                "VMSS App-0",
                "VMSS App-1",
                "Internal Load Balancer:",
                "NSG: nsg-apptier",
            ],
        ),
        (Tier::Database, &["Private Endpoint", "NSG: nsg-database"]),
    ];

    for (tier, labels) in expected {
        let node = diagram
            .find(|node| node.kind() == NodeKind::Tier(tier))
            .unwrap_or_else(|| panic!("{tier} tier missing"));
        assert_eq!(node.tone(), tier.tone());
        let children: Vec<&str> = node.children().iter().map(|c| c.label()).collect();
        assert_eq!(children, labels, "{tier} tier items");
    }
}

#[test]
fn test_legend_entries() {
    let diagram = StaticDiagramView::new().render();
    let entries: Vec<_> = diagram
        .legend_entries()
        .into_iter()
        .map(|entry| (entry.marker, entry.icon, entry.tone, entry.label))
        .collect();

    assert_eq!(
        entries,
        [
            (Marker::Swatch, None, Tone::Green, "Web Tier"),
            (Marker::Swatch, None, Tone::Orange, "App Tier"),
            (Marker::Swatch, None, Tone::Red, "Database Tier"),
            (Marker::Glyph, Some(IconId::Shield), Tone::Blue, "Security (NSG)"),
            (Marker::Glyph, Some(IconId::Zap), Tone::Yellow, "Auto-Scaling"),
            (Marker::Glyph, Some(IconId::Lock), Tone::Purple, "Private Access"),
            (Marker::Glyph, Some(IconId::MonitorDot), Tone::Green, "Load Balancer"),
            (Marker::Glyph, Some(IconId::Globe), Tone::Blue, "Public Access"),
        ]
    );
}

#[test]
fn test_svg_contains_tiers_in_order() {
    let svg = DiagramRenderer::default().render_svg().unwrap();
    let web = svg.find("WEB TIER").expect("web tier label");
    let app = svg.find("APPLICATION TIER").expect("app tier label");
    let db = svg.find("DATABASE TIER").expect("database tier label");
    assert!(web < app && app < db);
}

#[test]
fn test_events_do_not_change_output() {
    let view = StaticDiagramView::new();
    let renderer = DiagramRenderer::default();
    let before = renderer.render_svg().unwrap();

    let events = [
        InputEvent::PointerDown {
            x: 120.0,
            y: 300.0,
            button: PointerButton::Primary,
        },
        InputEvent::Key {
            code: "Enter".to_string(),
        },
        InputEvent::Resize {
            width: 320.0,
            height: 480.0,
        },
    ];
    for event in &events {
        assert_eq!(view.handle_event(event), EventResponse::Ignored);
    }

    assert_eq!(renderer.render_svg().unwrap(), before);
}

#[test]
fn test_render_formats() {
    let renderer = DiagramRenderer::default();
    let svg = renderer.render(Format::Svg).unwrap();
    let outline = renderer.render(Format::Outline).unwrap();

    assert!(svg.starts_with("<svg"));
    assert!(outline.starts_with("diagram "));
    assert!(outline.contains("tier \"DATABASE TIER\" (Subnet: 10.0.4.0/24) <database>"));
}

#[test]
fn test_font_family_from_config() {
    let config = AppConfig::new(
        LayoutConfig::default(),
        StyleConfig::new(None, Some("Inter".to_string())),
    );
    let svg = DiagramRenderer::new(config).render_svg().unwrap();
    assert!(svg.contains("font-family=\"Inter\""));
    assert!(!svg.contains("font-family=\"Arial\""));
}

#[test]
fn test_invalid_background_is_config_error() {
    let config = AppConfig::new(
        LayoutConfig::default(),
        StyleConfig::new(Some("definitely-not-a-color".to_string()), None),
    );
    let err = DiagramRenderer::new(config).render_svg().unwrap_err();
    assert!(matches!(err, TierlineError::Config(_)), "got {err:?}");
}

#[test]
fn test_invalid_width_is_config_error() {
    let config = AppConfig::new(LayoutConfig::new(-10.0, 0.0), StyleConfig::default());
    let renderer = DiagramRenderer::new(config);
    assert!(matches!(
        renderer.render(Format::Outline),
        Err(TierlineError::Config(_))
    ));
}

#[test]
fn test_infinite_width_is_config_error() {
    let config = AppConfig::new(LayoutConfig::new(f32::INFINITY, 32.0), StyleConfig::default());
    let err = DiagramRenderer::new(config).render_svg().unwrap_err();
    assert!(matches!(err, TierlineError::Config(_)), "got {err:?}");
}

//! SVG export backend.
//!
//! [`SvgRenderer`] turns every [`Element`] of a [`LayoutBox`] tree into
//! drawables from `tierline_core::draw`, collects them in a
//! [`LayeredOutput`] and emits one SVG group per layer. Gradient fills are
//! collected on the way and written once each into `<defs>`, in the order
//! they were first used.

use indexmap::IndexMap;
use log::{debug, info, warn};
use svg::{Document, node::element as svg_element};

use tierline_core::{
    color::Color,
    draw::{Drawable, LayeredOutput, Paint, Panel, RenderLayer, Text},
    icon::IconRenderer,
    style::{Role, StyleResolver},
};

use crate::{
    export::{self, Exporter},
    layout::{Element, LayoutBox},
};

type Gradients = IndexMap<String, svg_element::LinearGradient>;

/// Draws laid-out diagrams as SVG documents.
///
/// # Examples
///
/// ```
/// # use tierline::config::LayoutConfig;
/// # use tierline::export::{Exporter, svg::SvgRenderer};
/// # use tierline::icon::OutlineIcons;
/// # use tierline::layout::LayoutEngine;
/// # use tierline::style::Theme;
/// # use tierline::view::StaticDiagramView;
/// let theme = Theme::default();
/// let icons = OutlineIcons::new();
///
/// let diagram = StaticDiagramView::new().render();
/// let layout = LayoutEngine::new(LayoutConfig::default(), &theme).layout(&diagram);
///
/// let svg = SvgRenderer::new(&theme, &icons).export(&layout).unwrap();
/// assert!(svg.starts_with("<svg"));
/// ```
#[derive(Debug)]
pub struct SvgRenderer<'s> {
    style: &'s dyn StyleResolver,
    icons: &'s dyn IconRenderer,
    background: Option<Color>,
}

impl<'s> SvgRenderer<'s> {
    pub fn new(style: &'s dyn StyleResolver, icons: &'s dyn IconRenderer) -> Self {
        Self {
            style,
            icons,
            background: None,
        }
    }

    /// Replaces the themed page backdrop with a solid color.
    pub fn with_background(mut self, color: Option<Color>) -> Self {
        self.background = color;
        self
    }

    /// Renders the layout into an SVG [`Document`].
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] when the layout has no area.
    pub fn render_document(&self, layout: &LayoutBox<'_>) -> Result<Document, export::Error> {
        let bounds = layout.bounds();
        if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            return Err(export::Error::Render(format!(
                "layout has no drawable area ({}x{})",
                bounds.width(),
                bounds.height()
            )));
        }

        let mut gradients = Gradients::new();
        let mut output = LayeredOutput::new();
        for layout_box in layout.walk() {
            for element in layout_box.elements() {
                output.merge(self.render_element(element, &mut gradients));
            }
        }
        debug!(nodes = output.len(), gradients = gradients.len(); "Elements drawn");

        let mut doc = Document::new()
            .set(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    bounds.min_x(),
                    bounds.min_y(),
                    bounds.width(),
                    bounds.height()
                ),
            )
            .set("width", bounds.width())
            .set("height", bounds.height());

        if !gradients.is_empty() {
            let defs = gradients
                .into_values()
                .fold(svg_element::Definitions::new(), |defs, gradient| {
                    defs.add(gradient)
                });
            doc = doc.add(defs);
        }

        for node in output.render() {
            doc = doc.add(node);
        }

        Ok(doc)
    }

    fn render_element(&self, element: &Element, gradients: &mut Gradients) -> LayeredOutput {
        match element {
            Element::Surface { token, bounds } => {
                let props = self.style.resolve(*token);
                let page = token.role() == Role::Page;
                let fill = match self.background {
                    Some(color) if page => Some(Paint::Solid(color)),
                    _ => props.fill().copied(),
                };
                if let Some(paint) = &fill {
                    register_gradient(gradients, paint);
                }

                let mut panel = Panel::new(bounds.to_size())
                    .with_optional_fill(fill)
                    .with_stroke(props.stroke().cloned())
                    .with_corner_radius(props.corner_radius())
                    .with_shadow(props.shadow());
                if page {
                    panel = panel.on_layer(RenderLayer::Background);
                }
                panel.render_to_layers(bounds.center())
            }
            Element::Bar { paint, bounds } => {
                register_gradient(gradients, paint);
                Panel::new(bounds.to_size())
                    .with_fill(*paint)
                    .with_corner_radius(bounds.width() / 2.0)
                    .on_layer(RenderLayer::Connector)
                    .render_to_layers(bounds.center())
            }
            Element::Icon {
                icon,
                center,
                size,
                color,
            } => {
                let mut output = LayeredOutput::new();
                match self.icons.render(*icon, *center, *size, color) {
                    Some(node) => output.add_to_layer(RenderLayer::Icon, node),
                    None => warn!(icon = icon.name(); "No glyph for icon, leaving it out"),
                }
                output
            }
            Element::Text {
                style,
                content,
                position,
            } => Text::new(style, content).render_to_layers(*position),
        }
    }
}

impl Exporter for SvgRenderer<'_> {
    fn export(&self, layout: &LayoutBox<'_>) -> Result<String, export::Error> {
        let doc = self.render_document(layout)?;
        info!(width = layout.bounds().width(), height = layout.bounds().height(); "SVG rendered");
        Ok(doc.to_string())
    }
}

fn register_gradient(gradients: &mut Gradients, paint: &Paint) {
    if let (Some(id), Some(definition)) = (paint.gradient_id(), paint.gradient_definition()) {
        gradients.entry(id).or_insert(definition);
    }
}

#[cfg(test)]
mod tests {
    use tierline_core::{
        draw::SvgNode,
        geometry::Point,
        icon::{IconId, OutlineIcons},
        style::Theme,
    };

    use super::*;
    use crate::{config::LayoutConfig, layout::LayoutEngine, view::StaticDiagramView};

    /// Renders nothing but the lock glyph.
    #[derive(Debug)]
    struct LockOnly;

    impl IconRenderer for LockOnly {
        fn render(&self, icon: IconId, center: Point, size: f32, color: &Color) -> Option<SvgNode> {
            match icon {
                IconId::Lock => OutlineIcons::new().render(icon, center, size, color),
                _ => None,
            }
        }
    }

    fn render_with(icons: &dyn IconRenderer, background: Option<Color>) -> String {
        let theme = Theme::default();
        let diagram = StaticDiagramView::new().render();
        let layout = LayoutEngine::new(LayoutConfig::default(), &theme).layout(&diagram);
        SvgRenderer::new(&theme, icons)
            .with_background(background)
            .export(&layout)
            .unwrap()
    }

    #[test]
    fn test_layers_in_order() {
        let svg = render_with(&OutlineIcons::new(), None);
        let position = |layer: &str| svg.find(&format!("data-layer=\"{layer}\"")).unwrap();

        assert!(position("background") < position("surface"));
        assert!(position("surface") < position("connector"));
        assert!(position("connector") < position("icon"));
        assert!(position("icon") < position("text"));
    }

    #[test]
    fn test_gradients_defined_once() {
        let svg = render_with(&OutlineIcons::new(), None);
        let defs_start = svg.find("<defs>").unwrap();
        let defs_end = svg.find("</defs>").unwrap();
        let defs = &svg[defs_start..defs_end];

        let ids: Vec<&str> = defs
            .split("id=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect();
        assert!(!ids.is_empty());

        let mut unique = ids.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());

        for id in ids {
            assert!(svg.contains(&format!("url(#{id})")), "{id} is never used");
        }
    }

    #[test]
    fn test_missing_icons_are_skipped() {
        let full = render_with(&OutlineIcons::new(), None);
        let partial = render_with(&LockOnly, None);

        assert!(full.contains("data-icon=\"globe\""));
        assert!(!partial.contains("data-icon=\"globe\""));
        assert!(partial.contains("data-icon=\"lock\""));
        assert!(partial.contains("Internet"));
    }

    #[test]
    fn test_background_override() {
        let color = Color::new("#101820").unwrap();
        let svg = render_with(&OutlineIcons::new(), Some(color));
        let background = svg.split("data-layer=\"background\"").nth(1).unwrap();
        let background = &background[..background.find("</g>").unwrap()];

        assert!(background.contains(&color.to_string()));
        assert!(!background.contains("url(#"));
    }

    #[test]
    fn test_empty_layout_is_an_error() {
        let theme = Theme::default();
        let diagram = StaticDiagramView::new().render();
        let layout = LayoutEngine::new(LayoutConfig::new(0.0, 0.0), &theme).layout(&diagram);
        let err = SvgRenderer::new(&theme, &OutlineIcons::new())
            .render_document(&layout)
            .unwrap_err();
        assert!(err.to_string().starts_with("Render error"));
    }
}

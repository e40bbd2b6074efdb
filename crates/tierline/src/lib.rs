//! Tierline - a static diagram of a three-tier cloud network architecture.
//!
//! The diagram content is fixed: a [`StaticDiagramView`](view::StaticDiagramView)
//! produces the same node tree on every render. This crate lays that tree
//! out and exports it as SVG or as a plain-text outline.

pub mod config;
pub mod diagram;
pub mod export;
pub mod layout;
pub mod view;

mod architecture;
mod error;

pub use tierline_core::{color, draw, geometry, icon, style};

pub use error::TierlineError;

use log::{debug, info};

use config::AppConfig;
use diagram::Diagram;
use export::{Exporter, outline::Outline, svg::SvgRenderer};
use icon::{IconRenderer, OutlineIcons};
use layout::LayoutEngine;
use style::{StyleResolver, Theme};
use view::StaticDiagramView;

/// Output formats of [`DiagramRenderer::render`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Svg,
    Outline,
}

/// Renders the three-tier diagram with a given configuration.
///
/// # Examples
///
/// ```
/// use tierline::{DiagramRenderer, config::AppConfig};
///
/// let renderer = DiagramRenderer::new(AppConfig::default());
///
/// let diagram = renderer.diagram();
/// assert_eq!(diagram.tiers().len(), 3);
///
/// let svg = renderer.render_svg().expect("Failed to render");
/// assert!(svg.contains("WEB TIER"));
/// ```
#[derive(Debug, Default)]
pub struct DiagramRenderer {
    config: AppConfig,
    view: StaticDiagramView,
}

impl DiagramRenderer {
    /// Create a new renderer with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            view: StaticDiagramView::new(),
        }
    }

    /// Returns the diagram tree.
    pub fn diagram(&self) -> Diagram {
        self.view.render()
    }

    /// Renders the diagram to an SVG string using the default theme and icons.
    ///
    /// # Errors
    ///
    /// Returns [`TierlineError::Config`] for an invalid background color or
    /// layout geometry, and [`TierlineError::Export`] if SVG rendering fails.
    pub fn render_svg(&self) -> Result<String, TierlineError> {
        let theme = self.theme();
        let icons = OutlineIcons::new();
        self.render_svg_with(&theme, &icons)
    }

    /// Renders the diagram to an SVG string with custom collaborators.
    ///
    /// # Errors
    ///
    /// See [`DiagramRenderer::render_svg`].
    pub fn render_svg_with(
        &self,
        style: &dyn StyleResolver,
        icons: &dyn IconRenderer,
    ) -> Result<String, TierlineError> {
        let background = self
            .config
            .style()
            .background_color()
            .map_err(TierlineError::Config)?;
        self.config
            .layout()
            .validate()
            .map_err(TierlineError::Config)?;

        let diagram = self.diagram();
        let layout = LayoutEngine::new(*self.config.layout(), style).layout(&diagram);
        debug!(boxes = layout.walk().len(); "Layout calculated");

        let svg = SvgRenderer::new(style, icons)
            .with_background(background)
            .export(&layout)?;
        info!(bytes = svg.len(); "SVG rendered successfully");
        Ok(svg)
    }

    /// Renders the laid-out diagram as an indented text outline.
    ///
    /// # Errors
    ///
    /// Returns [`TierlineError::Config`] for invalid layout geometry.
    pub fn render_outline(&self) -> Result<String, TierlineError> {
        self.config
            .layout()
            .validate()
            .map_err(TierlineError::Config)?;

        let theme = self.theme();
        let diagram = self.diagram();
        let layout = LayoutEngine::new(*self.config.layout(), &theme).layout(&diagram);
        Ok(Outline::new().export(&layout)?)
    }

    /// Renders the diagram in `format`.
    ///
    /// # Errors
    ///
    /// See [`DiagramRenderer::render_svg`] and [`DiagramRenderer::render_outline`].
    pub fn render(&self, format: Format) -> Result<String, TierlineError> {
        info!(format:?; "Rendering diagram");
        match format {
            Format::Svg => self.render_svg(),
            Format::Outline => self.render_outline(),
        }
    }

    fn theme(&self) -> Theme {
        match self.config.style().font_family() {
            Some(family) => Theme::new().with_font_family(family),
            None => Theme::new(),
        }
    }
}

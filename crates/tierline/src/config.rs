//! Configuration types for Tierline diagram rendering.
//!
//! All types implement [`serde::Deserialize`] so the CLI can load them from
//! TOML. Every section and field is optional.
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Canvas width and outer margin.
//! - [`StyleConfig`] - Background color and font family.
//!
//! # Example
//!
//! ```
//! # use tierline::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_ok());
//! assert_eq!(config.layout().width(), 960.0);
//! ```

use serde::Deserialize;

use tierline_core::color::Color;

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Largest accepted content width or margin, in pixels.
pub const MAX_EXTENT: f32 = 16_384.0;

/// Geometry of the rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width of the content column, excluding the outer margin.
    width: f32,

    /// Blank space around the content on every side.
    margin: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            margin: 32.0,
        }
    }
}

impl LayoutConfig {
    pub fn new(width: f32, margin: f32) -> Self {
        Self { width, margin }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Checks that the geometry can produce a drawable page.
    ///
    /// # Errors
    ///
    /// Returns a message when the width is not in `(0, MAX_EXTENT]` or the
    /// margin is not in `[0, MAX_EXTENT]`. Infinite and NaN values are
    /// rejected.
    pub fn validate(&self) -> Result<(), String> {
        if !self.width.is_finite() || self.width <= 0.0 || self.width > MAX_EXTENT {
            return Err(format!(
                "Invalid layout width in config: {} (must be positive and at most {MAX_EXTENT})",
                self.width
            ));
        }
        if !self.margin.is_finite() || self.margin < 0.0 || self.margin > MAX_EXTENT {
            return Err(format!(
                "Invalid layout margin in config: {} (must be between 0 and {MAX_EXTENT})",
                self.margin
            ));
        }
        Ok(())
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Fields that are not set fall back to the theme defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Page background [`Color`], as a color string.
    #[serde(default)]
    background_color: Option<String>,

    /// Font family for every text element.
    #[serde(default)]
    font_family: Option<String>,
}

impl StyleConfig {
    pub fn new(background_color: Option<String>, font_family: Option<String>) -> Self {
        Self {
            background_color,
            font_family,
        }
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }
}

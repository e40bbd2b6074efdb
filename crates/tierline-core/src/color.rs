//! CSS colors as they appear in a Tierline diagram.
//!
//! The palette, the configured page background and every fill or stroke go
//! through [`Color`]. Parsing accepts anything CSS does (`#22c55e`,
//! `rgb(34 197 94)`, `white`). When written to SVG, the color string is kept
//! opaque and the alpha travels in a separate `*-opacity` attribute.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// A parsed CSS color with an alpha channel.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Parses a CSS color string.
    ///
    /// # Errors
    ///
    /// Returns a message naming the rejected input.
    ///
    /// # Examples
    ///
    /// ```
    /// use tierline_core::color::Color;
    ///
    /// assert!(Color::new("#22c55e").is_ok());
    /// assert!(Color::new("greenish").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        DynamicColor::from_str(color_str)
            .map(|color| Self { color })
            .map_err(|err| format!("invalid color `{color_str}`: {err}"))
    }

    /// Parses a palette literal.
    ///
    /// # Panics
    ///
    /// Panics if `color_str` is not a valid CSS color. Only use this with
    /// string literals.
    pub fn constant(color_str: &str) -> Self {
        Self::new(color_str).expect("constant colors are valid CSS colors")
    }

    /// Fragment for building SVG ids out of colors.
    ///
    /// ASCII letters and digits are kept, and every run of other characters
    /// becomes a single `_`.
    ///
    /// ```
    /// use tierline_core::color::Color;
    ///
    /// let fragment = Color::new("#3b82f6").unwrap().id_fragment();
    /// assert!(fragment.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
    /// ```
    pub fn id_fragment(self) -> String {
        let mut fragment = String::new();
        for c in self.to_string().chars() {
            if c.is_ascii_alphanumeric() {
                fragment.push(c.to_ascii_lowercase());
            } else if !fragment.ends_with('_') {
                fragment.push('_');
            }
        }
        fragment.trim_matches('_').to_string()
    }

    /// Same color at the given opacity.
    ///
    /// ```
    /// use tierline_core::color::Color;
    ///
    /// let frosted = Color::new("white").unwrap().with_alpha(0.2);
    /// assert_eq!(frosted.alpha(), 0.2);
    /// ```
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            color: self.color.with_alpha(alpha),
        }
    }

    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }

    /// Same color with full opacity.
    pub fn opaque(self) -> Self {
        self.with_alpha(1.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::constant("black")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_unknown_names() {
        let err = Color::new("bluish").unwrap_err();
        assert!(err.contains("bluish"));
        assert!(Color::new("rgb(34 197 94)").is_ok());
    }

    #[test]
    fn test_default_is_black() {
        assert_eq!(Color::default(), Color::new("black").unwrap());
    }

    #[test]
    fn test_alpha_round_trip() {
        let frosted = Color::new("white").unwrap().with_alpha(0.1);
        assert!((frosted.alpha() - 0.1).abs() < 0.001);
        assert!((frosted.opaque().alpha() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_id_fragment_is_clean() {
        for input in ["#ef4444", "rgb(59, 130, 246)", "white"] {
            let fragment = Color::new(input).unwrap().id_fragment();
            assert!(!fragment.is_empty());
            assert!(!fragment.starts_with('_') && !fragment.ends_with('_'));
            assert!(!fragment.contains("__"));
            assert!(
                fragment
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
            );
        }
    }

    #[test]
    fn test_distinct_colors_have_distinct_fragments() {
        let red = Color::new("#ef4444").unwrap().id_fragment();
        let blue = Color::new("#3b82f6").unwrap().id_fragment();
        assert_ne!(red, blue);
    }
}

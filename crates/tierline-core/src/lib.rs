//! Tierline Core Types and Definitions
//!
//! This crate provides the foundational types used to draw Tierline
//! architecture diagrams. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Layered SVG output, strokes and text ([`draw`] module)
//! - **Icons**: The icon collaborator and its default glyph set ([`icon`] module)
//! - **Style**: The styling collaborator, tones and the default theme ([`style`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod icon;
pub mod style;

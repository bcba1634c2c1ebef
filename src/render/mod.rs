//! Render strategy family
//!
//! Turns a sampled grid into output artifacts using a strategy pattern:
//! one shared raster loop plus variant-specific per-cell draw hooks, and
//! a streaming plain-text serializer.

pub mod strategy;
pub mod raster;
pub mod glyph;
pub mod ascii_text;
pub mod builtin_font;
#[cfg(test)]
mod tests;

pub use strategy::{CellContext, CellRenderer};
pub use raster::{BlockRenderer, DotRenderer, EllipseRenderer};
pub use glyph::GlyphRenderer;

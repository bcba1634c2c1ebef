//! Core image-to-ASCII conversion
//!
//! This module provides the sampling engine: block averaging, palette
//! banding, title composition and the engine tying them together.

pub mod errors;
pub mod palette;
pub mod sampler;
pub mod grid;
pub mod engine;
#[cfg(test)]
mod tests;

pub use errors::{AsciiError, AsciiResult};
pub use palette::{Palette, DEFAULT_SYMBOLS};
pub use sampler::Sampler;
pub use grid::AsciiGrid;
pub use engine::Image2Ascii;

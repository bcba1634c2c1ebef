pub mod ascii;
pub mod render;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::{Im2a, RenderOptions, Variant};

pub use ascii::{AsciiError, AsciiResult, AsciiGrid, Image2Ascii, Palette, Sampler};
pub use render::{BlockRenderer, CellRenderer, DotRenderer, EllipseRenderer, GlyphRenderer};

//! Styled glyph render variant
//!
//! Draws each cell's palette symbol onto the canvas, filled with the
//! cell's brightness. Without a font file the built-in bitmap font and a
//! fixed cell spacing are used; with a TrueType font the measured line
//! height of the font becomes the cell size.

use std::fs;
use std::path::Path;

use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use image::{GrayImage, Luma};
use imageproc::drawing::draw_text_mut;
use log::{debug, info};

use crate::ascii::errors::{AsciiError, AsciiResult};
use crate::render::builtin_font;
use crate::render::strategy::{CellContext, CellRenderer};

/// Cell spacing used with the built-in bitmap font
const DEFAULT_SPACING: u32 = 11;

/// Horizontal inset of the glyph inside its cell, in pixels
const GLYPH_INSET: u32 = 3;

enum GlyphFont {
    Builtin,
    Truetype { font: FontVec, scale: PxScale, line_height: u32 },
}

/// Renders the symbol grid as styled text on a raster canvas
pub struct GlyphRenderer {
    font: GlyphFont,
}

impl GlyphRenderer {
    /// Renderer backed by the built-in 8x8 bitmap font
    pub fn builtin() -> Self {
        GlyphRenderer { font: GlyphFont::Builtin }
    }

    /// Renderer backed by a TrueType font file
    ///
    /// # Arguments
    /// * `path` - Path to a .ttf/.otf file
    /// * `size` - Font size in pixels
    ///
    /// # Returns
    /// A renderer whose cell size is the font's measured line height, or
    /// `FontLoad` if the file cannot be read or parsed
    pub fn from_file(path: &Path, size: f32) -> AsciiResult<Self> {
        let bytes = fs::read(path)
            .map_err(|e| AsciiError::FontLoad(format!("{}: {}", path.display(), e)))?;
        let font = FontVec::try_from_vec(bytes)
            .map_err(|e| AsciiError::FontLoad(format!("{}: {}", path.display(), e)))?;

        let scale = PxScale::from(size);
        let line_height = font.as_scaled(scale).height().ceil() as u32;
        if line_height == 0 {
            return Err(AsciiError::FontLoad(format!(
                "{}: size {} measures to an empty line", path.display(), size)));
        }

        info!("Loaded font {} at size {} (line height {})",
              path.display(), size, line_height);
        Ok(GlyphRenderer {
            font: GlyphFont::Truetype { font, scale, line_height },
        })
    }

    /// Cell side length this renderer wants
    pub fn cell_size(&self) -> u32 {
        match &self.font {
            GlyphFont::Builtin => DEFAULT_SPACING,
            GlyphFont::Truetype { line_height, .. } => *line_height,
        }
    }
}

impl CellRenderer for GlyphRenderer {
    fn file_suffix(&self) -> &'static str {
        "_text"
    }

    fn draw_cell(&self, canvas: &mut GrayImage, ctx: &CellContext) -> AsciiResult<()> {
        match &self.font {
            GlyphFont::Builtin => {
                if !builtin_font::has_glyph(ctx.symbol) {
                    debug!("No builtin glyph for {:?}, drawing fallback box", ctx.symbol);
                }
                builtin_font::draw_glyph(
                    canvas,
                    ctx.origin_x + GLYPH_INSET,
                    ctx.origin_y,
                    ctx.symbol,
                    ctx.brightness,
                );
            }
            GlyphFont::Truetype { font, scale, .. } => {
                draw_text_mut(
                    canvas,
                    Luma([ctx.brightness]),
                    (ctx.origin_x + GLYPH_INSET) as i32,
                    ctx.origin_y as i32,
                    *scale,
                    font,
                    &ctx.symbol.to_string(),
                );
            }
        }
        Ok(())
    }
}

//! Built-in 8x8 bitmap font
//!
//! Fallback glyph set used by the styled-glyph renderer when no TrueType
//! font is supplied. Each glyph is eight row bytes, most significant bit
//! leftmost. Coverage is printable ASCII 32..=95; lowercase letters are
//! folded to uppercase, anything else draws as a hollow box.

use std::collections::HashMap;

use image::{GrayImage, Luma};
use lazy_static::lazy_static;

/// Glyph bitmap height and width in pixels
pub const GLYPH_SIZE: u32 = 8;

/// Glyph drawn for characters outside the table
const FALLBACK: [u8; 8] = [0xF8, 0x88, 0x88, 0x88, 0x88, 0x88, 0xF8, 0x00];

lazy_static! {
    static ref GLYPHS: HashMap<char, [u8; 8]> = {
        let mut m = HashMap::new();
        m.insert(' ', [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
        m.insert('!', [0x20, 0x20, 0x20, 0x20, 0x20, 0x00, 0x20, 0x00]);
        m.insert('"', [0x50, 0x50, 0x50, 0x00, 0x00, 0x00, 0x00, 0x00]);
        m.insert('#', [0x50, 0xF8, 0x50, 0x50, 0x50, 0xF8, 0x50, 0x00]);
        m.insert('$', [0x20, 0x78, 0xA0, 0x70, 0x28, 0xF0, 0x20, 0x00]);
        m.insert('%', [0xC8, 0xC8, 0x10, 0x20, 0x40, 0x98, 0x98, 0x00]);
        m.insert('&', [0x60, 0x90, 0xA0, 0x40, 0xA8, 0x90, 0x68, 0x00]);
        m.insert('\'', [0x20, 0x20, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00]);
        m.insert('(', [0x10, 0x20, 0x40, 0x40, 0x40, 0x20, 0x10, 0x00]);
        m.insert(')', [0x40, 0x20, 0x10, 0x10, 0x10, 0x20, 0x40, 0x00]);
        m.insert('*', [0x00, 0x50, 0x20, 0xF8, 0x20, 0x50, 0x00, 0x00]);
        m.insert('+', [0x00, 0x20, 0x20, 0xF8, 0x20, 0x20, 0x00, 0x00]);
        m.insert(',', [0x00, 0x00, 0x00, 0x00, 0x00, 0x20, 0x20, 0x40]);
        m.insert('-', [0x00, 0x00, 0x00, 0xF8, 0x00, 0x00, 0x00, 0x00]);
        m.insert('.', [0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0x60, 0x00]);
        m.insert('/', [0x08, 0x10, 0x10, 0x20, 0x40, 0x40, 0x80, 0x00]);
        m.insert('0', [0x70, 0x88, 0x98, 0xA8, 0xC8, 0x88, 0x70, 0x00]);
        m.insert('1', [0x20, 0x60, 0x20, 0x20, 0x20, 0x20, 0x70, 0x00]);
        m.insert('2', [0x70, 0x88, 0x08, 0x30, 0x40, 0x80, 0xF8, 0x00]);
        m.insert('3', [0x70, 0x88, 0x08, 0x30, 0x08, 0x88, 0x70, 0x00]);
        m.insert('4', [0x10, 0x30, 0x50, 0x90, 0xF8, 0x10, 0x10, 0x00]);
        m.insert('5', [0xF8, 0x80, 0xF0, 0x08, 0x08, 0x88, 0x70, 0x00]);
        m.insert('6', [0x30, 0x40, 0x80, 0xF0, 0x88, 0x88, 0x70, 0x00]);
        m.insert('7', [0xF8, 0x08, 0x10, 0x20, 0x40, 0x40, 0x40, 0x00]);
        m.insert('8', [0x70, 0x88, 0x88, 0x70, 0x88, 0x88, 0x70, 0x00]);
        m.insert('9', [0x70, 0x88, 0x88, 0x78, 0x08, 0x10, 0x60, 0x00]);
        m.insert(':', [0x00, 0x60, 0x60, 0x00, 0x60, 0x60, 0x00, 0x00]);
        m.insert(';', [0x00, 0x60, 0x60, 0x00, 0x60, 0x20, 0x40, 0x00]);
        m.insert('<', [0x10, 0x20, 0x40, 0x80, 0x40, 0x20, 0x10, 0x00]);
        m.insert('=', [0x00, 0x00, 0xF8, 0x00, 0xF8, 0x00, 0x00, 0x00]);
        m.insert('>', [0x40, 0x20, 0x10, 0x08, 0x10, 0x20, 0x40, 0x00]);
        m.insert('?', [0x70, 0x88, 0x08, 0x10, 0x20, 0x00, 0x20, 0x00]);
        m.insert('@', [0x70, 0x88, 0x08, 0x68, 0xA8, 0xA8, 0x70, 0x00]);
        m.insert('A', [0x20, 0x50, 0x88, 0x88, 0xF8, 0x88, 0x88, 0x00]);
        m.insert('B', [0xF0, 0x88, 0x88, 0xF0, 0x88, 0x88, 0xF0, 0x00]);
        m.insert('C', [0x70, 0x88, 0x80, 0x80, 0x80, 0x88, 0x70, 0x00]);
        m.insert('D', [0xE0, 0x90, 0x88, 0x88, 0x88, 0x90, 0xE0, 0x00]);
        m.insert('E', [0xF8, 0x80, 0x80, 0xF0, 0x80, 0x80, 0xF8, 0x00]);
        m.insert('F', [0xF8, 0x80, 0x80, 0xF0, 0x80, 0x80, 0x80, 0x00]);
        m.insert('G', [0x70, 0x88, 0x80, 0xB8, 0x88, 0x88, 0x78, 0x00]);
        m.insert('H', [0x88, 0x88, 0x88, 0xF8, 0x88, 0x88, 0x88, 0x00]);
        m.insert('I', [0x70, 0x20, 0x20, 0x20, 0x20, 0x20, 0x70, 0x00]);
        m.insert('J', [0x38, 0x10, 0x10, 0x10, 0x10, 0x90, 0x60, 0x00]);
        m.insert('K', [0x88, 0x90, 0xA0, 0xC0, 0xA0, 0x90, 0x88, 0x00]);
        m.insert('L', [0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0xF8, 0x00]);
        m.insert('M', [0x88, 0xD8, 0xA8, 0xA8, 0x88, 0x88, 0x88, 0x00]);
        m.insert('N', [0x88, 0xC8, 0xA8, 0x98, 0x88, 0x88, 0x88, 0x00]);
        m.insert('O', [0x70, 0x88, 0x88, 0x88, 0x88, 0x88, 0x70, 0x00]);
        m.insert('P', [0xF0, 0x88, 0x88, 0xF0, 0x80, 0x80, 0x80, 0x00]);
        m.insert('Q', [0x70, 0x88, 0x88, 0x88, 0xA8, 0x90, 0x68, 0x00]);
        m.insert('R', [0xF0, 0x88, 0x88, 0xF0, 0xA0, 0x90, 0x88, 0x00]);
        m.insert('S', [0x78, 0x80, 0x80, 0x70, 0x08, 0x08, 0xF0, 0x00]);
        m.insert('T', [0xF8, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x00]);
        m.insert('U', [0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x70, 0x00]);
        m.insert('V', [0x88, 0x88, 0x88, 0x88, 0x88, 0x50, 0x20, 0x00]);
        m.insert('W', [0x88, 0x88, 0x88, 0xA8, 0xA8, 0xA8, 0x50, 0x00]);
        m.insert('X', [0x88, 0x88, 0x50, 0x20, 0x50, 0x88, 0x88, 0x00]);
        m.insert('Y', [0x88, 0x88, 0x88, 0x50, 0x20, 0x20, 0x20, 0x00]);
        m.insert('Z', [0xF8, 0x08, 0x10, 0x20, 0x40, 0x80, 0xF8, 0x00]);
        m.insert('[', [0x70, 0x40, 0x40, 0x40, 0x40, 0x40, 0x70, 0x00]);
        m.insert('\\', [0x80, 0x40, 0x40, 0x20, 0x10, 0x10, 0x08, 0x00]);
        m.insert(']', [0x70, 0x10, 0x10, 0x10, 0x10, 0x10, 0x70, 0x00]);
        m.insert('^', [0x20, 0x50, 0x88, 0x00, 0x00, 0x00, 0x00, 0x00]);
        m.insert('_', [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF8, 0x00]);
        m
    };
}

/// Look up the bitmap for a character
pub fn glyph(c: char) -> [u8; 8] {
    if let Some(rows) = GLYPHS.get(&c) {
        return *rows;
    }
    // Lowercase folds to the uppercase form
    let upper = c.to_ascii_uppercase();
    *GLYPHS.get(&upper).unwrap_or(&FALLBACK)
}

/// Whether the character has its own bitmap (after case folding)
pub fn has_glyph(c: char) -> bool {
    GLYPHS.contains_key(&c) || GLYPHS.contains_key(&c.to_ascii_uppercase())
}

/// Draw a glyph onto a grayscale canvas
///
/// Pixels outside the canvas are clipped silently.
///
/// # Arguments
/// * `canvas` - Target canvas
/// * `x`, `y` - Top-left pixel of the glyph
/// * `c` - Character to draw
/// * `fill` - Brightness of the set pixels
pub fn draw_glyph(canvas: &mut GrayImage, x: u32, y: u32, c: char, fill: u8) {
    let rows = glyph(c);
    for (dy, bits) in rows.iter().enumerate() {
        for dx in 0..GLYPH_SIZE {
            if bits & (0x80 >> dx) == 0 {
                continue;
            }
            let px = x + dx;
            let py = y + dy as u32;
            if px < canvas.width() && py < canvas.height() {
                canvas.put_pixel(px, py, Luma([fill]));
            }
        }
    }
}

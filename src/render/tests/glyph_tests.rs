//! Tests for the glyph variant and built-in font

use std::path::Path;

use image::{GrayImage, Luma};

use crate::ascii::errors::AsciiError;
use crate::ascii::grid::AsciiGrid;
use crate::ascii::palette::Palette;
use crate::render::builtin_font::{draw_glyph, glyph, has_glyph, GLYPH_SIZE};
use crate::render::glyph::GlyphRenderer;
use crate::render::strategy::render_raster;

#[test]
fn test_builtin_cell_size_is_fixed_spacing() {
    assert_eq!(GlyphRenderer::builtin().cell_size(), 11);
}

#[test]
fn test_missing_font_file_is_font_load_error() {
    let result = GlyphRenderer::from_file(Path::new("/no/such/font.ttf"), 16.0);
    assert!(matches!(result, Err(AsciiError::FontLoad(_))));
}

#[test]
fn test_glyph_table_covers_default_palette() {
    for c in ['#', '$', '*', '!', '\'', ' '] {
        assert!(has_glyph(c), "missing glyph for {:?}", c);
    }
}

#[test]
fn test_lowercase_folds_to_uppercase() {
    assert_eq!(glyph('a'), glyph('A'));
    assert_eq!(glyph('z'), glyph('Z'));
}

#[test]
fn test_space_glyph_draws_nothing() {
    let mut canvas = GrayImage::from_pixel(8, 8, Luma([255u8]));
    draw_glyph(&mut canvas, 0, 0, ' ', 0);
    assert!(canvas.pixels().all(|p| p.0[0] == 255));
}

#[test]
fn test_glyph_draws_with_requested_fill() {
    let mut canvas = GrayImage::from_pixel(8, 8, Luma([255u8]));
    draw_glyph(&mut canvas, 0, 0, '#', 70);
    let marked = canvas.pixels().filter(|p| p.0[0] == 70).count();
    assert!(marked > 0);
    assert!(canvas.pixels().all(|p| p.0[0] == 70 || p.0[0] == 255));
}

#[test]
fn test_glyph_clips_at_canvas_edge() {
    // Drawing past the right edge must not panic
    let mut canvas = GrayImage::from_pixel(4, 4, Luma([255u8]));
    draw_glyph(&mut canvas, 2, 2, '#', 0);
    assert_eq!(canvas.width(), 4);
}

#[test]
fn test_glyph_fits_declared_size() {
    let rows = glyph('W');
    assert_eq!(rows.len() as u32, GLYPH_SIZE);
}

#[test]
fn test_text_render_writes_symbols_in_cell_brightness() {
    let source = std::env::temp_dir()
        .join(format!("im2a_render_{}_text_src.png", std::process::id()));
    let grid = AsciiGrid::from_brightness(vec![vec![0, 0], vec![0, 0]], &Palette::default());

    let renderer = GlyphRenderer::builtin();
    let output = render_raster(&grid, renderer.cell_size(), &renderer, &source).unwrap();
    assert!(output.to_string_lossy().ends_with("_text.png"));

    let canvas = image::open(&output).unwrap().to_luma8();
    assert_eq!(canvas.dimensions(), (22, 22));
    // '#' glyphs drawn at brightness 0 on the white background
    assert!(canvas.pixels().any(|p| p.0[0] == 0));
    assert!(canvas.pixels().any(|p| p.0[0] == 255));
}

//! Render strategy definitions
//!
//! This module defines the strategy pattern for the render variants. Every
//! raster variant shares the same iteration skeleton: allocate a white
//! canvas, walk the grid row-major, delegate each cell to the variant's
//! draw hook, save the artifact. Variants only supply their file suffix
//! and per-cell drawing.

use std::path::{Path, PathBuf};

use image::{GrayImage, Luma};
use log::{error, info};

use crate::ascii::errors::{AsciiError, AsciiResult};
use crate::ascii::grid::AsciiGrid;
use crate::utils::path_utils;

/// Per-cell context handed to a renderer's draw hook
#[derive(Debug, Clone, Copy)]
pub struct CellContext {
    /// Grid row of the cell
    pub row: usize,
    /// Grid column of the cell
    pub col: usize,
    /// Pixel x of the cell's top-left corner on the canvas
    pub origin_x: u32,
    /// Pixel y of the cell's top-left corner on the canvas
    pub origin_y: u32,
    /// Cell side length in pixels
    pub cell_size: u32,
    /// Average brightness of the cell
    pub brightness: u8,
    /// Palette symbol of the cell
    pub symbol: char,
}

/// Strategy interface for the raster render variants
///
/// Implementors draw one cell at a time onto a shared grayscale canvas.
/// The iteration, canvas allocation and persistence live in
/// `render_raster` so variants stay small.
pub trait CellRenderer {
    /// File-name suffix appended to the source base name (e.g. "_blocks")
    fn file_suffix(&self) -> &'static str;

    /// Draw one cell onto the canvas
    ///
    /// # Arguments
    /// * `canvas` - Output canvas, white background
    /// * `ctx` - Cell coordinates, geometry and sampled values
    fn draw_cell(&self, canvas: &mut GrayImage, ctx: &CellContext) -> AsciiResult<()>;
}

/// Run the shared render loop for one raster variant
///
/// Allocates a `columns * cell_size` by `rows * cell_size` white canvas,
/// iterates rows top-to-bottom and columns left-to-right, and invokes the
/// renderer for each cell. A failed cell is logged with its coordinates
/// and aborts the render; no partially-drawn artifact is saved.
///
/// # Arguments
/// * `grid` - Sampled grid pair to render
/// * `cell_size` - Output cell side in pixels
/// * `renderer` - Variant-specific draw hook
/// * `source_path` - Input image path the output name derives from
///
/// # Returns
/// Path of the written artifact
pub fn render_raster(
    grid: &AsciiGrid,
    cell_size: u32,
    renderer: &dyn CellRenderer,
    source_path: &Path,
) -> AsciiResult<PathBuf> {
    let output = path_utils::suffixed_path(source_path, renderer.file_suffix(), "png");

    let width = grid.columns() as u32 * cell_size;
    let height = grid.rows() as u32 * cell_size;
    let mut canvas = GrayImage::from_pixel(width, height, Luma([255u8]));

    for row in 0..grid.rows() {
        for col in 0..grid.columns() {
            let ctx = CellContext {
                row,
                col,
                origin_x: col as u32 * cell_size,
                origin_y: row as u32 * cell_size,
                cell_size,
                brightness: grid.brightness_at(row, col),
                symbol: grid.symbol_at(row, col),
            };
            if let Err(e) = renderer.draw_cell(&mut canvas, &ctx) {
                error!("Draw failed at row {}, col {}: {}", row, col, e);
                return Err(AsciiError::CellDraw { row, col, message: e.to_string() });
            }
        }
    }

    canvas
        .save(&output)
        .map_err(|e| AsciiError::FileWrite(output.display().to_string(), e.to_string()))?;
    info!("Wrote {} ({}x{} px)", output.display(), width, height);
    Ok(output)
}

//! Shape render variants
//!
//! The three shape renderers: flat gray squares, inscribed gray ellipses
//! and brightness-scaled black dots. All draw through imageproc primitives
//! onto the shared grayscale canvas.

use image::{GrayImage, Luma};
use imageproc::drawing::{draw_filled_ellipse_mut, draw_filled_rect_mut};
use imageproc::rect::Rect;

use crate::ascii::errors::AsciiResult;
use crate::render::strategy::{CellContext, CellRenderer};

/// Fills each cell with a flat gray square of its brightness
pub struct BlockRenderer;

impl CellRenderer for BlockRenderer {
    fn file_suffix(&self) -> &'static str {
        "_blocks"
    }

    fn draw_cell(&self, canvas: &mut GrayImage, ctx: &CellContext) -> AsciiResult<()> {
        let rect = Rect::at(ctx.origin_x as i32, ctx.origin_y as i32)
            .of_size(ctx.cell_size, ctx.cell_size);
        draw_filled_rect_mut(canvas, rect, Luma([ctx.brightness]));
        Ok(())
    }
}

/// Draws a gray ellipse inscribed in each cell square
pub struct EllipseRenderer;

impl CellRenderer for EllipseRenderer {
    fn file_suffix(&self) -> &'static str {
        "_ellipse"
    }

    fn draw_cell(&self, canvas: &mut GrayImage, ctx: &CellContext) -> AsciiResult<()> {
        let radius = (ctx.cell_size / 2) as i32;
        let center = cell_center(ctx);
        draw_filled_ellipse_mut(canvas, center, radius, radius, Luma([ctx.brightness]));
        Ok(())
    }
}

/// Draws a black dot sized inversely to brightness
///
/// Radius is `cell_size - round(brightness / 255 * cell_size)`: a black
/// cell fills the whole cell and beyond, a white cell collapses to an
/// invisible zero-radius dot. The fill is always black.
pub struct DotRenderer;

impl CellRenderer for DotRenderer {
    fn file_suffix(&self) -> &'static str {
        "_dot"
    }

    fn draw_cell(&self, canvas: &mut GrayImage, ctx: &CellContext) -> AsciiResult<()> {
        let radius = dot_radius(ctx.brightness, ctx.cell_size);
        if radius > 0 {
            let center = cell_center(ctx);
            draw_filled_ellipse_mut(canvas, center, radius, radius, Luma([0u8]));
        }
        Ok(())
    }
}

/// Dot radius for a brightness value, darker cells giving larger dots
pub fn dot_radius(brightness: u8, cell_size: u32) -> i32 {
    let size = f64::from(cell_size);
    (size - (f64::from(brightness) / 255.0 * size).round()) as i32
}

fn cell_center(ctx: &CellContext) -> (i32, i32) {
    let half = (ctx.cell_size / 2) as i32;
    (ctx.origin_x as i32 + half, ctx.origin_y as i32 + half)
}

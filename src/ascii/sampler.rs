//! Block sampling of a luminance image
//!
//! Walks the image in fixed-size square blocks and reduces each block to
//! its average brightness. Boundary blocks are clipped to the image bounds
//! rather than padded, so the final row/column of blocks may cover fewer
//! than `block_size * block_size` pixels.

use image::GrayImage;
use log::debug;

use crate::ascii::errors::{AsciiError, AsciiResult};

/// Samples an image into a brightness grid
#[derive(Debug, Clone, Copy)]
pub struct Sampler {
    block_size: u32,
}

impl Sampler {
    /// Create a sampler for the given block side length
    ///
    /// # Arguments
    /// * `block_size` - Side length of the sampling square, must be >= 1
    pub fn new(block_size: u32) -> AsciiResult<Self> {
        if block_size == 0 {
            return Err(AsciiError::InvalidBlockSize(block_size));
        }
        Ok(Sampler { block_size })
    }

    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    /// Sample the image into a row-major brightness grid
    ///
    /// Produces `ceil(height / block_size)` rows of
    /// `ceil(width / block_size)` columns. Block origins step by
    /// `block_size`; each block rectangle is clipped to
    /// `[x, y, min(x + B, width), min(y + B, height)]`.
    pub fn sample(&self, image: &GrayImage) -> Vec<Vec<u8>> {
        let (width, height) = image.dimensions();
        let block = self.block_size;
        let mut grid = Vec::with_capacity(height.div_ceil(block) as usize);

        let mut y = 0;
        while y < height {
            let mut row = Vec::with_capacity(width.div_ceil(block) as usize);
            let mut x = 0;
            while x < width {
                row.push(self.block_average(image, x, y));
                x += block;
            }
            grid.push(row);
            y += block;
        }

        debug!("Sampled {}x{} image into {} rows with block size {}",
               width, height, grid.len(), block);
        grid
    }

    /// Average brightness of one clipped block
    ///
    /// Uses round-half-away-from-zero semantics (`f64::round`). An empty
    /// block averages to 255, white as the fail-safe.
    fn block_average(&self, image: &GrayImage, x: u32, y: u32) -> u8 {
        let (width, height) = image.dimensions();
        let x_end = (x + self.block_size).min(width);
        let y_end = (y + self.block_size).min(height);

        let mut sum: u64 = 0;
        let mut count: u64 = 0;
        for py in y..y_end {
            for px in x..x_end {
                sum += u64::from(image.get_pixel(px, py).0[0]);
                count += 1;
            }
        }

        if count == 0 {
            return 255;
        }
        (sum as f64 / count as f64).round() as u8
    }
}

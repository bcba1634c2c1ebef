//! Conversion engine
//!
//! `Image2Ascii` owns the decoded luminance image, the active palette and
//! the sampled grid pair. The grid is computed lazily: any render request
//! first ensures a sampling pass has run since the last palette change.

use std::path::{Path, PathBuf};

use image::GrayImage;
use log::{debug, info};

use crate::ascii::errors::{AsciiError, AsciiResult};
use crate::ascii::grid::AsciiGrid;
use crate::ascii::palette::Palette;
use crate::ascii::sampler::Sampler;
use crate::render::ascii_text;
use crate::render::glyph::GlyphRenderer;
use crate::render::raster::{BlockRenderer, DotRenderer, EllipseRenderer};
use crate::render::strategy;

/// Sampling state of the engine
///
/// Replacing the palette drops back to `Unsampled`, which discards the
/// previous grids along with any appended title rows. Holding the grid
/// inside the `Sampled` variant makes a stale grid unrepresentable.
#[derive(Debug)]
enum GridState {
    Unsampled,
    Sampled(AsciiGrid),
}

/// Translates an image into ASCII grids and render artifacts
pub struct Image2Ascii {
    source_path: PathBuf,
    image: GrayImage,
    block_size: u32,
    palette: Palette,
    state: GridState,
}

impl Image2Ascii {
    /// Open an image for conversion
    ///
    /// The image is decoded and converted to 8-bit luminance immediately.
    ///
    /// # Arguments
    /// * `path` - Path to any raster format the image crate can decode
    /// * `block_size` - Side length of the sampling square, must be >= 1
    /// * `palette` - Dark-to-light symbol palette
    ///
    /// # Returns
    /// A new engine, or `ImageOpen` if decoding fails
    pub fn open(path: &Path, block_size: u32, palette: Palette) -> AsciiResult<Self> {
        // Validate up front so a bad block size fails at construction
        Sampler::new(block_size)?;

        let image = image::open(path)
            .map_err(|e| AsciiError::ImageOpen(path.display().to_string(), e))?
            .to_luma8();
        info!("Opened {} ({}x{}), block size {}",
              path.display(), image.width(), image.height(), block_size);

        Ok(Image2Ascii {
            source_path: path.to_path_buf(),
            image,
            block_size,
            palette,
            state: GridState::Unsampled,
        })
    }

    /// Open with the default block size (10) and default palette
    pub fn open_with_defaults(path: &Path) -> AsciiResult<Self> {
        Image2Ascii::open(path, 10, Palette::default())
    }

    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Whether a sampling pass has run since the last palette change
    pub fn is_sampled(&self) -> bool {
        matches!(self.state, GridState::Sampled(_))
    }

    /// The current grid pair, if a sampling pass has run
    pub fn grid(&self) -> Option<&AsciiGrid> {
        match &self.state {
            GridState::Sampled(grid) => Some(grid),
            GridState::Unsampled => None,
        }
    }

    /// Replace the active palette
    ///
    /// An empty palette is rejected with `InvalidPalette`; the previous
    /// palette and the sampling state stay untouched in that case. A valid
    /// palette resets the engine to unsampled so the next render derives
    /// symbols from the new banding.
    pub fn set_palette(&mut self, symbols: &[char]) -> AsciiResult<()> {
        let palette = Palette::new(symbols)?;
        debug!("Palette replaced ({} symbols), grid invalidated", palette.len());
        self.palette = palette;
        self.state = GridState::Unsampled;
        Ok(())
    }

    /// Run the sampling pass if the grid is stale
    ///
    /// A fresh pass discards the previous grids, including any title rows
    /// appended to them.
    pub fn sample(&mut self) -> AsciiResult<()> {
        if let GridState::Sampled(_) = self.state {
            return Ok(());
        }
        let brightness = Sampler::new(self.block_size)?.sample(&self.image);
        let grid = AsciiGrid::from_brightness(brightness, &self.palette);
        info!("Sampling pass complete: {} rows x {} columns", grid.rows(), grid.columns());
        self.state = GridState::Sampled(grid);
        Ok(())
    }

    fn sampled_grid(&self) -> AsciiResult<&AsciiGrid> {
        match &self.state {
            GridState::Sampled(grid) => Ok(grid),
            GridState::Unsampled => Err(AsciiError::NotSampled),
        }
    }

    /// Append a title banner to the sampled grid
    ///
    /// Samples lazily first, then delegates to the grid composer. Title
    /// rows persist until the next re-sampling pass discards them.
    pub fn add_title(&mut self, text: &str, filler: char, color: u8) -> AsciiResult<()> {
        self.sample()?;
        match &mut self.state {
            GridState::Sampled(grid) => grid.add_title(text, filler, color),
            GridState::Unsampled => Err(AsciiError::NotSampled),
        }
    }

    /// Write the symbol grid as plain text to `<base>_ascii.txt`
    pub fn render_ascii(&mut self) -> AsciiResult<PathBuf> {
        self.sample()?;
        ascii_text::write_ascii(self.sampled_grid()?, &self.source_path)
    }

    /// Render flat gray squares to `<base>_blocks.png`
    ///
    /// # Arguments
    /// * `cell_size` - Output cell side in pixels, engine block size if `None`
    pub fn render_blocks(&mut self, cell_size: Option<u32>) -> AsciiResult<PathBuf> {
        self.sample()?;
        strategy::render_raster(
            self.sampled_grid()?,
            cell_size.unwrap_or(self.block_size),
            &BlockRenderer,
            &self.source_path,
        )
    }

    /// Render inscribed gray ellipses to `<base>_ellipse.png`
    pub fn render_ellipse(&mut self, cell_size: Option<u32>) -> AsciiResult<PathBuf> {
        self.sample()?;
        strategy::render_raster(
            self.sampled_grid()?,
            cell_size.unwrap_or(self.block_size),
            &EllipseRenderer,
            &self.source_path,
        )
    }

    /// Render brightness-scaled black dots to `<base>_dot.png`
    pub fn render_dot(&mut self, cell_size: Option<u32>) -> AsciiResult<PathBuf> {
        self.sample()?;
        strategy::render_raster(
            self.sampled_grid()?,
            cell_size.unwrap_or(self.block_size),
            &DotRenderer,
            &self.source_path,
        )
    }

    /// Render styled glyphs to `<base>_text.png`
    ///
    /// With no font path the built-in bitmap font and its fixed spacing
    /// are used. An explicit font path that fails to load is a `FontLoad`
    /// error; when it loads, the font's measured line height replaces the
    /// block size as the cell size.
    pub fn render_text(&mut self, font_path: Option<&Path>, font_size: f32) -> AsciiResult<PathBuf> {
        self.sample()?;
        let renderer = match font_path {
            Some(path) => GlyphRenderer::from_file(path, font_size)?,
            None => GlyphRenderer::builtin(),
        };
        strategy::render_raster(
            self.sampled_grid()?,
            renderer.cell_size(),
            &renderer,
            &self.source_path,
        )
    }
}

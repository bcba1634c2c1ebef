use std::path::{Path, PathBuf};
use log::info;

use crate::ascii::errors::AsciiResult;
use crate::ascii::engine::Image2Ascii;
use crate::ascii::palette::Palette;
use crate::utils::logger::Logger;

/// Render variants the engine can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Plain text file of palette symbols
    Ascii,
    /// Flat gray squares
    Blocks,
    /// Inscribed gray ellipses
    Ellipse,
    /// Brightness-scaled black dots
    Dot,
    /// Styled glyph image
    Text,
}

/// Options for a render run
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Sampling block side length in source pixels
    pub block_size: u32,
    /// Replacement palette, darkest to lightest; default palette if None
    pub palette: Option<Vec<char>>,
    /// Variants to produce, in order
    pub variants: Vec<Variant>,
    /// Output cell side override for the shape variants
    pub cell_size: Option<u32>,
    /// TrueType font for the glyph variant; built-in bitmap font if None
    pub font_path: Option<PathBuf>,
    /// Font size in pixels for a TrueType font
    pub font_size: f32,
    /// Title banner appended below the sampled grid
    pub title: Option<String>,
    /// Symbol standing in for spaces and padding in the banner
    pub title_filler: char,
    /// Brightness of the banner characters
    pub title_color: u8,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            block_size: 10,
            palette: None,
            variants: vec![Variant::Ascii, Variant::Blocks, Variant::Ellipse,
                           Variant::Dot, Variant::Text],
            cell_size: None,
            font_path: None,
            font_size: 11.0,
            title: None,
            title_filler: '*',
            title_color: 0,
        }
    }
}

/// Main interface to the im2a library
pub struct Im2a {
    logger: Logger,
}

impl Im2a {
    /// Create a new Im2a instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "im2a.log"
    ///
    /// # Returns
    /// An Im2a instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> AsciiResult<Self> {
        let log_path = log_file.unwrap_or("im2a.log");
        let logger = Logger::new(log_path)?;
        Ok(Im2a { logger })
    }

    /// Summarize an image and its sampled grid
    ///
    /// # Arguments
    /// * `input_path` - Path to the image to inspect
    /// * `block_size` - Sampling block side length
    ///
    /// # Returns
    /// Human-readable summary text or an error
    pub fn describe(&self, input_path: &Path, block_size: u32) -> AsciiResult<String> {
        let mut engine = Image2Ascii::open(input_path, block_size, Palette::default())?;
        engine.sample()?;

        let mut result = String::from("Conversion summary:\n");
        result.push_str(&format!("  Input: {}\n", input_path.display()));
        result.push_str(&format!("  Block size: {}\n", engine.block_size()));
        if let Some(grid) = engine.grid() {
            result.push_str(&format!("  Grid: {} rows x {} columns\n",
                                     grid.rows(), grid.columns()));
        }
        let symbols: String = engine.palette().symbols().iter().collect();
        result.push_str(&format!("  Palette ({} symbols): {:?}\n",
                                 engine.palette().len(), symbols));

        self.logger.log(&result)?;
        Ok(result)
    }

    /// Run a full render pass over an image
    ///
    /// Opens the image, applies the palette and title options, then
    /// produces every requested variant in order.
    ///
    /// # Arguments
    /// * `input_path` - Path to the source image
    /// * `options` - Render options
    ///
    /// # Returns
    /// The written artifact paths, in variant order
    pub fn render(&self, input_path: &Path, options: &RenderOptions) -> AsciiResult<Vec<PathBuf>> {
        info!("Rendering {} ({} variants)", input_path.display(), options.variants.len());

        let mut engine = Image2Ascii::open(input_path, options.block_size, Palette::default())?;
        if let Some(symbols) = &options.palette {
            engine.set_palette(symbols)?;
        }
        if let Some(title) = &options.title {
            engine.add_title(title, options.title_filler, options.title_color)?;
        }

        let mut outputs = Vec::with_capacity(options.variants.len());
        for variant in &options.variants {
            let path = match variant {
                Variant::Ascii => engine.render_ascii()?,
                Variant::Blocks => engine.render_blocks(options.cell_size)?,
                Variant::Ellipse => engine.render_ellipse(options.cell_size)?,
                Variant::Dot => engine.render_dot(options.cell_size)?,
                Variant::Text => engine.render_text(
                    options.font_path.as_deref(), options.font_size)?,
            };
            outputs.push(path);
        }

        self.logger.print_artifacts(&outputs)?;
        Ok(outputs)
    }
}

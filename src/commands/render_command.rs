//! Render command
//!
//! This module implements the command for converting an image into the
//! requested render variants, with palette, title, cell-size and font
//! handling parsed from the CLI arguments.

use std::path::PathBuf;

use clap::ArgMatches;
use log::info;

use crate::api::{RenderOptions, Variant};
use crate::ascii::engine::Image2Ascii;
use crate::ascii::errors::{AsciiError, AsciiResult};
use crate::ascii::palette::Palette;
use crate::commands::command_traits::Command;
use crate::utils::logger::Logger;

/// Command for rendering an image into ASCII artifacts
pub struct RenderCommand<'a> {
    /// Path to the input image
    input_file: PathBuf,
    /// Parsed render options
    options: RenderOptions,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> RenderCommand<'a> {
    /// Create a new render command from CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new RenderCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> AsciiResult<Self> {
        let input_file = args.get_one::<String>("input")
            .map(PathBuf::from)
            .ok_or_else(|| AsciiError::GenericError("Missing input file".to_string()))?;
        info!("Input file: {}", input_file.display());

        let mut options = RenderOptions {
            variants: parse_variants(args),
            ..RenderOptions::default()
        };

        if let Some(block) = args.get_one::<String>("block-size") {
            options.block_size = block.parse::<u32>()
                .map_err(|_| AsciiError::GenericError(format!("Invalid block size: {}", block)))?;
        }

        if let Some(palette) = args.get_one::<String>("palette") {
            options.palette = Some(palette.chars().collect());
        }

        if let Some(cell) = args.get_one::<String>("cell-size") {
            options.cell_size = Some(cell.parse::<u32>()
                .map_err(|_| AsciiError::GenericError(format!("Invalid cell size: {}", cell)))?);
        }

        options.font_path = args.get_one::<String>("font").map(PathBuf::from);
        if let Some(size) = args.get_one::<String>("font-size") {
            options.font_size = size.parse::<f32>()
                .map_err(|_| AsciiError::GenericError(format!("Invalid font size: {}", size)))?;
        }

        options.title = args.get_one::<String>("title").cloned();
        if let Some(filler) = args.get_one::<String>("title-filler") {
            options.title_filler = filler.chars().next()
                .ok_or_else(|| AsciiError::GenericError("Empty title filler".to_string()))?;
        }
        if let Some(color) = args.get_one::<String>("title-color") {
            options.title_color = color.parse::<u8>()
                .map_err(|_| AsciiError::GenericError(format!("Invalid title color: {}", color)))?;
        }

        Ok(RenderCommand { input_file, options, logger })
    }
}

impl<'a> Command for RenderCommand<'a> {
    fn execute(&self) -> AsciiResult<()> {
        let mut engine = Image2Ascii::open(
            &self.input_file, self.options.block_size, Palette::default())?;
        if let Some(symbols) = &self.options.palette {
            engine.set_palette(symbols)?;
        }
        if let Some(title) = &self.options.title {
            engine.add_title(title, self.options.title_filler, self.options.title_color)?;
        }

        for variant in &self.options.variants {
            let path = match variant {
                Variant::Ascii => engine.render_ascii()?,
                Variant::Blocks => engine.render_blocks(self.options.cell_size)?,
                Variant::Ellipse => engine.render_ellipse(self.options.cell_size)?,
                Variant::Dot => engine.render_dot(self.options.cell_size)?,
                Variant::Text => engine.render_text(
                    self.options.font_path.as_deref(), self.options.font_size)?,
            };
            self.logger.log(&format!("Wrote {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        Ok(())
    }
}

/// Read the variant flags; no flag at all means every variant
fn parse_variants(args: &ArgMatches) -> Vec<Variant> {
    let mut variants = Vec::new();
    if args.get_flag("ascii") {
        variants.push(Variant::Ascii);
    }
    if args.get_flag("blocks") {
        variants.push(Variant::Blocks);
    }
    if args.get_flag("ellipse") {
        variants.push(Variant::Ellipse);
    }
    if args.get_flag("dot") {
        variants.push(Variant::Dot);
    }
    if args.get_flag("text-image") {
        variants.push(Variant::Text);
    }
    if variants.is_empty() {
        variants = vec![Variant::Ascii, Variant::Blocks, Variant::Ellipse,
                        Variant::Dot, Variant::Text];
    }
    variants
}

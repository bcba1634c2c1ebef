//! Image info command
//!
//! This module implements the command for printing a summary of an image
//! and the grid a sampling pass would produce, without writing artifacts.

use std::path::PathBuf;

use clap::ArgMatches;
use log::info;

use crate::ascii::engine::Image2Ascii;
use crate::ascii::errors::{AsciiError, AsciiResult};
use crate::ascii::palette::Palette;
use crate::commands::command_traits::Command;
use crate::utils::logger::Logger;

/// Command for summarizing an image's sampled grid
pub struct InfoCommand<'a> {
    /// Path to the input image
    input_file: PathBuf,
    /// Sampling block side length
    block_size: u32,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> InfoCommand<'a> {
    /// Create a new info command from CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> AsciiResult<Self> {
        let input_file = args.get_one::<String>("input")
            .map(PathBuf::from)
            .ok_or_else(|| AsciiError::GenericError("Missing input file".to_string()))?;

        let block_size = match args.get_one::<String>("block-size") {
            Some(block) => block.parse::<u32>()
                .map_err(|_| AsciiError::GenericError(format!("Invalid block size: {}", block)))?,
            None => 10,
        };

        info!("Info requested for {}", input_file.display());
        Ok(InfoCommand { input_file, block_size, logger })
    }
}

impl<'a> Command for InfoCommand<'a> {
    fn execute(&self) -> AsciiResult<()> {
        let mut engine = Image2Ascii::open(
            &self.input_file, self.block_size, Palette::default())?;
        engine.sample()?;

        let mut summary = String::from("Conversion summary:\n");
        summary.push_str(&format!("  Input: {}\n", self.input_file.display()));
        summary.push_str(&format!("  Block size: {}\n", engine.block_size()));
        if let Some(grid) = engine.grid() {
            summary.push_str(&format!("  Grid: {} rows x {} columns\n",
                                      grid.rows(), grid.columns()));
        }
        let symbols: String = engine.palette().symbols().iter().collect();
        summary.push_str(&format!("  Palette ({} symbols): {:?}\n",
                                  engine.palette().len(), symbols));

        self.logger.log(&summary)?;
        println!("{}", summary);
        Ok(())
    }
}

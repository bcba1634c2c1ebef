//! CLI command implementations
//!
//! Command pattern wiring for the binary: a trait for executable
//! commands, a factory that picks the command from the parsed arguments,
//! and the concrete render and info commands.

pub mod command_traits;
pub mod render_command;
pub mod info_command;

use clap::ArgMatches;
use log::debug;

use crate::ascii::errors::AsciiResult;
use crate::utils::logger::Logger;

pub use command_traits::{Command, CommandFactory};
pub use render_command::RenderCommand;
pub use info_command::InfoCommand;

/// Default factory creating im2a commands
pub struct Im2aCommandFactory;

impl Im2aCommandFactory {
    pub fn new() -> Self {
        Im2aCommandFactory
    }
}

impl Default for Im2aCommandFactory {
    fn default() -> Self {
        Im2aCommandFactory::new()
    }
}

impl<'a> CommandFactory<'a> for Im2aCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger)
        -> AsciiResult<Box<dyn Command + 'a>> {
        if args.get_flag("info") {
            debug!("Creating info command");
            Ok(Box::new(InfoCommand::new(args, logger)?))
        } else {
            debug!("Creating render command");
            Ok(Box::new(RenderCommand::new(args, logger)?))
        }
    }
}

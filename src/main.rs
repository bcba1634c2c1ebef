use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::error;

use im2a::utils::logger::Logger;
use im2a::commands::{CommandFactory, Im2aCommandFactory};

fn main() {
    let matches = ClapCommand::new("im2a")
        .version("0.1")
        .about("Convert an image to ASCII art and raster render variants")
        .arg(
            Arg::new("input")
                .help("Input image file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("block-size")
                .short('b')
                .long("block-size")
                .help("Side length of the sampling square in pixels")
                .value_name("PIXELS")
                .required(false),
        )
        .arg(
            Arg::new("palette")
                .short('p')
                .long("palette")
                .help("Symbol palette, darkest to lightest (e.g. \"#$*!' \")")
                .value_name("SYMBOLS")
                .required(false),
        )
        .arg(
            Arg::new("ascii")
                .long("ascii")
                .help("Write the plain-text variant")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("blocks")
                .long("blocks")
                .help("Write the gray-blocks variant")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("ellipse")
                .long("ellipse")
                .help("Write the ellipse variant")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dot")
                .long("dot")
                .help("Write the scaled-dot variant")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("text-image")
                .long("text-image")
                .help("Write the styled-glyph variant")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("cell-size")
                .long("cell-size")
                .help("Output cell size in pixels for the shape variants")
                .value_name("PIXELS")
                .required(false),
        )
        .arg(
            Arg::new("font")
                .long("font")
                .help("TrueType font file for the styled-glyph variant")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("font-size")
                .long("font-size")
                .help("Font size in pixels for the styled-glyph variant")
                .value_name("PIXELS")
                .required(false),
        )
        .arg(
            Arg::new("title")
                .long("title")
                .help("Title banner appended below the grid")
                .value_name("TEXT")
                .required(false),
        )
        .arg(
            Arg::new("title-filler")
                .long("title-filler")
                .help("Filler symbol for spaces in the title banner")
                .value_name("CHAR")
                .required(false),
        )
        .arg(
            Arg::new("title-color")
                .long("title-color")
                .help("Brightness of the title characters (0-255)")
                .value_name("VALUE")
                .required(false),
        )
        .arg(
            Arg::new("info")
                .short('i')
                .long("info")
                .help("Print a summary of the sampled grid instead of rendering")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let log_file = "im2a.log";
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("im2a-global.log") {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = Im2aCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}

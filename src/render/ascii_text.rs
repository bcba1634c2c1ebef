//! Plain-text render variant
//!
//! Serializes the symbol grid to `<base>_ascii.txt`, one line per grid
//! row, no column separators. This variant streams directly to the file
//! and never allocates a canvas.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::ascii::errors::{AsciiError, AsciiResult};
use crate::ascii::grid::AsciiGrid;
use crate::utils::path_utils;

/// File-name suffix for the plain-text variant
pub const FILE_SUFFIX: &str = "_ascii";

/// Write the symbol grid as plain text
///
/// # Arguments
/// * `grid` - Sampled grid pair, only the symbol side is used
/// * `source_path` - Input image path the output name derives from
///
/// # Returns
/// Path of the written text file, or `FileWrite` on a stream failure
pub fn write_ascii(grid: &AsciiGrid, source_path: &Path) -> AsciiResult<PathBuf> {
    let output = path_utils::suffixed_path(source_path, FILE_SUFFIX, "txt");

    let write_error =
        |e: std::io::Error| AsciiError::FileWrite(output.display().to_string(), e.to_string());

    let file = File::create(&output).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    for row in grid.symbol_rows() {
        let line: String = row.iter().collect();
        writeln!(writer, "{}", line).map_err(write_error)?;
    }
    writer.flush().map_err(write_error)?;

    info!("Wrote {} ({} lines)", output.display(), grid.rows());
    Ok(output)
}

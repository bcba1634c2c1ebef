//! Custom error types for image-to-ASCII conversion

use std::fmt;
use std::io;

/// Conversion-specific error types
#[derive(Debug)]
pub enum AsciiError {
    /// I/O error
    IoError(io::Error),
    /// Source image could not be opened or decoded
    ImageOpen(String, image::ImageError),
    /// Block size must be at least 1
    InvalidBlockSize(u32),
    /// Palette was empty or otherwise unusable
    InvalidPalette(String),
    /// Title text is wider than the sampled grid
    TitleTooLong { length: usize, columns: usize },
    /// Font file could not be loaded or parsed
    FontLoad(String),
    /// Drawing a single cell failed
    CellDraw { row: usize, col: usize, message: String },
    /// Output artifact could not be written
    FileWrite(String, String),
    /// A render was requested before a sampling pass produced a grid
    NotSampled,
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for AsciiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AsciiError::IoError(e) => write!(f, "I/O error: {}", e),
            AsciiError::ImageOpen(path, e) => write!(f, "Cannot open image {}: {}", path, e),
            AsciiError::InvalidBlockSize(b) => write!(f, "Invalid block size: {}", b),
            AsciiError::InvalidPalette(msg) => write!(f, "Invalid palette: {}", msg),
            AsciiError::TitleTooLong { length, columns } =>
                write!(f, "Title of {} characters does not fit in {} columns", length, columns),
            AsciiError::FontLoad(msg) => write!(f, "Cannot load font: {}", msg),
            AsciiError::CellDraw { row, col, message } =>
                write!(f, "Cell draw failed at ({}, {}): {}", row, col, message),
            AsciiError::FileWrite(path, msg) => write!(f, "Cannot write {}: {}", path, msg),
            AsciiError::NotSampled => write!(f, "Image has not been sampled yet"),
            AsciiError::GenericError(msg) => write!(f, "Conversion error: {}", msg),
        }
    }
}

impl std::error::Error for AsciiError {}

impl From<io::Error> for AsciiError {
    fn from(error: io::Error) -> Self {
        AsciiError::IoError(error)
    }
}

impl From<String> for AsciiError {
    fn from(msg: String) -> Self {
        AsciiError::GenericError(msg)
    }
}

/// Result type for conversion operations
pub type AsciiResult<T> = Result<T, AsciiError>;

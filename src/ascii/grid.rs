//! Sampled grid pair and title composition
//!
//! An `AsciiGrid` owns the brightness grid and the symbol grid derived
//! from it. Keeping both behind one type maintains the invariant that the
//! two grids always share the same shape, including the title rows the
//! composer appends.

use log::warn;

use crate::ascii::errors::{AsciiError, AsciiResult};
use crate::ascii::palette::Palette;

/// Brightness grid plus its derived symbol grid
#[derive(Debug, Clone)]
pub struct AsciiGrid {
    brightness: Vec<Vec<u8>>,
    symbols: Vec<Vec<char>>,
}

impl AsciiGrid {
    /// Build the grid pair from sampled brightness rows
    ///
    /// # Arguments
    /// * `brightness` - Row-major sampled brightness values
    /// * `palette` - Palette used to derive the symbol grid
    pub fn from_brightness(brightness: Vec<Vec<u8>>, palette: &Palette) -> Self {
        let symbols = brightness
            .iter()
            .map(|row| row.iter().map(|&v| palette.map_brightness(v)).collect())
            .collect();
        AsciiGrid { brightness, symbols }
    }

    /// Number of rows, title rows included
    pub fn rows(&self) -> usize {
        self.brightness.len()
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.brightness.first().map_or(0, |row| row.len())
    }

    pub fn brightness_at(&self, row: usize, col: usize) -> u8 {
        self.brightness[row][col]
    }

    pub fn symbol_at(&self, row: usize, col: usize) -> char {
        self.symbols[row][col]
    }

    pub fn brightness_rows(&self) -> &[Vec<u8>] {
        &self.brightness
    }

    pub fn symbol_rows(&self) -> &[Vec<char>] {
        &self.symbols
    }

    /// Append a centered title banner below the sampled rows
    ///
    /// The text is uppercased and its spaces replaced by `filler`. It is
    /// placed centered on a background row of filler symbols at white
    /// brightness, the placed characters carrying `color` as brightness.
    /// The composed row is appended twice, the duplicate acting as a
    /// spacer, so the grid stays rectangular.
    ///
    /// # Arguments
    /// * `text` - Banner text, at most `columns()` characters
    /// * `filler` - Symbol used for spaces and the background row
    /// * `color` - Brightness value for the placed characters
    ///
    /// # Returns
    /// `TitleTooLong` if the text is wider than the grid; the grids are
    /// left untouched in that case.
    pub fn add_title(&mut self, text: &str, filler: char, color: u8) -> AsciiResult<()> {
        let columns = self.columns();
        let length = text.chars().count();
        if length > columns {
            warn!("Title of {} characters rejected, grid is {} columns wide", length, columns);
            return Err(AsciiError::TitleTooLong { length, columns });
        }

        let formatted: Vec<char> = text
            .to_uppercase()
            .chars()
            .map(|c| if c == ' ' { filler } else { c })
            .collect();

        // Half-away-from-zero rounding, matching the sampler's convention
        let offset = ((columns as f64 / 2.0).round() - (length as f64 / 2.0).round()) as usize;

        let mut symbol_row = vec![filler; columns];
        let mut brightness_row = vec![255u8; columns];
        for (i, &c) in formatted.iter().enumerate() {
            symbol_row[offset + i] = c;
            brightness_row[offset + i] = color;
        }

        // Banner row plus one duplicate spacer row for visual weight
        self.symbols.push(symbol_row.clone());
        self.symbols.push(symbol_row);
        self.brightness.push(brightness_row.clone());
        self.brightness.push(brightness_row);
        Ok(())
    }
}

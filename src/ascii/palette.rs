//! Symbol palette and brightness banding
//!
//! A palette is an ordered, non-empty set of symbols from darkest to
//! lightest. The brightness range [0, 255] is partitioned into one band
//! per symbol; mapping a brightness value means finding the first band
//! whose upper bound covers it.

use crate::ascii::errors::{AsciiError, AsciiResult};

/// Default six-symbol palette, darkest to lightest
pub const DEFAULT_SYMBOLS: [char; 6] = ['#', '$', '*', '!', '\'', ' '];

/// Ordered dark-to-light symbol set used for text-mode output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    symbols: Vec<char>,
}

impl Palette {
    /// Create a palette from an ordered symbol slice
    ///
    /// # Arguments
    /// * `symbols` - Symbols ordered from darkest to lightest
    ///
    /// # Returns
    /// A new palette, or `InvalidPalette` if the slice is empty
    pub fn new(symbols: &[char]) -> AsciiResult<Self> {
        if symbols.is_empty() {
            return Err(AsciiError::InvalidPalette("palette must not be empty".to_string()));
        }
        Ok(Palette { symbols: symbols.to_vec() })
    }

    /// Number of symbols (and brightness bands)
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The ordered symbols, darkest first
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Map a brightness value to its palette symbol
    ///
    /// The range is split into `len()` bands with upper bounds
    /// `round(band * 256.0 / len())` for band 1..=len(), and the symbol of
    /// the first band whose upper bound is >= `value` wins. The divisor
    /// 256.0 together with the inclusive comparison is the convention used
    /// everywhere in this crate; a value beyond every band maps to the
    /// lightest symbol.
    pub fn map_brightness(&self, value: u8) -> char {
        let count = self.symbols.len();
        let n = count as f64;
        for band in 1..=count {
            let upper = (band as f64 * 256.0 / n).round();
            if f64::from(value) <= upper {
                return self.symbols[band - 1];
            }
        }
        self.symbols[count - 1]
    }

    /// Upper brightness bound of a 1-based band, exposed for diagnostics
    pub fn band_upper_bound(&self, band: usize) -> u32 {
        (band as f64 * 256.0 / self.symbols.len() as f64).round() as u32
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette { symbols: DEFAULT_SYMBOLS.to_vec() }
    }
}

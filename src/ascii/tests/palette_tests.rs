//! Tests for palette banding

use crate::ascii::errors::AsciiError;
use crate::ascii::palette::{Palette, DEFAULT_SYMBOLS};

#[test]
fn test_default_palette() {
    let palette = Palette::default();
    assert_eq!(palette.len(), 6);
    assert_eq!(palette.symbols(), &DEFAULT_SYMBOLS);
}

#[test]
fn test_empty_palette_rejected() {
    let result = Palette::new(&[]);
    assert!(matches!(result, Err(AsciiError::InvalidPalette(_))));
}

#[test]
fn test_extremes_map_to_palette_ends() {
    let palette = Palette::default();
    assert_eq!(palette.map_brightness(0), '#');
    assert_eq!(palette.map_brightness(255), ' ');
}

#[test]
fn test_band_boundary_is_inclusive() {
    // Six bands of width 256/6: first upper bound is round(42.67) = 43,
    // so 43 still belongs to the darkest band and 44 to the next one.
    let palette = Palette::default();
    assert_eq!(palette.band_upper_bound(1), 43);
    assert_eq!(palette.map_brightness(43), '#');
    assert_eq!(palette.map_brightness(44), '$');
}

#[test]
fn test_four_band_partition() {
    let palette = Palette::new(&['a', 'b', 'c', 'd']).unwrap();
    // Upper bounds: 64, 128, 192, 256
    assert_eq!(palette.map_brightness(64), 'a');
    assert_eq!(palette.map_brightness(65), 'b');
    assert_eq!(palette.map_brightness(128), 'b');
    assert_eq!(palette.map_brightness(192), 'c');
    assert_eq!(palette.map_brightness(193), 'd');
    assert_eq!(palette.map_brightness(255), 'd');
}

#[test]
fn test_single_symbol_palette() {
    let palette = Palette::new(&['x']).unwrap();
    assert_eq!(palette.map_brightness(0), 'x');
    assert_eq!(palette.map_brightness(128), 'x');
    assert_eq!(palette.map_brightness(255), 'x');
}

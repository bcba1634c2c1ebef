//! Tests for the grid pair and title composition

use crate::ascii::errors::AsciiError;
use crate::ascii::grid::AsciiGrid;
use crate::ascii::palette::Palette;

fn uniform_grid(rows: usize, columns: usize, value: u8) -> AsciiGrid {
    AsciiGrid::from_brightness(vec![vec![value; columns]; rows], &Palette::default())
}

#[test]
fn test_symbols_derived_from_brightness() {
    let grid = AsciiGrid::from_brightness(vec![vec![0, 255]], &Palette::default());
    assert_eq!(grid.symbol_at(0, 0), '#');
    assert_eq!(grid.symbol_at(0, 1), ' ');
    assert_eq!(grid.brightness_at(0, 0), 0);
    assert_eq!(grid.brightness_at(0, 1), 255);
}

#[test]
fn test_grids_share_shape() {
    let grid = uniform_grid(4, 7, 100);
    assert_eq!(grid.rows(), 4);
    assert_eq!(grid.columns(), 7);
    assert_eq!(grid.brightness_rows().len(), grid.symbol_rows().len());
    for (b, s) in grid.brightness_rows().iter().zip(grid.symbol_rows()) {
        assert_eq!(b.len(), s.len());
    }
}

#[test]
fn test_title_too_long_leaves_grid_untouched() {
    let mut grid = uniform_grid(2, 5, 0);
    let result = grid.add_title("too wide for this", '*', 0);
    assert!(matches!(result,
        Err(AsciiError::TitleTooLong { length: 17, columns: 5 })));
    assert_eq!(grid.rows(), 2);
    assert_eq!(grid.columns(), 5);
}

#[test]
fn test_title_appends_two_centered_rows() {
    let mut grid = uniform_grid(3, 10, 128);
    grid.add_title("ab c", '*', 0).unwrap();

    // Offset round(10/2) - round(4/2) = 3; text uppercased, space
    // replaced by the filler.
    assert_eq!(grid.rows(), 5);
    let expected: Vec<char> = "***AB*C***".chars().collect();
    assert_eq!(grid.symbol_rows()[3], expected);
    assert_eq!(grid.symbol_rows()[4], expected);

    // Background is white, placed characters carry the title color
    assert_eq!(grid.brightness_at(3, 0), 255);
    assert_eq!(grid.brightness_at(3, 3), 0);
    assert_eq!(grid.brightness_at(3, 6), 0);
    assert_eq!(grid.brightness_at(3, 9), 255);
}

#[test]
fn test_title_exact_width_fits() {
    let mut grid = uniform_grid(1, 4, 0);
    grid.add_title("wide", '.', 17).unwrap();
    assert_eq!(grid.rows(), 3);
    let expected: Vec<char> = "WIDE".chars().collect();
    assert_eq!(grid.symbol_rows()[1], expected);
    assert!(grid.brightness_rows()[1].iter().all(|&v| v == 17));
}

#[test]
fn test_title_keeps_grid_rectangular() {
    let mut grid = uniform_grid(2, 9, 200);
    grid.add_title("ok", '-', 0).unwrap();
    assert!(grid.symbol_rows().iter().all(|row| row.len() == 9));
    assert!(grid.brightness_rows().iter().all(|row| row.len() == 9));
}

//! Tests for block sampling

use image::{GrayImage, Luma};

use crate::ascii::errors::AsciiError;
use crate::ascii::sampler::Sampler;
use crate::ascii::tests::test_utils::uniform_image;

#[test]
fn test_zero_block_size_rejected() {
    let result = Sampler::new(0);
    assert!(matches!(result, Err(AsciiError::InvalidBlockSize(0))));
}

#[test]
fn test_grid_dimensions_exact_multiple() {
    let image = uniform_image(200, 200, 128);
    let grid = Sampler::new(10).unwrap().sample(&image);
    assert_eq!(grid.len(), 20);
    assert!(grid.iter().all(|row| row.len() == 20));
}

#[test]
fn test_grid_dimensions_with_partial_blocks() {
    // ceil(203/10) = 21 rows, ceil(205/10) = 21 columns
    let image = uniform_image(205, 203, 128);
    let grid = Sampler::new(10).unwrap().sample(&image);
    assert_eq!(grid.len(), 21);
    assert!(grid.iter().all(|row| row.len() == 21));
}

#[test]
fn test_block_larger_than_image() {
    let image = uniform_image(7, 3, 42);
    let grid = Sampler::new(10).unwrap().sample(&image);
    assert_eq!(grid.len(), 1);
    assert_eq!(grid[0].len(), 1);
    assert_eq!(grid[0][0], 42);
}

#[test]
fn test_block_size_one_is_identity() {
    let mut image = GrayImage::new(3, 2);
    for (i, pixel) in image.pixels_mut().enumerate() {
        *pixel = Luma([(i * 40) as u8]);
    }
    let grid = Sampler::new(1).unwrap().sample(&image);
    assert_eq!(grid, vec![vec![0, 40, 80], vec![120, 160, 200]]);
}

#[test]
fn test_uniform_image_averages_to_itself() {
    for value in [0u8, 17, 128, 255] {
        let image = uniform_image(33, 21, value);
        let grid = Sampler::new(8).unwrap().sample(&image);
        assert!(grid.iter().flatten().all(|&v| v == value));
    }
}

#[test]
fn test_clipped_block_averages_only_real_pixels() {
    // 3x1 image, block size 2: first block covers two pixels, the
    // clipped second block only the last one.
    let mut image = GrayImage::new(3, 1);
    image.put_pixel(0, 0, Luma([10]));
    image.put_pixel(1, 0, Luma([20]));
    image.put_pixel(2, 0, Luma([40]));

    let grid = Sampler::new(2).unwrap().sample(&image);
    assert_eq!(grid, vec![vec![15, 40]]);
}

#[test]
fn test_average_rounds_half_away_from_zero() {
    let mut image = GrayImage::new(2, 1);
    image.put_pixel(0, 0, Luma([1]));
    image.put_pixel(1, 0, Luma([2]));

    let grid = Sampler::new(2).unwrap().sample(&image);
    assert_eq!(grid[0][0], 2);
}

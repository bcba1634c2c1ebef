use std::path::PathBuf;

use image::{GrayImage, Luma};

/// Creates a uniform grayscale image of the given brightness
pub fn uniform_image(width: u32, height: u32, value: u8) -> GrayImage {
    GrayImage::from_pixel(width, height, Luma([value]))
}

/// Saves an image to a unique path in the system temp directory
///
/// The name must carry an extension the image crate can infer a format
/// from (e.g. "black.png").
pub fn temp_image(name: &str, image: &GrayImage) -> PathBuf {
    let path = std::env::temp_dir().join(format!("im2a_test_{}_{}", std::process::id(), name));
    image.save(&path).unwrap();
    path
}

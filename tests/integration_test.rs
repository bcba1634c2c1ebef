//! Integration tests for the full conversion workflow

use std::fs;
use std::path::PathBuf;

use image::{GrayImage, Luma};

use im2a::ascii::{Image2Ascii, Palette};
use im2a::api::{Im2a, RenderOptions, Variant};
use im2a::utils::logger::Logger;

/// Saves a uniform image into a unique temp path
fn make_test_image(name: &str, width: u32, height: u32, value: u8) -> PathBuf {
    let path = std::env::temp_dir()
        .join(format!("im2a_it_{}_{}", std::process::id(), name));
    GrayImage::from_pixel(width, height, Luma([value]))
        .save(&path)
        .unwrap();
    path
}

fn temp_log(name: &str) -> String {
    std::env::temp_dir()
        .join(format!("im2a_it_{}_{}", std::process::id(), name))
        .to_string_lossy()
        .to_string()
}

#[test]
fn test_complete_conversion_workflow() {
    // 200x200 uniform black, block size 10, default palette
    let input = make_test_image("workflow.png", 200, 200, 0);

    let mut engine = Image2Ascii::open(&input, 10, Palette::default()).unwrap();
    let ascii_path = engine.render_ascii().unwrap();
    let blocks_path = engine.render_blocks(None).unwrap();
    let ellipse_path = engine.render_ellipse(None).unwrap();
    let dot_path = engine.render_dot(None).unwrap();
    let text_path = engine.render_text(None, 11.0).unwrap();

    // Grid is 20x20, all darkest symbol at zero brightness
    let grid = engine.grid().unwrap();
    assert_eq!(grid.rows(), 20);
    assert_eq!(grid.columns(), 20);
    assert!(grid.brightness_rows().iter().flatten().all(|&v| v == 0));
    assert!(grid.symbol_rows().iter().flatten().all(|&c| c == '#'));

    // Ascii artifact: 20 lines of 20 '#' characters
    assert!(ascii_path.to_string_lossy().ends_with("_ascii.txt"));
    let text = fs::read_to_string(&ascii_path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 20);
    assert!(lines.iter().all(|line| *line == "#".repeat(20)));

    // Blocks artifact: 200x200 all-black image
    assert!(blocks_path.to_string_lossy().ends_with("_blocks.png"));
    let blocks = image::open(&blocks_path).unwrap().to_luma8();
    assert_eq!(blocks.dimensions(), (200, 200));
    assert!(blocks.pixels().all(|p| p.0[0] == 0));

    // Remaining artifacts exist with their suffix conventions
    assert!(ellipse_path.to_string_lossy().ends_with("_ellipse.png"));
    assert!(ellipse_path.is_file());
    assert!(dot_path.to_string_lossy().ends_with("_dot.png"));
    assert!(dot_path.is_file());
    assert!(text_path.to_string_lossy().ends_with("_text.png"));
    assert!(text_path.is_file());
    // Built-in font spacing is 11 px per cell
    let glyphs = image::open(&text_path).unwrap().to_luma8();
    assert_eq!(glyphs.dimensions(), (220, 220));
}

#[test]
fn test_ascii_round_trips_symbol_grid() {
    let input = make_test_image("roundtrip.png", 64, 48, 90);

    let mut engine = Image2Ascii::open(&input, 8, Palette::default()).unwrap();
    let ascii_path = engine.render_ascii().unwrap();

    let grid = engine.grid().unwrap();
    let text = fs::read_to_string(&ascii_path).unwrap();
    for (r, line) in text.lines().enumerate() {
        let row: Vec<char> = line.chars().collect();
        assert_eq!(&row, &grid.symbol_rows()[r]);
    }
}

#[test]
fn test_palette_swap_changes_next_render() {
    let input = make_test_image("swap.png", 40, 40, 0);

    let mut engine = Image2Ascii::open(&input, 10, Palette::default()).unwrap();
    let first = fs::read_to_string(engine.render_ascii().unwrap()).unwrap();
    assert!(first.lines().all(|line| line == "####"));

    engine.set_palette(&['X', ' ']).unwrap();
    let second = fs::read_to_string(engine.render_ascii().unwrap()).unwrap();
    assert!(second.lines().all(|line| line == "XXXX"));
}

#[test]
fn test_title_rows_reach_ascii_output() {
    let input = make_test_image("title.png", 100, 50, 255);

    let mut engine = Image2Ascii::open(&input, 10, Palette::default()).unwrap();
    engine.add_title("hi", '*', 0).unwrap();
    let text = fs::read_to_string(engine.render_ascii().unwrap()).unwrap();

    // 5 sampled rows plus banner and spacer
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[5], "****HI****");
    assert_eq!(lines[6], "****HI****");
}

#[test]
fn test_api_renders_requested_variants() {
    let input = make_test_image("api.png", 30, 30, 10);

    let api = Im2a::new(Some(&temp_log("api.log"))).unwrap();
    let options = RenderOptions {
        block_size: 10,
        variants: vec![Variant::Ascii, Variant::Blocks],
        ..RenderOptions::default()
    };
    let outputs = api.render(&input, &options).unwrap();

    assert_eq!(outputs.len(), 2);
    assert!(outputs[0].to_string_lossy().ends_with("_ascii.txt"));
    assert!(outputs[1].to_string_lossy().ends_with("_blocks.png"));
    assert!(outputs.iter().all(|p| p.is_file()));
}

#[test]
fn test_global_logger_captures_log_macros() {
    let log_file = temp_log("global.log");
    Logger::init_global_logger(&log_file).unwrap();

    log::info!("sampling pass under test");

    let contents = fs::read_to_string(&log_file).unwrap();
    assert!(contents.contains("[INFO] sampling pass under test"));
}

#[test]
fn test_api_describe_summarizes_grid() {
    let input = make_test_image("describe.png", 60, 30, 128);

    let api = Im2a::new(Some(&temp_log("describe.log"))).unwrap();
    let summary = api.describe(&input, 10).unwrap();
    assert!(summary.contains("3 rows x 6 columns"));
    assert!(summary.contains("Block size: 10"));
}

//! Tests for the core conversion module

mod test_utils;
mod palette_tests;
mod sampler_tests;
mod grid_tests;

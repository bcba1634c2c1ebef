//! Tests for the render strategy family

mod glyph_tests;

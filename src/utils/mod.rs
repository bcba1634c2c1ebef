//! Shared utilities
//!
//! Logging and output path naming used across the crate.

pub mod logger;
pub mod path_utils;

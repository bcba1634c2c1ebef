//! Output path helpers
//!
//! Every render variant names its artifact by appending a fixed suffix to
//! the source image's base name and swapping the extension.

use std::path::{Path, PathBuf};

/// Build an output path from a source path, suffix and extension
///
/// `photo.jpg` with suffix `_blocks` and extension `png` becomes
/// `photo_blocks.png` in the same directory.
///
/// # Arguments
/// * `source` - Source image path
/// * `suffix` - Variant suffix, including the leading underscore
/// * `extension` - Output extension without the dot
pub fn suffixed_path(source: &Path, suffix: &str, extension: &str) -> PathBuf {
    let stem = source.file_stem().unwrap_or_default().to_string_lossy();
    let name = format!("{}{}.{}", stem, suffix, extension);
    match source.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(name),
        _ => PathBuf::from(name),
    }
}

//! Shared utility functions for output formatting

/// Spaces per depth level.
pub const INDENT_UNIT: &str = "  ";

const SIZE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Indentation prefix for a given depth.
pub fn indent(depth: usize) -> String {
    INDENT_UNIT.repeat(depth)
}

/// Format a size in bytes to human-readable format.
///
/// Divides by 1024 through B, KB, MB and GB; anything still at least 1024
/// after GB is reported in TB. Always one decimal place, no space before the
/// unit: `2048` becomes `2.0KB`.
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    for unit in SIZE_UNITS {
        if size < 1024.0 {
            return format!("{:.1}{}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.1}TB", size)
}

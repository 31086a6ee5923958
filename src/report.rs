//! Saving the formatted tree to disk

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Result, ScanError};

/// Report file written into the current directory by default.
pub const DEFAULT_OUTPUT_FILE: &str = "directory_structure.txt";

/// Write `text` to `path` as UTF-8, replacing any existing file.
pub fn save_report(path: &Path, text: &str) -> Result<()> {
    debug!("Writing {} bytes to {}", text.len(), path.display());
    fs::write(path, text).map_err(|source| ScanError::Write {
        path: path.to_path_buf(),
        source,
    })
}

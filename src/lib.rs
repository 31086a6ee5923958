//! dirscan - Scan a directory tree and dump it as an indented text report

pub mod error;
pub mod input;
pub mod output;
pub mod report;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, ScanError};
pub use input::{prompt_for_path, resolve_path, validate_path};
pub use output::{OutputConfig, TreeFormatter, format_size, format_tree, print_json};
pub use report::{DEFAULT_OUTPUT_FILE, save_report};
pub use tree::{DirectoryEntry, DirectoryNode, Entry, FileNode, build_tree};

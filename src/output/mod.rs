//! Tree formatting and display
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `utils` - Size formatting and indentation
//! - `tree` - Indented text renderer and console report
//! - `json` - JSON output

mod config;
mod json;
mod tree;
mod utils;

pub use config::OutputConfig;
pub use json::{print_json, to_json};
pub use tree::{ACCESS_DENIED_LINE, DIR_ICON, FILE_ICON, TreeFormatter, format_tree};
pub use utils::{INDENT_UNIT, format_size, indent};

//! Directory tree building
//!
//! The walker enumerates a start directory recursively and materializes the
//! whole tree in memory before anything is formatted.
//!
//! - `node` - the tree types (`DirectoryNode`, `Entry`, `FileNode`)
//! - `walker` - `build_tree`, the recursive scan
//! - `utils` - name and metadata helpers

mod node;
mod utils;
mod walker;

pub use node::{DirectoryEntry, DirectoryNode, Entry, FileNode, PERMISSION_DENIED};
pub use utils::{HIDDEN_MARKER, extension_of, is_hidden};
pub use walker::build_tree;

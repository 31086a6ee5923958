//! In-memory tree types produced by the walker

use std::path::PathBuf;

use serde::Serialize;

/// Marker stored in `DirectoryNode::error` when a directory could not be read.
pub const PERMISSION_DENIED: &str = "Permission denied";

/// A scanned directory and everything found beneath it.
///
/// When `error` is set the directory was not explored and `contents` is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryNode {
    pub path: PathBuf,
    pub contents: Vec<Entry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DirectoryNode {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            contents: Vec::new(),
            error: None,
        }
    }

    /// A directory that could not be enumerated.
    pub fn denied(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            contents: Vec::new(),
            error: Some(PERMISSION_DENIED.to_string()),
        }
    }

    pub fn is_denied(&self) -> bool {
        self.error.is_some()
    }
}

/// A regular file inside a scanned directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileNode {
    pub name: String,
    pub size: u64,
    /// Seconds since the Unix epoch.
    pub modified: f64,
    /// Lowercased, with the leading dot; empty when the name has none.
    pub extension: String,
}

/// A child directory: its basename plus the subtree scanned under it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryEntry {
    pub name: String,
    #[serde(flatten)]
    pub node: DirectoryNode,
}

/// One child of a `DirectoryNode`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entry {
    File(FileNode),
    Directory(DirectoryEntry),
}

impl Entry {
    pub fn name(&self) -> &str {
        match self {
            Entry::File(file) => &file.name,
            Entry::Directory(dir) => &dir.name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Entry::Directory(_))
    }
}

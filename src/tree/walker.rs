//! Recursive directory walker that builds the full tree in memory

use std::fs::{self, DirEntry, Metadata};
use std::io;
use std::path::Path;

use log::{debug, warn};

use crate::error::{Result, ScanError};

use super::node::{DirectoryEntry, DirectoryNode, Entry, FileNode};
use super::utils::{extension_of, is_hidden, modified_secs};

/// Walk `start` and build its tree.
///
/// A directory that cannot be read for lack of permission comes back as a
/// node with `error` set and no contents; its siblings and ancestors are
/// still scanned. Any other I/O failure aborts the whole walk.
pub fn build_tree(start: &Path) -> Result<DirectoryNode> {
    debug!("Scanning directory: {}", start.display());

    match read_contents(start)? {
        Some(contents) => {
            let mut node = DirectoryNode::new(start);
            node.contents = contents;
            Ok(node)
        }
        None => {
            warn!("Permission denied: {}", start.display());
            Ok(DirectoryNode::denied(start))
        }
    }
}

/// Enumerate one directory. `Ok(None)` means access was denied somewhere
/// while reading it.
fn read_contents(dir: &Path) -> Result<Option<Vec<Entry>>> {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => return denied_or_fail(dir, e),
    };

    let mut contents = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => return denied_or_fail(dir, e),
        };

        let name = entry.file_name().to_string_lossy().to_string();
        if is_hidden(&name) {
            continue;
        }

        let path = entry.path();
        let kind = match classify(&entry) {
            Ok(k) => k,
            Err(e) => return denied_or_fail(&path, e),
        };

        match kind {
            EntryKind::File(meta) => contents.push(Entry::File(FileNode {
                extension: extension_of(&name),
                name,
                size: meta.len(),
                modified: modified_secs(&meta),
            })),
            EntryKind::Dir => {
                let node = build_tree(&path)?;
                contents.push(Entry::Directory(DirectoryEntry { name, node }));
            }
            EntryKind::Other => {
                debug!("Skipping non-regular entry: {}", path.display());
            }
        }
    }

    Ok(Some(contents))
}

enum EntryKind {
    File(Metadata),
    Dir,
    Other,
}

/// Decide what an entry is, following symlinks to their target.
///
/// Dangling or self-referencing symlinks, sockets, fifos and devices are
/// `Other`. Symlink cycles are not detected; the OS limit on nested
/// symlink resolution ends such a walk.
fn classify(entry: &DirEntry) -> io::Result<EntryKind> {
    let file_type = entry.file_type()?;

    if file_type.is_symlink() {
        return Ok(match fs::metadata(entry.path()) {
            Ok(meta) if meta.is_file() => EntryKind::File(meta),
            Ok(meta) if meta.is_dir() => EntryKind::Dir,
            _ => EntryKind::Other,
        });
    }

    if file_type.is_dir() {
        Ok(EntryKind::Dir)
    } else if file_type.is_file() {
        Ok(EntryKind::File(entry.metadata()?))
    } else {
        Ok(EntryKind::Other)
    }
}

fn denied_or_fail<T>(path: &Path, err: io::Error) -> Result<Option<T>> {
    if err.kind() == io::ErrorKind::PermissionDenied {
        Ok(None)
    } else {
        Err(ScanError::io(path, err))
    }
}

//! Shared helpers for the walker

use std::fs::Metadata;
use std::time::UNIX_EPOCH;

/// Names starting with this character are skipped at every depth.
pub const HIDDEN_MARKER: char = '.';

/// Check if an entry name marks it as hidden.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with(HIDDEN_MARKER)
}

/// Lowercased extension of a file name, including the dot.
///
/// Leading dots belong to the stem, so only the suffix after the last
/// interior dot counts: `archive.tar.gz` gives `.gz`, `name.` gives `.`.
pub fn extension_of(name: &str) -> String {
    let stem_start = name.len() - name.trim_start_matches('.').len();
    match name[stem_start..].rfind('.') {
        Some(idx) => name[stem_start + idx..].to_lowercase(),
        None => String::new(),
    }
}

/// Modification time as fractional seconds since the Unix epoch.
///
/// Timestamps before the epoch come out negative; a platform without
/// mtime support yields 0.
pub fn modified_secs(meta: &Metadata) -> f64 {
    let Ok(mtime) = meta.modified() else {
        return 0.0;
    };
    match mtime.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs_f64(),
        Err(e) => -e.duration().as_secs_f64(),
    }
}

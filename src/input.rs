//! Resolving the directory to scan from user input

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, ScanError};

pub const PROMPT: &str =
    "Enter the directory path to scan (or press Enter for current directory):";

/// Print the prompt and read one line of input.
///
/// End of input counts as an empty answer.
pub fn prompt_for_path<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<String> {
    writeln!(out, "{}", PROMPT)?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}

/// Turn raw input into a path: surrounding whitespace is dropped, empty
/// input means the current directory, and a leading `~` becomes the home
/// directory.
pub fn resolve_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return PathBuf::from(".");
    }
    expand_home(trimmed)
}

/// Expand `~` and `~/rest` using the current user's home directory.
///
/// Anything else, including `~user`, is returned as given, as is every
/// input when no home directory is known.
pub fn expand_home(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some(r) if r.is_empty() || r.starts_with(std::path::is_separator) => r,
        _ => return PathBuf::from(path),
    };

    match dirs::home_dir() {
        Some(home) => home.join(rest.trim_start_matches(std::path::is_separator)),
        None => PathBuf::from(path),
    }
}

/// Confirm the path exists before scanning it.
pub fn validate_path(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(ScanError::PathNotFound(path.to_path_buf()))
    }
}

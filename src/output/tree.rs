//! Indented text rendering of a scanned tree
//!
//! `format_tree` is the pure renderer; `TreeFormatter` adds the console
//! header used when the report is printed.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{DirectoryNode, Entry};

use super::config::OutputConfig;
use super::utils::{format_size, indent};

pub const DIR_ICON: &str = "📁";
pub const FILE_ICON: &str = "📄";
pub const ACCESS_DENIED_LINE: &str = "[Access Denied]";

const HEADER: &str = "Directory Structure:";
const HEADER_RULE: &str = "===================";

/// Render the contents of `node`, starting at `depth` levels of indentation.
///
/// No line is emitted for `node` itself. Directories are listed before
/// files, each group in ascending name order. A node carrying an error
/// renders as a single `[Access Denied]` line regardless of its contents.
/// An empty child directory contributes an empty line below its own.
pub fn format_tree(node: &DirectoryNode, depth: usize) -> String {
    let pad = indent(depth);

    if node.is_denied() {
        return format!("{}{}", pad, ACCESS_DENIED_LINE);
    }

    let mut children: Vec<&Entry> = node.contents.iter().collect();
    children.sort_by(|a, b| {
        b.is_dir()
            .cmp(&a.is_dir())
            .then_with(|| a.name().cmp(b.name()))
    });

    let mut lines = Vec::with_capacity(children.len());
    for child in children {
        match child {
            Entry::Directory(dir) => {
                lines.push(format!("{}{} {}/", pad, DIR_ICON, dir.name));
                lines.push(format_tree(&dir.node, depth + 1));
            }
            Entry::File(file) => {
                lines.push(format!(
                    "{}{} {} ({})",
                    pad,
                    FILE_ICON,
                    file.name,
                    format_size(file.size)
                ));
            }
        }
    }

    lines.join("\n")
}

/// Formatter for the console report.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// The tree text without any header, as saved to the report file.
    pub fn format(&self, node: &DirectoryNode) -> String {
        format_tree(node, 0)
    }

    /// Print the header and tree to stdout.
    pub fn print(&self, node: &DirectoryNode) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write_report(&mut stdout, node)
    }

    /// Write the header and tree to any color-capable writer.
    pub fn write_report<W: WriteColor>(&self, out: &mut W, node: &DirectoryNode) -> io::Result<()> {
        writeln!(out)?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
        writeln!(out, "{}", HEADER)?;
        writeln!(out, "{}", HEADER_RULE)?;
        out.reset()?;
        writeln!(out, "{}", self.format(node))?;
        Ok(())
    }
}

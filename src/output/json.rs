//! JSON output formatting

use std::io;

use serde::Serialize;

use crate::tree::DirectoryNode;

/// The root node tagged like every nested directory.
#[derive(Serialize)]
struct JsonRoot<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(flatten)]
    node: &'a DirectoryNode,
}

/// Serialize a tree as pretty-printed JSON.
pub fn to_json(node: &DirectoryNode) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonRoot {
        kind: "directory",
        node,
    })
}

/// Print tree node as pretty-printed JSON to stdout.
pub fn print_json(node: &DirectoryNode) -> io::Result<()> {
    let json = to_json(node).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use rxgraph_core::{GraphFile, NodeId};

/// Read and resolve a JSON graph description ("-" reads stdin).
pub fn load_graph(path: &Path) -> Result<GraphFile, String> {
    let json = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read stdin: {}", e))?;
        buf
    } else {
        fs::read_to_string(path)
            .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?
    };

    GraphFile::from_json(&json).map_err(|e| format!("{}: {}", display_name(path), e))
}

/// Name used for a graph path in titles and messages.
pub fn display_name(path: &Path) -> String {
    if path.as_os_str() == "-" {
        return "<stdin>".to_string();
    }
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Load a graph or exit with the error on stderr.
pub fn load_graph_or_exit(path: &Path) -> GraphFile {
    load_graph(path).unwrap_or_else(|msg| {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    })
}

/// Entry node: the one named by `--root`, or the file's root.
pub fn select_root(file: &GraphFile, name: Option<&str>) -> Result<NodeId, String> {
    match name {
        Some(name) => file
            .id(name)
            .ok_or_else(|| format!("unknown root node '{}'", name)),
        None => Ok(file.root),
    }
}

/// Select the entry node or exit with the error on stderr.
pub fn select_root_or_exit(file: &GraphFile, name: Option<&str>) -> NodeId {
    select_root(file, name).unwrap_or_else(|msg| {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    })
}

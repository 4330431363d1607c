//! Directory tree scanning module
//!
//! Walks a directory recursively and builds an in-memory [`Node`] tree.
//! Directories are always recorded; files only when their name ends with a
//! configured extension. Any directory whose path contains the exclusion
//! marker is recorded with no children and never listed.

pub mod config;
pub mod decode;
pub mod directory;
pub mod filter;
pub mod stats;

pub use config::ScanConfig;
pub use stats::ScanStats;

use crate::error::{ScanError, ScanResult};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// One filesystem entry in the output tree
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Directory { name: String, children: Vec<Node> },
    File { name: String, content: String },
}

// Written by hand so keys come out as `name`, `type`, then `children` or
// `content`; the derived tagged form would put `type` first.
impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Node", 3)?;
        match self {
            Node::Directory { name, children } => {
                state.serialize_field("name", name)?;
                state.serialize_field("type", "directory")?;
                state.serialize_field("children", children)?;
            }
            Node::File { name, content } => {
                state.serialize_field("name", name)?;
                state.serialize_field("type", "file")?;
                state.serialize_field("content", content)?;
            }
        }
        state.end()
    }
}

impl Node {
    pub fn directory(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self::Directory {
            name: name.into(),
            children,
        }
    }

    pub fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::File {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::Directory { name, .. } | Node::File { name, .. } => name,
        }
    }

    /// Children of a directory node; empty for files
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Directory { children, .. } => children,
            Node::File { .. } => &[],
        }
    }

    /// File content; `None` for directories
    pub fn content(&self) -> Option<&str> {
        match self {
            Node::File { content, .. } => Some(content.as_str()),
            Node::Directory { .. } => None,
        }
    }

    /// Find a direct child by name
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children().iter().find(|c| c.name() == name)
    }
}

/// Content stored for a file that could not be read
pub fn read_failure_message(path: &Path, err: &std::io::Error) -> String {
    format!("Could not read file due to: {}: '{}'", err, path.display())
}

/// Result of a full scan
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// Entries found directly under the root
    pub nodes: Vec<Node>,
    pub stats: ScanStats,
}

/// Recursive tree scanner
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Scan `root` and return its children together with scan statistics.
    ///
    /// Unreadable files are embedded as failure messages. A directory that
    /// cannot be listed aborts the scan.
    pub fn scan(&self, root: &Path) -> ScanResult<ScanOutcome> {
        let start = Instant::now();
        let mut stats = ScanStats::new();
        let nodes = self.scan_dir(root, &mut stats)?;
        stats.finish(start.elapsed());

        info!(
            root = %root.display(),
            files = stats.files_included,
            directories = stats.directories_visited,
            read_failures = stats.read_failures,
            "scan complete"
        );

        Ok(ScanOutcome { nodes, stats })
    }

    /// Scan `root` and wrap the result in a directory node named after it.
    pub fn scan_root(&self, root: &Path) -> ScanResult<Node> {
        let outcome = self.scan(root)?;
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| root.to_string_lossy().into_owned());
        Ok(Node::directory(name, outcome.nodes))
    }

    fn scan_dir(&self, path: &Path, stats: &mut ScanStats) -> ScanResult<Vec<Node>> {
        if filter::is_excluded(path, &self.config.exclusion_marker) {
            debug!(path = %path.display(), "pruned by exclusion marker");
            stats.directories_pruned += 1;
            return Ok(Vec::new());
        }

        let entries = directory::list_entries(path, self.config.sort_entries)
            .map_err(|e| ScanError::list_directory(path.to_path_buf(), e))?;
        stats.directories_visited += 1;
        debug!(path = %path.display(), entries = entries.len(), "listing directory");

        let mut structure = Vec::new();
        for entry in entries {
            if entry.is_dir {
                let children = self.scan_dir(&entry.path, stats)?;
                structure.push(Node::directory(entry.name, children));
                continue;
            }

            if !filter::matches_extension(&entry.name, &self.config.extensions) {
                stats.files_skipped += 1;
                continue;
            }

            let content = match std::fs::read(&entry.path) {
                Ok(bytes) => {
                    stats.record_file(bytes.len() as u64);
                    decode::decode_text(&bytes)
                }
                Err(e) => {
                    warn!(path = %entry.path.display(), error = %e, "could not read file");
                    stats.record_read_failure();
                    read_failure_message(&entry.path, &e)
                }
            };
            structure.push(Node::file(entry.name, content));
        }

        Ok(structure)
    }
}

/// Scan `path` with explicit extensions and exclusion marker, sorting
/// entries by name. Returns the nodes found directly under `path`.
pub fn scan_directory(
    path: &Path,
    extensions: &[String],
    exclusion_marker: &str,
) -> ScanResult<Vec<Node>> {
    let config = ScanConfig {
        extensions: extensions.to_vec(),
        exclusion_marker: exclusion_marker.to_string(),
        sort_entries: true,
    };
    Ok(Scanner::new(config).scan(path)?.nodes)
}

//! Directory tree dumper
//!
//! A Rust CLI tool that walks a directory, keeps files whose names end with
//! one of the requested extensions, and saves the resulting tree, file
//! contents included, as indented JSON.

pub mod cli;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod scanner;

// Re-export commonly used types
pub use error::{ScanError, ScanErrorKind, ScanResult};
pub use formatter::{render_json, OutputConfig};
pub use scanner::filter::normalize_extensions;
pub use scanner::{scan_directory, Node, ScanConfig, ScanStats, Scanner};

/// Scan `path` for the given raw extension list and render the tree as JSON
pub fn dump_tree(path: &std::path::Path, extensions: &str) -> ScanResult<String> {
    let scanner = Scanner::new(ScanConfig::from_extension_list(extensions));
    let outcome = scanner.scan(path)?;
    render_json(&outcome.nodes)
}

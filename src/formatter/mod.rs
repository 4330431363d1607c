//! JSON rendering and output file writing

use crate::error::{ScanError, ScanResult};
use crate::scanner::Node;
use std::path::{Path, PathBuf};

/// Extension appended to the user-supplied output name
pub const OUTPUT_EXTENSION: &str = "txt";

/// Output configuration options
#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    /// Base file name, without extension
    pub base_name: String,
    /// Directory the output file is written into
    pub directory: PathBuf,
}

impl OutputConfig {
    pub fn new(base_name: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
        Self {
            base_name: base_name.into(),
            directory: directory.into(),
        }
    }

    /// Full path of the output file
    pub fn output_path(&self) -> PathBuf {
        crate::cli::path_mapping::output_file_path(&self.directory, &self.base_name, OUTPUT_EXTENSION)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.base_name.trim().is_empty() {
            return Err("No output filename provided".to_string());
        }
        Ok(())
    }
}

/// Render nodes as JSON text indented by two spaces
pub fn render_json(nodes: &[Node]) -> ScanResult<String> {
    Ok(serde_json::to_string_pretty(nodes)?)
}

/// Parse rendered JSON back into nodes
pub fn parse_json(text: &str) -> ScanResult<Vec<Node>> {
    Ok(serde_json::from_str(text)?)
}

/// Write `text` to `path` in a single write.
pub fn write_output(path: &Path, text: &str) -> ScanResult<()> {
    std::fs::write(path, text).map_err(|e| ScanError::write_output(path.to_path_buf(), e))
}

/// Render `nodes` and save them as configured. Returns the written path.
pub fn save_tree(nodes: &[Node], config: &OutputConfig) -> ScanResult<PathBuf> {
    let text = render_json(nodes)?;
    let path = config.output_path();
    write_output(&path, &text)?;
    Ok(path)
}

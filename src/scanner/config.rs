//! Configuration options for directory scans

use crate::scanner::filter::{normalize_extensions, DEFAULT_EXCLUSION_MARKER};

/// Scan configuration options
#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig {
    /// Normalized extensions (each starts with `.`)
    pub extensions: Vec<String>,
    /// Path substring that prunes a subtree
    pub exclusion_marker: String,
    /// Sort directory entries by name before processing
    pub sort_entries: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: Vec::new(),
            exclusion_marker: DEFAULT_EXCLUSION_MARKER.to_string(),
            sort_entries: true,
        }
    }
}

impl ScanConfig {
    /// Build a configuration from a raw comma-separated extension list
    pub fn from_extension_list(input: &str) -> Self {
        Self {
            extensions: normalize_extensions(input),
            ..Self::default()
        }
    }

    pub fn with_exclusion_marker(mut self, marker: impl Into<String>) -> Self {
        self.exclusion_marker = marker.into();
        self
    }

    pub fn with_sorting(mut self, sort_entries: bool) -> Self {
        self.sort_entries = sort_entries;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.extensions.is_empty() {
            return Err("No valid extensions entered".to_string());
        }

        if let Some(bad) = self.extensions.iter().find(|ext| !ext.starts_with('.')) {
            return Err(format!("Extension '{}' must start with '.'", bad));
        }

        Ok(())
    }
}

//! Statistics collected while scanning a tree

use std::time::Duration;

/// Counters for a single scan
#[derive(Debug, Clone)]
pub struct ScanStats {
    /// Directories whose entries were listed
    pub directories_visited: usize,
    /// Directories left empty because their path carries the exclusion marker
    pub directories_pruned: usize,
    /// Files included in the tree
    pub files_included: usize,
    /// Files skipped for not matching any extension
    pub files_skipped: usize,
    /// Included files whose content is a read-failure message
    pub read_failures: usize,
    /// Total bytes read from included files
    pub bytes_read: u64,
    /// Wall-clock time spent scanning
    pub processing_time_ms: u64,
    /// Timestamp of when statistics were collected
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

impl Default for ScanStats {
    fn default() -> Self {
        Self {
            directories_visited: 0,
            directories_pruned: 0,
            files_included: 0,
            files_skipped: 0,
            read_failures: 0,
            bytes_read: 0,
            processing_time_ms: 0,
            collected_at: chrono::Utc::now(),
        }
    }
}

impl ScanStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_file(&mut self, bytes: u64) {
        self.files_included += 1;
        self.bytes_read += bytes;
    }

    pub(crate) fn record_read_failure(&mut self) {
        self.files_included += 1;
        self.read_failures += 1;
    }

    pub(crate) fn finish(&mut self, elapsed: Duration) {
        self.processing_time_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        self.collected_at = chrono::Utc::now();
    }

    /// Human-readable summary lines
    pub fn summary(&self) -> String {
        let mut out = String::new();
        out.push_str("Scan Statistics:\n");
        out.push_str(&format!("Directories scanned: {}\n", self.directories_visited));
        out.push_str(&format!("Directories pruned: {}\n", self.directories_pruned));
        out.push_str(&format!("Files included: {}\n", self.files_included));
        out.push_str(&format!("Files skipped: {}\n", self.files_skipped));
        if self.read_failures > 0 {
            out.push_str(&format!("Unreadable files: {}\n", self.read_failures));
        }
        out.push_str(&format!("Bytes read: {}\n", self.bytes_read));
        out.push_str(&format!("Processing time: {}ms\n", self.processing_time_ms));
        out.push_str(&format!(
            "Collected at: {}",
            self.collected_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        out
    }
}

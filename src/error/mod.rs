//! Error types and handling infrastructure for directory tree dumps

use std::path::PathBuf;

/// Core error kinds for the scan-and-dump process
#[derive(Debug, thiserror::Error)]
pub enum ScanErrorKind {
    #[error("Cannot list directory {}: {message}", path.display())]
    ListDirectory { message: String, path: PathBuf },

    #[error("Cannot write output file {}: {message}", path.display())]
    WriteOutput { message: String, path: PathBuf },

    #[error("JSON serialization error: {message}")]
    Serialize { message: String },

    #[error("Failed to get user input: {message}")]
    Prompt { message: String },
}

impl ScanErrorKind {
    pub fn list_directory(message: String, path: PathBuf) -> Self {
        Self::ListDirectory { message, path }
    }

    pub fn write_output(message: String, path: PathBuf) -> Self {
        Self::WriteOutput { message, path }
    }

    pub fn serialize(message: String) -> Self {
        Self::Serialize { message }
    }

    pub fn prompt(message: String) -> Self {
        Self::Prompt { message }
    }
}

/// Main error type for scan operations
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("{kind}")]
    Scan {
        kind: ScanErrorKind,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl ScanError {
    pub fn new(kind: ScanErrorKind) -> Self {
        Self::Scan { kind, source: None }
    }

    pub fn with_io_source(kind: ScanErrorKind, source: std::io::Error) -> Self {
        Self::Scan {
            kind,
            source: Some(source),
        }
    }

    /// Error raised when a directory cannot be listed; aborts the whole scan.
    pub fn list_directory(path: PathBuf, source: std::io::Error) -> Self {
        Self::with_io_source(
            ScanErrorKind::list_directory(source.to_string(), path),
            source,
        )
    }

    pub fn write_output(path: PathBuf, source: std::io::Error) -> Self {
        Self::with_io_source(ScanErrorKind::write_output(source.to_string(), path), source)
    }

    pub fn kind(&self) -> &ScanErrorKind {
        match self {
            Self::Scan { kind, .. } => kind,
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Scan { kind, .. } => match kind {
                ScanErrorKind::ListDirectory { path, message } => {
                    format!("Scan aborted, cannot list {}: {}", path.display(), message)
                }
                ScanErrorKind::WriteOutput { path, message } => {
                    format!("Could not save {}: {}", path.display(), message)
                }
                _ => kind.to_string(),
            },
        }
    }
}

impl From<serde_json::Error> for ScanError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(ScanErrorKind::serialize(err.to_string()))
    }
}

/// Result type for scan operations
pub type ScanResult<T> = Result<T, ScanError>;

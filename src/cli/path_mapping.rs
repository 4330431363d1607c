use std::path::{Path, PathBuf};

/// Map an output base name onto `<dir>/<base_name>.<extension>`.
/// The extension is appended, never substituted, so `"notes.v2"` becomes
/// `notes.v2.txt`.
pub fn output_file_path(dir: &Path, base_name: &str, extension: &str) -> PathBuf {
    dir.join(format!("{}.{}", base_name, extension))
}

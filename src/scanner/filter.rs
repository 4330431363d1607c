use std::path::Path;

/// Subtrees whose path contains this marker are never listed.
pub const DEFAULT_EXCLUSION_MARKER: &str = "node_modules";

/// Normalize a comma-separated extension list.
///
/// Tokens are trimmed, empty tokens dropped, and a leading `.` added where
/// missing, so `"txt"` and `".txt"` end up identical. Duplicates keep their
/// first position.
pub fn normalize_extensions(input: &str) -> Vec<String> {
    let mut extensions: Vec<String> = Vec::new();

    for token in input.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let ext = if token.starts_with('.') {
            token.to_string()
        } else {
            format!(".{}", token)
        };
        if !extensions.contains(&ext) {
            extensions.push(ext);
        }
    }

    extensions
}

/// Return true if `name` ends with one of `extensions` (case-sensitive).
pub fn matches_extension(name: &str, extensions: &[String]) -> bool {
    extensions.iter().any(|ext| name.ends_with(ext.as_str()))
}

/// Return true if the exclusion marker occurs anywhere in the path.
pub fn is_excluded(path: &Path, marker: &str) -> bool {
    !marker.is_empty() && path.to_string_lossy().contains(marker)
}

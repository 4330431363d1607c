use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One entry directly beneath a scanned directory
#[derive(Debug, Clone)]
pub struct DirEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// List the immediate entries of `dir`. If `sorted` is true entries come back
/// ordered by file name; otherwise in whatever order the filesystem yields.
pub fn list_entries(dir: &Path, sorted: bool) -> Result<Vec<DirEntry>, std::io::Error> {
    let mut walker = WalkDir::new(dir).min_depth(1).max_depth(1);
    if sorted {
        walker = walker.sort_by_file_name();
    }

    let mut entries = Vec::new();
    for entry in walker {
        let entry = entry?;
        let path = entry.path().to_path_buf();
        entries.push(DirEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            // Follows symlinks, so a link to a directory is recursed into.
            is_dir: path.is_dir(),
            path,
        });
    }

    Ok(entries)
}

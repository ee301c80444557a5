//! Content discovery - lists lesson files under the content directory

use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

use super::ContentError;

/// List the entries directly inside `dir`, by file name.
///
/// Nothing is filtered out: every entry the directory holds is returned as
/// a path relative to `dir`. A missing or unreadable directory is an error.
pub fn list_entries(dir: &Path) -> Result<Vec<String>, ContentError> {
    ensure_dir(dir)?;

    let mut entries = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| read_dir_error(dir, e))?;
        entries.push(relative_path(dir, entry.path()));
    }

    tracing::debug!("Found {} entries in {:?}", entries.len(), dir);
    Ok(entries)
}

/// List every file below `dir`, depth first, by file name within each level.
///
/// Paths are `/`-separated relative paths such as `section/slug.mdx`.
/// Directories are walked into, not listed.
pub fn list_files_recursive(dir: &Path) -> Result<Vec<String>, ContentError> {
    ensure_dir(dir)?;

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| read_dir_error(dir, e))?;
        if entry.file_type().is_dir() {
            continue;
        }
        files.push(relative_path(dir, entry.path()));
    }

    tracing::debug!("Found {} files below {:?}", files.len(), dir);
    Ok(files)
}

fn ensure_dir(dir: &Path) -> Result<(), ContentError> {
    let metadata = fs::metadata(dir).map_err(|source| ContentError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    if !metadata.is_dir() {
        return Err(ContentError::ReadDir {
            path: dir.to_path_buf(),
            source: io::Error::other("not a directory"),
        });
    }

    Ok(())
}

fn read_dir_error(dir: &Path, err: walkdir::Error) -> ContentError {
    let path = err.path().unwrap_or(dir).to_path_buf();
    ContentError::ReadDir {
        path,
        source: err.into(),
    }
}

/// Path relative to `root`, joined with `/` regardless of platform
fn relative_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

//! Recursive directory scanner for ROM collections.
//!
//! Every regular file below the root is a candidate unless its extension or
//! one of its parent directories is excluded. Symlinked directories are not
//! followed.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::SortError;

/// Filters applied while scanning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Lower-cased directory names to skip.
    excluded_dirs: Vec<String>,
    /// Lower-cased extensions without the leading dot.
    excluded_extensions: Vec<String>,
    /// Directories skipped wherever they appear (destination, archive).
    skip_paths: Vec<PathBuf>,
}

impl ScanOptions {
    pub fn new<D, E>(excluded_dirs: &[D], excluded_extensions: &[E]) -> Self
    where
        D: AsRef<str>,
        E: AsRef<str>,
    {
        Self {
            excluded_dirs: excluded_dirs
                .iter()
                .map(|d| d.as_ref().trim().to_lowercase())
                .filter(|d| !d.is_empty())
                .collect(),
            excluded_extensions: excluded_extensions
                .iter()
                .map(|e| normalize_extension(e.as_ref()))
                .filter(|e| !e.is_empty())
                .collect(),
            skip_paths: Vec::new(),
        }
    }

    /// Also skip `path` (and everything below it) if the scan reaches it.
    pub fn skip_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.skip_paths.push(path.into());
        self
    }

    pub fn excludes_dir(&self, dir: &Path) -> bool {
        if self.skip_paths.iter().any(|p| same_path(p, dir)) {
            return true;
        }
        dir.file_name()
            .and_then(|n| n.to_str())
            .map(|n| self.excluded_dirs.contains(&n.to_lowercase()))
            .unwrap_or(false)
    }

    pub fn excludes_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| self.excluded_extensions.contains(&e.to_lowercase()))
            .unwrap_or(false)
    }
}

/// `.PNG` and `png` both become `png`.
fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}

fn same_path(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Collect every candidate file below `root`, sorted by path.
///
/// The root itself is never checked against `excluded_dirs`. Unreadable
/// subdirectories are logged and skipped; an unreadable root is an error.
pub fn scan_roms(root: &Path, options: &ScanOptions) -> Result<Vec<PathBuf>, SortError> {
    if !root.is_dir() {
        return Err(SortError::SourceNotFound(root.display().to_string()));
    }

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_excluded_dir(e, options));

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(SortError::io(root, e.into())),
            Err(e) => {
                log::warn!("Skipping unreadable entry: {e}");
                continue;
            }
        };
        // Symlinked directories show up as links, not dirs, and are not entered
        if entry.file_type().is_dir() || !entry.path().is_file() {
            continue;
        }
        if options.excludes_file(entry.path()) {
            log::debug!("Skipping excluded file type: {}", entry.path().display());
            continue;
        }
        files.push(entry.into_path());
    }

    files.sort();
    log::debug!("Scanned {} candidate files under {}", files.len(), root.display());
    Ok(files)
}

fn is_excluded_dir(entry: &DirEntry, options: &ScanOptions) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let excluded = options.excludes_dir(entry.path());
    if excluded {
        log::debug!("Skipping excluded directory: {}", entry.path().display());
    }
    excluded
}

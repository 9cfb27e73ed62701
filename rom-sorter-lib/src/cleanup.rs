//! Removal of loose files that duplicate a `.zip` archive.
//!
//! `Game (USA).sfc` next to `Game (USA).zip` is considered an unpacked copy
//! of the archive. Stems are compared exactly (case-sensitive) and only
//! within the same directory.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Serialize;

/// A loose file shadowed by a zip archive in the same directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnzippedDuplicate {
    pub path: PathBuf,
    pub archive: PathBuf,
}

/// Result of deleting duplicates.
#[derive(Debug, Clone, Default)]
pub struct CleanupSummary {
    pub removed: usize,
    pub errors: Vec<String>,
}

fn is_zip(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("zip"))
}

fn stem(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|s| s.to_str())
}

/// Find unpacked duplicates among scanned files.
///
/// Works on the scan result, so excluded files and directories never take
/// part. Output is sorted by path.
pub fn find_unzipped_duplicates(files: &[PathBuf]) -> Vec<UnzippedDuplicate> {
    let mut by_dir: BTreeMap<&Path, Vec<&PathBuf>> = BTreeMap::new();
    for file in files {
        let dir = file.parent().unwrap_or(Path::new(""));
        by_dir.entry(dir).or_default().push(file);
    }

    let mut duplicates = Vec::new();
    for members in by_dir.values() {
        let zips: HashSet<&str> = members
            .iter()
            .filter(|p| is_zip(p))
            .filter_map(|p| stem(p))
            .collect();
        if zips.is_empty() {
            continue;
        }
        for file in members.iter().filter(|p| !is_zip(p)) {
            let Some(file_stem) = stem(file) else {
                continue;
            };
            if !zips.contains(file_stem) {
                continue;
            }
            if let Some(archive) = members
                .iter()
                .find(|p| is_zip(p) && stem(p) == Some(file_stem))
            {
                duplicates.push(UnzippedDuplicate {
                    path: (*file).clone(),
                    archive: (*archive).clone(),
                });
            }
        }
    }
    duplicates.sort_by(|a, b| a.path.cmp(&b.path));
    duplicates
}

/// Delete the given duplicates. Failures are collected, not fatal.
pub fn remove_duplicates(duplicates: &[UnzippedDuplicate]) -> CleanupSummary {
    let mut summary = CleanupSummary::default();
    for dup in duplicates {
        match std::fs::remove_file(&dup.path) {
            Ok(()) => {
                log::info!(
                    "Deleted {} (duplicate of {})",
                    dup.path.display(),
                    dup.archive.display()
                );
                summary.removed += 1;
            }
            Err(e) => {
                let msg = format!("Failed to delete {}: {}", dup.path.display(), e);
                log::error!("{msg}");
                summary.errors.push(msg);
            }
        }
    }
    summary
}

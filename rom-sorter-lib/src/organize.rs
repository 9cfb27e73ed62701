use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rom_sorter_core::SortPlan;
use serde::Serialize;

/// Where a file is headed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveKind {
    /// Best version of its game, goes to the destination directory
    Keep,
    /// Losing variant, goes to the archive directory
    Archive,
}

impl MoveKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Keep => "MOVE",
            Self::Archive => "ARCHIVE",
        }
    }
}

/// A planned file move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveAction {
    pub source: PathBuf,
    /// Target file path (destination or archive dir, same file name)
    pub target: PathBuf,
    pub kind: MoveKind,
    /// Display name of the game the file belongs to
    pub game: String,
}

/// Why a move was left out of the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// A file already exists at the target
    TargetExists,
    /// An earlier move in this plan already claims the target
    DuplicateTarget,
    /// The file is already at its target
    AlreadyInPlace,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::TargetExists => "destination file already exists",
            Self::DuplicateTarget => "another file in this run has the same name",
            Self::AlreadyInPlace => "already in place",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedMove {
    pub action: MoveAction,
    pub reason: SkipReason,
}

/// Result of planning moves for a sort plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MovePlan {
    pub moves: Vec<MoveAction>,
    pub skipped: Vec<SkippedMove>,
}

impl MovePlan {
    pub fn count(&self, kind: MoveKind) -> usize {
        self.moves.iter().filter(|m| m.kind == kind).count()
    }
}

/// Progress information for callbacks.
#[derive(Debug, Clone)]
pub enum MoveProgress {
    Moving {
        file_name: String,
        file_index: usize,
        total: usize,
    },
    Done,
}

/// Summary of executed moves.
#[derive(Debug, Clone, Default)]
pub struct MoveSummary {
    pub kept: usize,
    pub archived: usize,
    /// Moves dropped at execution time because the target appeared
    pub skipped: Vec<String>,
    pub errors: Vec<String>,
}

/// Turn a sort plan into concrete moves.
///
/// Keepers go to `destination`, archived variants to `archive`; file names
/// are preserved. Targets that already exist, or that two files in this
/// plan would both land on, are reported as skipped rather than
/// overwritten. The result depends only on the plan and the current state
/// of the target directories, so a dry run reports exactly what a real run
/// would do.
pub fn plan_moves(plan: &SortPlan, destination: &Path, archive: &Path) -> MovePlan {
    let mut result = MovePlan::default();
    let mut claimed: HashSet<PathBuf> = HashSet::new();

    for decision in &plan.decisions {
        let keeper = std::iter::once((&decision.keeper, MoveKind::Keep, destination));
        let archived = decision
            .archived
            .iter()
            .map(|entry| (entry, MoveKind::Archive, archive));

        for (entry, kind, dir) in keeper.chain(archived) {
            let action = MoveAction {
                source: entry.path().to_path_buf(),
                target: dir.join(entry.file_name()),
                kind,
                game: decision.display_name.clone(),
            };

            let reason = if action.source == action.target {
                Some(SkipReason::AlreadyInPlace)
            } else if action.target.exists() {
                Some(SkipReason::TargetExists)
            } else if !claimed.insert(action.target.clone()) {
                Some(SkipReason::DuplicateTarget)
            } else {
                None
            };

            match reason {
                Some(reason) => {
                    log::debug!(
                        "Skipping {} {}: {}",
                        kind.label(),
                        action.source.display(),
                        reason
                    );
                    result.skipped.push(SkippedMove { action, reason });
                }
                None => result.moves.push(action),
            }
        }
    }

    result
}

/// Perform the planned moves.
///
/// Target directories are created as needed. Per-file failures are
/// collected in the summary and do not stop the batch.
pub fn execute_moves(plan: &MovePlan, progress: &dyn Fn(MoveProgress)) -> MoveSummary {
    let mut summary = MoveSummary::default();
    let total = plan.moves.len();

    for (i, action) in plan.moves.iter().enumerate() {
        progress(MoveProgress::Moving {
            file_name: action
                .source
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            file_index: i,
            total,
        });

        // The target may have appeared since planning
        if action.target.exists() {
            let msg = format!(
                "Skipping {}: destination file already exists: {}",
                action.kind.label(),
                action.target.display()
            );
            log::warn!("{msg}");
            summary.skipped.push(msg);
            continue;
        }

        match move_file(&action.source, &action.target) {
            Ok(()) => {
                log::info!(
                    "{}: '{}' -> '{}'",
                    action.kind.label(),
                    action.source.display(),
                    action.target.display()
                );
                match action.kind {
                    MoveKind::Keep => summary.kept += 1,
                    MoveKind::Archive => summary.archived += 1,
                }
            }
            Err(e) => {
                let msg = format!(
                    "Failed to {} {:?} -> {:?}: {}",
                    action.kind.label().to_lowercase(),
                    action.source.display(),
                    action.target.display(),
                    e,
                );
                log::error!("{msg}");
                summary.errors.push(msg);
            }
        }
    }

    progress(MoveProgress::Done);
    summary
}

/// Rename `source` to `target`, copying across filesystems when needed.
fn move_file(source: &Path, target: &Path) -> io::Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    match fs::rename(source, target) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            fs::copy(source, target)?;
            fs::remove_file(source)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
#[path = "tests/organize_tests.rs"]
mod tests;

//! Grouping files into games and partitioning each group into a keeper and
//! the files to archive.
//!
//! Planning is pure: it never touches the filesystem, and the resulting
//! partition is the same whether or not the run is a dry run.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::identity::{GameKey, GroupingOptions, game_identity, game_key};
use crate::ranking::{RankFactor, RankingConfig, deciding_factor, rank_entries};
use crate::rom::{RomEntry, RomFile};

/// Whether a run applies its moves or only reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    #[default]
    Execute,
    DryRun,
}

impl RunMode {
    pub fn from_dry_run(dry_run: bool) -> Self {
        if dry_run { Self::DryRun } else { Self::Execute }
    }

    pub fn is_dry_run(&self) -> bool {
        matches!(self, Self::DryRun)
    }
}

/// All release variants of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameGroup {
    pub key: GameKey,
    /// Title taken from the member with the lexicographically smallest filename.
    pub display_name: String,
    pub members: Vec<RomEntry>,
}

impl GameGroup {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Group files by game key.
///
/// Duplicate paths are collapsed. Groups come back sorted by key and members
/// sorted by path, so the output does not depend on input order.
pub fn group_roms<I, P>(paths: I, options: &GroupingOptions) -> Vec<GameGroup>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    let unique: BTreeSet<PathBuf> = paths.into_iter().map(Into::into).collect();

    let mut by_key: BTreeMap<GameKey, Vec<RomEntry>> = BTreeMap::new();
    for path in unique {
        let entry = RomEntry::new(RomFile::new(path));
        let key = game_key(entry.filename(), options);
        by_key.entry(key).or_default().push(entry);
    }

    by_key
        .into_iter()
        .map(|(key, members)| {
            let display_name = members
                .iter()
                .map(RomEntry::filename)
                .min()
                .map(|name| game_identity(name).display)
                .unwrap_or_else(|| key.name.clone());
            GameGroup {
                key,
                display_name,
                members,
            }
        })
        .collect()
}

/// Outcome for one game: exactly one keeper, everything else archived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub key: GameKey,
    pub display_name: String,
    pub keeper: RomEntry,
    /// Losing variants, best first.
    pub archived: Vec<RomEntry>,
    /// Key on which the keeper beat the runner-up. `None` for single-file groups.
    pub deciding_factor: Option<RankFactor>,
}

impl Decision {
    pub fn keeper_path(&self) -> &Path {
        self.keeper.path()
    }

    pub fn archive_paths(&self) -> impl Iterator<Item = &Path> {
        self.archived.iter().map(RomEntry::path)
    }

    /// Short explanation of why the keeper won.
    pub fn reason(&self) -> String {
        match self.deciding_factor {
            Some(factor) => format!("won on {factor}"),
            None => "only version".to_string(),
        }
    }
}

/// Rank one group and split it into keeper and archive set.
///
/// Returns `None` for an empty group.
pub fn decide(group: &GameGroup, config: &RankingConfig) -> Option<Decision> {
    let mut ranked = rank_entries(group.members.clone(), config).into_iter();
    let keeper = ranked.next()?;
    let rest: Vec<_> = ranked.collect();
    let factor = rest
        .first()
        .map(|runner_up| deciding_factor(&keeper, runner_up, config));

    Some(Decision {
        key: group.key.clone(),
        display_name: group.display_name.clone(),
        keeper: keeper.entry,
        archived: rest.into_iter().map(|r| r.entry).collect(),
        deciding_factor: factor,
    })
}

/// Decisions for a whole collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortPlan {
    pub mode: RunMode,
    pub decisions: Vec<Decision>,
}

impl SortPlan {
    pub fn keepers(&self) -> impl Iterator<Item = &RomEntry> {
        self.decisions.iter().map(|d| &d.keeper)
    }

    pub fn archived(&self) -> impl Iterator<Item = &RomEntry> {
        self.decisions.iter().flat_map(|d| d.archived.iter())
    }

    pub fn game_count(&self) -> usize {
        self.decisions.len()
    }

    pub fn file_count(&self) -> usize {
        self.decisions.iter().map(|d| 1 + d.archived.len()).sum()
    }

    pub fn archive_count(&self) -> usize {
        self.decisions.iter().map(|d| d.archived.len()).sum()
    }

    /// Decisions for groups that had more than one variant.
    pub fn contested(&self) -> impl Iterator<Item = &Decision> {
        self.decisions.iter().filter(|d| !d.archived.is_empty())
    }
}

/// Group, rank and partition a collection.
///
/// `mode` is carried through for reporting only; the partition does not
/// depend on it.
pub fn plan_sort<I, P>(
    paths: I,
    ranking: &RankingConfig,
    grouping: &GroupingOptions,
    mode: RunMode,
) -> SortPlan
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    let decisions = group_roms(paths, grouping)
        .iter()
        .filter_map(|group| decide(group, ranking))
        .collect();
    SortPlan { mode, decisions }
}

#[cfg(test)]
#[path = "tests/plan_tests.rs"]
mod tests;

//! Filename-driven ROM organization.
//!
//! This crate holds the pure logic: parsing No-Intro and GoodTools style
//! tags out of filenames, reducing filenames to a game identity, ranking
//! release variants against user preferences, and partitioning each game
//! into one keeper and the files to archive. No filesystem access happens
//! here.

pub mod identity;
pub mod language;
pub mod plan;
pub mod ranking;
pub mod region;
pub mod rom;
mod segments;
pub mod tags;

pub use identity::{GameIdentity, GameKey, GroupingOptions, game_identity, game_key};
pub use language::{Language, ParseLanguageError};
pub use plan::{Decision, GameGroup, RunMode, SortPlan, decide, group_roms, plan_sort};
pub use ranking::{RankFactor, RankingConfig, compare_entries, explain_comparison, rank_entries};
pub use region::{ParseRegionError, Region};
pub use rom::{RomEntry, RomFile};
pub use tags::{DumpFlag, DumpQuality, ReleaseFlag, Tags, Version, parse_tags};

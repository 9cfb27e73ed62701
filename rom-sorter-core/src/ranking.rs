//! Ordering of release variants within a game group.
//!
//! Files are compared key by key; the first key that differs decides.
//! With the default configuration the keys are, highest priority first:
//!
//! 1. dump quality (`[!]` > untagged > `[b]`)
//! 2. region preference
//! 3. language preference
//! 4. preferred filename tokens
//! 5. release status (final release > beta/proto/demo)
//! 6. revision, then version
//! 7. filename, then full path
//!
//! The last two keys make the order strict for any two distinct paths.

use std::cmp::Ordering;

use serde::Serialize;

use crate::language::Language;
use crate::region::Region;
use crate::rom::RomEntry;
use crate::tags::{DumpQuality, Version};

/// User preferences that drive ranking. Read-only for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingConfig {
    /// Preferred regions, highest priority first.
    pub regions: Vec<Region>,
    /// Preferred languages, highest priority first.
    pub languages: Vec<Language>,
    /// Filename substrings to prefer, highest priority first (case-insensitive).
    pub preferred_tokens: Vec<String>,
    /// When set, dump quality is the first key, so a bad dump loses to any
    /// other dump regardless of region or language. When unset, dump
    /// quality is compared only after region, language and token preference.
    pub deprioritize_bad_dumps: bool,
    /// Rank betas, prototypes, demos and similar below final releases.
    /// Off by default; when set the check runs right before revision.
    pub penalize_prerelease: bool,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            regions: Vec::new(),
            languages: Vec::new(),
            preferred_tokens: Vec::new(),
            deprioritize_bad_dumps: true,
            penalize_prerelease: false,
        }
    }
}

impl RankingConfig {
    /// The comparison keys in the order they are applied.
    pub fn factors(&self) -> Vec<RankFactor> {
        let mut factors = Vec::with_capacity(8);
        if self.deprioritize_bad_dumps {
            factors.push(RankFactor::DumpQuality);
        }
        factors.extend([
            RankFactor::Region,
            RankFactor::Language,
            RankFactor::PreferredToken,
        ]);
        if !self.deprioritize_bad_dumps {
            factors.push(RankFactor::DumpQuality);
        }
        if self.penalize_prerelease {
            factors.push(RankFactor::ReleaseStatus);
        }
        factors.extend([RankFactor::Revision, RankFactor::Filename, RankFactor::Path]);
        factors
    }
}

/// A single comparison key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RankFactor {
    DumpQuality,
    Region,
    Language,
    PreferredToken,
    ReleaseStatus,
    Revision,
    Filename,
    Path,
}

impl RankFactor {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::DumpQuality => "dump quality",
            Self::Region => "region preference",
            Self::Language => "language preference",
            Self::PreferredToken => "preferred token",
            Self::ReleaseStatus => "release status",
            Self::Revision => "revision",
            Self::Filename => "filename order",
            Self::Path => "path order",
        }
    }
}

impl std::fmt::Display for RankFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.describe())
    }
}

/// Ranking attributes of one file, precomputed against a config.
///
/// Preference ranks are positions in the config's lists; `None` means the
/// file matches nothing in the list and sorts after every match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankProfile {
    pub quality: DumpQuality,
    pub region_rank: Option<usize>,
    pub language_rank: Option<usize>,
    pub token_rank: Option<usize>,
    pub prerelease: bool,
    pub revision: Option<u32>,
    pub version: Option<Version>,
}

impl RankProfile {
    pub fn new(entry: &RomEntry, config: &RankingConfig) -> Self {
        let tags = &entry.tags;
        let languages = tags.effective_languages();
        let lower_name = entry.filename().to_lowercase();

        Self {
            quality: tags.quality(),
            region_rank: best_rank(&config.regions, |r| tags.regions.contains(r)),
            language_rank: best_rank(&config.languages, |l| languages.contains(l)),
            token_rank: best_rank(&config.preferred_tokens, |t| {
                !t.is_empty() && lower_name.contains(&t.to_lowercase())
            }),
            prerelease: tags.is_prerelease(),
            revision: tags.revision,
            version: tags.version.clone(),
        }
    }
}

/// Position of the first preference the file satisfies.
fn best_rank<T>(prefs: &[T], matches: impl Fn(&T) -> bool) -> Option<usize> {
    prefs.iter().position(matches)
}

/// Lower preference rank wins; no match loses to any match.
fn cmp_rank(a: Option<usize>, b: Option<usize>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn cmp_factor(
    factor: RankFactor,
    a: (&RomEntry, &RankProfile),
    b: (&RomEntry, &RankProfile),
) -> Ordering {
    let (ea, pa) = a;
    let (eb, pb) = b;
    match factor {
        // Higher quality first
        RankFactor::DumpQuality => pb.quality.cmp(&pa.quality),
        RankFactor::Region => cmp_rank(pa.region_rank, pb.region_rank),
        RankFactor::Language => cmp_rank(pa.language_rank, pb.language_rank),
        RankFactor::PreferredToken => cmp_rank(pa.token_rank, pb.token_rank),
        // Final releases (false) before pre-releases (true)
        RankFactor::ReleaseStatus => pa.prerelease.cmp(&pb.prerelease),
        // Higher revision first, then higher version
        RankFactor::Revision => pb
            .revision
            .cmp(&pa.revision)
            .then_with(|| pb.version.cmp(&pa.version)),
        RankFactor::Filename => ea.filename().cmp(eb.filename()),
        RankFactor::Path => ea.path().cmp(eb.path()),
    }
}

/// Compare two profiled entries. `Less` means `a` ranks above `b`.
///
/// Also returns the factor that decided the comparison (`Path` when the
/// entries are identical).
fn compare_profiled(
    factors: &[RankFactor],
    a: (&RomEntry, &RankProfile),
    b: (&RomEntry, &RankProfile),
) -> (Ordering, RankFactor) {
    for &factor in factors {
        let ord = cmp_factor(factor, a, b);
        if ord != Ordering::Equal {
            return (ord, factor);
        }
    }
    (Ordering::Equal, RankFactor::Path)
}

/// Compare two entries under `config`. `Less` means `a` ranks above `b`.
pub fn compare_entries(a: &RomEntry, b: &RomEntry, config: &RankingConfig) -> Ordering {
    explain_comparison(a, b, config).0
}

/// Like [`compare_entries`], also naming the factor that decided it.
pub fn explain_comparison(
    a: &RomEntry,
    b: &RomEntry,
    config: &RankingConfig,
) -> (Ordering, RankFactor) {
    let pa = RankProfile::new(a, config);
    let pb = RankProfile::new(b, config);
    compare_profiled(&config.factors(), (a, &pa), (b, &pb))
}

/// A group member with its position in the ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranked {
    pub entry: RomEntry,
    pub profile: RankProfile,
}

/// Sort entries best first.
///
/// Profiles are computed once per entry; the result is independent of the
/// input order.
pub fn rank_entries(entries: Vec<RomEntry>, config: &RankingConfig) -> Vec<Ranked> {
    let factors = config.factors();
    let mut ranked: Vec<Ranked> = entries
        .into_iter()
        .map(|entry| {
            let profile = RankProfile::new(&entry, config);
            Ranked { entry, profile }
        })
        .collect();
    ranked.sort_by(|a, b| {
        compare_profiled(&factors, (&a.entry, &a.profile), (&b.entry, &b.profile)).0
    });
    ranked
}

/// The factor on which the winner beat the runner-up.
pub fn deciding_factor(winner: &Ranked, runner_up: &Ranked, config: &RankingConfig) -> RankFactor {
    compare_profiled(
        &config.factors(),
        (&winner.entry, &winner.profile),
        (&runner_up.entry, &runner_up.profile),
    )
    .1
}

#[cfg(test)]
#[path = "tests/ranking_tests.rs"]
mod tests;

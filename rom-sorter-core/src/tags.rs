//! Parser for No-Intro and GoodTools naming conventions.
//!
//! ROM filenames encode release metadata in bracketed tags:
//! ```text
//! Game Name (Region1, Region2) (En,Fr,De) (Rev 1) [!]      No-Intro
//! Game Name (JU) (V1.1) [b1] [T+Eng]                       GoodTools
//! ```
//!
//! [`parse_tags`] extracts regions, languages, dump flags, release flags,
//! and revision/version numbers. Nothing here fails: segments that match no
//! vocabulary are kept as [`Tags::unrecognized`] and otherwise ignored.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::language::{Language, parse_language_list};
use crate::region::{Region, parse_region_list};
use crate::segments::{Segment, split_extension, split_segments};

/// Dump flags from bracketed GoodTools/No-Intro tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DumpFlag {
    /// `[!]` verified good dump.
    Verified,
    /// `[b]`, `[b1]` bad dump.
    BadDump,
    /// `[x]` bad checksum.
    BadChecksum,
    /// `[o]`, `[o1]` overdump.
    Overdump,
    /// `[a]`, `[a1]` alternate dump.
    Alternate,
    /// `[h]`, `[h1C]`, `(Hack)` hacked image.
    Hack,
    /// `[t]`, `[t1]` trainer added.
    Trainer,
    /// `[f]`, `[f1]` fixed.
    Fixed,
    /// `[p]`, `[p1]` pirate dump.
    Pirate,
    /// `[T+Eng]`, `[T-Fre]` fan translation.
    Translation,
}

impl DumpFlag {
    /// The tag as GoodTools writes it.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Verified => "[!]",
            Self::BadDump => "[b]",
            Self::BadChecksum => "[x]",
            Self::Overdump => "[o]",
            Self::Alternate => "[a]",
            Self::Hack => "[h]",
            Self::Trainer => "[t]",
            Self::Fixed => "[f]",
            Self::Pirate => "[p]",
            Self::Translation => "[T]",
        }
    }
}

/// Overall dump quality derived from the dump flags.
///
/// Ordered worst to best, so `Verified > Unverified > Bad`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DumpQuality {
    /// Known-bad image (`[b]` or `[x]`).
    Bad,
    /// No quality statement either way.
    Unverified,
    /// Verified-good image (`[!]`).
    Verified,
}

/// Release flags from parenthesized tags (`(Beta)`, `(Proto 2)`, `(Unl)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ReleaseFlag {
    Prototype,
    Beta,
    Demo,
    Sample,
    Kiosk,
    Debug,
    Promo,
    Unlicensed,
    Pirate,
    Aftermarket,
    Homebrew,
    Alternate,
    PublicDomain,
    VirtualConsole,
    Bios,
}

impl ReleaseFlag {
    /// Parse a release flag, ignoring case and a trailing number (`Beta 2`).
    pub fn from_label(label: &str) -> Option<Self> {
        let lower = label.trim().to_lowercase();
        let base = lower
            .trim_end_matches(|c: char| c.is_ascii_digit())
            .trim_end();
        let flag = match base {
            "proto" | "prototype" => Self::Prototype,
            "beta" => Self::Beta,
            "demo" => Self::Demo,
            "sample" => Self::Sample,
            "kiosk" => Self::Kiosk,
            "debug" => Self::Debug,
            "promo" => Self::Promo,
            "unl" | "unlicensed" => Self::Unlicensed,
            "pirate" => Self::Pirate,
            "aftermarket" => Self::Aftermarket,
            "homebrew" => Self::Homebrew,
            "alt" => Self::Alternate,
            "pd" => Self::PublicDomain,
            "virtual console" => Self::VirtualConsole,
            "bios" => Self::Bios,
            _ => return None,
        };
        Some(flag)
    }

    /// Whether this marks a build that is not a final retail release.
    pub fn is_prerelease(&self) -> bool {
        matches!(
            self,
            Self::Prototype | Self::Beta | Self::Demo | Self::Sample | Self::Kiosk | Self::Debug | Self::Promo
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Prototype => "Proto",
            Self::Beta => "Beta",
            Self::Demo => "Demo",
            Self::Sample => "Sample",
            Self::Kiosk => "Kiosk",
            Self::Debug => "Debug",
            Self::Promo => "Promo",
            Self::Unlicensed => "Unl",
            Self::Pirate => "Pirate",
            Self::Aftermarket => "Aftermarket",
            Self::Homebrew => "Homebrew",
            Self::Alternate => "Alt",
            Self::PublicDomain => "PD",
            Self::VirtualConsole => "Virtual Console",
            Self::Bios => "BIOS",
        }
    }
}

/// Dotted version number from a `(v1.1)` tag.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Version(pub Vec<u32>);

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.0.iter().map(u32::to_string).collect();
        write!(f, "v{}", parts.join("."))
    }
}

/// Structured tags parsed from a ROM filename.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tags {
    pub regions: BTreeSet<Region>,
    /// Languages listed explicitly in the name.
    pub languages: BTreeSet<Language>,
    /// GoodTools `(M3)`: the image carries this many languages.
    pub language_count: Option<u32>,
    pub dump_flags: BTreeSet<DumpFlag>,
    pub release_flags: BTreeSet<ReleaseFlag>,
    /// `None` sorts below any explicit revision, including `Rev 0`.
    pub revision: Option<u32>,
    pub version: Option<Version>,
    /// Bracketed segments that matched no vocabulary, verbatim.
    pub unrecognized: Vec<String>,
}

impl Tags {
    /// Dump quality: any bad-dump flag makes the file bad, even if it is also
    /// marked verified.
    pub fn quality(&self) -> DumpQuality {
        if self.dump_flags.contains(&DumpFlag::BadDump)
            || self.dump_flags.contains(&DumpFlag::BadChecksum)
        {
            DumpQuality::Bad
        } else if self.dump_flags.contains(&DumpFlag::Verified) {
            DumpQuality::Verified
        } else {
            DumpQuality::Unverified
        }
    }

    pub fn is_prerelease(&self) -> bool {
        self.release_flags.iter().any(ReleaseFlag::is_prerelease)
    }

    /// Explicit languages, or the languages implied by the regions when the
    /// name carries no language list.
    pub fn effective_languages(&self) -> BTreeSet<Language> {
        if !self.languages.is_empty() {
            return self.languages.clone();
        }
        self.regions
            .iter()
            .flat_map(|r| r.implied_languages().iter().copied())
            .collect()
    }

    /// One-line summary for decision logs, e.g. `USA, Europe | En,Fr | Rev 1 | [!]`.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if !self.regions.is_empty() {
            let names: Vec<&str> = self.regions.iter().map(Region::name).collect();
            parts.push(names.join(", "));
        }
        if !self.languages.is_empty() {
            let codes: Vec<&str> = self.languages.iter().map(Language::code).collect();
            parts.push(codes.join(","));
        }
        if let Some(count) = self.language_count {
            parts.push(format!("M{count}"));
        }
        if let Some(rev) = self.revision {
            parts.push(format!("Rev {rev}"));
        }
        if let Some(ref version) = self.version {
            parts.push(version.to_string());
        }
        for flag in &self.release_flags {
            parts.push(flag.label().to_string());
        }
        if !self.dump_flags.is_empty() {
            let labels: Vec<&str> = self.dump_flags.iter().map(DumpFlag::label).collect();
            parts.push(labels.join(""));
        }
        if parts.is_empty() {
            "no tags".to_string()
        } else {
            parts.join(" | ")
        }
    }

    fn apply(&mut self, token: TagToken) {
        match token {
            TagToken::Regions(regions) => self.regions.extend(regions),
            TagToken::Languages(languages) => self.languages.extend(languages),
            TagToken::LanguageCount(count) => self.language_count = Some(count),
            TagToken::Revision(rev) => {
                self.revision = Some(self.revision.map_or(rev, |r| r.max(rev)));
            }
            TagToken::Version(version) => self.version = Some(version),
            TagToken::Dump(flag) => {
                self.dump_flags.insert(flag);
            }
            TagToken::Release(flag) => {
                self.release_flags.insert(flag);
            }
        }
    }
}

/// Parse the tags of a ROM filename (with or without extension).
///
/// # Examples
///
/// ```
/// use rom_sorter_core::{DumpQuality, Region, parse_tags};
///
/// let tags = parse_tags("Game (USA, Europe) (Rev 1) [!].sfc");
/// assert!(tags.regions.contains(&Region::Usa));
/// assert!(tags.regions.contains(&Region::Europe));
/// assert_eq!(tags.revision, Some(1));
/// assert_eq!(tags.quality(), DumpQuality::Verified);
/// ```
pub fn parse_tags(filename: &str) -> Tags {
    let (stem, _) = split_extension(filename);
    let mut tags = Tags::default();

    for segment in split_segments(stem) {
        if let Segment::Group { open, content, raw } = segment {
            match classify_group(open, content) {
                Some(token) => tags.apply(token),
                None => tags.unrecognized.push(raw.to_string()),
            }
        }
    }

    tags
}

// ── Vocabulary matching ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TagToken {
    Regions(Vec<Region>),
    Languages(Vec<Language>),
    LanguageCount(u32),
    Revision(u32),
    Version(Version),
    Dump(DumpFlag),
    Release(ReleaseFlag),
}

/// Classify the content of one bracketed group. `None` means the content
/// matches no known vocabulary.
pub(crate) fn classify_group(open: char, content: &str) -> Option<TagToken> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return None;
    }

    if open == '[' {
        if let Some(flag) = parse_dump_code(trimmed) {
            return Some(TagToken::Dump(flag));
        }
    }
    if let Some(regions) = parse_region_list(trimmed) {
        return Some(TagToken::Regions(regions));
    }
    if let Some(languages) = parse_language_list(trimmed) {
        return Some(TagToken::Languages(languages));
    }
    if let Some(count) = parse_language_count(trimmed) {
        return Some(TagToken::LanguageCount(count));
    }
    if let Some(rev) = parse_revision(trimmed) {
        return Some(TagToken::Revision(rev));
    }
    if let Some(version) = parse_version(trimmed) {
        return Some(TagToken::Version(version));
    }
    if trimmed.eq_ignore_ascii_case("hack") {
        return Some(TagToken::Dump(DumpFlag::Hack));
    }
    ReleaseFlag::from_label(trimmed).map(TagToken::Release)
}

/// GoodTools bracket codes: `!`, `b`, `b1`, `h1C`, `T+Eng`, ...
fn parse_dump_code(code: &str) -> Option<DumpFlag> {
    if code == "!" {
        return Some(DumpFlag::Verified);
    }
    if code.starts_with("T+") || code.starts_with("T-") {
        return Some(DumpFlag::Translation);
    }

    let mut chars = code.chars();
    let first = chars.next()?;
    let rest = chars.as_str();
    // A numbered variant like "b1" or "h2C"; "bios" is not a dump code.
    let rest_ok = rest.is_empty()
        || (rest.starts_with(|c: char| c.is_ascii_digit())
            && rest.chars().all(|c| c.is_ascii_alphanumeric() || c == '+'));
    if !rest_ok {
        return None;
    }

    match first {
        'b' => Some(DumpFlag::BadDump),
        'x' => Some(DumpFlag::BadChecksum),
        'o' => Some(DumpFlag::Overdump),
        'a' => Some(DumpFlag::Alternate),
        'h' => Some(DumpFlag::Hack),
        't' => Some(DumpFlag::Trainer),
        'f' => Some(DumpFlag::Fixed),
        'p' => Some(DumpFlag::Pirate),
        _ => None,
    }
}

/// GoodTools multi-language count: `M3`, `M10`.
fn parse_language_count(tag: &str) -> Option<u32> {
    let digits = tag.strip_prefix('M')?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// `Rev 1`, `Rev A`, `REV01`, `PRG1` → revision number.
///
/// Letter revisions count from `A` = 1. A dotted numeric revision keeps only
/// its major part.
fn parse_revision(tag: &str) -> Option<u32> {
    let lower = tag.to_lowercase();
    let rest = lower
        .strip_prefix("rev")
        .or_else(|| lower.strip_prefix("prg"))?
        .trim_start();
    if rest.is_empty() {
        return None;
    }

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if !digits.is_empty() {
        let tail = &rest[digits.len()..];
        if !tail.is_empty() && !tail.starts_with('.') {
            return None;
        }
        return digits.parse().ok();
    }

    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_lowercase() => Some(c as u32 - 'a' as u32 + 1),
        _ => None,
    }
}

/// `v1.1`, `V1.02`, `v2` → version components.
fn parse_version(tag: &str) -> Option<Version> {
    let rest = tag.strip_prefix(['v', 'V'])?;
    if !rest.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }

    let mut parts = Vec::new();
    for piece in rest.split('.') {
        let digits: String = piece.chars().take_while(|c| c.is_ascii_digit()).collect();
        match digits.parse() {
            Ok(n) => parts.push(n),
            Err(_) => break,
        }
        if digits.len() != piece.len() {
            // Suffix like "1.1a": keep the numeric prefix only
            break;
        }
    }
    Some(Version(parts))
}

#[cfg(test)]
#[path = "tests/tags_tests.rs"]
mod tests;

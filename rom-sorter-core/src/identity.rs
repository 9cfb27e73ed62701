//! Canonical game identity for grouping release variants.
//!
//! `Tetris (USA) (Rev 1) [!].gb` and `Tetris (Europe).gb` both reduce to the
//! key `tetris`. Only segments the tag vocabulary recognizes are removed;
//! anything else (e.g. `(Disc 2)`) stays part of the identity so distinct
//! discs or editions are never merged.

use serde::Serialize;

use crate::segments::{Segment, split_extension, split_segments};
use crate::tags::classify_group;

/// Options controlling how files are grouped into games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupingOptions {
    /// Include the lower-cased file extension in the key, so that the same
    /// title for different systems (`.sfc` vs `.md`) stays separate.
    pub by_extension: bool,
}

impl Default for GroupingOptions {
    fn default() -> Self {
        Self { by_extension: true }
    }
}

/// Grouping key for a game.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct GameKey {
    /// Case-folded, punctuation-free game name.
    pub name: String,
    /// Lower-cased extension, when grouping by extension.
    pub extension: Option<String>,
}

impl std::fmt::Display for GameKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.extension {
            Some(ext) => write!(f, "{} [.{}]", self.name, ext),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Normalized identity of a filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameIdentity {
    /// Comparison key (case-folded, punctuation collapsed).
    pub key: String,
    /// Human-readable title with tags removed and original case kept.
    pub display: String,
}

/// Reduce a filename to its game identity.
///
/// # Examples
///
/// ```
/// use rom_sorter_core::game_identity;
///
/// let a = game_identity("Zelda no Densetsu (Japan) (Rev A) (En,Fr).sfc");
/// let b = game_identity("Zelda no Densetsu (USA) [!].sfc");
/// assert_eq!(a.key, "zelda no densetsu");
/// assert_eq!(a.key, b.key);
/// assert_eq!(b.display, "Zelda no Densetsu");
/// ```
pub fn game_identity(filename: &str) -> GameIdentity {
    let (stem, _) = split_extension(filename);

    let mut kept = String::with_capacity(stem.len());
    for segment in split_segments(stem) {
        match segment {
            Segment::Text(text) => kept.push_str(text),
            Segment::Group { open, content, raw } => {
                if classify_group(open, content).is_some() {
                    kept.push(' ');
                } else {
                    kept.push_str(raw);
                }
            }
        }
    }

    let display = tidy_display(strip_numbering_prefix(&kept));
    let key = fold_key(&display);
    if key.is_empty() {
        // Nothing but tags (or punctuation): fall back to the raw stem
        return GameIdentity {
            key: stem.trim().to_lowercase(),
            display: stem.trim().to_string(),
        };
    }

    GameIdentity { key, display }
}

/// Compute the grouping key for a filename.
pub fn game_key(filename: &str, options: &GroupingOptions) -> GameKey {
    let identity = game_identity(filename);
    let extension = if options.by_extension {
        split_extension(filename).1.map(str::to_lowercase)
    } else {
        None
    };
    GameKey {
        name: identity.key,
        extension,
    }
}

/// Drop a zero-padded list number such as `0042 - ` from the front.
///
/// Titles that start with a year or number (`1942`, `3 Ninjas`) are left
/// alone because they are not zero-padded.
fn strip_numbering_prefix(name: &str) -> &str {
    let trimmed = name.trim_start();
    let digits = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    if digits == 0 || !trimmed.starts_with('0') {
        return trimmed;
    }
    match trimmed[digits..].trim_start().strip_prefix('-') {
        Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim_start(),
        _ => trimmed,
    }
}

/// Collapse whitespace runs and trim dangling separators.
fn tidy_display(name: &str) -> String {
    let collapsed = name.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .trim_matches(|c: char| c == '-' || c == '_' || c == ',' || c.is_whitespace())
        .to_string()
}

/// Case-fold and replace every run of punctuation/separators with one space.
fn fold_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    let mut pending_space = false;
    for c in name.chars() {
        if c.is_alphanumeric() || c == '\'' {
            if pending_space && !key.is_empty() {
                key.push(' ');
            }
            pending_space = false;
            key.extend(c.to_lowercase());
        } else {
            pending_space = true;
        }
    }
    key
}

#[cfg(test)]
#[path = "tests/identity_tests.rs"]
mod tests;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::language::Language;

/// Geographic regions for ROM releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Region {
    /// USA / North America
    Usa,
    /// Europe (PAL regions)
    Europe,
    /// Japan
    Japan,
    /// World / Region-free
    World,
    /// Asia
    Asia,
    /// Australia
    Australia,
    /// Brazil
    Brazil,
    /// Canada
    Canada,
    /// China
    China,
    /// France
    France,
    /// Germany
    Germany,
    /// Hong Kong
    HongKong,
    /// Italy
    Italy,
    /// Korea
    Korea,
    /// Netherlands
    Netherlands,
    /// Russia
    Russia,
    /// Scandinavia
    Scandinavia,
    /// Spain
    Spain,
    /// Sweden
    Sweden,
    /// Taiwan
    Taiwan,
    /// United Kingdom
    UnitedKingdom,
}

const ALL_REGIONS: &[Region] = &[
    Region::Usa,
    Region::Europe,
    Region::Japan,
    Region::World,
    Region::Asia,
    Region::Australia,
    Region::Brazil,
    Region::Canada,
    Region::China,
    Region::France,
    Region::Germany,
    Region::HongKong,
    Region::Italy,
    Region::Korea,
    Region::Netherlands,
    Region::Russia,
    Region::Scandinavia,
    Region::Spain,
    Region::Sweden,
    Region::Taiwan,
    Region::UnitedKingdom,
];

impl Region {
    /// All regions in the vocabulary.
    pub fn all() -> &'static [Region] {
        ALL_REGIONS
    }

    /// Returns the standard abbreviation for this region.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usa => "USA",
            Self::Europe => "EUR",
            Self::Japan => "JPN",
            Self::World => "WLD",
            Self::Asia => "ASI",
            Self::Australia => "AUS",
            Self::Brazil => "BRA",
            Self::Canada => "CAN",
            Self::China => "CHN",
            Self::France => "FRA",
            Self::Germany => "GER",
            Self::HongKong => "HKG",
            Self::Italy => "ITA",
            Self::Korea => "KOR",
            Self::Netherlands => "NLD",
            Self::Russia => "RUS",
            Self::Scandinavia => "SCN",
            Self::Spain => "SPA",
            Self::Sweden => "SWE",
            Self::Taiwan => "TWN",
            Self::UnitedKingdom => "UK",
        }
    }

    /// Returns the name of this region as No-Intro writes it.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Usa => "USA",
            Self::Europe => "Europe",
            Self::Japan => "Japan",
            Self::World => "World",
            Self::Asia => "Asia",
            Self::Australia => "Australia",
            Self::Brazil => "Brazil",
            Self::Canada => "Canada",
            Self::China => "China",
            Self::France => "France",
            Self::Germany => "Germany",
            Self::HongKong => "Hong Kong",
            Self::Italy => "Italy",
            Self::Korea => "Korea",
            Self::Netherlands => "Netherlands",
            Self::Russia => "Russia",
            Self::Scandinavia => "Scandinavia",
            Self::Spain => "Spain",
            Self::Sweden => "Sweden",
            Self::Taiwan => "Taiwan",
            Self::UnitedKingdom => "United Kingdom",
        }
    }

    /// Look up a region by its No-Intro name or a common alias (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let region = match name.trim().to_lowercase().as_str() {
            "usa" | "us" | "united states" | "north america" => Self::Usa,
            "europe" | "eu" | "eur" | "pal" => Self::Europe,
            "japan" | "jp" | "jpn" => Self::Japan,
            "world" | "wld" => Self::World,
            "asia" | "asi" => Self::Asia,
            "australia" | "aus" => Self::Australia,
            "brazil" | "bra" => Self::Brazil,
            "canada" | "can" => Self::Canada,
            "china" | "chn" => Self::China,
            "france" | "fra" => Self::France,
            "germany" | "ger" | "deu" => Self::Germany,
            "hong kong" | "hkg" => Self::HongKong,
            "italy" | "ita" => Self::Italy,
            "korea" | "kor" => Self::Korea,
            "netherlands" | "nld" | "holland" => Self::Netherlands,
            "russia" | "rus" => Self::Russia,
            "scandinavia" | "scn" => Self::Scandinavia,
            "spain" | "spa" | "esp" => Self::Spain,
            "sweden" | "swe" => Self::Sweden,
            "taiwan" | "twn" => Self::Taiwan,
            "united kingdom" | "uk" | "gbr" => Self::UnitedKingdom,
            _ => return None,
        };
        Some(region)
    }

    /// Parse a single GoodTools region letter (`U`, `E`, `J`, ...).
    ///
    /// Unlike serial-number codes, GoodTools uses `E` for Europe.
    pub fn from_goodtools_char(c: char) -> Option<Self> {
        match c {
            'U' => Some(Self::Usa),
            'E' => Some(Self::Europe),
            'J' => Some(Self::Japan),
            'W' => Some(Self::World),
            'A' => Some(Self::Australia),
            'B' => Some(Self::Brazil),
            'C' => Some(Self::China),
            'F' => Some(Self::France),
            'G' => Some(Self::Germany),
            'H' => Some(Self::Netherlands),
            'I' => Some(Self::Italy),
            'K' => Some(Self::Korea),
            'S' => Some(Self::Spain),
            _ => None,
        }
    }

    /// Languages a release for this region ships in when the filename
    /// carries no explicit language list.
    ///
    /// Multi-language regions (Europe, World, Asia, ...) imply nothing.
    pub fn implied_languages(&self) -> &'static [Language] {
        match self {
            Self::Usa | Self::UnitedKingdom | Self::Australia => &[Language::English],
            Self::Japan => &[Language::Japanese],
            Self::Brazil => &[Language::Portuguese],
            Self::China | Self::Taiwan | Self::HongKong => &[Language::Chinese],
            Self::France => &[Language::French],
            Self::Germany => &[Language::German],
            Self::Italy => &[Language::Italian],
            Self::Korea => &[Language::Korean],
            Self::Netherlands => &[Language::Dutch],
            Self::Russia => &[Language::Russian],
            Self::Spain => &[Language::Spanish],
            Self::Sweden => &[Language::Swedish],
            Self::Europe | Self::World | Self::Asia | Self::Canada | Self::Scandinavia => &[],
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when a string is not a known region.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown region: \"{0}\"")]
pub struct ParseRegionError(pub String);

impl std::str::FromStr for Region {
    type Err = ParseRegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseRegionError(s.to_string()))
    }
}

impl TryFrom<String> for Region {
    type Error = ParseRegionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.name().to_string()
    }
}

/// Parse a parenthesized segment as a region list.
///
/// Accepts No-Intro lists (`USA, Europe`) where every comma-separated part
/// must be a known region, and GoodTools letter codes (`U`, `JU`, `UE`).
/// Returns `None` if the segment is not entirely made of region tokens.
pub fn parse_region_list(segment: &str) -> Option<Vec<Region>> {
    let trimmed = segment.trim();
    if trimmed.is_empty() {
        return None;
    }

    let named: Option<Vec<Region>> = trimmed.split(',').map(Region::from_name).collect();
    if let Some(regions) = named {
        return Some(dedup(regions));
    }

    // GoodTools: 1-4 uppercase code letters, e.g. "U", "JU", "JUE"
    if trimmed.len() <= 4 && trimmed.chars().all(|c| c.is_ascii_uppercase()) {
        let coded: Option<Vec<Region>> =
            trimmed.chars().map(Region::from_goodtools_char).collect();
        return coded.map(dedup);
    }

    None
}

fn dedup(regions: Vec<Region>) -> Vec<Region> {
    let mut out = Vec::with_capacity(regions.len());
    for r in regions {
        if !out.contains(&r) {
            out.push(r);
        }
    }
    out
}

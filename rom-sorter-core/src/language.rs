use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Languages that appear in No-Intro language lists (`(En,Fr,De)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Language {
    English,
    Japanese,
    French,
    German,
    Spanish,
    Italian,
    Dutch,
    Portuguese,
    Swedish,
    Norwegian,
    Danish,
    Finnish,
    Polish,
    Russian,
    Chinese,
    Korean,
    Catalan,
    Greek,
    Turkish,
}

impl Language {
    /// Two-letter code as written in filenames.
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "En",
            Self::Japanese => "Ja",
            Self::French => "Fr",
            Self::German => "De",
            Self::Spanish => "Es",
            Self::Italian => "It",
            Self::Dutch => "Nl",
            Self::Portuguese => "Pt",
            Self::Swedish => "Sv",
            Self::Norwegian => "No",
            Self::Danish => "Da",
            Self::Finnish => "Fi",
            Self::Polish => "Pl",
            Self::Russian => "Ru",
            Self::Chinese => "Zh",
            Self::Korean => "Ko",
            Self::Catalan => "Ca",
            Self::Greek => "El",
            Self::Turkish => "Tr",
        }
    }

    /// Look up a language by its filename code (`En`) or English name.
    /// Case-insensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        let lang = match code.trim().to_lowercase().as_str() {
            "en" | "english" => Self::English,
            "ja" | "jp" | "japanese" => Self::Japanese,
            "fr" | "french" => Self::French,
            "de" | "german" => Self::German,
            "es" | "spanish" => Self::Spanish,
            "it" | "italian" => Self::Italian,
            "nl" | "dutch" => Self::Dutch,
            "pt" | "portuguese" => Self::Portuguese,
            "sv" | "swedish" => Self::Swedish,
            "no" | "norwegian" => Self::Norwegian,
            "da" | "danish" => Self::Danish,
            "fi" | "finnish" => Self::Finnish,
            "pl" | "polish" => Self::Polish,
            "ru" | "russian" => Self::Russian,
            "zh" | "chinese" => Self::Chinese,
            "ko" | "korean" => Self::Korean,
            "ca" | "catalan" => Self::Catalan,
            "el" | "greek" => Self::Greek,
            "tr" | "turkish" => Self::Turkish,
            _ => return None,
        };
        Some(lang)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error returned when a string is not a known language code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language: \"{0}\"")]
pub struct ParseLanguageError(pub String);

impl std::str::FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| ParseLanguageError(s.to_string()))
    }
}

impl TryFrom<String> for Language {
    type Error = ParseLanguageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.code().to_string()
    }
}

/// Parse a parenthesized segment as a language list (`En`, `En,Fr,De`).
///
/// Filenames write codes as one uppercase letter followed by a lowercase
/// one; anything else (e.g. `EN`, `english`) is not treated as a language
/// tag. Every part must be a known code.
pub fn parse_language_list(segment: &str) -> Option<Vec<Language>> {
    let mut languages = Vec::new();
    for part in segment.split(',') {
        let t = part.trim();
        let mut chars = t.chars();
        let well_formed = t.len() == 2
            && chars.next().is_some_and(|c| c.is_ascii_uppercase())
            && chars.next().is_some_and(|c| c.is_ascii_lowercase());
        if !well_formed {
            return None;
        }
        let lang = Language::from_code(t)?;
        if !languages.contains(&lang) {
            languages.push(lang);
        }
    }
    Some(languages)
}

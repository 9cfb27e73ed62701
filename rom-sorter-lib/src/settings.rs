//! User settings: where ROMs live, where they go, and how to rank them.
//!
//! Settings are read from YAML or TOML (picked by file extension). The file
//! is located with a priority chain, see [`resolve_settings_path`], and
//! written with defaults on first run.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::LevelFilter;
use rom_sorter_core::{GroupingOptions, Language, RankingConfig, Region};
use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::scanner::ScanOptions;

/// Settings file looked up in the working directory.
pub const LOCAL_SETTINGS_FILE: &str = "rom-sorter.yaml";

/// On-disk settings. Missing keys take their default value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub source_dir: PathBuf,
    pub destination_dir: PathBuf,
    pub archive_dir: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,

    /// Highest priority first.
    pub region_preference: Vec<Region>,
    /// Highest priority first.
    pub language_preference: Vec<Language>,
    /// Filename substrings, highest priority first.
    pub preferred_tokens: Vec<String>,
    pub deprioritize_bad_dumps: bool,
    pub penalize_prerelease: bool,
    pub group_by_extension: bool,

    /// Directory names skipped while scanning (case-insensitive).
    pub excluded_dirs: Vec<String>,
    /// Extensions skipped while scanning, with or without the leading dot.
    pub excluded_extensions: Vec<String>,
    /// Delete loose files that duplicate a `.zip` next to them.
    pub cleanup_unzipped_duplicates: bool,
    pub dry_run: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("./roms"),
            destination_dir: PathBuf::from("./sorted"),
            archive_dir: PathBuf::from("./archive"),
            log_file: None,
            log_level: "info".to_string(),
            region_preference: vec![Region::Usa, Region::World, Region::Europe],
            language_preference: vec![Language::English],
            preferred_tokens: vec!["[!]".to_string()],
            deprioritize_bad_dumps: true,
            penalize_prerelease: false,
            group_by_extension: true,
            excluded_dirs: vec!["images".to_string()],
            excluded_extensions: vec![".png".to_string(), ".jpg".to_string()],
            cleanup_unzipped_duplicates: true,
            dry_run: false,
        }
    }
}

impl Settings {
    /// Ranking preferences for the core planner.
    pub fn ranking_config(&self) -> RankingConfig {
        RankingConfig {
            regions: self.region_preference.clone(),
            languages: self.language_preference.clone(),
            preferred_tokens: self.preferred_tokens.clone(),
            deprioritize_bad_dumps: self.deprioritize_bad_dumps,
            penalize_prerelease: self.penalize_prerelease,
        }
    }

    pub fn grouping_options(&self) -> GroupingOptions {
        GroupingOptions {
            by_extension: self.group_by_extension,
        }
    }

    /// Scan filters, also skipping the output directories.
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions::new(&self.excluded_dirs, &self.excluded_extensions)
            .skip_path(&self.destination_dir)
            .skip_path(&self.archive_dir)
    }

    pub fn log_level_filter(&self) -> Result<LevelFilter, SettingsError> {
        LevelFilter::from_str(self.log_level.trim())
            .map_err(|_| SettingsError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Read settings from `path`.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let format = SettingsFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path).map_err(|e| SettingsError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let settings = format.parse(&contents, path)?;
        settings.log_level_filter()?;
        Ok(settings)
    }

    /// Write settings to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let format = SettingsFormat::from_path(path)?;
        let serialized = format.render(self)?;
        let io_err = |e| SettingsError::Io {
            path: path.display().to_string(),
            source: e,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        // Write atomically
        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        std::fs::write(&tmp, serialized).map_err(io_err)?;
        std::fs::rename(&tmp, path).map_err(io_err)?;
        Ok(())
    }

    /// Render settings in the format matching `path`.
    pub fn to_string_for(&self, path: &Path) -> Result<String, SettingsError> {
        SettingsFormat::from_path(path)?.render(self)
    }
}

/// Load settings from `path`, writing a default file first if none exists.
///
/// Returns the settings and whether the file was created.
pub fn load_or_create(path: &Path) -> Result<(Settings, bool), SettingsError> {
    if path.exists() {
        return Ok((Settings::load(path)?, false));
    }
    let settings = Settings::default();
    settings.save(path)?;
    log::info!("Created default settings at {}", path.display());
    Ok((settings, true))
}

/// Canonical per-user settings path: `<config_dir>/rom-sorter/config.yaml`.
pub fn default_settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("rom-sorter").join("config.yaml")
}

/// Resolve the settings file using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `rom-sorter.yaml` in `working_dir`, if it exists
/// 3. [`default_settings_path`]
pub fn resolve_settings_path(cli_override: Option<&Path>, working_dir: &Path) -> PathBuf {
    if let Some(p) = cli_override {
        return p.to_path_buf();
    }
    let local = working_dir.join(LOCAL_SETTINGS_FILE);
    if local.is_file() {
        return local;
    }
    default_settings_path()
}

/// Serialization format of a settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    Yaml,
    Toml,
}

impl SettingsFormat {
    pub fn from_path(path: &Path) -> Result<Self, SettingsError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("toml") => Ok(Self::Toml),
            _ => Err(SettingsError::UnsupportedFormat(path.display().to_string())),
        }
    }

    fn parse(self, contents: &str, path: &Path) -> Result<Settings, SettingsError> {
        match self {
            // An empty YAML document means "all defaults"
            Self::Yaml if contents.trim().is_empty() => Ok(Settings::default()),
            Self::Yaml => serde_yml::from_str(contents).map_err(|e| SettingsError::Yaml {
                path: path.display().to_string(),
                source: e,
            }),
            Self::Toml => toml::from_str(contents).map_err(|e| SettingsError::Toml {
                path: path.display().to_string(),
                source: e,
            }),
        }
    }

    fn render(self, settings: &Settings) -> Result<String, SettingsError> {
        match self {
            Self::Yaml => {
                serde_yml::to_string(settings).map_err(|e| SettingsError::Serialize(e.to_string()))
            }
            Self::Toml => toml::to_string_pretty(settings)
                .map_err(|e| SettingsError::Serialize(e.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;

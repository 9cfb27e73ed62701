use thiserror::Error;

/// Errors raised while locating, reading or writing the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("YAML parse error in {path}: {source}")]
    Yaml {
        path: String,
        source: serde_yml::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },

    /// Settings could not be rendered back to text
    #[error("Failed to serialize settings: {0}")]
    Serialize(String),

    #[error("Unsupported settings file {0} (expected .yaml, .yml or .toml)")]
    UnsupportedFormat(String),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// Errors that stop a sort run before any file is touched.
#[derive(Debug, Error)]
pub enum SortError {
    #[error("Source directory not found: {0}")]
    SourceNotFound(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

impl SortError {
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

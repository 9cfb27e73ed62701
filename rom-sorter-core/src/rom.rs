use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::tags::{Tags, parse_tags};

/// An input file: its path and the bare filename used for parsing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RomFile {
    pub path: PathBuf,
    /// Text form of the file name. Bytes that are not UTF-8 appear as
    /// `\xNN` escapes, so distinct names stay distinct.
    pub filename: String,
}

impl RomFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let filename = escape_name(path.file_name().unwrap_or(path.as_os_str()));
        Self { path, filename }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The file name exactly as it is on disk.
    pub fn file_name(&self) -> &OsStr {
        self.path.file_name().unwrap_or(self.path.as_os_str())
    }
}

fn escape_name(name: &OsStr) -> String {
    if let Some(text) = name.to_str() {
        return text.to_owned();
    }
    let mut out = String::new();
    for chunk in name.as_encoded_bytes().utf8_chunks() {
        out.push_str(chunk.valid());
        for byte in chunk.invalid() {
            out.push_str(&format!("\\x{byte:02X}"));
        }
    }
    out
}

/// A file together with the tags parsed from its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RomEntry {
    #[serde(flatten)]
    pub file: RomFile,
    pub tags: Tags,
}

impl RomEntry {
    pub fn new(file: RomFile) -> Self {
        let tags = parse_tags(&file.filename);
        Self { file, tags }
    }

    pub fn filename(&self) -> &str {
        &self.file.filename
    }

    pub fn path(&self) -> &Path {
        &self.file.path
    }

    pub fn file_name(&self) -> &OsStr {
        self.file.file_name()
    }
}

impl From<RomFile> for RomEntry {
    fn from(file: RomFile) -> Self {
        Self::new(file)
    }
}

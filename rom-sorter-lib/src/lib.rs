//! Filesystem side of rom-sorter: settings, scanning, zip-duplicate cleanup
//! and moving files according to a [`rom_sorter_core::SortPlan`].

pub mod cleanup;
pub mod error;
pub mod organize;
pub mod scanner;
pub mod settings;

pub use cleanup::{CleanupSummary, UnzippedDuplicate, find_unzipped_duplicates, remove_duplicates};
pub use error::{SettingsError, SortError};
pub use organize::{
    MoveAction, MoveKind, MovePlan, MoveProgress, MoveSummary, SkipReason, SkippedMove,
    execute_moves, plan_moves,
};
pub use scanner::{ScanOptions, scan_roms};
pub use settings::{Settings, load_or_create, resolve_settings_path};

//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rom-sorter")]
#[command(
    about = "Keep the best version of every ROM and archive the rest",
    long_about = None
)]
pub(crate) struct Cli {
    /// Settings file (.yaml, .yml or .toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for `sort`. Flags override the settings file.
#[derive(Args, Clone, Debug, Default)]
pub(crate) struct SortArgs {
    /// Show planned moves without executing
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Directory to scan for ROMs
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Directory that receives the best version of each game
    #[arg(long)]
    pub destination: Option<PathBuf>,

    /// Directory that receives every other version
    #[arg(long)]
    pub archive: Option<PathBuf>,

    /// Skip deleting unpacked copies of .zip files
    #[arg(long)]
    pub no_cleanup: bool,

    /// Print the plan as JSON instead of a report
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Group ROMs by game, keep the best version and archive the others
    Sort(SortArgs),

    /// Show how filenames are parsed, grouped and ranked
    Inspect {
        /// Filenames to inspect (they do not need to exist)
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show effective settings and where they come from
    Show,

    /// Print the settings file path
    Path,

    /// Write a settings file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

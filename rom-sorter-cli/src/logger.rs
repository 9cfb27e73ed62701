//! Console logger built on `env_logger`.
//!
//! Normal output is the bare message on stdout, since commands report
//! through `log::info!`. Machine-readable output (`sort --json`) moves the
//! log to stderr. Verbose mode adds timestamps and levels. An optional log
//! file receives every record with ANSI codes stripped.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Local;
use env_logger::{Builder, Env, Target};
use log::LevelFilter;

use crate::error::CliError;

pub(crate) struct LogOptions {
    pub quiet: bool,
    pub verbose: bool,
    /// Level from the settings file, used when neither flag is given
    pub level: LevelFilter,
    pub file: Option<PathBuf>,
    /// Send records to stderr, leaving stdout for command output
    pub stderr: bool,
}

impl LogOptions {
    fn effective_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Warn
        } else if self.verbose {
            LevelFilter::Debug
        } else {
            self.level
        }
    }
}

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Install the global logger. `RUST_LOG` still takes precedence.
pub(crate) fn init(options: &LogOptions) -> Result<(), CliError> {
    let file = match &options.file {
        Some(path) => {
            let f = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    CliError::logging(format!("cannot open {}: {}", path.display(), e))
                })?;
            Some(Mutex::new(f))
        }
        None => None,
    };
    let verbose = options.verbose && !options.quiet;

    let mut builder =
        Builder::from_env(Env::default().default_filter_or(options.effective_level().to_string()));
    builder.target(if options.stderr {
        Target::Stderr
    } else {
        Target::Stdout
    });
    let write_failed = AtomicBool::new(false);
    builder.format(move |buf, record| {
        let line = if verbose {
            format!("[{} {:<5}] {}", timestamp(), record.level(), record.args())
        } else {
            record.args().to_string()
        };
        if let Some(file) = &file {
            let stamped = format!("[{} {:<5}] {}", timestamp(), record.level(), record.args());
            if let Err(e) = tee(file, &stamped) {
                if !write_failed.swap(true, Ordering::Relaxed) {
                    eprintln!("Warning: cannot write to log file: {e}");
                }
            }
        }
        writeln!(buf, "{line}")
    });
    builder
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))
}

fn tee(file: &Mutex<File>, line: &str) -> io::Result<()> {
    let mut f = file
        .lock()
        .map_err(|_| io::Error::other("log file lock poisoned"))?;
    let mut plain = strip_ansi_escapes::strip(line.as_bytes());
    plain.push(b'\n');
    f.write_all(&plain)
}

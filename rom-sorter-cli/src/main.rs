//! rom-sorter CLI
//!
//! Keeps the best release of every game in a ROM collection and archives
//! the other versions.

mod cli_types;
mod commands;
mod error;
mod logger;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use rom_sorter_lib::{Settings, load_or_create, resolve_settings_path};

use cli_types::{Cli, Commands, ConfigAction};
use commands::config::{run_config_init, run_config_path, run_config_show};
use commands::inspect::run_inspect;
use commands::sort::run_sort;
use error::CliError;
use logger::LogOptions;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".if_supports_color(Stderr, |t| t.red()), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let settings_path = resolve_settings_path(cli.config.as_deref(), &working_dir);

    // `config path` and `config init` must work without a readable settings file
    let needs_settings = !matches!(
        cli.command,
        Commands::Config {
            action: ConfigAction::Path | ConfigAction::Init { .. }
        }
    );
    let loaded = if needs_settings {
        Some(load_or_create(&settings_path))
    } else {
        None
    };

    let (level, settings_log_file) = match &loaded {
        Some(Ok((settings, _))) => (
            settings.log_level_filter().unwrap_or(LevelFilter::Info),
            settings.log_file.clone(),
        ),
        _ => (LevelFilter::Info, None),
    };
    logger::init(&LogOptions {
        quiet: cli.quiet,
        verbose: cli.verbose,
        level,
        file: cli.logfile.clone().or(settings_log_file),
        stderr: matches!(&cli.command, Commands::Sort(args) if args.json),
    })?;

    let settings = match loaded {
        Some(result) => {
            let (settings, created) = result?;
            if created {
                log::warn!(
                    "No settings found; wrote defaults to {}",
                    settings_path.display()
                );
            }
            settings
        }
        None => Settings::default(),
    };
    log::debug!("Using settings from {}", settings_path.display());

    match cli.command {
        Commands::Sort(args) => run_sort(settings, args, cli.quiet),
        Commands::Inspect { names } => {
            run_inspect(&settings, &names);
            Ok(())
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => run_config_show(&settings_path, &settings),
            ConfigAction::Path => {
                run_config_path(&settings_path);
                Ok(())
            }
            ConfigAction::Init { force } => run_config_init(&settings_path, force),
        },
    }
}

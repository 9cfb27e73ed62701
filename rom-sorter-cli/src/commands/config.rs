use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rom_sorter_lib::Settings;

use crate::error::CliError;

/// Show the settings file location and the effective settings.
pub(crate) fn run_config_show(path: &Path, settings: &Settings) -> Result<(), CliError> {
    log::info!(
        "{}",
        "rom-sorter Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");
    if path.exists() {
        log::info!(
            "  Config file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Config file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    // Render in the file's own format; fall back to YAML for odd extensions
    let rendered = settings
        .to_string_for(path)
        .or_else(|_| settings.to_string_for(Path::new("settings.yaml")))?;
    for line in rendered.lines() {
        log::info!("  {line}");
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path(path: &Path) {
    println!("{}", path.display());
}

/// Write a default settings file.
pub(crate) fn run_config_init(path: &Path, force: bool) -> Result<(), CliError> {
    if path.exists() && !force {
        return Err(CliError::other(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    Settings::default().save(path)?;
    log::info!(
        "{} {}",
        "Wrote default settings to".if_supports_color(Stdout, |t| t.green()),
        path.display(),
    );
    Ok(())
}

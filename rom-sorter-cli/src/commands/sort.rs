use std::path::Path;

use log::Level;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rom_sorter_core::{Decision, RunMode, SortPlan, plan_sort};
use rom_sorter_lib::{
    MoveKind, MovePlan, MoveProgress, Settings, SkipReason, UnzippedDuplicate, execute_moves,
    find_unzipped_duplicates, plan_moves, remove_duplicates, scan_roms,
};

use crate::cli_types::SortArgs;
use crate::commands::spinner;
use crate::error::CliError;

/// Apply command-line overrides on top of the settings file.
pub(crate) fn apply_overrides(mut settings: Settings, args: &SortArgs) -> Settings {
    if let Some(source) = &args.source {
        settings.source_dir = source.clone();
    }
    if let Some(destination) = &args.destination {
        settings.destination_dir = destination.clone();
    }
    if let Some(archive) = &args.archive {
        settings.archive_dir = archive.clone();
    }
    if args.dry_run {
        settings.dry_run = true;
    }
    if args.no_cleanup {
        settings.cleanup_unzipped_duplicates = false;
    }
    settings
}

pub(crate) fn run_sort(settings: Settings, args: SortArgs, quiet: bool) -> Result<(), CliError> {
    let settings = apply_overrides(settings, &args);
    let mode = RunMode::from_dry_run(settings.dry_run);

    log::info!(
        "Scanning ROMs in: {}",
        settings.source_dir.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!(
        "  Destination: {}   Archive: {}",
        settings.destination_dir.display(),
        settings.archive_dir.display(),
    );
    if mode.is_dry_run() {
        log::info!(
            "{}",
            "Dry run: no files will be moved or deleted".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::debug!("Excluding directories: {:?}", settings.excluded_dirs);
    log::debug!("Excluding extensions: {:?}", settings.excluded_extensions);
    log::info!("");

    let pb = spinner(quiet || args.json);
    pb.set_message("Scanning...");
    let mut files = scan_roms(&settings.source_dir, &settings.scan_options())?;
    pb.finish_and_clear();

    let duplicates = if settings.cleanup_unzipped_duplicates {
        find_unzipped_duplicates(&files)
    } else {
        Vec::new()
    };
    let mut failures = Vec::new();
    if !duplicates.is_empty() {
        failures.extend(cleanup(&duplicates, mode));
        files.retain(|f| !duplicates.iter().any(|d| &d.path == f));
    }

    let plan = plan_sort(
        files,
        &settings.ranking_config(),
        &settings.grouping_options(),
        mode,
    );
    let moves = plan_moves(&plan, &settings.destination_dir, &settings.archive_dir);

    if args.json {
        println!("{}", json_report(&plan, &duplicates, &moves)?);
        if mode.is_dry_run() {
            return Ok(());
        }
    } else {
        log::info!(
            "Found {} files in {} games",
            plan.file_count(),
            plan.game_count(),
        );
        log::info!("");
        print_plan(&plan);
        print_skipped(&moves);
    }

    if mode.is_dry_run() {
        log::info!("");
        log::info!(
            "{} {} to destination, {} to archive, {} skipped",
            "Dry run:".if_supports_color(Stdout, |t| t.bold()),
            moves.count(MoveKind::Keep),
            moves.count(MoveKind::Archive),
            moves.skipped.len(),
        );
        return Ok(());
    }

    failures.extend(execute(&moves, quiet || args.json));
    if failures.is_empty() {
        Ok(())
    } else {
        Err(CliError::other(format!(
            "{} of {} file operations failed",
            failures.len(),
            moves.moves.len() + duplicates.len()
        )))
    }
}

/// The `--json` document. Log output never goes to stdout in this mode.
fn json_report(
    plan: &SortPlan,
    duplicates: &[UnzippedDuplicate],
    moves: &MovePlan,
) -> Result<String, CliError> {
    let report = serde_json::json!({
        "mode": plan.mode,
        "cleanup": duplicates,
        "decisions": plan.decisions,
        "moves": moves.moves,
        "skipped": moves.skipped,
    });
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Delete (or report) loose copies of zipped ROMs. Returns the deletions
/// that failed; the sort carries on regardless.
fn cleanup(duplicates: &[UnzippedDuplicate], mode: RunMode) -> Vec<String> {
    log::info!(
        "{}",
        "Cleaning up unzipped duplicates".if_supports_color(Stdout, |t| t.bold()),
    );
    if mode.is_dry_run() {
        for dup in duplicates {
            log::info!(
                "  {} {} {}",
                "DELETE".if_supports_color(Stdout, |t| t.red()),
                dup.path.display(),
                format!("(duplicate of {})", file_name(&dup.archive))
                    .if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    } else {
        let summary = remove_duplicates(duplicates);
        log::info!("  Deleted {} files", summary.removed);
        if !summary.errors.is_empty() {
            log::warn!(
                "  {} duplicate files could not be deleted",
                summary.errors.len()
            );
        }
        log::info!("");
        return summary.errors;
    }
    log::info!("");
    Vec::new()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn print_decision(decision: &Decision) {
    log::info!(
        "{} {}",
        decision.display_name.if_supports_color(Stdout, |t| t.bold()),
        format!("[{}]", decision.key).if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!(
        "  {} {} {}",
        "\u{2714} keep   ".if_supports_color(Stdout, |t| t.green()),
        decision.keeper.filename(),
        format!("({})", decision.reason()).if_supports_color(Stdout, |t| t.dimmed()),
    );
    for entry in &decision.archived {
        log::info!(
            "  {} {}",
            "\u{2192} archive".if_supports_color(Stdout, |t| t.yellow()),
            entry.filename().if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
}

fn print_plan(plan: &SortPlan) {
    for decision in &plan.decisions {
        if decision.archived.is_empty() {
            log::debug!(
                "{} {}",
                decision.keeper.filename(),
                "(only version)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        } else {
            print_decision(decision);
        }
    }
}

fn print_skipped(moves: &MovePlan) {
    if moves.skipped.is_empty() {
        return;
    }
    log::warn!("");
    for skipped in &moves.skipped {
        let level = match skipped.reason {
            SkipReason::AlreadyInPlace => Level::Debug,
            _ => Level::Warn,
        };
        log::log!(
            level,
            "  {} Skipping {} {}: {}",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            skipped.action.kind.label(),
            skipped.action.source.display(),
            skipped.reason,
        );
    }
}

/// Run the moves and report; returns the per-file errors.
fn execute(moves: &MovePlan, quiet: bool) -> Vec<String> {
    let pb = spinner(quiet);
    let progress_callback = |progress: MoveProgress| match progress {
        MoveProgress::Moving {
            ref file_name,
            file_index,
            total,
        } => {
            pb.set_message(format!("[{}/{}] Moving {}", file_index + 1, total, file_name));
            pb.tick();
        }
        MoveProgress::Done => pb.finish_and_clear(),
    };
    let summary = execute_moves(moves, &progress_callback);

    log::info!("");
    log::info!(
        "{} {} kept, {} archived, {} skipped",
        "Summary:".if_supports_color(Stdout, |t| t.bold()),
        summary.kept.if_supports_color(Stdout, |t| t.green()),
        summary.archived,
        summary.skipped.len(),
    );
    for error in &summary.errors {
        log::error!(
            "  {} {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            error,
        );
    }
    summary.errors
}

pub(crate) mod config;
pub(crate) mod inspect;
pub(crate) mod sort;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner used by long-running commands (hidden in quiet mode).
pub(crate) fn spinner(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|"),
    );
    pb
}

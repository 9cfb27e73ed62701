use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rom_sorter_core::{RunMode, game_identity, game_key, parse_tags, plan_sort};
use rom_sorter_lib::Settings;

/// Show the identity, grouping key and tags parsed from each name, then
/// how the names would be ranked against each other.
pub(crate) fn run_inspect(settings: &Settings, names: &[String]) {
    let grouping = settings.grouping_options();

    for name in names {
        let identity = game_identity(name);
        let key = game_key(name, &grouping);
        let tags = parse_tags(name);

        log::info!("{}", name.if_supports_color(Stdout, |t| t.bold()));
        log::info!("  Title:   {}", identity.display);
        log::info!(
            "  Key:     {}",
            key.to_string().if_supports_color(Stdout, |t| t.cyan()),
        );
        log::info!("  Tags:    {}", tags.summary());
        log::info!("  Quality: {:?}", tags.quality());
        if !tags.unrecognized.is_empty() {
            log::info!(
                "  {}",
                format!("Kept in title: {}", tags.unrecognized.join(" "))
                    .if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        log::info!("");
    }

    if names.len() < 2 {
        return;
    }

    let ranking = settings.ranking_config();
    let factors: Vec<String> = ranking.factors().iter().map(|f| f.to_string()).collect();
    log::info!(
        "{} {}",
        "Ranking".if_supports_color(Stdout, |t| t.bold()),
        format!("({})", factors.join(" > ")).if_supports_color(Stdout, |t| t.dimmed()),
    );

    let plan = plan_sort(names, &ranking, &grouping, RunMode::DryRun);
    for decision in &plan.decisions {
        log::info!(
            "  {} {}",
            decision.display_name,
            format!("[{}]", decision.key).if_supports_color(Stdout, |t| t.dimmed()),
        );
        log::info!(
            "    1. {} {}",
            decision.keeper.filename().if_supports_color(Stdout, |t| t.green()),
            format!("({})", decision.reason()).if_supports_color(Stdout, |t| t.dimmed()),
        );
        for (i, entry) in decision.archived.iter().enumerate() {
            log::info!("    {}. {}", i + 2, entry.filename());
        }
    }
}

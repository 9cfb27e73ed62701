use super::*;
use crate::rom::RomFile;

fn entry(name: &str) -> RomEntry {
    RomEntry::new(RomFile::new(name))
}

fn usa_europe() -> RankingConfig {
    RankingConfig {
        regions: vec![Region::Usa, Region::Europe],
        ..Default::default()
    }
}

fn best(names: &[&str], config: &RankingConfig) -> String {
    let entries = names.iter().map(|n| entry(n)).collect();
    rank_entries(entries, config)[0].entry.filename().to_string()
}

#[test]
fn test_revision_breaks_region_tie() {
    let winner = best(
        &["Game (USA).rom", "Game (Europe).rom", "Game (USA)(Rev 1).rom"],
        &usa_europe(),
    );
    assert_eq!(winner, "Game (USA)(Rev 1).rom");
}

#[test]
fn test_bad_dump_loses_even_with_same_region() {
    let winner = best(
        &["Game (Japan)[b].rom", "Game (Japan).rom"],
        &RankingConfig::default(),
    );
    assert_eq!(winner, "Game (Japan).rom");
}

#[test]
fn test_bad_dump_loses_despite_preferred_region() {
    let winner = best(&["Game (USA) [b].rom", "Game (Japan) [!].rom"], &usa_europe());
    assert_eq!(winner, "Game (Japan) [!].rom");
}

#[test]
fn test_verified_outranks_unflagged() {
    let winner = best(&["Game (USA).rom", "Game (USA) [!].rom"], &usa_europe());
    assert_eq!(winner, "Game (USA) [!].rom");
}

#[test]
fn test_disabling_bad_dump_rule_lets_region_win() {
    let config = RankingConfig {
        deprioritize_bad_dumps: false,
        ..usa_europe()
    };
    let winner = best(&["Game (USA) [b].rom", "Game (Japan) [!].rom"], &config);
    assert_eq!(winner, "Game (USA) [b].rom");

    // Quality still separates files the preferences cannot tell apart
    let winner = best(&["Game (USA) [b].rom", "Game (USA).rom"], &config);
    assert_eq!(winner, "Game (USA).rom");
}

#[test]
fn test_earlier_region_in_list_wins() {
    let config = RankingConfig {
        regions: vec![Region::Europe, Region::Usa],
        ..Default::default()
    };
    let winner = best(&["Game (USA).rom", "Game (Europe).rom"], &config);
    assert_eq!(winner, "Game (Europe).rom");
}

#[test]
fn test_multi_region_file_uses_its_best_region() {
    let config = RankingConfig {
        regions: vec![Region::Europe, Region::Japan],
        ..Default::default()
    };
    let winner = best(&["Game (Japan).rom", "Game (USA, Europe).rom"], &config);
    assert_eq!(winner, "Game (USA, Europe).rom");
}

#[test]
fn test_unlisted_region_ranks_below_listed() {
    let winner = best(&["Game (Japan) (Rev 3).rom", "Game (Europe).rom"], &usa_europe());
    assert_eq!(winner, "Game (Europe).rom");
}

#[test]
fn test_language_preference_after_region() {
    let config = RankingConfig {
        regions: vec![Region::Europe],
        languages: vec![Language::German, Language::English],
        ..Default::default()
    };
    let winner = best(
        &["Game (Europe) (En,Fr).rom", "Game (Europe) (En,De).rom"],
        &config,
    );
    assert_eq!(winner, "Game (Europe) (En,De).rom");
}

#[test]
fn test_language_implied_by_region() {
    let config = RankingConfig {
        languages: vec![Language::English],
        ..Default::default()
    };
    let winner = best(&["Game (Japan).rom", "Game (USA).rom"], &config);
    assert_eq!(winner, "Game (USA).rom");
}

#[test]
fn test_preferred_tokens_rank_after_language() {
    let config = RankingConfig {
        preferred_tokens: vec!["(Virtual Console)".to_string()],
        ..usa_europe()
    };
    let winner = best(&["Game (USA).rom", "Game (USA) (virtual console).rom"], &config);
    assert_eq!(winner, "Game (USA) (virtual console).rom");
}

#[test]
fn test_prerelease_penalty_is_opt_in() {
    // Default keys: the filename tie-break picks the beta
    let winner = best(&["Game (USA) (Beta).rom", "Game (USA).rom"], &usa_europe());
    assert_eq!(winner, "Game (USA) (Beta).rom");

    let config = RankingConfig {
        penalize_prerelease: true,
        ..usa_europe()
    };
    let winner = best(&["Game (USA) (Beta).rom", "Game (USA).rom"], &config);
    assert_eq!(winner, "Game (USA).rom");
}

#[test]
fn test_revision_wins_over_prerelease_by_default() {
    let names = ["Game (USA) (Beta) (Rev 2).rom", "Game (USA) (Rev 1).rom"];
    let ranked = rank_entries(names.iter().map(|n| entry(n)).collect(), &usa_europe());
    assert_eq!(ranked[0].entry.filename(), "Game (USA) (Beta) (Rev 2).rom");
    assert_eq!(
        deciding_factor(&ranked[0], &ranked[1], &usa_europe()),
        RankFactor::Revision
    );
    assert!(!usa_europe().factors().contains(&RankFactor::ReleaseStatus));

    let config = RankingConfig {
        penalize_prerelease: true,
        ..usa_europe()
    };
    let ranked = rank_entries(names.iter().map(|n| entry(n)).collect(), &config);
    assert_eq!(ranked[0].entry.filename(), "Game (USA) (Rev 1).rom");
    assert_eq!(
        deciding_factor(&ranked[0], &ranked[1], &config),
        RankFactor::ReleaseStatus
    );
}

#[test]
fn test_no_revision_sorts_below_rev_zero() {
    let winner = best(&["Game (USA).rom", "Game (USA) (Rev 0).rom"], &usa_europe());
    assert_eq!(winner, "Game (USA) (Rev 0).rom");
}

#[test]
fn test_version_breaks_tie_after_revision() {
    let winner = best(&["Game (USA) (v1.0).rom", "Game (USA) (v1.1).rom"], &usa_europe());
    assert_eq!(winner, "Game (USA) (v1.1).rom");
}

#[test]
fn test_filename_then_path_break_ties() {
    let winner = best(&["Game (USA) b.rom", "Game (USA) a.rom"], &usa_europe());
    assert_eq!(winner, "Game (USA) a.rom");

    let a = entry("/z/Game (USA).rom");
    let b = entry("/a/Game (USA).rom");
    assert_eq!(compare_entries(&a, &b, &usa_europe()), Ordering::Greater);
    assert_eq!(
        explain_comparison(&b, &a, &usa_europe()),
        (Ordering::Less, RankFactor::Path)
    );
}

#[test]
fn test_empty_preferences_fall_back_to_remaining_keys() {
    let config = RankingConfig::default();
    let winner = best(
        &["Game (USA).rom", "Game (Europe) (Rev 1).rom", "Game (Japan).rom"],
        &config,
    );
    assert_eq!(winner, "Game (Europe) (Rev 1).rom");
}

#[test]
fn test_ordering_is_strict_and_antisymmetric() {
    let names = [
        "Game (USA).rom",
        "Game (Europe).rom",
        "Game (USA)(Rev 1).rom",
        "Game (USA) [b].rom",
        "Game (USA) [!].rom",
        "Game (Japan) (Beta).rom",
        "/other/Game (USA).rom",
    ];
    let config = usa_europe();
    let entries: Vec<RomEntry> = names.iter().map(|n| entry(n)).collect();
    for (i, a) in entries.iter().enumerate() {
        for (j, b) in entries.iter().enumerate() {
            let ab = compare_entries(a, b, &config);
            let ba = compare_entries(b, a, &config);
            if i == j {
                assert_eq!(ab, Ordering::Equal);
            } else {
                assert_ne!(ab, Ordering::Equal, "{} vs {}", names[i], names[j]);
                assert_eq!(ab, ba.reverse());
            }
        }
    }
}

#[test]
fn test_ranking_is_independent_of_input_order() {
    let names = [
        "Game (USA).rom",
        "Game (Europe).rom",
        "Game (USA)(Rev 1).rom",
        "Game (USA) (Beta).rom",
    ];
    let config = usa_europe();
    let forward: Vec<String> = rank_entries(names.iter().map(|n| entry(n)).collect(), &config)
        .into_iter()
        .map(|r| r.entry.file.filename)
        .collect();
    let backward: Vec<String> =
        rank_entries(names.iter().rev().map(|n| entry(n)).collect(), &config)
            .into_iter()
            .map(|r| r.entry.file.filename)
            .collect();
    assert_eq!(forward, backward);
}

#[test]
fn test_deciding_factor_names_the_first_difference() {
    let config = usa_europe();
    let ranked = rank_entries(
        vec![entry("Game (USA).rom"), entry("Game (Europe).rom")],
        &config,
    );
    assert_eq!(deciding_factor(&ranked[0], &ranked[1], &config), RankFactor::Region);

    let ranked = rank_entries(
        vec![entry("Game (USA).rom"), entry("Game (USA) (Rev 1).rom")],
        &config,
    );
    assert_eq!(deciding_factor(&ranked[0], &ranked[1], &config), RankFactor::Revision);
}

#[test]
fn test_factor_order_follows_bad_dump_toggle() {
    let on = RankingConfig::default().factors();
    assert_eq!(on[0], RankFactor::DumpQuality);

    let off = RankingConfig {
        deprioritize_bad_dumps: false,
        ..Default::default()
    }
    .factors();
    assert_eq!(
        &off[..4],
        &[
            RankFactor::Region,
            RankFactor::Language,
            RankFactor::PreferredToken,
            RankFactor::DumpQuality
        ]
    );
    assert_eq!(off.last(), Some(&RankFactor::Path));
}

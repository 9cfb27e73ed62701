use super::*;

#[test]
fn test_simple_usa_game() {
    let t = parse_tags("Super Mario Bros. (USA).nes");
    assert_eq!(t.regions, BTreeSet::from([Region::Usa]));
    assert!(t.languages.is_empty());
    assert!(t.dump_flags.is_empty());
    assert_eq!(t.revision, None);
    assert_eq!(t.quality(), DumpQuality::Unverified);
    assert!(t.unrecognized.is_empty());
}

#[test]
fn test_multi_region_and_languages() {
    let t = parse_tags("Tetris (USA, Europe) (En,Fr,De).gb");
    assert_eq!(t.regions, BTreeSet::from([Region::Usa, Region::Europe]));
    assert_eq!(
        t.languages,
        BTreeSet::from([Language::English, Language::French, Language::German])
    );
}

#[test]
fn test_single_language_code() {
    let t = parse_tags("Game (Europe) (Fr).sfc");
    assert_eq!(t.languages, BTreeSet::from([Language::French]));
}

#[test]
fn test_goodtools_region_codes() {
    let t = parse_tags("Sonic the Hedgehog (JUE) [!].md");
    assert_eq!(
        t.regions,
        BTreeSet::from([Region::Japan, Region::Usa, Region::Europe])
    );
    assert_eq!(t.quality(), DumpQuality::Verified);

    let t = parse_tags("Game (E).gg");
    assert_eq!(t.regions, BTreeSet::from([Region::Europe]));
}

#[test]
fn test_numeric_and_letter_revisions() {
    assert_eq!(parse_tags("Game (USA) (Rev 1).rom").revision, Some(1));
    assert_eq!(parse_tags("Game (USA) (Rev 2).rom").revision, Some(2));
    assert_eq!(parse_tags("Game (USA) (Rev A).rom").revision, Some(1));
    assert_eq!(parse_tags("Game (USA) (Rev B).rom").revision, Some(2));
    assert_eq!(parse_tags("Game (U) (REV01).rom").revision, Some(1));
    assert_eq!(parse_tags("Game (U) (PRG1).nes").revision, Some(1));
    assert_eq!(parse_tags("Game (USA) (Rev 1.1).rom").revision, Some(1));
}

#[test]
fn test_missing_revision_is_none() {
    assert_eq!(parse_tags("Game (USA).rom").revision, None);
    assert!(parse_tags("Game (USA) (Rev 0).rom").revision > None);
}

#[test]
fn test_malformed_revision_is_unrecognized() {
    let t = parse_tags("Game (USA) (Rev ?).rom");
    assert_eq!(t.revision, None);
    assert_eq!(t.unrecognized, vec!["(Rev ?)"]);
}

#[test]
fn test_version_tags() {
    let t = parse_tags("Game (USA) (v1.1).rom");
    assert_eq!(t.version, Some(Version(vec![1, 1])));
    let t = parse_tags("Game (U) (V1.02a).rom");
    assert_eq!(t.version, Some(Version(vec![1, 2])));
    assert!(Version(vec![1, 1]) > Version(vec![1, 0]));
    assert!(Version(vec![2]) > Version(vec![1, 9]));
}

#[test]
fn test_bad_dump_and_overdump() {
    let t = parse_tags("Game (Japan) [b].rom");
    assert!(t.dump_flags.contains(&DumpFlag::BadDump));
    assert_eq!(t.quality(), DumpQuality::Bad);

    let t = parse_tags("Game (Japan) [b2].rom");
    assert_eq!(t.quality(), DumpQuality::Bad);

    let t = parse_tags("Game (Japan) [o1].rom");
    assert!(t.dump_flags.contains(&DumpFlag::Overdump));
    assert_eq!(t.quality(), DumpQuality::Unverified);

    let t = parse_tags("Game (Japan) [x].rom");
    assert_eq!(t.quality(), DumpQuality::Bad);
}

#[test]
fn test_bad_flag_wins_over_verified_flag() {
    let t = parse_tags("Game (USA) [!] [b1].rom");
    assert_eq!(t.quality(), DumpQuality::Bad);
}

#[test]
fn test_goodtools_misc_flags() {
    let t = parse_tags("Game (U) [h1C] [t1] [a2] [f1] [p1] [T+Eng].rom");
    for flag in [
        DumpFlag::Hack,
        DumpFlag::Trainer,
        DumpFlag::Alternate,
        DumpFlag::Fixed,
        DumpFlag::Pirate,
        DumpFlag::Translation,
    ] {
        assert!(t.dump_flags.contains(&flag), "missing {flag:?}");
    }
    assert_eq!(t.quality(), DumpQuality::Unverified);
}

#[test]
fn test_goodtools_language_count() {
    let t = parse_tags("Sonic (E) (M3) [!].smd");
    assert_eq!(t.language_count, Some(3));
    assert_eq!(t.regions, BTreeSet::from([Region::Europe]));
    assert!(t.unrecognized.is_empty());
    assert!(t.summary().contains("M3"));

    // Lower-case or non-numeric forms are not counts
    assert_eq!(parse_tags("Game (m3).smd").language_count, None);
    assert_eq!(parse_tags("Game (MX).smd").language_count, None);
}

#[test]
fn test_release_flags() {
    let t = parse_tags("Unreleased Game (USA) (Proto 2).rom");
    assert!(t.release_flags.contains(&ReleaseFlag::Prototype));
    assert!(t.is_prerelease());

    let t = parse_tags("Tengen Tetris (USA) (Unl).nes");
    assert!(t.release_flags.contains(&ReleaseFlag::Unlicensed));
    assert!(!t.is_prerelease());

    let t = parse_tags("[BIOS] PlayStation (Japan) (v1.0).bin");
    assert!(t.release_flags.contains(&ReleaseFlag::Bios));
}

#[test]
fn test_unknown_segments_are_kept_not_fatal() {
    let t = parse_tags("Final Fantasy VII (USA) (Disc 1) [cr Team].bin");
    assert_eq!(t.regions, BTreeSet::from([Region::Usa]));
    assert_eq!(t.unrecognized, vec!["(Disc 1)", "[cr Team]"]);
}

#[test]
fn test_unclosed_brackets_never_fail() {
    let t = parse_tags("Game (USA) [b.rom");
    assert_eq!(t.regions, BTreeSet::from([Region::Usa]));
    assert!(t.dump_flags.is_empty());
}

#[test]
fn test_no_tags_at_all() {
    let t = parse_tags("homebrew.bin");
    assert_eq!(t, Tags::default());
    assert_eq!(t.summary(), "no tags");
}

#[test]
fn test_effective_languages_from_region() {
    let t = parse_tags("Game (USA).rom");
    assert_eq!(t.effective_languages(), BTreeSet::from([Language::English]));

    let t = parse_tags("Game (Europe).rom");
    assert!(t.effective_languages().is_empty());

    // An explicit list always wins over the region's implied language
    let t = parse_tags("Game (Japan) (En).rom");
    assert_eq!(t.effective_languages(), BTreeSet::from([Language::English]));
}

#[test]
fn test_summary_lists_all_categories() {
    let t = parse_tags("Game (USA, Europe) (En,Fr) (Rev 1) (Beta) [!].rom");
    assert_eq!(t.summary(), "USA, Europe | En,Fr | Rev 1 | Beta | [!]");
}

#[test]
fn test_classify_group_vocabulary() {
    assert_eq!(
        classify_group('(', "USA"),
        Some(TagToken::Regions(vec![Region::Usa]))
    );
    assert_eq!(classify_group('[', "!"), Some(TagToken::Dump(DumpFlag::Verified)));
    assert_eq!(classify_group('(', "Rev 3"), Some(TagToken::Revision(3)));
    assert_eq!(classify_group('(', "Disc 1"), None);
    assert_eq!(classify_group('(', "  "), None);
    // Dump codes are only read from square brackets
    assert_eq!(classify_group('(', "b"), None);
}

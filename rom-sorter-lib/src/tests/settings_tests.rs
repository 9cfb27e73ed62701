use super::*;

#[test]
fn test_defaults_match_first_run_file() {
    let s = Settings::default();
    assert_eq!(s.source_dir, PathBuf::from("./roms"));
    assert_eq!(s.preferred_tokens, vec!["[!]".to_string()]);
    assert!(s.deprioritize_bad_dumps);
    assert!(!s.penalize_prerelease);
    assert!(s.group_by_extension);
    assert!(!s.dry_run);
    assert_eq!(s.log_level_filter().unwrap(), LevelFilter::Info);
}

#[test]
fn test_partial_yaml_fills_in_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(
        &path,
        "source_dir: /mnt/roms\nregion_preference: [Europe, USA]\ndeprioritize_bad_dumps: false\n",
    )
    .unwrap();

    let s = Settings::load(&path).unwrap();
    assert_eq!(s.source_dir, PathBuf::from("/mnt/roms"));
    assert_eq!(s.region_preference, vec![Region::Europe, Region::Usa]);
    assert!(!s.deprioritize_bad_dumps);
    assert_eq!(s.archive_dir, PathBuf::from("./archive"));

    let ranking = s.ranking_config();
    assert_eq!(ranking.regions, vec![Region::Europe, Region::Usa]);
    assert!(!ranking.deprioritize_bad_dumps);
}

#[test]
fn test_toml_settings_are_supported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "language_preference = [\"Fr\", \"English\"]\ngroup_by_extension = false\n",
    )
    .unwrap();

    let s = Settings::load(&path).unwrap();
    assert_eq!(s.language_preference, vec![Language::French, Language::English]);
    assert!(!s.grouping_options().by_extension);
}

#[test]
fn test_unknown_region_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "region_preference: [Atlantis]\n").unwrap();
    let err = Settings::load(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Yaml { .. }), "{err}");
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "log_level: loud\n").unwrap();
    let err = Settings::load(&path).unwrap_err();
    assert!(matches!(err, SettingsError::InvalidLogLevel(_)));
}

#[test]
fn test_unsupported_extension() {
    let err = Settings::default()
        .to_string_for(Path::new("settings.ini"))
        .unwrap_err();
    assert!(matches!(err, SettingsError::UnsupportedFormat(_)));
}

#[test]
fn test_save_and_reload_both_formats() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = Settings::default();
    settings.log_file = Some(PathBuf::from("sort.log"));
    settings.region_preference = vec![Region::Japan];

    for name in ["nested/config.yaml", "nested/config.toml"] {
        let path = dir.path().join(name);
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings, "{name}");
    }
}

#[test]
fn test_load_or_create_writes_defaults_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rom-sorter").join("config.yaml");

    let (settings, created) = load_or_create(&path).unwrap();
    assert!(created);
    assert!(path.exists());
    assert_eq!(settings, Settings::default());

    let (_, created) = load_or_create(&path).unwrap();
    assert!(!created);
}

#[test]
fn test_resolution_prefers_override_then_local_file() {
    let dir = tempfile::tempdir().unwrap();
    let explicit = dir.path().join("mine.toml");

    assert_eq!(
        resolve_settings_path(Some(&explicit), dir.path()),
        explicit
    );
    assert_eq!(resolve_settings_path(None, dir.path()), default_settings_path());

    let local = dir.path().join(LOCAL_SETTINGS_FILE);
    std::fs::write(&local, "").unwrap();
    assert_eq!(resolve_settings_path(None, dir.path()), local);
    assert_eq!(Settings::load(&local).unwrap(), Settings::default());
}

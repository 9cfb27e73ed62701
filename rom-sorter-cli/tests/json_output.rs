use std::fs;
use std::process::Command;

#[test]
fn test_sort_json_stdout_is_a_single_document() {
    let dir = tempfile::tempdir().unwrap();
    let roms = dir.path().join("roms");
    fs::create_dir_all(&roms).unwrap();
    for name in ["Game (USA).sfc", "Game (Europe).sfc", "Other (Japan).sfc"] {
        fs::write(roms.join(name), b"rom").unwrap();
    }

    // No settings file yet, so the first-run warning is logged too
    let output = Command::new(env!("CARGO_BIN_EXE_rom-sorter"))
        .arg("--config")
        .arg(dir.path().join("c.yaml"))
        .args(["sort", "--json", "--dry-run", "--source"])
        .arg(&roms)
        .arg("--destination")
        .arg(dir.path().join("sorted"))
        .arg("--archive")
        .arg(dir.path().join("archive"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["mode"], "dry_run");
    assert_eq!(report["decisions"].as_array().unwrap().len(), 2);
    assert_eq!(report["moves"].as_array().unwrap().len(), 3);

    let log = String::from_utf8_lossy(&output.stderr);
    assert!(log.contains("Scanning ROMs in"), "{log}");
    assert!(!dir.path().join("sorted").exists());
}

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Runs the binary against an empty config home so user settings never leak in.
fn quadboard_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("quadboard").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

#[test]
fn quadboard_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    quadboard_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Two-stage 9x9 zoom-grid virtual keyboard",
        ));
}

#[test]
fn no_flags_lists_modes() {
    let temp = TempDir::new().unwrap();
    quadboard_cmd(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("change-mode-menu"))
        .stdout(predicate::str::contains("tap <x1> <y1> <x2> <y2>"));
}

#[test]
fn dump_layout_prints_numeric_page() {
    let temp = TempDir::new().unwrap();
    quadboard_cmd(&temp)
        .args(["--dump-layout", "numeric"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("numeric (123)"))
        .stdout(predicate::str::contains("9"));
}

#[test]
fn invalid_mode_is_rejected() {
    let temp = TempDir::new().unwrap();
    quadboard_cmd(&temp)
        .args(["--dump-layout", "klingon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown keyboard mode 'klingon'"));
}

#[test]
fn script_from_stdin_prints_transcript() {
    let temp = TempDir::new().unwrap();
    quadboard_cmd(&temp)
        .args(["--script", "-"])
        .write_stdin("rect 0 0 900 900\ntap 50 50 50 50\ntap 400 400 400 100\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("text \"t\""))
        .stdout(predicate::str::contains("key 66 0x0000 down"))
        .stdout(predicate::str::contains("committed: \"t\""))
        .stdout(predicate::str::contains("mode: letters"));
}

#[test]
fn script_file_uses_mode_and_rect_overrides() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("numbers.script");
    // Top-left zone, bottom-right cell of a 300x300 surface at (100, 100)
    std::fs::write(&script, "tap 110 110 390 390\n").unwrap();

    quadboard_cmd(&temp)
        .args(["--mode", "numeric", "--rect", "100,100,300,300", "--script"])
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("committed: \"9\""))
        .stdout(predicate::str::contains("mode: numeric"));
}

#[test]
fn config_initial_mode_is_applied() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("quadboard");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[keyboard]\ninitial_mode = \"caps-locked\"\n",
    )
    .unwrap();

    quadboard_cmd(&temp)
        .args(["--script", "-"])
        .write_stdin("rect 0 0 900 900\ntap 50 50 50 50\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("committed: \"T\""))
        .stdout(predicate::str::contains("mode: caps-locked"));
}

#[test]
fn malformed_script_fails_with_line_number() {
    let temp = TempDir::new().unwrap();
    quadboard_cmd(&temp)
        .args(["--script", "-"])
        .write_stdin("rect 0 0 900 900\ndown 0 1 2\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2: 'down' takes 4 arguments, got 3"));
}

#[test]
fn degenerate_rect_is_rejected() {
    let temp = TempDir::new().unwrap();
    quadboard_cmd(&temp)
        .args(["--rect", "0,0,0,900", "--script", "-"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must have a positive size"));
}

#[test]
fn init_config_writes_example_once() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("quadboard").join("config.toml");

    quadboard_cmd(&temp)
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote config to"));
    let written = std::fs::read_to_string(&config_path).unwrap();
    assert!(written.starts_with("# quadboard configuration"));

    quadboard_cmd(&temp)
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file already exists"));
}

#[test]
fn init_config_saves_overrides_for_later_runs() {
    let temp = TempDir::new().unwrap();

    quadboard_cmd(&temp)
        .args(["--init-config", "--mode", "numeric", "--rect", "100,100,300,300"])
        .assert()
        .success();
    let written =
        std::fs::read_to_string(temp.path().join("quadboard").join("config.toml")).unwrap();
    assert!(written.contains("initial_mode = \"numeric\""));
    assert!(written.contains("width = 300"));

    quadboard_cmd(&temp)
        .args(["--script", "-"])
        .write_stdin("tap 110 110 390 390\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("committed: \"9\""));
}

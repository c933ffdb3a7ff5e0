use std::fs;
use std::process::Command;

use serde_json::Value;
use tempfile::tempdir;

#[test]
fn bare_run_writes_default_artifact_and_summary() {
    let tmp = tempdir().expect("tempdir");

    let output = Command::new(env!("CARGO_BIN_EXE_fontpair"))
        .current_dir(tmp.path())
        .output()
        .expect("run fontpair");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("google_fonts_db.json"), "stdout:\n{stdout}");
    assert!(stdout.contains("Total pairings: 24"), "stdout:\n{stdout}");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("building font database"), "stderr:\n{stderr}");
    assert!(!stdout.contains("building font database"), "stdout:\n{stdout}");

    let text = fs::read_to_string(tmp.path().join("google_fonts_db.json")).expect("artifact");
    let parsed: Value = serde_json::from_str(&text).expect("parse artifact");
    assert_eq!(parsed["version"], "1.0");
    assert_eq!(parsed["last_updated"], "2024-10-31");
    assert_eq!(parsed["curated_fonts"].as_object().map(|o| o.len()), Some(5));
    assert_eq!(parsed["genre_pairings"].as_object().map(|o| o.len()), Some(8));
    assert_eq!(parsed["font_metadata"]["Roboto Mono"]["category"], "monospace");
}

#[test]
fn repeated_runs_produce_identical_bytes() {
    let tmp = tempdir().expect("tempdir");
    let first = tmp.path().join("first.json");
    let second = tmp.path().join("second.json");

    for path in [&first, &second] {
        let status = Command::new(env!("CARGO_BIN_EXE_fontpair"))
            .args(["build", "--output"])
            .arg(path)
            .status()
            .expect("run fontpair");
        assert!(status.success());
    }

    let a = fs::read(&first).expect("first");
    let b = fs::read(&second).expect("second");
    assert_eq!(a, b);
}

#[test]
fn unwritable_output_exits_non_zero_with_error() {
    let tmp = tempdir().expect("tempdir");
    let target = tmp.path().join("no-such-dir").join("db.json");

    let output = Command::new(env!("CARGO_BIN_EXE_fontpair"))
        .args(["build", "--output"])
        .arg(&target)
        .output()
        .expect("run fontpair");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"), "stderr:\n{stderr}");
    assert!(stderr.contains("failed to create font database"), "stderr:\n{stderr}");
    assert!(output.stdout.is_empty());
    assert!(!target.exists());
}

#[test]
fn fonts_ndjson_lists_one_font_per_line() {
    let output = Command::new(env!("CARGO_BIN_EXE_fontpair"))
        .args(["fonts", "--category", "monospace", "--ndjson"])
        .output()
        .expect("run fontpair");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 10);
    let first: Value = serde_json::from_str(lines[0]).expect("json line");
    assert_eq!(first["name"], "Fira Code");
    assert_eq!(first["google_fonts"], true);
}

#[test]
fn classify_command_reports_slab_as_sans_serif() {
    let output = Command::new(env!("CARGO_BIN_EXE_fontpair"))
        .args(["classify", "Roboto Slab", "JetBrains Mono"])
        .output()
        .expect("run fontpair");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "Roboto Slab\tsans-serif\nJetBrains Mono\tmonospace\n");
}

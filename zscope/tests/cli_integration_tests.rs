// zscope/tests/cli_integration_tests.rs
//! End-to-end tests for the `zscope` binary's headless subcommands.
//!
//! Every command runs inside a scratch directory with `HOME` and
//! `XDG_CONFIG_HOME` pointed at it, so a real user configuration never leaks
//! into the results. stdout is not a terminal under `assert_cmd`, so output is
//! uncoloured.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SKEWED_JSON: &str = r#"[
  {"label": "A", "value": 10},
  {"label": "B", "value": 10},
  {"label": "C", "value": 10},
  {"label": "D", "value": 100}
]"#;

fn zscope(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("zscope"));
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("ZSCOPE_THRESHOLD")
        .env_remove("RUST_LOG");
    cmd
}

fn write_input(dir: &TempDir, name: &str, contents: &str) -> Result<String> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path.display().to_string())
}

#[test]
fn analyze_reports_single_outlier() -> Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "samples.json", SKEWED_JSON)?;

    zscope(dir.path())
        .args(["analyze", "--input", &input])
        .assert()
        .success()
        .stdout(predicate::str::contains("Outlier"))
        .stdout(predicate::str::contains("32.50"))
        .stdout(predicate::str::contains("45.00"))
        .stdout(predicate::str::contains("1 (25.0%)"))
        .stdout(predicate::str::contains("100 - 100"))
        .stdout(predicate::str::contains(
            "Values with |z-score| greater than 1 are marked as outliers",
        ));
    Ok(())
}

#[test]
fn analyze_reads_csv_with_header() -> Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "samples.csv", "label,value\nA,10\nB,10\nC,10\nD,100\n")?;

    zscope(dir.path())
        .args(["analyze", "--input", &input])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 (25.0%)"));
    Ok(())
}

#[test]
fn analyze_json_output() -> Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "samples.json", SKEWED_JSON)?;

    let output = zscope(dir.path())
        .args(["analyze", "--input", &input, "--json"])
        .output()?;
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["outliers"]["count"], 1);
    assert_eq!(report["outliers"]["percentage"], 25.0);
    assert_eq!(report["threshold"], 1.0);
    let flagged: Vec<&str> = report["results"]
        .as_array()
        .map(|rows| {
            rows.iter()
                .filter(|r| r["is_outlier"] == true)
                .filter_map(|r| r["label"].as_str())
                .collect()
        })
        .unwrap_or_default();
    assert_eq!(flagged, vec!["D"]);
    Ok(())
}

#[test]
fn identical_values_have_no_outliers() -> Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "flat.csv", "A,5\nB,5\nC,5\n")?;

    zscope(dir.path())
        .args(["analyze", "--input", &input])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 (0.0%)"))
        .stdout(predicate::str::contains("Range:").not());
    Ok(())
}

#[test]
fn threshold_flag_and_env_override_default() -> Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "samples.json", SKEWED_JSON)?;

    zscope(dir.path())
        .args(["analyze", "--input", &input, "--threshold", "0.4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 (100.0%)"));

    zscope(dir.path())
        .env("ZSCOPE_THRESHOLD", "2")
        .args(["analyze", "--input", &input])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 (0.0%)"));
    Ok(())
}

#[test]
fn invalid_threshold_is_rejected() -> Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "samples.json", SKEWED_JSON)?;

    zscope(dir.path())
        .args(["analyze", "--input", &input, "--threshold", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid z-score threshold"));
    Ok(())
}

#[test]
fn single_sample_fails() -> Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "one.json", r#"[{"label": "A", "value": 1}]"#)?;

    zscope(dir.path())
        .args(["analyze", "--input", &input])
        .assert()
        .failure()
        .stderr(predicate::str::contains("At least 2 samples"));
    Ok(())
}

#[test]
fn duplicate_labels_fail() -> Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "dupes.csv", "A,1\nA,2\nB,3\n")?;

    zscope(dir.path())
        .args(["analyze", "--input", &input])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate sample label 'A'"));
    Ok(())
}

#[test]
fn config_file_threshold_is_used() -> Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "samples.json", SKEWED_JSON)?;
    let config = write_input(&dir, "custom.yaml", "threshold: 2.0\n")?;

    zscope(dir.path())
        .args(["--config", &config, "analyze", "--input", &input])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 (0.0%)"))
        .stdout(predicate::str::contains("greater than 2 are marked"));

    // The flag still wins over the file.
    zscope(dir.path())
        .args(["--config", &config, "analyze", "--input", &input, "-t", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 (25.0%)"));
    Ok(())
}

#[test]
fn generate_is_deterministic_with_seed() -> Result<()> {
    let dir = TempDir::new()?;

    let first = zscope(dir.path()).args(["generate", "--seed", "7"]).output()?;
    let second = zscope(dir.path()).args(["generate", "--seed", "7"]).output()?;
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let samples: serde_json::Value = serde_json::from_slice(&first.stdout)?;
    let rows = samples.as_array().cloned().unwrap_or_default();
    assert_eq!(rows.len(), 26);
    assert_eq!(rows[0]["label"], "A");
    assert!(rows.iter().all(|r| {
        let v = r["value"].as_f64().unwrap_or(-1.0);
        (1.0..=100.0).contains(&v)
    }));
    Ok(())
}

#[test]
fn generate_writes_output_file_for_analyze() -> Result<()> {
    let dir = TempDir::new()?;
    let out = dir.path().join("generated.json");
    let out_arg = out.display().to_string();

    zscope(dir.path())
        .args(["generate", "--seed", "11", "--output", &out_arg])
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote 26 samples"));
    assert!(out.is_file());

    zscope(dir.path())
        .args(["analyze", "--input", &out_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("Basic statistics"));
    Ok(())
}

#[test]
fn missing_theme_file_fails() -> Result<()> {
    let dir = TempDir::new()?;
    let input = write_input(&dir, "samples.json", SKEWED_JSON)?;

    zscope(dir.path())
        .args(["--theme", "does-not-exist.yaml", "analyze", "--input", &input])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read theme file"));
    Ok(())
}

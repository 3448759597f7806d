//! End-to-end tests for test preparation
//!
//! Covers the full artifact set written by a run and the CLI's exit codes.

use chrono::NaiveDate;
use openbench_prep::{
    ClientProbe, Error, OpenBenchRunner, RunStamp, RunnerParameters, TestConfig,
};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn fake_engine(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }
    path
}

fn stamp(second: u32) -> RunStamp {
    let time = NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(12, 30, second)
        .unwrap();
    RunStamp::at(time)
}

fn params(dir: &TempDir) -> RunnerParameters {
    RunnerParameters {
        output_dir: dir.path().join("tournaments"),
        config_file: dir.path().join("openbench.conf"),
        ..RunnerParameters::new(
            fake_engine(dir.path(), "baseline"),
            fake_engine(dir.path(), "candidate"),
        )
    }
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

// =============================================================================
// Library pipeline
// =============================================================================

#[test]
fn test_prepare_writes_all_artifacts_with_one_suffix() {
    let dir = TempDir::new().unwrap();
    let params = params(&dir);
    let runner = OpenBenchRunner::with_stamp(params.clone(), stamp(45)).unwrap();

    assert_eq!(runner.stamp(), stamp(45));
    assert!(runner.bounds().is_default());
    assert!(runner.verify_engines());
    assert!(!runner.check_config());

    let artifacts = runner.prepare().unwrap();
    assert_eq!(artifacts.test_id, "test_20240501_123045");
    assert_eq!(
        file_names(&params.output_dir),
        vec![
            "local_test_20240501_123045.sh",
            "openbench_submission_20240501_123045.md",
            "test_config_20240501_123045.json",
        ]
    );

    let config = TestConfig::load(&artifacts.config_file).unwrap();
    assert_eq!(config.test_settings.max_games, params.games);
    assert_eq!(config.baseline.source, params.baseline);
    assert_eq!(config.candidate.source, params.candidate);

    let report = fs::read_to_string(&artifacts.report_file).unwrap();
    assert!(report.contains(&artifacts.config_file.display().to_string()));
    assert!(report.contains(&artifacts.script_path.display().to_string()));
    assert!(report.contains(&artifacts.report_file.display().to_string()));

    let script = fs::read_to_string(&artifacts.script_path).unwrap();
    assert!(script.contains("tc=10.0+0.1"));
    assert!(script.contains("-rounds 10000"));
}

#[test]
fn test_runs_a_second_apart_do_not_collide() {
    let dir = TempDir::new().unwrap();
    let params = params(&dir);

    let first = OpenBenchRunner::with_stamp(params.clone(), stamp(1))
        .unwrap()
        .prepare()
        .unwrap();
    let second = OpenBenchRunner::with_stamp(params.clone(), stamp(2))
        .unwrap()
        .prepare()
        .unwrap();

    assert_ne!(first.config_file, second.config_file);
    assert_ne!(first.script_path, second.script_path);
    assert_ne!(first.report_file, second.report_file);
    assert_eq!(file_names(&params.output_dir).len(), 6);
}

#[test]
fn test_malformed_bounds_write_nothing() {
    let dir = TempDir::new().unwrap();
    let params = RunnerParameters {
        sprt_bounds: "[-3.0 1.0]".to_string(),
        ..params(&dir)
    };

    let result = OpenBenchRunner::new(params.clone());
    assert!(matches!(result, Err(Error::InvalidBounds { .. })));
    assert!(!params.output_dir.exists());
}

fn runner_without_client(dir: &TempDir) -> OpenBenchRunner {
    let probe = ClientProbe::from_command_line("definitely-not-a-real-command-4242").unwrap();
    OpenBenchRunner::with_stamp(params(dir), stamp(0))
        .unwrap()
        .with_probe(probe)
}

#[test]
fn test_missing_client_declined() {
    let dir = TempDir::new().unwrap();
    let runner = runner_without_client(&dir);

    let mut output = Vec::new();
    let result = runner.ensure_client(false, &mut Cursor::new("n\n".as_bytes()), &mut output);
    assert!(matches!(result, Err(Error::Declined)));
    assert!(String::from_utf8(output).unwrap().contains("Continue? (y/n): "));
}

#[test]
fn test_missing_client_accepted_or_skipped() {
    let dir = TempDir::new().unwrap();
    let runner = runner_without_client(&dir);

    let mut output = Vec::new();
    let accepted = runner.ensure_client(false, &mut Cursor::new("y\n".as_bytes()), &mut output);
    assert!(matches!(accepted, Ok(false)));

    // --yes never reads input or prints the prompt
    let mut silent = Vec::new();
    let skipped = runner.ensure_client(true, &mut Cursor::new("".as_bytes()), &mut silent);
    assert!(matches!(skipped, Ok(false)));
    assert!(silent.is_empty());
}

#[cfg(unix)]
#[test]
fn test_client_found_skips_prompt() {
    let dir = TempDir::new().unwrap();
    let runner = OpenBenchRunner::with_stamp(params(&dir), stamp(0))
        .unwrap()
        .with_probe(ClientProbe::from_command_line("echo OpenBench Client").unwrap());

    let mut output = Vec::new();
    let found = runner.ensure_client(false, &mut Cursor::new("".as_bytes()), &mut output);
    assert!(matches!(found, Ok(true)));
    assert!(output.is_empty());
}

// =============================================================================
// CLI
// =============================================================================

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_openbench-prep"))
}

#[cfg(unix)]
#[test]
fn test_cli_success() {
    let dir = TempDir::new().unwrap();
    let params = params(&dir);

    let output = cli()
        .arg("--baseline")
        .arg(&params.baseline)
        .arg("--candidate")
        .arg(&params.candidate)
        .arg("--output-dir")
        .arg(&params.output_dir)
        .arg("--config")
        .arg(&params.config_file)
        .args(["--games", "20001", "--client-command", "echo OpenBench Client"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓ OpenBench client found"));
    assert!(stdout.contains("✗ OpenBench config file not found"));
    assert!(stdout.contains("Pass: ~5,000-15,000 games"));
    assert!(stdout.contains("✓ OpenBench test preparation completed!"));

    let names = file_names(&params.output_dir);
    assert_eq!(names.len(), 3);
    let script_name = names.iter().find(|n| n.ends_with(".sh")).unwrap();
    let script = fs::read_to_string(params.output_dir.join(script_name)).unwrap();
    assert!(script.contains("-rounds 10000"));
}

#[test]
fn test_cli_missing_engine_exits_with_one() {
    let dir = TempDir::new().unwrap();
    let output = cli()
        .arg("--baseline")
        .arg(dir.path().join("missing-baseline"))
        .arg("--candidate")
        .arg(dir.path().join("missing-candidate"))
        .arg("--output-dir")
        .arg(dir.path().join("out"))
        .arg("--yes")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✗ Baseline engine not found"));
}

#[test]
fn test_cli_declining_exits_with_one() {
    let dir = TempDir::new().unwrap();
    let params = params(&dir);
    let output = cli()
        .arg("--baseline")
        .arg(&params.baseline)
        .arg("--candidate")
        .arg(&params.candidate)
        .arg("--output-dir")
        .arg(&params.output_dir)
        .args(["--client-command", "definitely-not-a-real-command-4242"])
        .stdin(std::process::Stdio::null())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Continue? (y/n): "));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("aborted: OpenBench client not available"));
    assert!(file_names(&params.output_dir).is_empty());
}

#[test]
fn test_cli_malformed_bounds_exits_with_one() {
    let dir = TempDir::new().unwrap();
    let params = params(&dir);
    let output = cli()
        .arg("--baseline")
        .arg(&params.baseline)
        .arg("--candidate")
        .arg(&params.candidate)
        .arg("--output-dir")
        .arg(&params.output_dir)
        .args(["--sprt-bounds", "[abc]", "--yes"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid SPRT bounds"));
}

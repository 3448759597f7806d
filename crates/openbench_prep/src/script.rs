//! Local fallback script for cutechess-cli

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::params::RunnerParameters;
use crate::stamp::RunStamp;

/// Convert an OpenBench time control to cutechess-cli's `tc=` form.
///
/// `base+inc` is rebuilt from its two parts; anything else (a bare base
/// time, moves/time forms) is passed through as is.
pub fn cutechess_time_control(time_control: &str) -> String {
    match time_control.split('+').collect::<Vec<_>>().as_slice() {
        [base, increment] => format!("{}+{}", base, increment),
        _ => time_control.to_string(),
    }
}

/// Rounds for cutechess-cli: each round is a game pair, so half the games
pub fn rounds_for(games: u32) -> u32 {
    games / 2
}

/// Fill in the script template.
///
/// Paths are double-quoted so directories with spaces survive the shell.
/// The script is not validated; with fewer than two games it asks
/// cutechess-cli for zero rounds.
pub fn render_local_test_script(params: &RunnerParameters, pgn_path: &Path) -> String {
    let pgn = pgn_path.display();
    format!(
        r#"#!/bin/bash
# Local testing script generated from OpenBench configuration
# This provides a fallback for testing engines locally

echo "Running local SPRT simulation..."
echo "This is not a true SPRT test but provides basic comparison"

cutechess-cli \
    -engine name=Baseline cmd="{baseline}" \
    -engine name=Candidate cmd="{candidate}" \
    -each tc={tc} proto=uci \
    -rounds {rounds} \
    -games 2 \
    -pgnout "{pgn}" \
    -repeat 2

echo "Local test completed. Check \"{pgn}\" for games."
"#,
        baseline = params.baseline.display(),
        candidate = params.candidate.display(),
        tc = cutechess_time_control(&params.time_control),
        rounds = rounds_for(params.games),
        pgn = pgn,
    )
}

/// Write `local_test_<ts>.sh` into the output directory and mark it
/// executable. Games are written to `local_test_<ts>.pgn` next to it.
pub fn write_local_test_script(params: &RunnerParameters, stamp: &RunStamp) -> Result<PathBuf> {
    let script_path = stamp.artifact_path(&params.output_dir, "local_test", "sh");
    let pgn_path = stamp.artifact_path(&params.output_dir, "local_test", "pgn");

    let content = render_local_test_script(params, &pgn_path);
    std::fs::write(&script_path, content).map_err(|e| Error::io(&script_path, e))?;
    make_executable(&script_path).map_err(|e| Error::io(&script_path, e))?;
    debug!(path = %script_path.display(), "wrote local test script");

    println!("✓ Local test script created: {}", script_path.display());
    println!("  Run this script if you want to test locally instead of using OpenBench");
    Ok(script_path)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
#[path = "script_tests.rs"]
mod script_tests;

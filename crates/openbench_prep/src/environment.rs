//! Environment checks run before anything is generated
//!
//! Only a missing or non-executable engine is fatal. A missing OpenBench
//! client or client config produces guidance and leaves the decision to
//! the operator.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{Error, Result};

/// Text the OpenBench client prints when invoked without arguments
pub const CLIENT_MARKER: &str = "OpenBench Client";

/// Example client configuration printed when none is found
pub const CONFIG_TEMPLATE: &str = "
[SERVER]
server   = http://chess.grantnet.us/  # Or your private instance
username = your_username
password = your_password

[CLIENT]
threads = 1
";

/// Detects the OpenBench client by running it and looking for its banner
#[derive(Debug, Clone, PartialEq)]
pub struct ClientProbe {
    pub program: String,
    pub args: Vec<String>,
    pub marker: String,
}

impl Default for ClientProbe {
    fn default() -> Self {
        Self {
            program: "python".to_string(),
            args: vec!["-m".to_string(), "OpenBench".to_string()],
            marker: CLIENT_MARKER.to_string(),
        }
    }
}

impl ClientProbe {
    /// Build a probe from a whitespace-separated command line.
    ///
    /// Returns None for an empty command.
    pub fn from_command_line(command: &str) -> Option<Self> {
        let mut words = command.split_whitespace().map(str::to_string);
        let program = words.next()?;
        Some(Self {
            program,
            args: words.collect(),
            ..Default::default()
        })
    }

    /// Run the probe; true if the marker shows up on stdout or stderr.
    ///
    /// A command that cannot be spawned counts as "not found".
    pub fn is_available(&self) -> bool {
        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .output();

        match output {
            Ok(output) => {
                let stdout = String::from_utf8_lossy(&output.stdout);
                let stderr = String::from_utf8_lossy(&output.stderr);
                debug!(status = ?output.status, "client probe finished");
                stdout.contains(&self.marker) || stderr.contains(&self.marker)
            }
            Err(e) => {
                debug!(program = %self.program, error = %e, "client probe could not be spawned");
                false
            }
        }
    }
}

/// Check for the OpenBench client, printing the outcome
pub fn check_dependencies(probe: &ClientProbe) -> bool {
    if probe.is_available() {
        println!("✓ OpenBench client found");
        true
    } else {
        println!("✗ OpenBench client not found. Install with:");
        println!("  pip install OpenBench");
        false
    }
}

/// Ask whether to carry on without the client.
///
/// Only `y` (any case) continues; anything else, including end of input,
/// declines. Failing to write the prompt or read the answer is an error.
pub fn confirm_continue<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<bool> {
    writeln!(output, "\nWARNING: OpenBench client not found.")?;
    writeln!(output, "You can still generate local test scripts.")?;
    write!(output, "Continue? (y/n): ")?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Ok(false);
    }
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

/// Check that one engine exists as a regular file and is executable
pub fn check_engine(role: &'static str, path: &Path) -> Result<()> {
    let engine_error = |problem| Error::Engine {
        role,
        problem,
        path: path.to_path_buf(),
    };

    let metadata = match fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => metadata,
        _ => return Err(engine_error("not found")),
    };
    if !is_executable(&metadata) {
        return Err(engine_error("not executable"));
    }
    Ok(())
}

/// Verify both engines, stopping at the first failure
pub fn verify_engines(baseline: &Path, candidate: &Path) -> bool {
    for (role, path) in [("Baseline", baseline), ("Candidate", candidate)] {
        if let Err(e) = check_engine(role, path) {
            println!("✗ {}", e);
            return false;
        }
        println!("✓ {} engine found: {}", role, path.display());
    }
    true
}

/// Check that the OpenBench client config exists; warns only
pub fn check_config(config_file: &Path) -> bool {
    if !config_file.is_file() {
        println!("✗ OpenBench config file not found: {}", config_file.display());
        println!("Create a config file with your OpenBench server details:");
        println!("{}", CONFIG_TEMPLATE);
        return false;
    }
    println!("✓ OpenBench config found: {}", config_file.display());
    true
}

/// Any execute bit counts, whoever owns the file. This is looser than an
/// access(2) check for the current user: a `0o701` file owned by someone
/// else passes here even though its group may not run it.
#[cfg(unix)]
fn is_executable(metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_metadata: &fs::Metadata) -> bool {
    true
}

#[cfg(test)]
#[path = "environment_tests.rs"]
mod environment_tests;

//! Test configuration record and its JSON artifact

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::params::RunnerParameters;
use crate::stamp::RunStamp;

/// Author recorded on every generated test
pub const TEST_AUTHOR: &str = "automated_testing";
/// Protocol both engines speak
pub const ENGINE_PROTOCOL: &str = "uci";

/// Complete description of one SPRT test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestConfig {
    /// Unique name, `ELO_Test_<timestamp>`
    pub test_name: String,
    pub author: String,
    pub baseline: EngineEntry,
    pub candidate: EngineEntry,
    pub test_settings: TestSettings,
}

/// One side of the test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineEntry {
    pub name: String,
    /// Path to the engine executable, as given
    pub source: PathBuf,
    pub protocol: String,
}

/// Match conditions shared by both engines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestSettings {
    pub time_control: String,
    pub book: String,
    /// Bounds string as given, e.g. `[-3.0, 1.0]`
    pub sprt_bounds: String,
    pub max_games: u32,
}

impl TestConfig {
    pub fn new(params: &RunnerParameters, stamp: &RunStamp) -> Self {
        let suffix = stamp.suffix();
        let engine = |prefix: &str, source: &Path| EngineEntry {
            name: format!("{}_{}", prefix, suffix),
            source: source.to_path_buf(),
            protocol: ENGINE_PROTOCOL.to_string(),
        };

        Self {
            test_name: format!("ELO_Test_{}", suffix),
            author: TEST_AUTHOR.to_string(),
            baseline: engine("Baseline", params.baseline.as_path()),
            candidate: engine("Candidate", params.candidate.as_path()),
            test_settings: TestSettings {
                time_control: params.time_control.clone(),
                book: params.book.clone(),
                sprt_bounds: params.sprt_bounds.clone(),
                max_games: params.games,
            },
        }
    }

    /// Print the headline settings
    pub fn print_summary(&self) {
        let settings = &self.test_settings;
        println!("Creating SPRT test: {}", self.test_name);
        println!("Time Control: {}", settings.time_control);
        println!("SPRT Bounds: {}", settings.sprt_bounds);
        println!("Max Games: {}", settings.max_games);
        println!("Book: {}", settings.book);
    }

    /// Save to a JSON file (2-space indent)
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| Error::io(path, e))
    }

    /// Load from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Ok(serde_json::from_str(&contents)?)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

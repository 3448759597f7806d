//! Run parameters supplied on the command line

use std::path::PathBuf;

/// Default maximum number of games for the SPRT
pub const DEFAULT_GAMES: u32 = 20000;
/// Default time control (`base+increment`, seconds)
pub const DEFAULT_TIME_CONTROL: &str = "10.0+0.1";
/// Default SPRT Elo bounds
pub const DEFAULT_SPRT_BOUNDS: &str = "[-3.0, 1.0]";
/// Default opening book
pub const DEFAULT_BOOK: &str = "UHO_XXL_+0.90_+1.19.epd";
/// Default OpenBench client config file
pub const DEFAULT_CONFIG_FILE: &str = "openbench.conf";
/// Default directory for generated artifacts
pub const DEFAULT_OUTPUT_DIR: &str = "tournaments";

/// Everything a preparation run needs to know, read-only for the run
#[derive(Debug, Clone, PartialEq)]
pub struct RunnerParameters {
    /// Path to the baseline engine executable
    pub baseline: PathBuf,
    /// Path to the candidate engine executable
    pub candidate: PathBuf,
    /// Maximum number of games
    pub games: u32,
    /// Time control string, e.g. `10.0+0.1`
    pub time_control: String,
    /// SPRT bounds string, e.g. `[-3.0, 1.0]`
    pub sprt_bounds: String,
    /// Opening book file name
    pub book: String,
    /// OpenBench client config file
    pub config_file: PathBuf,
    /// Where generated files go
    pub output_dir: PathBuf,
}

impl Default for RunnerParameters {
    fn default() -> Self {
        Self {
            baseline: PathBuf::new(),
            candidate: PathBuf::new(),
            games: DEFAULT_GAMES,
            time_control: DEFAULT_TIME_CONTROL.to_string(),
            sprt_bounds: DEFAULT_SPRT_BOUNDS.to_string(),
            book: DEFAULT_BOOK.to_string(),
            config_file: PathBuf::from(DEFAULT_CONFIG_FILE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl RunnerParameters {
    pub fn new(baseline: impl Into<PathBuf>, candidate: impl Into<PathBuf>) -> Self {
        Self {
            baseline: baseline.into(),
            candidate: candidate.into(),
            ..Default::default()
        }
    }
}

//! OpenBench test preparation for ML-chess
//!
//! This crate prepares an SPRT test between two engine builds:
//! - Validating the environment (OpenBench client, engine binaries, config)
//! - Writing the test configuration as JSON
//! - Simulating the OpenBench submission
//! - Generating a cutechess-cli fallback script for local testing
//! - Writing a markdown summary report
//!
//! No games are played and no statistics are computed here; OpenBench (or
//! cutechess-cli, for the local script) does the actual work.
//!
//! # Usage
//!
//! ```bash
//! # Prepare a test with the default bounds and time control
//! cargo run -p openbench_prep -- --baseline ./engines/v1 --candidate ./engines/v2
//!
//! # Tighter bounds, fewer games, no prompt when the client is missing
//! cargo run -p openbench_prep -- --baseline ./v1 --candidate ./v2 \
//!     --sprt-bounds "[-1.0, 4.0]" --games 5000 --yes
//! ```

mod bounds;
mod config;
mod environment;
mod error;
mod explain;
mod params;
mod report;
mod runner;
mod script;
mod stamp;
mod submission;

pub use bounds::*;
pub use config::*;
pub use environment::*;
pub use error::*;
pub use explain::*;
pub use params::*;
pub use report::*;
pub use runner::*;
pub use script::*;
pub use stamp::*;
pub use submission::*;

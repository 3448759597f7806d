//! Run timestamp shared by every artifact of one run

use chrono::{Local, NaiveDateTime};
use std::path::{Path, PathBuf};

/// Local time captured once at the start of a run.
///
/// All artifact names, the simulated test id and the report's "Generated"
/// line are derived from the same instant, so one run always produces one
/// suffix. Resolution is one second: two runs started within the same second
/// produce the same names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStamp(NaiveDateTime);

impl RunStamp {
    pub fn now() -> Self {
        Self(Local::now().naive_local())
    }

    pub fn at(time: NaiveDateTime) -> Self {
        Self(time)
    }

    /// `YYYYmmdd_HHMMSS`, used in names and ids
    pub fn suffix(&self) -> String {
        self.0.format("%Y%m%d_%H%M%S").to_string()
    }

    /// ISO-8601 local time with microseconds
    pub fn iso(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }

    /// `<dir>/<prefix>_<suffix>.<ext>`
    pub fn artifact_path(&self, dir: &Path, prefix: &str, ext: &str) -> PathBuf {
        dir.join(format!("{}_{}.{}", prefix, self.suffix(), ext))
    }
}

//! Simulated OpenBench submission
//!
//! Nothing is sent anywhere. The id and dashboard URL are placeholders that
//! show the operator what a real submission would hand back.

use crate::config::TestConfig;
use crate::stamp::RunStamp;

/// Placeholder host used in the printed dashboard URL
pub const DASHBOARD_HOST: &str = "http://your-openbench-instance";

/// Outcome of a (simulated) submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub test_id: String,
    pub dashboard_url: String,
}

impl Submission {
    pub fn simulate(stamp: &RunStamp) -> Self {
        let test_id = format!("test_{}", stamp.suffix());
        let dashboard_url = format!("{}/test/{}", DASHBOARD_HOST, test_id);
        Self {
            test_id,
            dashboard_url,
        }
    }

    /// Text shown to the operator for this submission
    pub fn render(&self, config: &TestConfig) -> String {
        let settings = &config.test_settings;
        let rule = "=".repeat(60);
        let mut out = String::new();

        out.push_str(&format!("\n{}\nSUBMITTING TO OPENBENCH\n{}\n", rule, rule));
        out.push_str("Note: This is a simulation. In practice, you would:\n");
        out.push_str("1. Upload engines to your repository\n");
        out.push_str("2. Submit test via OpenBench web interface or API\n");
        out.push_str("3. Monitor test progress on OpenBench dashboard\n\n");

        out.push_str(&format!("Test ID: {}\n", self.test_id));
        out.push_str(&format!("Dashboard URL: {}\n\n", self.dashboard_url));

        out.push_str("Test configuration:\n");
        out.push_str(&format!("  Baseline: {}\n", config.baseline.name));
        out.push_str(&format!("  Candidate: {}\n", config.candidate.name));
        out.push_str(&format!("  Time Control: {}\n", settings.time_control));
        out.push_str(&format!("  SPRT Bounds: {}\n", settings.sprt_bounds));
        out.push_str(&format!("  Max Games: {}\n", settings.max_games));
        out.push_str(&format!("  Book: {}\n", settings.book));
        out
    }
}

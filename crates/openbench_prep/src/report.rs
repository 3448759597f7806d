//! Markdown summary report

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::bounds::SprtBounds;
use crate::config::TestConfig;
use crate::error::{Error, Result};
use crate::stamp::RunStamp;
use crate::submission::Submission;

/// Everything that goes into the report
#[derive(Debug, Clone, Copy)]
pub struct ReportInputs<'a> {
    pub config: &'a TestConfig,
    pub bounds: &'a SprtBounds,
    pub submission: &'a Submission,
    pub stamp: &'a RunStamp,
    pub config_file: &'a Path,
    pub script_path: &'a Path,
    pub report_file: &'a Path,
}

/// Format a count with comma thousands separators, e.g. `20,000`
pub fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Generate the report text
pub fn render_report(inputs: &ReportInputs<'_>) -> String {
    let config = inputs.config;
    let settings = &config.test_settings;
    let bounds = inputs.bounds;
    let mut md = String::with_capacity(4096);

    md.push_str("# OpenBench Test Submission Report\n\n");
    md.push_str(&format!("Generated: {}\n\n", inputs.stamp.iso()));

    md.push_str("## Test Configuration\n\n");
    md.push_str(&format!("**Test ID**: {}\n", inputs.submission.test_id));
    md.push_str(&format!("**Baseline Engine**: {}\n", config.baseline.source.display()));
    md.push_str(&format!("**Candidate Engine**: {}\n\n", config.candidate.source.display()));

    md.push_str("## SPRT Settings\n\n");
    md.push_str(&format!("- **Time Control**: {}\n", settings.time_control));
    md.push_str(&format!("- **SPRT Bounds**: {}\n", settings.sprt_bounds));
    md.push_str(&format!("- **Max Games**: {}\n", group_thousands(settings.max_games)));
    md.push_str(&format!("- **Opening Book**: {}\n\n", settings.book));

    md.push_str("## Files Generated\n\n");
    md.push_str(&format!("- **Test Config**: {}\n", inputs.config_file.display()));
    md.push_str(&format!("- **Local Test Script**: {}\n", inputs.script_path.display()));
    md.push_str(&format!("- **This Report**: {}\n\n", inputs.report_file.display()));

    md.push_str("## Next Steps\n\n");
    md.push_str("### Option 1: OpenBench Testing (Recommended)\n");
    md.push_str("1. Set up OpenBench account at http://chess.grantnet.us/\n");
    md.push_str("2. Upload your engines to a Git repository\n");
    md.push_str("3. Submit test via OpenBench web interface\n");
    md.push_str("4. Monitor progress on dashboard\n\n");
    md.push_str("### Option 2: Local Testing (Fallback)\n");
    md.push_str("1. Install cutechess-cli\n");
    md.push_str(&format!(
        "2. Run the generated script: `{}`\n",
        inputs.script_path.display()
    ));
    md.push_str("3. Analyze results manually\n\n");

    md.push_str("## SPRT Information\n\n");
    md.push_str("SPRT (Sequential Probability Ratio Test) advantages:\n");
    md.push_str("- Stops early when statistical significance is reached\n");
    md.push_str("- More efficient than fixed-game testing\n");
    md.push_str("- Industry standard for chess engine development\n");
    md.push_str("- Provides confidence bounds\n\n");
    md.push_str(&format!("Expected outcomes for bounds {}:\n", bounds.as_str()));
    md.push_str(&format!(
        "- **Pass**: Candidate is statistically better by {} ELO\n",
        bounds.upper_text()
    ));
    md.push_str(&format!(
        "- **Fail**: Candidate is worse by {} ELO\n",
        bounds.lower_text()
    ));
    md.push_str("- **Inconclusive**: Performance is between the bounds\n\n");

    md.push_str("## OpenBench Resources\n\n");
    md.push_str("- **Main Instance**: http://chess.grantnet.us/\n");
    md.push_str("- **Documentation**: https://github.com/AndyGrant/OpenBench/wiki\n");
    md.push_str("- **Discord**: https://discord.com/invite/9MVg7fBTpM\n");
    md
}

/// Write the report to `inputs.report_file`
pub fn write_report(inputs: &ReportInputs<'_>) -> Result<PathBuf> {
    let path = inputs.report_file;
    std::fs::write(path, render_report(inputs)).map_err(|e| Error::io(path, e))?;
    debug!(path = %path.display(), "wrote summary report");
    Ok(path.to_path_buf())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;

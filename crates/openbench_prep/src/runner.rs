//! Orchestrates one preparation run

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::bounds::SprtBounds;
use crate::config::TestConfig;
use crate::environment::{
    check_config, check_dependencies, confirm_continue, verify_engines, ClientProbe,
};
use crate::error::{Error, Result};
use crate::explain::explain_sprt;
use crate::params::RunnerParameters;
use crate::report::{write_report, ReportInputs};
use crate::script::write_local_test_script;
use crate::stamp::RunStamp;
use crate::submission::Submission;

/// Paths and id produced by a completed run
#[derive(Debug, Clone, PartialEq)]
pub struct Artifacts {
    pub test_id: String,
    pub config_file: PathBuf,
    pub script_path: PathBuf,
    pub report_file: PathBuf,
}

/// Prepares an SPRT test between two engine builds
pub struct OpenBenchRunner {
    params: RunnerParameters,
    bounds: SprtBounds,
    stamp: RunStamp,
    probe: ClientProbe,
}

impl OpenBenchRunner {
    /// Validate the bounds and create the output directory.
    ///
    /// Malformed bounds are rejected here, before anything touches disk.
    pub fn new(params: RunnerParameters) -> Result<Self> {
        Self::with_stamp(params, RunStamp::now())
    }

    pub fn with_stamp(params: RunnerParameters, stamp: RunStamp) -> Result<Self> {
        let bounds = SprtBounds::parse(&params.sprt_bounds)?;
        std::fs::create_dir_all(&params.output_dir)
            .map_err(|e| Error::io(&params.output_dir, e))?;
        debug!(dir = %params.output_dir.display(), suffix = %stamp.suffix(), "runner ready");

        Ok(Self {
            params,
            bounds,
            stamp,
            probe: ClientProbe::default(),
        })
    }

    /// Use a different command to detect the OpenBench client
    pub fn with_probe(mut self, probe: ClientProbe) -> Self {
        self.probe = probe;
        self
    }

    pub fn bounds(&self) -> &SprtBounds {
        &self.bounds
    }

    pub fn stamp(&self) -> RunStamp {
        self.stamp
    }

    pub fn check_dependencies(&self) -> bool {
        check_dependencies(&self.probe)
    }

    /// Look for the OpenBench client and, when it is missing, ask whether
    /// to go on with local scripts only. `assume_yes` skips the question.
    ///
    /// Returns whether the client was found; declining is `Error::Declined`.
    pub fn ensure_client<R: BufRead, W: Write>(
        &self,
        assume_yes: bool,
        input: &mut R,
        output: &mut W,
    ) -> Result<bool> {
        if self.check_dependencies() {
            return Ok(true);
        }
        if assume_yes || confirm_continue(input, output).map_err(Error::Prompt)? {
            debug!("continuing without the OpenBench client");
            return Ok(false);
        }
        Err(Error::Declined)
    }

    pub fn verify_engines(&self) -> bool {
        verify_engines(&self.params.baseline, &self.params.candidate)
    }

    /// Warns only; a missing config never stops the run
    pub fn check_config(&self) -> bool {
        check_config(&self.params.config_file)
    }

    /// Build the test configuration and save it as `test_config_<ts>.json`
    pub fn create_sprt_test(&self) -> Result<(TestConfig, PathBuf)> {
        let config = TestConfig::new(&self.params, &self.stamp);
        config.print_summary();

        let config_file = self.artifact_path("test_config", "json");
        config.save(&config_file)?;
        debug!(path = %config_file.display(), "wrote test configuration");
        Ok((config, config_file))
    }

    /// Simulated submission; prints what OpenBench would be sent
    pub fn submit_test(&self, config: &TestConfig) -> Submission {
        let submission = Submission::simulate(&self.stamp);
        print!("{}", submission.render(config));
        submission
    }

    pub fn create_local_test_script(&self) -> Result<PathBuf> {
        write_local_test_script(&self.params, &self.stamp)
    }

    pub fn explain_sprt(&self) {
        explain_sprt(&self.bounds);
    }

    pub fn create_summary_report(
        &self,
        config: &TestConfig,
        submission: &Submission,
        config_file: &Path,
        script_path: &Path,
    ) -> Result<PathBuf> {
        let report_file = self.artifact_path("openbench_submission", "md");
        write_report(&ReportInputs {
            config,
            bounds: &self.bounds,
            submission,
            stamp: &self.stamp,
            config_file,
            script_path,
            report_file: &report_file,
        })
    }

    /// Generate every artifact, in order. Environment checks are the
    /// caller's job since they involve the operator.
    pub fn prepare(&self) -> Result<Artifacts> {
        let (config, config_file) = self.create_sprt_test()?;
        let submission = self.submit_test(&config);
        let script_path = self.create_local_test_script()?;
        self.explain_sprt();
        let report_file =
            self.create_summary_report(&config, &submission, &config_file, &script_path)?;

        info!(test_id = %submission.test_id, "test preparation completed");
        Ok(Artifacts {
            test_id: submission.test_id,
            config_file,
            script_path,
            report_file,
        })
    }

    fn artifact_path(&self, prefix: &str, ext: &str) -> PathBuf {
        self.stamp.artifact_path(&self.params.output_dir, prefix, ext)
    }
}

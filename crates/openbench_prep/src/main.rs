//! OpenBench test preparation CLI
//!
//! Validate two engine builds and generate the files needed to run an SPRT
//! between them, on OpenBench or locally with cutechess-cli.

use anyhow::Context;
use clap::Parser;
use openbench_prep::{
    ClientProbe, OpenBenchRunner, RunnerParameters, DEFAULT_BOOK,
    DEFAULT_CONFIG_FILE, DEFAULT_GAMES, DEFAULT_OUTPUT_DIR, DEFAULT_SPRT_BOUNDS,
    DEFAULT_TIME_CONTROL,
};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "openbench-prep")]
#[command(about = "Submit chess engine test to OpenBench", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to baseline engine executable
    #[arg(long)]
    baseline: PathBuf,

    /// Path to candidate engine executable
    #[arg(long)]
    candidate: PathBuf,

    /// Maximum number of games
    #[arg(long, default_value_t = DEFAULT_GAMES)]
    games: u32,

    /// Time control
    #[arg(long, default_value = DEFAULT_TIME_CONTROL)]
    time_control: String,

    /// SPRT bounds
    #[arg(long, default_value = DEFAULT_SPRT_BOUNDS, allow_hyphen_values = true)]
    sprt_bounds: String,

    /// Opening book
    #[arg(long, default_value = DEFAULT_BOOK)]
    book: String,

    /// OpenBench config file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Output directory
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Continue without asking when the OpenBench client is missing
    #[arg(short, long)]
    yes: bool,

    /// Command used to detect the OpenBench client
    #[arg(long, default_value = "python -m OpenBench")]
    client_command: String,
}

impl Cli {
    fn parameters(&self) -> RunnerParameters {
        RunnerParameters {
            baseline: self.baseline.clone(),
            candidate: self.candidate.clone(),
            games: self.games,
            time_control: self.time_control.clone(),
            sprt_bounds: self.sprt_bounds.clone(),
            book: self.book.clone(),
            config_file: self.config.clone(),
            output_dir: self.output_dir.clone(),
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let probe = ClientProbe::from_command_line(&cli.client_command)
        .context("--client-command must not be empty")?;
    let runner = OpenBenchRunner::new(cli.parameters())
        .context("invalid test parameters")?
        .with_probe(probe);

    let stdin = io::stdin();
    runner.ensure_client(cli.yes, &mut stdin.lock(), &mut io::stdout())?;

    if !runner.verify_engines() {
        return Ok(ExitCode::FAILURE);
    }

    // Just warn, don't exit
    runner.check_config();

    let artifacts = runner.prepare().context("test preparation failed")?;

    println!("\n✓ OpenBench test preparation completed!");
    println!("✓ Summary report: {}", artifacts.report_file.display());
    println!("✓ Local test script: {}", artifacts.script_path.display());
    println!("✓ Test configuration: {}", artifacts.config_file.display());
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use dac::runner::{self, Algorithm};

#[derive(Parser)]
#[command(
    name = "dac",
    about = "Run an instrumented divide-and-conquer algorithm on generated input",
    version
)]
struct Cli {
    /// Algorithm to run.
    #[arg(value_enum)]
    algorithm: Algorithm,

    /// Number of generated input elements.
    n: usize,

    /// Seed for the input generator, and for quicksort's pivots.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// File the metrics record is appended to, created if absent.
    #[arg(long, default_value = "metrics.csv")]
    log: PathBuf,

    /// Only print the results, don't append to the log.
    #[arg(long)]
    no_log: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let report = runner::run(cli.algorithm, cli.n, cli.seed)
        .with_context(|| format!("running {} with n={}", cli.algorithm, cli.n))?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Algo: {}, n={}", report.algorithm, report.n)?;
    writeln!(stdout, "{}", report.outcome)?;
    writeln!(stdout, "{}", report.metrics)?;
    stdout.flush()?;

    if !cli.no_log {
        runner::append_record(&cli.log, &report)
            .with_context(|| format!("appending metrics record to {}", cli.log.display()))?;
    }

    Ok(())
}

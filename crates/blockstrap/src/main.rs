use std::path::PathBuf;

use blockstrap::{RunOptions, init_logging, run};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "blockstrap")]
#[command(about = "Generate synthetic return scenarios by random-block circular bootstrap")]
struct Args {
    /// Return matrix file (.json, otherwise YAML)
    #[arg(short, long)]
    input: PathBuf,

    /// Bootstrap config file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the scenarios (.json, otherwise YAML)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of scenarios to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    scenarios: usize,

    /// Base random seed (random if omitted; always logged)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Override the config's noise fraction
    #[arg(long)]
    noise_frac: Option<f64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"]
    )]
    log_level: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level)?;

    let options = RunOptions {
        input: args.input,
        config: args.config,
        output: args.output,
        scenarios: args.scenarios,
        seed: args.seed,
        noise_frac: args.noise_frac,
    };

    let (seed, set) = run(&options)?;
    tracing::info!(seed, scenarios = set.len(), "done");

    Ok(())
}

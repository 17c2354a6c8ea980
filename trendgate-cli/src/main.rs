//! TrendGate CLI — run the trend rule and hand the decision stream downstream.
//!
//! Commands:
//! - `run` — evaluate the rule over a CSV file (or synthetic bars) and write
//!   the run result as JSON
//! - `check-config` — validate a TOML parameter file without running

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use trendgate_core::data::{load_csv, trending_bars};
use trendgate_core::fingerprint::params_fingerprint;
use trendgate_core::{run_strategy, StrategyParams};

#[derive(Parser)]
#[command(
    name = "trendgate",
    about = "TrendGate — EMA crossover trend rule with a fixed ATR stop"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the rule over daily bars and emit the decision stream.
    Run {
        /// CSV file with date,open,high,low,close,volume columns.
        #[arg(long, conflicts_with = "synthetic")]
        data: Option<PathBuf>,

        /// Run over this many synthetic trending bars instead of a file.
        #[arg(long)]
        synthetic: Option<usize>,

        /// TOML parameter file. Defaults to the built-in parameters.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Symbol tag for the bars.
        #[arg(long, default_value = "SPY")]
        symbol: String,

        /// Where to write the run result JSON.
        #[arg(long, default_value = "decisions.json")]
        output: PathBuf,
    },
    /// Validate a TOML parameter file and print the resolved parameters.
    CheckConfig {
        /// TOML parameter file.
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            data,
            synthetic,
            config,
            symbol,
            output,
        } => cmd_run(data, synthetic, config, &symbol, &output),
        Commands::CheckConfig { config } => cmd_check_config(&config),
    }
}

fn load_params(config: Option<&PathBuf>) -> Result<StrategyParams> {
    match config {
        Some(path) => StrategyParams::from_toml_file(path)
            .with_context(|| format!("loading parameters from {}", path.display())),
        None => Ok(StrategyParams::default()),
    }
}

fn cmd_run(
    data: Option<PathBuf>,
    synthetic: Option<usize>,
    config: Option<PathBuf>,
    symbol: &str,
    output: &PathBuf,
) -> Result<()> {
    let params = load_params(config.as_ref())?;

    let bars = match (&data, synthetic) {
        (Some(path), None) => load_csv(path, symbol)
            .with_context(|| format!("loading bars from {}", path.display()))?,
        (None, Some(n)) => trending_bars(symbol, n, 100.0, 0.25),
        (None, None) => bail!("either --data <csv> or --synthetic <bars> is required"),
        (Some(_), Some(_)) => bail!("--data and --synthetic are mutually exclusive"),
    };

    let result = run_strategy(&params, &bars)?;

    let json = serde_json::to_string_pretty(&result)?;
    std::fs::write(output, json)
        .with_context(|| format!("writing result to {}", output.display()))?;

    println!(
        "{}: {} bars ({} warm-up), {} entries, {} exits",
        result.symbol,
        result.bar_count,
        result.warmup_bars,
        result.entries(),
        result.exits()
    );
    for rec in result.decisions.iter().filter(|r| r.decision.is_event()) {
        println!("  {} {:?} @ {:.2}", rec.date, rec.decision, rec.close);
    }
    println!("final state: {:?}", result.final_state);
    println!("fingerprint: {}", result.fingerprint);
    println!("wrote {}", output.display());
    Ok(())
}

fn cmd_check_config(config: &PathBuf) -> Result<()> {
    let params = load_params(Some(config))?;
    println!("ok: {}", config.display());
    println!("  ema_fast_period    = {}", params.ema_fast_period);
    println!("  ema_slow_period    = {}", params.ema_slow_period);
    println!("  atr_period         = {}", params.atr_period);
    println!("  atr_stop_multiple  = {}", params.atr_stop_multiple);
    println!("  position_fraction  = {}", params.position_fraction);
    println!("  fingerprint        = {}", params_fingerprint(&params));
    Ok(())
}

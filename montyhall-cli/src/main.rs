mod prompt;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use serde::Serialize;
use std::io::{BufWriter, Write, stdin, stdout};

use montyhall_game::{ExperimentConfig, ExperimentSummary, Strategy, entropy_seed, run_experiment};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    /// Keep the original pick for every trial
    Stay,
    /// Move to the remaining door for every trial
    Switch,
}

impl StrategyArg {
    const fn into_strategy(self) -> Strategy {
        match self {
            Self::Stay => Strategy::Stay,
            Self::Switch => Strategy::Switch,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ReportFormat {
    /// Human-readable result sentences
    Console,
    /// Machine-readable JSON payload
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "montyhall", version = "0.1.0")]
#[command(about = "Monty Hall probability simulator - interactive prompts or one-shot batches")]
struct Args {
    /// Number of doors in each trial's lineup
    #[arg(long, default_value_t = 3)]
    doors: usize,

    /// Number of trials to execute
    #[arg(long, default_value_t = 1000)]
    trials: u64,

    /// Contestant strategy; omit to run the interactive session
    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,

    /// Seed for deterministic runs (defaults to OS entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Output report format (batch runs only)
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(entropy_seed);

    match args.strategy {
        Some(strategy) => {
            let mut output = BufWriter::new(stdout());
            run_batch(&args, strategy.into_strategy(), seed, &mut output)?;
            output.flush()?;
            Ok(())
        }
        None => {
            announce_banner();
            prompt::run_interactive(stdin().lock(), stdout().lock(), seed)
                .context("interactive session failed")
        }
    }
}

fn announce_banner() {
    println!("{}", "🚪 Monty Hall Simulator".bright_cyan().bold());
    println!("{}", "================================".cyan());
}

fn run_batch<W: Write>(args: &Args, strategy: Strategy, seed: u64, output: &mut W) -> Result<()> {
    let cfg = ExperimentConfig {
        doors: args.doors,
        trials: args.trials,
        strategy,
        seed,
    };
    log::debug!(
        "running {} trials over {} doors with seed {seed}",
        cfg.trials,
        cfg.doors
    );
    let summary = run_experiment(&cfg)?;
    render_report(output, args.report, &cfg, &summary)
}

fn render_report<W: Write>(
    output: &mut W,
    report: ReportFormat,
    cfg: &ExperimentConfig,
    summary: &ExperimentSummary,
) -> Result<()> {
    match report {
        ReportFormat::Console => {
            writeln!(output, "{}", prompt::tally_sentence(summary))?;
            writeln!(output, "{}", prompt::result_sentence(cfg.strategy, summary))?;
        }
        ReportFormat::Json => {
            let payload = ReportPayload {
                config: cfg,
                summary,
                percentage: summary.percentage(),
            };
            serde_json::to_writer_pretty(&mut *output, &payload)?;
            writeln!(output)?;
        }
    }
    Ok(())
}

/// JSON body emitted by `--report json`.
#[derive(Serialize)]
struct ReportPayload<'a> {
    config: &'a ExperimentConfig,
    summary: &'a ExperimentSummary,
    percentage: u8,
}

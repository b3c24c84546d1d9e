use std::ffi::OsString;

use anyhow::{anyhow, bail, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use log::debug;
use serde_json::json;
use sumton_core::{cross_check_range, parse_count, Strategy, SumError};
use sumton_support::{check_error, cli_error, strategy_error};

const RUN_AFTER_HELP: &str = "\
Subcommands:
  sumton check [--from A] [--to B]   Verify that every strategy agrees on a range.

See `sumton <subcommand> --help` for command-specific options.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    Linear,
    PairedEnds,
    ClosedForm,
    All,
}

impl StrategyArg {
    fn strategies(self) -> Vec<Strategy> {
        match self {
            StrategyArg::Linear => vec![Strategy::Linear],
            StrategyArg::PairedEnds => vec![Strategy::PairedEnds],
            StrategyArg::ClosedForm => vec![Strategy::ClosedForm],
            StrategyArg::All => Strategy::ALL.to_vec(),
        }
    }
}

#[derive(Parser)]
#[command(
    name = "sumton",
    version,
    about = "Sum the integers 1..=N.",
    long_about = "Compute the N-th triangular number with one or all of the summing strategies. Use subcommands for cross-checking.",
    after_help = RUN_AFTER_HELP
)]
struct RunCli {
    /// Upper bound of the sum (a non-negative integer).
    #[arg(value_name = "N", allow_negative_numbers = true)]
    n: String,

    /// Strategy used to compute the sum.
    #[arg(short, long, value_enum, default_value = "closed-form")]
    strategy: StrategyArg,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,

    /// Log debug output to stderr.
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

#[derive(Parser)]
#[command(
    name = "sumton check",
    version,
    about = "Verify that every strategy agrees with N * (N + 1) / 2 over a range."
)]
struct CheckCli {
    /// First N to check.
    #[arg(long, value_name = "N", default_value = "0", allow_hyphen_values = true)]
    from: String,

    /// Last N to check (inclusive).
    #[arg(long, value_name = "N", default_value = "10000", allow_hyphen_values = true)]
    to: String,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// Log debug output to stderr.
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

fn main() -> Result<()> {
    let mut raw: Vec<OsString> = std::env::args_os().collect();
    if raw.get(1).map(|arg| arg == "check").unwrap_or(false) {
        return handle_check(raw);
    }
    if raw.get(1).map(|arg| arg == "run").unwrap_or(false) {
        raw.remove(1);
    }

    let run_cli = RunCli::parse_from(raw);
    run_sum(run_cli)
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_filter);
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .init();
}

fn run_sum(cli: RunCli) -> Result<()> {
    init_logging(cli.verbose);

    let strategies = cli.strategy.strategies();
    let n = parse_count(&cli.n).map_err(|err| {
        let label = strategies
            .first()
            .map(|strategy| strategy.name())
            .unwrap_or("parse");
        anyhow!(strategy_error(label, &cli.n, err))
    })?;

    let mut results = Vec::with_capacity(strategies.len());
    for strategy in strategies {
        debug!("computing sum of 1..={n} with {strategy}");
        let value = strategy
            .compute(n)
            .map_err(|err| anyhow!(strategy_error(strategy.name(), &cli.n, err)))?;
        results.push((strategy, value));
    }

    if let [(first_strategy, first), rest @ ..] = results.as_slice() {
        if let Some((strategy, value)) = rest.iter().find(|(_, value)| value != first) {
            bail!(strategy_error(
                strategy.name(),
                &cli.n,
                format!("returned {value} but {first_strategy} returned {first}")
            ));
        }
    }

    if cli.json {
        let output = if let [(strategy, value)] = results.as_slice() {
            json!({ "n": n, "strategy": strategy, "sum": value })
        } else {
            let sums = results
                .iter()
                .map(|(strategy, value)| (strategy.name().to_string(), json!(value)))
                .collect::<serde_json::Map<_, _>>();
            json!({ "n": n, "sums": sums })
        };
        println!("{output}");
    } else if let [(_, value)] = results.as_slice() {
        println!("{value}");
    } else {
        for (strategy, value) in &results {
            println!("{strategy}: {value}");
        }
    }
    Ok(())
}

fn handle_check(raw: Vec<OsString>) -> Result<()> {
    let mut args = raw;
    args.remove(1); // drop the literal "check"
    let cli = CheckCli::parse_from(args);
    init_logging(cli.verbose);

    let bound = |text: &str| -> Result<i64> {
        parse_count(text).map_err(|err| anyhow!(check_error(&cli.from, &cli.to, err)))
    };
    let from = bound(&cli.from)?;
    let to = bound(&cli.to)?;

    let report = cross_check_range(from, to)
        .map_err(|err: SumError| anyhow!(check_error(&cli.from, &cli.to, err)))?;

    if cli.json {
        let output = serde_json::to_string(&report)
            .with_context(|| cli_error("serialize", "check report"))?;
        println!("{output}");
    } else {
        println!(
            "checked {} values ({}..={}) across {} strategies",
            report.checked,
            report.from,
            report.to,
            Strategy::ALL.len()
        );
        for mismatch in &report.mismatches {
            let detail = mismatch
                .results
                .iter()
                .map(|(strategy, value)| format!("{strategy}={value}"))
                .collect::<Vec<_>>()
                .join(", ");
            println!("  n={}: expected {}, got {detail}", mismatch.n, mismatch.expected);
        }
    }

    if !report.is_consistent() {
        bail!(check_error(
            &cli.from,
            &cli.to,
            format!("{} mismatches", report.mismatches.len())
        ));
    }
    Ok(())
}

//! CLI definition and dispatch.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::console_report_adapter::ConsoleReportAdapter;
use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::csv_report_adapter::CsvReportAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::backtest::{BacktestConfig, run_backtest};
use crate::domain::config_validation::{DEFAULT_EVAL_START, validate_backtest_config};
use crate::domain::error::MomrotError;
use crate::domain::returns::FeeSchedule;
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(name = "momrot", about = "Two-index momentum rotation backtester")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the rotation backtest
    Backtest {
        #[arg(short, long)]
        config: PathBuf,
        /// Write the equity curves to a CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Override the price file named in the config
        #[arg(long)]
        prices: Option<PathBuf>,
    },
    /// Validate a config file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Show the date range of a price file
    Info {
        #[arg(long)]
        prices: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Backtest {
            config,
            output,
            prices,
        } => run_backtest_cmd(&config, output.as_ref(), prices.as_ref()),
        Command::Validate { config } => run_validate(&config),
        Command::Info { prices } => run_info(&prices),
    }
}

fn fail(err: &MomrotError) -> ExitCode {
    eprintln!("error: {err}");
    err.into()
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = MomrotError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        fail(&err)
    })
}

fn run_backtest_cmd(
    config_path: &PathBuf,
    output_path: Option<&PathBuf>,
    prices_override: Option<&PathBuf>,
) -> ExitCode {
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_backtest_config(&adapter) {
        return fail(&e);
    }

    let bt_config = build_backtest_config(&adapter);

    let prices_path = match prices_override {
        Some(p) => p.clone(),
        None => match adapter.get_string("data", "prices") {
            Some(p) => PathBuf::from(p),
            None => {
                return fail(&MomrotError::ConfigMissing {
                    section: "data".into(),
                    key: "prices".into(),
                });
            }
        },
    };

    eprintln!("Loading prices from {}", prices_path.display());
    let data_port = CsvAdapter::new(prices_path);
    let series = match data_port.fetch_prices(None, None) {
        Ok(s) => s,
        Err(e) => return fail(&e),
    };
    eprintln!("Loaded {} trading days", series.len());

    let result = match run_backtest(&series, &bt_config) {
        Ok(r) => r,
        Err(e) => return fail(&e),
    };

    if let Err(e) = ConsoleReportAdapter.write(&result) {
        return fail(&e);
    }

    if let Some(out) = output_path {
        if let Err(e) = CsvReportAdapter::new(out.clone()).write(&result) {
            return fail(&e);
        }
        eprintln!("Curves written to {}", out.display());
    }

    ExitCode::SUCCESS
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };
    match validate_backtest_config(&adapter) {
        Ok(()) => {
            println!("{}: OK", config_path.display());
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e),
    }
}

fn run_info(prices_path: &PathBuf) -> ExitCode {
    let data_port = CsvAdapter::new(prices_path.clone());
    match data_port.data_range() {
        Ok(Some((first, last, count))) => {
            println!(
                "{}: {} trading days, {} to {}",
                prices_path.display(),
                count,
                first,
                last
            );
            ExitCode::SUCCESS
        }
        Ok(None) => {
            println!("{}: no data", prices_path.display());
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e),
    }
}

/// Reads the backtest parameters, falling back to the documented defaults.
/// Ranges are checked beforehand by `validate_backtest_config`.
pub fn build_backtest_config(adapter: &dyn ConfigPort) -> BacktestConfig {
    let eval_start = adapter
        .get_string("evaluation", "start_date")
        .and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok())
        .unwrap_or(DEFAULT_EVAL_START);

    BacktestConfig {
        lookback: adapter.get_int("strategy", "lookback", 20) as usize,
        rebalance_gap: adapter.get_int("strategy", "rebalance_gap", 10) as usize,
        fees: FeeSchedule {
            purchase_rate: adapter.get_double("fees", "purchase_rate", 0.0012),
            sell_rate: adapter.get_double("fees", "sell_rate", 0.00375),
        },
        eval_start,
    }
}

//! Console summary report adapter.
//!
//! Prints the rebalance history and one line per curve: annualized return
//! and maximum drawdown, both as percentages.

use crate::domain::backtest::BacktestResult;
use crate::domain::error::MomrotError;
use crate::ports::report_port::ReportPort;

pub struct ConsoleReportAdapter;

impl ReportPort for ConsoleReportAdapter {
    fn write(&self, result: &BacktestResult) -> Result<(), MomrotError> {
        println!("Rebalances ({}):", result.events.len());
        for event in &result.events {
            println!("  {}  day {:>5}  -> {}", event.date, event.day, event.allocation);
        }
        println!();

        for curve in result.curves() {
            println!(
                "{:<34} annualized return {:>7.2}%   max drawdown {:>7.2}%",
                curve.label,
                curve.performance.annualized_return * 100.0,
                curve.performance.max_drawdown * 100.0,
            );
        }

        Ok(())
    }
}

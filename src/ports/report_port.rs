//! Report generation port trait.

use crate::domain::backtest::BacktestResult;
use crate::domain::error::MomrotError;

/// Port for presenting backtest results. Implementations own their
/// destination (stdout, a file path, …).
pub trait ReportPort {
    fn write(&self, result: &BacktestResult) -> Result<(), MomrotError>;
}

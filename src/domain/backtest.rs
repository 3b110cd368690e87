//! Backtest pipeline: momentum → events → positions → returns → metrics.

use crate::domain::config_validation::DEFAULT_EVAL_START;
use crate::domain::error::MomrotError;
use crate::domain::evaluate::{Performance, evaluate};
use crate::domain::momentum::compute_momentum;
use crate::domain::position::map_positions;
use crate::domain::returns::{FeeSchedule, compose_returns, equity_curve};
use crate::domain::scheduler::{AllocationEvent, schedule};
use crate::domain::series::PriceSeries;
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct BacktestConfig {
    /// Momentum lookback window in trading days.
    pub lookback: usize,
    /// Minimum trading-day gap between allocation changes.
    pub rebalance_gap: usize,
    pub fees: FeeSchedule,
    /// Start of the annualization window.
    pub eval_start: NaiveDate,
}

impl Default for BacktestConfig {
    fn default() -> Self {
        Self {
            lookback: 20,
            rebalance_gap: 10,
            fees: FeeSchedule::default(),
            eval_start: DEFAULT_EVAL_START,
        }
    }
}

/// One evaluated net-value curve.
#[derive(Debug, Clone)]
pub struct CurveReport {
    pub label: String,
    pub dates: Vec<NaiveDate>,
    pub equity: Vec<f64>,
    pub performance: Performance,
}

/// Full backtest output: the rotation strategy with and without fees, plus
/// each index held outright as a benchmark. All four curves are aligned to
/// the same position-defined trading days.
#[derive(Debug, Clone)]
pub struct BacktestResult {
    pub events: Vec<AllocationEvent>,
    pub net_of_fees: CurveReport,
    pub gross: CurveReport,
    pub large_cap: CurveReport,
    pub small_cap: CurveReport,
}

impl BacktestResult {
    pub fn curves(&self) -> [&CurveReport; 4] {
        [&self.net_of_fees, &self.gross, &self.large_cap, &self.small_cap]
    }
}

pub fn run_backtest(
    series: &PriceSeries,
    config: &BacktestConfig,
) -> Result<BacktestResult, MomrotError> {
    let records = compute_momentum(series, config.lookback)?;
    let events = schedule(&records, config.rebalance_gap)?;
    let positions = map_positions(&records, &events);

    let gross_returns = compose_returns(&records, &positions, &events, &FeeSchedule::free());
    let net_returns = compose_returns(&records, &positions, &events, &config.fees);
    let gross_curve = equity_curve(&gross_returns);
    let net_curve = equity_curve(&net_returns);

    // Benchmarks are normalized at the first momentum-defined row, the
    // global start of the evaluable series.
    let rows = &series.rows()[config.lookback..];
    let base = &rows[0];

    // Restrict every curve to the rows with a defined position.
    let mut dates = Vec::new();
    let mut net = Vec::new();
    let mut gross = Vec::new();
    let mut large = Vec::new();
    let mut small = Vec::new();
    for (i, record) in records.iter().enumerate() {
        let (Some(n), Some(g)) = (net_curve[i], gross_curve[i]) else {
            continue;
        };
        dates.push(record.date);
        net.push(n);
        gross.push(g);
        large.push(rows[i].large / base.large);
        small.push(rows[i].small / base.small);
    }

    let report = |label: &str, equity: Vec<f64>| -> Result<CurveReport, MomrotError> {
        let performance = evaluate(&dates, &equity, config.eval_start)?;
        Ok(CurveReport {
            label: label.to_string(),
            dates: dates.clone(),
            equity,
            performance,
        })
    };

    Ok(BacktestResult {
        net_of_fees: report("rotation strategy (net of fees)", net)?,
        gross: report("rotation strategy (gross)", gross)?,
        large_cap: report("large-cap index", large)?,
        small_cap: report("small-cap index", small)?,
        events,
    })
}

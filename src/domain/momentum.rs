//! Trailing momentum and daily percent change.
//!
//! momentum(n)[i] = P[i] / P[i-n] - 1, defined only for i >= n.
//! The first n rows have no momentum and are excluded from the output,
//! so every emitted record also has a defined 1-day return.

use crate::domain::error::MomrotError;
use crate::domain::series::PriceSeries;
use chrono::NaiveDate;

/// Per-day derived record for rows with defined momentum.
#[derive(Debug, Clone, PartialEq)]
pub struct MomentumRecord {
    pub day: usize,
    pub date: NaiveDate,
    /// n-day momentum of the large-cap index, as a fraction (0.05 = 5%).
    pub large_mom: f64,
    pub small_mom: f64,
    /// 1-day percent change of the large-cap index.
    pub large_ret: f64,
    pub small_ret: f64,
}

fn pct_change(curr: f64, prev: f64) -> f64 {
    if prev == 0.0 { 0.0 } else { curr / prev - 1.0 }
}

/// Derives momentum records for rows `lookback..` of the series.
///
/// Fails with `InsufficientData` when fewer than lookback+1 rows exist,
/// i.e. when not a single row has defined momentum.
pub fn compute_momentum(
    series: &PriceSeries,
    lookback: usize,
) -> Result<Vec<MomentumRecord>, MomrotError> {
    let rows = series.rows();
    if rows.len() < lookback + 1 {
        return Err(MomrotError::InsufficientData {
            rows: rows.len(),
            minimum: lookback + 1,
        });
    }

    let records = (lookback..rows.len())
        .map(|i| MomentumRecord {
            day: rows[i].day,
            date: rows[i].date,
            large_mom: pct_change(rows[i].large, rows[i - lookback].large),
            small_mom: pct_change(rows[i].small, rows[i - lookback].small),
            large_ret: pct_change(rows[i].large, rows[i - 1].large),
            small_ret: pct_change(rows[i].small, rows[i - 1].small),
        })
        .collect();

    Ok(records)
}

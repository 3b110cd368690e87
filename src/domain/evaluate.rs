//! Performance evaluation: annualized return and maximum drawdown.

use crate::domain::error::MomrotError;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Performance {
    pub annualized_return: f64,
    pub max_drawdown: f64,
}

/// Evaluates a net-value curve.
///
/// Annualization uses calendar days: `final ^ (365 / days) - 1`, where the
/// day count runs from the first date on or after `eval_start` to the last
/// date. The final equity is taken as-is — the curve stays based at the
/// global series start, only the day-count window moves.
///
/// Drawdown is measured against the running peak over the whole curve and
/// is always <= 0 (0 iff the curve never declines).
///
/// Fails with `EmptyWindow` when no date falls on or after `eval_start`,
/// or when the window spans zero calendar days.
pub fn evaluate(
    dates: &[NaiveDate],
    equity: &[f64],
    eval_start: NaiveDate,
) -> Result<Performance, MomrotError> {
    debug_assert_eq!(dates.len(), equity.len());

    let first_eval = dates
        .iter()
        .find(|d| **d >= eval_start)
        .copied()
        .ok_or(MomrotError::EmptyWindow { start: eval_start })?;
    let last = *dates.last().expect("window is non-empty");

    let days = (last - first_eval).num_days();
    if days <= 0 {
        return Err(MomrotError::EmptyWindow { start: eval_start });
    }

    let final_equity = *equity.last().expect("window is non-empty");
    let annualized_return = final_equity.powf(365.0 / days as f64) - 1.0;

    let mut peak = f64::MIN;
    let mut max_drawdown = 0.0_f64;
    for &value in equity {
        if value > peak {
            peak = value;
        }
        let drawdown = value / peak - 1.0;
        if drawdown < max_drawdown {
            max_drawdown = drawdown;
        }
    }

    Ok(Performance {
        annualized_return,
        max_drawdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn dates(n: usize) -> Vec<NaiveDate> {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        (0..n)
            .map(|i| start + chrono::Duration::days(i as i64))
            .collect()
    }

    #[test]
    fn annualized_over_exactly_one_year() {
        let dates = vec![
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2020, 12, 31).unwrap(),
        ];
        let equity = vec![1.0, 1.21];
        let perf = evaluate(&dates, &equity, dates[0]).unwrap();

        // 365-day span: the exponent is 1.
        assert_relative_eq!(perf.annualized_return, 0.21, max_relative = 1e-12);
    }

    #[test]
    fn annualized_over_two_years() {
        let dates = vec![
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2021, 12, 31).unwrap(),
        ];
        let equity = vec![1.0, 1.44];
        let perf = evaluate(&dates, &equity, dates[0]).unwrap();

        assert_relative_eq!(
            perf.annualized_return,
            1.44_f64.powf(365.0 / 730.0) - 1.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn window_start_shrinks_day_count_but_keeps_final_equity() {
        let ds = dates(11);
        let equity: Vec<f64> = (0..11).map(|i| 1.0 + 0.01 * i as f64).collect();

        let from_start = evaluate(&ds, &equity, ds[0]).unwrap();
        let from_middle = evaluate(&ds, &equity, ds[5]).unwrap();

        // Same final value over fewer days annualizes higher.
        assert!(from_middle.annualized_return > from_start.annualized_return);
    }

    #[test]
    fn drawdown_zero_for_non_decreasing_curve() {
        let ds = dates(5);
        let equity = vec![1.0, 1.0, 1.1, 1.1, 1.3];
        let perf = evaluate(&ds, &equity, ds[0]).unwrap();

        assert_relative_eq!(perf.max_drawdown, 0.0);
    }

    #[test]
    fn drawdown_from_running_peak() {
        let ds = dates(6);
        let equity = vec![1.0, 1.1, 0.9, 0.95, 0.8, 1.0];
        let perf = evaluate(&ds, &equity, ds[0]).unwrap();

        assert_relative_eq!(perf.max_drawdown, 0.8 / 1.1 - 1.0, max_relative = 1e-12);
        assert!(perf.max_drawdown <= 0.0);
    }

    #[test]
    fn drawdown_window_is_the_whole_curve() {
        // The dip sits before the evaluation start date; the drawdown still
        // sees it, only the annualization day-count moves.
        let ds = dates(6);
        let equity = vec![1.0, 0.5, 1.2, 1.2, 1.2, 1.2];
        let perf = evaluate(&ds, &equity, ds[3]).unwrap();

        assert_relative_eq!(perf.max_drawdown, -0.5, max_relative = 1e-12);
    }

    #[test]
    fn empty_window_is_an_error() {
        let ds = dates(3);
        let late = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let err = evaluate(&ds, &[1.0, 1.0, 1.0], late).unwrap_err();

        assert!(matches!(err, MomrotError::EmptyWindow { .. }));
    }

    #[test]
    fn single_day_window_is_an_error() {
        let ds = dates(3);
        let err = evaluate(&ds, &[1.0, 1.0, 1.0], ds[2]).unwrap_err();

        assert!(matches!(err, MomrotError::EmptyWindow { .. }));
    }
}

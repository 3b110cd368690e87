//! Two-index price series representation.

use crate::domain::error::MomrotError;
use chrono::NaiveDate;

/// Closing levels of both indices on one trading day.
///
/// `day` is the trading-day index: strictly increasing, one entry per
/// trading day. Calendar gaps (weekends, holidays) are expected; only
/// trading days are counted.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRow {
    pub day: usize,
    pub date: NaiveDate,
    pub large: f64,
    pub small: f64,
}

/// Time-ordered price series for the large-cap and small-cap indices.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    rows: Vec<PriceRow>,
}

impl PriceSeries {
    /// Validates ordering: trading-day index and date must be strictly
    /// increasing across rows.
    pub fn new(rows: Vec<PriceRow>) -> Result<Self, MomrotError> {
        for pair in rows.windows(2) {
            if pair[1].day <= pair[0].day {
                return Err(MomrotError::InvalidSeries {
                    reason: format!(
                        "trading-day index not strictly increasing at {} (day {} follows day {})",
                        pair[1].date, pair[1].day, pair[0].day
                    ),
                });
            }
            if pair[1].date <= pair[0].date {
                return Err(MomrotError::InvalidSeries {
                    reason: format!(
                        "dates not strictly increasing at day {} ({} follows {})",
                        pair[1].day, pair[1].date, pair[0].date
                    ),
                });
            }
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[PriceRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(day: usize, d: u32, large: f64, small: f64) -> PriceRow {
        PriceRow {
            day,
            date: NaiveDate::from_ymd_opt(2024, 1, d).unwrap(),
            large,
            small,
        }
    }

    #[test]
    fn accepts_ordered_rows() {
        let series =
            PriceSeries::new(vec![row(0, 1, 100.0, 50.0), row(1, 2, 101.0, 51.0)]).unwrap();
        assert_eq!(series.len(), 2);
        assert!(!series.is_empty());
    }

    #[test]
    fn accepts_calendar_gaps() {
        // Friday then Monday: day index stays contiguous, dates jump.
        let series =
            PriceSeries::new(vec![row(0, 5, 100.0, 50.0), row(1, 8, 101.0, 51.0)]).unwrap();
        assert_eq!(series.rows()[1].day, 1);
    }

    #[test]
    fn rejects_repeated_day_index() {
        let err = PriceSeries::new(vec![row(3, 1, 100.0, 50.0), row(3, 2, 101.0, 51.0)])
            .unwrap_err();
        assert!(matches!(err, MomrotError::InvalidSeries { .. }));
    }

    #[test]
    fn rejects_backwards_dates() {
        let err = PriceSeries::new(vec![row(0, 2, 100.0, 50.0), row(1, 1, 101.0, 51.0)])
            .unwrap_err();
        assert!(matches!(err, MomrotError::InvalidSeries { .. }));
    }

    #[test]
    fn empty_series_is_valid() {
        let series = PriceSeries::new(vec![]).unwrap();
        assert!(series.is_empty());
    }
}

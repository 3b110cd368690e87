//! Shared helpers for integration tests.

use chrono::NaiveDate;
use momrot::domain::error::MomrotError;
use momrot::domain::series::{PriceRow, PriceSeries};
use momrot::ports::data_port::DataPort;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Builds a series of consecutive calendar days starting 2020-01-01.
pub fn make_series(large: &[f64], small: &[f64]) -> PriceSeries {
    assert_eq!(large.len(), small.len());
    let rows = large
        .iter()
        .zip(small)
        .enumerate()
        .map(|(i, (&l, &s))| PriceRow {
            day: i,
            date: date(2020, 1, 1) + chrono::Duration::days(i as i64),
            large: l,
            small: s,
        })
        .collect();
    PriceSeries::new(rows).unwrap()
}

/// Large-cap compounds daily for the first `pivot` days then goes flat;
/// small-cap is flat until `pivot` then compounds daily. Produces exactly
/// one rotation out of the initial large-cap allocation.
pub fn rotation_prices(len: usize, pivot: usize) -> (Vec<f64>, Vec<f64>) {
    let large = (0..len)
        .map(|i| 100.0 * 1.01_f64.powi(i.min(pivot) as i32))
        .collect();
    let small = (0..len)
        .map(|i| 50.0 * 1.012_f64.powi(i.saturating_sub(pivot) as i32))
        .collect();
    (large, small)
}

/// In-memory `DataPort` backed by explicit rows.
pub struct MockDataPort {
    rows: Vec<(NaiveDate, f64, f64)>,
}

impl MockDataPort {
    pub fn new(large: &[f64], small: &[f64]) -> Self {
        assert_eq!(large.len(), small.len());
        let rows = large
            .iter()
            .zip(small)
            .enumerate()
            .map(|(i, (&l, &s))| (date(2020, 1, 1) + chrono::Duration::days(i as i64), l, s))
            .collect();
        Self { rows }
    }
}

impl DataPort for MockDataPort {
    fn fetch_prices(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<PriceSeries, MomrotError> {
        let rows = self
            .rows
            .iter()
            .filter(|(d, _, _)| {
                start_date.is_none_or(|s| *d >= s) && end_date.is_none_or(|e| *d <= e)
            })
            .enumerate()
            .map(|(day, &(d, l, s))| PriceRow {
                day,
                date: d,
                large: l,
                small: s,
            })
            .collect();
        PriceSeries::new(rows)
    }

    fn data_range(&self) -> Result<Option<(NaiveDate, NaiveDate, usize)>, MomrotError> {
        Ok(match (self.rows.first(), self.rows.last()) {
            (Some(first), Some(last)) => Some((first.0, last.0, self.rows.len())),
            _ => None,
        })
    }
}

//! CSV price file adapter.
//!
//! Expected layout: a header row, then `date,large,small` with dates in
//! `YYYY-MM-DD`. Rows are sorted by date and re-indexed as trading days
//! after the optional date filter.

use crate::domain::error::MomrotError;
use crate::domain::series::{PriceRow, PriceSeries};
use crate::ports::data_port::DataPort;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

pub struct CsvAdapter {
    path: PathBuf,
}

impl CsvAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_rows(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<(NaiveDate, f64, f64)>, MomrotError> {
        let content = fs::read_to_string(&self.path).map_err(|e| MomrotError::Data {
            reason: format!("failed to read {}: {}", self.path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut rows = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| MomrotError::Data {
                reason: format!("CSV parse error: {}", e),
            })?;

            let date_str = record.get(0).ok_or_else(|| MomrotError::Data {
                reason: "missing date column".into(),
            })?;
            let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
                MomrotError::Data {
                    reason: format!("invalid date format: {}", e),
                }
            })?;

            if start_date.is_some_and(|s| date < s) || end_date.is_some_and(|e| date > e) {
                continue;
            }

            let large: f64 = record
                .get(1)
                .ok_or_else(|| MomrotError::Data {
                    reason: "missing large-cap column".into(),
                })?
                .parse()
                .map_err(|e| MomrotError::Data {
                    reason: format!("invalid large-cap value: {}", e),
                })?;

            let small: f64 = record
                .get(2)
                .ok_or_else(|| MomrotError::Data {
                    reason: "missing small-cap column".into(),
                })?
                .parse()
                .map_err(|e| MomrotError::Data {
                    reason: format!("invalid small-cap value: {}", e),
                })?;

            rows.push((date, large, small));
        }

        rows.sort_by_key(|r| r.0);
        Ok(rows)
    }
}

impl DataPort for CsvAdapter {
    fn fetch_prices(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<PriceSeries, MomrotError> {
        let rows = self
            .read_rows(start_date, end_date)?
            .into_iter()
            .enumerate()
            .map(|(day, (date, large, small))| PriceRow {
                day,
                date,
                large,
                small,
            })
            .collect();
        PriceSeries::new(rows)
    }

    fn data_range(&self) -> Result<Option<(NaiveDate, NaiveDate, usize)>, MomrotError> {
        let rows = self.read_rows(None, None)?;
        Ok(match (rows.first(), rows.last()) {
            (Some(first), Some(last)) => Some((first.0, last.0, rows.len())),
            _ => None,
        })
    }
}

//! CSV equity-curve export adapter.
//!
//! Writes one row per trading day with all four net-value curves, for
//! external plotting tools. Columns: date, then one per curve label.

use crate::domain::backtest::BacktestResult;
use crate::domain::error::MomrotError;
use crate::ports::report_port::ReportPort;
use std::path::PathBuf;

pub struct CsvReportAdapter {
    path: PathBuf,
}

impl CsvReportAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ReportPort for CsvReportAdapter {
    fn write(&self, result: &BacktestResult) -> Result<(), MomrotError> {
        let mut wtr = csv::Writer::from_path(&self.path).map_err(|e| MomrotError::Data {
            reason: format!("failed to create {}: {}", self.path.display(), e),
        })?;

        let curves = result.curves();
        let mut header = vec!["date".to_string()];
        header.extend(curves.iter().map(|c| c.label.clone()));
        wtr.write_record(&header).map_err(write_error)?;

        // All curves share the date axis produced by the pipeline.
        for (i, date) in result.net_of_fees.dates.iter().enumerate() {
            let mut row = vec![date.to_string()];
            row.extend(curves.iter().map(|c| c.equity[i].to_string()));
            wtr.write_record(&row).map_err(write_error)?;
        }

        wtr.flush()?;
        Ok(())
    }
}

fn write_error(e: csv::Error) -> MomrotError {
    MomrotError::Data {
        reason: format!("CSV write error: {}", e),
    }
}

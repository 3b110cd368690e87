//! Price data access port trait.

use crate::domain::error::MomrotError;
use crate::domain::series::PriceSeries;
use chrono::NaiveDate;

pub trait DataPort {
    /// Loads the two-index price series, optionally restricted to a
    /// calendar-date range.
    fn fetch_prices(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<PriceSeries, MomrotError>;

    /// First date, last date and row count of the available data, or
    /// `None` when the source is empty.
    fn data_range(&self) -> Result<Option<(NaiveDate, NaiveDate, usize)>, MomrotError>;
}

//! Alert Aggregation
//!
//! The two consumers of a fetched alert batch:
//! - A display-capped table view (first 50 records, input order)
//! - An hourly time-series grouping alerts by the UTC hour of their
//!   timestamp, emitted as parallel label/count sequences

mod series;
mod table;

pub use series::{hourly_series, HourlySeries};
pub use table::{capped, TABLE_CAP};

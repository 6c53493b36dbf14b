//! Capped Table View

use alert_model::AlertRecord;

/// Maximum number of records shown in the table view.
pub const TABLE_CAP: usize = 50;

/// Truncate an alert batch to the table display cap.
///
/// Pure prefix truncation: the first `TABLE_CAP` records in input order,
/// no sorting and no filtering. Not a top-K by any metric.
pub fn capped(alerts: &[AlertRecord]) -> &[AlertRecord] {
    &alerts[..alerts.len().min(TABLE_CAP)]
}

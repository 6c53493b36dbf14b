//! Hourly Time Series

use std::collections::BTreeMap;

use alert_model::AlertRecord;
use tracing::debug;

/// Hour-bucketed alert counts as parallel sequences.
///
/// `labels` holds one `YYYY-MM-DDTHH:00` UTC label per hour that had at
/// least one alert, strictly ascending; `data[i]` is the count for
/// `labels[i]`. Hours without alerts are absent, never zero-filled: the
/// hour axis is categorical, built only from observed labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HourlySeries {
    pub labels: Vec<String>,
    pub data: Vec<u64>,
}

impl HourlySeries {
    /// True when no alert contributed a bucket.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Total alerts across all buckets.
    pub fn total(&self) -> u64 {
        self.data.iter().sum()
    }
}

/// Group alerts by the UTC hour of their timestamp.
///
/// Records with an unparseable `attack_time` are skipped: they touch no
/// bucket and raise no error (the table view still shows them with a
/// placeholder). Counting goes through a `BTreeMap` keyed by the hour
/// label, so extraction is already in ascending label order, which for
/// the fixed-width format is also chronological order.
pub fn hourly_series(alerts: &[AlertRecord]) -> HourlySeries {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();

    for alert in alerts {
        match alert.parsed_time() {
            Some(time) => {
                let label = time.format("%Y-%m-%dT%H:00").to_string();
                *counts.entry(label).or_insert(0) += 1;
            }
            None => {
                debug!("Skipping alert with unparseable attack_time: {:?}", alert.attack_time);
            }
        }
    }

    let mut series = HourlySeries::default();
    for (label, count) in counts {
        series.labels.push(label);
        series.data.push(count);
    }
    series
}

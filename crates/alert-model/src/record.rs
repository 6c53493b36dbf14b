//! Alert Record Type

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// One security alert as received from the alerts endpoint.
///
/// All fields are opaque text: `alert_type` and `sensor` are category
/// labels, `src_ip` is displayed verbatim and never parsed as an address,
/// and `attack_time` is the raw timestamp text the backend stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRecord {
    /// Event category (e.g. honeypot event ID)
    pub alert_type: String,
    /// Source address as reported, displayed as-is
    pub src_ip: String,
    /// Reporting sensor identifier
    pub sensor: String,
    /// Timestamp text, ISO-8601 with or without a UTC offset
    pub attack_time: String,
}

impl AlertRecord {
    /// Parse `attack_time` into a UTC instant.
    ///
    /// Accepts RFC 3339 (offset-carrying) timestamps, falling back to
    /// naive `YYYY-MM-DDTHH:MM:SS[.frac]` interpreted as UTC, which is
    /// what the backend emits for offset-less rows. Returns `None` when
    /// the text matches neither shape; callers decide the skip policy.
    pub fn parsed_time(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.attack_time)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(&self.attack_time, "%Y-%m-%dT%H:%M:%S%.f")
                    .ok()
                    .map(|naive| Utc.from_utc_datetime(&naive))
            })
    }

    /// Format `attack_time` in the viewer's local timezone for table
    /// display. Independent of the UTC hour bucketing used by the chart.
    pub fn local_display_time(&self) -> Option<String> {
        self.parsed_time()
            .map(|utc| utc.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn record(attack_time: &str) -> AlertRecord {
        AlertRecord {
            alert_type: "cowrie.login.failed".to_string(),
            src_ip: "203.0.113.7".to_string(),
            sensor: "hive-01".to_string(),
            attack_time: attack_time.to_string(),
        }
    }

    #[test]
    fn test_parse_rfc3339() {
        let parsed = record("2024-01-01T10:15:00Z").parsed_time().unwrap();
        assert_eq!(parsed.hour(), 10);
        assert_eq!(parsed.minute(), 15);
    }

    #[test]
    fn test_parse_with_offset_normalizes_to_utc() {
        let parsed = record("2024-01-01T12:15:00+02:00").parsed_time().unwrap();
        assert_eq!(parsed.hour(), 10);
    }

    #[test]
    fn test_parse_naive_as_utc() {
        let parsed = record("2024-01-01T10:15:00.123456").parsed_time().unwrap();
        assert_eq!(parsed.hour(), 10);
    }

    #[test]
    fn test_unparseable_is_none() {
        assert!(record("not a time").parsed_time().is_none());
        assert!(record("").parsed_time().is_none());
    }

    #[test]
    fn test_wire_decode() {
        let json = r#"{
            "alert_type": "dionaea.connection",
            "src_ip": "198.51.100.4",
            "sensor": "hive-02",
            "attack_time": "2024-01-01T10:45:00Z"
        }"#;
        let alert: AlertRecord = serde_json::from_str(json).unwrap();
        assert_eq!(alert.alert_type, "dionaea.connection");
        assert!(alert.parsed_time().is_some());
    }
}

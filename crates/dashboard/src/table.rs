//! Table Renderer

use alert_model::AlertRecord;
use tracing::debug;

/// Placeholder shown when a record's timestamp cannot be parsed.
pub const INVALID_TIME: &str = "invalid time";

/// Renders the alert table body.
///
/// Each [`render`](Self::render) call replaces the entire row buffer:
/// prior rows are cleared before new ones are emitted, so repeated
/// passes never leak stale rows. Timestamps are shown in the viewer's
/// local timezone; the chart's UTC bucketing is a separate concern.
#[derive(Debug, Default)]
pub struct TableRenderer {
    rows_html: String,
    row_count: usize,
}

impl TableRenderer {
    /// Create an empty renderer
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the table body with one row per record, in input order.
    pub fn render(&mut self, alerts: &[AlertRecord]) {
        self.rows_html.clear();
        self.row_count = alerts.len();

        for alert in alerts {
            let shown_time = alert
                .local_display_time()
                .unwrap_or_else(|| INVALID_TIME.to_string());
            self.rows_html.push_str(&format!(
                "<tr>\
                 <td class=\"px-6 py-4\">{}</td>\
                 <td class=\"px-6 py-4 font-mono\">{}</td>\
                 <td class=\"px-6 py-4\">{}</td>\
                 <td class=\"px-6 py-4\">{}</td>\
                 </tr>\n",
                alert.alert_type, alert.src_ip, alert.sensor, shown_time
            ));
        }

        debug!("Rendered table body with {} rows", self.row_count);
    }

    /// Current table body markup
    pub fn body_html(&self) -> &str {
        &self.rows_html
    }

    /// Number of rows in the current body
    pub fn row_count(&self) -> usize {
        self.row_count
    }
}

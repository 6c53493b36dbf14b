//! Alert Dashboard
//!
//! One fetch-and-render pass over the alerts endpoint: load the batch
//! (failing open to empty), render the capped table view, and render the
//! hourly time-series chart. Strictly sequential, executed once per
//! invocation; no retries and no background refresh.

use alert_aggregate::{capped, hourly_series};
use alert_fetch::{AlertFetcher, FetchConfig, FetchError};
use serde::Deserialize;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod chart;
mod table;

pub use chart::{ChartInstance, ChartSurface, Gradient};
pub use table::{TableRenderer, INVALID_TIME};

/// Dashboard configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Alerts endpoint URL
    pub endpoint: String,
    /// HTTP timeout (seconds)
    pub timeout_secs: u64,
    /// Rendered chart height (pixels), sizes the fill gradient
    pub chart_height_px: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            endpoint: FetchConfig::default().endpoint,
            timeout_secs: FetchConfig::default().timeout_secs,
            chart_height_px: 320,
        }
    }
}

/// Load configuration: defaults, then an optional `dashboard.toml`,
/// then `DASHBOARD_*` environment overrides.
pub fn load_config() -> Result<DashboardConfig, config::ConfigError> {
    let defaults = DashboardConfig::default();

    config::Config::builder()
        .set_default("endpoint", defaults.endpoint)?
        .set_default("timeout_secs", defaults.timeout_secs)?
        .set_default("chart_height_px", defaults.chart_height_px as u64)?
        .add_source(config::File::with_name("dashboard").required(false))
        .add_source(config::Environment::with_prefix("DASHBOARD").try_parsing(true))
        .build()?
        .try_deserialize()
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// The dashboard widget: fetcher plus the two render targets.
pub struct Dashboard {
    fetcher: AlertFetcher,
    table: TableRenderer,
    chart: ChartSurface,
}

impl Dashboard {
    /// Create a dashboard from configuration
    pub fn new(config: DashboardConfig) -> Result<Self, FetchError> {
        let fetcher = AlertFetcher::new(FetchConfig {
            endpoint: config.endpoint,
            timeout_secs: config.timeout_secs,
        })?;

        Ok(Self {
            fetcher,
            table: TableRenderer::new(),
            chart: ChartSurface::new(config.chart_height_px),
        })
    }

    /// Run one fetch-and-render pass.
    ///
    /// Never fails: a fetch problem surfaces as an empty batch, which
    /// renders an empty table and a chart with no points.
    pub async fn refresh(&mut self) {
        let alerts = self.fetcher.load_alerts().await;

        self.table.render(capped(&alerts));
        let series = hourly_series(&alerts);
        self.chart.render(&series);

        info!(
            "Render pass complete: {} table rows, {} hour buckets",
            self.table.row_count(),
            series.labels.len()
        );
    }

    /// Table render target
    pub fn table(&self) -> &TableRenderer {
        &self.table
    }

    /// Chart render target
    pub fn chart(&self) -> &ChartSurface {
        &self.chart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Json, Router};

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/api/alerts", addr)
    }

    fn dashboard_for(endpoint: String) -> Dashboard {
        Dashboard::new(DashboardConfig {
            endpoint,
            timeout_secs: 5,
            chart_height_px: 320,
        })
        .unwrap()
    }

    fn alert_json(i: usize, attack_time: &str) -> serde_json::Value {
        serde_json::json!({
            "alert_type": format!("cowrie.event-{}", i),
            "src_ip": "203.0.113.7",
            "sensor": "hive-01",
            "attack_time": attack_time
        })
    }

    #[tokio::test]
    async fn test_refresh_caps_table_and_buckets_all_alerts() {
        // 60 alerts spread over two hours: table caps at 50, chart sees all
        let batch: Vec<_> = (0..60)
            .map(|i| {
                let hour = if i < 40 { 10 } else { 11 };
                alert_json(i, &format!("2024-01-01T{:02}:30:00Z", hour))
            })
            .collect();
        let router = Router::new().route("/api/alerts", get(move || async move { Json(batch) }));

        let mut dashboard = dashboard_for(serve(router).await);
        dashboard.refresh().await;

        assert_eq!(dashboard.table().row_count(), 50);
        let chart = dashboard.chart().active().unwrap();
        assert_eq!(chart.labels, vec!["2024-01-01T10:00", "2024-01-01T11:00"]);
        assert_eq!(chart.data, vec![40, 20]);
    }

    #[tokio::test]
    async fn test_refresh_survives_failing_endpoint() {
        let router = Router::new().route(
            "/api/alerts",
            get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        );

        let mut dashboard = dashboard_for(serve(router).await);
        dashboard.refresh().await;

        assert_eq!(dashboard.table().row_count(), 0);
        let chart = dashboard.chart().active().unwrap();
        assert!(chart.labels.is_empty());
        assert!(chart.data.is_empty());
    }

    #[tokio::test]
    async fn test_repeated_refresh_replaces_render_targets() {
        let batch = vec![alert_json(0, "2024-01-01T10:15:00Z")];
        let router = Router::new().route("/api/alerts", get(move || async move { Json(batch) }));

        let mut dashboard = dashboard_for(serve(router).await);
        dashboard.refresh().await;
        dashboard.refresh().await;

        assert_eq!(dashboard.table().row_count(), 1);
        assert_eq!(dashboard.table().body_html().matches("<tr>").count(), 1);
        let chart = dashboard.chart().active().unwrap();
        assert_eq!(chart.data, vec![1]);
    }

    #[tokio::test]
    async fn test_invalid_timestamps_flagged_in_table_skipped_in_chart() {
        let batch = vec![
            alert_json(0, "2024-01-01T10:15:00Z"),
            alert_json(1, "not a timestamp"),
        ];
        let router = Router::new().route("/api/alerts", get(move || async move { Json(batch) }));

        let mut dashboard = dashboard_for(serve(router).await);
        dashboard.refresh().await;

        assert_eq!(dashboard.table().row_count(), 2);
        assert!(dashboard.table().body_html().contains(INVALID_TIME));
        let chart = dashboard.chart().active().unwrap();
        assert_eq!(chart.data, vec![1]);
    }
}

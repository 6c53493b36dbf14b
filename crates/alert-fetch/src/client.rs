//! Alert Fetch Client

use std::time::Duration;

use alert_model::AlertRecord;
use tracing::{error, info};

use crate::FetchError;

/// Fetcher configuration
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Absolute URL of the alerts endpoint
    pub endpoint: String,
    /// HTTP client timeout (seconds)
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8080/api/alerts".to_string(),
            timeout_secs: 10,
        }
    }
}

/// HTTP client for the alerts endpoint
pub struct AlertFetcher {
    http: reqwest::Client,
    config: FetchConfig,
}

impl AlertFetcher {
    /// Create a new fetcher
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self { http, config })
    }

    /// Retrieve one alert batch, order as received.
    ///
    /// Explicit result for internal use and tests; rendering code goes
    /// through [`load_alerts`](Self::load_alerts) instead.
    pub async fn fetch(&self) -> Result<Vec<AlertRecord>, FetchError> {
        let response = self
            .http
            .get(&self.config.endpoint)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .json::<Vec<AlertRecord>>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }

    /// Retrieve one alert batch, failing open.
    ///
    /// Never returns an error: transport failures, non-success statuses,
    /// and decode failures are logged and collapsed to an empty batch so
    /// downstream rendering always receives a valid sequence.
    pub async fn load_alerts(&self) -> Vec<AlertRecord> {
        match self.fetch().await {
            Ok(alerts) => {
                info!("Loaded {} alerts from {}", alerts.len(), self.config.endpoint);
                alerts
            }
            Err(e) => {
                error!("Failed to load alerts: {}", e);
                Vec::new()
            }
        }
    }
}

//! Alert Dashboard - Main Entry Point

use dashboard::{init_logging, load_config, Dashboard};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    info!("=== Alert Dashboard v{} ===", env!("CARGO_PKG_VERSION"));

    let config = load_config()?;
    let mut dashboard = Dashboard::new(config)?;

    dashboard.refresh().await;

    // Emit the rendered artifacts for the hosting page
    println!("{}", dashboard.table().body_html());
    if let Some(chart) = dashboard.chart().active() {
        println!("{}", serde_json::to_string_pretty(chart)?);
    }

    Ok(())
}

mod analyzer;
mod config;
mod dashboard;
mod fetcher;
mod halvings;
mod model;
mod normalizer;
mod utils;

use analyzer::analyze_cycles;
use config::{AppConfig, load_config};
use fetcher::{MarketChartClient, PriceSource};
use halvings::halving_events;
use normalizer::normalize_pairs;
use tracing::{debug, error, info, warn};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Config file is optional; ambient knobs only (endpoint, currency, timeout).
    let config = match load_config("config.json") {
        Ok(Some(cfg)) => cfg,
        Ok(None) => {
            debug!("No config.json found, using defaults");
            AppConfig::default()
        }
        Err(e) => {
            warn!("Config load error: {e} — using defaults");
            AppConfig::default()
        }
    };

    let client = match MarketChartClient::new(&config) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to build HTTP client: {e}");
            dashboard::render_no_data();
            return;
        }
    };

    // One fetch per session; on failure the dashboard stays in its
    // "no data" state — no retry, no partial series.
    info!("Fetching full price history ({}, daily)...", config.vs_currency);
    let raw = match client.fetch_market_chart().await {
        Ok(rows) => rows,
        Err(e) => {
            error!("Price history fetch failed: {e}");
            dashboard::render_no_data();
            return;
        }
    };
    info!("Fetched {} price rows", raw.len());

    let points = normalize_pairs(&raw);
    if points.is_empty() {
        warn!("Price series is empty after normalization");
        dashboard::render_no_data();
        return;
    }

    let events = halving_events();
    info!(
        "Analyzing {} halving cycles over {} points",
        events.len(),
        points.len()
    );
    let analyses = analyze_cycles(&points, &events);

    dashboard::render(&points, &events, &analyses);
}

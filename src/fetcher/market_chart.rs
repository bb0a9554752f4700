use crate::config::AppConfig;
use crate::model::FetchError;

use super::traits::PriceSource;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Response shape of the market-chart endpoint. Only `prices` is
/// consumed; the remaining fields are ignored on deserialization.
#[derive(Debug, Deserialize)]
struct MarketChartResponse {
    prices: Vec<[f64; 2]>,
}

pub struct MarketChartClient {
    client: Client,
    base_url: String,
    vs_currency: String,
}

impl MarketChartClient {
    pub fn new(config: &AppConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent("halving-dash/0.1")
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| FetchError::Http(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            vs_currency: config.vs_currency.clone(),
        })
    }

    fn build_url(&self) -> String {
        format!(
            "{}/coins/bitcoin/market_chart?vs_currency={}&days=max&interval=daily",
            self.base_url, self.vs_currency
        )
    }
}

#[async_trait::async_trait]
impl PriceSource for MarketChartClient {
    async fn fetch_market_chart(&self) -> Result<Vec<[f64; 2]>, FetchError> {
        let url = self.build_url();

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let body: MarketChartResponse = response
            .json()
            .await
            .map_err(|e| FetchError::MalformedResponse(e.to_string()))?;

        Ok(body.prices)
    }
}

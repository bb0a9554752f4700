use crate::model::FetchError;

#[async_trait::async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetches the raw `[timestamp_millis, price]` rows for the full
    /// available history. Exactly one attempt; no retry.
    async fn fetch_market_chart(&self) -> Result<Vec<[f64; 2]>, FetchError>;
}

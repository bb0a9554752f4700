// Core structs: PricePoint, HalvingEvent, CycleAnalysis
use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// One daily close from the market-chart endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    /// Epoch milliseconds, UTC.
    pub timestamp: i64,
    pub price: f64,
}

/// A protocol halving event. The four known events are embedded as
/// constants in `halvings.rs` and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct HalvingEvent {
    pub date: NaiveDate,
    pub block_height: u64,
    /// Ordinal 1..=4.
    pub cycle: u8,
    /// Fallback price when the fetched series has no point at the event.
    pub price_at_halving: f64,
}

impl HalvingEvent {
    /// Event timestamp at UTC midnight, epoch milliseconds.
    pub fn timestamp_millis(&self) -> i64 {
        self.date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
    }
}

/// Post-halving peak within the 730-day search window.
#[derive(Debug, Clone, PartialEq)]
pub struct PeakStats {
    pub price: f64,
    /// None for the degenerate sentinel (empty post-window).
    pub date: Option<NaiveDate>,
    pub timestamp: i64,
    pub days_to_peak: i64,
    /// Gain from the halving price to the peak, percent.
    pub gain_pct: f64,
}

/// Post-peak trough within the first 365 points after the peak.
#[derive(Debug, Clone, PartialEq)]
pub struct TroughStats {
    pub price: f64,
    /// None for the degenerate sentinel (no post-peak data).
    pub date: Option<NaiveDate>,
    pub timestamp: i64,
    /// Decline from peak to trough, percent (negative or zero).
    pub drawdown_pct: f64,
}

/// Derived backtest record, one per halving event. Recomputed from
/// scratch on every analysis run; identity is the cycle ordinal only.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleAnalysis {
    pub cycle: u8,
    /// First price in the 365-day pre-window, 0 when empty.
    pub start_price: f64,
    /// Last price in the pre-window, falls back to the recorded halving price.
    pub halving_price: f64,
    pub pre_gain_pct: f64,
    pub peak: PeakStats,
    pub trough: TroughStats,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http request failed: {0}")]
    Http(String),
    #[error("unexpected response status: {0}")]
    Status(u16),
    #[error("malformed market chart response: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

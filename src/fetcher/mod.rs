// Fetcher module: the one outbound request for the full price history.

pub mod market_chart;
pub mod traits;

pub use market_chart::MarketChartClient;
pub use traits::PriceSource;

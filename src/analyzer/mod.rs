// Analyzer module: the pure backtest pass over the price series.

pub mod cycle;

pub use cycle::analyze_cycles;

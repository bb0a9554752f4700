use crate::model::{CycleAnalysis, HalvingEvent, PeakStats, PricePoint, TroughStats};
use crate::utils::date_from_millis;

const DAY_MS: i64 = 86_400_000;
/// Pre-event lookback window.
const PRE_WINDOW_DAYS: i64 = 365;
/// Post-event peak search window.
const POST_WINDOW_DAYS: i64 = 730;
/// Trough search is confined to this many points after the peak,
/// by count, not by calendar span.
const TROUGH_SCAN_POINTS: usize = 365;

/// Runs the backtest over the full ordered series, one record per
/// halving event. Pure and idempotent; events are analyzed
/// independently of each other.
///
/// The series is assumed non-empty and ascending by timestamp. Zero
/// divisors produce non-finite percentages which are surfaced as-is.
pub fn analyze_cycles(points: &[PricePoint], events: &[HalvingEvent]) -> Vec<CycleAnalysis> {
    events.iter().map(|event| analyze_cycle(points, event)).collect()
}

fn analyze_cycle(points: &[PricePoint], event: &HalvingEvent) -> CycleAnalysis {
    let t = event.timestamp_millis();

    // Pre-window [T - 365d, T]
    let pre: Vec<&PricePoint> = points
        .iter()
        .filter(|p| p.timestamp >= t - PRE_WINDOW_DAYS * DAY_MS && p.timestamp <= t)
        .collect();
    let start_price = pre.first().map(|p| p.price).unwrap_or(0.0);
    let halving_price = pre.last().map(|p| p.price).unwrap_or(event.price_at_halving);

    // Post-window (T, T + 730d]: earliest point with the maximum price.
    let peak_point = points
        .iter()
        .filter(|p| p.timestamp > t && p.timestamp <= t + POST_WINDOW_DAYS * DAY_MS)
        .copied()
        .reduce(|best, p| if p.price > best.price { p } else { best });

    let peak = match peak_point {
        Some(p) => PeakStats {
            price: p.price,
            date: Some(date_from_millis(p.timestamp)),
            timestamp: p.timestamp,
            days_to_peak: (p.timestamp - t) / DAY_MS,
            gain_pct: pct_change(halving_price, p.price),
        },
        // Zero-price sentinel: the event sits at the end of the series.
        // Carrying the event's own timestamp keeps days_to_peak at 0.
        None => PeakStats {
            price: 0.0,
            date: None,
            timestamp: t,
            days_to_peak: 0,
            gain_pct: pct_change(halving_price, 0.0),
        },
    };

    // Crash window: strictly after the peak, first 365 points in
    // chronological order regardless of how much more data exists.
    let trough_point = points
        .iter()
        .filter(|p| p.timestamp > peak.timestamp)
        .take(TROUGH_SCAN_POINTS)
        .copied()
        .reduce(|best, p| if p.price < best.price { p } else { best });

    let trough = match trough_point {
        Some(p) => TroughStats {
            price: p.price,
            date: Some(date_from_millis(p.timestamp)),
            timestamp: p.timestamp,
            drawdown_pct: pct_change(peak.price, p.price),
        },
        // No post-peak data: the trough re-uses the peak price, so the
        // drawdown reads as zero change rather than "insufficient data".
        None => TroughStats {
            price: peak.price,
            date: None,
            timestamp: 0,
            drawdown_pct: pct_change(peak.price, peak.price),
        },
    };

    CycleAnalysis {
        cycle: event.cycle,
        start_price,
        halving_price,
        pre_gain_pct: pct_change(start_price, halving_price),
        peak,
        trough,
    }
}

/// Percentage change from `from` to `to`. A zero base yields a
/// non-finite value on purpose.
fn pct_change(from: f64, to: f64) -> f64 {
    (to - from) / from * 100.0
}

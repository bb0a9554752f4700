// Terminal dashboard: price chart plus one summary card per cycle.
// Rendering only; nothing here feeds back into the analysis.
use crate::model::{CycleAnalysis, HalvingEvent, PricePoint};
use crate::utils::{date_from_millis, format_pct, format_usd};

const CHART_WIDTH: usize = 72;
const CHART_HEIGHT: usize = 12;

pub fn render(points: &[PricePoint], events: &[HalvingEvent], analyses: &[CycleAnalysis]) {
    println!();
    println!("  BTC/USD — {} daily closes", points.len());
    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        println!(
            "  {} .. {}   last close {}",
            date_from_millis(first.timestamp),
            date_from_millis(last.timestamp),
            format_usd(last.price)
        );
    }
    println!();
    for line in chart_lines(points, CHART_WIDTH, CHART_HEIGHT) {
        println!("  {line}");
    }
    println!();
    for (event, analysis) in events.iter().zip(analyses) {
        println!("{}", cycle_card(event, analysis));
    }
}

/// Shown when the load failed and the session has no data to display.
pub fn render_no_data() {
    println!();
    println!("  BTC/USD — loading...");
    println!("  No price data available this session.");
    println!();
}

fn cycle_card(event: &HalvingEvent, analysis: &CycleAnalysis) -> String {
    let peak_date = analysis
        .peak
        .date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "—".to_string());
    let trough_date = analysis
        .trough
        .date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "—".to_string());

    let mut card = String::new();
    card.push_str(&format!(
        "  ┌─ Cycle {} ── halving {} ── block {} ─┐\n",
        analysis.cycle, event.date, event.block_height
    ));
    card.push_str(&format!(
        "  │ Year before:  {} → {}  ({})\n",
        format_usd(analysis.start_price),
        format_usd(analysis.halving_price),
        format_pct(analysis.pre_gain_pct)
    ));
    card.push_str(&format!(
        "  │ Peak:         {} on {}  ({} days, {})\n",
        format_usd(analysis.peak.price),
        peak_date,
        analysis.peak.days_to_peak,
        format_pct(analysis.peak.gain_pct)
    ));
    card.push_str(&format!(
        "  │ Trough:       {} on {}  (drawdown {})\n",
        format_usd(analysis.trough.price),
        trough_date,
        format_pct(analysis.trough.drawdown_pct)
    ));
    card.push_str("  └──────────────────────────────────────────┘");
    card
}

/// Downsamples the series to `width` columns (mean price per bucket)
/// and renders a block-character chart, top row first.
fn chart_lines(points: &[PricePoint], width: usize, height: usize) -> Vec<String> {
    let columns = downsample(points, width);
    if columns.is_empty() {
        return Vec::new();
    }

    let max = columns.iter().cloned().fold(f64::MIN, f64::max);
    let min = columns.iter().cloned().fold(f64::MAX, f64::min);
    let span = (max - min).max(f64::EPSILON);

    let mut lines = Vec::with_capacity(height);
    for row in (0..height).rev() {
        let threshold = min + span * row as f64 / height as f64;
        let bars: String = columns
            .iter()
            .map(|&v| if v >= threshold { '█' } else { ' ' })
            .collect();
        let label = match row {
            r if r == height - 1 => format!("{:>12} ┤", format_usd(max)),
            0 => format!("{:>12} ┤", format_usd(min)),
            _ => format!("{:>12} ┤", ""),
        };
        lines.push(format!("{label}{bars}"));
    }
    lines
}

fn downsample(points: &[PricePoint], width: usize) -> Vec<f64> {
    if points.is_empty() || width == 0 {
        return Vec::new();
    }
    if points.len() <= width {
        return points.iter().map(|p| p.price).collect();
    }

    let mut columns = Vec::with_capacity(width);
    for i in 0..width {
        let start = i * points.len() / width;
        let end = ((i + 1) * points.len() / width).max(start + 1);
        let bucket = &points[start..end];
        let mean = bucket.iter().map(|p| p.price).sum::<f64>() / bucket.len() as f64;
        columns.push(mean);
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PeakStats, TroughStats};
    use chrono::NaiveDate;

    fn sample_analysis() -> (HalvingEvent, CycleAnalysis) {
        let event = HalvingEvent {
            date: NaiveDate::from_ymd_opt(2020, 5, 11).unwrap(),
            block_height: 630_000,
            cycle: 3,
            price_at_halving: 8_821.42,
        };
        let analysis = CycleAnalysis {
            cycle: 3,
            start_price: 5_800.0,
            halving_price: 8_821.42,
            pre_gain_pct: 52.1,
            peak: PeakStats {
                price: 67_566.83,
                date: NaiveDate::from_ymd_opt(2021, 11, 8),
                timestamp: 1_636_329_600_000,
                days_to_peak: 546,
                gain_pct: 665.94,
            },
            trough: TroughStats {
                price: 15_787.28,
                date: NaiveDate::from_ymd_opt(2022, 11, 9),
                timestamp: 1_667_952_000_000,
                drawdown_pct: -76.63,
            },
        };
        (event, analysis)
    }

    #[test]
    fn card_formats_money_and_percentages() {
        let (event, analysis) = sample_analysis();
        let card = cycle_card(&event, &analysis);
        assert!(card.contains("Cycle 3"));
        assert!(card.contains("block 630000"));
        assert!(card.contains("$67,566.83 on 2021-11-08"));
        assert!(card.contains("546 days"));
        assert!(card.contains("+665.94%"));
        assert!(card.contains("drawdown -76.63%"));
    }

    #[test]
    fn card_renders_sentinel_dates_as_dash() {
        let (event, mut analysis) = sample_analysis();
        analysis.trough.date = None;
        let card = cycle_card(&event, &analysis);
        assert!(card.contains("on —"));
    }

    #[test]
    fn downsample_short_series_is_identity() {
        let points: Vec<PricePoint> = (0..5)
            .map(|i| PricePoint { timestamp: i, price: i as f64 })
            .collect();
        assert_eq!(downsample(&points, 10), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn downsample_produces_requested_width() {
        let points: Vec<PricePoint> = (0..1000)
            .map(|i| PricePoint { timestamp: i, price: 1.0 })
            .collect();
        let columns = downsample(&points, 72);
        assert_eq!(columns.len(), 72);
        assert!(columns.iter().all(|&v| v == 1.0));
    }

    #[test]
    fn chart_has_height_rows_and_width_columns() {
        let points: Vec<PricePoint> = (0..1000)
            .map(|i| PricePoint { timestamp: i, price: i as f64 })
            .collect();
        let lines = chart_lines(&points, 72, 12);
        assert_eq!(lines.len(), 12);
        // Rising series: the last bucket must reach the top row.
        assert!(lines[0].ends_with('█'));
        // Every bucket clears the bottom threshold.
        assert_eq!(lines[11].chars().filter(|&c| c == '█').count(), 72);
    }
}

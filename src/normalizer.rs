use crate::model::PricePoint;
use tracing::warn;

/// Converts raw `[timestamp_millis, price]` rows into `PricePoint`s.
/// Source order is preserved; the endpoint already returns the series
/// in ascending timestamp order and it is not re-sorted here.
pub fn normalize_pairs(raw: &[[f64; 2]]) -> Vec<PricePoint> {
    let mut points = Vec::with_capacity(raw.len());
    let mut skipped = 0usize;

    for pair in raw {
        let [timestamp, price] = *pair;
        if !timestamp.is_finite() || !price.is_finite() {
            skipped += 1;
            continue;
        }
        points.push(PricePoint {
            timestamp: timestamp as i64,
            price,
        });
    }

    if skipped > 0 {
        warn!("Skipped {} malformed price rows", skipped);
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_rows_in_order() {
        let raw = [[1000.0, 10.5], [2000.0, 11.0], [3000.0, 9.75]];
        let points = normalize_pairs(&raw);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], PricePoint { timestamp: 1000, price: 10.5 });
        assert_eq!(points[2], PricePoint { timestamp: 3000, price: 9.75 });
    }

    #[test]
    fn skips_non_finite_rows() {
        let raw = [[1000.0, 10.0], [f64::NAN, 11.0], [3000.0, f64::INFINITY]];
        let points = normalize_pairs(&raw);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].timestamp, 1000);
    }

    #[test]
    fn empty_input_yields_empty_series() {
        assert!(normalize_pairs(&[]).is_empty());
    }
}

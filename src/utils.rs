// Utility functions
use chrono::{DateTime, NaiveDate};

/// Converts epoch milliseconds to a UTC calendar date.
pub fn date_from_millis(millis: i64) -> NaiveDate {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.date_naive())
        .unwrap_or_default()
}

/// Formats a USD amount with thousands grouping and two decimals,
/// e.g. `$63,842.00`. Non-finite values are printed as-is.
pub fn format_usd(value: f64) -> String {
    if !value.is_finite() {
        return format!("${value:.2}");
    }
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{frac:02}")
}

/// Formats a percentage with an explicit sign and two decimals.
/// Non-finite values pass through unmodified (`inf%`, `NaN%`).
pub fn format_pct(value: f64) -> String {
    format!("{value:+.2}%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn millis_to_date() {
        let date = date_from_millis(1_354_060_800_000);
        assert_eq!(date, NaiveDate::from_ymd_opt(2012, 11, 28).unwrap());
    }

    #[test]
    fn usd_grouping() {
        assert_eq!(format_usd(12.35), "$12.35");
        assert_eq!(format_usd(8_821.42), "$8,821.42");
        assert_eq!(format_usd(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_usd(-63_842.0), "-$63,842.00");
        assert_eq!(format_usd(0.0), "$0.00");
    }

    #[test]
    fn pct_two_decimals_with_sign() {
        assert_eq!(format_pct(100.0), "+100.00%");
        assert_eq!(format_pct(-25.0), "-25.00%");
        assert_eq!(format_pct(0.0), "+0.00%");
    }

    #[test]
    fn non_finite_pct_is_surfaced() {
        assert!(format_pct(f64::INFINITY).contains("inf"));
        assert!(format_pct(f64::NAN).contains("NaN"));
    }
}

//! Display formatting for amounts and timestamps.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use num_format::{Locale, ToFormattedString};

/// Formats `amount` with thousands separators and two decimals.
///
/// USD, EUR and GBP get a leading symbol, other codes are appended.
pub fn format_currency(amount: f64, currency: &str) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let number = format!(
        "{}.{:02}",
        (cents / 100).to_formatted_string(&Locale::en),
        cents % 100
    );
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };

    match currency.to_uppercase().as_str() {
        "USD" | "" => format!("{sign}${number}"),
        "EUR" => format!("{sign}€{number}"),
        "GBP" => format!("{sign}£{number}"),
        other => format!("{sign}{number} {other}"),
    }
}

/// Formats an ISO-8601 timestamp or date for tables. Unparsable input is
/// returned unchanged.
pub fn format_date(iso: &str) -> String {
    let trimmed = iso.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return dt.format("%b %d, %Y %H:%M").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%b %d, %Y %H:%M").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.format("%b %d, %Y").to_string();
    }
    iso.to_string()
}

/// Percentage (0-100, clamped) of `raised` over `goal`.
pub fn progress_percent(raised: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        return 0.0;
    }
    (raised / goal * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.5, "USD"), "$1,234.50");
        assert_eq!(format_currency(0.0, "usd"), "$0.00");
        assert_eq!(format_currency(-12.5, "EUR"), "-€12.50");
        assert_eq!(format_currency(1_000_000.0, "NGN"), "1,000,000.00 NGN");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-01-05T14:30:00Z"), "Jan 05, 2026 14:30");
        assert_eq!(format_date("2026-01-05T14:30:00.123"), "Jan 05, 2026 14:30");
        assert_eq!(format_date("2026-01-05"), "Jan 05, 2026");
        assert_eq!(format_date("yesterday"), "yesterday");
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(50.0, 200.0), 25.0);
        assert_eq!(progress_percent(500.0, 200.0), 100.0);
        assert_eq!(progress_percent(10.0, 0.0), 0.0);
    }
}

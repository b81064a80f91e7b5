//! Display formatting for amounts and dates.

use chrono::NaiveDate;

/// `$` followed by the value rounded to two decimals.
pub fn format_currency(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}", -value)
    } else {
        format!("${:.2}", value)
    }
}

/// Short US date, e.g. `Dec 31, 2025`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Parse an ISO `YYYY-MM-DD` date and format it with [`format_date`].
pub fn format_date_str(date: &str) -> Option<String> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .ok()
        .map(format_date)
}

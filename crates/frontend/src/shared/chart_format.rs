//! Label and number formatting for the revenue chart
//!
//! Kept separate from the components so it can be tested without a DOM.

use contracts::dashboards::d100_revenue_overview::BucketLabel;

/// X-axis tick text
///
/// Example: day -> "Mar 05", month -> "Mar", week -> "Week 2"
pub fn format_axis_label(label: &BucketLabel) -> String {
    match label {
        BucketLabel::Day(date) => date.format("%b %d").to_string(),
        BucketLabel::Month(date) => date.format("%b").to_string(),
        BucketLabel::Week(ordinal) => BucketLabel::week_name(*ordinal),
    }
}

/// Tooltip heading, more verbose than the axis tick
///
/// Example: day -> "Mar 05, 2026", month -> "Mar 2026"
pub fn format_tooltip_label(label: &BucketLabel) -> String {
    match label {
        BucketLabel::Day(date) => date.format("%b %d, %Y").to_string(),
        BucketLabel::Month(date) => date.format("%b %Y").to_string(),
        BucketLabel::Week(ordinal) => BucketLabel::week_name(*ordinal),
    }
}

/// Integer with comma thousands separator: 1234567 -> "1,234,567"
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if value < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Whole-dollar revenue: 12345.6 -> "$12,346"
pub fn format_revenue(value: f64) -> String {
    let rounded = value.round() as i64;
    if rounded < 0 {
        format!("-${}", format_thousands(-rounded))
    } else {
        format!("${}", format_thousands(rounded))
    }
}

/// Dollar amount with cents: 160.954 -> "$160.95", -0.5 -> "-$0.50"
pub fn format_money(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!(
        "{}${}.{:02}",
        sign,
        format_thousands((cents / 100) as i64),
        cents % 100
    )
}

/// Revenue Y-axis tick in thousands: 5000 -> "$5k", 5500 -> "$5.5k"
pub fn format_revenue_tick(value: f64) -> String {
    let tenths = (value / 100.0).round() as i64;
    let sign = if tenths < 0 { "-" } else { "" };
    let tenths = tenths.unsigned_abs();
    if tenths % 10 == 0 {
        format!("{}${}k", sign, tenths / 10)
    } else {
        format!("{}${}.{}k", sign, tenths / 10, tenths % 10)
    }
}

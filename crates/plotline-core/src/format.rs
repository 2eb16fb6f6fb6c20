// File: crates/plotline-core/src/format.rs
// Summary: Tick and tooltip label formatting for numbers and dates.

use std::fmt::Write as _;

use chrono::NaiveDateTime;

/// Date format used by time-axis tick labels.
pub const AXIS_DATE_FORMAT: &str = "%b %d";
/// Long date format used by tooltips, e.g. "Monday, January 6, 2025".
pub const TOOLTIP_DATE_FORMAT: &str = "%A, %B %-d, %Y";

/// Shortest decimal rendering: integers without a fraction, fractions with
/// trailing zeros trimmed, thousands grouped with commas.
pub fn format_number(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    let rounded = (v * 1e6).round() / 1e6;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let s = format!("{:.6}", rounded);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    let (sign, body) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s),
    };
    let (int, frac) = match body.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (body, None),
    };
    let mut grouped = String::with_capacity(int.len() + int.len() / 3);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    match frac {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Format a timestamp; an invalid format string falls back to ISO 8601.
pub fn format_time(t: &NaiveDateTime, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", t.format(format)).is_err() {
        return t.format("%Y-%m-%dT%H:%M:%S").to_string();
    }
    out
}

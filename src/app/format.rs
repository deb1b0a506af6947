//! Display formatting for dashboard values
//!
//! Numbers use one fixed locale: `.` groups thousands and `,` separates decimals
//! (`1.234.567`, `USD 4,99`).

use crate::constants::EMPTY_MARKER;

const THOUSANDS_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';

/// Rounded, grouped integer; NaN and infinities render as the empty marker
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return EMPTY_MARKER.to_string();
    }
    let rounded = value.round();
    let grouped = group_digits(&format!("{:.0}", rounded.abs()));
    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

pub fn format_count(value: u64) -> String {
    group_digits(&value.to_string())
}

/// Price with at most two decimals, e.g. `USD 1.299,5`
///
/// Non-finite prices render as `USD 0`.
pub fn format_price(value: f64) -> String {
    if !value.is_finite() {
        return "USD 0".to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };

    if fraction.is_empty() {
        format!("USD {}{}", sign, group_digits(integer))
    } else {
        format!(
            "USD {}{}{}{}",
            sign,
            group_digits(integer),
            DECIMAL_SEPARATOR,
            fraction
        )
    }
}

/// Fixed-point rendering where zero and NaN mean "no value"
pub fn format_fixed_or_empty(value: f64, decimals: usize) -> String {
    if value.is_finite() && value != 0.0 {
        format!("{:.*}", decimals, value)
    } else {
        EMPTY_MARKER.to_string()
    }
}

/// Truncate a label to `max_chars` characters, appending "..." when cut
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() > max_chars {
        let head: String = label.chars().take(max_chars).collect();
        format!("{}...", head)
    } else {
        label.to_string()
    }
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(THOUSANDS_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

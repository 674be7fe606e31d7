//! Display strings for calculation outputs.
//!
//! Formatting follows en-US conventions: `,` groups thousands, `.` separates
//! decimals. Quantities keep up to three fraction digits with trailing zeros
//! dropped; currency always shows two.

fn non_finite(value: f64) -> Option<String> {
    if value.is_nan() {
        Some("NaN".to_string())
    } else if value.is_infinite() {
        Some(if value > 0.0 { "∞" } else { "-∞" }.to_string())
    } else {
        None
    }
}

fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Renders `value` with `decimals` fixed fraction digits and grouped thousands,
/// without any sign.
fn grouped_abs(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    match fixed.split_once('.') {
        Some((int_part, frac)) => format!("{}.{}", group_thousands(int_part), frac),
        None => group_thousands(&fixed),
    }
}

/// Negative only if something non-zero survives rounding, so -0.0001 prints as "0".
fn is_visibly_negative(value: f64, decimals: usize) -> bool {
    value < 0.0
        && format!("{:.*}", decimals, value.abs())
            .chars()
            .any(|c| c.is_ascii_digit() && c != '0')
}

/// Plain quantity, e.g. `1680.0` → `"1,680"` and `2380.95238` → `"2,380.952"`.
pub fn format_number(value: f64) -> String {
    if let Some(s) = non_finite(value) {
        return s;
    }

    let grouped = grouped_abs(value, 3);
    let trimmed = grouped.trim_end_matches('0').trim_end_matches('.');
    if is_visibly_negative(value, 3) {
        format!("-{}", trimmed)
    } else {
        trimmed.to_string()
    }
}

/// Fixed-point with grouped thousands, e.g. `format_fixed(8333.333, 2)` → `"8,333.33"`.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if let Some(s) = non_finite(value) {
        return s;
    }

    let grouped = grouped_abs(value, decimals);
    if is_visibly_negative(value, decimals) {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Dollar amount with two decimals; the sign goes before the `$`.
pub fn format_currency(value: f64) -> String {
    if let Some(s) = non_finite(value) {
        return format!("${}", s);
    }

    let grouped = grouped_abs(value, 2);
    if is_visibly_negative(value, 2) {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

pub fn format_percentage(value: f64) -> String {
    match non_finite(value) {
        Some(s) => format!("{}%", s),
        None => format!("{}%", format_fixed(value, 1)),
    }
}

/// `None` comparisons render as "n/a".
pub fn format_optional_currency(value: Option<f64>) -> String {
    value.map(format_currency).unwrap_or_else(|| "n/a".to_string())
}

pub fn format_optional_percentage(value: Option<f64>) -> String {
    value.map(format_percentage).unwrap_or_else(|| "n/a".to_string())
}

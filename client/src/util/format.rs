//! Number formatting for tables, cards, and tickers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// `1234567.891` with 2 decimals → `"1,234,567.89"`.
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "—".to_owned();
    }
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }

    let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
    if value.is_sign_negative() && !is_zero { format!("-{grouped}") } else { grouped }
}

/// `-1234.5` → `"-$1,234.50"`.
pub fn format_currency(value: f64) -> String {
    let digits = format_number(value, 2);
    match digits.strip_prefix('-') {
        Some(rest) => format!("-${rest}"),
        None if value.is_finite() => format!("${digits}"),
        None => digits,
    }
}

/// Percent with an explicit sign for gains: `1.234` → `"+1.23%"`.
pub fn format_signed_percent(value: f64) -> String {
    let digits = format_number(value, 2);
    if value > 0.0 && digits != "0.00" { format!("+{digits}%") } else { format!("{digits}%") }
}

/// Plain percent: `4.2` → `"4.20%"`.
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_number(value, 2))
}

/// Large magnitudes with a suffix: `2.95e12` → `"2.95T"`.
pub fn format_compact(value: f64) -> String {
    const SCALES: [(f64, &str); 4] = [(1.0e12, "T"), (1.0e9, "B"), (1.0e6, "M"), (1.0e3, "K")];
    let abs = value.abs();
    for (scale, suffix) in SCALES {
        if abs >= scale {
            return format!("{}{suffix}", format_number(value / scale, 2));
        }
    }
    format_number(value, 2)
}

/// CSS modifier for a signed change.
pub fn change_class(value: f64) -> &'static str {
    if value > 0.0 {
        "positive"
    } else if value < 0.0 {
        "negative"
    } else {
        "neutral"
    }
}

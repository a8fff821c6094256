use super::*;

#[test]
fn format_number_groups_thousands() {
    assert_eq!(format_number(0.0, 2), "0.00");
    assert_eq!(format_number(999.0, 0), "999");
    assert_eq!(format_number(1_000.0, 0), "1,000");
    assert_eq!(format_number(1_234_567.891, 2), "1,234,567.89");
    assert_eq!(format_number(-12_345.6, 1), "-12,345.6");
}

#[test]
fn format_number_drops_sign_when_rounding_to_zero() {
    assert_eq!(format_number(-0.001, 2), "0.00");
    assert_eq!(format_number(f64::NAN, 2), "—");
}

#[test]
fn currency_places_sign_before_symbol() {
    assert_eq!(format_currency(1_234.5), "$1,234.50");
    assert_eq!(format_currency(-1_234.5), "-$1,234.50");
}

#[test]
fn signed_percent_marks_gains_only() {
    assert_eq!(format_signed_percent(1.234), "+1.23%");
    assert_eq!(format_signed_percent(-0.456), "-0.46%");
    assert_eq!(format_signed_percent(0.0), "0.00%");
    assert_eq!(format_percent(4.2), "4.20%");
}

#[test]
fn compact_picks_largest_suffix() {
    assert_eq!(format_compact(2.95e12), "2.95T");
    assert_eq!(format_compact(5.1e11), "510.00B");
    assert_eq!(format_compact(12_300.0), "12.30K");
    assert_eq!(format_compact(-3.4e6), "-3.40M");
    assert_eq!(format_compact(42.0), "42.00");
}

#[test]
fn change_class_by_sign() {
    assert_eq!(change_class(0.1), "positive");
    assert_eq!(change_class(-0.1), "negative");
    assert_eq!(change_class(0.0), "neutral");
}

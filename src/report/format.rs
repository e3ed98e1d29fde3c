//! Number formatting for the text report
//!
//! Monetary values are rounded half away from zero to 2 decimals, grouped
//! with `,` thousands separators and prefixed with the currency symbol.

use rust_decimal::{Decimal, RoundingStrategy};

/// Currency symbol prefixed to every monetary value
pub const CURRENCY_SYMBOL: &str = "₹";

fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a monetary value, e.g. `₹1,234,567.89`
pub fn format_currency(value: Decimal) -> String {
    let grouped = group_thousands(round_cents(value).abs());
    if value.is_sign_negative() && !round_cents(value).is_zero() {
        format!("-{CURRENCY_SYMBOL}{grouped}")
    } else {
        format!("{CURRENCY_SYMBOL}{grouped}")
    }
}

/// Format a percentage with 2 decimals, without the `%` sign
pub fn format_percentage(value: Decimal) -> String {
    format!("{:.2}", round_cents(value))
}

/// Render a non-negative value with 2 decimals and thousands separators
fn group_thousands(value: Decimal) -> String {
    let text = format!("{value:.2}");
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let digits = integer.len();
    let mut grouped = String::with_capacity(digits + digits / 3 + 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{grouped}.{fraction}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::zero(Decimal::ZERO, "₹0.00")]
    #[case::small(Decimal::new(5, 1), "₹0.50")]
    #[case::hundreds(Decimal::new(999, 0), "₹999.00")]
    #[case::thousand(Decimal::new(1000, 0), "₹1,000.00")]
    #[case::millions(Decimal::new(123456789, 2), "₹1,234,567.89")]
    #[case::round_half_up(Decimal::new(10005, 3), "₹10.01")]
    #[case::round_down(Decimal::new(10004, 3), "₹10.00")]
    #[case::carry_into_group(Decimal::new(9999995, 3), "₹10,000.00")]
    #[case::negative(Decimal::new(-150050, 2), "-₹1,500.50")]
    fn test_format_currency(#[case] value: Decimal, #[case] expected: &str) {
        assert_eq!(format_currency(value), expected);
    }

    #[rstest]
    #[case(Decimal::new(5591, 2), "55.91")]
    #[case(Decimal::ONE_HUNDRED, "100.00")]
    #[case(Decimal::new(33335, 3), "33.34")]
    #[case(Decimal::ZERO, "0.00")]
    fn test_format_percentage(#[case] value: Decimal, #[case] expected: &str) {
        assert_eq!(format_percentage(value), expected);
    }
}

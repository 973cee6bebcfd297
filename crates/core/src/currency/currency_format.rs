//! Locale-style amount rendering.
//!
//! Amounts are shown as a currency symbol prefix followed by the number with
//! en-US digit grouping and at most three fraction digits. Only the rupee has
//! a dedicated symbol; every other code renders with the fallback symbol.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::FALLBACK_CURRENCY_SYMBOL;

const MAX_FRACTION_DIGITS: u32 = 3;

/// Returns the prefix symbol for a currency code.
pub fn currency_symbol(currency: &str) -> &'static str {
    match currency {
        "INR" => "₹",
        _ => FALLBACK_CURRENCY_SYMBOL,
    }
}

/// Formats a number with thousands separators, e.g. `150000` -> `150,000`.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();

    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(integer));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Formats an amount for display in the given currency, e.g. `₹150,000`.
pub fn format_currency(amount: Decimal, currency: &str) -> String {
    format!("{}{}", currency_symbol(currency), format_amount(amount))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_currency_inr() {
        assert_eq!(format_currency(dec!(150000), "INR"), "₹150,000");
    }

    #[test]
    fn test_format_currency_unknown_code_uses_fallback_symbol() {
        assert_eq!(format_currency(dec!(150000), "XYZ"), "$150,000");
        assert_eq!(format_currency(dec!(150000), "EUR"), "$150,000");
    }

    #[test]
    fn test_format_amount_grouping() {
        assert_eq!(format_amount(dec!(0)), "0");
        assert_eq!(format_amount(dec!(999)), "999");
        assert_eq!(format_amount(dec!(1000)), "1,000");
        assert_eq!(format_amount(dec!(1234567)), "1,234,567");
        assert_eq!(format_amount(dec!(22000.00)), "22,000");
    }

    #[test]
    fn test_format_amount_fraction_digits() {
        assert_eq!(format_amount(dec!(1234.5)), "1,234.5");
        assert_eq!(format_amount(dec!(0.12345)), "0.123");
        assert_eq!(format_amount(dec!(2.0005)), "2.001");
    }

    #[test]
    fn test_format_currency_negative_places_sign_after_symbol() {
        assert_eq!(format_currency(dec!(-5000), "INR"), "₹-5,000");
    }
}

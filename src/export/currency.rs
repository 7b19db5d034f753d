//! US-dollar formatting for rendered statements.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount with thousands separators and two decimals, without a symbol.
///
/// Amounts are rounded half away from zero. A value that rounds to zero is
/// printed without a sign.
///
/// # Example
///
/// ```
/// use paystub_engine::export::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::new(123456, 2)), "1,234.56");
/// assert_eq!(format_amount(Decimal::new(-5, 1)), "-0.50");
/// ```
pub fn format_amount(value: Decimal) -> String {
    let (negative, digits) = split_rounded(value);
    if negative {
        format!("-{}", digits)
    } else {
        digits
    }
}

/// Formats a rate or hour count with two decimals and no grouping, e.g. `85000.00`.
///
/// Rounds half away from zero like the currency formatters.
///
/// # Example
///
/// ```
/// use paystub_engine::export::format_fixed;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_fixed(Decimal::new(85000, 0)), "85000.00");
/// assert_eq!(format_fixed(Decimal::new(8667, 2)), "86.67");
/// ```
pub fn format_fixed(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        format!("{:.2}", Decimal::ZERO)
    } else {
        format!("{:.2}", rounded)
    }
}

/// Formats an amount as US currency, e.g. `$1,234.56` or `-$1,234.56`.
///
/// # Example
///
/// ```
/// use paystub_engine::export::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(80350, 2)), "$803.50");
/// assert_eq!(format_currency(Decimal::new(-123456789, 2)), "-$1,234,567.89");
/// ```
pub fn format_currency(value: Decimal) -> String {
    let (negative, digits) = split_rounded(value);
    if negative {
        format!("-${}", digits)
    } else {
        format!("${}", digits)
    }
}

/// Rounds to cents and returns the sign and the grouped absolute value.
fn split_rounded(value: Decimal) -> (bool, String) {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let plain = format!("{:.2}", rounded.abs());
    let (whole, cents) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    (negative, format!("{}.{}", group_thousands(whole), cents))
}

fn group_thousands(whole: &str) -> String {
    let len = whole.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

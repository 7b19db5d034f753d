//! Calculation logic for the paystub engine.
//!
//! A statement is produced by a fixed pipeline: pay period resolution,
//! earnings, tax withholding, deductions and employer benefits, and finally
//! totals and the check number. Every stage is a pure function of the
//! configuration and returns an audit step describing what it did.

mod deductions;
mod earnings;
mod history;
mod pay_period;
mod paystub;
mod taxes;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

pub use deductions::{DeductionsResult, calculate_deductions};
pub use earnings::{
    EarningsResult, HOLIDAY, OVERTIME_MULTIPLIER, OVERTIME_PAY, OVERTIME_THRESHOLD_HOURS,
    REGULAR_PAY, SALARIED_DISPLAY_HOURS, SALARY, calculate_earnings,
};
pub use history::calculate_history;
pub use pay_period::{PAYROLL_LAG_DAYS, PayPeriodResolution, resolve_pay_period};
pub use paystub::{CHECK_NUMBER_BASE, CHECK_NUMBER_DIVISOR_MS, calculate_paystub, check_number};
pub use taxes::{MEDICARE_RATE, SOCIAL_SECURITY_RATE, TaxesResult, calculate_taxes};

/// Year-to-date figure for a per-period amount.
///
/// The engine assumes every period so far this year paid the same amount.
///
/// # Errors
///
/// Returns [`EngineError::AmountOverflow`] naming `field` if the product
/// does not fit in a [`Decimal`].
pub fn year_to_date(current: Decimal, periods_ytd: u32, field: &str) -> EngineResult<Decimal> {
    checked_product(current, Decimal::from(periods_ytd), field)
}

fn amount_overflow(field: &str) -> EngineError {
    EngineError::AmountOverflow {
        field: field.to_string(),
    }
}

pub(crate) fn checked_product(lhs: Decimal, rhs: Decimal, field: &str) -> EngineResult<Decimal> {
    lhs.checked_mul(rhs).ok_or_else(|| amount_overflow(field))
}

pub(crate) fn checked_difference(lhs: Decimal, rhs: Decimal, field: &str) -> EngineResult<Decimal> {
    lhs.checked_sub(rhs).ok_or_else(|| amount_overflow(field))
}

/// Adds amounts left to right, in the same order `Iterator::sum` would.
pub(crate) fn checked_total<I>(amounts: I, field: &str) -> EngineResult<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts.into_iter().try_fold(Decimal::ZERO, |total, amount| {
        total.checked_add(amount).ok_or_else(|| amount_overflow(field))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_to_date_multiplies_by_periods() {
        let ytd = year_to_date(Decimal::new(125050, 2), 12, "gross").unwrap();
        assert_eq!(ytd, Decimal::new(1500600, 2));
    }

    #[test]
    fn test_year_to_date_overflow_names_field() {
        let err = year_to_date(Decimal::MAX, 2, "Salary").unwrap_err();
        assert!(matches!(err, EngineError::AmountOverflow { ref field } if field == "Salary"));
    }

    #[test]
    fn test_checked_total_overflows_instead_of_panicking() {
        let err = checked_total([Decimal::MAX, Decimal::ONE], "total").unwrap_err();
        assert!(matches!(err, EngineError::AmountOverflow { .. }));
        assert_eq!(
            checked_total([Decimal::ONE, Decimal::TWO], "total").unwrap(),
            Decimal::new(3, 0)
        );
    }

    #[test]
    fn test_checked_difference_overflow() {
        assert!(checked_difference(Decimal::MIN, Decimal::ONE, "net").is_err());
        assert_eq!(
            checked_difference(Decimal::TEN, Decimal::ONE, "net").unwrap(),
            Decimal::new(9, 0)
        );
    }
}

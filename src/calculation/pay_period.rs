//! Pay period resolution.
//!
//! This module steps back from the configured pay date by a number of whole
//! periods and derives the worked window and the year-to-date period count
//! for the resulting statement.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, AuditWarning, EmploymentConfiguration, PayPeriod};

/// Days between the close of a pay period and its check date.
pub const PAYROLL_LAG_DAYS: u64 = 2;

/// The result of resolving a pay period, including the audit step.
#[derive(Debug, Clone)]
pub struct PayPeriodResolution {
    /// The resolved period.
    pub pay_period: PayPeriod,
    /// Warnings raised while resolving.
    pub warnings: Vec<AuditWarning>,
    /// The audit step recording this resolution.
    pub audit_step: AuditStep,
}

/// Subtracts whole days from a date, failing if the result is unrepresentable.
pub(crate) fn days_before(date: NaiveDate, days: u64) -> EngineResult<NaiveDate> {
    date.checked_sub_days(Days::new(days))
        .ok_or(EngineError::DateOutOfRange { date, days })
}

/// Resolves the pay period `offset_periods` periods before the configured pay date.
///
/// - The check date is `pay_date - offset_periods * period_days`.
/// - The period ends [`PAYROLL_LAG_DAYS`] before the check date and spans
///   exactly `period_days` days inclusive.
/// - Year-to-date counting starts at the later of January 1 of the check
///   date's year and the hire date. A check date before that start counts as
///   a single period.
///
/// # Errors
///
/// Returns [`EngineError::DateOutOfRange`] if stepping back leaves the
/// calendar range supported by `chrono`.
///
/// # Examples
///
/// ```
/// use paystub_engine::calculation::resolve_pay_period;
/// # use paystub_engine::models::*;
/// # use chrono::NaiveDate;
/// # use rust_decimal::Decimal;
/// # let config = EmploymentConfiguration {
/// #     company_name: String::new(), company_address: Address::default(),
/// #     employee_name: String::new(), employee_address: Address::default(),
/// #     employee_id: String::new(), ssn_last4: String::new(), account_last4: String::new(),
/// #     marital_status: String::new(), exemptions: 0,
/// #     hire_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
/// #     pay_date: NaiveDate::from_ymd_opt(2024, 6, 14).unwrap(),
/// #     pay_frequency: PayFrequency::BiWeekly, employment_type: EmploymentType::Hourly,
/// #     hourly_rate: Decimal::new(25, 0), hours_per_week: Decimal::new(40, 0),
/// #     annual_salary: Decimal::ZERO, federal_tax_rate: Decimal::new(12, 0),
/// #     state_tax_rate: Decimal::ZERO, include_random_deductions: false,
/// #     time_off: TimeOffBalances::default(),
/// # };
/// let resolution = resolve_pay_period(&config, 1, 1).unwrap();
/// assert_eq!(resolution.pay_period.pay_date, NaiveDate::from_ymd_opt(2024, 5, 31).unwrap());
/// assert_eq!(resolution.pay_period.end_date, NaiveDate::from_ymd_opt(2024, 5, 29).unwrap());
/// ```
pub fn resolve_pay_period(
    config: &EmploymentConfiguration,
    offset_periods: u32,
    step_number: u32,
) -> EngineResult<PayPeriodResolution> {
    let period_days = config.pay_frequency.period_days();
    let offset_days = u64::from(offset_periods) * u64::from(period_days);

    let pay_date = days_before(config.pay_date, offset_days)?;
    let end_date = days_before(pay_date, PAYROLL_LAG_DAYS)?;
    let start_date = days_before(end_date, u64::from(period_days) - 1)?;

    let year_start = pay_date
        .with_ordinal(1)
        .ok_or(EngineError::DateOutOfRange {
            date: pay_date,
            days: u64::from(pay_date.ordinal0()),
        })?;
    let ytd_start = year_start.max(config.hire_date);

    let mut warnings = Vec::new();
    let raw_days_elapsed = (pay_date - ytd_start).num_days();
    if raw_days_elapsed < 0 {
        warnings.push(AuditWarning::new(
            "HIRE_AFTER_PAY_DATE",
            format!(
                "Hire date {} is after pay date {}; counting a single period year to date",
                config.hire_date, pay_date
            ),
            "medium",
        ));
    }
    let days_elapsed = raw_days_elapsed.max(0);
    let periods_ytd = (days_elapsed / i64::from(period_days)) as u32 + 1;

    let audit_step = AuditStep {
        step_number,
        rule_id: "pay_period_resolution".to_string(),
        rule_name: "Pay Period Resolution".to_string(),
        input: serde_json::json!({
            "pay_date": config.pay_date.to_string(),
            "hire_date": config.hire_date.to_string(),
            "pay_frequency": config.pay_frequency.label(),
            "offset_periods": offset_periods
        }),
        output: serde_json::json!({
            "pay_date": pay_date.to_string(),
            "start_date": start_date.to_string(),
            "end_date": end_date.to_string(),
            "ytd_start": ytd_start.to_string(),
            "days_elapsed": days_elapsed,
            "periods_ytd": periods_ytd
        }),
        reasoning: format!(
            "{} days elapsed since {} at {} days per period = {} periods year to date",
            days_elapsed, ytd_start, period_days, periods_ytd
        ),
    };

    Ok(PayPeriodResolution {
        pay_period: PayPeriod {
            start_date,
            end_date,
            pay_date,
            period_days,
            ytd_start,
            periods_ytd,
        },
        warnings,
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PayFrequency;
    use crate::test_fixtures::hourly_configuration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_offset_zero_uses_configured_pay_date() {
        let config = hourly_configuration();
        let period = resolve_pay_period(&config, 0, 1).unwrap().pay_period;

        assert_eq!(period.pay_date, date(2024, 6, 14));
        assert_eq!(period.end_date, date(2024, 6, 12));
        assert_eq!(period.start_date, date(2024, 5, 30));
        assert_eq!(period.length_in_days(), 14);
    }

    #[test]
    fn test_biweekly_periods_ytd() {
        // 165 days from Jan 1 to Jun 14 in a leap year: 165 / 14 = 11, plus the current period
        let config = hourly_configuration();
        let period = resolve_pay_period(&config, 0, 1).unwrap().pay_period;

        assert_eq!(period.ytd_start, date(2024, 1, 1));
        assert_eq!(period.periods_ytd, 12);
    }

    #[test]
    fn test_offset_steps_back_whole_periods() {
        let config = hourly_configuration();
        let period = resolve_pay_period(&config, 3, 1).unwrap().pay_period;

        assert_eq!(period.pay_date, date(2024, 5, 3));
        assert_eq!(period.periods_ytd, 9);
    }

    #[test]
    fn test_offset_can_cross_into_previous_year() {
        let config = hourly_configuration();
        // 12 periods back from 2024-06-14 is 2023-12-29
        let period = resolve_pay_period(&config, 12, 1).unwrap().pay_period;

        assert_eq!(period.pay_date, date(2023, 12, 29));
        // YTD starts at the 2023-01-15 hire date, not Jan 1
        assert_eq!(period.ytd_start, date(2023, 1, 15));
        assert_eq!(period.periods_ytd, 348 / 14 + 1);
    }

    #[test]
    fn test_mid_year_hire_starts_ytd_at_hire_date() {
        let mut config = hourly_configuration();
        config.hire_date = date(2024, 5, 1);
        let period = resolve_pay_period(&config, 0, 1).unwrap().pay_period;

        assert_eq!(period.ytd_start, date(2024, 5, 1));
        // 44 days / 14 = 3, plus one
        assert_eq!(period.periods_ytd, 4);
    }

    #[test]
    fn test_hire_after_pay_date_counts_one_period_and_warns() {
        let mut config = hourly_configuration();
        config.hire_date = date(2024, 9, 1);
        let resolution = resolve_pay_period(&config, 0, 1).unwrap();

        assert_eq!(resolution.pay_period.periods_ytd, 1);
        assert_eq!(resolution.warnings.len(), 1);
        assert_eq!(resolution.warnings[0].code, "HIRE_AFTER_PAY_DATE");
    }

    #[test]
    fn test_pay_date_on_january_first_is_first_period() {
        let mut config = hourly_configuration();
        config.pay_date = date(2025, 1, 1);
        let period = resolve_pay_period(&config, 0, 1).unwrap().pay_period;

        assert_eq!(period.periods_ytd, 1);
        assert_eq!(period.start_date, date(2024, 12, 17));
    }

    #[test]
    fn test_monthly_window_is_thirty_days() {
        let mut config = hourly_configuration();
        config.pay_frequency = PayFrequency::Monthly;
        let period = resolve_pay_period(&config, 0, 1).unwrap().pay_period;

        assert_eq!(period.length_in_days(), 30);
        assert_eq!(period.end_date, date(2024, 6, 12));
        assert_eq!(period.start_date, date(2024, 5, 14));
    }

    #[test]
    fn test_out_of_range_offset_returns_error() {
        let mut config = hourly_configuration();
        config.pay_date = NaiveDate::MIN;
        let result = resolve_pay_period(&config, 1, 1);

        match result.unwrap_err() {
            EngineError::DateOutOfRange { date, days } => {
                assert_eq!(date, NaiveDate::MIN);
                assert_eq!(days, 14);
            }
            other => panic!("Expected DateOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_audit_step_records_periods_ytd() {
        let config = hourly_configuration();
        let resolution = resolve_pay_period(&config, 0, 7).unwrap();

        assert_eq!(resolution.audit_step.step_number, 7);
        assert_eq!(resolution.audit_step.rule_id, "pay_period_resolution");
        assert_eq!(resolution.audit_step.output["periods_ytd"], 12);
        assert_eq!(resolution.audit_step.output["pay_date"], "2024-06-14");
    }
}

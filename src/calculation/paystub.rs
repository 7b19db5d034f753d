//! Pay statement assembly.
//!
//! This module runs the calculation pipeline (period, earnings, taxes,
//! deductions) and totals the results into a [`CalculatedPaystub`].

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use tracing::debug;

use super::{
    calculate_deductions, calculate_earnings, calculate_taxes, checked_difference, checked_total,
    resolve_pay_period,
};
use crate::error::EngineResult;
use crate::models::{AuditStep, AuditTrace, CalculatedPaystub, EmploymentConfiguration};

/// Base added to every check number.
pub const CHECK_NUMBER_BASE: i64 = 1000;

/// Milliseconds of pay-date time per check number increment.
pub const CHECK_NUMBER_DIVISOR_MS: i64 = 100_000_000;

/// Derives a pseudo check number from the check date and offset.
///
/// `1000 + floor(epoch_millis(pay_date at 00:00 UTC) / 100_000_000) + offset`.
/// Not a real sequence; distant offsets may collide.
///
/// # Example
///
/// ```
/// use paystub_engine::calculation::check_number;
/// use chrono::NaiveDate;
///
/// let pay_date = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
/// assert_eq!(check_number(pay_date, 0), 18183);
/// ```
pub fn check_number(pay_date: NaiveDate, offset_periods: u32) -> i64 {
    let epoch_millis = pay_date.and_time(NaiveTime::MIN).and_utc().timestamp_millis();
    CHECK_NUMBER_BASE + epoch_millis.div_euclid(CHECK_NUMBER_DIVISOR_MS) + i64::from(offset_periods)
}

/// Calculates the pay statement `offset_periods` periods before the configured pay date.
///
/// Offset 0 is the most recent statement. The function is pure: the same
/// configuration and offset always yield an identical statement.
///
/// # Errors
///
/// - [`EngineError::DateOutOfRange`](crate::error::EngineError::DateOutOfRange)
///   if the offset steps outside the supported calendar.
/// - [`EngineError::AmountOverflow`](crate::error::EngineError::AmountOverflow)
///   if an amount, its year-to-date figure or a total does not fit in a
///   [`Decimal`].
///
/// # Examples
///
/// ```
/// use paystub_engine::calculation::calculate_paystub;
/// # use paystub_engine::models::*;
/// # use chrono::NaiveDate;
/// use rust_decimal::Decimal;
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
/// let paystub = calculate_paystub(&config, 0).unwrap();
/// assert_eq!(paystub.gross_pay_current, Decimal::new(1000, 0));
/// assert_eq!(paystub.net_pay_current, Decimal::new(80350, 2));
/// ```
pub fn calculate_paystub(
    config: &EmploymentConfiguration,
    offset_periods: u32,
) -> EngineResult<CalculatedPaystub> {
    let mut step_number: u32 = 1;
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings = Vec::new();

    let resolution = resolve_pay_period(config, offset_periods, step_number)?;
    let period = resolution.pay_period;
    steps.push(resolution.audit_step);
    warnings.extend(resolution.warnings);
    step_number += 1;

    let earnings = calculate_earnings(config, period.periods_ytd, step_number)?;
    steps.push(earnings.audit_step);
    warnings.extend(earnings.warnings);
    step_number += 1;

    let gross_pay_current = earnings.gross_pay_current;
    let gross_pay_ytd = earnings.gross_pay_ytd;

    let taxes = calculate_taxes(config, gross_pay_current, period.periods_ytd, step_number)?;
    steps.push(taxes.audit_step);
    warnings.extend(taxes.warnings);
    step_number += 1;

    let deductions = calculate_deductions(
        gross_pay_current,
        config.include_random_deductions,
        period.periods_ytd,
        step_number,
    )?;
    steps.push(deductions.audit_step);
    step_number += 1;

    let deductions_only_current: Decimal = deductions.deductions.iter().map(|d| d.current).sum();
    let deductions_only_ytd: Decimal = deductions.deductions.iter().map(|d| d.ytd).sum();

    let total_deductions_current = checked_total(
        [taxes.taxes.total_current(), deductions_only_current],
        "total_deductions_current",
    )?;
    let total_deductions_ytd = checked_total(
        [taxes.taxes.total_ytd(), deductions_only_ytd],
        "total_deductions_ytd",
    )?;

    let net_pay_current =
        checked_difference(gross_pay_current, total_deductions_current, "net_pay_current")?;
    let net_pay_ytd = checked_difference(gross_pay_ytd, total_deductions_ytd, "net_pay_ytd")?;

    let check_number = check_number(period.pay_date, offset_periods);

    steps.push(AuditStep {
        step_number,
        rule_id: "net_pay".to_string(),
        rule_name: "Net Pay".to_string(),
        input: serde_json::json!({
            "gross_pay_current": gross_pay_current.to_string(),
            "total_taxes_current": taxes.taxes.total_current().to_string(),
            "total_deductions_only_current": deductions_only_current.to_string()
        }),
        output: serde_json::json!({
            "net_pay_current": net_pay_current.to_string(),
            "net_pay_ytd": net_pay_ytd.to_string(),
            "check_number": check_number
        }),
        reasoning: format!(
            "${} - ${} = ${}",
            gross_pay_current.round_dp(2),
            total_deductions_current.round_dp(2),
            net_pay_current.round_dp(2)
        ),
    });

    debug!(
        offset_periods,
        pay_date = %period.pay_date,
        periods_ytd = period.periods_ytd,
        gross_pay = %gross_pay_current,
        net_pay = %net_pay_current,
        "Calculated paystub"
    );

    Ok(CalculatedPaystub {
        period_start_date: period.start_date,
        period_end_date: period.end_date,
        pay_date: period.pay_date,
        check_number,
        periods_ytd: period.periods_ytd,
        rate: earnings.display_rate,
        hours: earnings.display_hours,
        earnings: earnings.items,
        gross_pay_current,
        gross_pay_ytd,
        taxes: taxes.taxes,
        deductions: deductions.deductions,
        total_deductions_current,
        total_deductions_ytd,
        employer_benefits: deductions.employer_benefits,
        net_pay_current,
        net_pay_ytd,
        audit_trace: AuditTrace { steps, warnings },
    })
}

//! Earnings calculation.
//!
//! This module derives the earnings lines and gross pay for one period.
//! Hourly employees are paid straight time up to [`OVERTIME_THRESHOLD_HOURS`]
//! and time-and-a-half beyond it; salaried employees receive an equal share
//! of their annual salary each period.

use rust_decimal::Decimal;

use super::{checked_difference, checked_product, checked_total, year_to_date};
use crate::error::EngineResult;
use crate::models::{AuditStep, AuditWarning, EarningsItem, EmploymentConfiguration, EmploymentType};

/// Weekly hours paid at the regular rate before overtime applies.
pub const OVERTIME_THRESHOLD_HOURS: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Multiplier applied to the hourly rate for overtime hours.
pub const OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Hours printed for salaried employees (average monthly hours).
pub const SALARIED_DISPLAY_HOURS: Decimal = Decimal::from_parts(8667, 0, 0, false, 2);

/// Line labels used on the statement.
pub const REGULAR_PAY: &str = "Regular Pay";
/// Overtime line label.
pub const OVERTIME_PAY: &str = "Overtime Pay";
/// Salary line label.
pub const SALARY: &str = "Salary";
/// Holiday placeholder line label.
pub const HOLIDAY: &str = "Holiday";

/// The result of calculating earnings, including the audit step.
#[derive(Debug, Clone)]
pub struct EarningsResult {
    /// Earnings lines in statement order.
    pub items: Vec<EarningsItem>,
    /// Gross pay for the period.
    pub gross_pay_current: Decimal,
    /// Gross pay year to date.
    pub gross_pay_ytd: Decimal,
    /// Rate shown in the statement header.
    pub display_rate: Decimal,
    /// Hours shown in the statement header.
    pub display_hours: Decimal,
    /// Warnings raised while calculating.
    pub warnings: Vec<AuditWarning>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

fn earnings_item(
    name: &str,
    rate: Decimal,
    hours: Decimal,
    current: Decimal,
    periods_ytd: u32,
) -> EngineResult<EarningsItem> {
    Ok(EarningsItem {
        name: name.to_string(),
        rate,
        hours,
        current,
        ytd: year_to_date(current, periods_ytd, name)?,
    })
}

/// Calculates the earnings lines and gross pay for one period.
///
/// # Arguments
///
/// * `config` - The employment configuration
/// * `periods_ytd` - Number of periods counted into year-to-date figures
/// * `step_number` - The step number for audit trail sequencing
///
/// # Errors
///
/// Returns [`EngineError::AmountOverflow`](crate::error::EngineError::AmountOverflow)
/// if a rate, hours or salary is too large for the arithmetic.
///
/// # Examples
///
/// ```
/// use paystub_engine::calculation::calculate_earnings;
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
/// #     hourly_rate: Decimal::new(25, 0), hours_per_week: Decimal::new(45, 0),
/// #     annual_salary: Decimal::ZERO, federal_tax_rate: Decimal::new(12, 0),
/// #     state_tax_rate: Decimal::ZERO, include_random_deductions: false,
/// #     time_off: TimeOffBalances::default(),
/// # };
/// // 40h x $25 + 5h x $37.50
/// let result = calculate_earnings(&config, 1, 2).unwrap();
/// assert_eq!(result.gross_pay_current, Decimal::new(118750, 2));
/// assert_eq!(result.items.len(), 2);
/// ```
pub fn calculate_earnings(
    config: &EmploymentConfiguration,
    periods_ytd: u32,
    step_number: u32,
) -> EngineResult<EarningsResult> {
    let mut items = Vec::new();
    let mut warnings = Vec::new();

    let (gross_pay_current, display_rate, display_hours, reasoning) = match config.employment_type {
        EmploymentType::Hourly => {
            let regular_hours = config.hours_per_week.min(OVERTIME_THRESHOLD_HOURS);
            let overtime_hours =
                checked_difference(config.hours_per_week, OVERTIME_THRESHOLD_HOURS, OVERTIME_PAY)?
                    .max(Decimal::ZERO);
            let overtime_rate = checked_product(config.hourly_rate, OVERTIME_MULTIPLIER, OVERTIME_PAY)?;

            let regular_pay = checked_product(regular_hours, config.hourly_rate, REGULAR_PAY)?;
            let overtime_pay = checked_product(overtime_hours, overtime_rate, OVERTIME_PAY)?;

            items.push(earnings_item(
                REGULAR_PAY,
                config.hourly_rate,
                regular_hours,
                regular_pay,
                periods_ytd,
            )?);
            if overtime_hours > Decimal::ZERO {
                items.push(earnings_item(
                    OVERTIME_PAY,
                    overtime_rate,
                    overtime_hours,
                    overtime_pay,
                    periods_ytd,
                )?);
            }

            let gross = checked_total([regular_pay, overtime_pay], "gross_pay")?;
            let reasoning = format!(
                "{}h x ${} + {}h x ${} = ${}",
                regular_hours.normalize(),
                config.hourly_rate.normalize(),
                overtime_hours.normalize(),
                overtime_rate.normalize(),
                gross.normalize()
            );
            (gross, config.hourly_rate, config.hours_per_week, reasoning)
        }
        EmploymentType::Salary => {
            let periods_per_year = config.pay_frequency.periods_per_year();
            let gross = config.annual_salary / Decimal::from(periods_per_year);

            items.push(earnings_item(
                SALARY,
                config.annual_salary,
                SALARIED_DISPLAY_HOURS,
                gross,
                periods_ytd,
            )?);

            let reasoning = format!(
                "${} / {} periods per year = ${}",
                config.annual_salary.normalize(),
                periods_per_year,
                gross.round_dp(2)
            );
            (gross, config.annual_salary, SALARIED_DISPLAY_HOURS, reasoning)
        }
    };

    if config.include_random_deductions {
        items.push(earnings_item(
            HOLIDAY,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            periods_ytd,
        )?);
    }

    if gross_pay_current < Decimal::ZERO {
        warnings.push(AuditWarning::new(
            "NEGATIVE_GROSS_PAY",
            format!("Gross pay is negative (${})", gross_pay_current.round_dp(2)),
            "high",
        ));
    }

    let gross_pay_ytd = year_to_date(gross_pay_current, periods_ytd, "gross_pay_ytd")?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "earnings".to_string(),
        rule_name: "Earnings".to_string(),
        input: serde_json::json!({
            "employment_type": config.employment_type,
            "hourly_rate": config.hourly_rate.to_string(),
            "hours_per_week": config.hours_per_week.to_string(),
            "annual_salary": config.annual_salary.to_string(),
            "periods_ytd": periods_ytd
        }),
        output: serde_json::json!({
            "lines": items.iter().map(|i| i.name.as_str()).collect::<Vec<_>>(),
            "gross_pay_current": gross_pay_current.to_string(),
            "gross_pay_ytd": gross_pay_ytd.to_string()
        }),
        reasoning,
    };

    Ok(EarningsResult {
        items,
        gross_pay_current,
        gross_pay_ytd,
        display_rate,
        display_hours,
        warnings,
        audit_step,
    })
}

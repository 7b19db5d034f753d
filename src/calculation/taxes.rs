//! Tax withholding calculation.
//!
//! All four taxes are flat percentages of gross pay. Pre-tax deductions do
//! not reduce the taxable base.

use rust_decimal::Decimal;

use super::{checked_product, checked_total, year_to_date};
use crate::error::EngineResult;
use crate::models::{AuditStep, AuditWarning, EmploymentConfiguration, TaxAmount, TaxBreakdown};

/// Employee Social Security rate (6.2%).
pub const SOCIAL_SECURITY_RATE: Decimal = Decimal::from_parts(62, 0, 0, false, 3);

/// Employee Medicare rate (1.45%).
pub const MEDICARE_RATE: Decimal = Decimal::from_parts(145, 0, 0, false, 4);

/// The result of calculating taxes, including the audit step.
#[derive(Debug, Clone)]
pub struct TaxesResult {
    /// The four withholding lines.
    pub taxes: TaxBreakdown,
    /// Warnings raised while calculating.
    pub warnings: Vec<AuditWarning>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

fn tax_amount(
    gross_pay: Decimal,
    rate: Decimal,
    periods_ytd: u32,
    field: &str,
) -> EngineResult<TaxAmount> {
    let current = checked_product(gross_pay, rate, field)?;
    Ok(TaxAmount {
        current,
        ytd: year_to_date(current, periods_ytd, field)?,
    })
}

fn percentage_warning(field: &str, percent: Decimal) -> Option<AuditWarning> {
    if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
        Some(AuditWarning::new(
            "TAX_RATE_OUT_OF_RANGE",
            format!("{} of {}% is outside 0-100%", field, percent.normalize()),
            "medium",
        ))
    } else {
        None
    }
}

/// Calculates federal, Social Security, Medicare and state withholding.
///
/// # Errors
///
/// Returns [`EngineError::AmountOverflow`](crate::error::EngineError::AmountOverflow)
/// if a tax amount or its total does not fit in a [`Decimal`].
///
/// # Examples
///
/// ```
/// use paystub_engine::calculation::calculate_taxes;
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
/// let result = calculate_taxes(&config, Decimal::new(1000, 0), 1, 3).unwrap();
/// assert_eq!(result.taxes.social_security.current, Decimal::new(62, 0));
/// assert_eq!(result.taxes.medicare.current, Decimal::new(1450, 2));
/// ```
pub fn calculate_taxes(
    config: &EmploymentConfiguration,
    gross_pay: Decimal,
    periods_ytd: u32,
    step_number: u32,
) -> EngineResult<TaxesResult> {
    let federal_rate = config.federal_tax_rate / Decimal::ONE_HUNDRED;
    let state_rate = config.state_tax_rate / Decimal::ONE_HUNDRED;

    let taxes = TaxBreakdown {
        federal: tax_amount(gross_pay, federal_rate, periods_ytd, "federal_tax")?,
        social_security: tax_amount(gross_pay, SOCIAL_SECURITY_RATE, periods_ytd, "social_security")?,
        medicare: tax_amount(gross_pay, MEDICARE_RATE, periods_ytd, "medicare")?,
        state: tax_amount(gross_pay, state_rate, periods_ytd, "state_tax")?,
    };
    // Checked here so the unchecked totals on TaxBreakdown are safe afterwards.
    let total_current = checked_total(
        [
            taxes.federal.current,
            taxes.social_security.current,
            taxes.medicare.current,
            taxes.state.current,
        ],
        "total_taxes_current",
    )?;
    checked_total(
        [
            taxes.federal.ytd,
            taxes.social_security.ytd,
            taxes.medicare.ytd,
            taxes.state.ytd,
        ],
        "total_taxes_ytd",
    )?;

    let warnings: Vec<AuditWarning> = [
        percentage_warning("federal_tax_rate", config.federal_tax_rate),
        percentage_warning("state_tax_rate", config.state_tax_rate),
    ]
    .into_iter()
    .flatten()
    .collect();

    let audit_step = AuditStep {
        step_number,
        rule_id: "tax_withholding".to_string(),
        rule_name: "Tax Withholding".to_string(),
        input: serde_json::json!({
            "gross_pay": gross_pay.to_string(),
            "federal_tax_rate": config.federal_tax_rate.to_string(),
            "state_tax_rate": config.state_tax_rate.to_string(),
            "social_security_rate": SOCIAL_SECURITY_RATE.to_string(),
            "medicare_rate": MEDICARE_RATE.to_string()
        }),
        output: serde_json::json!({
            "federal": taxes.federal.current.to_string(),
            "social_security": taxes.social_security.current.to_string(),
            "medicare": taxes.medicare.current.to_string(),
            "state": taxes.state.current.to_string(),
            "total_current": total_current.to_string()
        }),
        reasoning: format!(
            "Taxes on gross ${}: total ${} this period",
            gross_pay.round_dp(2),
            total_current.round_dp(2)
        ),
    };

    Ok(TaxesResult {
        taxes,
        warnings,
        audit_step,
    })
}

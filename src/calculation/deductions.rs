//! Deductions and employer benefits.
//!
//! When the benefits package is enabled, a fixed set of pre-tax and post-tax
//! deductions is withheld and two employer contributions are listed for
//! information. Percentage-based amounts are floored to whole dollars.

use rust_decimal::Decimal;

use super::{checked_product, checked_total, year_to_date};
use crate::error::EngineResult;
use crate::models::{AuditStep, BenefitItem, DeductionItem};

const MEDICAL_RATE: Decimal = Decimal::from_parts(3, 0, 0, false, 2);
const RETIREMENT_RATE: Decimal = Decimal::from_parts(4, 0, 0, false, 2);
const DENTAL: Decimal = Decimal::from_parts(1500, 0, 0, false, 2);
const VISION: Decimal = Decimal::from_parts(850, 0, 0, false, 2);
const HSA: Decimal = Decimal::from_parts(5000, 0, 0, false, 2);
const CRITICAL_ILLNESS: Decimal = Decimal::from_parts(1250, 0, 0, false, 2);
const SUPPORT: Decimal = Decimal::from_parts(0, 0, 0, false, 2);

const EMPLOYER_MEDICAL_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);
const EMPLOYER_RETIREMENT_MATCH_RATE: Decimal = Decimal::from_parts(3, 0, 0, false, 2);

/// The result of calculating deductions and benefits, including the audit step.
#[derive(Debug, Clone)]
pub struct DeductionsResult {
    /// Employee deductions: five pre-tax, then two post-tax.
    pub deductions: Vec<DeductionItem>,
    /// Employer contributions (informational).
    pub employer_benefits: Vec<BenefitItem>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

fn deduction(
    name: &str,
    current: Decimal,
    is_pre_tax: bool,
    periods_ytd: u32,
) -> EngineResult<DeductionItem> {
    Ok(DeductionItem {
        name: name.to_string(),
        current,
        ytd: year_to_date(current, periods_ytd, name)?,
        is_pre_tax,
    })
}

fn benefit(name: &str, current: Decimal, periods_ytd: u32) -> EngineResult<BenefitItem> {
    Ok(BenefitItem {
        name: name.to_string(),
        current,
        ytd: year_to_date(current, periods_ytd, name)?,
    })
}

/// Whole-dollar share of gross pay.
fn floored_share(gross_pay: Decimal, rate: Decimal, name: &str) -> EngineResult<Decimal> {
    Ok(checked_product(gross_pay, rate, name)?.floor())
}

/// Calculates the benefits package deductions and employer contributions.
///
/// Returns empty lists when `include_package` is false.
///
/// # Errors
///
/// Returns [`EngineError::AmountOverflow`](crate::error::EngineError::AmountOverflow)
/// if a share of gross pay or a deduction total does not fit in a [`Decimal`].
///
/// # Examples
///
/// ```
/// use paystub_engine::calculation::calculate_deductions;
/// use rust_decimal::Decimal;
///
/// let result = calculate_deductions(Decimal::new(1000, 0), true, 1, 4).unwrap();
/// assert_eq!(result.deductions.len(), 7);
/// assert_eq!(result.employer_benefits.len(), 2);
///
/// let empty = calculate_deductions(Decimal::new(1000, 0), false, 1, 4).unwrap();
/// assert!(empty.deductions.is_empty());
/// ```
pub fn calculate_deductions(
    gross_pay: Decimal,
    include_package: bool,
    periods_ytd: u32,
    step_number: u32,
) -> EngineResult<DeductionsResult> {
    let (deductions, employer_benefits) = if include_package {
        let deductions = vec![
            deduction(
                "Medical",
                floored_share(gross_pay, MEDICAL_RATE, "Medical")?,
                true,
                periods_ytd,
            )?,
            deduction("Dental", DENTAL, true, periods_ytd)?,
            deduction("Vision", VISION, true, periods_ytd)?,
            deduction("HSA", HSA, true, periods_ytd)?,
            deduction(
                "401(k)",
                floored_share(gross_pay, RETIREMENT_RATE, "401(k)")?,
                true,
                periods_ytd,
            )?,
            deduction("Critical Illness", CRITICAL_ILLNESS, false, periods_ytd)?,
            deduction("Support", SUPPORT, false, periods_ytd)?,
        ];
        let employer_benefits = vec![
            benefit(
                "Medical ER",
                floored_share(gross_pay, EMPLOYER_MEDICAL_RATE, "Medical ER")?,
                periods_ytd,
            )?,
            benefit(
                "401(k) Match",
                floored_share(gross_pay, EMPLOYER_RETIREMENT_MATCH_RATE, "401(k) Match")?,
                periods_ytd,
            )?,
        ];
        (deductions, employer_benefits)
    } else {
        (Vec::new(), Vec::new())
    };

    let total = checked_total(deductions.iter().map(|d| d.current), "deductions_current")?;
    checked_total(deductions.iter().map(|d| d.ytd), "deductions_ytd")?;
    let reasoning = if include_package {
        format!(
            "Benefits package on gross ${}: {} deductions totalling ${}",
            gross_pay.round_dp(2),
            deductions.len(),
            total
        )
    } else {
        "No deductions applied - benefits package not enabled".to_string()
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "deductions".to_string(),
        rule_name: "Deductions and Employer Benefits".to_string(),
        input: serde_json::json!({
            "gross_pay": gross_pay.to_string(),
            "include_package": include_package
        }),
        output: serde_json::json!({
            "deduction_count": deductions.len(),
            "benefit_count": employer_benefits.len(),
            "total_current": total.to_string()
        }),
        reasoning,
    };

    Ok(DeductionsResult {
        deductions,
        employer_benefits,
        audit_step,
    })
}

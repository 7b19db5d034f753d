//! Calculated pay statement models.
//!
//! This module contains the [`CalculatedPaystub`] type and its associated
//! line items: earnings, taxes, deductions, employer benefits, and the audit
//! trace recording how each figure was derived.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::statement_date;

/// A single earnings line.
///
/// # Example
///
/// ```
/// use paystub_engine::models::EarningsItem;
/// use rust_decimal::Decimal;
///
/// let item = EarningsItem {
///     name: "Regular Pay".to_string(),
///     rate: Decimal::new(25, 0),
///     hours: Decimal::new(40, 0),
///     current: Decimal::new(1000, 0),
///     ytd: Decimal::new(12000, 0),
/// };
/// assert_eq!(item.current * Decimal::from(12), item.ytd);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsItem {
    /// Line label (e.g. "Regular Pay", "Overtime Pay", "Salary").
    pub name: String,
    /// Rate shown for the line.
    pub rate: Decimal,
    /// Hours shown for the line.
    pub hours: Decimal,
    /// Amount for this period.
    pub current: Decimal,
    /// Year-to-date amount.
    pub ytd: Decimal,
}

/// A single employee deduction line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionItem {
    /// Line label (e.g. "Medical", "401(k)").
    pub name: String,
    /// Amount for this period.
    pub current: Decimal,
    /// Year-to-date amount.
    pub ytd: Decimal,
    /// Whether the deduction is grouped as pre-tax. Labeling only.
    pub is_pre_tax: bool,
}

/// An employer-paid contribution. Shown for information, never deducted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitItem {
    /// Line label (e.g. "401(k) Match").
    pub name: String,
    /// Amount for this period.
    pub current: Decimal,
    /// Year-to-date amount.
    pub ytd: Decimal,
}

/// A current/year-to-date amount pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxAmount {
    /// Amount withheld this period.
    pub current: Decimal,
    /// Amount withheld year to date.
    pub ytd: Decimal,
}

/// The four withholding lines on a statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// Federal income tax.
    pub federal: TaxAmount,
    /// Social Security (OASDI).
    pub social_security: TaxAmount,
    /// Medicare.
    pub medicare: TaxAmount,
    /// State income tax.
    pub state: TaxAmount,
}

impl TaxBreakdown {
    /// Sum of the four taxes for this period.
    pub fn total_current(&self) -> Decimal {
        self.federal.current + self.social_security.current + self.medicare.current + self.state.current
    }

    /// Sum of the four taxes year to date.
    pub fn total_ytd(&self) -> Decimal {
        self.federal.ytd + self.social_security.ytd + self.medicare.ytd + self.state.ytd
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for one stage of the
/// calculation pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag inputs that were accepted but produce an unusual statement,
/// such as a hire date after the pay date or a negative gross pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

impl AuditWarning {
    /// Creates a warning.
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        severity: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity: severity.into(),
        }
    }
}

/// The complete audit trace for a calculation.
///
/// Holds no timing or random data, so two calculations from the same input
/// produce identical traces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// A fully resolved pay statement for one period.
///
/// Produced fresh by every call to
/// [`calculate_paystub`](crate::calculation::calculate_paystub) and never
/// mutated afterwards. Every per-item year-to-date figure equals its current
/// figure multiplied by [`periods_ytd`](Self::periods_ytd).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatedPaystub {
    /// First day of the worked period.
    #[serde(with = "statement_date")]
    pub period_start_date: NaiveDate,
    /// Last day of the worked period.
    #[serde(with = "statement_date")]
    pub period_end_date: NaiveDate,
    /// Check date.
    #[serde(with = "statement_date")]
    pub pay_date: NaiveDate,
    /// Pseudo check number derived from the pay date and offset.
    pub check_number: i64,
    /// Number of periods counted into year-to-date figures.
    pub periods_ytd: u32,
    /// Base rate shown in the statement header.
    pub rate: Decimal,
    /// Hours shown in the statement header.
    pub hours: Decimal,
    /// Earnings lines.
    pub earnings: Vec<EarningsItem>,
    /// Gross pay for this period.
    pub gross_pay_current: Decimal,
    /// Gross pay year to date.
    pub gross_pay_ytd: Decimal,
    /// Withholding lines.
    pub taxes: TaxBreakdown,
    /// Employee deductions.
    pub deductions: Vec<DeductionItem>,
    /// Taxes plus deductions for this period.
    pub total_deductions_current: Decimal,
    /// Taxes plus deductions year to date.
    pub total_deductions_ytd: Decimal,
    /// Employer-paid contributions (informational).
    pub employer_benefits: Vec<BenefitItem>,
    /// Net pay for this period.
    pub net_pay_current: Decimal,
    /// Net pay year to date.
    pub net_pay_ytd: Decimal,
    /// How each figure was derived.
    pub audit_trace: AuditTrace,
}

impl CalculatedPaystub {
    /// Sum of all taxes for this period.
    pub fn total_taxes_current(&self) -> Decimal {
        self.taxes.total_current()
    }

    /// Sum of all taxes year to date.
    pub fn total_taxes_ytd(&self) -> Decimal {
        self.taxes.total_ytd()
    }

    /// Sum of the deduction lines (excluding taxes) for this period.
    pub fn deductions_only_current(&self) -> Decimal {
        self.deductions.iter().map(|d| d.current).sum()
    }

    /// Sum of the deduction lines (excluding taxes) year to date.
    pub fn deductions_only_ytd(&self) -> Decimal {
        self.deductions.iter().map(|d| d.ytd).sum()
    }

    /// Looks up an earnings line by name.
    pub fn earnings_item(&self, name: &str) -> Option<&EarningsItem> {
        self.earnings.iter().find(|e| e.name == name)
    }
}

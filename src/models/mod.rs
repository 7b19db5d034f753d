//! Core data models for the paystub engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employment;
mod pay_period;
mod paystub;
pub mod statement_date;

pub use employment::{Address, EmploymentConfiguration, EmploymentType, PayFrequency, TimeOffBalances};
pub use pay_period::PayPeriod;
pub use paystub::{
    AuditStep, AuditTrace, AuditWarning, BenefitItem, CalculatedPaystub, DeductionItem,
    EarningsItem, TaxAmount, TaxBreakdown,
};
pub use statement_date::{STATEMENT_DATE_FORMAT, format_statement_date};

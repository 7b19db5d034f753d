//! Paystub calculation engine
//!
//! This crate turns an employment configuration (pay rate, pay frequency, tax
//! rates and benefit options) into fully itemized pay statements: earnings,
//! tax withholding, deductions, employer contributions and year-to-date totals.
//! Statements can be rendered as Markdown and served over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;

#[cfg(test)]
mod test_fixtures;

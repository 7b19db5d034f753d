//! Request types for the paystub engine API.

use serde::{Deserialize, Serialize};

use crate::config::EmploymentConfigInput;

/// Request body for the `/calculate` and `/markdown` endpoints.
///
/// When `configuration` is omitted the stored configuration is used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Configuration to calculate with instead of the stored one.
    #[serde(default)]
    pub configuration: Option<EmploymentConfigInput>,
    /// Number of periods before the configured pay date (0 = most recent).
    #[serde(default)]
    pub offset_periods: u32,
}

/// Request body for the `/statements` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementsRequest {
    /// Configuration to calculate with instead of the stored one.
    #[serde(default)]
    pub configuration: Option<EmploymentConfigInput>,
    /// Number of statements to produce, most recent first.
    pub count: u32,
}

//! Multi-period statement history.

use tracing::debug;

use super::calculate_paystub;
use crate::error::EngineResult;
use crate::models::{CalculatedPaystub, EmploymentConfiguration};

/// Calculates `count` consecutive statements, most recent first.
///
/// Element `i` is the statement for offset `i`. Each statement is computed
/// independently, so the result is identical to calling
/// [`calculate_paystub`] once per offset.
///
/// # Errors
///
/// Fails with the first offset whose dates fall outside the supported calendar.
pub fn calculate_history(
    config: &EmploymentConfiguration,
    count: u32,
) -> EngineResult<Vec<CalculatedPaystub>> {
    debug!(count, employee = %config.employee_name, "calculating statement history");

    (0..count)
        .map(|offset| calculate_paystub(config, offset))
        .collect()
}

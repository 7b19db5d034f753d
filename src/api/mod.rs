//! HTTP API module for the paystub engine.
//!
//! This module provides REST endpoints for managing the stored employment
//! configuration and for calculating and rendering pay statements.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, StatementsRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;

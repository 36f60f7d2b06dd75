//! HTTP API module for the Appraisal Engine.
//!
//! This module provides the REST endpoints for running a bonus allocation and
//! reading an employee's overall appraisal.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AppraisalQuery, BonusCalculationRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;

//! HTTP API module for the Leave Engine.
//!
//! This module provides the REST endpoints for holiday lookups, business-day
//! counting, eligibility resolution and the leave application lifecycle.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BusinessDaysRequest, EligibilityRequest, RejectRequest, ReviewRequest};
pub use response::{ApiError, ApiErrorResponse, HolidayResponse};
pub use state::AppState;

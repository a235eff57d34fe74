//! Request types for the Leave Engine API.
//!
//! This module defines the JSON request structures accepted by the
//! calendar, eligibility and application endpoints. New applications are
//! posted as [`CreateApplicationInput`](crate::models::CreateApplicationInput).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body for the `/business-days` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessDaysRequest {
    /// First day of the range (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the range (inclusive).
    pub end_date: NaiveDate,
}

/// Request body for the `/eligibility` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityRequest {
    /// Nationality as recorded by HR.
    pub nationality: String,
    /// The date the employee joined.
    pub join_date: NaiveDate,
    /// Fractional years of service.
    pub years_of_service: Decimal,
}

/// Request body for approving or cancelling an application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRequest {
    /// Who is performing the action.
    pub actor: String,
}

/// Request body for rejecting an application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectRequest {
    /// Who is rejecting the application.
    pub actor: String,
    /// Why the application is rejected.
    #[serde(default)]
    pub reason: String,
}

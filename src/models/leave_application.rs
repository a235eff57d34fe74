//! Leave application model and related types.
//!
//! This module defines the [`LeaveApplication`] record together with the
//! [`LeaveType`] and [`LeaveStatus`] enums and the [`CreateApplicationInput`]
//! submitted by the console.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of leave being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Annual leave drawn against the nationality entitlement.
    Annual,
    /// Sick leave.
    Sick,
    /// Family responsibility leave.
    Family,
    /// Maternity leave.
    Maternity,
    /// Paternity leave.
    Paternity,
    /// Emergency leave.
    Emergency,
    /// Unpaid leave.
    Unpaid,
}

impl LeaveType {
    /// Returns true if this leave type draws down the annual entitlement.
    pub fn draws_entitlement(&self) -> bool {
        matches!(self, LeaveType::Annual)
    }
}

/// Workflow status of a leave application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Submitted and awaiting a decision.
    #[default]
    Pending,
    /// Approved by a reviewer.
    Approved,
    /// Rejected by a reviewer.
    Rejected,
    /// Withdrawn after submission or approval.
    Cancelled,
}

impl LeaveStatus {
    /// Returns true if the application can move from `self` to `to`.
    ///
    /// Approval and rejection are only possible while pending. Cancellation
    /// is possible while pending or approved.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_engine::models::LeaveStatus;
    ///
    /// assert!(LeaveStatus::Pending.can_transition_to(LeaveStatus::Approved));
    /// assert!(LeaveStatus::Approved.can_transition_to(LeaveStatus::Cancelled));
    /// assert!(!LeaveStatus::Rejected.can_transition_to(LeaveStatus::Approved));
    /// ```
    pub fn can_transition_to(&self, to: LeaveStatus) -> bool {
        matches!(
            (self, to),
            (LeaveStatus::Pending, LeaveStatus::Approved)
                | (LeaveStatus::Pending, LeaveStatus::Rejected)
                | (LeaveStatus::Pending, LeaveStatus::Cancelled)
                | (LeaveStatus::Approved, LeaveStatus::Cancelled)
        )
    }
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveStatus::Pending => write!(f, "pending"),
            LeaveStatus::Approved => write!(f, "approved"),
            LeaveStatus::Rejected => write!(f, "rejected"),
            LeaveStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// The fields submitted when applying for leave.
///
/// Required fields are optional here so that their absence can be reported
/// as a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateApplicationInput {
    /// The applying employee.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// The kind of leave requested.
    #[serde(default)]
    pub leave_type: Option<LeaveType>,
    /// First day of leave (inclusive).
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Last day of leave (inclusive).
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Free-text reason.
    #[serde(default)]
    pub reason: String,
}

/// A leave application.
///
/// `total_calendar_days` and `business_days` are fixed at submission time
/// against the calendar in force then.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveApplication {
    /// Unique identifier for the application.
    pub id: Uuid,
    /// The applying employee.
    pub employee_id: String,
    /// The kind of leave requested.
    pub leave_type: LeaveType,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Calendar days in the range, both ends inclusive.
    pub total_calendar_days: u32,
    /// Days in the range that are neither the weekly off-day nor a holiday.
    pub business_days: u32,
    /// Current workflow status.
    pub status: LeaveStatus,
    /// Free-text reason.
    pub reason: String,
    /// When the application was submitted.
    pub applied_date: DateTime<Utc>,
    /// Who approved the application.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    /// When the application was approved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_date: Option<DateTime<Utc>>,
    /// Who rejected the application.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected_by: Option<String>,
    /// When the application was rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected_date: Option<DateTime<Utc>>,
    /// Why the application was rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    /// Who cancelled the application.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancelled_by: Option<String>,
    /// When the application was cancelled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancelled_date: Option<DateTime<Utc>>,
}

impl LeaveApplication {
    /// Days in the range excluded as off-days or holidays.
    pub fn excluded_days(&self) -> u32 {
        self.total_calendar_days.saturating_sub(self.business_days)
    }

    /// Returns true if the leave range shares at least one day with `[from, to]`.
    pub fn overlaps(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.start_date <= to && self.end_date >= from
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn application() -> LeaveApplication {
        LeaveApplication {
            id: Uuid::nil(),
            employee_id: "EMP-001".to_string(),
            leave_type: LeaveType::Annual,
            start_date: date(2025, 3, 2),
            end_date: date(2025, 3, 8),
            total_calendar_days: 7,
            business_days: 6,
            status: LeaveStatus::Pending,
            reason: "Family visit".to_string(),
            applied_date: DateTime::parse_from_rfc3339("2025-02-20T09:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            approved_by: None,
            approved_date: None,
            rejected_by: None,
            rejected_date: None,
            rejection_reason: None,
            cancelled_by: None,
            cancelled_date: None,
        }
    }

    #[test]
    fn test_leave_type_serialization() {
        assert_eq!(
            serde_json::to_string(&LeaveType::Maternity).unwrap(),
            "\"maternity\""
        );
        let parsed: LeaveType = serde_json::from_str("\"annual\"").unwrap();
        assert_eq!(parsed, LeaveType::Annual);
    }

    #[test]
    fn test_only_annual_draws_entitlement() {
        assert!(LeaveType::Annual.draws_entitlement());
        assert!(!LeaveType::Sick.draws_entitlement());
        assert!(!LeaveType::Unpaid.draws_entitlement());
    }

    #[test]
    fn test_status_defaults_to_pending() {
        assert_eq!(LeaveStatus::default(), LeaveStatus::Pending);
    }

    #[test]
    fn test_terminal_statuses_have_no_transitions() {
        for to in [
            LeaveStatus::Pending,
            LeaveStatus::Approved,
            LeaveStatus::Rejected,
            LeaveStatus::Cancelled,
        ] {
            assert!(!LeaveStatus::Rejected.can_transition_to(to));
            assert!(!LeaveStatus::Cancelled.can_transition_to(to));
        }
    }

    #[test]
    fn test_approved_cannot_be_rejected() {
        assert!(!LeaveStatus::Approved.can_transition_to(LeaveStatus::Rejected));
        assert!(!LeaveStatus::Approved.can_transition_to(LeaveStatus::Approved));
    }

    #[test]
    fn test_input_missing_fields_deserialize_as_none() {
        let input: CreateApplicationInput =
            serde_json::from_str(r#"{ "employee_id": "EMP-001" }"#).unwrap();
        assert_eq!(input.employee_id.as_deref(), Some("EMP-001"));
        assert!(input.leave_type.is_none());
        assert!(input.start_date.is_none());
        assert_eq!(input.reason, "");
    }

    #[test]
    fn test_excluded_days() {
        assert_eq!(application().excluded_days(), 1);
    }

    #[test]
    fn test_excluded_days_never_underflows() {
        let mut inconsistent = application();
        inconsistent.business_days = inconsistent.total_calendar_days + 3;
        assert_eq!(inconsistent.excluded_days(), 0);
    }

    #[test]
    fn test_overlaps() {
        let app = application();
        assert!(app.overlaps(date(2025, 3, 8), date(2025, 3, 20)));
        assert!(app.overlaps(date(2025, 2, 1), date(2025, 3, 2)));
        assert!(!app.overlaps(date(2025, 3, 9), date(2025, 3, 20)));
    }

    #[test]
    fn test_serialization_skips_unset_stamps() {
        let json = serde_json::to_string(&application()).unwrap();
        assert!(json.contains("\"status\":\"pending\""));
        assert!(!json.contains("approved_by"));
        assert!(!json.contains("rejection_reason"));
    }
}

//! Leave application validation and materialisation.
//!
//! [`create_application`] checks a [`CreateApplicationInput`], then computes
//! the calendar and business days of the requested range and returns a new
//! pending [`LeaveApplication`].

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::calendar::{WorkCalendar, calendar_days_inclusive};
use crate::error::{EngineError, EngineResult};
use crate::models::{CreateApplicationInput, LeaveApplication, LeaveStatus};

/// Longest leave span accepted when none is configured, in calendar days.
pub const DEFAULT_MAX_SPAN_DAYS: u32 = 366;

fn default_max_span_days() -> u32 {
    DEFAULT_MAX_SPAN_DAYS
}

/// Configurable validation rules for new applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ApplicationRules {
    /// Accept applications whose end date equals the start date.
    ///
    /// Off by default: the end date must be strictly after the start date.
    #[serde(default)]
    pub allow_single_day: bool,
    /// Longest accepted span in calendar days, both ends inclusive.
    #[serde(default = "default_max_span_days")]
    pub max_span_days: u32,
}

impl Default for ApplicationRules {
    fn default() -> Self {
        Self {
            allow_single_day: false,
            max_span_days: DEFAULT_MAX_SPAN_DAYS,
        }
    }
}

fn missing(field: &str) -> EngineError {
    EngineError::MissingField {
        field: field.to_string(),
    }
}

/// Validates an application and builds the pending record.
///
/// Validation runs in order: required fields first (`employee_id`,
/// `leave_type`, `start_date`, `end_date`), then the date range, then the
/// span length. Business days are only counted once the span is known to
/// be within `max_span_days`.
///
/// # Errors
///
/// - [`EngineError::MissingField`] if a required field is absent or the employee id is blank.
/// - [`EngineError::InvalidRange`] if the end date is not after the start date
///   (or is before it, when single-day leave is allowed).
/// - [`EngineError::SpanTooLong`] if the range covers more than `max_span_days`.
///
/// # Example
///
/// ```
/// use leave_engine::calendar::{HolidayCalendar, WorkCalendar};
/// use leave_engine::leave::{ApplicationRules, create_application};
/// use leave_engine::models::{CreateApplicationInput, LeaveStatus, LeaveType};
/// use chrono::{NaiveDate, Utc, Weekday};
///
/// let calendar = WorkCalendar::new(Weekday::Fri, HolidayCalendar::default());
/// let input = CreateApplicationInput {
///     employee_id: Some("EMP-001".to_string()),
///     leave_type: Some(LeaveType::Annual),
///     start_date: NaiveDate::from_ymd_opt(2025, 3, 10),
///     end_date: NaiveDate::from_ymd_opt(2025, 3, 16),
///     reason: "Family visit".to_string(),
/// };
///
/// let application =
///     create_application(input, &calendar, ApplicationRules::default(), Utc::now()).unwrap();
/// assert_eq!(application.total_calendar_days, 7);
/// assert_eq!(application.business_days, 6);
/// assert_eq!(application.status, LeaveStatus::Pending);
/// ```
pub fn create_application(
    input: CreateApplicationInput,
    calendar: &WorkCalendar,
    rules: ApplicationRules,
    applied_at: DateTime<Utc>,
) -> EngineResult<LeaveApplication> {
    let employee_id = input
        .employee_id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| missing("employee_id"))?;
    let leave_type = input.leave_type.ok_or_else(|| missing("leave_type"))?;
    let start_date = input.start_date.ok_or_else(|| missing("start_date"))?;
    let end_date = input.end_date.ok_or_else(|| missing("end_date"))?;

    let range_ok = if rules.allow_single_day {
        end_date >= start_date
    } else {
        end_date > start_date
    };
    if !range_ok {
        return Err(EngineError::InvalidRange {
            start_date,
            end_date,
        });
    }

    let total_calendar_days = calendar_days_inclusive(start_date, end_date);
    if total_calendar_days > rules.max_span_days {
        return Err(EngineError::SpanTooLong {
            start_date,
            end_date,
            days: total_calendar_days,
            max_days: rules.max_span_days,
        });
    }

    Ok(LeaveApplication {
        id: Uuid::new_v4(),
        employee_id,
        leave_type,
        start_date,
        end_date,
        total_calendar_days,
        business_days: calendar.count_business_days(start_date, end_date),
        status: LeaveStatus::Pending,
        reason: input.reason,
        applied_date: applied_at,
        approved_by: None,
        approved_date: None,
        rejected_by: None,
        rejected_date: None,
        rejection_reason: None,
        cancelled_by: None,
        cancelled_date: None,
    })
}

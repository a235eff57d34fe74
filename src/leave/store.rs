//! In-memory leave application store.
//!
//! Applications are appended on submission and only ever change through a
//! status transition. Nothing is deleted.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::calendar::WorkCalendar;
use crate::error::{EngineError, EngineResult};
use crate::models::{CreateApplicationInput, LeaveApplication, LeaveStatus, LeaveType};

use super::application::{ApplicationRules, create_application};

/// Criteria for listing applications. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationFilter {
    /// Only applications from this employee.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// Only applications with this status.
    #[serde(default)]
    pub status: Option<LeaveStatus>,
    /// Only applications of this leave type.
    #[serde(default)]
    pub leave_type: Option<LeaveType>,
    /// Only applications whose range ends on or after this date.
    #[serde(default)]
    pub from: Option<NaiveDate>,
    /// Only applications whose range starts on or before this date.
    #[serde(default)]
    pub to: Option<NaiveDate>,
}

impl ApplicationFilter {
    /// Returns true if the application satisfies every set criterion.
    pub fn matches(&self, application: &LeaveApplication) -> bool {
        self.employee_id
            .as_deref()
            .is_none_or(|id| application.employee_id == id)
            && self.status.is_none_or(|s| application.status == s)
            && self.leave_type.is_none_or(|t| application.leave_type == t)
            && application.overlaps(
                self.from.unwrap_or(NaiveDate::MIN),
                self.to.unwrap_or(NaiveDate::MAX),
            )
    }
}

/// The collection of submitted leave applications.
///
/// # Example
///
/// ```
/// use leave_engine::calendar::{HolidayCalendar, WorkCalendar};
/// use leave_engine::leave::{ApplicationRules, LeaveApplicationStore};
/// use leave_engine::models::{CreateApplicationInput, LeaveStatus, LeaveType};
/// use chrono::{NaiveDate, Weekday};
///
/// let calendar = WorkCalendar::new(Weekday::Fri, HolidayCalendar::default());
/// let mut store = LeaveApplicationStore::new();
///
/// let submitted = store
///     .submit(
///         CreateApplicationInput {
///             employee_id: Some("EMP-001".to_string()),
///             leave_type: Some(LeaveType::Sick),
///             start_date: NaiveDate::from_ymd_opt(2025, 3, 10),
///             end_date: NaiveDate::from_ymd_opt(2025, 3, 11),
///             reason: "Flu".to_string(),
///         },
///         &calendar,
///         ApplicationRules::default(),
///     )
///     .unwrap();
///
/// let approved = store.approve(submitted.id, "hr.manager").unwrap();
/// assert_eq!(approved.status, LeaveStatus::Approved);
/// assert_eq!(approved.approved_by.as_deref(), Some("hr.manager"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LeaveApplicationStore {
    applications: Vec<LeaveApplication>,
}

impl LeaveApplicationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and appends a new application, stamped with the current time.
    pub fn submit(
        &mut self,
        input: CreateApplicationInput,
        calendar: &WorkCalendar,
        rules: ApplicationRules,
    ) -> EngineResult<LeaveApplication> {
        self.submit_at(input, calendar, rules, Utc::now())
    }

    /// Validates and appends a new application with an explicit submission time.
    pub fn submit_at(
        &mut self,
        input: CreateApplicationInput,
        calendar: &WorkCalendar,
        rules: ApplicationRules,
        applied_at: DateTime<Utc>,
    ) -> EngineResult<LeaveApplication> {
        let application = create_application(input, calendar, rules, applied_at)?;
        Ok(self.insert(application))
    }

    /// Appends an application that has already been validated.
    pub fn insert(&mut self, application: LeaveApplication) -> LeaveApplication {
        info!(
            application_id = %application.id,
            employee_id = %application.employee_id,
            business_days = application.business_days,
            "Leave application submitted"
        );
        self.applications.push(application.clone());
        application
    }

    /// Returns the application with the given id.
    pub fn get(&self, id: Uuid) -> EngineResult<&LeaveApplication> {
        self.applications
            .iter()
            .find(|a| a.id == id)
            .ok_or(EngineError::ApplicationNotFound { id })
    }

    /// Applications matching the filter, most recently applied first.
    pub fn list(&self, filter: &ApplicationFilter) -> Vec<LeaveApplication> {
        let mut matching: Vec<LeaveApplication> = self
            .applications
            .iter()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.applied_date.cmp(&a.applied_date));
        matching
    }

    /// All applications in submission order.
    pub fn all(&self) -> &[LeaveApplication] {
        &self.applications
    }

    /// Number of applications in the store.
    pub fn len(&self) -> usize {
        self.applications.len()
    }

    /// Returns true if nothing has been submitted.
    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }

    /// Approves a pending application.
    pub fn approve(&mut self, id: Uuid, actor: &str) -> EngineResult<LeaveApplication> {
        self.approve_at(id, actor, Utc::now())
    }

    /// Approves a pending application at an explicit time.
    pub fn approve_at(
        &mut self,
        id: Uuid,
        actor: &str,
        at: DateTime<Utc>,
    ) -> EngineResult<LeaveApplication> {
        self.transition(id, LeaveStatus::Approved, actor, |application| {
            application.approved_by = Some(actor.to_string());
            application.approved_date = Some(at);
        })
    }

    /// Rejects a pending application with a reason.
    pub fn reject(
        &mut self,
        id: Uuid,
        actor: &str,
        reason: &str,
    ) -> EngineResult<LeaveApplication> {
        self.reject_at(id, actor, reason, Utc::now())
    }

    /// Rejects a pending application at an explicit time.
    pub fn reject_at(
        &mut self,
        id: Uuid,
        actor: &str,
        reason: &str,
        at: DateTime<Utc>,
    ) -> EngineResult<LeaveApplication> {
        self.transition(id, LeaveStatus::Rejected, actor, |application| {
            application.rejected_by = Some(actor.to_string());
            application.rejected_date = Some(at);
            application.rejection_reason = Some(reason.to_string());
        })
    }

    /// Cancels a pending or approved application.
    pub fn cancel(&mut self, id: Uuid, actor: &str) -> EngineResult<LeaveApplication> {
        self.cancel_at(id, actor, Utc::now())
    }

    /// Cancels a pending or approved application at an explicit time.
    pub fn cancel_at(
        &mut self,
        id: Uuid,
        actor: &str,
        at: DateTime<Utc>,
    ) -> EngineResult<LeaveApplication> {
        self.transition(id, LeaveStatus::Cancelled, actor, |application| {
            application.cancelled_by = Some(actor.to_string());
            application.cancelled_date = Some(at);
        })
    }

    fn transition(
        &mut self,
        id: Uuid,
        to: LeaveStatus,
        actor: &str,
        stamp: impl FnOnce(&mut LeaveApplication),
    ) -> EngineResult<LeaveApplication> {
        if actor.trim().is_empty() {
            return Err(EngineError::MissingField {
                field: "actor".to_string(),
            });
        }

        let application = self
            .applications
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(EngineError::ApplicationNotFound { id })?;

        let from = application.status;
        if !from.can_transition_to(to) {
            return Err(EngineError::InvalidStatusTransition { id, from, to });
        }

        application.status = to;
        stamp(application);
        info!(application_id = %id, from = %from, to = %to, "Leave application status changed");
        Ok(application.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::HolidayCalendar;
    use chrono::{Duration, Weekday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn calendar() -> WorkCalendar {
        WorkCalendar::new(Weekday::Fri, HolidayCalendar::default())
    }

    fn input(employee: &str, leave_type: LeaveType, start: NaiveDate, end: NaiveDate) -> CreateApplicationInput {
        CreateApplicationInput {
            employee_id: Some(employee.to_string()),
            leave_type: Some(leave_type),
            start_date: Some(start),
            end_date: Some(end),
            reason: String::new(),
        }
    }

    fn submit(store: &mut LeaveApplicationStore, employee: &str, start: NaiveDate) -> LeaveApplication {
        store
            .submit(
                input(employee, LeaveType::Annual, start, start + Duration::days(2)),
                &calendar(),
                ApplicationRules::default(),
            )
            .unwrap()
    }

    #[test]
    fn test_submit_appends_pending_application() {
        let mut store = LeaveApplicationStore::new();
        let application = submit(&mut store, "EMP-001", date(2025, 3, 10));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(application.id).unwrap(), &application);
        assert_eq!(application.status, LeaveStatus::Pending);
    }

    #[test]
    fn test_invalid_submission_is_not_stored() {
        let mut store = LeaveApplicationStore::new();
        let result = store.submit(
            input("EMP-001", LeaveType::Annual, date(2025, 3, 10), date(2025, 3, 10)),
            &calendar(),
            ApplicationRules::default(),
        );

        assert!(matches!(result, Err(EngineError::InvalidRange { .. })));
        assert!(store.is_empty());
    }

    #[test]
    fn test_approve_stamps_actor_and_time() {
        let mut store = LeaveApplicationStore::new();
        let application = submit(&mut store, "EMP-001", date(2025, 3, 10));
        let at = Utc::now();

        let approved = store.approve_at(application.id, "supervisor", at).unwrap();
        assert_eq!(approved.status, LeaveStatus::Approved);
        assert_eq!(approved.approved_by.as_deref(), Some("supervisor"));
        assert_eq!(approved.approved_date, Some(at));
        assert_eq!(store.get(application.id).unwrap().status, LeaveStatus::Approved);
    }

    #[test]
    fn test_reject_records_reason() {
        let mut store = LeaveApplicationStore::new();
        let application = submit(&mut store, "EMP-001", date(2025, 3, 10));

        let rejected = store
            .reject(application.id, "supervisor", "Peak season")
            .unwrap();
        assert_eq!(rejected.status, LeaveStatus::Rejected);
        assert_eq!(rejected.rejected_by.as_deref(), Some("supervisor"));
        assert_eq!(rejected.rejection_reason.as_deref(), Some("Peak season"));
        assert!(rejected.rejected_date.is_some());
    }

    #[test]
    fn test_cancel_from_pending_and_approved() {
        let mut store = LeaveApplicationStore::new();
        let pending = submit(&mut store, "EMP-001", date(2025, 3, 10));
        let approved = submit(&mut store, "EMP-001", date(2025, 4, 7));
        store.approve(approved.id, "supervisor").unwrap();

        let cancelled = store.cancel(pending.id, "EMP-001").unwrap();
        assert_eq!(cancelled.status, LeaveStatus::Cancelled);
        assert_eq!(cancelled.cancelled_by.as_deref(), Some("EMP-001"));

        let cancelled = store.cancel(approved.id, "EMP-001").unwrap();
        assert_eq!(cancelled.status, LeaveStatus::Cancelled);
        assert_eq!(cancelled.approved_by.as_deref(), Some("supervisor"));
    }

    #[test]
    fn test_invalid_transitions_are_refused() {
        let mut store = LeaveApplicationStore::new();
        let application = submit(&mut store, "EMP-001", date(2025, 3, 10));
        store.reject(application.id, "supervisor", "No cover").unwrap();

        match store.approve(application.id, "supervisor") {
            Err(EngineError::InvalidStatusTransition { id, from, to }) => {
                assert_eq!(id, application.id);
                assert_eq!(from, LeaveStatus::Rejected);
                assert_eq!(to, LeaveStatus::Approved);
            }
            other => panic!("Expected InvalidStatusTransition, got {:?}", other),
        }
        assert!(store.cancel(application.id, "EMP-001").is_err());
        assert_eq!(store.get(application.id).unwrap().status, LeaveStatus::Rejected);
    }

    #[test]
    fn test_unknown_id_not_found() {
        let mut store = LeaveApplicationStore::new();
        let id = Uuid::new_v4();
        assert!(matches!(
            store.approve(id, "supervisor"),
            Err(EngineError::ApplicationNotFound { id: missing }) if missing == id
        ));
        assert!(store.get(id).is_err());
    }

    #[test]
    fn test_list_filters_and_sorts_newest_first() {
        let mut store = LeaveApplicationStore::new();
        let base = Utc::now();
        let rules = ApplicationRules::default();

        let first = store
            .submit_at(
                input("EMP-001", LeaveType::Annual, date(2025, 3, 10), date(2025, 3, 12)),
                &calendar(),
                rules,
                base,
            )
            .unwrap();
        let second = store
            .submit_at(
                input("EMP-001", LeaveType::Sick, date(2025, 5, 5), date(2025, 5, 6)),
                &calendar(),
                rules,
                base + Duration::hours(1),
            )
            .unwrap();
        store
            .submit_at(
                input("EMP-002", LeaveType::Annual, date(2025, 3, 11), date(2025, 3, 20)),
                &calendar(),
                rules,
                base + Duration::hours(2),
            )
            .unwrap();

        let by_employee = store.list(&ApplicationFilter {
            employee_id: Some("EMP-001".to_string()),
            ..Default::default()
        });
        let ids: Vec<Uuid> = by_employee.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);

        let annual = store.list(&ApplicationFilter {
            leave_type: Some(LeaveType::Annual),
            ..Default::default()
        });
        assert_eq!(annual.len(), 2);
        assert_eq!(annual[0].employee_id, "EMP-002");

        let in_march = store.list(&ApplicationFilter {
            from: Some(date(2025, 3, 1)),
            to: Some(date(2025, 3, 31)),
            ..Default::default()
        });
        assert_eq!(in_march.len(), 2);

        store.approve(first.id, "supervisor").unwrap();
        let approved = store.list(&ApplicationFilter {
            status: Some(LeaveStatus::Approved),
            ..Default::default()
        });
        assert_eq!(approved.len(), 1);
        assert_eq!(approved[0].id, first.id);

        assert_eq!(store.list(&ApplicationFilter::default()).len(), 3);
    }

    #[test]
    fn test_blank_actor_is_missing() {
        let mut store = LeaveApplicationStore::new();
        let application = submit(&mut store, "EMP-001", date(2025, 3, 10));

        for result in [
            store.approve(application.id, ""),
            store.reject(application.id, "   ", "No cover"),
            store.cancel(application.id, "\t"),
        ] {
            match result {
                Err(EngineError::MissingField { field }) => assert_eq!(field, "actor"),
                other => panic!("Expected MissingField(actor), got {:?}", other),
            }
        }

        let stored = store.get(application.id).unwrap();
        assert_eq!(stored.status, LeaveStatus::Pending);
        assert!(stored.approved_by.is_none());
    }

    #[test]
    fn test_insert_appends_prevalidated_application() {
        let mut store = LeaveApplicationStore::new();
        let application = create_application(
            input("EMP-002", LeaveType::Sick, date(2025, 3, 10), date(2025, 3, 11)),
            &calendar(),
            ApplicationRules::default(),
            Utc::now(),
        )
        .unwrap();

        let inserted = store.insert(application.clone());
        assert_eq!(inserted, application);
        assert_eq!(store.get(application.id).unwrap(), &application);
    }

    #[test]
    fn test_date_window_filter_matches_overlapping_ranges() {
        let mut store = LeaveApplicationStore::new();
        let march = submit(&mut store, "EMP-001", date(2025, 3, 10));
        submit(&mut store, "EMP-001", date(2025, 5, 4));

        let filter = ApplicationFilter {
            from: Some(date(2025, 3, 12)),
            to: Some(date(2025, 4, 30)),
            ..ApplicationFilter::default()
        };
        let matched = store.list(&filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, march.id);

        let open_ended = ApplicationFilter {
            from: Some(date(2025, 5, 6)),
            ..ApplicationFilter::default()
        };
        assert_eq!(store.list(&open_ended).len(), 1);
    }
}

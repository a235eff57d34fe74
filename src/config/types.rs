//! Configuration types for the leave engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::Weekday;
use serde::Deserialize;

use crate::calendar::{HolidayCalendar, WorkCalendar};
use crate::eligibility::{EligibilityPolicy, LongServiceRule, NationalityGroups, RuleTable};
use crate::leave::ApplicationRules;
use crate::models::{Employee, Holiday, StaffDirectory};

/// Calendar settings from `calendar.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarSettings {
    /// Human-readable name of the calendar (e.g., "Head Office").
    pub name: String,
    /// The single weekly off-day (e.g., "Friday").
    pub weekly_off_day: Weekday,
    /// Validation rules for new applications.
    #[serde(flatten)]
    pub application_rules: ApplicationRules,
}

/// One year of holidays from `holidays/<year>.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayFile {
    /// The year every listed holiday falls in.
    pub year: i32,
    /// The holidays of that year.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

/// Eligibility rules from `eligibility.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EligibilityConfig {
    /// Nationality groups.
    pub groups: NationalityGroups,
    /// Per-class entitlement rules.
    #[serde(default)]
    pub rules: RuleTable,
    /// Long-service ceiling.
    #[serde(default)]
    pub long_service: LongServiceRule,
}

/// Staff directory from `employees.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeesConfig {
    /// The employees.
    #[serde(default)]
    pub employees: Vec<Employee>,
}

/// The complete leave configuration loaded from YAML files.
///
/// This struct aggregates all configuration loaded from the various
/// YAML files in a configuration directory.
#[derive(Debug, Clone)]
pub struct LeaveConfig {
    name: String,
    work_calendar: WorkCalendar,
    application_rules: ApplicationRules,
    policy: EligibilityPolicy,
    directory: StaffDirectory,
}

impl LeaveConfig {
    /// Creates a new LeaveConfig from its component parts.
    pub fn new(
        settings: CalendarSettings,
        holidays: Vec<Holiday>,
        eligibility: EligibilityConfig,
        employees: Vec<Employee>,
    ) -> Self {
        Self {
            name: settings.name,
            work_calendar: WorkCalendar::new(
                settings.weekly_off_day,
                HolidayCalendar::new(holidays),
            ),
            application_rules: settings.application_rules,
            policy: EligibilityPolicy::new(
                eligibility.groups,
                eligibility.rules,
                eligibility.long_service,
            ),
            directory: StaffDirectory::new(employees),
        }
    }

    /// The calendar name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The weekly off-day and holidays.
    pub fn work_calendar(&self) -> &WorkCalendar {
        &self.work_calendar
    }

    /// Validation rules for new applications.
    pub fn application_rules(&self) -> ApplicationRules {
        self.application_rules
    }

    /// The eligibility policy.
    pub fn policy(&self) -> &EligibilityPolicy {
        &self.policy
    }

    /// The staff directory.
    pub fn directory(&self) -> &StaffDirectory {
        &self.directory
    }
}

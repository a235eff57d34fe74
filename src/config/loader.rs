//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading leave
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use chrono::Datelike;
use tracing::debug;

use crate::calendar::WorkCalendar;
use crate::eligibility::{EligibilityClass, EligibilityPolicy};
use crate::error::{EngineError, EngineResult};
use crate::leave::ApplicationRules;
use crate::models::{Employee, EmployeeDirectory, Holiday, StaffDirectory};

use super::types::{CalendarSettings, EligibilityConfig, EmployeesConfig, HolidayFile, LeaveConfig};

/// Loads and provides access to leave configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides the work calendar, eligibility policy and staff directory.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── calendar.yaml      # Calendar name, weekly off-day, validation flags
/// ├── eligibility.yaml   # Nationality groups and entitlement rules
/// ├── employees.yaml     # Staff directory
/// └── holidays/
///     └── 2025.yaml      # Holidays for one year
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
///
/// let start = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 3, 8).unwrap();
/// let days = loader.work_calendar().count_business_days(start, end);
/// println!("Business days: {}", days);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: LeaveConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - A holiday is listed under the wrong year or a rule has a zero-year cycle
    /// - The holidays directory contains no holiday files
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<CalendarSettings>(&path.join("calendar.yaml"))?;

        let eligibility_path = path.join("eligibility.yaml");
        let eligibility = Self::load_yaml::<EligibilityConfig>(&eligibility_path)?;
        Self::validate_eligibility(&eligibility, &eligibility_path)?;

        let employees = Self::load_yaml::<EmployeesConfig>(&path.join("employees.yaml"))?;

        let holidays = Self::load_holidays(&path.join("holidays"))?;

        let config = LeaveConfig::new(settings, holidays, eligibility, employees.employees);

        debug!(
            calendar = %config.name(),
            weekly_off_day = %config.work_calendar().weekly_off_day(),
            holidays = config.work_calendar().holidays().len(),
            employees = config.directory().len(),
            "Loaded leave configuration"
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all holiday files from the holidays directory.
    fn load_holidays(holidays_dir: &Path) -> EngineResult<Vec<Holiday>> {
        let holidays_dir_str = holidays_dir.display().to_string();

        if !holidays_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: holidays_dir_str,
            });
        }

        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: holidays_dir_str.clone(),
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: holidays_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                files.push(path);
            }
        }

        if files.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no holiday files found)", holidays_dir_str),
            });
        }

        // Directory order is unspecified; sort so duplicate dates resolve the same way every time.
        files.sort();

        let mut holidays = Vec::new();
        for path in files {
            let file = Self::load_yaml::<HolidayFile>(&path)?;
            if let Some(stray) = file.holidays.iter().find(|h| h.date.year() != file.year) {
                return Err(EngineError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!(
                        "holiday '{}' on {} is outside year {}",
                        stray.name, stray.date, file.year
                    ),
                });
            }
            holidays.extend(file.holidays);
        }

        Ok(holidays)
    }

    fn validate_eligibility(config: &EligibilityConfig, path: &Path) -> EngineResult<()> {
        for class in [
            EligibilityClass::Standard,
            EligibilityClass::Extended,
            EligibilityClass::Default,
        ] {
            if config.rules.rule_for(class).cycle_years == 0 {
                return Err(EngineError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!("{:?} rule must have a cycle of at least one year", class),
                });
            }
        }
        Ok(())
    }

    /// Returns the underlying leave configuration.
    pub fn config(&self) -> &LeaveConfig {
        &self.config
    }

    /// Returns the weekly off-day and holiday calendar.
    pub fn work_calendar(&self) -> &WorkCalendar {
        self.config.work_calendar()
    }

    /// Returns the eligibility policy.
    pub fn policy(&self) -> &EligibilityPolicy {
        self.config.policy()
    }

    /// Returns the validation rules for new applications.
    pub fn application_rules(&self) -> ApplicationRules {
        self.config.application_rules()
    }

    /// Returns the staff directory.
    pub fn directory(&self) -> &StaffDirectory {
        self.config.directory()
    }

    /// Gets an employee by id.
    ///
    /// # Returns
    ///
    /// Returns the employee if found, or `EmployeeNotFound` error.
    pub fn get_employee(&self, id: &str) -> EngineResult<&Employee> {
        self.config
            .directory()
            .find(id)
            .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })
    }
}

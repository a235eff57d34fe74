//! Configuration loading and management for the Leave Engine.
//!
//! This module provides functionality to load leave configuration from YAML
//! files, including the weekly off-day, per-year holiday lists, nationality
//! eligibility rules and the staff directory.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded calendar: {}", config.config().name());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalendarSettings, EligibilityConfig, EmployeesConfig, HolidayFile, LeaveConfig};

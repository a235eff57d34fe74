//! Core data models for the Leave Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod eligibility;
mod employee;
mod holiday;
mod leave_application;

pub use eligibility::{EligibilityResult, EligibilityStatus, EntitlementBasis};
pub use employee::{Employee, EmployeeDirectory, StaffDirectory};
pub use holiday::{Holiday, HolidayLookup};
pub use leave_application::{CreateApplicationInput, LeaveApplication, LeaveStatus, LeaveType};

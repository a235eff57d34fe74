//! Leave Engine for staff annual leave
//!
//! This crate provides a holiday calendar and business-day counter, a
//! nationality-based annual leave eligibility resolver, and validation and
//! lifecycle tracking for leave applications.

#![warn(missing_docs)]

pub mod api;
pub mod calendar;
pub mod config;
pub mod eligibility;
pub mod error;
pub mod leave;
pub mod models;

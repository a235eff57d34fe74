//! Nationality-based annual-leave eligibility.
//!
//! This module classifies nationalities into eligibility classes, holds the
//! rule table for each class and resolves an employee's entitlement, status
//! and next entitlement date.

mod resolver;
mod rules;

pub use resolver::{EligibilityPolicy, RuleStep};
pub use rules::{
    EligibilityClass, EntitlementRule, LongServicePrecedence, LongServiceRule, NationalityGroups,
    RuleTable,
};

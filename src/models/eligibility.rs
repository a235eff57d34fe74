//! Eligibility result model.
//!
//! An [`EligibilityResult`] is always derived from an employee's
//! nationality, join date and years of service. It is recomputed on demand
//! and never stored alongside the employee.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether an employee may currently draw annual leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityStatus {
    /// The employee has served long enough to draw the entitlement.
    Eligible,
    /// The employee has not yet reached the minimum service.
    NotEligible,
    /// The employee's service has not started yet (join date in the future).
    Pending,
}

impl std::fmt::Display for EligibilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EligibilityStatus::Eligible => write!(f, "eligible"),
            EligibilityStatus::NotEligible => write!(f, "not_eligible"),
            EligibilityStatus::Pending => write!(f, "pending"),
        }
    }
}

/// The rule that produced an eligibility result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntitlementBasis {
    /// Standard nationality group rule.
    Standard,
    /// Extended nationality group rule (biennial cycle).
    Extended,
    /// Rule for nationalities outside both groups.
    Default,
    /// Long-service ceiling.
    LongService,
}

/// The annual-leave entitlement and eligibility of one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityResult {
    /// Days granted per entitlement cycle; zero when not eligible.
    pub entitled_days: u32,
    /// Current eligibility status.
    pub status: EligibilityStatus,
    /// The date the next entitlement cycle begins. `None` for the long-service ceiling.
    pub next_entitlement_date: Option<NaiveDate>,
    /// The date the current entitlement cycle began, when the employee is eligible.
    pub current_cycle_start: Option<NaiveDate>,
    /// Which rule produced this result.
    pub basis: EntitlementBasis,
    /// Human-readable explanation for display.
    pub description: String,
}

impl EligibilityResult {
    /// Returns true if the employee may currently draw annual leave.
    pub fn is_eligible(&self) -> bool {
        self.status == EligibilityStatus::Eligible
    }
}

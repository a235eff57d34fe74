//! Annual-leave balance.
//!
//! A [`LeaveBalance`] is derived every time from the employee's eligibility
//! and the applications in the store; it is never stored.

use serde::{Deserialize, Serialize};

use crate::eligibility::EligibilityPolicy;
use crate::models::{EligibilityResult, Employee, LeaveApplication, LeaveStatus};

/// Entitlement, usage and remainder for the current entitlement cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    /// The employee the balance belongs to.
    pub employee_id: String,
    /// The eligibility the balance was computed against.
    pub eligibility: EligibilityResult,
    /// Days granted for the current cycle.
    pub entitled_days: u32,
    /// Business days of approved annual leave in the cycle.
    pub taken_days: u64,
    /// Business days of annual leave awaiting a decision in the cycle.
    pub pending_days: u64,
    /// `entitled_days - taken_days`; negative when overdrawn.
    pub remaining_days: i64,
}

/// Computes an employee's annual-leave balance.
///
/// Only annual leave counts. An application belongs to the cycle when it
/// starts on or after the cycle start and before the next entitlement date.
/// Under the long-service ceiling there is no cycle and every annual
/// application counts.
pub fn leave_balance<'a>(
    employee: &Employee,
    policy: &EligibilityPolicy,
    applications: impl IntoIterator<Item = &'a LeaveApplication>,
) -> LeaveBalance {
    let eligibility = policy.resolve(
        &employee.nationality,
        employee.join_date,
        employee.years_of_service,
    );

    let in_cycle = |application: &LeaveApplication| {
        eligibility
            .current_cycle_start
            .is_none_or(|start| application.start_date >= start)
            && eligibility
                .next_entitlement_date
                .is_none_or(|next| application.start_date < next)
    };

    let mut taken_days: u64 = 0;
    let mut pending_days: u64 = 0;
    for application in applications {
        if application.employee_id != employee.id
            || !application.leave_type.draws_entitlement()
            || !in_cycle(application)
        {
            continue;
        }
        match application.status {
            LeaveStatus::Approved => {
                taken_days = taken_days.saturating_add(u64::from(application.business_days))
            }
            LeaveStatus::Pending => {
                pending_days = pending_days.saturating_add(u64::from(application.business_days))
            }
            LeaveStatus::Rejected | LeaveStatus::Cancelled => {}
        }
    }

    let entitled_days = eligibility.entitled_days;
    LeaveBalance {
        employee_id: employee.id.clone(),
        entitled_days,
        taken_days,
        pending_days,
        remaining_days: i64::from(entitled_days)
            .saturating_sub(i64::try_from(taken_days).unwrap_or(i64::MAX)),
        eligibility,
    }
}

//! Leave applications: validation, storage, status transitions and balances.

mod application;
mod balance;
mod store;

pub use application::{ApplicationRules, DEFAULT_MAX_SPAN_DAYS, create_application};
pub use balance::{LeaveBalance, leave_balance};
pub use store::{ApplicationFilter, LeaveApplicationStore};

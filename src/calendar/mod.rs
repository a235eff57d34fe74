//! Holiday calendar and business-day counting.
//!
//! [`HolidayCalendar`] answers whether a date is a declared holiday.
//! [`WorkCalendar`] adds the weekly off-day and counts business days
//! across inclusive date ranges.

mod business_days;
mod holidays;

pub use business_days::{DayBreakdown, WorkCalendar, calendar_days_inclusive};
pub use holidays::HolidayCalendar;

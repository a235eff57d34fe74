//! Business-day counting.
//!
//! A business day is a calendar day that is neither the organisation's
//! weekly off-day nor a declared holiday. The off-day is configured as a
//! [`chrono::Weekday`], so no numbering scheme is assumed.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::Holiday;

use super::HolidayCalendar;

/// A holiday calendar combined with a single weekly off-day.
///
/// # Example
///
/// ```
/// use leave_engine::calendar::{HolidayCalendar, WorkCalendar};
/// use leave_engine::models::Holiday;
/// use chrono::{NaiveDate, Weekday};
///
/// let holidays = HolidayCalendar::new(vec![Holiday {
///     date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     name: "New Year's Day".to_string(),
/// }]);
/// // 2025-01-02 is a Thursday
/// let calendar = WorkCalendar::new(Weekday::Thu, holidays);
///
/// let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
/// assert_eq!(calendar.count_business_days(start, end), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkCalendar {
    weekly_off_day: Weekday,
    holidays: HolidayCalendar,
}

/// How the days of a date range split between working and excluded days.
///
/// `total_calendar_days == business_days + off_days + holidays.len()`.
/// A holiday that falls on the weekly off-day is counted once, as an off-day,
/// and is not listed in `holidays`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBreakdown {
    /// Calendar days in the range, both ends inclusive.
    pub total_calendar_days: u32,
    /// Days that are neither off-days nor holidays.
    pub business_days: u32,
    /// Days falling on the weekly off-day.
    pub off_days: u32,
    /// Holidays on working weekdays within the range.
    pub holidays: Vec<Holiday>,
}

impl DayBreakdown {
    fn empty() -> Self {
        Self {
            total_calendar_days: 0,
            business_days: 0,
            off_days: 0,
            holidays: Vec::new(),
        }
    }

    /// Days in the range that were not counted as business days.
    pub fn excluded_days(&self) -> u32 {
        self.off_days + self.holidays.len() as u32
    }
}

impl WorkCalendar {
    /// Creates a work calendar with the given weekly off-day and holidays.
    pub fn new(weekly_off_day: Weekday, holidays: HolidayCalendar) -> Self {
        Self {
            weekly_off_day,
            holidays,
        }
    }

    /// The configured weekly off-day.
    pub fn weekly_off_day(&self) -> Weekday {
        self.weekly_off_day
    }

    /// The holiday calendar in use.
    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }

    /// Returns true if the date is the weekly off-day.
    pub fn is_off_day(&self, date: NaiveDate) -> bool {
        date.weekday() == self.weekly_off_day
    }

    /// Returns true if the date is neither the weekly off-day nor a holiday.
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        !self.is_off_day(date) && !self.holidays.contains(date)
    }

    /// Counts business days in `[start, end]`, both ends inclusive.
    ///
    /// A reversed range (`start > end`) has no business days and returns 0.
    pub fn count_business_days(&self, start: NaiveDate, end: NaiveDate) -> u32 {
        if start > end {
            return 0;
        }
        start
            .iter_days()
            .take_while(|date| *date <= end)
            .filter(|date| self.is_business_day(*date))
            .count() as u32
    }

    /// Splits `[start, end]` into business days, off-days and holidays.
    ///
    /// A reversed range yields an all-zero breakdown.
    pub fn breakdown(&self, start: NaiveDate, end: NaiveDate) -> DayBreakdown {
        if start > end {
            return DayBreakdown::empty();
        }

        let mut breakdown = DayBreakdown::empty();
        for date in start.iter_days().take_while(|date| *date <= end) {
            breakdown.total_calendar_days += 1;
            if self.is_off_day(date) {
                breakdown.off_days += 1;
            } else if let Some(name) = self.holidays.is_holiday(date).name {
                breakdown.holidays.push(Holiday { date, name });
            } else {
                breakdown.business_days += 1;
            }
        }
        breakdown
    }
}

/// Calendar days in `[start, end]`, both ends inclusive, or 0 for a reversed range.
pub fn calendar_days_inclusive(start: NaiveDate, end: NaiveDate) -> u32 {
    if start > end {
        return 0;
    }
    ((end - start).num_days() + 1) as u32
}

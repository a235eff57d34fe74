//! Holiday calendar lookup.
//!
//! The calendar is built from an injected list of [`Holiday`] values,
//! usually loaded from the per-year YAML files in the configuration
//! directory. Nothing here is hardcoded to a particular year or locale.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{Holiday, HolidayLookup};

/// A fixed set of designated non-working days.
///
/// # Example
///
/// ```
/// use leave_engine::calendar::HolidayCalendar;
/// use leave_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::new(vec![Holiday {
///     date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     name: "New Year's Day".to_string(),
/// }]);
///
/// let lookup = calendar.is_holiday(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
/// assert!(lookup.is_holiday);
/// assert_eq!(lookup.name.as_deref(), Some("New Year's Day"));
///
/// assert!(!calendar.is_holiday(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()).is_holiday);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    holidays: BTreeMap<NaiveDate, String>,
}

impl HolidayCalendar {
    /// Builds a calendar from a list of holidays.
    ///
    /// When the same date appears more than once the first name is kept.
    pub fn new(holidays: impl IntoIterator<Item = Holiday>) -> Self {
        let mut map = BTreeMap::new();
        for holiday in holidays {
            map.entry(holiday.date).or_insert(holiday.name);
        }
        Self { holidays: map }
    }

    /// Looks a date up. Dates not in the calendar are simply not holidays.
    pub fn is_holiday(&self, date: NaiveDate) -> HolidayLookup {
        match self.holidays.get(&date) {
            Some(name) => HolidayLookup::holiday(name.clone()),
            None => HolidayLookup::not_holiday(),
        }
    }

    /// Returns true if the date is a holiday, without cloning its name.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.holidays.contains_key(&date)
    }

    /// Number of holidays in the calendar.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Returns true if the calendar has no holidays.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}

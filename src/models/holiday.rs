//! Holiday model and lookup result.
//!
//! This module contains the [`Holiday`] type loaded from the holiday
//! configuration and the [`HolidayLookup`] answer returned by the calendar.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A designated non-working day.
///
/// # Example
///
/// ```
/// use leave_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2025, 7, 26).unwrap(),
///     name: "Independence Day".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Holiday {
    /// The calendar date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday (e.g., "Independence Day").
    pub name: String,
}

/// The answer to "is this date a holiday?".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayLookup {
    /// Whether the date is a designated holiday.
    pub is_holiday: bool,
    /// The holiday's name, present only when `is_holiday` is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl HolidayLookup {
    /// A lookup result for a date that is a holiday.
    pub fn holiday(name: impl Into<String>) -> Self {
        Self {
            is_holiday: true,
            name: Some(name.into()),
        }
    }

    /// A lookup result for an ordinary date.
    pub fn not_holiday() -> Self {
        Self {
            is_holiday: false,
            name: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_holiday() {
        let json = r#"{ "date": "2025-01-01", "name": "New Year's Day" }"#;
        let holiday: Holiday = serde_json::from_str(json).unwrap();
        assert_eq!(holiday.date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(holiday.name, "New Year's Day");
    }

    #[test]
    fn test_lookup_not_holiday_omits_name() {
        let json = serde_json::to_string(&HolidayLookup::not_holiday()).unwrap();
        assert_eq!(json, r#"{"is_holiday":false}"#);
    }

    #[test]
    fn test_lookup_holiday_includes_name() {
        let json = serde_json::to_string(&HolidayLookup::holiday("Victory Day")).unwrap();
        assert!(json.contains("\"is_holiday\":true"));
        assert!(json.contains("\"name\":\"Victory Day\""));
    }
}

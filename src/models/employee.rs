//! Employee model and the directory used to look employees up.
//!
//! The leave engine does not own employee records. It reads nationality,
//! join date and years of service through the [`EmployeeDirectory`] trait;
//! [`StaffDirectory`] is the in-memory implementation loaded from
//! configuration.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An employee record as served by the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Nationality as recorded by HR (e.g., "Maldivian").
    pub nationality: String,
    /// The date the employee joined.
    pub join_date: NaiveDate,
    /// Completed years of service, fractional (e.g., 2.1).
    pub years_of_service: Decimal,
}

/// Looks employees up by id.
pub trait EmployeeDirectory {
    /// Returns the employee with the given id, if any.
    fn find(&self, id: &str) -> Option<&Employee>;
}

/// An in-memory employee directory.
///
/// # Example
///
/// ```
/// use leave_engine::models::{Employee, EmployeeDirectory, StaffDirectory};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let directory = StaffDirectory::new(vec![Employee {
///     id: "EMP-001".to_string(),
///     name: "Aishath Hassan".to_string(),
///     nationality: "Maldivian".to_string(),
///     join_date: NaiveDate::from_ymd_opt(2022, 3, 1).unwrap(),
///     years_of_service: Decimal::new(21, 1),
/// }]);
///
/// assert!(directory.find("EMP-001").is_some());
/// assert!(directory.find("EMP-999").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaffDirectory {
    employees: HashMap<String, Employee>,
}

impl StaffDirectory {
    /// Builds a directory from a list of employees. Later duplicates replace earlier ones.
    pub fn new(employees: Vec<Employee>) -> Self {
        Self {
            employees: employees.into_iter().map(|e| (e.id.clone(), e)).collect(),
        }
    }

    /// Number of employees in the directory.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the directory holds no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl EmployeeDirectory for StaffDirectory {
    fn find(&self, id: &str) -> Option<&Employee> {
        self.employees.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: &str, nationality: &str) -> Employee {
        Employee {
            id: id.to_string(),
            name: format!("Employee {}", id),
            nationality: nationality.to_string(),
            join_date: NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(),
            years_of_service: Decimal::new(35, 1),
        }
    }

    #[test]
    fn test_deserialize_employee_with_string_years() {
        let json = r#"{
            "id": "EMP-002",
            "name": "Rahim Uddin",
            "nationality": "Bangladeshi",
            "join_date": "2022-01-10",
            "years_of_service": "3.1"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.nationality, "Bangladeshi");
        assert_eq!(employee.years_of_service, Decimal::new(31, 1));
    }

    #[test]
    fn test_find_by_id() {
        let directory = StaffDirectory::new(vec![
            employee("EMP-001", "Maldivian"),
            employee("EMP-002", "Nepali"),
        ]);

        assert_eq!(directory.len(), 2);
        assert_eq!(directory.find("EMP-002").unwrap().nationality, "Nepali");
        assert!(directory.find("emp-002").is_none());
    }

    #[test]
    fn test_duplicate_id_keeps_last() {
        let directory = StaffDirectory::new(vec![
            employee("EMP-001", "Maldivian"),
            employee("EMP-001", "Indian"),
        ]);

        assert_eq!(directory.len(), 1);
        assert_eq!(directory.find("EMP-001").unwrap().nationality, "Indian");
    }

    #[test]
    fn test_empty_directory() {
        let directory = StaffDirectory::default();
        assert!(directory.is_empty());
        assert!(directory.find("EMP-001").is_none());
    }
}

//! Employee and organization directory records.
//!
//! These are the people the salary engine pays and the corporate clients
//! whose invoiced jobs show up in the organization revenue report.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An employee of the shop.
///
/// # Examples
///
/// ```
/// use detailing_payroll::models::Employee;
///
/// let employee = Employee::new("emp_001", "Anna");
/// assert_eq!(employee.id, "emp_001");
/// assert_eq!(employee.name, "Anna");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee, as used in shift rosters.
    pub id: String,
    /// Display name of the employee.
    pub name: String,
}

impl Employee {
    /// Creates a new directory record.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Checks that every employee has a non-empty, unique id.
pub fn validate_directory(employees: &[Employee]) -> EngineResult<()> {
    let mut seen = HashSet::with_capacity(employees.len());
    for employee in employees {
        if employee.id.trim().is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: "id".to_string(),
                message: format!("employee '{}' has an empty id", employee.name),
            });
        }
        if !seen.insert(employee.id.as_str()) {
            return Err(EngineError::InvalidEmployee {
                field: "id".to_string(),
                message: format!("duplicate id '{}'", employee.id),
            });
        }
    }
    Ok(())
}

/// A corporate client that pays for jobs by invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Unique identifier for the organization.
    pub id: String,
    /// Display name of the organization.
    pub name: String,
    /// Free-form billing details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{"id": "emp_001", "name": "Anna"}"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee, Employee::new("emp_001", "Anna"));
    }

    #[test]
    fn test_employee_missing_name_is_rejected() {
        let json = r#"{"id": "emp_001"}"#;
        let result: Result<Employee, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_directory_accepts_unique_ids() {
        let employees = vec![Employee::new("e1", "Anna"), Employee::new("e2", "Boris")];
        assert!(validate_directory(&employees).is_ok());
        assert!(validate_directory(&[]).is_ok());
    }

    #[test]
    fn test_validate_directory_rejects_blank_id() {
        let employees = vec![Employee::new("  ", "Anna")];
        match validate_directory(&employees) {
            Err(EngineError::InvalidEmployee { message, .. }) => {
                assert!(message.contains("'Anna' has an empty id"))
            }
            other => panic!("expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_organization_without_details() {
        let json = r#"{"id": "org_001", "name": "City Taxi"}"#;
        let organization: Organization = serde_json::from_str(json).unwrap();
        assert_eq!(organization.name, "City Taxi");
        assert!(organization.details.is_none());
    }

    #[test]
    fn test_serialize_organization_skips_empty_details() {
        let organization = Organization {
            id: "org_001".to_string(),
            name: "City Taxi".to_string(),
            details: None,
        };
        let json = serde_json::to_string(&organization).unwrap();
        assert!(!json.contains("details"));
    }
}

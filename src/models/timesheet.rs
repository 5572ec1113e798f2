//! Timesheet models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Time logged by a resource on one day.
///
/// An entry is booked either against a task or against an administrative
/// type (holiday, training, ...), never both.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetDto {
    pub id: Option<String>,
    pub date: Option<NaiveDate>,
    pub hours: Option<f64>,
    pub notes: Option<String>,
    pub resource_id: Option<String>,
    pub project_id: Option<String>,
    pub task_id: Option<String>,
    pub admin_type_id: Option<String>,
    pub approved: Option<bool>,
    pub create_date: Option<DateTime<Utc>>,
    pub modify_date: Option<DateTime<Utc>>,
}

impl TimesheetDto {
    /// Whether this entry is booked against an administrative type.
    pub fn is_admin_time(&self) -> bool {
        self.admin_type_id.is_some()
    }

    pub fn is_approved(&self) -> bool {
        self.approved.unwrap_or(false)
    }
}

/// Non-project time category, e.g. vacation.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetAdminTypeDto {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// Body for logging time.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetCreateDto {
    pub date: NaiveDate,
    pub hours: f64,
    pub resource_id: Option<String>,
    pub task_id: Option<String>,
    pub admin_type_id: Option<String>,
    pub notes: Option<String>,
}

impl TimesheetCreateDto {
    /// Time against a task.
    pub fn for_task(task_id: impl Into<String>, date: NaiveDate, hours: f64) -> Self {
        Self {
            date,
            hours,
            resource_id: None,
            task_id: Some(task_id.into()),
            admin_type_id: None,
            notes: None,
        }
    }

    /// Time against an administrative type.
    pub fn for_admin_type(admin_type_id: impl Into<String>, date: NaiveDate, hours: f64) -> Self {
        Self {
            date,
            hours,
            resource_id: None,
            task_id: None,
            admin_type_id: Some(admin_type_id.into()),
            notes: None,
        }
    }
}

/// Body for updating a time entry. Only set fields are changed.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetUpdateDto {
    pub hours: Option<f64>,
    pub notes: Option<String>,
}

//! Project models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::tag::TagDto;

/// A ProjectManager project.
///
/// Every field is optional: list endpoints honour `$select`, and the server
/// omits fields that have no value.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    /// Project identifier.
    pub id: Option<String>,

    /// Short numeric identifier shown in the web UI.
    pub short_id: Option<String>,

    pub name: Option<String>,
    pub description: Option<String>,

    /// Short code used as a prefix for task identifiers.
    pub short_code: Option<String>,

    pub status: Option<ProjectStatusDto>,
    pub priority: Option<ProjectPriorityDto>,
    pub manager: Option<ProjectManagerDto>,
    pub customer: Option<ProjectCustomerDto>,
    pub folder: Option<ProjectFolderDto>,

    /// Charge code for accounting.
    pub charge_code: Option<String>,

    pub planned_start_date: Option<NaiveDate>,
    pub planned_finish_date: Option<NaiveDate>,
    pub actual_start_date: Option<NaiveDate>,
    pub actual_finish_date: Option<NaiveDate>,

    /// Completion, 0 to 100.
    pub percent_complete: Option<i32>,

    pub budget: Option<f64>,
    pub planned_cost: Option<f64>,
    pub actual_cost: Option<f64>,
    pub hourly_rate: Option<f64>,

    pub create_date: Option<DateTime<Utc>>,
    pub modify_date: Option<DateTime<Utc>>,

    /// Whether the current user starred this project.
    pub favorite: Option<bool>,

    /// Whether this project is a template for new projects.
    pub is_template: Option<bool>,

    pub members: Option<Vec<ProjectMemberDto>>,
    pub tags: Option<Vec<TagDto>>,

    /// Custom field values.
    pub fields: Option<Vec<ProjectFieldValueDto>>,
}

impl ProjectDto {
    /// Whether the project has reached 100% completion.
    pub fn is_complete(&self) -> bool {
        self.percent_complete.is_some_and(|p| p >= 100)
    }

    /// Remaining budget, when both budget and actual cost are known.
    pub fn remaining_budget(&self) -> Option<f64> {
        Some(self.budget? - self.actual_cost?)
    }

    /// Value of a custom field by name.
    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.fields
            .as_deref()?
            .iter()
            .find(|f| f.name.as_deref() == Some(name))
            .and_then(|f| f.value.as_deref())
    }
}

/// Workflow status of a project.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStatusDto {
    pub id: Option<String>,
    pub name: Option<String>,
    pub is_deleted: Option<bool>,
}

/// Priority level of a project.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPriorityDto {
    pub id: Option<String>,
    pub name: Option<String>,
    /// Sort weight; higher is more urgent.
    pub value: Option<i32>,
}

/// The resource managing a project.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectManagerDto {
    pub id: Option<String>,
    pub name: Option<String>,
    pub initials: Option<String>,
    pub avatar_url: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCustomerDto {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFolderDto {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// A user with access to a project.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMemberDto {
    pub id: Option<String>,
    pub name: Option<String>,
    pub initials: Option<String>,
    pub avatar_url: Option<String>,
    /// Access level, e.g. `"Editor"` or `"Viewer"`.
    pub permission: Option<String>,
}

/// A custom field value attached to a project.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFieldValueDto {
    pub id: Option<String>,
    pub short_id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub field_type: Option<String>,
    pub value: Option<String>,
}

/// Body for creating a project.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCreateDto {
    pub name: String,
    pub description: Option<String>,
    pub folder_id: Option<String>,
    pub customer_id: Option<String>,
    pub manager_id: Option<String>,
    pub status_id: Option<String>,
    pub priority_id: Option<String>,
    pub charge_code: Option<String>,
    pub planned_start_date: Option<NaiveDate>,
    pub planned_finish_date: Option<NaiveDate>,
    pub budget: Option<f64>,
    pub hourly_rate: Option<f64>,
    /// Copy tasks and settings from this template project.
    pub template_id: Option<String>,
}

impl ProjectCreateDto {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Body for updating a project. Only set fields are changed.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdateDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub folder_id: Option<String>,
    pub customer_id: Option<String>,
    pub manager_id: Option<String>,
    pub status_id: Option<String>,
    pub priority_id: Option<String>,
    pub charge_code: Option<String>,
    pub planned_start_date: Option<NaiveDate>,
    pub planned_finish_date: Option<NaiveDate>,
    pub budget: Option<f64>,
    pub hourly_rate: Option<f64>,
    pub favorite: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_deserialize_full() {
        let json = r#"{
            "id": "9d0e6d0c-1c2a-4d6e-8a43-2f3c1f7a1b10",
            "shortId": "42",
            "name": "Website Relaunch",
            "shortCode": "WEB",
            "status": {"id": "s1", "name": "In Progress", "isDeleted": false},
            "priority": {"id": "p1", "name": "High", "value": 3},
            "manager": {"id": "r1", "name": "Sam Doe", "initials": "SD"},
            "plannedStartDate": "2024-03-01",
            "plannedFinishDate": "2024-06-30",
            "percentComplete": 35,
            "budget": 50000.0,
            "actualCost": 12500.5,
            "createDate": "2024-02-20T09:15:00Z",
            "members": [{"id": "r1", "name": "Sam Doe", "permission": "Editor"}],
            "tags": [{"id": "t1", "name": "marketing", "color": "blue"}],
            "fields": [{"name": "Region", "type": "Text", "value": "EMEA"}]
        }"#;

        let project: ProjectDto = serde_json::from_str(json).expect("Failed to deserialize project");

        assert_eq!(project.name.as_deref(), Some("Website Relaunch"));
        assert_eq!(project.status.as_ref().unwrap().name.as_deref(), Some("In Progress"));
        assert_eq!(project.priority.as_ref().unwrap().value, Some(3));
        assert_eq!(
            project.planned_start_date,
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
        assert_eq!(project.members.as_ref().unwrap().len(), 1);
        assert_eq!(project.field_value("Region"), Some("EMEA"));
        assert_eq!(project.remaining_budget(), Some(37499.5));
        assert!(!project.is_complete());
    }

    #[test]
    fn test_project_deserialize_minimal() {
        let project: ProjectDto = serde_json::from_str("{}").expect("Failed to deserialize");
        assert_eq!(project, ProjectDto::default());
        assert!(project.remaining_budget().is_none());
        assert!(project.field_value("Region").is_none());
    }

    #[test]
    fn test_project_nulls_are_absent() {
        let json = r#"{"id": "p1", "status": null, "tags": null, "budget": null}"#;
        let project: ProjectDto = serde_json::from_str(json).unwrap();
        assert!(project.status.is_none());
        assert!(project.tags.is_none());
        assert!(project.budget.is_none());
    }

    #[test]
    fn test_project_create_omits_unset_fields() {
        let body = ProjectCreateDto {
            budget: Some(1000.0),
            ..ProjectCreateDto::new("New Project")
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value, serde_json::json!({"name": "New Project", "budget": 1000.0}));
    }

    #[test]
    fn test_project_update_empty_is_empty_object() {
        let value = serde_json::to_value(ProjectUpdateDto::default()).unwrap();
        assert_eq!(value, serde_json::json!({}));
    }
}

//! Task models.
//!
//! Tasks belong to a project and carry schedule, effort and cost figures plus
//! the resources assigned to them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::tag::TagDto;


/// A task within a project.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    pub id: Option<String>,

    /// Human-readable identifier, e.g. `"WEB-12"`.
    pub short_id: Option<String>,

    pub name: Option<String>,
    pub description: Option<String>,

    /// The project this task belongs to.
    pub project: Option<TaskProjectDto>,

    pub status: Option<TaskStatusDto>,
    pub tags: Option<Vec<TagDto>>,
    pub assignees: Option<Vec<TaskAssigneeDto>>,

    /// Checklist items.
    pub todos: Option<Vec<TaskTodoDto>>,

    pub planned_start_date: Option<NaiveDate>,
    pub planned_finish_date: Option<NaiveDate>,
    pub actual_start_date: Option<NaiveDate>,
    pub actual_finish_date: Option<NaiveDate>,

    /// Planned duration in days.
    pub planned_duration: Option<i32>,

    /// Planned effort in minutes.
    pub planned_effort: Option<i32>,

    /// Logged effort in minutes.
    pub actual_effort: Option<i32>,

    pub planned_cost: Option<f64>,
    pub actual_cost: Option<f64>,

    /// Completion, 0 to 100.
    pub percent_complete: Option<i32>,

    /// Priority on a 0-1000 scale.
    pub priority: Option<i32>,

    /// Work breakdown structure code, e.g. `"1.2.3"`.
    pub wbs: Option<String>,

    /// Display color.
    pub theme: Option<String>,

    pub is_summary: Option<bool>,
    pub is_milestone: Option<bool>,
    pub is_locked: Option<bool>,

    pub create_date: Option<DateTime<Utc>>,
    pub modify_date: Option<DateTime<Utc>>,
}

impl TaskDto {
    /// Whether the task is finished, either by status or by completion.
    pub fn is_done(&self) -> bool {
        self.status.as_ref().and_then(|s| s.is_done).unwrap_or(false)
            || self.percent_complete.is_some_and(|p| p >= 100)
    }

    pub fn is_milestone(&self) -> bool {
        self.is_milestone.unwrap_or(false)
    }

    /// Names of assigned resources, skipping any without a name.
    pub fn assignee_names(&self) -> Vec<&str> {
        self.assignees
            .iter()
            .flatten()
            .filter_map(|a| a.name.as_deref())
            .collect()
    }
}

/// The owning project as embedded in a task.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskProjectDto {
    pub id: Option<String>,
    pub short_id: Option<String>,
    pub name: Option<String>,
}

/// A column on a project's task board.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatusDto {
    pub id: Option<String>,
    pub name: Option<String>,
    /// Position on the board, left to right.
    pub order: Option<i32>,
    /// Whether tasks in this status count as finished.
    pub is_done: Option<bool>,
}

/// A resource assigned to a task.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskAssigneeDto {
    pub id: Option<String>,
    pub name: Option<String>,
    pub initials: Option<String>,
    pub avatar_url: Option<String>,
    pub color: Option<String>,
    /// Share of the resource's time, 0.0 to 1.0.
    pub allocation: Option<f64>,
}

/// A checklist item on a task.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskTodoDto {
    pub id: Option<String>,
    pub text: Option<String>,
    pub complete: Option<bool>,
    pub create_date: Option<DateTime<Utc>>,
    pub modify_date: Option<DateTime<Utc>>,
}

/// Body for creating a task in a project.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreateDto {
    pub name: String,
    pub description: Option<String>,
    pub status_id: Option<String>,
    pub planned_start_date: Option<NaiveDate>,
    pub planned_finish_date: Option<NaiveDate>,
    pub planned_duration: Option<i32>,
    pub planned_effort: Option<i32>,
    pub planned_cost: Option<f64>,
    pub priority: Option<i32>,
    /// Resource identifiers to assign.
    pub assignees: Option<Vec<String>>,
    pub is_milestone: Option<bool>,
    pub theme: Option<String>,
}

impl TaskCreateDto {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Body for updating a task. Only set fields are changed.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdateDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status_id: Option<String>,
    pub planned_start_date: Option<NaiveDate>,
    pub planned_finish_date: Option<NaiveDate>,
    pub actual_start_date: Option<NaiveDate>,
    pub actual_finish_date: Option<NaiveDate>,
    pub planned_duration: Option<i32>,
    pub planned_effort: Option<i32>,
    pub planned_cost: Option<f64>,
    pub actual_cost: Option<f64>,
    pub percent_complete: Option<i32>,
    pub priority: Option<i32>,
    pub is_locked: Option<bool>,
    pub is_milestone: Option<bool>,
    pub theme: Option<String>,
}

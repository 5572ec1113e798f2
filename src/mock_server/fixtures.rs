//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use chrono::NaiveDate;

use crate::models::{TaskProjectDto, TaskStatusDto};
use crate::{NotificationDto, ProjectDto, ProjectStatusDto, TaskDto};

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    // =========================================================================
    // Project Fixtures
    // =========================================================================

    /// Create a project with only an ID and a name.
    pub fn minimal_project(id: &str, name: &str) -> ProjectDto {
        ProjectDto {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    /// Create a scheduled project with a budget and progress.
    pub fn scheduled_project(id: &str, name: &str, budget: f64, actual_cost: f64) -> ProjectDto {
        ProjectDto {
            planned_start_date: NaiveDate::from_ymd_opt(2024, 1, 8),
            planned_finish_date: NaiveDate::from_ymd_opt(2024, 6, 28),
            percent_complete: Some(40),
            budget: Some(budget),
            actual_cost: Some(actual_cost),
            status: Some(ProjectStatusDto {
                id: Some("status-active".to_string()),
                name: Some("Active".to_string()),
                is_deleted: Some(false),
            }),
            ..Self::minimal_project(id, name)
        }
    }

    // =========================================================================
    // Task Fixtures
    // =========================================================================

    /// Create a task that belongs to a project.
    pub fn minimal_task(id: &str, project_id: &str, name: &str) -> TaskDto {
        TaskDto {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            project: Some(TaskProjectDto {
                id: Some(project_id.to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    /// Create a completed task.
    pub fn done_task(id: &str, project_id: &str, name: &str) -> TaskDto {
        TaskDto {
            percent_complete: Some(100),
            status: Some(TaskStatusDto {
                id: Some("status-done".to_string()),
                name: Some("Done".to_string()),
                order: Some(3),
                is_done: Some(true),
            }),
            ..Self::minimal_task(id, project_id, name)
        }
    }

    // =========================================================================
    // Notification Fixtures
    // =========================================================================

    /// Create a task assignment notification.
    pub fn notification(id: &str, read: bool) -> NotificationDto {
        NotificationDto {
            id: Some(id.to_string()),
            sender_name: Some("Ada Lovelace".to_string()),
            notification_type: Some("TaskAssigned".to_string()),
            message: Some("You were assigned a task".to_string()),
            read: Some(read),
            ..Default::default()
        }
    }

    // =========================================================================
    // Scenarios
    // =========================================================================

    /// The data a fresh [`MockServer`](super::MockServer) starts with.
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario {
            projects: vec![
                Self::scheduled_project("project-alpha", "Website Relaunch", 50_000.0, 20_000.0),
                Self::minimal_project("project-beta", "Office Move"),
            ],
            tasks: vec![
                Self::minimal_task("task-1", "project-alpha", "Draft sitemap"),
                Self::done_task("task-2", "project-alpha", "Kickoff meeting"),
                Self::minimal_task("task-3", "project-beta", "Book movers"),
            ],
            notifications: vec![
                Self::notification("notification-1", false),
                Self::notification("notification-2", true),
            ],
        }
    }
}

/// A consistent set of fixtures.
#[derive(Debug, Clone)]
pub struct DefaultScenario {
    pub projects: Vec<ProjectDto>,
    pub tasks: Vec<TaskDto>,
    pub notifications: Vec<NotificationDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scenario_tasks_reference_projects() {
        let scenario = Fixtures::default_scenario();
        let project_ids: Vec<_> = scenario.projects.iter().filter_map(|p| p.id.as_deref()).collect();

        for task in &scenario.tasks {
            let project_id = task.project.as_ref().and_then(|p| p.id.as_deref());
            assert!(project_ids.contains(&project_id.unwrap()));
        }
    }

    #[test]
    fn test_done_task_is_done() {
        assert!(Fixtures::done_task("t", "p", "Finished").is_done());
        assert!(!Fixtures::minimal_task("t", "p", "Open").is_done());
    }
}

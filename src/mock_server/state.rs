//! Mock server state management.
//!
//! Provides the in-memory data store for the mock ProjectManager API server.

use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    NotificationDto, ProjectCreateDto, ProjectDto, ProjectUpdateDto, TaskCreateDto, TaskDto,
    TaskUpdateDto,
};
use crate::models::{TaskProjectDto, TaskStatusDto};

/// Next free `{prefix}-NNNNNN` key in `taken`.
///
/// Numbers are zero-padded so string order matches creation order, and keys
/// already present (such as seeded fixtures) are skipped.
fn allocate_id<V>(next_id: &mut u64, prefix: &str, taken: &BTreeMap<String, V>) -> String {
    loop {
        *next_id += 1;
        let id = format!("{prefix}-{:06}", *next_id);
        if !taken.contains_key(&id) {
            return id;
        }
    }
}

/// State shared between request handlers.
pub type SharedState = Arc<RwLock<MockState>>;

/// Shared state for the mock server.
///
/// Collections are ordered by identifier so `$skip`/`$top` windows are
/// stable across requests.
#[derive(Debug, Default)]
pub struct MockState {
    /// Projects indexed by ID.
    pub projects: BTreeMap<String, ProjectDto>,

    /// Tasks indexed by ID.
    pub tasks: BTreeMap<String, TaskDto>,

    /// Notifications indexed by ID.
    pub notifications: BTreeMap<String, NotificationDto>,

    /// Optional API key. If set, requests must carry it as a bearer token.
    pub required_token: Option<String>,

    next_id: u64,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> SharedState {
        Arc::new(RwLock::new(self))
    }

    /// Add a project to the state. Projects without an ID are ignored.
    pub fn with_project(mut self, project: ProjectDto) -> Self {
        if let Some(id) = project.id.clone() {
            self.projects.insert(id, project);
        }
        self
    }

    /// Add a task to the state. Tasks without an ID are ignored.
    pub fn with_task(mut self, task: TaskDto) -> Self {
        if let Some(id) = task.id.clone() {
            self.tasks.insert(id, task);
        }
        self
    }

    /// Add a notification to the state.
    pub fn with_notification(mut self, notification: NotificationDto) -> Self {
        if let Some(id) = notification.id.clone() {
            self.notifications.insert(id, notification);
        }
        self
    }

    /// Set the required API key.
    pub fn with_required_token(mut self, token: &str) -> Self {
        self.required_token = Some(token.to_string());
        self
    }


    /// List tasks, optionally restricted to one project.
    pub fn list_tasks(&self, project_id: Option<&str>) -> Vec<&TaskDto> {
        self.tasks
            .values()
            .filter(|t| {
                project_id.map_or(true, |id| {
                    t.project.as_ref().and_then(|p| p.id.as_deref()) == Some(id)
                })
            })
            .collect()
    }

    /// Store a new project and return it.
    pub fn create_project(&mut self, body: ProjectCreateDto) -> ProjectDto {
        let id = allocate_id(&mut self.next_id, "project", &self.projects);
        let project = ProjectDto {
            id: Some(id.clone()),
            name: Some(body.name),
            description: body.description,
            charge_code: body.charge_code,
            planned_start_date: body.planned_start_date,
            planned_finish_date: body.planned_finish_date,
            budget: body.budget,
            hourly_rate: body.hourly_rate,
            percent_complete: Some(0),
            ..Default::default()
        };
        self.projects.insert(id, project.clone());
        project
    }

    /// Apply an update to a project. Returns false if it does not exist.
    pub fn update_project(&mut self, id: &str, body: ProjectUpdateDto) -> bool {
        let Some(project) = self.projects.get_mut(id) else {
            return false;
        };
        if body.name.is_some() {
            project.name = body.name;
        }
        if body.description.is_some() {
            project.description = body.description;
        }
        if body.budget.is_some() {
            project.budget = body.budget;
        }
        if body.favorite.is_some() {
            project.favorite = body.favorite;
        }
        if body.planned_start_date.is_some() {
            project.planned_start_date = body.planned_start_date;
        }
        if body.planned_finish_date.is_some() {
            project.planned_finish_date = body.planned_finish_date;
        }
        true
    }

    /// Remove a project and its tasks. Returns false if it does not exist.
    pub fn delete_project(&mut self, id: &str) -> bool {
        if self.projects.remove(id).is_none() {
            return false;
        }
        self.tasks.retain(|_, t| {
            t.project.as_ref().and_then(|p| p.id.as_deref()) != Some(id)
        });
        true
    }

    /// Store a new task in a project. Returns `None` if the project is missing.
    pub fn create_task(&mut self, project_id: &str, body: TaskCreateDto) -> Option<TaskDto> {
        let project_name = self.projects.get(project_id)?.name.clone();
        let id = allocate_id(&mut self.next_id, "task", &self.tasks);
        let task = TaskDto {
            id: Some(id.clone()),
            name: Some(body.name),
            description: body.description,
            project: Some(TaskProjectDto {
                id: Some(project_id.to_string()),
                name: project_name,
                ..Default::default()
            }),
            status: body.status_id.map(|status_id| TaskStatusDto {
                id: Some(status_id),
                ..Default::default()
            }),
            planned_start_date: body.planned_start_date,
            planned_finish_date: body.planned_finish_date,
            planned_duration: body.planned_duration,
            planned_effort: body.planned_effort,
            planned_cost: body.planned_cost,
            priority: body.priority,
            is_milestone: body.is_milestone,
            theme: body.theme,
            percent_complete: Some(0),
            ..Default::default()
        };
        self.tasks.insert(id, task.clone());
        Some(task)
    }

    /// Apply an update to a task and return the result.
    pub fn update_task(&mut self, id: &str, body: TaskUpdateDto) -> Option<&TaskDto> {
        let task = self.tasks.get_mut(id)?;
        if body.name.is_some() {
            task.name = body.name;
        }
        if body.description.is_some() {
            task.description = body.description;
        }
        if body.percent_complete.is_some() {
            task.percent_complete = body.percent_complete;
        }
        if body.priority.is_some() {
            task.priority = body.priority;
        }
        if body.actual_cost.is_some() {
            task.actual_cost = body.actual_cost;
        }
        if let Some(status_id) = body.status_id {
            task.status = Some(TaskStatusDto {
                id: Some(status_id),
                ..Default::default()
            });
        }
        Some(task)
    }

    /// Number of unread notifications.
    pub fn unread_count(&self) -> u32 {
        let unread = self
            .notifications
            .values()
            .filter(|n| !n.is_read())
            .count();
        u32::try_from(unread).unwrap_or(u32::MAX)
    }

    /// Set a notification's read flag and return it.
    pub fn set_read(&mut self, id: &str, read: bool) -> Option<&NotificationDto> {
        let notification = self.notifications.get_mut(id)?;
        notification.read = Some(read);
        Some(notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_server::Fixtures;

    #[test]
    fn test_state_add_and_list_tasks() {
        let state = MockState::new()
            .with_project(Fixtures::minimal_project("p1", "Alpha"))
            .with_task(Fixtures::minimal_task("t1", "p1", "Write brief"))
            .with_task(Fixtures::minimal_task("t2", "p2", "Elsewhere"));

        assert_eq!(state.list_tasks(None).len(), 2);
        assert_eq!(state.list_tasks(Some("p1")).len(), 1);
        assert!(state.list_tasks(Some("missing")).is_empty());
    }

    #[test]
    fn test_state_create_task_requires_project() {
        let mut state = MockState::new().with_project(Fixtures::minimal_project("p1", "Alpha"));

        assert!(state
            .create_task("missing", TaskCreateDto::new("Orphan"))
            .is_none());

        let task = state.create_task("p1", TaskCreateDto::new("Kickoff")).unwrap();
        assert_eq!(task.name.as_deref(), Some("Kickoff"));
        assert_eq!(
            task.project.as_ref().unwrap().name.as_deref(),
            Some("Alpha")
        );
        assert!(state.tasks.contains_key(task.id.as_deref().unwrap()));
    }

    #[test]
    fn test_state_create_task_keeps_seeded_tasks() {
        let mut state = MockState::new()
            .with_project(Fixtures::minimal_project("p1", "Alpha"))
            .with_task(Fixtures::minimal_task("task-000001", "p1", "Seeded"));

        let task = state.create_task("p1", TaskCreateDto::new("New")).unwrap();

        assert_eq!(task.id.as_deref(), Some("task-000002"));
        assert_eq!(state.tasks["task-000001"].name.as_deref(), Some("Seeded"));
        assert_eq!(state.tasks.len(), 2);
    }

    #[test]
    fn test_state_allocated_ids_sort_in_creation_order() {
        let mut state = MockState::new().with_project(Fixtures::minimal_project("p1", "Alpha"));

        let created: Vec<String> = (0..12)
            .map(|i| {
                state
                    .create_task("p1", TaskCreateDto::new(format!("Task {i}")))
                    .unwrap()
                    .id
                    .unwrap()
            })
            .collect();

        let listed: Vec<String> = state
            .list_tasks(Some("p1"))
            .into_iter()
            .filter_map(|t| t.id.clone())
            .collect();
        assert_eq!(listed, created);
    }

    #[test]
    fn test_state_delete_project_cascades() {
        let mut state = MockState::new()
            .with_project(Fixtures::minimal_project("p1", "Alpha"))
            .with_task(Fixtures::minimal_task("t1", "p1", "Write brief"));

        assert!(state.delete_project("p1"));
        assert!(state.tasks.is_empty());
        assert!(!state.delete_project("p1"));
    }

    #[test]
    fn test_state_update_project() {
        let mut state = MockState::new().with_project(Fixtures::minimal_project("p1", "Original"));

        let updated = state.update_project(
            "p1",
            ProjectUpdateDto {
                name: Some("Renamed".to_string()),
                favorite: Some(true),
                ..Default::default()
            },
        );

        assert!(updated);
        let project = &state.projects["p1"];
        assert_eq!(project.name.as_deref(), Some("Renamed"));
        assert_eq!(project.favorite, Some(true));
    }

    #[test]
    fn test_state_unread_count() {
        let mut state = MockState::new()
            .with_notification(Fixtures::notification("n1", false))
            .with_notification(Fixtures::notification("n2", true));

        assert_eq!(state.unread_count(), 1);
        state.set_read("n1", true);
        assert_eq!(state.unread_count(), 0);
    }
}

//! Resource models.
//!
//! A resource is a person (or piece of equipment) that can be assigned work
//! and log time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// A workspace resource.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDto {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    pub country_code: Option<String>,
    pub notes: Option<String>,
    pub role_name: Option<String>,
    pub hourly_rate: Option<f64>,
    pub is_active: Option<bool>,

    /// Who approves this resource's timesheets.
    pub approver: Option<ResourceApproverDto>,

    pub teams: Option<Vec<ResourceTeamDto>>,
    pub skills: Option<Vec<ResourceSkillDto>>,

    /// Last time the resource was seen online.
    pub online_date_time: Option<DateTime<Utc>>,
    pub create_date: Option<DateTime<Utc>>,
    pub modify_date: Option<DateTime<Utc>>,
}

impl ResourceDto {
    /// First and last name joined, when at least one is known.
    pub fn full_name(&self) -> Option<String> {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(name), None) | (None, Some(name)) => Some(name.to_string()),
            (None, None) => None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.is_active.unwrap_or(false)
    }

    /// Whether the resource belongs to the named team.
    pub fn in_team(&self, team: &str) -> bool {
        self.teams
            .iter()
            .flatten()
            .any(|t| t.name.as_deref() == Some(team))
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceApproverDto {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceTeamDto {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSkillDto {
    pub id: Option<String>,
    pub name: Option<String>,
    /// Proficiency, 1 (basic) to 5 (expert).
    pub level: Option<i32>,
}

/// Body for creating a resource.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCreateDto {
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country_code: Option<String>,
    pub notes: Option<String>,
    pub role_id: Option<String>,
    pub hourly_rate: Option<f64>,
    pub approver_id: Option<String>,
    pub team_ids: Option<Vec<String>>,
    pub skill_ids: Option<Vec<String>>,
}

impl ResourceCreateDto {
    pub fn new(first_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            ..Default::default()
        }
    }
}

/// Body for updating a resource. Only set fields are changed.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceUpdateDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country_code: Option<String>,
    pub notes: Option<String>,
    pub role_id: Option<String>,
    pub hourly_rate: Option<f64>,
    pub approver_id: Option<String>,
    pub is_active: Option<bool>,
    pub team_ids: Option<Vec<String>>,
    pub skill_ids: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_deserialize() {
        let json = r#"{
            "id": "r1",
            "firstName": "Sam",
            "lastName": "Doe",
            "email": "sam@example.com",
            "hourlyRate": 85.0,
            "isActive": true,
            "approver": {"id": "r9", "name": "Pat Lee"},
            "teams": [{"id": "tm1", "name": "Design"}],
            "skills": [{"id": "sk1", "name": "Figma", "level": 4}],
            "onlineDateTime": "2024-04-02T16:20:00Z"
        }"#;

        let resource: ResourceDto = serde_json::from_str(json).expect("Failed to deserialize resource");

        assert_eq!(resource.full_name().as_deref(), Some("Sam Doe"));
        assert!(resource.is_active());
        assert!(resource.in_team("Design"));
        assert!(!resource.in_team("Finance"));
        assert_eq!(resource.skills.as_ref().unwrap()[0].level, Some(4));
        assert!(resource.online_date_time.is_some());
    }

    #[test]
    fn test_resource_full_name_partial() {
        let only_first = ResourceDto {
            first_name: Some("Sam".to_string()),
            ..Default::default()
        };
        assert_eq!(only_first.full_name().as_deref(), Some("Sam"));
        assert!(ResourceDto::default().full_name().is_none());
        assert!(!ResourceDto::default().is_active());
    }

    #[test]
    fn test_resource_create_body() {
        let body = ResourceCreateDto {
            email: Some("new@example.com".to_string()),
            team_ids: Some(vec!["tm1".to_string()]),
            ..ResourceCreateDto::new("Jordan")
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "firstName": "Jordan",
                "email": "new@example.com",
                "teamIds": ["tm1"]
            })
        );
    }
}

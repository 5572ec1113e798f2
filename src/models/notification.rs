//! Notification models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

/// A notification delivered to the current user.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDto {
    pub id: Option<String>,
    pub sender_id: Option<String>,
    pub sender_name: Option<String>,
    pub sender_initials: Option<String>,
    pub sender_avatar_url: Option<String>,

    /// Kind of event, e.g. `"TaskAssigned"`.
    pub notification_type: Option<String>,

    pub message: Option<String>,
    pub read: Option<bool>,
    pub create_date: Option<DateTime<Utc>>,

    /// Event-specific details, untyped.
    pub data: Option<Map<String, Value>>,
}

impl NotificationDto {
    pub fn is_read(&self) -> bool {
        self.read.unwrap_or(false)
    }
}

/// Number of unread notifications.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationCountDto {
    pub count: Option<u32>,
}

/// Filters for listing notifications.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationQuery {
    /// Return notifications after this one (cursor).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_id: Option<String>,

    /// Comma-separated notification types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_types: Option<String>,

    /// Oldest first when true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asc: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_deserialize_with_data() {
        let json = r#"{
            "id": "n1",
            "senderName": "Sam Doe",
            "notificationType": "TaskAssigned",
            "read": false,
            "createDate": "2024-04-01T08:00:00Z",
            "data": {"taskId": "abc", "taskName": "Test Task"}
        }"#;
        let notification: NotificationDto = serde_json::from_str(json).unwrap();

        assert!(!notification.is_read());
        assert_eq!(
            notification.data.as_ref().unwrap()["taskName"],
            Value::String("Test Task".to_string())
        );
    }

    #[test]
    fn test_notification_query_serialization() {
        let query = NotificationQuery {
            limit: Some(25),
            asc: Some(true),
            from_date: NaiveDate::from_ymd_opt(2024, 1, 31),
            ..Default::default()
        };
        let qs = serde_qs::to_string(&query).unwrap();
        assert!(qs.contains("limit=25"));
        assert!(qs.contains("asc=true"));
        assert!(qs.contains("fromDate=2024-01-31"));
        assert!(!qs.contains("lastId"));
    }
}

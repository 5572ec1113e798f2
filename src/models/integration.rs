//! Integration models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// A third-party integration enabled in the workspace.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationDto {
    pub id: Option<String>,
    pub name: Option<String>,
    /// Identifier of the provider, e.g. `"slack"`.
    pub short_id: Option<String>,
    pub enabled: Option<bool>,
    /// How the integration authenticates, e.g. `"OAuth2"`.
    pub auth_type: Option<String>,
    pub create_date: Option<DateTime<Utc>>,
}

/// A service that can be connected to the workspace.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationProviderDto {
    pub id: Option<String>,
    pub name: Option<String>,
    pub short_id: Option<String>,
    pub category: Option<String>,
    pub requires_oauth: Option<bool>,
    /// Instances of this provider currently set up.
    pub integrations: Option<Vec<IntegrationDto>>,
}

impl IntegrationProviderDto {
    /// Whether any instance of this provider is enabled.
    pub fn is_connected(&self) -> bool {
        self.integrations
            .iter()
            .flatten()
            .any(|i| i.enabled.unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_connected() {
        let json = r#"{
            "id": "prov1",
            "name": "Slack",
            "shortId": "slack",
            "category": "Communication",
            "integrations": [{"id": "i1", "enabled": false}, {"id": "i2", "enabled": true}]
        }"#;
        let provider: IntegrationProviderDto = serde_json::from_str(json).unwrap();
        assert!(provider.is_connected());
        assert!(!IntegrationProviderDto::default().is_connected());
    }
}

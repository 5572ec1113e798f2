//! Workspace and current-user models.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// A workspace the current user belongs to.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkSpaceDto {
    pub id: Option<String>,
    pub name: Option<String>,
    pub company: Option<String>,
    /// Custom subdomain, e.g. `"acme"` for `acme.projectmanager.com`.
    pub custom_domain: Option<String>,
    pub logo_image: Option<String>,
    pub role_name: Option<String>,
    /// Whether this is the user's home workspace.
    pub is_master: Option<bool>,
}

/// Identity of the user the API key belongs to.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkSpaceUserInfoDto {
    pub user_id: Option<String>,
    pub resource_id: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub work_space_id: Option<String>,
    pub work_space_name: Option<String>,
    pub role_name: Option<String>,
    pub is_global_admin: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_me_deserialize() {
        let json = r#"{
            "userId": "u1",
            "email": "sam@example.com",
            "fullName": "Sam Doe",
            "workSpaceName": "Acme",
            "isGlobalAdmin": true
        }"#;
        let me: WorkSpaceUserInfoDto = serde_json::from_str(json).unwrap();
        assert_eq!(me.full_name.as_deref(), Some("Sam Doe"));
        assert_eq!(me.work_space_name.as_deref(), Some("Acme"));
        assert_eq!(me.is_global_admin, Some(true));
        assert!(me.resource_id.is_none());
    }
}

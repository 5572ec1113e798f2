//! Tag models.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// A label that can be attached to projects and tasks.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagDto {
    pub id: Option<String>,
    pub name: Option<String>,
    /// Display color, e.g. `"#ff0000"` or a theme name.
    pub color: Option<String>,
}

/// Body for creating a tag.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagCreateDto {
    pub name: String,
    pub color: Option<String>,
}

impl TagCreateDto {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
        }
    }
}

//! Query options for collection endpoints.
//!
//! Collection endpoints accept OData-style parameters. They are passed to the
//! server untouched; the client never pages on its own.

use serde::{Deserialize, Serialize};

/// Filtering, ordering and offset/limit for a collection request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOptions {
    /// Maximum number of records to return.
    #[serde(rename = "$top", skip_serializing_if = "Option::is_none")]
    pub top: Option<u32>,

    /// Number of records to skip.
    #[serde(rename = "$skip", skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,

    /// Filter expression, e.g. `name eq 'Launch'`.
    #[serde(rename = "$filter", skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,

    /// Sort expression, e.g. `createDate desc`.
    #[serde(rename = "$orderby", skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,

    /// Comma-separated fields to return.
    #[serde(rename = "$select", skip_serializing_if = "Option::is_none")]
    pub select: Option<String>,

    /// Comma-separated related entities to include.
    #[serde(rename = "$expand", skip_serializing_if = "Option::is_none")]
    pub expand: Option<String>,
}

impl QueryOptions {
    /// Options for one window of results.
    #[must_use]
    pub fn window(skip: u32, top: u32) -> Self {
        Self {
            top: Some(top),
            skip: Some(skip),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn filter(mut self, expression: impl Into<String>) -> Self {
        self.filter = Some(expression.into());
        self
    }

    #[must_use]
    pub fn order_by(mut self, expression: impl Into<String>) -> Self {
        self.order_by = Some(expression.into());
        self
    }

    #[must_use]
    pub fn select(mut self, fields: impl Into<String>) -> Self {
        self.select = Some(fields.into());
        self
    }

    #[must_use]
    pub fn expand(mut self, relations: impl Into<String>) -> Self {
        self.expand = Some(relations.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_serializes_empty() {
        let serialized = serde_qs::to_string(&QueryOptions::default()).unwrap();
        assert!(serialized.is_empty());
    }

    #[test]
    fn test_window_and_filter() {
        let query = QueryOptions::window(20, 10).filter("name eq 'Launch'");
        let value = serde_json::to_value(&query).unwrap();

        assert_eq!(value["$top"], 10);
        assert_eq!(value["$skip"], 20);
        assert_eq!(value["$filter"], "name eq 'Launch'");
        assert!(value.get("$orderby").is_none());
    }

    #[test]
    fn test_builder_chain() {
        let query = QueryOptions::default()
            .order_by("createDate desc")
            .select("id,name")
            .expand("tags");
        assert_eq!(query.order_by.as_deref(), Some("createDate desc"));
        assert_eq!(query.select.as_deref(), Some("id,name"));
        assert_eq!(query.expand.as_deref(), Some("tags"));
        assert!(query.top.is_none());
    }
}

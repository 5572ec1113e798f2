//! Resource clients, one per API area.
//!
//! Each client borrows a [`PmClient`](crate::PmClient) and exposes one method
//! per endpoint. Methods build the path and query, send the request, and
//! return the response as an [`ApiResult`](crate::ApiResult).

use std::borrow::Cow;

use crate::error::{PmError, Result};

mod integrations;
mod notifications;
mod projects;
mod resource;
mod tags;
mod tasks;
mod timesheets;
mod workspaces;

pub use integrations::Integrations;
pub use notifications::Notifications;
pub use projects::Projects;
pub use resource::Resources;
pub use tags::Tags;
pub use tasks::Tasks;
pub use timesheets::Timesheets;
pub use workspaces::Workspaces;

/// Percent-encode an identifier for use as one path segment.
///
/// Empty and dot-segment identifiers are rejected: URL resolution would
/// collapse them and the request would reach a different endpoint.
pub(crate) fn segment(id: &str) -> Result<Cow<'_, str>> {
    if matches!(id, "" | "." | "..") {
        return Err(PmError::InvalidPath(id.to_string()));
    }
    Ok(urlencoding::encode(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_encodes_reserved_characters() {
        assert_eq!(segment("abc").unwrap(), "abc");
        assert_eq!(segment("a/b c").unwrap(), "a%2Fb%20c");
        assert_eq!(segment("v1.2").unwrap(), "v1.2");
    }

    #[test]
    fn test_segment_rejects_dot_and_empty_ids() {
        for id in ["", ".", ".."] {
            let err = segment(id).unwrap_err();
            assert!(matches!(err, PmError::InvalidPath(_)), "id {id:?}");
        }
        assert!(segment("...").is_ok());
        // `%` is escaped, so an encoded dot cannot become a dot segment.
        assert_eq!(segment("%2e").unwrap(), "%252e");
    }
}

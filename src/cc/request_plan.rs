//! Request plans: what a listing fetches

use url::Url;

use crate::error::{CcError, Result};

/// Base used to resolve relative cursor URLs; only the path and query are kept
const CURSOR_BASE: &str = "http://cursor.invalid";

/// Path plus ordered query pairs identifying one listing request
///
/// Plans are never mutated in place; builder methods and cursor parsing
/// return a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestPlan {
    path: String,
    query: Vec<(String, String)>,
}

impl RequestPlan {
    /// Plan for a path with no query
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Copy of this plan with one more query pair appended
    pub fn with_query(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut query = self.query.clone();
        query.push((key.into(), value.into()));
        Self {
            path: self.path.clone(),
            query,
        }
    }

    /// Derive a plan from a server-issued cursor URL
    ///
    /// Accepts absolute (`https://host/v2/...`) and relative (`/v2/...`) cursors.
    /// The host of an absolute cursor is ignored: requests always go to the
    /// configured host.
    pub fn from_cursor(cursor: &str) -> Result<Self> {
        if cursor.is_empty() {
            return Err(CcError::InvalidUrl("empty cursor URL".to_string()));
        }
        let base = Url::parse(CURSOR_BASE)?;
        let url = base
            .join(cursor)
            .map_err(|e| CcError::InvalidUrl(format!("cursor '{}': {}", cursor, e)))?;

        Ok(Self {
            path: url.path().to_string(),
            query: url.query_pairs().into_owned().collect(),
        })
    }

    /// Path component
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query pairs in request order
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Path of a child resource, e.g. `/v2/spaces/abc/developers/<guid>`
    pub fn child_path(&self, guid: &str) -> String {
        format!("{}/{}", self.path.trim_end_matches('/'), guid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_query_returns_new_plan() {
        let plan = RequestPlan::new("/v2/users");
        let paged = plan.with_query("results-per-page", "50");

        assert!(plan.query().is_empty());
        assert_eq!(paged.path(), "/v2/users");
        assert_eq!(
            paged.query(),
            &[("results-per-page".to_string(), "50".to_string())]
        );
    }

    #[test]
    fn test_from_relative_cursor() {
        let plan = RequestPlan::from_cursor(
            "/v2/spaces/abc/user_roles?order-direction=asc&page=2&results-per-page=50",
        )
        .unwrap();

        assert_eq!(plan.path(), "/v2/spaces/abc/user_roles");
        let keys: Vec<&str> = plan.query().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["order-direction", "page", "results-per-page"]);
        assert_eq!(plan.query()[1].1, "2");
    }

    #[test]
    fn test_from_absolute_cursor() {
        let plan =
            RequestPlan::from_cursor("https://api.example.com/v2/users?page=3&q=name%3Afoo")
                .unwrap();
        assert_eq!(plan.path(), "/v2/users");
        assert_eq!(
            plan.query(),
            &[
                ("page".to_string(), "3".to_string()),
                ("q".to_string(), "name:foo".to_string())
            ]
        );
    }

    #[test]
    fn test_from_cursor_without_query() {
        let plan = RequestPlan::from_cursor("/v2/users").unwrap();
        assert_eq!(plan, RequestPlan::new("/v2/users"));
    }

    #[test]
    fn test_from_empty_cursor() {
        assert!(matches!(
            RequestPlan::from_cursor(""),
            Err(CcError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_from_malformed_absolute_cursor() {
        assert!(matches!(
            RequestPlan::from_cursor("http://[::1"),
            Err(CcError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_child_path() {
        let plan = RequestPlan::new("/v2/spaces/abc/developers");
        assert_eq!(plan.child_path("user-1"), "/v2/spaces/abc/developers/user-1");
        let trailing = RequestPlan::new("/v2/organizations/o/users/");
        assert_eq!(trailing.child_path("u"), "/v2/organizations/o/users/u");
    }
}

//! Route mocking.
//!
//! Installs canned JSON responses through [`Driver::intercept_route`] so a
//! scenario can drive the UI without a live backend.

use crate::driver::{Driver, RouteResponse};
use crate::result::OverlayResult;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Common API status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApiStatus {
    /// 200 OK
    Success,
    /// 201 Created
    Created,
    /// 400 Bad Request
    BadRequest,
    /// 401 Unauthorized
    Unauthorized,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    ServerError,
}

impl ApiStatus {
    /// Numeric HTTP status
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::Success => 200,
            Self::Created => 201,
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::NotFound => 404,
            Self::ServerError => 500,
        }
    }
}

impl From<ApiStatus> for u16 {
    fn from(status: ApiStatus) -> Self {
        status.code()
    }
}

/// Pattern for matching request URLs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UrlPattern {
    /// Exact URL match
    Exact(String),
    /// Prefix match
    Prefix(String),
    /// Contains substring
    Contains(String),
    /// Regex match
    Regex(String),
    /// Glob pattern (e.g., "**/api/users/*")
    Glob(String),
    /// Match any URL
    Any,
}

impl UrlPattern {
    /// Check if a URL matches this pattern
    #[must_use]
    pub fn matches(&self, url: &str) -> bool {
        match self {
            Self::Exact(pattern) => url == pattern,
            Self::Prefix(pattern) => url.starts_with(pattern),
            Self::Contains(pattern) => url.contains(pattern),
            Self::Regex(pattern) => regex::Regex::new(pattern)
                .map(|re| re.is_match(url))
                .unwrap_or(false),
            Self::Glob(pattern) => Self::glob_matches(pattern, url),
            Self::Any => true,
        }
    }

    /// Glob matching; `*` and `**` both match any run of characters and the
    /// whole URL must match
    fn glob_matches(pattern: &str, url: &str) -> bool {
        let body = pattern
            .split('*')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");
        regex::Regex::new(&format!("^{body}$"))
            .map(|re| re.is_match(url))
            .unwrap_or(false)
    }
}

impl std::fmt::Display for UrlPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(s) | Self::Prefix(s) | Self::Contains(s) | Self::Regex(s) | Self::Glob(s) => {
                write!(f, "{s}")
            }
            Self::Any => write!(f, "*"),
        }
    }
}

impl From<&str> for UrlPattern {
    /// Strings containing `*` become globs, anything else an exact match
    fn from(pattern: &str) -> Self {
        if pattern.contains('*') {
            Self::Glob(pattern.to_string())
        } else {
            Self::Exact(pattern.to_string())
        }
    }
}

/// Mock an API JSON response for every request matching `pattern`
///
/// # Errors
///
/// Returns error if `data` cannot be serialized or the driver rejects the
/// route.
pub async fn mock_json_response<D, T>(
    driver: &D,
    pattern: impl Into<UrlPattern>,
    status: impl Into<u16>,
    data: &T,
) -> OverlayResult<()>
where
    D: Driver + ?Sized,
    T: Serialize + ?Sized,
{
    let pattern = pattern.into();
    let response = RouteResponse::json(status.into(), data)?;
    debug!(%pattern, status = response.status, bytes = response.body.len(), "mocking route");
    driver.intercept_route(&pattern, response).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::mock::{DriverCall, MockDriver};
    use proptest::prelude::*;

    mod url_pattern_tests {
        use super::*;

        #[test]
        fn test_exact_match() {
            let pattern = UrlPattern::Exact("https://api.example.com/users".to_string());
            assert!(pattern.matches("https://api.example.com/users"));
            assert!(!pattern.matches("https://api.example.com/users/1"));
        }

        #[test]
        fn test_prefix_and_contains() {
            assert!(UrlPattern::Prefix("https://api".to_string()).matches("https://api/x"));
            assert!(UrlPattern::Contains("/api/".to_string()).matches("https://e.com/api/users"));
            assert!(!UrlPattern::Contains("/api/".to_string()).matches("https://e.com/users"));
        }

        #[test]
        fn test_regex_match() {
            let pattern = UrlPattern::Regex(r"/users/\d+".to_string());
            assert!(pattern.matches("https://api.example.com/users/123"));
            assert!(!pattern.matches("https://api.example.com/users/abc"));
        }

        #[test]
        fn test_invalid_regex_never_matches() {
            assert!(!UrlPattern::Regex("(".to_string()).matches("("));
        }

        #[test]
        fn test_glob_match() {
            let pattern = UrlPattern::Glob("**/api/users/*".to_string());
            assert!(pattern.matches("https://example.com/api/users/123"));
            assert!(!pattern.matches("https://example.com/api/posts/123"));
        }

        #[test]
        fn test_glob_suffix_seen_earlier_in_url() {
            let pattern = UrlPattern::from("**/teams");
            assert!(pattern.matches("https://teams.app/api/teams"));
            assert!(pattern.matches("https://app/api/teams"));
            assert!(!pattern.matches("https://teams.app/api/teams/1"));
        }

        #[test]
        fn test_glob_repeated_segments() {
            let pattern = UrlPattern::from("**/api/*/items");
            assert!(pattern.matches("https://api.local/api/orders/items"));
            assert!(pattern.matches("https://x/items/api/v1/items"));
            assert!(!pattern.matches("https://x/api/v1/items/2"));
        }

        #[test]
        fn test_glob_literal_prefix_is_anchored() {
            let pattern = UrlPattern::from("https://app/*");
            assert!(pattern.matches("https://app/orders"));
            assert!(!pattern.matches("http://proxy/?u=https://app/orders"));
        }

        #[test]
        fn test_glob_escapes_regex_metacharacters() {
            let pattern = UrlPattern::from("**/search?q=*");
            assert!(pattern.matches("https://app/search?q=red"));
            assert!(!pattern.matches("https://app/searchq=red"));
        }

        #[test]
        fn test_from_str() {
            assert_eq!(UrlPattern::from("**/teams"), UrlPattern::Glob("**/teams".to_string()));
            assert_eq!(UrlPattern::from("/teams"), UrlPattern::Exact("/teams".to_string()));
        }

        proptest! {
            #[test]
            fn prop_glob_wildcard_wraps_any_segment(segment in "[a-z0-9/]{0,16}") {
                let pattern = UrlPattern::Glob(format!("*{segment}*"));
                let url = format!("https://host/{segment}/tail");
                prop_assert!(pattern.matches(&url));
            }

            #[test]
            fn prop_glob_suffix_matches_despite_earlier_copies(
                word in "[a-z]{1,8}",
                copies in 1usize..4,
            ) {
                let pattern = UrlPattern::from(format!("**/{word}").as_str());
                let url = format!("https://{}/{word}", vec![word.as_str(); copies].join("/"));
                prop_assert!(pattern.matches(&url));
            }
        }
    }

    #[test]
    fn test_api_status_codes() {
        assert_eq!(ApiStatus::Success.code(), 200);
        assert_eq!(u16::from(ApiStatus::NotFound), 404);
    }

    #[tokio::test]
    async fn test_mock_json_response_installs_route() {
        let driver = MockDriver::new();
        let teams = serde_json::json!([{"id": 1, "name": "Red"}]);

        mock_json_response(&driver, "**/teams", ApiStatus::Success, &teams)
            .await
            .unwrap();

        assert_eq!(
            driver.history(),
            vec![DriverCall::InterceptRoute {
                pattern: "**/teams".to_string(),
                status: 200,
            }]
        );
        let fulfilled = driver.fulfil("https://app/api/teams").unwrap();
        assert_eq!(fulfilled.content_type, "application/json");
        assert_eq!(fulfilled.body_string(), r#"[{"id":1,"name":"Red"}]"#);
    }

    #[tokio::test]
    async fn test_mock_json_response_raw_status() {
        let driver = MockDriver::new();
        mock_json_response(&driver, "/health", 503_u16, &serde_json::json!({"up": false}))
            .await
            .unwrap();
        assert_eq!(driver.fulfil("/health").unwrap().status, 503);
        assert!(driver.fulfil("/other").is_none());
    }
}

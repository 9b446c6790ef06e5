//! Driver - Abstract Browser Automation Trait
//!
//! The overlay patterns never talk to a browser directly. They consume the
//! narrow [`Driver`] contract below, which any automation backend (CDP,
//! WebDriver, a Playwright bridge, or [`MockDriver`](crate::mock::MockDriver))
//! can implement.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Overlay patterns (select, checker, inline checker, ...)     │
//! │        │ click / wait_for_state / assert_* / navigate        │
//! │        ▼                                                     │
//! │  Driver (async trait, &self, Send + Sync)                    │
//! │        │                                                     │
//! │   ┌────┴─────────────┐                                       │
//! │   │ real backend     │   MockDriver (scripted timeline)      │
//! │   └──────────────────┘                                       │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The handle is passed explicitly into every pattern call. There is no
//! process-wide driver.

use crate::locator::Locator;
use crate::network::UrlPattern;
use crate::result::OverlayResult;
use crate::wait::VisibilityState;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Response a route interception fulfils requests with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteResponse {
    /// HTTP status code
    pub status: u16,
    /// Content-Type header
    pub content_type: String,
    /// Response body
    pub body: Vec<u8>,
}

impl RouteResponse {
    /// Create a JSON response
    ///
    /// # Errors
    ///
    /// Returns error if `body` cannot be serialized.
    pub fn json<T: Serialize + ?Sized>(status: u16, body: &T) -> OverlayResult<Self> {
        Ok(Self {
            status,
            content_type: "application/json".to_string(),
            body: serde_json::to_vec(body)?,
        })
    }

    /// Get body as string
    #[must_use]
    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}

/// Abstract driver trait for browser automation
///
/// Methods take `&self`; implementations own whatever interior state they
/// need. Every call is a suspension point of the single calling flow.
#[async_trait]
pub trait Driver: Send + Sync {
    /// Navigate to URL
    async fn navigate(&self, url: &str) -> OverlayResult<()>;

    /// Get current URL as reported by the page
    async fn current_url(&self) -> OverlayResult<String>;

    /// Wait for the page URL to settle on `url`
    async fn wait_for_url(&self, url: &str, timeout: Duration) -> OverlayResult<()>;

    /// Build a locator for a selector
    ///
    /// Locators are lazy; nothing is resolved here.
    fn locate(&self, selector: &str) -> Locator {
        Locator::new(selector)
    }

    /// Dispatch a click on the first element matching `locator`
    ///
    /// Fails with `LocatorNotFound` when nothing matches.
    async fn click(&self, locator: &Locator) -> OverlayResult<()>;

    /// Wait for `locator` to reach `state`, failing with `Timeout` after `timeout`
    async fn wait_for_state(
        &self,
        locator: &Locator,
        state: VisibilityState,
        timeout: Duration,
    ) -> OverlayResult<()>;

    /// Assert `locator` is visible
    ///
    /// `None` uses the driver's standard assertion timeout. Fails with
    /// `AssertionFailed`.
    async fn assert_visible(&self, locator: &Locator, timeout: Option<Duration>)
        -> OverlayResult<()>;

    /// Assert `locator` is hidden
    ///
    /// `None` uses the driver's standard assertion timeout. Fails with
    /// `AssertionFailed`.
    async fn assert_hidden(&self, locator: &Locator, timeout: Option<Duration>)
        -> OverlayResult<()>;

    /// Count the elements currently matching `locator`
    async fn count(&self, locator: &Locator) -> OverlayResult<usize>;

    /// Fulfil requests matching `pattern` with `response`
    async fn intercept_route(&self, pattern: &UrlPattern, response: RouteResponse)
        -> OverlayResult<()>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::mock::MockDriver;

    mod route_response_tests {
        use super::*;

        #[test]
        fn test_json_response() {
            let response = RouteResponse::json(200, &serde_json::json!({"ok": true})).unwrap();
            assert_eq!(response.status, 200);
            assert_eq!(response.content_type, "application/json");
            assert_eq!(response.body_string(), r#"{"ok":true}"#);
        }

        #[test]
        fn test_json_array_response() {
            let response = RouteResponse::json(201, &[1, 2, 3]).unwrap();
            assert_eq!(response.body_string(), "[1,2,3]");
        }
    }

    #[test]
    fn test_locate_is_lazy() {
        let driver = MockDriver::new();
        let locator = driver.locate("ion-backdrop");
        assert_eq!(locator.css(), "ion-backdrop");
        assert!(driver.history().is_empty());
    }

    #[test]
    fn test_driver_is_object_safe() {
        let driver = MockDriver::new();
        let dynamic: &dyn Driver = &driver;
        assert_eq!(dynamic.locate("x").css(), "x");
    }
}

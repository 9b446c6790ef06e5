//! Scripted mock driver.
//!
//! [`MockDriver`] models a page as a list of [`MockElement`]s whose
//! visibility is scripted on a timeline relative to the driver's creation.
//! It records every call as a typed [`DriverCall`] so tests can assert the
//! exact order of protocol steps.
//!
//! Elements are registered under the full selector a pattern will use
//! (e.g. `"ion-modal ion-content ion-item"`); a [`Locator`] matches an
//! element when its CSS is identical and its text filter, if any, equals
//! the element text exactly. An element with text stands for a labelled
//! node inside the `css` scope, the way `css >> text="..."` resolves in a
//! browser; a group of alert buttons is one element per label, each
//! registered under the group selector.
//!
//! Timelines use `tokio::time`, so tests should run with
//! `#[tokio::test(start_paused = true)]` to get instant, deterministic
//! virtual time.

use crate::config::OverlayConfig;
use crate::driver::{Driver, RouteResponse};
use crate::locator::Locator;
use crate::network::UrlPattern;
use crate::result::{OverlayError, OverlayResult};
use crate::wait::{duration_ms, VisibilityState};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::Instant;

/// A recorded driver call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverCall {
    /// `navigate`
    Navigate {
        /// Requested URL
        url: String,
    },
    /// `current_url`
    CurrentUrl,
    /// `wait_for_url`
    WaitForUrl {
        /// Awaited URL
        url: String,
    },
    /// `click`
    Click {
        /// Locator descriptor
        target: String,
    },
    /// `wait_for_state`
    WaitForState {
        /// Locator descriptor
        target: String,
        /// Required state
        state: VisibilityState,
    },
    /// `assert_visible`
    AssertVisible {
        /// Locator descriptor
        target: String,
    },
    /// `assert_hidden`
    AssertHidden {
        /// Locator descriptor
        target: String,
    },
    /// `count`
    Count {
        /// Locator descriptor
        target: String,
    },
    /// `intercept_route`
    InterceptRoute {
        /// Pattern descriptor
        pattern: String,
        /// Fulfilled status
        status: u16,
    },
}

impl DriverCall {
    /// Click target, if this is a click
    #[must_use]
    pub fn click_target(&self) -> Option<&str> {
        match self {
            Self::Click { target } => Some(target),
            _ => None,
        }
    }
}

/// Side effect a click applies to other elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickEffect {
    /// Make every element registered under `css` visible after `after`
    Reveal {
        /// Affected selector
        css: String,
        /// Delay from the click
        after: Duration,
    },
    /// Hide every element registered under `css` after `after`
    Hide {
        /// Affected selector
        css: String,
        /// Delay from the click
        after: Duration,
    },
}

/// Scripted element on the mock page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockElement {
    css: String,
    text: Option<String>,
    shown_at: Option<Duration>,
    hidden_at: Option<Duration>,
    checked: bool,
    on_click: Vec<ClickEffect>,
}

impl MockElement {
    /// Element visible from the start
    #[must_use]
    pub fn new(css: impl Into<String>) -> Self {
        Self {
            css: css.into(),
            text: None,
            shown_at: Some(Duration::ZERO),
            hidden_at: None,
            checked: false,
            on_click: Vec::new(),
        }
    }

    /// Label of a node inside this element's scope
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Become visible `offset` after driver creation
    #[must_use]
    pub const fn appears_after(mut self, offset: Duration) -> Self {
        self.shown_at = Some(offset);
        self
    }

    /// Become hidden `offset` after driver creation
    #[must_use]
    pub const fn disappears_after(mut self, offset: Duration) -> Self {
        self.hidden_at = Some(offset);
        self
    }

    /// Attached but never rendered
    #[must_use]
    pub const fn never_visible(mut self) -> Self {
        self.shown_at = None;
        self
    }

    /// Start in the checked state
    #[must_use]
    pub const fn checked(mut self) -> Self {
        self.checked = true;
        self
    }

    /// Clicking this element reveals `css` after `after`
    #[must_use]
    pub fn reveals_on_click(mut self, css: impl Into<String>, after: Duration) -> Self {
        self.on_click.push(ClickEffect::Reveal {
            css: css.into(),
            after,
        });
        self
    }

    /// Clicking this element hides `css` immediately
    #[must_use]
    pub fn hides_on_click(mut self, css: impl Into<String>) -> Self {
        self.on_click.push(ClickEffect::Hide {
            css: css.into(),
            after: Duration::ZERO,
        });
        self
    }

    fn is_visible_at(&self, offset: Duration) -> bool {
        let shown = self.shown_at.is_some_and(|at| at <= offset);
        let hidden = self.hidden_at.is_some_and(|at| at <= offset);
        shown && !hidden
    }

    fn matches(&self, locator: &Locator) -> bool {
        locator.matches(&self.css, self.text.as_deref())
    }
}

#[derive(Debug, Default)]
struct MockState {
    elements: Vec<MockElement>,
    url: String,
    committed: Vec<String>,
    redirects: HashMap<String, String>,
    routes: Vec<(UrlPattern, RouteResponse)>,
    history: Vec<DriverCall>,
}

/// Mock driver for unit testing
#[derive(Debug)]
pub struct MockDriver {
    started: Instant,
    poll_interval: Duration,
    assertion_timeout: Duration,
    state: Mutex<MockState>,
}

impl Default for MockDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDriver {
    /// Create new mock driver with default timings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&OverlayConfig::default())
    }

    /// Create a mock driver using the configured poll interval and
    /// assertion timeout
    #[must_use]
    pub fn with_config(config: &OverlayConfig) -> Self {
        Self {
            started: Instant::now(),
            poll_interval: config.poll_interval(),
            assertion_timeout: config.assertion_timeout(),
            state: Mutex::new(MockState::default()),
        }
    }

    /// Add a mock element
    #[must_use]
    pub fn with_element(self, element: MockElement) -> Self {
        self.add_element(element);
        self
    }

    /// Report `to` as the current URL after navigating to `from`
    #[must_use]
    pub fn with_redirect(self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.lock().redirects.insert(from.into(), to.into());
        self
    }

    /// Add a mock element to a running page
    pub fn add_element(&self, element: MockElement) {
        self.lock().elements.push(element);
    }

    /// Get call history
    #[must_use]
    pub fn history(&self) -> Vec<DriverCall> {
        self.lock().history.clone()
    }

    /// Targets of every click, in order
    #[must_use]
    pub fn clicks(&self) -> Vec<String> {
        self.lock()
            .history
            .iter()
            .filter_map(|c| c.click_target().map(str::to_string))
            .collect()
    }

    /// Check if a call satisfying `predicate` was recorded
    #[must_use]
    pub fn was_called(&self, predicate: impl Fn(&DriverCall) -> bool) -> bool {
        self.lock().history.iter().any(predicate)
    }

    /// Checked state of the first element matching `locator`
    #[must_use]
    pub fn is_checked(&self, locator: &Locator) -> bool {
        self.lock()
            .elements
            .iter()
            .find(|e| e.matches(locator))
            .is_some_and(|e| e.checked)
    }

    /// Response a request to `url` would receive
    ///
    /// The most recently installed matching route wins.
    #[must_use]
    pub fn fulfil(&self, url: &str) -> Option<RouteResponse> {
        self.lock()
            .routes
            .iter()
            .rev()
            .find(|(pattern, _)| pattern.matches(url))
            .map(|(_, response)| response.clone())
    }

    /// Virtual time since the driver was created
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, call: DriverCall) {
        self.lock().history.push(call);
    }

    fn is_visible(&self, locator: &Locator) -> bool {
        let now = self.elapsed();
        self.lock()
            .elements
            .iter()
            .any(|e| e.matches(locator) && e.is_visible_at(now))
    }

    /// Poll until `check` holds or `timeout` elapses; always samples once
    async fn poll_until(&self, timeout: Duration, check: impl Fn(&Self) -> bool) -> bool {
        // No representable deadline means no practical limit.
        let deadline = Instant::now().checked_add(timeout);
        loop {
            if check(self) {
                return true;
            }
            let now = Instant::now();
            let nap = match deadline {
                Some(deadline) if now >= deadline => return false,
                Some(deadline) => self.poll_interval.min(deadline - now),
                None => self.poll_interval,
            };
            tokio::time::sleep(nap).await;
        }
    }
}

#[async_trait]
impl Driver for MockDriver {
    async fn navigate(&self, url: &str) -> OverlayResult<()> {
        self.record(DriverCall::Navigate {
            url: url.to_string(),
        });
        let mut state = self.lock();
        state.url = state.redirects.get(url).cloned().unwrap_or_else(|| url.to_string());
        state.committed.push(url.to_string());
        Ok(())
    }

    async fn current_url(&self) -> OverlayResult<String> {
        self.record(DriverCall::CurrentUrl);
        Ok(self.lock().url.clone())
    }

    async fn wait_for_url(&self, url: &str, timeout: Duration) -> OverlayResult<()> {
        self.record(DriverCall::WaitForUrl {
            url: url.to_string(),
        });
        let started = Instant::now();
        let settled = self
            .poll_until(timeout, |d| d.lock().committed.iter().any(|u| u == url))
            .await;
        if settled {
            Ok(())
        } else {
            Err(OverlayError::Timeout {
                target: format!("url {url}"),
                condition: "committed".to_string(),
                budget_ms: duration_ms(timeout),
                elapsed_ms: duration_ms(started.elapsed()),
            })
        }
    }

    async fn click(&self, locator: &Locator) -> OverlayResult<()> {
        self.record(DriverCall::Click {
            target: locator.to_string(),
        });
        let now = self.elapsed();
        let mut state = self.lock();
        let Some(index) = state
            .elements
            .iter()
            .position(|e| e.matches(locator) && e.is_visible_at(now))
        else {
            return Err(OverlayError::LocatorNotFound {
                locator: locator.to_string(),
            });
        };

        let element = &mut state.elements[index];
        element.checked = !element.checked;
        let effects = element.on_click.clone();
        for effect in effects {
            match effect {
                ClickEffect::Reveal { css, after } => {
                    for e in state.elements.iter_mut().filter(|e| e.css == css) {
                        e.shown_at = Some(now + after);
                        e.hidden_at = None;
                    }
                }
                ClickEffect::Hide { css, after } => {
                    for e in state.elements.iter_mut().filter(|e| e.css == css) {
                        e.hidden_at = Some(now + after);
                    }
                }
            }
        }
        Ok(())
    }

    async fn wait_for_state(
        &self,
        locator: &Locator,
        state: VisibilityState,
        timeout: Duration,
    ) -> OverlayResult<()> {
        self.record(DriverCall::WaitForState {
            target: locator.to_string(),
            state,
        });
        let started = Instant::now();
        if self
            .poll_until(timeout, |d| state.is_satisfied_by(d.is_visible(locator)))
            .await
        {
            Ok(())
        } else {
            Err(OverlayError::Timeout {
                target: locator.to_string(),
                condition: state.to_string(),
                budget_ms: duration_ms(timeout),
                elapsed_ms: duration_ms(started.elapsed()),
            })
        }
    }

    async fn assert_visible(
        &self,
        locator: &Locator,
        timeout: Option<Duration>,
    ) -> OverlayResult<()> {
        self.record(DriverCall::AssertVisible {
            target: locator.to_string(),
        });
        let timeout = timeout.unwrap_or(self.assertion_timeout);
        if self.poll_until(timeout, |d| d.is_visible(locator)).await {
            Ok(())
        } else {
            Err(OverlayError::assertion(format!(
                "expected {locator} to be visible within {}ms",
                duration_ms(timeout)
            )))
        }
    }

    async fn assert_hidden(
        &self,
        locator: &Locator,
        timeout: Option<Duration>,
    ) -> OverlayResult<()> {
        self.record(DriverCall::AssertHidden {
            target: locator.to_string(),
        });
        let timeout = timeout.unwrap_or(self.assertion_timeout);
        if self.poll_until(timeout, |d| !d.is_visible(locator)).await {
            Ok(())
        } else {
            Err(OverlayError::assertion(format!(
                "expected {locator} to be hidden within {}ms",
                duration_ms(timeout)
            )))
        }
    }

    async fn count(&self, locator: &Locator) -> OverlayResult<usize> {
        self.record(DriverCall::Count {
            target: locator.to_string(),
        });
        let now = self.elapsed();
        Ok(self
            .lock()
            .elements
            .iter()
            .filter(|e| e.matches(locator) && e.is_visible_at(now))
            .count())
    }

    async fn intercept_route(
        &self,
        pattern: &UrlPattern,
        response: RouteResponse,
    ) -> OverlayResult<()> {
        self.record(DriverCall::InterceptRoute {
            pattern: pattern.to_string(),
            status: response.status,
        });
        self.lock().routes.push((pattern.clone(), response));
        Ok(())
    }
}

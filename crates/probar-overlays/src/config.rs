//! Timeout budgets and driver defaults.
//!
//! Budgets differ per pattern on purpose: spinners get a long window that
//! matches expected operation latency, while the error-toast check gets a
//! short one so a real toast is still on screen when it is sampled.

use crate::result::{OverlayError, OverlayResult};
use crate::wait::{DEFAULT_ASSERTION_TIMEOUT_MS, DEFAULT_POLL_INTERVAL_MS, DEFAULT_WAIT_TIMEOUT_MS};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default budget for the spinner to disappear (29 seconds)
pub const DEFAULT_SPINNER_TIMEOUT_MS: u64 = 29_000;

/// Default negative-assertion window for error toasts (1 second)
pub const DEFAULT_ERROR_TOAST_WINDOW_MS: u64 = 1_000;

/// Default budget for list items to appear (10 seconds)
pub const DEFAULT_LIST_TIMEOUT_MS: u64 = 10_000;

/// Prefix of environment overrides
pub const ENV_PREFIX: &str = "PROBAR_OVERLAYS_";

/// Overlay timing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Budget for an overlay container to become visible
    pub overlay_timeout_ms: u64,
    /// Standard assertion timeout used by drivers
    pub assertion_timeout_ms: u64,
    /// Budget for the loading spinner to disappear
    pub spinner_timeout_ms: u64,
    /// Window in which no error toast may be visible
    pub error_toast_window_ms: u64,
    /// Budget for the URL to settle after navigation
    pub url_timeout_ms: u64,
    /// Budget for list items to appear
    pub list_timeout_ms: u64,
    /// Polling interval used by polling drivers
    pub poll_interval_ms: u64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            overlay_timeout_ms: DEFAULT_WAIT_TIMEOUT_MS,
            assertion_timeout_ms: DEFAULT_ASSERTION_TIMEOUT_MS,
            spinner_timeout_ms: DEFAULT_SPINNER_TIMEOUT_MS,
            error_toast_window_ms: DEFAULT_ERROR_TOAST_WINDOW_MS,
            url_timeout_ms: DEFAULT_WAIT_TIMEOUT_MS,
            list_timeout_ms: DEFAULT_LIST_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl OverlayConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from YAML; missing keys keep their defaults
    pub fn from_yaml_str(yaml: &str) -> OverlayResult<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| OverlayError::Yaml {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> OverlayResult<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Apply `PROBAR_OVERLAYS_*_MS` environment overrides
    pub fn with_env_overrides(self) -> OverlayResult<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn with_overrides_from<F>(mut self, lookup: F) -> OverlayResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fields: [(&str, &mut u64); 7] = [
            ("OVERLAY_TIMEOUT_MS", &mut self.overlay_timeout_ms),
            ("ASSERTION_TIMEOUT_MS", &mut self.assertion_timeout_ms),
            ("SPINNER_TIMEOUT_MS", &mut self.spinner_timeout_ms),
            ("ERROR_TOAST_WINDOW_MS", &mut self.error_toast_window_ms),
            ("URL_TIMEOUT_MS", &mut self.url_timeout_ms),
            ("LIST_TIMEOUT_MS", &mut self.list_timeout_ms),
            ("POLL_INTERVAL_MS", &mut self.poll_interval_ms),
        ];
        for (suffix, slot) in fields {
            let key = format!("{ENV_PREFIX}{suffix}");
            if let Some(raw) = lookup(&key) {
                *slot = raw.trim().parse().map_err(|_| OverlayError::Config {
                    message: format!("{key} must be milliseconds, got {raw:?}"),
                })?;
            }
        }
        self.validate()?;
        Ok(self)
    }

    /// Reject configurations no driver can honour
    pub fn validate(&self) -> OverlayResult<()> {
        if self.poll_interval_ms == 0 {
            return Err(OverlayError::Config {
                message: "poll_interval_ms must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Set overlay-open budget
    #[must_use]
    pub const fn with_overlay_timeout(mut self, ms: u64) -> Self {
        self.overlay_timeout_ms = ms;
        self
    }

    /// Set standard assertion timeout
    #[must_use]
    pub const fn with_assertion_timeout(mut self, ms: u64) -> Self {
        self.assertion_timeout_ms = ms;
        self
    }

    /// Set spinner budget
    #[must_use]
    pub const fn with_spinner_timeout(mut self, ms: u64) -> Self {
        self.spinner_timeout_ms = ms;
        self
    }

    /// Set error-toast window
    #[must_use]
    pub const fn with_error_toast_window(mut self, ms: u64) -> Self {
        self.error_toast_window_ms = ms;
        self
    }

    /// Set URL settle budget
    #[must_use]
    pub const fn with_url_timeout(mut self, ms: u64) -> Self {
        self.url_timeout_ms = ms;
        self
    }

    /// Set list budget
    #[must_use]
    pub const fn with_list_timeout(mut self, ms: u64) -> Self {
        self.list_timeout_ms = ms;
        self
    }

    /// Set polling interval
    #[must_use]
    pub const fn with_poll_interval(mut self, ms: u64) -> Self {
        self.poll_interval_ms = ms;
        self
    }

    /// Overlay-open budget
    #[must_use]
    pub const fn overlay_timeout(&self) -> Duration {
        Duration::from_millis(self.overlay_timeout_ms)
    }

    /// Standard assertion timeout
    #[must_use]
    pub const fn assertion_timeout(&self) -> Duration {
        Duration::from_millis(self.assertion_timeout_ms)
    }

    /// Spinner budget
    #[must_use]
    pub const fn spinner_timeout(&self) -> Duration {
        Duration::from_millis(self.spinner_timeout_ms)
    }

    /// Error-toast window
    #[must_use]
    pub const fn error_toast_window(&self) -> Duration {
        Duration::from_millis(self.error_toast_window_ms)
    }

    /// URL settle budget
    #[must_use]
    pub const fn url_timeout(&self) -> Duration {
        Duration::from_millis(self.url_timeout_ms)
    }

    /// List budget
    #[must_use]
    pub const fn list_timeout(&self) -> Duration {
        Duration::from_millis(self.list_timeout_ms)
    }

    /// Polling interval
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

//! Wait Gate
//!
//! Blocks the calling flow until an element reaches a required
//! [`VisibilityState`] or its budget elapses. Every overlay pattern builds
//! on this.
//!
//! The gate never retries. A timeout is reported once, with the element
//! descriptor and the time spent, and the caller decides what to do with
//! a half-open overlay.

use crate::driver::Driver;
use crate::locator::Locator;
use crate::result::{OverlayError, OverlayResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, warn};

// =============================================================================
// CONSTANTS
// =============================================================================

/// Default timeout for overlay containers to open (30 seconds)
pub const DEFAULT_WAIT_TIMEOUT_MS: u64 = 30_000;

/// Default timeout for visibility assertions (5 seconds)
pub const DEFAULT_ASSERTION_TIMEOUT_MS: u64 = 5_000;

/// Default polling interval (50ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 50;

/// Slack granted to a driver beyond the budget before the gate cuts it off
const DRIVER_GRACE_MS: u64 = 250;

// =============================================================================
// VISIBILITY STATE
// =============================================================================

/// Required post-condition of a wait
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityState {
    /// Element is attached and rendered
    Visible,
    /// Element is absent or not rendered
    Hidden,
}

impl VisibilityState {
    /// Get the state name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::Hidden => "hidden",
        }
    }

    /// Check whether an observed visibility satisfies this state
    #[must_use]
    pub const fn is_satisfied_by(&self, visible: bool) -> bool {
        match self {
            Self::Visible => visible,
            Self::Hidden => !visible,
        }
    }
}

impl std::fmt::Display for VisibilityState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// WAIT RESULT
// =============================================================================

/// Result of a successful wait
#[derive(Debug, Clone)]
pub struct WaitResult {
    /// Time spent waiting
    pub elapsed: Duration,
    /// Description of what was waited for
    pub waited_for: String,
}

impl WaitResult {
    /// Create a wait result
    #[must_use]
    pub fn new(elapsed: Duration, waited_for: impl Into<String>) -> Self {
        Self {
            elapsed,
            waited_for: waited_for.into(),
        }
    }
}

// =============================================================================
// GATE
// =============================================================================

/// Wait until `locator` reaches `state` within `budget`
///
/// The driver is trusted to honour the budget; if it overruns by more than
/// a small grace period the gate abandons the call and reports a timeout
/// itself.
///
/// # Errors
///
/// [`OverlayError::Timeout`] when the state is not reached in time. Any
/// other driver error is passed through unchanged.
pub async fn wait_for<D: Driver + ?Sized>(
    driver: &D,
    locator: &Locator,
    state: VisibilityState,
    budget: Duration,
) -> OverlayResult<WaitResult> {
    let started = Instant::now();
    let budget_ms = duration_ms(budget);
    debug!(target_locator = %locator, %state, budget_ms, "wait gate");

    let hard_limit = budget.saturating_add(Duration::from_millis(DRIVER_GRACE_MS));
    let outcome = tokio::time::timeout(hard_limit, driver.wait_for_state(locator, state, budget))
        .await
        .unwrap_or_else(|_| {
            Err(OverlayError::Timeout {
                target: locator.to_string(),
                condition: state.to_string(),
                budget_ms,
                elapsed_ms: duration_ms(started.elapsed()),
            })
        });

    match outcome {
        Ok(()) => {
            let elapsed = started.elapsed();
            debug!(target_locator = %locator, %state, elapsed_ms = duration_ms(elapsed), "wait gate passed");
            Ok(WaitResult::new(elapsed, format!("{locator} {state}")))
        }
        Err(err) => {
            if err.is_timeout() {
                warn!(target_locator = %locator, %state, budget_ms, "wait gate timed out");
            }
            Err(err)
        }
    }
}

/// Milliseconds in a duration, saturating at `u64::MAX`
#[must_use]
pub fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

//! Spinners and toasts.
//!
//! A spinner check has two phases: the spinner must be seen, then it must
//! go away. Waiting for "hidden" alone would pass when the spinner never
//! showed up at all.
//!
//! The error-toast check is a negative assertion over a short window.
//! Error toasts dismiss themselves after a few seconds, so a long window
//! could let a real error slip by unseen. The window is still racy against
//! that auto-dismiss timer; lengthening it changes what the check detects.

use crate::assertion::expect;
use crate::catalog;
use crate::config::{DEFAULT_ERROR_TOAST_WINDOW_MS, DEFAULT_SPINNER_TIMEOUT_MS};
use crate::driver::Driver;
use crate::locator::Locator;
use crate::result::OverlayResult;
use crate::wait::{self, VisibilityState};
use std::time::Duration;
use tracing::{debug, instrument};

/// Assert the loading spinner is showing, then wait for it to disappear
///
/// Call this right after starting an operation that shows the spinner.
/// `timeout` bounds the disappearance; `None` uses 29 seconds.
///
/// # Errors
///
/// `AssertionFailed` if the spinner is not seen within the driver's
/// standard assertion timeout, `Timeout` if it outlives `timeout`.
#[instrument(skip(driver))]
pub async fn await_spinner_lifecycle<D: Driver + ?Sized>(
    driver: &D,
    timeout: Option<Duration>,
) -> OverlayResult<()> {
    let budget = timeout.unwrap_or(Duration::from_millis(DEFAULT_SPINNER_TIMEOUT_MS));
    let spinner = Locator::new(catalog::LOADING_SPINNER);

    expect(&spinner).to_be_visible(driver).await?;
    debug!("spinner observed, waiting for it to clear");
    wait::wait_for(driver, &spinner, VisibilityState::Hidden, budget).await?;
    Ok(())
}

/// Assert a success toast becomes visible
///
/// Uses the driver's standard assertion timeout.
#[instrument(skip(driver))]
pub async fn assert_success_toast<D: Driver + ?Sized>(driver: &D) -> OverlayResult<()> {
    expect(&Locator::new(catalog::SUCCESS_TOAST))
        .to_be_visible(driver)
        .await
}

/// Assert no error toast is visible within a short window
///
/// `None` uses 1 second. Keep the window short: an error toast that has
/// already auto-dismissed cannot be caught.
#[instrument(skip(driver))]
pub async fn assert_no_error_toast<D: Driver + ?Sized>(
    driver: &D,
    timeout: Option<Duration>,
) -> OverlayResult<()> {
    let window = timeout.unwrap_or(Duration::from_millis(DEFAULT_ERROR_TOAST_WINDOW_MS));
    expect(&Locator::new(catalog::ERROR_TOAST))
        .with_timeout(window)
        .to_be_hidden(driver)
        .await
}

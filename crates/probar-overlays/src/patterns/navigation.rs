//! Navigate and verify the landing URL.

use crate::assertion::expect_eq;
use crate::driver::Driver;
use crate::result::OverlayResult;
use crate::wait::DEFAULT_WAIT_TIMEOUT_MS;
use std::time::Duration;
use tracing::{debug, instrument};

/// Navigate to `url`, wait for it to settle, then require the page URL to
/// equal `url` exactly
///
/// No normalization is applied: a trailing slash added by the server is a
/// mismatch.
///
/// # Errors
///
/// `Timeout` if the URL never settles, `AssertionFailed` on mismatch.
#[instrument(skip(driver))]
pub async fn go_to<D: Driver + ?Sized>(
    driver: &D,
    url: &str,
    timeout: Option<Duration>,
) -> OverlayResult<()> {
    let budget = timeout.unwrap_or(Duration::from_millis(DEFAULT_WAIT_TIMEOUT_MS));

    driver.navigate(url).await?;
    driver.wait_for_url(url, budget).await?;
    let current = driver.current_url().await?;
    debug!(%current, "navigation settled");
    expect_eq("url", url, current.as_str())
}

//! Plain `ion-list` helpers.

use crate::catalog;
use crate::config::DEFAULT_LIST_TIMEOUT_MS;
use crate::driver::Driver;
use crate::locator::Locator;
use crate::result::OverlayResult;
use crate::wait::{self, VisibilityState};
use std::time::Duration;
use tracing::{debug, instrument};

/// Wait for list items to render, then count them
///
/// `timeout` bounds the wait for the first item; `None` uses 10 seconds.
#[instrument(skip(driver))]
pub async fn count_list_items<D: Driver + ?Sized>(
    driver: &D,
    timeout: Option<Duration>,
) -> OverlayResult<usize> {
    let budget = timeout.unwrap_or(Duration::from_millis(DEFAULT_LIST_TIMEOUT_MS));
    let items = Locator::new(catalog::LIST_ITEMS);
    wait::wait_for(driver, &items, VisibilityState::Visible, budget).await?;
    let count = driver.count(&items).await?;
    debug!(count, "list items");
    Ok(count)
}

/// Wait for list items to render, then click the one labelled `label`
#[instrument(skip(driver))]
pub async fn select_list_item<D: Driver + ?Sized>(
    driver: &D,
    label: &str,
    timeout: Option<Duration>,
) -> OverlayResult<()> {
    let budget = timeout.unwrap_or(Duration::from_millis(DEFAULT_LIST_TIMEOUT_MS));
    let items = Locator::new(catalog::LIST_ITEMS);
    wait::wait_for(driver, &items, VisibilityState::Visible, budget).await?;
    driver.click(&items.with_text(label)).await
}

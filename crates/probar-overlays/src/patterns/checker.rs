//! Checker modal: toggle many, then confirm.

use crate::catalog;
use crate::driver::Driver;
use crate::locator::Locator;
use crate::result::OverlayResult;
use crate::wait::{self, VisibilityState, DEFAULT_WAIT_TIMEOUT_MS};
use std::time::Duration;
use tracing::{debug, instrument};

/// Open the checker modal, toggle each label in order, then confirm
///
/// Clicks toggle, so a label listed twice ends up unchanged. An empty
/// `labels` only opens and confirms. `timeout` bounds the modal wait.
///
/// # Errors
///
/// `Timeout` if the modal never shows, `LocatorNotFound` for an unknown
/// label (the modal is left open).
#[instrument(skip(driver, trigger, labels), fields(trigger = %trigger, count = labels.len()))]
pub async fn toggle_and_confirm<D, S>(
    driver: &D,
    trigger: &Locator,
    labels: &[S],
    timeout: Option<Duration>,
) -> OverlayResult<()>
where
    D: Driver + ?Sized,
    S: AsRef<str>,
{
    let budget = timeout.unwrap_or(Duration::from_millis(DEFAULT_WAIT_TIMEOUT_MS));

    driver.click(trigger).await?;
    wait::wait_for(driver, &Locator::new(catalog::MODAL), VisibilityState::Visible, budget).await?;

    for label in labels {
        let label = label.as_ref();
        debug!(label, "toggling check");
        driver
            .click(&Locator::new(catalog::MODAL_ITEMS).with_text(label))
            .await?;
    }

    debug!("confirming checker");
    driver.click(&Locator::new(catalog::MODAL_CONFIRM)).await
}

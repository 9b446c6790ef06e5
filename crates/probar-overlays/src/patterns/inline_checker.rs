//! Inline checker popover: toggle many, then tap the backdrop.
//!
//! Unlike the checker modal there is no confirm control. The popover closes
//! when anything outside its content is tapped, so dismissal is a backdrop
//! click.

use crate::assertion::expect;
use crate::catalog;
use crate::driver::Driver;
use crate::locator::Locator;
use crate::result::OverlayResult;
use crate::wait::{self, VisibilityState, DEFAULT_WAIT_TIMEOUT_MS};
use std::time::Duration;
use tracing::{debug, instrument};

/// Open the inline checker, toggle each label in order, then dismiss via
/// the backdrop
///
/// The backdrop must already be visible when the toggles are done; its
/// absence is reported at once instead of being waited out.
///
/// # Errors
///
/// `Timeout` if the checker marker never shows, `LocatorNotFound` for an
/// unknown label, `AssertionFailed` when the backdrop is missing.
#[instrument(skip(driver, trigger, labels), fields(trigger = %trigger, count = labels.len()))]
pub async fn toggle_and_dismiss_via_backdrop<D, S>(
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
    wait::wait_for(
        driver,
        &Locator::new(catalog::INLINE_CHECKER),
        VisibilityState::Visible,
        budget,
    )
    .await?;

    for label in labels {
        let label = label.as_ref();
        debug!(label, "toggling inline option");
        driver
            .click(&Locator::new(catalog::POPOVER_ITEMS).with_text(label))
            .await?;
    }

    let backdrop = Locator::new(catalog::BACKDROP);
    expect(&backdrop).immediately().to_be_visible(driver).await?;
    debug!("dismissing popover via backdrop");
    driver.click(&backdrop).await
}

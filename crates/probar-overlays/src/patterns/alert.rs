//! Alert buttons.

use crate::assertion::expect;
use crate::catalog;
use crate::driver::Driver;
use crate::locator::Locator;
use crate::result::OverlayResult;
use tracing::instrument;

/// Click the alert button labelled `label`
///
/// The alert must already be open; there is no container wait. The button
/// is the node labelled `label` inside `.alert-button-group`, asserted
/// visible (standard assertion timeout) before the click.
#[instrument(skip(driver))]
pub async fn click_alert_button<D: Driver + ?Sized>(driver: &D, label: &str) -> OverlayResult<()> {
    let button = Locator::new(catalog::ALERT_BUTTON_GROUP).with_text(label);
    expect(&button).to_be_visible(driver).await?;
    driver.click(&button).await
}

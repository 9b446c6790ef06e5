//! Interaction patterns, one procedure per widget kind.
//!
//! | Widget | Open | Act | Dismiss |
//! |---|---|---|---|
//! | action sheet / select | click trigger, wait container | click item | closes on pick |
//! | checker modal | click trigger, wait `ion-modal` | toggle each label | confirm button |
//! | inline checker | click trigger, wait marker | toggle each label | backdrop tap |
//! | alert | already open | assert + click button | closes on click |
//!
//! Patterns are stateless functions. They take the driver explicitly,
//! rebuild their locators on every call and never call each other.
//! [`Overlays`] only pairs a driver with an [`OverlayConfig`] so budgets
//! come from configuration.

pub mod alert;
pub mod checker;
pub mod inline_checker;
pub mod list;
pub mod navigation;
pub mod select;
pub mod transient;

pub use alert::click_alert_button;
pub use checker::toggle_and_confirm;
pub use inline_checker::toggle_and_dismiss_via_backdrop;
pub use list::{count_list_items, select_list_item};
pub use navigation::go_to;
pub use select::{
    choose_option, choose_select_option, choose_suggestion, select_action_sheet_option,
    SingleChoice,
};
pub use transient::{assert_no_error_toast, assert_success_toast, await_spinner_lifecycle};

use crate::config::OverlayConfig;
use crate::driver::Driver;
use crate::locator::Locator;
use crate::result::OverlayResult;

/// Driver paired with configured budgets
///
/// Holds no widget state; every method is a single pattern invocation.
#[derive(Debug)]
pub struct Overlays<'d, D: Driver + ?Sized> {
    driver: &'d D,
    config: OverlayConfig,
}

impl<'d, D: Driver + ?Sized> Overlays<'d, D> {
    /// Create with default budgets
    #[must_use]
    pub fn new(driver: &'d D) -> Self {
        Self::with_config(driver, OverlayConfig::default())
    }

    /// Create with explicit budgets
    #[must_use]
    pub const fn with_config(driver: &'d D, config: OverlayConfig) -> Self {
        Self { driver, config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Underlying driver
    #[must_use]
    pub const fn driver(&self) -> &'d D {
        self.driver
    }

    /// See [`choose_option`]
    pub async fn choose(&self, trigger: &Locator, overlay: SingleChoice, label: &str) -> OverlayResult<()> {
        choose_option(self.driver, trigger, overlay, label, Some(self.config.overlay_timeout())).await
    }

    /// See [`toggle_and_confirm`]
    pub async fn toggle_and_confirm<S: AsRef<str>>(&self, trigger: &Locator, labels: &[S]) -> OverlayResult<()> {
        checker::toggle_and_confirm(self.driver, trigger, labels, Some(self.config.overlay_timeout())).await
    }

    /// See [`toggle_and_dismiss_via_backdrop`]
    pub async fn toggle_and_dismiss<S: AsRef<str>>(&self, trigger: &Locator, labels: &[S]) -> OverlayResult<()> {
        toggle_and_dismiss_via_backdrop(self.driver, trigger, labels, Some(self.config.overlay_timeout())).await
    }

    /// See [`await_spinner_lifecycle`]
    pub async fn spinner(&self) -> OverlayResult<()> {
        await_spinner_lifecycle(self.driver, Some(self.config.spinner_timeout())).await
    }

    /// See [`assert_success_toast`]
    pub async fn success_toast(&self) -> OverlayResult<()> {
        assert_success_toast(self.driver).await
    }

    /// See [`assert_no_error_toast`]
    pub async fn no_error_toast(&self) -> OverlayResult<()> {
        assert_no_error_toast(self.driver, Some(self.config.error_toast_window())).await
    }

    /// See [`go_to`]
    pub async fn go_to(&self, url: &str) -> OverlayResult<()> {
        go_to(self.driver, url, Some(self.config.url_timeout())).await
    }

    /// See [`click_alert_button`]
    pub async fn alert_button(&self, label: &str) -> OverlayResult<()> {
        click_alert_button(self.driver, label).await
    }

    /// See [`count_list_items`]
    pub async fn count_list_items(&self) -> OverlayResult<usize> {
        count_list_items(self.driver, Some(self.config.list_timeout())).await
    }

    /// See [`select_list_item`]
    pub async fn select_list_item(&self, label: &str) -> OverlayResult<()> {
        select_list_item(self.driver, label, Some(self.config.list_timeout())).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::mock::{MockDriver, MockElement};
    use crate::result::OverlayError;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_facade_uses_configured_overlay_budget() {
        let driver = MockDriver::new().with_element(MockElement::new("#trigger"));
        let overlays = Overlays::with_config(&driver, OverlayConfig::default().with_overlay_timeout(400));

        let err = overlays
            .choose(&Locator::new("#trigger"), SingleChoice::ActionSheet, "Share")
            .await
            .unwrap_err();

        match err {
            OverlayError::Timeout { budget_ms, .. } => assert_eq!(budget_ms, 400),
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_facade_uses_configured_toast_window() {
        let driver = MockDriver::new().with_element(
            MockElement::new(catalog::ERROR_TOAST).disappears_after(Duration::from_millis(700)),
        );
        let overlays = Overlays::with_config(&driver, OverlayConfig::default().with_error_toast_window(500));
        assert!(overlays.no_error_toast().await.is_err());
        assert_eq!(driver.elapsed(), Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_facade_over_dyn_driver() {
        let mock = MockDriver::new().with_element(MockElement::new(catalog::SUCCESS_TOAST));
        let driver: &dyn Driver = &mock;
        let overlays = Overlays::new(driver);
        overlays.success_toast().await.unwrap();
        assert_eq!(overlays.config(), &OverlayConfig::default());
    }
}

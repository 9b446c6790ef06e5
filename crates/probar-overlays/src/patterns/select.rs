//! Single-choice overlays: action sheets and selects.
//!
//! trigger → container visible → click item. Picking an item closes the
//! overlay by itself, so there is no dismissal step and closure is not
//! verified.

use crate::catalog;
use crate::driver::Driver;
use crate::locator::Locator;
use crate::result::OverlayResult;
use crate::wait::{self, VisibilityState, DEFAULT_WAIT_TIMEOUT_MS};
use std::time::Duration;
use tracing::{debug, instrument};

/// Overlays that close on pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SingleChoice {
    /// `idea-action-sheet` with `ion-button` options
    ActionSheet,
    /// `idea-suggestions` (custom select) with `ion-item` options
    Suggestions,
    /// `ion-select-popover` (native select) with `ion-item` options
    SelectPopover,
}

impl SingleChoice {
    /// Container selector
    #[must_use]
    pub const fn container(self) -> &'static str {
        match self {
            Self::ActionSheet => catalog::ACTION_SHEET,
            Self::Suggestions => catalog::SUGGESTIONS,
            Self::SelectPopover => catalog::SELECT_POPOVER,
        }
    }

    /// Item selector, relative to the container
    #[must_use]
    pub const fn item(self) -> &'static str {
        match self {
            Self::ActionSheet => catalog::ACTION_SHEET_ITEM,
            Self::Suggestions | Self::SelectPopover => catalog::ITEM,
        }
    }

    /// Locator of the option labelled `label`, scoped to the container
    #[must_use]
    pub fn option(self, label: &str) -> Locator {
        Locator::new(self.container())
            .descendant(self.item())
            .with_text(label)
    }
}

/// Open a single-choice overlay and pick `label`
///
/// `timeout` bounds the container wait; `None` uses 30 seconds.
///
/// # Errors
///
/// `Timeout` if the container never shows, `LocatorNotFound` if no option
/// carries `label`. Nothing is retried.
#[instrument(skip(driver, trigger), fields(trigger = %trigger))]
pub async fn choose_option<D: Driver + ?Sized>(
    driver: &D,
    trigger: &Locator,
    overlay: SingleChoice,
    label: &str,
    timeout: Option<Duration>,
) -> OverlayResult<()> {
    let budget = timeout.unwrap_or(Duration::from_millis(DEFAULT_WAIT_TIMEOUT_MS));
    let container = Locator::new(overlay.container());

    driver.click(trigger).await?;
    wait::wait_for(driver, &container, VisibilityState::Visible, budget).await?;

    let option = overlay.option(label);
    debug!(option = %option, "picking option");
    driver.click(&option).await
}

/// Pick `label` from an IDEA action sheet opened by `trigger`
pub async fn select_action_sheet_option<D: Driver + ?Sized>(
    driver: &D,
    trigger: &Locator,
    label: &str,
    timeout: Option<Duration>,
) -> OverlayResult<()> {
    choose_option(driver, trigger, SingleChoice::ActionSheet, label, timeout).await
}

/// Pick `label` from IDEA suggestions opened by `trigger`
pub async fn choose_suggestion<D: Driver + ?Sized>(
    driver: &D,
    trigger: &Locator,
    label: &str,
    timeout: Option<Duration>,
) -> OverlayResult<()> {
    choose_option(driver, trigger, SingleChoice::Suggestions, label, timeout).await
}

/// Pick `label` from an `ion-select` popover opened by `trigger`
pub async fn choose_select_option<D: Driver + ?Sized>(
    driver: &D,
    trigger: &Locator,
    label: &str,
    timeout: Option<Duration>,
) -> OverlayResult<()> {
    choose_option(driver, trigger, SingleChoice::SelectPopover, label, timeout).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::mock::{DriverCall, MockDriver, MockElement};
    use crate::result::OverlayError;

    fn trigger() -> Locator {
        Locator::new("#color")
    }

    fn page(kind: SingleChoice, labels: &[&str]) -> MockDriver {
        let item_css = format!("{} {}", kind.container(), kind.item());
        let mut driver = MockDriver::new()
            .with_element(MockElement::new("#color"))
            .with_element(MockElement::new(kind.container()).appears_after(Duration::from_millis(50)));
        for label in labels {
            driver = driver.with_element(MockElement::new(item_css.clone()).with_text(*label));
        }
        driver
    }

    mod single_choice_tests {
        use super::*;

        #[test]
        fn test_option_is_scoped_to_container() {
            assert_eq!(
                SingleChoice::ActionSheet.option("Delete").to_string(),
                "idea-action-sheet ion-button >> text=\"Delete\""
            );
            assert_eq!(
                SingleChoice::Suggestions.option("Rome").to_string(),
                "idea-suggestions ion-item >> text=\"Rome\""
            );
            assert_eq!(
                SingleChoice::SelectPopover.option("Blue").to_string(),
                "ion-select-popover ion-item >> text=\"Blue\""
            );
        }
    }

    mod protocol_tests {
        use super::*;

        #[tokio::test(start_paused = true)]
        async fn test_select_end_to_end() {
            let driver = page(SingleChoice::SelectPopover, &["Red", "Blue"]);

            choose_select_option(&driver, &trigger(), "Blue", None)
                .await
                .unwrap();

            let history = driver.history();
            assert_eq!(history[0], DriverCall::Click { target: "#color".to_string() });
            assert_eq!(
                &history[1..],
                &[
                    DriverCall::WaitForState {
                        target: "ion-select-popover".to_string(),
                        state: VisibilityState::Visible,
                    },
                    DriverCall::Click {
                        target: "ion-select-popover ion-item >> text=\"Blue\"".to_string(),
                    },
                ]
            );
            assert!(driver.elapsed() >= Duration::from_millis(50));
        }

        #[tokio::test(start_paused = true)]
        async fn test_action_sheet_uses_buttons() {
            let driver = page(SingleChoice::ActionSheet, &["Archive"]);
            select_action_sheet_option(&driver, &trigger(), "Archive", None)
                .await
                .unwrap();
            assert_eq!(
                driver.clicks(),
                vec![
                    "#color".to_string(),
                    "idea-action-sheet ion-button >> text=\"Archive\"".to_string()
                ]
            );
        }

        #[tokio::test(start_paused = true)]
        async fn test_unknown_label_fails_without_retry() {
            let driver = page(SingleChoice::Suggestions, &["Rome"]);
            let err = choose_suggestion(&driver, &trigger(), "Paris", None)
                .await
                .unwrap_err();
            assert!(matches!(err, OverlayError::LocatorNotFound { .. }));
            assert_eq!(driver.clicks().len(), 2);
        }

        #[tokio::test(start_paused = true)]
        async fn test_label_match_is_case_sensitive() {
            let driver = page(SingleChoice::SelectPopover, &["Blue"]);
            let err = choose_select_option(&driver, &trigger(), "blue", None)
                .await
                .unwrap_err();
            assert!(matches!(err, OverlayError::LocatorNotFound { .. }));
        }

        #[tokio::test(start_paused = true)]
        async fn test_prefix_label_picks_exact_option() {
            let driver = page(SingleChoice::SelectPopover, &["Blue sky", "Blue"]);
            choose_select_option(&driver, &trigger(), "Blue", None)
                .await
                .unwrap();
            assert!(driver.is_checked(&SingleChoice::SelectPopover.option("Blue")));
            assert!(!driver.is_checked(&SingleChoice::SelectPopover.option("Blue sky")));
        }

        #[tokio::test(start_paused = true)]
        async fn test_unbounded_timeout_is_accepted() {
            let driver = page(SingleChoice::SelectPopover, &["Blue"]);
            choose_select_option(&driver, &trigger(), "Blue", Some(Duration::MAX))
                .await
                .unwrap();
            assert!(driver.elapsed() >= Duration::from_millis(50));
        }

        #[tokio::test(start_paused = true)]
        async fn test_container_timeout_stops_before_item_click() {
            let driver = MockDriver::new().with_element(MockElement::new("#color"));
            let err = choose_select_option(&driver, &trigger(), "Blue", Some(Duration::from_millis(200)))
                .await
                .unwrap_err();
            assert!(err.is_timeout());
            assert_eq!(driver.clicks(), vec!["#color".to_string()]);
        }

        #[tokio::test(start_paused = true)]
        async fn test_items_outside_container_are_ignored() {
            let driver = MockDriver::new()
                .with_element(MockElement::new("#color"))
                .with_element(MockElement::new("ion-select-popover"))
                .with_element(MockElement::new("ion-list ion-item").with_text("Blue"));
            let err = choose_select_option(&driver, &trigger(), "Blue", None)
                .await
                .unwrap_err();
            assert!(matches!(err, OverlayError::LocatorNotFound { .. }));
        }
    }
}

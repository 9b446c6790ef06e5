//! Widget catalog.
//!
//! Selectors for the fixed set of Ionic and IDEA components the patterns
//! know how to drive, plus the plain locator helpers scenarios use to find
//! triggers.

use crate::locator::Locator;

/// IDEA action sheet container
pub const ACTION_SHEET: &str = "idea-action-sheet";
/// Action sheet option
pub const ACTION_SHEET_ITEM: &str = "ion-button";

/// IDEA suggestions (custom select) container
pub const SUGGESTIONS: &str = "idea-suggestions";
/// Ionic select popover container
pub const SELECT_POPOVER: &str = "ion-select-popover";
/// Item inside lists, selects and checkers
pub const ITEM: &str = "ion-item";

/// Checker modal container
pub const MODAL: &str = "ion-modal";
/// Checkable rows of the checker modal
pub const MODAL_ITEMS: &str = "ion-modal ion-content ion-item";
/// Confirm control: trailing button of the modal header
pub const MODAL_CONFIRM: &str = r#"ion-modal ion-header ion-buttons[slot="end"] > ion-button"#;

/// Marker element of the inline checker
pub const INLINE_CHECKER: &str = "idea-inline-checker";
/// Options of the inline checker popover
pub const POPOVER_ITEMS: &str = "ion-popover ion-item";
/// Backdrop behind popovers and modals
pub const BACKDROP: &str = "ion-backdrop";

/// Button group of an alert
pub const ALERT_BUTTON_GROUP: &str = ".alert-button-group";

/// Loading spinner
pub const LOADING_SPINNER: &str = ".loading-spinner";
/// Toast tagged as success
pub const SUCCESS_TOAST: &str = r#"ion-toast[color="success"]"#;
/// Toast tagged as error
pub const ERROR_TOAST: &str = r#"ion-toast[color="danger"]"#;

/// Items of a plain list
pub const LIST_ITEMS: &str = "ion-list ion-item";

/// Default attribute carrying test ids
pub const DEFAULT_TEST_ID_ATTRIBUTE: &str = "testId";

/// Inner `<input>` of an `ion-input` tagged with `testId`
#[must_use]
pub fn ion_input_by_test_id(test_id: &str) -> Locator {
    ion_input_by_test_id_attr(test_id, DEFAULT_TEST_ID_ATTRIBUTE)
}

/// Inner `<input>` of an `ion-input` tagged with a custom attribute
#[must_use]
pub fn ion_input_by_test_id_attr(test_id: &str, attribute: &str) -> Locator {
    Locator::new(format!(r#"ion-input[{attribute}="{test_id}"] input"#))
}

/// `ion-button` containing an icon, matched by `icon` or `name`
#[must_use]
pub fn ion_button_by_icon(icon: &str) -> Locator {
    Locator::new(format!(
        r#"ion-button:has(ion-icon[icon="{icon}"], ion-icon[name="{icon}"])"#
    ))
}

/// Inner `<input>` of the searchbar
#[must_use]
pub fn ion_searchbar_input() -> Locator {
    Locator::new("ion-searchbar input")
}

//! Playwright-style expectations.
//!
//! `expect(&locator).to_be_visible(driver)` reads like the scenario it
//! comes from. Assertions fail the scenario with
//! [`OverlayError::AssertionFailed`] rather than returning a value.

use crate::driver::Driver;
use crate::locator::Locator;
use crate::result::{OverlayError, OverlayResult};
use std::fmt::Debug;
use std::time::Duration;

/// Smart assertion builder for locators
#[derive(Debug, Clone)]
pub struct Expect<'a> {
    locator: &'a Locator,
    timeout: Option<Duration>,
}

impl<'a> Expect<'a> {
    /// Create a new expectation for a locator
    #[must_use]
    pub const fn new(locator: &'a Locator) -> Self {
        Self {
            locator,
            timeout: None,
        }
    }

    /// Override the driver's standard assertion timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sample exactly once, without waiting
    #[must_use]
    pub const fn immediately(self) -> Self {
        self.with_timeout(Duration::ZERO)
    }

    /// Assert the element is visible
    pub async fn to_be_visible<D: Driver + ?Sized>(&self, driver: &D) -> OverlayResult<()> {
        driver.assert_visible(self.locator, self.timeout).await
    }

    /// Assert the element is hidden
    pub async fn to_be_hidden<D: Driver + ?Sized>(&self, driver: &D) -> OverlayResult<()> {
        driver.assert_hidden(self.locator, self.timeout).await
    }
}

/// Create an expectation for a locator
#[must_use]
pub const fn expect(locator: &Locator) -> Expect<'_> {
    Expect::new(locator)
}

/// Assert two values are exactly equal
pub fn expect_eq<T: PartialEq + Debug + ?Sized>(
    what: &str,
    expected: &T,
    actual: &T,
) -> OverlayResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(OverlayError::assertion(format!(
            "expected {what} {expected:?}, got {actual:?}"
        )))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::mock::{DriverCall, MockDriver, MockElement};

    #[test]
    fn test_expect_eq() {
        expect_eq("url", "a", "a").unwrap();
        let err = expect_eq("url", "https://x/y", "https://x/y/").unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"Assertion failed: expected url "https://x/y", got "https://x/y/""#
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_to_be_visible_delegates() {
        let driver = MockDriver::new().with_element(MockElement::new("ion-toast"));
        let toast = Locator::new("ion-toast");
        expect(&toast).to_be_visible(&driver).await.unwrap();
        assert_eq!(
            driver.history(),
            vec![DriverCall::AssertVisible {
                target: "ion-toast".to_string()
            }]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_immediately_does_not_wait() {
        let driver = MockDriver::new()
            .with_element(MockElement::new("ion-backdrop").appears_after(Duration::from_millis(10)));
        let backdrop = Locator::new("ion-backdrop");
        let err = expect(&backdrop).immediately().to_be_visible(&driver).await.unwrap_err();
        assert!(matches!(err, OverlayError::AssertionFailed { .. }));
        assert_eq!(driver.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_to_be_hidden_with_timeout() {
        let driver = MockDriver::new()
            .with_element(MockElement::new("ion-toast").disappears_after(Duration::from_millis(100)));
        let toast = Locator::new("ion-toast");
        expect(&toast)
            .with_timeout(Duration::from_millis(150))
            .to_be_hidden(&driver)
            .await
            .unwrap();
    }
}

//! Probar Overlays: interaction primitives for Ionic overlay widgets
//!
//! Ionic apps render selects, action sheets, checker modals and popovers as
//! overlays that mount asynchronously after their trigger is clicked. Each
//! widget has its own open/act/dismiss protocol. This crate encodes those
//! protocols once, on top of any browser automation backend that implements
//! [`Driver`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                  PROBAR OVERLAYS Architecture                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐    ┌────────────┐    ┌────────────┐            │
//! │   │ Test       │    │ Patterns   │    │ Driver     │            │
//! │   │ (Rust)     │───►│ + Catalog  │───►│ (browser / │            │
//! │   │            │    │ + Wait     │    │  mock)     │            │
//! │   └────────────┘    └────────────┘    └────────────┘            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use probar_overlays::prelude::*;
//!
//! # async fn run(driver: &dyn Driver) -> OverlayResult<()> {
//! let overlays = Overlays::with_config(driver, OverlayConfig::default().with_env_overrides()?);
//! overlays.go_to("https://app.local/orders").await?;
//! overlays
//!     .choose(&Locator::new("#status"), SingleChoice::SelectPopover, "Shipped")
//!     .await?;
//! overlays.spinner().await?;
//! overlays.success_toast().await?;
//! # Ok(())
//! # }
//! ```

// Lints, including missing_docs, are configured in workspace Cargo.toml

mod assertion;
/// Selector catalog for Ionic/IDEA widgets
pub mod catalog;
mod config;
mod driver;
mod locator;
/// Tracing subscriber setup
pub mod logging;
mod mock;
mod network;
/// Per-widget interaction patterns
pub mod patterns;
mod result;
mod wait;

pub use assertion::{expect, expect_eq, Expect};
pub use config::{
    OverlayConfig, DEFAULT_ERROR_TOAST_WINDOW_MS, DEFAULT_LIST_TIMEOUT_MS,
    DEFAULT_SPINNER_TIMEOUT_MS, ENV_PREFIX,
};
pub use driver::{Driver, RouteResponse};
pub use locator::{Locator, Selector};
pub use mock::{ClickEffect, DriverCall, MockDriver, MockElement};
pub use network::{mock_json_response, ApiStatus, UrlPattern};
pub use patterns::{Overlays, SingleChoice};
pub use result::{ErrorKind, OverlayError, OverlayResult};
pub use wait::{
    duration_ms, wait_for, VisibilityState, WaitResult, DEFAULT_ASSERTION_TIMEOUT_MS,
    DEFAULT_POLL_INTERVAL_MS, DEFAULT_WAIT_TIMEOUT_MS,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use super::assertion::*;
    pub use super::catalog;
    pub use super::config::*;
    pub use super::driver::*;
    pub use super::locator::*;
    pub use super::mock::*;
    pub use super::network::*;
    pub use super::patterns::*;
    pub use super::result::*;
    pub use super::wait::*;
}

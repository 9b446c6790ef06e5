//! Locator abstraction for element selection.
//!
//! A [`Locator`] is an unresolved description of zero or more DOM nodes.
//! Nothing is looked up until a [`Driver`](crate::driver::Driver) is asked
//! to act on it, and locators are rebuilt on every pattern invocation so a
//! re-rendered overlay never leaves a stale handle behind.
//!
//! Text filters use exact, case-sensitive matching and the first match in
//! document order wins. Two items sharing a label are not disambiguated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Selector type for locating elements
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selector {
    /// CSS selector (e.g., "ion-modal ion-content ion-item")
    Css(String),
    /// Node with exact visible text inside the CSS scope
    ///
    /// Rendered as `css >> text="..."`: the text node is looked up within
    /// the elements matching `css`, so the button of an alert group is
    /// addressed through the group itself.
    CssWithText {
        /// Base CSS selector
        css: String,
        /// Text content to match
        text: String,
    },
}

impl Selector {
    /// Create a CSS selector
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// The CSS part of the selector
    #[must_use]
    pub fn css_part(&self) -> &str {
        match self {
            Self::Css(css) | Self::CssWithText { css, .. } => css,
        }
    }

    /// The text filter, if any
    #[must_use]
    pub fn text_part(&self) -> Option<&str> {
        match self {
            Self::Css(_) => None,
            Self::CssWithText { text, .. } => Some(text),
        }
    }

    /// Render as a Playwright-style selector chain
    ///
    /// The text part is quoted (`text="Blue"`), which Playwright treats as
    /// an exact, case-sensitive match. Quotes and backslashes inside the
    /// label are escaped.
    #[must_use]
    pub fn to_query(&self) -> String {
        match self {
            Self::Css(css) => css.clone(),
            Self::CssWithText { css, text } => format!("{css} >> text={}", quote_text(text)),
        }
    }
}

fn quote_text(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        if matches!(c, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// A locator for finding and interacting with elements
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locator {
    selector: Selector,
}

impl Locator {
    /// Create a new locator with a CSS selector
    #[must_use]
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: Selector::Css(selector.into()),
        }
    }

    /// Create a locator from a selector
    #[must_use]
    pub const fn from_selector(selector: Selector) -> Self {
        Self { selector }
    }

    /// Filter by exact text content
    ///
    /// Replaces any text filter already present.
    #[must_use]
    pub fn with_text(self, text: impl Into<String>) -> Self {
        let css = match self.selector {
            Selector::Css(css) | Selector::CssWithText { css, .. } => css,
        };
        Self {
            selector: Selector::CssWithText {
                css,
                text: text.into(),
            },
        }
    }

    /// Scope a descendant selector under this locator's CSS
    ///
    /// The text filter of `self` is not carried over; scoping is purely
    /// structural (`"<self> <css>"`).
    #[must_use]
    pub fn descendant(&self, css: &str) -> Self {
        Self::new(format!("{} {css}", self.selector.css_part()))
    }

    /// Get the selector
    #[must_use]
    pub const fn selector(&self) -> &Selector {
        &self.selector
    }

    /// CSS part of the selector
    #[must_use]
    pub fn css(&self) -> &str {
        self.selector.css_part()
    }

    /// Text filter, if any
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.selector.text_part()
    }

    /// Check whether a candidate node matches this locator
    ///
    /// `css` is the selector the node is registered under and `text` its
    /// visible text. Text comparison is exact and case-sensitive.
    #[must_use]
    pub fn matches(&self, css: &str, text: Option<&str>) -> bool {
        if self.css() != css {
            return false;
        }
        match self.text() {
            None => true,
            Some(wanted) => text == Some(wanted),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.selector.to_query())
    }
}

impl From<&str> for Locator {
    fn from(css: &str) -> Self {
        Self::new(css)
    }
}

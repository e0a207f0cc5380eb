//! Mock parser implementation for testing.
//!
//! Provides [`MockParser`] for unit testing the scan pipeline without a
//! real content-extraction backend.

use std::collections::HashMap;
use std::thread;
use std::time::Duration;

use sift_config::ProcessedConfig;
use sift_types::{PageType, ParsedPage};

use crate::parser::{PageParser, ParseError};

/// Scripted outcome for one url.
#[derive(Debug, Clone)]
enum MockOutcome {
    Page(ParsedPage),
    Unlisted,
    Failure(String),
}

/// Mock parser for testing.
///
/// Outcomes are keyed by page url. Use the builder methods to script the
/// mock with test data; parsing an url without an entry fails.
///
/// # Example
///
/// ```ignore
/// use sift_parser::{MockParser, PageParser};
/// use sift_types::ParsedPage;
///
/// let parser = MockParser::new()
///     .with_page("/docs/intro", ParsedPage::default())
///     .with_unlisted("/internal");
///
/// let parsed = parser.parse("<html>", PageType::Docs, "/docs/intro", &config);
/// ```
#[derive(Debug, Default)]
pub struct MockParser {
    outcomes: HashMap<String, MockOutcome>,
    delays: HashMap<String, Duration>,
}

impl MockParser {
    /// Create a new empty mock parser.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a parsed page for an url.
    #[must_use]
    pub fn with_page(mut self, url: impl Into<String>, page: ParsedPage) -> Self {
        self.outcomes.insert(url.into(), MockOutcome::Page(page));
        self
    }

    /// Script an unlisted outcome for an url.
    #[must_use]
    pub fn with_unlisted(mut self, url: impl Into<String>) -> Self {
        self.outcomes.insert(url.into(), MockOutcome::Unlisted);
        self
    }

    /// Script a parse failure for an url.
    #[must_use]
    pub fn with_failure(mut self, url: impl Into<String>, message: impl Into<String>) -> Self {
        self.outcomes
            .insert(url.into(), MockOutcome::Failure(message.into()));
        self
    }

    /// Delay parsing of an url.
    ///
    /// Perturbs completion order in concurrent tests: a delayed early
    /// descriptor finishes after its successors, which id assignment must
    /// not observe.
    #[must_use]
    pub fn with_delay(mut self, url: impl Into<String>, delay: Duration) -> Self {
        self.delays.insert(url.into(), delay);
        self
    }
}

impl PageParser for MockParser {
    fn parse(
        &self,
        _content: &str,
        _page_type: PageType,
        url: &str,
        _config: &ProcessedConfig,
    ) -> Result<Option<ParsedPage>, ParseError> {
        if let Some(delay) = self.delays.get(url) {
            thread::sleep(*delay);
        }

        match self.outcomes.get(url) {
            Some(MockOutcome::Page(page)) => Ok(Some(page.clone())),
            Some(MockOutcome::Unlisted) => Ok(None),
            Some(MockOutcome::Failure(message)) => Err(ParseError::malformed(url, message)),
            None => Err(ParseError::malformed(url, "no mock outcome scripted")),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sift_config::{RawOptions, SiteContext, process_options};

    use super::*;

    fn config() -> ProcessedConfig {
        process_options(RawOptions::default(), &SiteContext::new("/tmp")).unwrap()
    }

    #[test]
    fn test_scripted_page() {
        let page = ParsedPage {
            page_title: "Intro".to_owned(),
            ..ParsedPage::default()
        };
        let parser = MockParser::new().with_page("/docs/intro", page.clone());

        let parsed = parser
            .parse("<html>", PageType::Docs, "/docs/intro", &config())
            .unwrap();

        assert_eq!(parsed, Some(page));
    }

    #[test]
    fn test_unlisted() {
        let parser = MockParser::new().with_unlisted("/internal");

        let parsed = parser
            .parse("<html>", PageType::Page, "/internal", &config())
            .unwrap();

        assert_eq!(parsed, None);
    }

    #[test]
    fn test_scripted_failure() {
        let parser = MockParser::new().with_failure("/bad", "unclosed tag");

        let err = parser
            .parse("<html>", PageType::Docs, "/bad", &config())
            .unwrap_err();

        assert_eq!(err.to_string(), "malformed page /bad: unclosed tag");
    }

    #[test]
    fn test_unknown_url_fails() {
        let parser = MockParser::new();

        let result = parser.parse("<html>", PageType::Docs, "/missing", &config());

        assert!(result.is_err());
    }
}

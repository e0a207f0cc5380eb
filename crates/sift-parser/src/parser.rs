//! Parser trait and error types.

use sift_config::ProcessedConfig;
use sift_types::{PageType, ParsedPage};

/// Error produced when a page's content cannot be parsed.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseError {
    /// The page content is malformed.
    #[error("malformed page {url}: {message}")]
    Malformed {
        /// Url of the failing page.
        url: String,
        /// Backend-specific description of the problem.
        message: String,
    },
}

impl ParseError {
    /// Create a malformed-page error.
    #[must_use]
    pub fn malformed(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Malformed {
            url: url.into(),
            message: message.into(),
        }
    }
}

/// Extracts a structured record from one rendered page.
///
/// Implementations must be deterministic for identical inputs and safe to
/// call from multiple threads; the scanner invokes `parse` concurrently
/// for every page of a scan.
pub trait PageParser: Send + Sync {
    /// Parse one page's content into a structured record.
    ///
    /// Returns `Ok(None)` when the page is unlisted: it is excluded from
    /// indexing entirely and consumes no document ids.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the content cannot be parsed. The
    /// scanner isolates the failure to this page.
    fn parse(
        &self,
        content: &str,
        page_type: PageType,
        url: &str,
        config: &ProcessedConfig,
    ) -> Result<Option<ParsedPage>, ParseError>;
}

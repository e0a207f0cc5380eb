//! Scan input and parser output types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Kind of site page a descriptor points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    /// Documentation page.
    Docs,
    /// Blog post.
    Blog,
    /// Any other standalone page.
    Page,
}

/// Input unit identifying one rendered page to scan.
///
/// Supplied by the caller; the scanner never discovers pages on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDescriptor {
    /// Absolute path to the rendered page file.
    pub file_path: PathBuf,
    /// Canonical site-relative URL (e.g. `/docs/intro`).
    pub url: String,
    /// Page kind, forwarded to the page parser.
    pub page_type: PageType,
}

impl PageDescriptor {
    /// Create a new page descriptor.
    #[must_use]
    pub fn new(file_path: impl Into<PathBuf>, url: impl Into<String>, page_type: PageType) -> Self {
        Self {
            file_path: file_path.into(),
            url: url.into(),
            page_type,
        }
    }
}

/// A sub-unit of a page: one heading plus the content below it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    /// Heading text.
    pub title: String,
    /// Anchor target. May be empty, a bare fragment (`#setup`) or a
    /// same-page relative link (`/docs/intro#setup`) depending on the
    /// parser backend.
    pub hash: String,
    /// Text content under the heading, if any.
    pub content: Option<String>,
}

/// Structured page record produced by the page parser.
///
/// A parser returns no record at all for unlisted pages; every
/// `ParsedPage` therefore represents a page that will be indexed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPage {
    /// Page title.
    pub page_title: String,
    /// Page description from metadata, if any.
    pub description: Option<String>,
    /// Page keywords from metadata, if any.
    pub keywords: Option<String>,
    /// Breadcrumb trail leading to the page. May be empty.
    pub breadcrumb: Vec<String>,
    /// Sections of the page, in document order.
    pub sections: Vec<Section>,
}

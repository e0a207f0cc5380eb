//! Search document records emitted by the scanner.
//!
//! Field names follow the compact wire format consumed by the index
//! builder: `i` (id), `t` (text), `u` (url), `s` (subtitle), `b`
//! (breadcrumb), `h` (hash), `p` (parent id).

use serde::{Deserialize, Serialize};

/// Identifier of one search document.
///
/// Ids are handed out by the scanner's sequential reduction, are globally
/// unique across all five collections and strictly increasing in input
/// order. The first allocated id is 1.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DocId(pub u32);

/// Title document: one per indexed page.
///
/// Its id doubles as the parent reference for every other document
/// emitted for the same page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleDocument {
    /// Document id.
    #[serde(rename = "i")]
    pub id: DocId,
    /// Page title.
    #[serde(rename = "t")]
    pub title: String,
    /// Page url.
    #[serde(rename = "u")]
    pub url: String,
    /// Breadcrumb trail leading to the page.
    #[serde(rename = "b")]
    pub breadcrumb: Vec<String>,
}

/// Heading document: one per section whose title differs from the page title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingDocument {
    /// Document id.
    #[serde(rename = "i")]
    pub id: DocId,
    /// Section heading text.
    #[serde(rename = "t")]
    pub title: String,
    /// Page url.
    #[serde(rename = "u")]
    pub url: String,
    /// Normalized in-page anchor (empty or `#fragment`).
    #[serde(rename = "h")]
    pub hash: String,
    /// Id of the page's title document.
    #[serde(rename = "p")]
    pub parent: DocId,
}

/// Description document: the page's metadata description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionDocument {
    /// Document id.
    #[serde(rename = "i")]
    pub id: DocId,
    /// Description text.
    #[serde(rename = "t")]
    pub description: String,
    /// Page title, shown as the result subtitle.
    #[serde(rename = "s")]
    pub page_title: String,
    /// Page url.
    #[serde(rename = "u")]
    pub url: String,
    /// Id of the page's title document.
    #[serde(rename = "p")]
    pub parent: DocId,
}

/// Keywords document: the page's metadata keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordsDocument {
    /// Document id.
    #[serde(rename = "i")]
    pub id: DocId,
    /// Keywords text.
    #[serde(rename = "t")]
    pub keywords: String,
    /// Page title, shown as the result subtitle.
    #[serde(rename = "s")]
    pub page_title: String,
    /// Page url.
    #[serde(rename = "u")]
    pub url: String,
    /// Id of the page's title document.
    #[serde(rename = "p")]
    pub parent: DocId,
}

/// Content document: the text body of one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDocument {
    /// Document id.
    #[serde(rename = "i")]
    pub id: DocId,
    /// Section content text.
    #[serde(rename = "t")]
    pub content: String,
    /// Section title, falling back to the page title.
    #[serde(rename = "s")]
    pub subtitle: String,
    /// Page url.
    #[serde(rename = "u")]
    pub url: String,
    /// Normalized in-page anchor (empty or `#fragment`).
    #[serde(rename = "h")]
    pub hash: String,
    /// Id of the page's title document.
    #[serde(rename = "p")]
    pub parent: DocId,
}

/// The five ordered document collections emitted by a scan.
///
/// Collections preserve the order in which documents were emitted: input
/// descriptor order, then emission order within each page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentCollections {
    /// Title documents.
    pub titles: Vec<TitleDocument>,
    /// Heading documents.
    pub headings: Vec<HeadingDocument>,
    /// Description documents.
    pub descriptions: Vec<DescriptionDocument>,
    /// Keywords documents.
    pub keywords: Vec<KeywordsDocument>,
    /// Content documents.
    pub contents: Vec<ContentDocument>,
}

impl DocumentCollections {
    /// Total number of documents across all five collections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.titles.len()
            + self.headings.len()
            + self.descriptions.len()
            + self.keywords.len()
            + self.contents.len()
    }

    /// True when no documents were emitted at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//! Shared data model for the sift search-corpus scanner.
//!
//! This crate defines the units flowing through the scan pipeline:
//!
//! - [`PageDescriptor`]: caller-supplied input identifying one rendered page
//! - [`ParsedPage`] / [`Section`]: structured output of the page parser
//! - [`DocId`] and the five search document kinds emitted by the scanner,
//!   grouped into [`DocumentCollections`]
//!
//! Each document kind is its own struct so that its required fields are
//! statically enforced; the downstream index builder consumes the compact
//! wire shape (`i`, `t`, `u`, ...) via serde.

mod document;
mod page;

pub use document::{
    ContentDocument, DescriptionDocument, DocId, DocumentCollections, HeadingDocument,
    KeywordsDocument, TitleDocument,
};
pub use page::{PageDescriptor, PageType, ParsedPage, Section};

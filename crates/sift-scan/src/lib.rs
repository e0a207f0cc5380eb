//! Concurrent document scanning and categorization for the sift search
//! corpus.
//!
//! [`scan_documents`] drives the whole pipeline: every page descriptor is
//! read and parsed in parallel, the outcomes are joined back into input
//! order, and a single sequential pass assigns document ids and emits the
//! five ordered collections (title, heading, description, keywords,
//! content) consumed by the downstream index builder.
//!
//! Id assignment is a deterministic function of input descriptor order,
//! never of parse completion order, so repeated scans of the same input
//! produce identical corpora. Individual page failures are collected in
//! the [`ScanOutcome`] without aborting the rest of the scan.
//!
//! # Example
//!
//! ```ignore
//! use sift_scan::scan_documents;
//! use sift_types::{PageDescriptor, PageType};
//!
//! let descriptors = vec![
//!     PageDescriptor::new("/build/docs/intro/index.html", "/docs/intro", PageType::Docs),
//! ];
//! let outcome = scan_documents(&descriptors, &parser, &config)?;
//! println!("{} documents", outcome.documents.len());
//! ```

mod error;
mod hash;
mod scanner;

pub use error::{PageFailure, PageFailureKind, ScanError};
pub use scanner::{ScanOutcome, scan_documents};

//! Page parser abstraction for the sift search-corpus scanner.
//!
//! This crate provides the [`PageParser`] trait for abstracting per-page
//! content extraction from the scan pipeline. This enables:
//!
//! - **Unit testing** the scanner without a real HTML/Markdown backend
//! - **Backend flexibility** (rendered HTML, Markdown sources, remote APIs)
//! - **Clean separation** between corpus assembly and content extraction
//!
//! A parser must be deterministic for identical inputs: the scanner calls
//! it from a thread pool and relies on input order alone for id
//! assignment.
//!
//! [`MockParser`] (behind the `mock` feature flag) scripts per-url
//! outcomes for tests.

mod parser;

#[cfg(feature = "mock")]
mod mock;

#[cfg(feature = "mock")]
pub use mock::MockParser;
pub use parser::{PageParser, ParseError};

//! Scan error types.

use sift_parser::ParseError;

/// Failure recorded for a single page.
///
/// Collected alongside successful results; one failing page never aborts
/// the scan of the others.
#[derive(Debug, thiserror::Error)]
#[error("page {index} ({url}): {kind}")]
pub struct PageFailure {
    /// Position of the descriptor in the scan input.
    pub index: usize,
    /// Url of the failing page.
    pub url: String,
    /// What went wrong.
    pub kind: PageFailureKind,
}

/// Kind of per-page failure.
#[derive(Debug, thiserror::Error)]
pub enum PageFailureKind {
    /// The page file could not be read.
    #[error("read error: {0}")]
    Read(String),
    /// The page content could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Systemic scan failure: the descriptor list cannot be processed at all.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The bounded thread pool could not be created.
    #[error("failed to create scan thread pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

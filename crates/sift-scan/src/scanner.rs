//! Document scanning pipeline.
//!
//! The pipeline has two phases with a strict boundary between them:
//!
//! 1. **Concurrent dispatch**: every descriptor is read and parsed on the
//!    rayon pool. Completion order is arbitrary; outcomes are collected
//!    into slots positionally aligned with the input.
//! 2. **Sequential reduction**: a single pass over the outcomes in input
//!    order allocates ids and emits documents. This pass is the sole
//!    owner of the id counter and must never be parallelized.

use std::fs;

use rayon::prelude::*;
use tracing::{debug, warn};

use sift_config::ProcessedConfig;
use sift_parser::PageParser;
use sift_types::{
    ContentDocument, DescriptionDocument, DocId, DocumentCollections, HeadingDocument,
    KeywordsDocument, PageDescriptor, ParsedPage, TitleDocument,
};

use crate::error::{PageFailure, PageFailureKind, ScanError};
use crate::hash::normalize_hash;

/// Result of scanning a descriptor list.
///
/// A scan with zero documents and zero failures is a valid empty corpus
/// (e.g. every page unlisted), distinct from a scan aborted with
/// [`ScanError`].
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// The five ordered document collections.
    pub documents: DocumentCollections,
    /// Per-page failures, collected without aborting the scan.
    pub failures: Vec<PageFailure>,
}

/// Per-page parse outcome, positionally aligned with the input order.
#[derive(Debug)]
enum PageOutcome {
    /// The parser excluded the page from indexing.
    Unlisted,
    /// The page parsed successfully.
    Parsed(ParsedPage),
    /// Reading or parsing the page failed.
    Failed(PageFailure),
}

/// Monotonic id allocator.
///
/// Owned by the sequential reduction and created fresh per scan, so
/// concurrent scans in one process cannot contaminate each other's ids.
#[derive(Debug, Default)]
struct DocIdCounter(u32);

impl DocIdCounter {
    fn next(&mut self) -> DocId {
        self.0 += 1;
        DocId(self.0)
    }
}

/// Scan every descriptor and assemble the search corpus.
///
/// Pages are read and parsed in parallel; document ids are assigned in a
/// single sequential pass over the outcomes in input descriptor order,
/// which makes repeated scans of the same input byte-identical. When
/// `config.max_parallelism` is set the fan-out runs on a dedicated pool
/// of that size, otherwise on the global rayon pool.
///
/// # Errors
///
/// Returns [`ScanError`] only for systemic failures (the bounded thread
/// pool cannot be created). Per-page problems are reported in
/// [`ScanOutcome::failures`] and do not abort the scan.
pub fn scan_documents(
    descriptors: &[PageDescriptor],
    parser: &dyn PageParser,
    config: &ProcessedConfig,
) -> Result<ScanOutcome, ScanError> {
    let outcomes = match config.max_parallelism {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?;
            pool.install(|| collect_outcomes(descriptors, parser, config))
        }
        None => collect_outcomes(descriptors, parser, config),
    };

    let outcome = reduce_outcomes(outcomes, descriptors, config);

    debug!(
        pages = descriptors.len(),
        documents = outcome.documents.len(),
        failures = outcome.failures.len(),
        "document scan complete"
    );

    Ok(outcome)
}

/// Read and parse every descriptor in parallel.
///
/// The returned outcomes are positionally aligned with `descriptors`:
/// rayon's indexed collect preserves input order regardless of completion
/// timing, which is what the reduction's id determinism rests on.
fn collect_outcomes(
    descriptors: &[PageDescriptor],
    parser: &dyn PageParser,
    config: &ProcessedConfig,
) -> Vec<PageOutcome> {
    descriptors
        .par_iter()
        .enumerate()
        .map(|(index, descriptor)| parse_page(index, descriptor, parser, config))
        .collect()
}

/// Read and parse a single page.
fn parse_page(
    index: usize,
    descriptor: &PageDescriptor,
    parser: &dyn PageParser,
    config: &ProcessedConfig,
) -> PageOutcome {
    debug!(
        index,
        url = %descriptor.url,
        path = %descriptor.file_path.display(),
        "parsing page"
    );

    let content = match fs::read_to_string(&descriptor.file_path) {
        Ok(content) => content,
        Err(error) => {
            return PageOutcome::Failed(PageFailure {
                index,
                url: descriptor.url.clone(),
                kind: PageFailureKind::Read(error.to_string()),
            });
        }
    };

    match parser.parse(&content, descriptor.page_type, &descriptor.url, config) {
        Ok(Some(page)) => PageOutcome::Parsed(page),
        Ok(None) => PageOutcome::Unlisted,
        Err(error) => PageOutcome::Failed(PageFailure {
            index,
            url: descriptor.url.clone(),
            kind: PageFailureKind::Parse(error),
        }),
    }
}

/// Categorize and number the joined outcomes.
///
/// Strictly sequential over input order. Every parsed page reserves a
/// title id even when title documents are filtered out: that id parents
/// the page's other documents. Unlisted and failed pages consume no ids.
fn reduce_outcomes(
    outcomes: Vec<PageOutcome>,
    descriptors: &[PageDescriptor],
    config: &ProcessedConfig,
) -> ScanOutcome {
    let types = &config.index_content_types;
    let mut documents = DocumentCollections::default();
    let mut failures = Vec::new();
    let mut counter = DocIdCounter::default();

    for (outcome, descriptor) in outcomes.into_iter().zip(descriptors) {
        let page = match outcome {
            PageOutcome::Parsed(page) => page,
            PageOutcome::Unlisted => continue,
            PageOutcome::Failed(failure) => {
                warn!(index = failure.index, url = %failure.url, error = %failure.kind, "page failed");
                failures.push(failure);
                continue;
            }
        };

        let url = descriptor.url.as_str();
        let ParsedPage {
            page_title,
            description,
            keywords,
            breadcrumb,
            sections,
        } = page;

        let title_id = counter.next();

        if types.title {
            documents.titles.push(TitleDocument {
                id: title_id,
                title: page_title.clone(),
                url: url.to_owned(),
                breadcrumb,
            });
        }

        if types.description
            && let Some(description) = description
            && !description.is_empty()
        {
            documents.descriptions.push(DescriptionDocument {
                id: counter.next(),
                description,
                page_title: page_title.clone(),
                url: url.to_owned(),
                parent: title_id,
            });
        }

        if types.keywords
            && let Some(keywords) = keywords
            && !keywords.is_empty()
        {
            documents.keywords.push(KeywordsDocument {
                id: counter.next(),
                keywords,
                page_title: page_title.clone(),
                url: url.to_owned(),
                parent: title_id,
            });
        }

        for section in sections {
            let Some(hash) = normalize_hash(&section.hash, url) else {
                debug!(url, hash = %section.hash, "skipping section anchored outside the page");
                continue;
            };

            // A section heading equal to the page title would duplicate
            // the title document.
            if types.heading && section.title != page_title {
                documents.headings.push(HeadingDocument {
                    id: counter.next(),
                    title: section.title.clone(),
                    url: url.to_owned(),
                    hash: hash.clone(),
                    parent: title_id,
                });
            }

            if types.content
                && let Some(content) = section.content
                && !content.is_empty()
            {
                let subtitle = if section.title.is_empty() {
                    page_title.clone()
                } else {
                    section.title
                };
                documents.contents.push(ContentDocument {
                    id: counter.next(),
                    content,
                    subtitle,
                    url: url.to_owned(),
                    hash,
                    parent: title_id,
                });
            }
        }
    }

    ScanOutcome {
        documents,
        failures,
    }
}

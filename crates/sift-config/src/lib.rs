//! Option normalization for the sift search-corpus scanner.
//!
//! User-supplied options accept loose shapes: a single value where a list
//! is meant, a bool where a language list is meant, relative directories.
//! [`process_options`] resolves them against a [`SiteContext`] into a
//! canonical [`ProcessedConfig`]:
//!
//! - every one-or-many option becomes an ordered `Vec`
//! - route base paths lose their leading `/`
//! - directories become absolute paths under the site dir
//! - `searchBarPosition: auto` is inferred from the theme navbar
//! - `removeDefaultStopWordFilter: true` expands to the language list
//! - partial `indexContentTypes` overrides merge over a fixed baseline
//!
//! The scanner relies on every default established here; normalization
//! failures are fatal and produce no partial config.

mod navbar;

use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Deserialize;

pub use navbar::{NavbarItem, SearchBarSide, SiteContext};

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A structurally invalid option value.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// An ignore-file pattern that does not compile.
    #[error("Invalid ignore pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// The regex compile error.
        source: regex::Error,
    },
}

/// Option accepting a single value or a list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// Single value, normalized to a one-element list.
    One(T),
    /// Explicit list, passed through.
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        }
    }
}

/// Raw search bar position option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchBarPosition {
    /// Infer the side from the theme navbar.
    Auto,
    /// Force the left side.
    Left,
    /// Force the right side.
    Right,
}

/// Raw stop-word filter option: a toggle or an explicit language list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StopWordFilter {
    /// `true` expands to the full language list, `false` to none.
    Toggle(bool),
    /// Explicit language list, passed through.
    Languages(Vec<String>),
}

/// Partial content-type overrides as supplied by the user.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawIndexContentTypes {
    /// Override for title documents.
    pub title: Option<bool>,
    /// Override for heading documents.
    pub heading: Option<bool>,
    /// Override for description documents.
    pub description: Option<bool>,
    /// Override for keywords documents.
    pub keywords: Option<bool>,
    /// Override for content documents.
    pub content: Option<bool>,
}

/// Which of the five document categories the scanner emits.
///
/// The baseline indexes titles and headings only; the heavier categories
/// are opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexContentTypes {
    /// Emit title documents.
    pub title: bool,
    /// Emit heading documents.
    pub heading: bool,
    /// Emit description documents.
    pub description: bool,
    /// Emit keywords documents.
    pub keywords: bool,
    /// Emit content documents.
    pub content: bool,
}

impl Default for IndexContentTypes {
    fn default() -> Self {
        Self {
            title: true,
            heading: true,
            description: false,
            keywords: false,
            content: false,
        }
    }
}

impl IndexContentTypes {
    /// Apply user overrides on top of the baseline.
    fn merge(mut self, overrides: &RawIndexContentTypes) -> Self {
        if let Some(title) = overrides.title {
            self.title = title;
        }
        if let Some(heading) = overrides.heading {
            self.heading = heading;
        }
        if let Some(description) = overrides.description {
            self.description = description;
        }
        if let Some(keywords) = overrides.keywords {
            self.keywords = keywords;
        }
        if let Some(content) = overrides.content {
            self.content = content;
        }
        self
    }
}

/// Raw plugin options as supplied by the user.
///
/// Loose shapes are deliberate: every `OneOrMany` field also accepts a
/// plain value, and the stop-word filter accepts a bool.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawOptions {
    /// Route base path(s) for doc pages.
    pub docs_route_base_path: OneOrMany<String>,
    /// Route base path(s) for blog posts.
    pub blog_route_base_path: OneOrMany<String>,
    /// Directory/directories containing doc sources.
    pub docs_dir: OneOrMany<String>,
    /// Directory/directories containing blog sources.
    pub blog_dir: OneOrMany<String>,
    /// Content language(s).
    pub language: OneOrMany<String>,
    /// Regex pattern(s) for files excluded from indexing.
    pub ignore_files: OneOrMany<String>,
    /// CSS selectors stripped from pages before parsing.
    pub ignore_css_selectors: Vec<String>,
    /// Search bar placement.
    pub search_bar_position: SearchBarPosition,
    /// Stop-word filter removal.
    pub remove_default_stop_word_filter: StopWordFilter,
    /// Partial content-type overrides.
    pub index_content_types: Option<RawIndexContentTypes>,
    /// Upper bound on concurrent page parses. Unset uses the global pool.
    pub max_parallelism: Option<usize>,
}

impl Default for RawOptions {
    fn default() -> Self {
        Self {
            docs_route_base_path: OneOrMany::One("docs".to_owned()),
            blog_route_base_path: OneOrMany::One("blog".to_owned()),
            docs_dir: OneOrMany::One("docs".to_owned()),
            blog_dir: OneOrMany::One("blog".to_owned()),
            language: OneOrMany::One("en".to_owned()),
            ignore_files: OneOrMany::Many(Vec::new()),
            ignore_css_selectors: Vec::new(),
            search_bar_position: SearchBarPosition::Auto,
            remove_default_stop_word_filter: StopWordFilter::Toggle(false),
            index_content_types: None,
            max_parallelism: None,
        }
    }
}

/// Fully-resolved configuration consumed by the scanner.
#[derive(Debug, Clone)]
pub struct ProcessedConfig {
    /// Route base paths for doc pages, without leading slashes.
    pub docs_route_base_path: Vec<String>,
    /// Route base paths for blog posts, without leading slashes.
    pub blog_route_base_path: Vec<String>,
    /// Absolute doc source directories.
    pub docs_dir: Vec<PathBuf>,
    /// Absolute blog source directories.
    pub blog_dir: Vec<PathBuf>,
    /// Content languages.
    pub language: Vec<String>,
    /// Compiled-checked ignore patterns.
    pub ignore_files: Vec<String>,
    /// CSS selectors stripped from pages before parsing.
    pub ignore_css_selectors: Vec<String>,
    /// Resolved search bar side.
    pub search_bar_position: SearchBarSide,
    /// Languages whose default stop-word filter is removed.
    pub remove_default_stop_word_filter: Vec<String>,
    /// Which document categories the scanner emits.
    pub index_content_types: IndexContentTypes,
    /// Upper bound on concurrent page parses.
    pub max_parallelism: Option<usize>,
}

/// Resolve raw options against the site context.
///
/// # Errors
///
/// Returns [`ConfigError`] when an option is structurally invalid: an
/// empty path-like value, an empty language list, an ignore pattern that
/// does not compile, or a zero parallelism bound. Errors are fatal; no
/// partial config is produced.
pub fn process_options(
    options: RawOptions,
    context: &SiteContext,
) -> Result<ProcessedConfig, ConfigError> {
    let docs_route_base_path =
        normalize_route_base_paths(options.docs_route_base_path, "docsRouteBasePath")?;
    let blog_route_base_path =
        normalize_route_base_paths(options.blog_route_base_path, "blogRouteBasePath")?;
    let docs_dir = resolve_dirs(options.docs_dir, &context.site_dir, "docsDir")?;
    let blog_dir = resolve_dirs(options.blog_dir, &context.site_dir, "blogDir")?;

    let language = options.language.into_vec();
    if language.is_empty() {
        return Err(ConfigError::Validation("language cannot be empty".to_owned()));
    }
    for entry in &language {
        require_non_empty(entry, "language")?;
    }

    let ignore_files = options.ignore_files.into_vec();
    for pattern in &ignore_files {
        Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
    }

    let search_bar_position = match options.search_bar_position {
        SearchBarPosition::Left => SearchBarSide::Left,
        SearchBarPosition::Right => SearchBarSide::Right,
        SearchBarPosition::Auto => navbar::infer_search_bar_side(&context.navbar_items),
    };

    let remove_default_stop_word_filter = match options.remove_default_stop_word_filter {
        StopWordFilter::Toggle(true) => language.clone(),
        StopWordFilter::Toggle(false) => Vec::new(),
        StopWordFilter::Languages(languages) => languages,
    };

    let index_content_types = options
        .index_content_types
        .as_ref()
        .map_or_else(IndexContentTypes::default, |overrides| {
            IndexContentTypes::default().merge(overrides)
        });

    if options.max_parallelism == Some(0) {
        return Err(ConfigError::Validation(
            "maxParallelism must be greater than 0".to_owned(),
        ));
    }

    Ok(ProcessedConfig {
        docs_route_base_path,
        blog_route_base_path,
        docs_dir,
        blog_dir,
        language,
        ignore_files,
        ignore_css_selectors: options.ignore_css_selectors,
        search_bar_position,
        remove_default_stop_word_filter,
        index_content_types,
        max_parallelism: options.max_parallelism,
    })
}

/// Require a string value to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Normalize route base paths: strip the leading slash, reject empties.
fn normalize_route_base_paths(
    paths: OneOrMany<String>,
    field: &str,
) -> Result<Vec<String>, ConfigError> {
    let paths: Vec<String> = paths
        .into_vec()
        .into_iter()
        .map(|path| path.trim_start_matches('/').to_owned())
        .collect();
    for path in &paths {
        require_non_empty(path, field)?;
    }
    Ok(paths)
}

/// Resolve directory options to absolute paths under the site dir.
fn resolve_dirs(
    dirs: OneOrMany<String>,
    site_dir: &Path,
    field: &str,
) -> Result<Vec<PathBuf>, ConfigError> {
    let dirs = dirs.into_vec();
    for dir in &dirs {
        require_non_empty(dir, field)?;
    }
    Ok(dirs.into_iter().map(|dir| site_dir.join(dir)).collect())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn raw(options: &str) -> RawOptions {
        toml::from_str(options).unwrap()
    }

    fn context() -> SiteContext {
        SiteContext::new("/tmp")
    }

    #[test]
    fn test_defaults() {
        let config = process_options(RawOptions::default(), &context()).unwrap();

        assert_eq!(config.docs_route_base_path, vec!["docs".to_owned()]);
        assert_eq!(config.blog_route_base_path, vec!["blog".to_owned()]);
        assert_eq!(config.docs_dir, vec![PathBuf::from("/tmp/docs")]);
        assert_eq!(config.blog_dir, vec![PathBuf::from("/tmp/blog")]);
        assert_eq!(config.language, vec!["en".to_owned()]);
        assert!(config.ignore_files.is_empty());
        assert_eq!(config.search_bar_position, SearchBarSide::Right);
        assert!(config.remove_default_stop_word_filter.is_empty());
        assert_eq!(config.index_content_types, IndexContentTypes::default());
        assert_eq!(config.max_parallelism, None);
    }

    #[test]
    fn test_single_values_normalize_to_lists() {
        let options = raw(r#"
docsRouteBasePath = "docs"
blogRouteBasePath = "/blog"
docsDir = "docs"
blogDir = "blog"
language = "en"
ignoreFiles = "test"
ignoreCssSelectors = []
searchBarPosition = "auto"
"#);

        let config = process_options(options, &context()).unwrap();

        assert_eq!(config.docs_route_base_path, vec!["docs".to_owned()]);
        assert_eq!(config.blog_route_base_path, vec!["blog".to_owned()]);
        assert_eq!(config.docs_dir, vec![PathBuf::from("/tmp/docs")]);
        assert_eq!(config.blog_dir, vec![PathBuf::from("/tmp/blog")]);
        assert_eq!(config.language, vec!["en".to_owned()]);
        assert_eq!(config.ignore_files, vec!["test".to_owned()]);
        assert_eq!(config.search_bar_position, SearchBarSide::Right);
        assert!(config.remove_default_stop_word_filter.is_empty());
    }

    #[test]
    fn test_explicit_lists_pass_through() {
        let options = raw(r#"
docsRouteBasePath = ["docs"]
blogRouteBasePath = ["/blog"]
language = ["en", "zh"]
ignoreFiles = ["__meta__$"]
searchBarPosition = "left"
removeDefaultStopWordFilter = true
"#);

        let config = process_options(options, &context()).unwrap();

        assert_eq!(config.blog_route_base_path, vec!["blog".to_owned()]);
        assert_eq!(config.language, vec!["en".to_owned(), "zh".to_owned()]);
        assert_eq!(config.ignore_files, vec!["__meta__$".to_owned()]);
        assert_eq!(config.search_bar_position, SearchBarSide::Left);
        assert_eq!(
            config.remove_default_stop_word_filter,
            vec!["en".to_owned(), "zh".to_owned()]
        );
    }

    #[test]
    fn test_stop_word_filter_explicit_list() {
        let options = raw(r#"removeDefaultStopWordFilter = ["en", "zh"]"#);

        let config = process_options(options, &context()).unwrap();

        assert_eq!(config.language, vec!["en".to_owned()]);
        assert_eq!(
            config.remove_default_stop_word_filter,
            vec!["en".to_owned(), "zh".to_owned()]
        );
    }

    #[test]
    fn test_auto_position_prefers_search_item() {
        let context = SiteContext::new("/tmp").with_navbar_items(vec![
            NavbarItem::new("doc", SearchBarSide::Right),
            NavbarItem::new("search", SearchBarSide::Left),
        ]);

        let config = process_options(RawOptions::default(), &context).unwrap();

        assert_eq!(config.search_bar_position, SearchBarSide::Left);
    }

    #[test]
    fn test_auto_position_opposite_doc_item() {
        let context = SiteContext::new("/tmp")
            .with_navbar_items(vec![NavbarItem::new("doc", SearchBarSide::Left)]);

        let config = process_options(RawOptions::default(), &context).unwrap();

        assert_eq!(config.search_bar_position, SearchBarSide::Right);
    }

    #[test]
    fn test_explicit_position_ignores_navbar() {
        let context = SiteContext::new("/tmp")
            .with_navbar_items(vec![NavbarItem::new("search", SearchBarSide::Left)]);
        let options = raw(r#"searchBarPosition = "right""#);

        let config = process_options(options, &context).unwrap();

        assert_eq!(config.search_bar_position, SearchBarSide::Right);
    }

    #[test]
    fn test_index_content_types_baseline() {
        let config = process_options(RawOptions::default(), &context()).unwrap();

        assert_eq!(
            config.index_content_types,
            IndexContentTypes {
                title: true,
                heading: true,
                description: false,
                keywords: false,
                content: false,
            }
        );
    }

    #[test]
    fn test_index_content_types_merge() {
        let options = raw(r"
[indexContentTypes]
description = true
content = true
");

        let config = process_options(options, &context()).unwrap();

        assert_eq!(
            config.index_content_types,
            IndexContentTypes {
                title: true,
                heading: true,
                description: true,
                keywords: false,
                content: true,
            }
        );
    }

    #[test]
    fn test_invalid_ignore_pattern() {
        let options = raw(r#"ignoreFiles = "[""#);

        let err = process_options(options, &context()).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidPattern { .. }));
    }

    #[test]
    fn test_empty_route_base_path_rejected() {
        let options = raw(r#"docsRouteBasePath = "/""#);

        let err = process_options(options, &context()).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_empty_language_list_rejected() {
        let options = raw("language = []");

        let err = process_options(options, &context()).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_max_parallelism_zero_rejected() {
        let options = raw("maxParallelism = 0");

        let err = process_options(options, &context()).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_max_parallelism_passes_through() {
        let options = raw("maxParallelism = 4");

        let config = process_options(options, &context()).unwrap();

        assert_eq!(config.max_parallelism, Some(4));
    }
}

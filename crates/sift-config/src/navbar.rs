//! Search bar placement inference from theme navbar metadata.

use std::path::PathBuf;

use serde::Deserialize;

/// Side of the navbar the search input sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchBarSide {
    /// Left side.
    Left,
    /// Right side.
    Right,
}

impl SearchBarSide {
    /// The other side.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// One entry of the theme navbar, reduced to what placement inference needs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NavbarItem {
    /// Item kind (e.g. `doc`, `search`).
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Explicit side, when the theme sets one.
    pub position: Option<SearchBarSide>,
}

impl NavbarItem {
    /// Create a navbar item with a kind and an explicit position.
    #[must_use]
    pub fn new(kind: impl Into<String>, position: SearchBarSide) -> Self {
        Self {
            kind: Some(kind.into()),
            position: Some(position),
        }
    }
}

/// Site-level inputs to option processing.
///
/// Supplied by the caller alongside the raw options: the site root
/// directory (directory options resolve against it) and the theme navbar
/// (used to infer the search bar side when left on `auto`).
#[derive(Debug, Clone, Default)]
pub struct SiteContext {
    /// Site root directory.
    pub site_dir: PathBuf,
    /// Theme navbar items.
    pub navbar_items: Vec<NavbarItem>,
}

impl SiteContext {
    /// Create a context rooted at the given site directory.
    #[must_use]
    pub fn new(site_dir: impl Into<PathBuf>) -> Self {
        Self {
            site_dir: site_dir.into(),
            navbar_items: Vec::new(),
        }
    }

    /// Attach theme navbar items.
    #[must_use]
    pub fn with_navbar_items(mut self, items: Vec<NavbarItem>) -> Self {
        self.navbar_items = items;
        self
    }
}

/// Infer the search bar side from the navbar.
///
/// A search-type item with an explicit position wins; otherwise the side
/// opposite the first positioned doc-type item; otherwise right.
pub(crate) fn infer_search_bar_side(items: &[NavbarItem]) -> SearchBarSide {
    if let Some(position) = positioned_item(items, "search") {
        return position;
    }
    if let Some(position) = positioned_item(items, "doc") {
        return position.opposite();
    }
    SearchBarSide::Right
}

/// First explicit position among items of the given kind.
fn positioned_item(items: &[NavbarItem], kind: &str) -> Option<SearchBarSide> {
    items
        .iter()
        .filter(|item| item.kind.as_deref() == Some(kind))
        .find_map(|item| item.position)
}

//! In-page anchor normalization.
//!
//! Parser backends are inconsistent about section anchors: some emit bare
//! fragments (`#setup`), some emit full same-page relative links
//! (`/docs/intro#setup`). The latter must be reduced to a bare fragment
//! for in-page navigation, while an anchor whose path differs from the
//! page url cannot be attributed to the page at all.

/// Normalize a section's anchor target against its page url.
///
/// Returns the hash unchanged when it is empty, already a bare fragment,
/// or carries no fragment; the trimmed `#fragment` when the hash is the
/// page url followed by a fragment; `None` when the hash points at a
/// different path.
pub(crate) fn normalize_hash(hash: &str, url: &str) -> Option<String> {
    if !hash.is_empty() && !hash.starts_with('#') && hash.contains('#') {
        if hash.starts_with(url) && hash.as_bytes().get(url.len()) == Some(&b'#') {
            return Some(hash[url.len()..].to_owned());
        }
        return None;
    }

    Some(hash.to_owned())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_bare_fragment_unchanged() {
        assert_eq!(
            normalize_hash("#setup", "/docs/intro"),
            Some("#setup".to_owned())
        );
    }

    #[test]
    fn test_empty_hash_unchanged() {
        assert_eq!(normalize_hash("", "/docs/intro"), Some(String::new()));
    }

    #[test]
    fn test_raw_anchor_name_unchanged() {
        // No fragment marker at all: a raw anchor target.
        assert_eq!(
            normalize_hash("setup", "/docs/intro"),
            Some("setup".to_owned())
        );
    }

    #[test]
    fn test_same_page_link_trimmed() {
        assert_eq!(
            normalize_hash("/docs/intro#setup", "/docs/intro"),
            Some("#setup".to_owned())
        );
    }

    #[test]
    fn test_other_page_link_is_external() {
        assert_eq!(normalize_hash("/other/page#setup", "/docs/intro"), None);
    }

    #[test]
    fn test_url_prefix_without_separator_is_external() {
        // "/docs/introduction#x" starts with "/docs/intro" but the next
        // byte is not "#": a different page entirely.
        assert_eq!(normalize_hash("/docs/introduction#x", "/docs/intro"), None);
    }

    #[test]
    fn test_empty_url_treats_pathed_hash_as_external() {
        assert_eq!(normalize_hash("/docs/intro#setup", ""), None);
    }
}

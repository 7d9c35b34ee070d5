//! Hyperlink classification and rewriting for sidebar link targets.
//!
//! The generator emits link targets relative to the book root; the page
//! displaying the sidebar may live anywhere inside the book, so relative
//! targets need the root-path prefix prepended. Fragment-only and absolute
//! targets already resolve correctly and must not be touched.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches absolute and protocol-relative URLs (`https://…`, `//cdn.…`).
static EXTERNAL_LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:[a-z+]+:)?//").expect("external link pattern is valid"));

/// Whether a link target points at a fragment of the current page.
pub fn is_fragment(href: &str) -> bool {
    href.starts_with('#')
}

/// Whether a link target is absolute or protocol-relative.
pub fn is_external(href: &str) -> bool {
    EXTERNAL_LINK_RE.is_match(href)
}

/// Rewrites a generator-emitted link target so it resolves from the
/// currently displayed page.
///
/// Fragment-only, absolute, and empty targets are returned unchanged;
/// everything else gets the root-path prefix prepended.
pub fn rewrite_href(path_to_root: &str, href: &str) -> String {
    if href.is_empty() || is_fragment(href) || is_external(href) {
        href.to_string()
    } else {
        format!("{path_to_root}{href}")
    }
}

#[cfg(test)]
mod tests {
    use super::{is_external, is_fragment, rewrite_href};

    #[test]
    fn relative_targets_get_the_root_prefix() {
        assert_eq!(rewrite_href("../", "foo/bar.html"), "../foo/bar.html");
        assert_eq!(rewrite_href("", "foo/bar.html"), "foo/bar.html");
    }

    #[test]
    fn fragment_targets_are_left_alone() {
        assert!(is_fragment("#section-2"));
        assert_eq!(rewrite_href("../", "#section-2"), "#section-2");
    }

    #[test]
    fn absolute_targets_are_left_alone() {
        assert!(is_external("https://example.com/x"));
        assert!(is_external("//cdn.example.com/x.js"));
        assert!(!is_external("foo/bar.html"));
        assert_eq!(rewrite_href("../../", "https://example.com/x"), "https://example.com/x");
    }

    #[test]
    fn empty_targets_are_left_alone() {
        assert_eq!(rewrite_href("../", ""), "");
    }
}

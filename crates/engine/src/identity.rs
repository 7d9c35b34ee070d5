//! Current-page identity resolution.

use url::Url;

use crate::error::NavError;

/// Normalized absolute identity of the currently displayed page.
///
/// Derived once per attachment from the configured location URL. A path
/// denoting a directory (trailing slash) is normalized by appending the
/// default index document, mirroring what the web server would serve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageIdentity {
    url: Url,
}

impl PageIdentity {
    /// Parses the location, defaulting a trailing-slash path to the index
    /// document.
    pub fn resolve(location: &str, default_index: &str) -> Result<Self, NavError> {
        let mut url = Url::parse(location)?;
        if url.path().ends_with('/') {
            url = url.join(default_index)?;
        }
        Ok(Self { url })
    }

    pub fn as_url(&self) -> &Url {
        &self.url
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    /// Whether this page is an index document, the precondition for the
    /// first-link fallback.
    pub fn is_index(&self, default_index: &str) -> bool {
        let path = self.url.path();
        path.strip_suffix(default_index)
            .is_some_and(|prefix| prefix.ends_with('/'))
    }

    /// Resolves a rewritten link target the way the displayed document
    /// resolves an anchor's `href`.
    pub fn resolve_target(&self, target: &str) -> Option<Url> {
        self.url.join(target).ok()
    }

    /// Whether a rewritten link target resolves to exactly this page.
    pub fn matches(&self, target: &str) -> bool {
        self.resolve_target(target).is_some_and(|resolved| resolved == self.url)
    }
}

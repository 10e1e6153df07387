//! Base path handling for sites served under a sub-path.

use crate::config::section::{LinkKind, classify_link};

/// The URL path a site is served under, e.g. `/blog/`.
///
/// Invariant: starts and ends with `/` (checked when the site config loads).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasePath<'a>(&'a str);

impl<'a> BasePath<'a> {
    pub const fn new(base: &'a str) -> Self {
        Self(base)
    }

    pub const fn as_str(&self) -> &'a str {
        self.0
    }

    /// True when the site is served from `/`.
    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Prefix a site-absolute link with the base path.
    ///
    /// Relative, fragment and external links are returned unchanged.
    ///
    /// # Examples
    /// ```ignore
    /// let base = BasePath::new("/blog/");
    /// base.url_for("/archive/")           -> "/blog/archive/"
    /// base.url_for("/")                   -> "/blog/"
    /// base.url_for("https://t.me/korilin") -> "https://t.me/korilin"
    /// ```
    pub fn url_for(&self, link: &str) -> String {
        match classify_link(link) {
            LinkKind::Internal if !self.is_root() => {
                format!("{}{}", self.0, link.trim_start_matches('/'))
            }
            _ => link.to_string(),
        }
    }
}

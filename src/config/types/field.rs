//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// A config field path used to locate diagnostics.
///
/// Static paths come from `#[derive(Config)]`; list elements and nested
/// keys are derived at runtime with [`FieldPath::at`] and [`FieldPath::key`].
///
/// # Example
///
/// ```ignore
/// #[derive(Config)]
/// #[config(section = "")]
/// pub struct SiteConfig {
///     pub title: String,
/// }
///
/// diag.error(SiteConfig::FIELDS.title, "required");
/// diag.error(FieldPath::new("head").at(2).key("tag"), "empty tag name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(pub Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path of the `index`-th element of a list field: `nav[2]`.
    pub fn at(&self, index: usize) -> Self {
        Self(Cow::Owned(format!("{}[{index}]", self.0)))
    }

    /// Path of a nested key: `theme_config.logo`.
    pub fn key(&self, key: &str) -> Self {
        if self.0.is_empty() {
            return Self(Cow::Owned(key.to_string()));
        }
        Self(Cow::Owned(format!("{}.{key}", self.0)))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

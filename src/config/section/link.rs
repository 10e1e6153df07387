//! Navigation and social platform entries.
//!
//! # Example
//!
//! ```toml
//! nav = [
//!     { text = "Home", link = "/" },
//!     { text = "Archive", link = "/archive/" },
//! ]
//!
//! [[social]]
//! name = "github"
//! href = "https://github.com/korilin"
//! icon = "/icon/github.png"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

// ============================================================================
// Entries
// ============================================================================

/// A navigation bar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Label shown in the navigation bar.
    pub text: String,
    /// Target: site path, relative path, fragment or absolute URL.
    pub link: String,
}

impl NavItem {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }

    /// Validate label and link, reporting under `field`.
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.text.trim().is_empty() {
            diag.error(field.key("text"), "navigation label must not be empty");
        }
        if let Err(message) = check_link(&self.link) {
            diag.error(field.key("link"), message);
        }
    }
}

/// A social platform icon link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Platform name (e.g. "github").
    pub name: String,
    /// Profile URL.
    pub href: String,
    /// Icon image path.
    pub icon: String,
}

impl SocialLink {
    /// Validate name, href and icon, reporting under `field`.
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error(field.key("name"), "platform name must not be empty");
        }
        if let Err(message) = check_link(&self.href) {
            diag.error(field.key("href"), message);
        }
        if let Err(message) = check_link(&self.icon) {
            diag.error_with_hint(
                field.key("icon"),
                message,
                "use a site path like \"/icon/github.png\"",
            );
        }
    }
}

/// Validate a list of nav entries under `field[i]`.
pub fn validate_nav(items: &[NavItem], field: &FieldPath, diag: &mut ConfigDiagnostics) {
    for (i, item) in items.iter().enumerate() {
        item.validate(&field.at(i), diag);
    }
}

/// Validate a list of social entries under `field[i]`.
pub fn validate_social(items: &[SocialLink], field: &FieldPath, diag: &mut ConfigDiagnostics) {
    for (i, item) in items.iter().enumerate() {
        item.validate(&field.at(i), diag);
    }
}

// ============================================================================
// Link syntax
// ============================================================================

/// Syntactic category of a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Site-absolute path: `/archive/`
    Internal,
    /// Relative path: `./post`, `../`, `notes/`
    Relative,
    /// In-page anchor: `#top`
    Fragment,
    /// Has a URL scheme (`https:`, `mailto:`) or is protocol-relative (`//cdn`).
    External,
}

/// Classify a link without validating it.
pub fn classify_link(link: &str) -> LinkKind {
    if link.starts_with("//") || has_scheme(link) {
        LinkKind::External
    } else if link.starts_with('/') {
        LinkKind::Internal
    } else if link.starts_with('#') {
        LinkKind::Fragment
    } else {
        LinkKind::Relative
    }
}

/// Check if a link starts with a URL scheme.
///
/// A valid scheme has at least one character before the colon, starts with
/// a letter and only contains ASCII alphanumerics or `+`, `-`, `.`
fn has_scheme(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        let scheme = &link[..pos];
        scheme.starts_with(|c: char| c.is_ascii_alphabetic())
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Check that a link or path is syntactically valid.
///
/// Returns a human-readable reason on failure.
pub fn check_link(link: &str) -> Result<(), String> {
    if link.is_empty() {
        return Err("link must not be empty".into());
    }
    if link.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(format!("link '{link}' must not contain whitespace"));
    }

    if classify_link(link) != LinkKind::External {
        return Ok(());
    }

    // Protocol-relative links borrow the page scheme
    let absolute = match link.strip_prefix("//") {
        Some(rest) => format!("https://{rest}"),
        None => link.to_string(),
    };

    match url::Url::parse(&absolute) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_none() => {
            Err(format!("URL '{link}' must have a valid host"))
        }
        Ok(_) => Ok(()),
        Err(e) => Err(format!("invalid URL '{link}': {e}")),
    }
}

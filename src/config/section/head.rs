//! `head` entries: extra tags injected into every page's `<head>`.
//!
//! Two spellings are accepted:
//!
//! ```toml
//! head = [
//!     ["link", { rel = "icon", href = "/korilin.png" }],
//!     { tag = "script", attrs = { src = "/statistics.js" } },
//! ]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::html::{escape, is_void_element};

/// A single `<head>` tag descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HeadEntryRepr")]
pub struct HeadEntry {
    /// Tag name (e.g. "link", "script").
    pub tag: String,
    /// Attribute mapping, rendered in key order.
    pub attrs: BTreeMap<String, String>,
}

#[derive(Deserialize)]
#[serde(
    untagged,
    expecting = "a head entry like [\"tag\", { attr = \"value\" }] or { tag = \"tag\", attrs = { ... } }; attribute values must be strings"
)]
enum HeadEntryRepr {
    /// `["tag", { attr = "value" }]`
    Pair(String, BTreeMap<String, String>),
    /// `{ tag = "tag", attrs = { ... } }`
    Table {
        tag: String,
        #[serde(default)]
        attrs: BTreeMap<String, String>,
    },
}

impl From<HeadEntryRepr> for HeadEntry {
    fn from(repr: HeadEntryRepr) -> Self {
        match repr {
            HeadEntryRepr::Pair(tag, attrs) | HeadEntryRepr::Table { tag, attrs } => {
                Self { tag, attrs }
            }
        }
    }
}

impl HeadEntry {
    pub fn new<K, V>(tag: impl Into<String>, attrs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            tag: tag.into(),
            attrs: attrs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Validate tag and attribute names, reporting under `field`.
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.tag.is_empty() {
            diag.error(field.key("tag"), "tag name must not be empty");
        } else if !is_valid_name(&self.tag) {
            diag.error_with_hint(
                field.key("tag"),
                format!("'{}' is not a valid tag name", self.tag),
                "use ASCII letters, digits and `-`, e.g. \"link\"",
            );
        }

        for name in self.attrs.keys().filter(|name| !is_valid_name(name)) {
            diag.error(
                field.key("attrs"),
                format!("'{name}' is not a valid attribute name"),
            );
        }
    }

    /// Render as an HTML tag. Void elements get no closing tag.
    pub fn to_html(&self) -> String {
        let tag = self.tag.to_ascii_lowercase();
        let mut html = format!("<{tag}");
        for (name, value) in &self.attrs {
            html.push(' ');
            html.push_str(name);
            html.push_str("=\"");
            html.push_str(&escape(value));
            html.push('"');
        }
        html.push('>');
        if !is_void_element(&tag) {
            html.push_str("</");
            html.push_str(&tag);
            html.push('>');
        }
        html
    }
}

/// Tag and attribute names: ASCII alphanumerics plus `-`, `_`, `:`, starting with a letter.
fn is_valid_name(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_alphabetic())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':'))
}

/// Validate all entries under `field[i]`.
pub fn validate_head(entries: &[HeadEntry], field: &FieldPath, diag: &mut ConfigDiagnostics) {
    for (i, entry) in entries.iter().enumerate() {
        entry.validate(&field.at(i), diag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Doc {
        head: Vec<HeadEntry>,
    }

    fn parse(content: &str) -> Vec<HeadEntry> {
        toml::from_str::<Doc>(content).unwrap().head
    }

    #[test]
    fn test_pair_form() {
        let head = parse(
            r#"head = [["link", { rel = "icon", href = "/korilin.png" }], ["script", { src = "/statistics.js" }]]"#,
        );
        assert_eq!(head.len(), 2);
        assert_eq!(head[0].tag, "link");
        assert_eq!(head[0].attrs["href"], "/korilin.png");
        assert_eq!(head[1], HeadEntry::new("script", [("src", "/statistics.js")]));
    }

    #[test]
    fn test_table_form_and_bare_tag() {
        let head = parse(
            r##"head = [{ tag = "meta", attrs = { name = "theme-color", content = "#fff" } }, { tag = "noscript" }]"##,
        );
        assert_eq!(head[0].attrs["content"], "#fff");
        assert_eq!(head[1].tag, "noscript");
        assert!(head[1].attrs.is_empty());
    }

    #[test]
    fn test_non_string_attr_is_explained() {
        let err = toml::from_str::<Doc>(r#"head = [["script", { async = true }]]"#)
            .err()
            .map(|e| e.to_string())
            .unwrap_or_default();
        assert!(err.contains("attribute values must be strings"), "{err}");
        assert!(!err.contains("HeadEntryRepr"), "{err}");
    }

    #[test]
    fn test_to_html() {
        let icon = HeadEntry::new("link", [("rel", "icon"), ("href", "/korilin.png")]);
        assert_eq!(icon.to_html(), r#"<link href="/korilin.png" rel="icon">"#);

        let script = HeadEntry::new("script", [("src", "/statistics.js")]);
        assert_eq!(script.to_html(), r#"<script src="/statistics.js"></script>"#);
    }

    #[test]
    fn test_to_html_escapes_values() {
        let meta = HeadEntry::new("meta", [("content", r#"a "quoted" <value>"#)]);
        assert_eq!(
            meta.to_html(),
            r#"<meta content="a &quot;quoted&quot; &lt;value&gt;">"#
        );
    }

    #[test]
    fn test_validate() {
        let entries = vec![
            HeadEntry::new("link", [("rel", "icon")]),
            HeadEntry::new("", Vec::<(String, String)>::new()),
            HeadEntry::new("my tag", [("on click", "x")]),
        ];
        let mut diag = ConfigDiagnostics::new();
        validate_head(&entries, &FieldPath::new("head"), &mut diag);

        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["head[1].tag", "head[2].tag", "head[2].attrs"]);
    }
}

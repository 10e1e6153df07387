//! Schema-less theme settings.
//!
//! Sites override theme defaults through `[theme_config]`. Only `nav` and
//! `social` have a fixed shape; every other key is kept as raw TOML and
//! checked lazily against the resolved theme's `[schema]`.
//!
//! ```toml
//! [theme_config]
//! logo = "/korilin.png"
//! display_all_headers = true
//! nav = [{ text = "主页", link = "/" }]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::link::{NavItem, SocialLink, validate_nav, validate_social};
use crate::config::{ConfigDiagnostics, FieldPath};

/// Site-level theme settings (`[theme_config]`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeSettings {
    /// Replaces the theme's navigation when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nav: Option<Vec<NavItem>>,

    /// Replaces the theme's social links when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<Vec<SocialLink>>,

    /// Everything else, deep-merged over the theme's `settings`.
    #[serde(flatten)]
    pub extra: toml::Table,
}

impl ThemeSettings {
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        if let Some(nav) = &self.nav {
            validate_nav(nav, &field.key("nav"), diag);
        }
        if let Some(social) = &self.social {
            validate_social(social, &field.key("social"), diag);
        }
        check_finite(&self.extra, field, diag);
    }

    /// Check `extra` against a theme schema.
    ///
    /// Type mismatches are errors; keys the schema does not know are warnings.
    /// An empty schema accepts everything.
    pub fn check_schema(
        &self,
        schema: &BTreeMap<String, SettingKind>,
        field: &FieldPath,
        diag: &mut ConfigDiagnostics,
    ) {
        if schema.is_empty() {
            return;
        }

        for (key, value) in &self.extra {
            match schema.get(key) {
                Some(kind) if !kind.accepts(value) => diag.error_with_hint(
                    field.key(key),
                    format!("expected {}, found {}", kind.label(), value.type_str()),
                    format!("the theme declares `{key}` as {}", kind.label()),
                ),
                Some(_) => {}
                None => diag.warn(field.key(key), "not declared by the theme schema"),
            }
        }
    }
}

// ============================================================================
// Schema
// ============================================================================

/// Expected type of a theme setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingKind {
    String,
    Bool,
    Integer,
    /// Accepts integers too.
    Float,
    Array,
    Table,
    Any,
}

impl SettingKind {
    pub fn accepts(&self, value: &toml::Value) -> bool {
        use toml::Value;
        match self {
            Self::String => matches!(value, Value::String(_)),
            Self::Bool => matches!(value, Value::Boolean(_)),
            Self::Integer => matches!(value, Value::Integer(_)),
            Self::Float => matches!(value, Value::Float(_) | Value::Integer(_)),
            Self::Array => matches!(value, Value::Array(_)),
            Self::Table => matches!(value, Value::Table(_)),
            Self::Any => true,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Bool => "bool",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Array => "array",
            Self::Table => "table",
            Self::Any => "any",
        }
    }
}

/// Reject `nan` and `inf` anywhere in `table`.
///
/// A resolved config must compare equal to itself after a round trip.
pub fn check_finite(table: &toml::Table, field: &FieldPath, diag: &mut ConfigDiagnostics) {
    for (key, value) in table {
        check_finite_value(value, &field.key(key), diag);
    }
}

fn check_finite_value(value: &toml::Value, field: &FieldPath, diag: &mut ConfigDiagnostics) {
    match value {
        toml::Value::Float(f) if !f.is_finite() => diag.error_with_hint(
            field.clone(),
            format!("`{f}` is not a finite number"),
            "use a finite float or a string",
        ),
        toml::Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                check_finite_value(item, &field.at(i), diag);
            }
        }
        toml::Value::Table(table) => check_finite(table, field, diag),
        _ => {}
    }
}

// ============================================================================
// Merge
// ============================================================================

/// Deep-merge `over` into `base`.
///
/// Tables merge key by key, recursively. Any other value in `over`
/// (scalars and arrays included) replaces the one in `base`.
pub fn deep_merge(base: &mut toml::Table, over: &toml::Table) {
    for (key, value) in over {
        if let toml::Value::Table(over_table) = value
            && let Some(toml::Value::Table(base_table)) = base.get_mut(key)
        {
            deep_merge(base_table, over_table);
            continue;
        }
        base.insert(key.clone(), value.clone());
    }
}

/// Return `base` with `over` deep-merged on top.
pub fn merged(base: &toml::Table, over: &toml::Table) -> toml::Table {
    let mut out = base.clone();
    deep_merge(&mut out, over);
    out
}

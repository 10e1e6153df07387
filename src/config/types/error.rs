//! Configuration error types.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors.
///
/// Every variant is fatal: resolution stops and no partial config is produced.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("{0}")]
    MalformedConfig(Malformed),

    #[error("unknown theme `{name}`{}", required_by_suffix(.required_by))]
    UnknownTheme {
        name: String,
        /// Theme whose `extends` pointed at `name` (None for the site's own theme).
        required_by: Option<String>,
    },

    #[error("cyclic theme inheritance: {}", .chain.join(" -> "))]
    CyclicExtends {
        /// Visited names in order, ending with the revisited one.
        chain: Vec<String>,
    },

    #[error("failed to serialize resolved config")]
    Serialize(#[source] Box<dyn std::error::Error + Send + Sync>),
}

fn required_by_suffix(required_by: &Option<String>) -> String {
    match required_by {
        Some(child) => format!(" (extended by `{child}`)"),
        None => String::new(),
    }
}

impl ConfigError {
    /// True for structural or type violations in raw input.
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedConfig(_))
    }

    /// Collected diagnostics, if this is a validation failure.
    pub fn diagnostics(&self) -> Option<&ConfigDiagnostics> {
        match self {
            Self::MalformedConfig(Malformed::Invalid(diag)) => Some(diag),
            _ => None,
        }
    }
}

/// Why a config document was rejected.
#[derive(Debug)]
pub enum Malformed {
    /// TOML syntax error or a value of the wrong type.
    Syntax(toml::de::Error),
    /// Parsed fine, but violates one or more invariants.
    // NOTE: no source() here - the diagnostics print themselves in full
    Invalid(ConfigDiagnostics),
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(err) => write!(f, "config file parsing error: {err}"),
            Self::Invalid(diag) => write!(f, "{diag}"),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::MalformedConfig(Malformed::Syntax(err))
    }
}

impl From<ConfigDiagnostics> for ConfigError {
    fn from(diag: ConfigDiagnostics) -> Self {
        Self::MalformedConfig(Malformed::Invalid(diag))
    }
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A single configuration diagnostic
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    /// Config field path (e.g., "theme_config.nav[0].link")
    pub field: FieldPath,
    /// Error description
    pub message: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}{}{}",
            "[".dimmed(),
            self.field.as_str().cyan(),
            "]".dimmed()
        )?;
        write!(f, "{} {}", "→".red(), self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    /// Document the diagnostics belong to (e.g. `themes/local/theme.toml`).
    source: Option<String>,
    errors: Vec<ConfigDiagnostic>,
    /// Collected warnings (unknown keys, keys outside a theme schema).
    warnings: Vec<(FieldPath, String)>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create diagnostics labelled with the document they describe.
    pub fn for_source(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            ..Self::default()
        }
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(field, message));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigDiagnostic::new(field, message).with_hint(hint));
    }

    /// Add a warning (collected for batch display).
    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.warnings.push((field, message.into()));
    }

    /// Print collected warnings in a grouped format.
    pub fn print_warnings(&self) {
        if self.warnings.is_empty() {
            return;
        }

        match &self.source {
            Some(source) => crate::log!("warning"; "in {}:", source),
            None => crate::log!("warning"; "config warnings:"),
        }
        for (field, message) in &self.warnings {
            eprintln!("- {}: {}", field.as_str(), message);
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[(FieldPath, String)] {
        &self.warnings
    }

    /// Convert to Result (returns Err if there are errors).
    ///
    /// Warnings are printed either way.
    pub fn into_result(self) -> Result<(), Self> {
        self.print_warnings();
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => writeln!(
                f,
                "{} {}\n",
                "config validation failed in".red().bold(),
                source.red().bold()
            )?,
            None => writeln!(f, "{}\n", "config validation failed:".red().bold())?,
        }
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

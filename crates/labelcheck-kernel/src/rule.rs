//! The naming rule labels are checked against.

use regex::Regex;

use crate::error::{Error, Result};
use crate::labels::Label;

/// Default label pattern.
///
/// Optional surrounding quote, no leading dot, one or more dot-separated
/// lowercase segments, optional `=value`.
pub const DEFAULT_PATTERN: &str = r#"^["']?[a-z]+(?:\.[a-z]+)*(?:=.*)?["']?$"#;

/// Immutable validation rule, built once from configuration.
///
/// A label is exempt when its key starts with one of `ignore_prefixes`.
/// Otherwise its full text must match the pattern from the first character,
/// and with `key_is_uppercase` set its key must not contain lowercase letters.
#[derive(Debug, Clone)]
pub struct ValidationRule {
    source: String,
    regex: Regex,
    key_is_uppercase: bool,
    ignore_prefixes: Vec<String>,
}

impl ValidationRule {
    /// Compile a rule from a regex pattern.
    ///
    /// Matching is anchored at the start of the label whether or not the
    /// pattern begins with `^`.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let source = pattern.into();
        let regex = Regex::new(&format!("^(?:{source})")).map_err(|e| Error::InvalidPattern {
            pattern: source.clone(),
            source: e,
        })?;
        Ok(Self {
            source,
            regex,
            key_is_uppercase: false,
            ignore_prefixes: Vec::new(),
        })
    }

    /// Rule using [`DEFAULT_PATTERN`].
    pub fn with_default_pattern() -> Result<Self> {
        Self::new(DEFAULT_PATTERN)
    }

    /// Require keys to be uppercase.
    pub fn uppercase_keys(mut self, enabled: bool) -> Self {
        self.key_is_uppercase = enabled;
        self
    }

    /// Exempt labels whose key starts with any of these prefixes.
    pub fn ignore_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// The pattern as given by the user.
    pub fn pattern(&self) -> &str {
        &self.source
    }

    pub fn key_is_uppercase(&self) -> bool {
        self.key_is_uppercase
    }

    pub fn prefixes(&self) -> &[String] {
        &self.ignore_prefixes
    }

    /// Whether the label's key starts with an ignore prefix.
    pub fn is_ignored(&self, label: &Label) -> bool {
        self.ignore_prefixes
            .iter()
            .any(|prefix| label.key().starts_with(prefix.as_str()))
    }

    /// Classify a single label.
    pub fn is_valid(&self, label: &Label) -> bool {
        if self.is_ignored(label) {
            return true;
        }
        if !self.regex.is_match(label.text()) {
            return false;
        }
        !self.key_is_uppercase || !label.key().chars().any(char::is_lowercase)
    }
}

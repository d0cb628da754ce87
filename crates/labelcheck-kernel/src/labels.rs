//! Label collections and their normalization.
//!
//! Compose allows `labels` as either a list of `key=value` strings or a
//! mapping of key to value. Both shapes normalize to a sequence of [`Label`]s
//! so the validator only ever sees one form.

/// A single normalized label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    text: String,
    key: String,
}

impl Label {
    /// Build a label from a list entry (`key`, `key=value`, optionally quoted).
    pub fn from_entry(entry: impl Into<String>) -> Self {
        let text = entry.into();
        let key = extract_key(&text).to_string();
        Self { text, key }
    }

    /// Build a label from a mapping entry.
    ///
    /// The text is rendered as `key=value` (or `key` for a null value) so a
    /// mapping entry classifies exactly like the equivalent list entry. The
    /// key loses one layer of quotes, as in [`extract_key`].
    pub fn from_pair(key: impl Into<String>, value: Option<&str>) -> Self {
        let raw = key.into();
        let text = match value {
            Some(value) => format!("{raw}={value}"),
            None => raw.clone(),
        };
        let key = strip_quotes(&raw).to_string();
        Self { text, key }
    }

    /// The string matched against the pattern and shown in reports.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The key with surrounding quotes removed.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// The two shapes a service's `labels` may take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelSet {
    /// `labels: ["key=value", "key"]`
    List(Vec<String>),
    /// `labels: { key: value }`, in document order.
    Map(Vec<(String, Option<String>)>),
}

impl Default for LabelSet {
    fn default() -> Self {
        LabelSet::List(Vec::new())
    }
}

impl LabelSet {
    /// Normalize into labels, preserving order.
    pub fn labels(&self) -> Vec<Label> {
        match self {
            LabelSet::List(entries) => entries.iter().map(Label::from_entry).collect(),
            LabelSet::Map(pairs) => pairs
                .iter()
                .map(|(key, value)| Label::from_pair(key.clone(), value.as_deref()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            LabelSet::List(entries) => entries.len(),
            LabelSet::Map(pairs) => pairs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A service name and its labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceLabels {
    pub name: String,
    pub labels: LabelSet,
}

impl ServiceLabels {
    pub fn new(name: impl Into<String>, labels: LabelSet) -> Self {
        Self {
            name: name.into(),
            labels,
        }
    }
}

/// Extract the key from a list entry.
///
/// One layer of matching quotes is stripped from the whole entry, then the
/// part before the first `=` is taken and stripped the same way.
pub fn extract_key(entry: &str) -> &str {
    let inner = strip_quotes(entry);
    let key = inner.split_once('=').map_or(inner, |(key, _)| key);
    strip_quotes(key)
}

/// Remove one leading `"` or `'` and, if present, the matching trailing one.
fn strip_quotes(s: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = s.strip_prefix(quote) {
            return inner.strip_suffix(quote).unwrap_or(inner);
        }
    }
    s
}

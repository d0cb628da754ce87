//! Compose file loading.
//!
//! Only the `services.<name>.labels` part of a compose file is extracted;
//! everything else is ignored. YAML tags such as `!reset` or `!override` are
//! looked through.

use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};
use crate::labels::{LabelSet, ServiceLabels};

/// The label-relevant content of one compose file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeDocument {
    /// Services in document order.
    pub services: Vec<ServiceLabels>,
}

impl ComposeDocument {
    /// Read and parse a compose file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &text)
    }

    /// Parse compose YAML. `path` is only used for error messages.
    pub fn parse(path: &Path, text: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(text).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_value(&value).map_err(|message| Error::Shape {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Extract services and labels from an already parsed document.
    pub fn from_value(value: &Value) -> std::result::Result<Self, String> {
        let root = match untag(value) {
            Value::Null => return Ok(Self::default()),
            Value::Mapping(root) => root,
            _ => return Err("top level is not a mapping".to_string()),
        };

        let services = match root.get("services").map(untag) {
            None | Some(Value::Null) => return Ok(Self::default()),
            Some(Value::Mapping(services)) => services,
            Some(_) => return Err("'services' is not a mapping".to_string()),
        };

        let mut out = Vec::with_capacity(services.len());
        for (name, body) in services {
            let name = scalar(name).ok_or_else(|| "service name is not a scalar".to_string())?;
            let labels = match untag(body) {
                Value::Null => LabelSet::default(),
                Value::Mapping(body) => service_labels(&name, body)?,
                _ => return Err(format!("service '{name}' is not a mapping")),
            };
            out.push(ServiceLabels::new(name, labels));
        }
        Ok(Self { services: out })
    }

    /// Total number of labels across all services.
    pub fn label_count(&self) -> usize {
        self.services.iter().map(|s| s.labels.len()).sum()
    }
}

fn service_labels(service: &str, body: &Mapping) -> std::result::Result<LabelSet, String> {
    match body.get("labels").map(untag) {
        None | Some(Value::Null) => Ok(LabelSet::default()),
        Some(Value::Sequence(entries)) => entries
            .iter()
            .map(|entry| {
                scalar(entry)
                    .ok_or_else(|| format!("service '{service}': label entry is not a scalar"))
            })
            .collect::<std::result::Result<Vec<_>, _>>()
            .map(LabelSet::List),
        Some(Value::Mapping(pairs)) => pairs
            .iter()
            .map(|(key, value)| {
                let key = scalar(key)
                    .ok_or_else(|| format!("service '{service}': label key is not a scalar"))?;
                let value = match untag(value) {
                    Value::Null => None,
                    other => Some(scalar(other).ok_or_else(|| {
                        format!("service '{service}': value of label '{key}' is not a scalar")
                    })?),
                };
                Ok((key, value))
            })
            .collect::<std::result::Result<Vec<_>, String>>()
            .map(LabelSet::Map),
        Some(_) => Err(format!(
            "service '{service}': labels must be a list or a mapping"
        )),
    }
}

fn untag(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untag(&tagged.value),
        other => other,
    }
}

/// Render a scalar as text; `None` for null and collections.
fn scalar(value: &Value) -> Option<String> {
    match untag(value) {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

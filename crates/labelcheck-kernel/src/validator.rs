//! Per-file label validation.

use crate::compose::ComposeDocument;
use crate::labels::ServiceLabels;
use crate::rule::ValidationRule;

/// Services with at least one invalid label, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvalidLabelReport {
    services: Vec<(String, Vec<String>)>,
}

impl InvalidLabelReport {
    /// True when no service had an invalid label.
    pub fn is_clean(&self) -> bool {
        self.services.is_empty()
    }

    /// Number of services with invalid labels.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Invalid labels of one service, if it had any.
    pub fn get(&self, service: &str) -> Option<&[String]> {
        self.services
            .iter()
            .find(|(name, _)| name == service)
            .map(|(_, labels)| labels.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.services
            .iter()
            .map(|(name, labels)| (name.as_str(), labels.as_slice()))
    }

    /// Total number of invalid labels across services.
    pub fn invalid_label_count(&self) -> usize {
        self.services.iter().map(|(_, labels)| labels.len()).sum()
    }
}

/// Labels of `service` that fail `rule`, as written in the file.
pub fn invalid_labels(service: &ServiceLabels, rule: &ValidationRule) -> Vec<String> {
    service
        .labels
        .labels()
        .into_iter()
        .filter(|label| !rule.is_valid(label))
        .map(|label| {
            tracing::debug!(service = %service.name, label = label.text(), "invalid label");
            label.text().to_string()
        })
        .collect()
}

/// Check every service of a document.
pub fn validate(document: &ComposeDocument, rule: &ValidationRule) -> InvalidLabelReport {
    let services = document
        .services
        .iter()
        .filter_map(|service| {
            let invalid = invalid_labels(service, rule);
            (!invalid.is_empty()).then(|| (service.name.clone(), invalid))
        })
        .collect();
    InvalidLabelReport { services }
}

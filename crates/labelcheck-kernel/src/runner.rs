//! Run orchestration: discover, load, validate, aggregate.
//!
//! Nothing here exits the process. [`run`] returns a [`RunSummary`] and the
//! binary decides what exit status that means.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::compose::ComposeDocument;
use crate::discover::{DEFAULT_PATTERNS, discover};
use crate::error::Result;
use crate::report;
use crate::rule::ValidationRule;
use crate::validator::{InvalidLabelReport, validate};

/// Everything a run needs, fixed before it starts.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Glob patterns locating compose files.
    pub patterns: Vec<String>,
    pub rule: ValidationRule,
    /// Write listings to the output sink.
    pub verbose: bool,
}

impl CheckConfig {
    /// Config with the default patterns, verbose on.
    pub fn new(rule: ValidationRule) -> Self {
        Self {
            patterns: DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect(),
            rule,
            verbose: true,
        }
    }

    pub fn with_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Aggregate outcome of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files checked, in the order they were checked.
    pub checked: Vec<PathBuf>,
    /// Files that had at least one invalid label.
    pub failed: Vec<PathBuf>,
}

impl RunSummary {
    /// True when every checked file was clean.
    pub fn passed(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Load and validate one file, writing its listing when `verbose`.
pub fn check_file<W: Write + ?Sized>(
    path: &Path,
    rule: &ValidationRule,
    verbose: bool,
    out: &mut W,
) -> Result<InvalidLabelReport> {
    let document = ComposeDocument::load(path)?;
    let report = validate(&document, rule);

    tracing::info!(
        file = %path.display(),
        services = document.services.len(),
        labels = document.label_count(),
        invalid = report.invalid_label_count(),
        "checked compose file"
    );

    if verbose {
        report::write_invalid(out, path, &report)?;
    }
    Ok(report)
}

/// Check every file the config's patterns discover.
///
/// Fails fast on discovery, read, or parse errors. Invalid labels do not stop
/// the run; they are collected into the summary.
pub fn run<W: Write + ?Sized>(config: &CheckConfig, out: &mut W) -> Result<RunSummary> {
    let files = discover(config.patterns.as_slice())?;
    tracing::debug!(count = files.len(), "discovered compose files");

    if config.verbose {
        report::write_discovered(out, &files)?;
    }

    let mut summary = RunSummary::default();
    for path in files.iter() {
        let report = check_file(path, &config.rule, config.verbose, out)?;
        if !report.is_clean() {
            summary.failed.push(path.to_path_buf());
        }
        summary.checked.push(path.to_path_buf());
    }
    Ok(summary)
}

//! labelcheck-kernel: the core of labelcheck.
//!
//! This crate provides:
//!
//! - **Discovery**: glob patterns to a sorted, deduplicated file list
//! - **Compose loading**: YAML to per-service label sets
//! - **Labels**: list and mapping forms normalized to one label type
//! - **Rule**: regex, ignore prefixes, optional uppercase keys
//! - **Validator**: per-file reports of invalid labels
//! - **Runner**: the whole pass over all discovered files
//!
//! # Example
//!
//! ```no_run
//! use labelcheck_kernel::{CheckConfig, ValidationRule, run};
//!
//! let rule = ValidationRule::with_default_pattern()?.ignore_prefixes(["traefik."]);
//! let config = CheckConfig::new(rule).with_patterns(["deploy/*compose.yml"]);
//! let summary = run(&config, &mut std::io::stdout())?;
//! assert!(summary.passed());
//! # Ok::<(), labelcheck_kernel::Error>(())
//! ```

pub mod compose;
pub mod discover;
pub mod error;
pub mod labels;
pub mod report;
pub mod rule;
pub mod runner;
pub mod validator;

pub use compose::ComposeDocument;
pub use discover::{DEFAULT_PATTERNS, DiscoveredFiles, discover};
pub use error::{Error, Result};
pub use labels::{Label, LabelSet, ServiceLabels};
pub use rule::{DEFAULT_PATTERN, ValidationRule};
pub use runner::{CheckConfig, RunSummary, check_file, run};
pub use validator::{InvalidLabelReport, validate};

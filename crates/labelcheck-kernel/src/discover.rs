//! Compose file discovery.
//!
//! Every pattern is expanded against the filesystem and the matches are
//! merged into one sorted, duplicate-free list. Finding nothing at all is an
//! error, not an empty success.

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use glob::MatchOptions;

use crate::error::{Error, Result};

/// Default compose globs: `*compose.*y*ml` in the working directory and below.
pub const DEFAULT_PATTERNS: [&str; 2] = ["*compose.*y*ml", "**/*compose.*y*ml"];

/// Sorted, deduplicated set of files to check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFiles {
    paths: Vec<PathBuf>,
}

impl DiscoveredFiles {
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }
}

/// Expand `patterns` into the files they match.
///
/// `**` matches any number of directories, including none, so
/// `**/*compose.yml` also finds `compose.yml` in the current directory.
/// Wildcards never match a leading dot, so hidden files and directories
/// such as `.git/` are only searched when named literally. Directories that
/// happen to match are skipped. The result is ordered by the raw path string.
pub fn discover<S: AsRef<str>>(patterns: &[S]) -> Result<DiscoveredFiles> {
    let mut found = BTreeSet::new();

    for pattern in patterns {
        let pattern = pattern.as_ref();
        let entries =
            glob::glob_with(pattern, match_options()).map_err(|source| Error::InvalidGlob {
                pattern: pattern.to_string(),
                source,
            })?;

        let before = found.len();
        for entry in entries {
            let path = entry?;
            if path.is_file() && hidden_parts_are_literal(pattern, &path) {
                found.insert(path);
            }
        }
        tracing::debug!(pattern, new = found.len() - before, "expanded glob");
    }

    if found.is_empty() {
        tracing::warn!(patterns = patterns.len(), "no compose files matched");
        return Err(Error::NoFilesFound {
            patterns: patterns.iter().map(|p| p.as_ref().to_string()).collect(),
        });
    }

    let mut paths: Vec<PathBuf> = found.into_iter().collect();
    paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    Ok(DiscoveredFiles { paths })
}

/// Every dot-prefixed component of `path` must be spelled out in `pattern`,
/// so `**` never wanders into `.git/` or `.venv/`.
fn hidden_parts_are_literal(pattern: &str, path: &Path) -> bool {
    let literal: Vec<&OsStr> = Path::new(pattern)
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name),
            _ => None,
        })
        .collect();
    path.components().all(|c| match c {
        Component::Normal(name) if name.as_encoded_bytes().starts_with(b".") => {
            literal.contains(&name)
        }
        _ => true,
    })
}

fn match_options() -> MatchOptions {
    MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    }
}

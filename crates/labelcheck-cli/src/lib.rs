//! labelcheck command line front end.
//!
//! Turns flags into an immutable [`CheckConfig`], runs the kernel, and maps
//! the outcome onto an exit status:
//!
//! - `0`: every discovered file passed
//! - `1`: at least one label is invalid
//! - `2`: fatal error (no files found, bad pattern, unreadable or malformed file)

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use labelcheck_kernel::{CheckConfig, DEFAULT_PATTERN, DEFAULT_PATTERNS, ValidationRule};

/// Check compose service labels against a naming convention.
#[derive(Debug, Parser)]
#[command(name = "labelcheck", version, about)]
pub struct Cli {
    /// Regex pattern to check labels against
    #[arg(short, long, value_name = "PATTERN", default_value = DEFAULT_PATTERN)]
    pub regex: String,

    /// Require label keys to be uppercase
    #[arg(short, long)]
    pub uppercase: bool,

    /// Ignore labels whose key starts with PREFIX (repeatable)
    #[arg(short = 'i', long = "ignore-prefix", value_name = "PREFIX")]
    pub ignore_prefix: Vec<String>,

    /// File path or glob pattern locating compose files (repeatable)
    #[arg(short = 'f', long = "file", value_name = "GLOB", default_values = DEFAULT_PATTERNS)]
    pub files: Vec<String>,

    /// Suppress output to console
    #[arg(short, long, overrides_with = "verbose")]
    pub quiet: bool,

    /// Display output on console (default)
    #[arg(short, long, overrides_with = "quiet")]
    pub verbose: bool,
}

impl Cli {
    /// Build the run configuration, compiling the label pattern.
    pub fn config(&self) -> Result<CheckConfig> {
        let rule = ValidationRule::new(self.regex.as_str())?
            .uppercase_keys(self.uppercase)
            .ignore_prefixes(self.ignore_prefix.iter().cloned());
        Ok(CheckConfig::new(rule)
            .with_patterns(self.files.iter().cloned())
            .with_verbose(!self.quiet))
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Passed => ExitCode::SUCCESS,
            Outcome::Failed => ExitCode::from(1),
        }
    }
}

/// Exit status for fatal errors.
pub const FATAL_EXIT: u8 = 2;

/// Run with parsed flags, writing listings to `out`.
pub fn run_with<W: Write + ?Sized>(cli: &Cli, out: &mut W) -> Result<Outcome> {
    let config = cli.config()?;
    tracing::debug!(
        pattern = config.rule.pattern(),
        uppercase = config.rule.key_is_uppercase(),
        prefixes = ?config.rule.prefixes(),
        patterns = ?config.patterns,
        "starting label check"
    );

    let summary = labelcheck_kernel::run(&config, out).context("label check aborted")?;
    out.flush().context("failed to flush output")?;

    tracing::info!(
        checked = summary.checked.len(),
        failed = summary.failed.len(),
        "label check finished"
    );

    Ok(if summary.passed() {
        Outcome::Passed
    } else {
        Outcome::Failed
    })
}

/// Parse the process arguments, run, and produce the exit status.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match run_with(&cli, &mut out) {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(FATAL_EXIT)
        }
    }
}

//! Integration tests for a full labelcheck pass over real files.

use std::fs;
use std::path::{Path, PathBuf};

use labelcheck_kernel::{CheckConfig, Error, Result, RunSummary, ValidationRule, run};
use rstest::rstest;
use tempfile::TempDir;

/// Helper to write a compose file under `dir`.
fn write_compose(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(&path, body).expect("write compose file");
    path
}

fn compose_with_label(label: &str) -> String {
    format!("services:\n  svc:\n    labels:\n      - {label:?}\n")
}

fn config_for(dir: &TempDir) -> CheckConfig {
    let rule = ValidationRule::with_default_pattern().expect("default pattern compiles");
    let root = dir.path().display();
    CheckConfig::new(rule).with_patterns([
        format!("{root}/*compose.*y*ml"),
        format!("{root}/**/*compose.*y*ml"),
    ])
}

/// Run and capture the verbose listing.
fn run_captured(config: &CheckConfig) -> (Result<RunSummary>, String) {
    let mut out = Vec::new();
    let result = run(config, &mut out);
    (result, String::from_utf8(out).expect("utf8 output"))
}

// ============================================================================
// Label classification through files
// ============================================================================

#[rstest]
#[case::single("foo")]
#[case::dotted("foo.bar")]
#[case::deep("foo.bar.baz")]
fn valid_labels_pass(
    #[case] key: &str,
    #[values("\"", "'", "")] quote: &str,
    #[values("docker_compose.yml", "docker_compose.yaml", "compose.yml", "docker_compose.override.yml")]
    file: &str,
) {
    let dir = tempfile::tempdir().expect("tempdir");
    write_compose(dir.path(), file, &compose_with_label(&format!("{quote}{key}=baz{quote}")));

    let (result, _) = run_captured(&config_for(&dir));
    let summary = result.expect("run succeeds");
    assert!(summary.passed(), "{quote}{key}=baz{quote} in {file} should pass");
    assert_eq!(summary.checked.len(), 1);
}

#[rstest]
#[case::leading_dot(".foo")]
#[case::double_dot("foo..bar")]
#[case::uppercase("foo.BAR")]
#[case::trailing_dot("foo.bar.")]
fn invalid_labels_fail(
    #[case] key: &str,
    #[values("\"", "'", "")] quote: &str,
    #[values("docker_compose.yml", "compose.yml", "docker_compose.override.yml")] file: &str,
) {
    let dir = tempfile::tempdir().expect("tempdir");
    let label = format!("{quote}{key}=baz{quote}");
    let path = write_compose(dir.path(), file, &compose_with_label(&label));

    let (result, _) = run_captured(&config_for(&dir));
    let summary = result.expect("run succeeds");
    assert!(!summary.passed(), "{quote}{key}=baz{quote} should fail");
    assert_eq!(summary.failed, vec![path]);
}

// ============================================================================
// Reporting
// ============================================================================

#[test]
fn verbose_listing_names_file_service_and_label() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_compose(dir.path(), "compose.yml", &compose_with_label(".foo=baz"));

    let (result, output) = run_captured(&config_for(&dir));
    assert!(!result.expect("run succeeds").passed());

    let expected = format!(
        "Discovered files:\n\
         - {file}\n\
         The following invalid service labels were discovered in {file}:\n\
         \x20  000: svc:\n\
         \x20    - .foo=baz\n",
        file = path.display()
    );
    assert_eq!(output, expected);
}

#[test]
fn quiet_run_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_compose(dir.path(), "compose.yml", &compose_with_label(".foo=baz"));

    let (result, output) = run_captured(&config_for(&dir).with_verbose(false));
    assert!(!result.expect("run succeeds").passed());
    assert!(output.is_empty(), "quiet mode should not write: {output}");
}

// ============================================================================
// Aggregation across files
// ============================================================================

#[test]
fn any_failing_file_fails_the_run() {
    let dir = tempfile::tempdir().expect("tempdir");
    let good = write_compose(dir.path(), "a/compose.yml", &compose_with_label("foo.bar=baz"));
    let bad = write_compose(dir.path(), "b/compose.yml", &compose_with_label("foo.BAR=baz"));

    let (result, output) = run_captured(&config_for(&dir));
    let summary = result.expect("run succeeds");
    assert!(!summary.passed());
    assert_eq!(summary.checked, vec![good.clone(), bad.clone()]);
    assert_eq!(summary.failed, vec![bad.clone()]);
    assert!(!output.contains(&format!("discovered in {}", good.display())));
    assert!(output.contains(&format!("discovered in {}", bad.display())));
}

#[test]
fn files_are_checked_after_an_earlier_failure() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_compose(dir.path(), "a/compose.yml", &compose_with_label(".first=1"));
    write_compose(dir.path(), "b/compose.yml", &compose_with_label(".second=2"));

    let (result, output) = run_captured(&config_for(&dir));
    assert_eq!(result.expect("run succeeds").failed.len(), 2);
    assert!(output.contains(".first=1"));
    assert!(output.contains(".second=2"));
}

#[test]
fn mapping_labels_and_ignore_prefixes() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_compose(
        dir.path(),
        "compose.yml",
        "services:\n  web:\n    labels:\n      com.example.tier: web\n      traefik.http.routers.Web.rule: Host(`x`)\n",
    );

    let (result, _) = run_captured(&config_for(&dir));
    assert!(!result.expect("run succeeds").passed());

    let mut config = config_for(&dir);
    config.rule = config.rule.clone().ignore_prefixes(["traefik."]);
    let (result, _) = run_captured(&config);
    assert!(result.expect("run succeeds").passed());
}

// ============================================================================
// Fatal conditions
// ============================================================================

#[test]
fn no_matching_files_is_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (result, output) = run_captured(&config_for(&dir));
    assert!(matches!(result, Err(Error::NoFilesFound { .. })));
    assert!(output.is_empty());
}

#[test]
fn malformed_yaml_aborts_the_run() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_compose(dir.path(), "a/compose.yml", "services: [oops\n");
    write_compose(dir.path(), "b/compose.yml", &compose_with_label(".foo=baz"));

    let (result, output) = run_captured(&config_for(&dir));
    assert!(matches!(result, Err(Error::Parse { .. })));
    assert!(!output.contains(".foo=baz"), "run should stop at the bad file");
}

#[test]
fn hidden_directories_are_not_searched() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_compose(dir.path(), ".git/compose.yml", &compose_with_label(".foo=baz"));
    let visible = write_compose(dir.path(), "app/compose.yml", &compose_with_label("foo.bar=baz"));

    let (result, _) = run_captured(&config_for(&dir));
    let summary = result.expect("run succeeds");
    assert!(summary.passed());
    assert_eq!(summary.checked, vec![visible]);
}

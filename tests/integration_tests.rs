use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn critique() -> Command {
    let mut cmd = Command::cargo_bin("critique").expect("binary exists");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn json_stdout(cmd: &mut Command) -> Value {
    let output = cmd.output().expect("command runs");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

// ---------------------------------------------------------------------------
// CLI smoke tests
// ---------------------------------------------------------------------------

#[test]
fn test_help_output() {
    critique()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("code-quality"));
}

#[test]
fn test_version_output() {
    critique()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("critique"));
}

#[test]
fn test_unknown_subcommand_fails() {
    critique().arg("frobnicate").assert().failure();
}

// ---------------------------------------------------------------------------
// analyze
// ---------------------------------------------------------------------------

#[test]
fn test_analyze_generic_file() {
    let value = json_stdout(critique().args(["analyze", &fixture("sample.js")]));
    let report = &value[0];
    assert_eq!(report["language"], "javascript");
    assert_eq!(report["issues_count"], 1);
    assert_eq!(report["issues"][0]["line"], 3);
    assert_eq!(report["issues"][0]["message"], "Trailing whitespace");
    assert_eq!(report["quality_score"], 95.0);
    assert_eq!(report["complexity"], 0.0);
    assert_eq!(report["maintainability_index"], 0.0);
    assert_eq!(report["total_lines"], 6);
    assert_eq!(report["comment_lines"], 1);
}

#[test]
fn test_analyze_python_file() {
    let value = json_stdout(critique().args(["analyze", &fixture("sample.py")]));
    let report = &value[0];
    assert_eq!(report["language"], "python");
    assert_eq!(report["issues_count"], 1);
    assert_eq!(report["issues"][0]["line"], 21);
    assert_eq!(report["issues"][0]["severity"], "medium");
    assert!(report["complexity"].as_f64().unwrap() > 1.0);
    assert!(report["maintainability_index"].as_f64().unwrap() > 0.0);
    assert!(report["halstead_difficulty"].as_f64().unwrap() > 0.0);
    let score = report["quality_score"].as_f64().unwrap();
    assert!((0.0..=100.0).contains(&score));
}

#[test]
fn test_analyze_preserves_argument_order() {
    let value = json_stdout(critique().args([
        "analyze",
        &fixture("sample.py"),
        &fixture("sample.js"),
        &fixture("sample.py"),
    ]));
    let languages: Vec<_> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["language"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(languages, ["python", "javascript", "python"]);
}

#[test]
fn test_analyze_stdin_with_language() {
    let value = json_stdout(
        critique()
            .args(["analyze", "-l", "Python"])
            .write_stdin("def run(expr):\n    return eval(expr)\n"),
    );
    let report = &value[0];
    assert_eq!(report["path"], "<stdin>");
    assert_eq!(report["issues"][0]["message"], "Use of eval() is dangerous");
    assert_eq!(report["issues"][0]["severity"], "high");
}

#[test]
fn test_analyze_stdin_defaults_to_generic() {
    let value = json_stdout(critique().arg("analyze").write_stdin(""));
    let report = &value[0];
    assert_eq!(report["language"], "text");
    assert_eq!(report["total_lines"], 1);
    assert_eq!(report["issues_count"], 0);
    assert_eq!(report["quality_score"], 100.0);
}

#[test]
fn test_analyze_malformed_python_falls_back() {
    let value = json_stdout(
        critique()
            .args(["analyze", "-l", "python"])
            .write_stdin("def broken(:\n    pass \n"),
    );
    let report = &value[0];
    assert_eq!(report["maintainability_index"], 0.0);
    assert_eq!(report["complexity"], 0.0);
    assert_eq!(report["issues"][0]["message"], "Trailing whitespace");
    assert_eq!(report["quality_score"], 95.0);
}

#[test]
fn test_analyze_markdown_output() {
    critique()
        .args(["-f", "markdown", "analyze", &fixture("sample.js")])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Code Quality Report"))
        .stdout(predicate::str::contains("| 3 | low | Trailing whitespace |"));
}

#[test]
fn test_analyze_text_output() {
    critique()
        .args(["analyze", &fixture("sample.py"), "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[python]"))
        .stdout(predicate::str::contains("Bare except clause catches all exceptions"));
}

#[test]
fn test_analyze_missing_file_fails() {
    critique()
        .args(["analyze", "does/not/exist.py"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("does/not/exist.py"));
}

#[test]
fn test_env_overrides_line_limit() {
    let value = json_stdout(
        critique()
            .env("CRITIQUE_ISSUES__MAX_LINE_LENGTH", "10")
            .args(["analyze", "-l", "go"])
            .write_stdin("fmt.Println(\"hello\")\n"),
    );
    assert_eq!(
        value[0]["issues"][0]["message"],
        "Line too long (>10 characters)"
    );
}

// ---------------------------------------------------------------------------
// statistics
// ---------------------------------------------------------------------------

#[test]
fn test_summary() {
    let value = json_stdout(critique().args([
        "summary",
        "-r",
        &fixture("reviews.json"),
        "--portfolio-projects",
        "2",
    ]));
    assert_eq!(value["total_reviews"], 10);
    assert_eq!(value["avg_quality_score"], 65.0);
    assert_eq!(value["total_issues"], 14);
    assert_eq!(value["languages"]["python"], 6);
    assert_eq!(value["languages"]["javascript"], 4);
    assert_eq!(value["portfolio_projects"], 2);
    assert_eq!(value["improvement_trend"], "improving");
    assert_eq!(value["most_used_language"], "python");
}

#[test]
fn test_summary_with_configured_threshold() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("critique.toml");
    std::fs::write(&config, "[trend]\nthreshold = 20.0\n").unwrap();

    let value = json_stdout(critique().args([
        "-c",
        config.to_str().unwrap(),
        "summary",
        "-r",
        &fixture("reviews.json"),
    ]));
    assert_eq!(value["improvement_trend"], "stable");
}

#[test]
fn test_summary_of_empty_reviews() {
    let dir = TempDir::new().unwrap();
    let reviews = dir.path().join("reviews.json");
    std::fs::write(&reviews, "[]").unwrap();

    let value = json_stdout(critique().args(["summary", "-r", reviews.to_str().unwrap()]));
    assert_eq!(value["total_reviews"], 0);
    assert_eq!(value["improvement_trend"], "N/A");
    assert!(value["most_used_language"].is_null());
}

#[test]
fn test_series_window() {
    let value = json_stdout(critique().args([
        "series",
        "-r",
        &fixture("reviews.json"),
        "--days",
        "2",
        "--now",
        "2024-03-10T12:00:00Z",
    ]));
    assert_eq!(
        value["dates"],
        serde_json::json!(["2024-03-08", "2024-03-09", "2024-03-10"])
    );
    assert_eq!(value["scores"], serde_json::json!([68.0, 71.0, 69.0]));
    assert_eq!(value["review_counts"], serde_json::json!([1, 1, 1]));
    assert_eq!(value["issue_counts"], serde_json::json!([2, 1, 0]));
}

#[test]
fn test_series_outside_window_is_empty() {
    let value = json_stdout(critique().args([
        "series",
        "-r",
        &fixture("reviews.json"),
        "--now",
        "2025-01-01T00:00:00Z",
    ]));
    assert_eq!(value["dates"], serde_json::json!([]));
    assert_eq!(value["scores"], serde_json::json!([]));
}

#[test]
fn test_distribution() {
    let value = json_stdout(critique().args(["distribution", "-r", &fixture("reviews.json")]));
    assert_eq!(
        value,
        serde_json::json!({"low": 3, "medium": 3, "high": 2, "very_high": 2})
    );
}

#[test]
fn test_invalid_reviews_file_fails() {
    let dir = TempDir::new().unwrap();
    let reviews = dir.path().join("reviews.json");
    std::fs::write(&reviews, "{\"not\": \"a list\"}").unwrap();

    critique()
        .args(["distribution", "-r", reviews.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid reviews file"));
}

// ---------------------------------------------------------------------------
// config
// ---------------------------------------------------------------------------

#[test]
fn test_config_prints_defaults() {
    critique()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("max_line_length = 120"))
        .stdout(predicate::str::contains("days = 30"));
}

#[test]
fn test_config_file_overrides() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    std::fs::write(&config, "[issues]\nmax_line_length = 88\n").unwrap();

    critique()
        .args(["config", "-c", config.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("max_line_length = 88"));
}

#[test]
fn test_config_discovered_in_working_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("critique.toml"), "[series]\ndays = 9\n").unwrap();

    critique()
        .current_dir(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("days = 9"));
}

#[test]
fn test_missing_config_file_fails() {
    critique()
        .args(["-c", "/nonexistent/critique.toml", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn eligibility(history: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("eligibility").unwrap();
    cmd.env("ELIGIBILITY_HISTORY_FILE", history.path().join("recent.json"))
        // Unroutable backend so no test ever reaches the network.
        .env("ELIGIBILITY_API_URL", "http://127.0.0.1:1/check")
        .env_remove("ELIGIBILITY_HIT_CACHE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    eligibility(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("recent"))
        .stdout(predicate::str::contains("clear"));
}

#[test]
fn check_help_describes_json_output() {
    let dir = TempDir::new().unwrap();
    eligibility(&dir)
        .args(["check", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Print the checked product as JSON"));
}

#[test]
fn blank_url_is_rejected_before_any_request() {
    let dir = TempDir::new().unwrap();
    eligibility(&dir)
        .args(["check", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a product URL"));
}

#[test]
fn unreachable_backend_reports_error_and_keeps_history_empty() {
    let dir = TempDir::new().unwrap();
    eligibility(&dir)
        .args(["check", "https://example.com/p"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP error"));

    eligibility(&dir)
        .arg("recent")
        .assert()
        .success()
        .stdout(predicate::str::contains("No recent checks."));
}

#[test]
fn recent_reads_stored_history() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("recent.json"),
        r#"[{"url":"https://www.cvs.com/p/1","normalizedDomain":"cvs.com",
            "eligibilityStatus":"eligible","title":"Pain Reliever",
            "checkedAt":"2024-02-01T00:00:00Z"}]"#,
    )
    .unwrap();

    eligibility(&dir)
        .arg("recent")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Eligible]"))
        .stdout(predicate::str::contains("Pain Reliever  (cvs.com)"));
}

#[test]
fn clear_empties_history() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("recent.json"),
        r#"[{"url":"u","eligibilityStatus":"ineligible","checkedAt":"2024-02-01T00:00:00Z"}]"#,
    )
    .unwrap();

    eligibility(&dir)
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recent checks cleared."));

    eligibility(&dir)
        .arg("recent")
        .assert()
        .stdout(predicate::str::contains("No recent checks."));
}

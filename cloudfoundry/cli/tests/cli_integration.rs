//! Integration tests for the cf-client CLI.
//!
//! These tests verify end-to-end CLI behavior using assert_cmd. None of them
//! reach a real Cloud Controller.

use assert_cmd::Command;
use predicates::prelude::*;

fn cf_cmd() -> Command {
    let mut cmd = Command::cargo_bin("cf-client").unwrap();
    cmd.env_remove("CF_API_URL")
        .env_remove("CF_ACCESS_TOKEN")
        .env_remove("CF_TIMEOUT_SECS")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_shows_help() {
    cf_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cloud Controller"))
        .stdout(predicate::str::contains("orgs"))
        .stdout(predicate::str::contains("usage-events"));
}

#[test]
fn cli_orgs_list_help_shows_filters() {
    cf_cmd()
        .args(["orgs", "list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--auditor"))
        .stdout(predicate::str::contains("--space"))
        .stdout(predicate::str::contains("--user"));
}

#[test]
fn cli_shows_version() {
    cf_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cf-client 0.1.0"));
}

#[test]
fn cli_requires_api_url() {
    cf_cmd()
        .args(["orgs", "get", "test-id"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("CF_API_URL"));
}

#[test]
fn cli_rejects_invalid_timeout() {
    cf_cmd()
        .env("CF_API_URL", "https://api.example.com")
        .env("CF_TIMEOUT_SECS", "soon")
        .args(["orgs", "get", "test-id"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("CF_TIMEOUT_SECS"));
}

#[test]
fn cli_refuses_unconfirmed_purge() {
    cf_cmd()
        .args(["--api-url", "https://api.example.com"])
        .args(["usage-events", "purge-and-reseed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));
}

#[test]
fn cli_requires_subcommand_arguments() {
    cf_cmd()
        .args(["orgs", "associate-auditor", "only-one-id"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("AUDITOR_ID"));
}

#[test]
fn cli_reports_unreachable_server() {
    cf_cmd()
        .args(["--api-url", "http://127.0.0.1:9"])
        .args(["orgs", "get", "test-id"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

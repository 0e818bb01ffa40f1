//! Binary behavior that needs no reachable API.

mod support;

use predicates::prelude::*;
use support::*;

#[test]
fn test_help_lists_commands() {
    let t = Test::new();
    let output = t.run(&["--help"]);
    assert_success(&output);
    for command in ["repo", "branch", "file", "contents", "topics", "secret", "pr", "ruleset"] {
        assert_stdout_contains(&output, command);
    }
}

#[test]
fn test_version() {
    let t = Test::new();
    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_token() {
    let t = Test::new();
    let output = t.run(&["repo", "get", "octo", "hello"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "missing API token");
    assert_stderr_contains(&output, "GITHUB_TOKEN");
}

#[test]
fn test_completions_bash() {
    let t = Test::new();
    t.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ghkit"));
}

#[test]
fn test_completions_need_no_token_or_config() {
    let t = Test::new();
    t.cmd()
        .args(["--config", "/nonexistent/config.toml", "completions", "zsh"])
        .assert()
        .success();
}

#[test]
fn test_invalid_config_file() {
    let t = Test::new();
    let path = t.write("config.toml", "[api]\nurl = \"not a url\"\n");
    let output = t
        .offline_cmd()
        .args(["--config", path.to_str().unwrap(), "repo", "get", "octo", "hello"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "api.url");
}

#[test]
fn test_missing_config_file() {
    let t = Test::new();
    let output = t.run(&["--config", "absent.toml", "repo", "get", "octo", "hello"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "config file not found");
}

#[test]
fn test_unreachable_api() {
    let t = Test::new();
    let output = t.run_offline(&["repo", "get", "octo", "hello"], "");
    assert_failure(&output);
    assert_stderr_contains(&output, "repository octo/hello");
    assert_stderr_contains(&output, "retried");
}

#[test]
fn test_secret_reserved_name() {
    let t = Test::new();
    let output = t.run_offline(&["secret", "set", "octo", "hello", "GITHUB_PAT"], "value\n");
    assert_failure(&output);
    assert_stderr_contains(&output, "GITHUB_");
}

#[test]
fn test_secret_empty_value() {
    let t = Test::new();
    let output = t.run_offline(&["secret", "set", "octo", "hello", "DEPLOY_TOKEN"], "\n");
    assert_failure(&output);
    assert_stderr_contains(&output, "cannot be empty");
}

#[test]
fn test_secret_fetch_failure_names_step() {
    let t = Test::new();
    let output = t.run_offline(&["secret", "set", "octo", "hello", "DEPLOY_TOKEN"], "s3cr3t\n");
    assert_failure(&output);
    assert_stderr_contains(&output, "fetching public key failed");
    assert!(!stderr(&output).contains("s3cr3t"));
}

#[test]
fn test_file_put_requires_source() {
    let t = Test::new();
    t.offline_cmd()
        .args(["file", "put", "octo", "hello", "README.md", "--branch", "main", "-m", "docs"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_ruleset_without_rules() {
    let t = Test::new();
    let output = t.run_offline(&["ruleset", "create", "octo", "hello", "protect"], "");
    assert_failure(&output);
    assert_stderr_contains(&output, "no rules given");
}

#[test]
fn test_ruleset_malformed_rules_file() {
    let t = Test::new();
    let path = t.write("rules.json", "{ not json");
    let output = t.run_offline(
        &["ruleset", "create", "octo", "hello", "protect", "--rules", path.to_str().unwrap()],
        "",
    );
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid rules");
}

#[test]
fn test_verbose_logs_to_stderr() {
    let t = Test::new();
    let output = t.run_offline(&["--verbose", "repo", "get", "octo", "hello"], "");
    assert_failure(&output);
    assert_stderr_contains(&output, "session configured");
}

//! Config file loading and its effect on the client.

mod support;

use ghkit::core::api::{Client, HttpTransport};
use ghkit::core::config::Config;
use ghkit::error::{ConfigError, Error};
use support::*;

#[test]
fn test_explicit_config_is_applied() {
    let t = Test::new();
    let path = t.write(
        "config.toml",
        r#"
[api]
url = "https://ghe.example.com/api/v3/"
timeout_secs = 5
"#,
    );

    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.api.timeout_secs, 5);
    assert!(config.api.user_agent.starts_with("ghkit/"));

    let transport = HttpTransport::new(&config, "ghp_test").unwrap();
    assert_eq!(transport.base_url(), "https://ghe.example.com/api/v3");
}

#[test]
fn test_invalid_config_blocks_client() {
    let config = Config::parse("[api]\ntimeout_secs = 0\n").unwrap_err();
    assert!(matches!(
        config,
        Error::Config(ConfigError::InvalidValue {
            field: "api.timeout_secs",
            ..
        })
    ));

    let mut config = Config::default();
    config.api.url = "ftp://example.com".to_string();
    let err = Client::from_config(&config, "ghp_test").unwrap_err();
    assert!(err.to_string().contains("api.url"));
}

#[test]
fn test_missing_explicit_config() {
    let t = Test::new();
    let err = Config::load(Some(&t.dir.path().join("absent.toml"))).unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::NotFound(_))));
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = Config::parse("[api]\nurl = \"http://localhost:8080\"\nretries = 3\n").unwrap();
    assert_eq!(config.api.url, "http://localhost:8080");
}

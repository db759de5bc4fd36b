#[path = "common/mod.rs"]
mod common;

use common::GroupdeckTest;

// ============================================================================
// Config command tests
// ============================================================================

#[test]
fn test_config_get_defaults_without_file() {
    let deck = GroupdeckTest::new();

    let output = deck.run_success(&["config", "get", "server_url"]);
    assert_eq!(output.trim(), "http://localhost:3000/api");

    let output = deck.run_success(&["config", "get", "page_size"]);
    assert_eq!(output.trim(), "10");

    let output = deck.run_success(&["config", "get", "timeout_seconds"]);
    assert_eq!(output.trim(), "30");
}

#[test]
fn test_config_set_and_get_page_size() {
    let deck = GroupdeckTest::new();

    let output = deck.run_success(&["config", "set", "page_size", "25"]);
    assert!(output.contains("Set page_size to 25"));

    let output = deck.run_success(&["config", "get", "page_size"]);
    assert_eq!(output.trim(), "25");
}

#[test]
fn test_config_set_rejects_page_size_outside_choices() {
    let deck = GroupdeckTest::new();

    let stderr = deck.run_failure(&["config", "set", "page_size", "7"]);
    assert!(stderr.contains("invalid page size 7"));
    assert!(stderr.contains("5, 10, 25, 50"));
}

#[test]
fn test_config_set_rejects_non_numeric_page_size() {
    let deck = GroupdeckTest::new();

    let stderr = deck.run_failure(&["config", "set", "page_size", "lots"]);
    assert!(stderr.contains("invalid page size 'lots'"));
}

#[test]
fn test_config_unknown_key() {
    let deck = GroupdeckTest::new();

    let stderr = deck.run_failure(&["config", "get", "colour_scheme"]);
    assert!(stderr.contains("unknown config key 'colour_scheme'"));

    let stderr = deck.run_failure(&["config", "set", "colour_scheme", "dark"]);
    assert!(stderr.contains("unknown config key"));
    assert!(stderr.contains("server_url, page_size, timeout_seconds"));
}

#[test]
fn test_config_set_server_url_persists() {
    let deck = GroupdeckTest::new();

    deck.run_success(&["config", "set", "server_url", "http://deck.example:9000/api"]);

    let output = deck.run_success(&["config", "get", "server_url"]);
    assert_eq!(output.trim(), "http://deck.example:9000/api");

    assert!(deck.config_path().exists(), "Config file should be created");
    let content = deck.read_config();
    assert!(content.contains("server_url"));
    assert!(content.contains("http://deck.example:9000/api"));
}

#[test]
fn test_config_set_timeout_round_trip() {
    let deck = GroupdeckTest::new();

    deck.run_success(&["config", "set", "timeout_seconds", "60"]);
    let output = deck.run_success(&["config", "get", "timeout_seconds"]);
    assert_eq!(output.trim(), "60");

    let stderr = deck.run_failure(&["config", "set", "timeout_seconds", "soon"]);
    assert!(stderr.contains("invalid timeout 'soon'"));
}

#[test]
fn test_config_path_points_into_config_home() {
    let deck = GroupdeckTest::new();

    let output = deck.run_success(&["config", "path"]);
    let printed = output.trim();
    assert!(printed.ends_with("config.yaml"), "got: {printed}");
    assert!(printed.contains("groupdeck"), "got: {printed}");
    assert!(
        printed.starts_with(&deck.temp_dir.path().to_string_lossy().to_string()),
        "config path {printed} should live under the temp config home"
    );
}

#[test]
fn test_env_var_overrides_configured_server_url() {
    let deck = GroupdeckTest::new();

    deck.run_success(&["config", "set", "server_url", "http://from-file:4000/api"]);

    let output = deck.run_with_env(
        &["config", "get", "server_url"],
        "GROUPDECK_SERVER",
        "http://from-env:9000/api",
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "http://from-env:9000/api");
}

#[cfg(unix)]
#[test]
fn test_config_file_written_with_restrictive_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let deck = GroupdeckTest::new();
    deck.run_success(&["config", "set", "page_size", "50"]);

    let metadata = std::fs::metadata(deck.config_path()).unwrap();
    assert_eq!(metadata.permissions().mode() & 0o777, 0o600);
}

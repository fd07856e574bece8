#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use std::path::Path;

use assert_cmd::cargo_bin_cmd;
use predicates::prelude::{PredicateBooleanExt, predicate};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Writes a config pointing the catalog client at `server`.
fn write_config(dir: &Path, server: &MockServer) {
    std::fs::write(
        dir.join("config.toml"),
        format!(
            "[tmdb]\nbase_url = \"{}/3/\"\ntimeout_secs = 5\nmin_interval_ms = 0\n",
            server.uri()
        ),
    )
    .unwrap();
}

async fn mount(server: &MockServer, endpoint: &str, body: &'static str) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[test]
fn test_help_lists_subcommands() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("vidlens");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("lookup"))
        .stdout(predicate::str::contains("normalize"))
        .stdout(predicate::str::contains("deep-link"));
}

#[test]
fn test_normalize_prints_extraction() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("vidlens");
    cmd.args(["normalize", "--query", "Money Heist Season 2 Episode 3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Normalized: money heist s02 e03"))
        .stdout(predicate::str::contains("Title: money heist"))
        .stdout(predicate::str::contains("Season: 2"))
        .stdout(predicate::str::contains("Episode: 3"));
}

#[test]
fn test_deep_link_encode_uses_configured_bot() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[bot]\nusername = \"moviefinder_bot\"\n",
    )
    .unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("vidlens");
    cmd.arg("--dir")
        .arg(dir.path())
        .args(["deep-link", "encode", "--query", "dark s01"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://t.me/moviefinder_bot?start=ZGFyayBzMDE",
        ));
}

#[test]
fn test_deep_link_decode_start_command() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("vidlens");
    cmd.args(["deep-link", "decode", "--token", "/start ZGFyayBzMDE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dark s01"));
}

#[test]
fn test_deep_link_decode_malformed_token() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("vidlens");
    cmd.args(["deep-link", "decode", "--token", "%%%"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid or expired link"));
}

#[test]
fn test_lookup_requires_api_token() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("vidlens");
    cmd.env_remove("TMDB_API_TOKEN")
        .arg("--dir")
        .arg(dir.path())
        .args(["lookup", "--query", "inception"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TMDB_API_TOKEN"));
}

#[tokio::test]
async fn test_lookup_prints_caption() {
    // Arrange
    let server = MockServer::start().await;
    mount(
        &server,
        "/3/search/multi",
        include_str!("../../../fixtures/tmdb/search_multi_inception.json"),
    )
    .await;
    mount(
        &server,
        "/3/movie/27205",
        include_str!("../../../fixtures/tmdb/movie_details_27205.json"),
    )
    .await;
    mount(
        &server,
        "/3/movie/27205/watch/providers",
        include_str!("../../../fixtures/tmdb/watch_providers_27205.json"),
    )
    .await;
    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path(), &server);

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("vidlens");
    cmd.env("TMDB_API_TOKEN", "test-token")
        .env("RUST_LOG", "info")
        .arg("--dir")
        .arg(dir.path())
        .args(["lookup", "--query", "Inception", "--region", "US"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<b>Inception</b>"))
        .stdout(predicate::str::contains("Type :- Movie"))
        .stdout(predicate::str::contains("Duration :- 2h 28m"))
        .stdout(predicate::str::contains("Platforms :- Max"))
        .stdout(predicate::str::contains("Trailer :-").not());
}

#[tokio::test]
async fn test_lookup_without_results_exits_successfully() {
    // Arrange
    let server = MockServer::start().await;
    mount(
        &server,
        "/3/search/multi",
        include_str!("../../../fixtures/tmdb/search_multi_empty.json"),
    )
    .await;
    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path(), &server);

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("vidlens");
    cmd.env("TMDB_API_TOKEN", "test-token")
        .env("RUST_LOG", "info")
        .arg("--dir")
        .arg(dir.path())
        .args(["lookup", "--query", "qwxzv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found for 'qwxzv'"));
}

#[test]
fn test_deep_link_decode_rejects_glued_start_command() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("vidlens");
    cmd.args(["deep-link", "decode", "--token", "/startZGFyayBzMDE"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid or expired link"));
}

#[test]
fn test_lookup_rejects_zero_timeout() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[tmdb]\ntimeout_secs = 0\n",
    )
    .unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("vidlens");
    cmd.env("TMDB_API_TOKEN", "test-token")
        .arg("--dir")
        .arg(dir.path())
        .args(["lookup", "--query", "inception"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("timeout_secs"));
}

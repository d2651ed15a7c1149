//! Integration tests for dunning-cli crate.
//!
//! These tests run the render pipeline end to end: argument parsing,
//! configuration, reading the record from disk and rendering.

use clap::Parser;
use dunning_cli::{render, Cli, CliError};
use dunning_common::test_utils::{init_test_logging, payment_fixtures};
use dunning_config::{Config, ConfigLoader};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_record(dir: &Path) -> String {
    let path = dir.join("record.json");
    fs::write(&path, payment_fixtures::personal_record_json()).unwrap();
    path.display().to_string()
}

#[test]
fn test_renders_html_from_file() {
    init_test_logging();

    let dir = TempDir::new().unwrap();
    let data = write_record(dir.path());
    let cli = Cli::try_parse_from(["dunning", "--data", &data, "--language", "en"]).unwrap();

    let html = render(&cli, &Config::default()).unwrap();

    assert!(html.starts_with("<html><body>"));
    assert!(html.contains(
        "Unfortunately, we were not able to charge your card for your annual subscription to AppCode."
    ));
    assert!(html.contains("<a href=\"https://foo.bar/ex\">manually</a> till Mar 05, 2025"));
}

#[test]
fn test_uses_configured_language_and_url() {
    let dir = TempDir::new().unwrap();
    let data = write_record(dir.path());
    let config_path = dir.path().join("dunning.yaml");
    fs::write(
        &config_path,
        "mail:\n  language: de\n  renewal_url: https://billing.example.com/renew\n",
    )
    .unwrap();

    let config = ConfigLoader::new(&config_path)
        .load_with_env(|_| None)
        .unwrap();
    let cli = Cli::try_parse_from(["dunning", "-d", &data, "-f", "text"]).unwrap();

    let text = render(&cli, &config).unwrap();

    assert!(text.starts_with("Vielen Dank"));
    assert!(text.contains("manuell (https://billing.example.com/renew) Vor März 05, 2025"));
}

#[test]
fn test_json_output_is_block_model() {
    let dir = TempDir::new().unwrap();
    let data = write_record(dir.path());
    let cli = Cli::try_parse_from(["dunning", "-d", &data, "-l", "ru", "-f", "json"]).unwrap();

    let json = render(&cli, &Config::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let paragraphs = value["paragraphs"].as_array().unwrap();
    assert_eq!(paragraphs.len(), 5);
    assert_eq!(paragraphs[3]["inlines"][1]["type"], "link");
}

#[test]
fn test_missing_record_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json").display().to_string();
    let cli = Cli::try_parse_from(["dunning", "-d", &missing, "-l", "en"]).unwrap();

    assert!(matches!(render(&cli, &Config::default()), Err(CliError::Data(_))));
}

#[test]
fn test_invalid_record_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("record.json");
    let mut record: serde_json::Value =
        serde_json::from_str(payment_fixtures::personal_record_json()).unwrap();
    record["items"][0]["quantity"] = serde_json::json!(0);
    fs::write(&path, record.to_string()).unwrap();

    let data = path.display().to_string();
    let cli = Cli::try_parse_from(["dunning", "-d", &data, "-l", "en"]).unwrap();

    assert!(matches!(render(&cli, &Config::default()), Err(CliError::Mail(_))));
}

#[test]
fn test_no_language_anywhere() {
    let dir = TempDir::new().unwrap();
    let data = write_record(dir.path());
    let cli = Cli::try_parse_from(["dunning", "-d", &data]).unwrap();

    assert!(matches!(
        render(&cli, &Config::default()),
        Err(CliError::MissingLanguage)
    ));
}

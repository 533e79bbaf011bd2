use std::collections::HashMap;
use std::env::VarError;

use super::*;

const SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/abc/export?format=csv&gid=0";

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map with all required env vars populated with valid values.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("HAIRSHOP_CSV_URL", SHEET_URL);
    m
}

#[test]
fn parse_environment_known_values() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "HAIRSHOP_ENV"));
}

#[test]
fn build_app_config_fails_without_csv_url() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "HAIRSHOP_CSV_URL"),
        "expected MissingEnvVar(HAIRSHOP_CSV_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_treats_blank_csv_url_as_missing() {
    let mut map = HashMap::new();
    map.insert("HAIRSHOP_CSV_URL", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
}

#[test]
fn build_app_config_rejects_non_http_csv_url() {
    let mut map = HashMap::new();
    map.insert("HAIRSHOP_CSV_URL", "ftp://example.com/sheet.csv");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "HAIRSHOP_CSV_URL"),
        "expected InvalidEnvVar(HAIRSHOP_CSV_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_succeeds_with_defaults() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).expect("config should build");
    assert_eq!(cfg.csv_url, SHEET_URL);
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.http_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "hairshop/0.1 (catalog)");
    assert_eq!(
        cfg.store_path,
        std::path::PathBuf::from("./data/storefront.json")
    );
    assert!(cfg.telegram_init_data.is_none());
}

#[test]
fn build_app_config_http_timeout_override() {
    let mut map = full_env();
    map.insert("HAIRSHOP_HTTP_TIMEOUT_SECS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.http_timeout_secs, 5);
}

#[test]
fn build_app_config_http_timeout_invalid() {
    let mut map = full_env();
    map.insert("HAIRSHOP_HTTP_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "HAIRSHOP_HTTP_TIMEOUT_SECS"),
        "expected InvalidEnvVar(HAIRSHOP_HTTP_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_reads_telegram_init_data() {
    let mut map = full_env();
    map.insert("HAIRSHOP_TELEGRAM_INIT_DATA", r#"{"user":{"id":42}}"#);
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.telegram_init_data.as_deref(),
        Some(r#"{"user":{"id":42}}"#)
    );
}

#[test]
fn debug_output_redacts_telegram_init_data() {
    let mut map = full_env();
    map.insert("HAIRSHOP_TELEGRAM_INIT_DATA", r#"{"user":{"id":42}}"#);
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(rendered.contains("[redacted]"));
    assert!(!rendered.contains("\"id\":42"));
}

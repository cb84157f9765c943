use super::*;

use std::{
    collections::HashMap,
    env,
    time::{SystemTime, UNIX_EPOCH},
};

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn normalizes_trailing_slash_and_whitespace() {
    assert_eq!(
        normalize_api_url("  https://dummyjson.com/products/ ").expect("url"),
        "https://dummyjson.com/products"
    );
}

#[test]
fn empty_url_falls_back_to_default() {
    assert_eq!(normalize_api_url("   ").expect("url"), DEFAULT_API_URL);
}

#[test]
fn rejects_non_http_urls() {
    assert!(matches!(
        normalize_api_url("ftp://example.com/products"),
        Err(SettingsError::InvalidApiUrl { .. })
    ));
    assert!(normalize_api_url("not a url").is_err());
}

#[test]
fn missing_file_and_env_yield_defaults() {
    let settings =
        load_settings_from(Path::new("definitely/not/here/catalog.toml"), no_env).expect("load");
    assert_eq!(settings, ClientSettings::default());
}

#[test]
fn file_then_env_overrides_apply_in_order() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let temp_root = env::temp_dir().join(format!("catalog_settings_test_{suffix}"));
    fs::create_dir_all(&temp_root).expect("temp root");
    let file = temp_root.join(SETTINGS_FILE);
    fs::write(
        &file,
        "api_url = \"http://127.0.0.1:9000/products/\"\nlog_filter = \"debug\"\n",
    )
    .expect("write settings");

    let from_file = load_settings_from(&file, no_env).expect("load");
    assert_eq!(from_file.api_url, "http://127.0.0.1:9000/products");
    assert_eq!(from_file.log_filter, "debug");

    let vars: HashMap<&str, &str> = HashMap::from([
        ("CATALOG_API_URL", "http://127.0.0.1:9001/products"),
        ("APP__API_URL", "http://127.0.0.1:9002/products"),
        ("CATALOG_LOG", "warn"),
    ]);
    let from_env = load_settings_from(&file, |name| vars.get(name).map(|v| v.to_string()))
        .expect("load");
    assert_eq!(from_env.api_url, "http://127.0.0.1:9002/products");
    assert_eq!(from_env.log_filter, "warn");

    let mut vars = vars;
    vars.insert("APP__LOG_FILTER", "catalog=trace");
    let from_app_env = load_settings_from(&file, |name| vars.get(name).map(|v| v.to_string()))
        .expect("load");
    assert_eq!(from_app_env.log_filter, "catalog=trace");
    assert!(from_app_env.warnings.is_empty());

    fs::remove_dir_all(temp_root).expect("cleanup");
}

#[test]
fn invalid_file_is_ignored() {
    let mut settings = ClientSettings::default();
    assert!(apply_file_overrides(&mut settings, "api_url = [not toml").is_err());
    assert_eq!(settings, ClientSettings::default());
}

#[test]
fn unreadable_file_is_reported_as_warning() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let temp_root = env::temp_dir().join(format!("catalog_settings_bad_{suffix}"));
    fs::create_dir_all(&temp_root).expect("temp root");
    let file = temp_root.join(SETTINGS_FILE);
    fs::write(&file, "api_url = [not toml\n").expect("write settings");

    let settings = load_settings_from(&file, no_env).expect("load");
    assert_eq!(settings.api_url, DEFAULT_API_URL);
    assert_eq!(settings.log_filter, DEFAULT_LOG_FILTER);
    assert_eq!(settings.warnings.len(), 1);
    assert!(
        settings.warnings[0].starts_with("ignoring unreadable"),
        "{:?}",
        settings.warnings
    );
    assert!(settings.warnings[0].contains(SETTINGS_FILE));

    fs::remove_dir_all(temp_root).expect("cleanup");
}

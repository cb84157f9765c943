use std::{fs, path::Path};

use serde::Deserialize;
use url::Url;

use crate::error::SettingsError;

pub const DEFAULT_API_URL: &str = "https://dummyjson.com/products";
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const SETTINGS_FILE: &str = "catalog.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub api_url: String,
    pub log_filter: String,
    /// Problems met while loading. Settings load before logging is set up,
    /// so callers report these once their subscriber is installed.
    pub warnings: Vec<String>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            log_filter: DEFAULT_LOG_FILTER.into(),
            warnings: Vec::new(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    api_url: Option<String>,
    log_filter: Option<String>,
}

/// Defaults, then `catalog.toml` in the working directory, then the environment.
pub fn load_settings() -> Result<ClientSettings, SettingsError> {
    load_settings_from(Path::new(SETTINGS_FILE), |name| std::env::var(name).ok())
}

pub fn load_settings_from(
    file: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ClientSettings, SettingsError> {
    let mut settings = ClientSettings::default();

    if let Ok(raw) = fs::read_to_string(file) {
        if let Err(err) = apply_file_overrides(&mut settings, &raw) {
            settings
                .warnings
                .push(format!("ignoring unreadable {}: {err}", file.display()));
        }
    }
    apply_env_overrides(&mut settings, env);

    settings.api_url = normalize_api_url(&settings.api_url)?;
    Ok(settings)
}

fn apply_file_overrides(
    settings: &mut ClientSettings,
    raw: &str,
) -> Result<(), toml::de::Error> {
    let file_cfg = toml::from_str::<FileSettings>(raw)?;

    if let Some(v) = file_cfg.api_url {
        settings.api_url = v;
    }
    if let Some(v) = file_cfg.log_filter {
        settings.log_filter = v;
    }
    Ok(())
}

fn apply_env_overrides(settings: &mut ClientSettings, env: impl Fn(&str) -> Option<String>) {
    if let Some(v) = env("CATALOG_API_URL") {
        settings.api_url = v;
    }
    if let Some(v) = env("APP__API_URL") {
        settings.api_url = v;
    }

    if let Some(v) = env("CATALOG_LOG") {
        settings.log_filter = v;
    }
    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
}

pub fn normalize_api_url(raw_api_url: &str) -> Result<String, SettingsError> {
    let trimmed = raw_api_url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(DEFAULT_API_URL.to_string());
    }

    let parsed = Url::parse(trimmed).map_err(|err| SettingsError::InvalidApiUrl {
        url: raw_api_url.to_string(),
        reason: err.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(SettingsError::InvalidApiUrl {
            url: raw_api_url.to_string(),
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;

use color_eyre::eyre::eyre;
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://localhost:7860";
pub const DEFAULT_LOG_FILE: &str = "ner-dashboard.log";

/// Runtime settings resolved from `.env`, the environment and CLI overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL that `/metrics` and `/api/predict` are relative to
    pub api_url: String,
    pub log_file: PathBuf,
    pub debug: bool,
}

impl Config {
    /// Loads `.env` (if present) and reads `API_URL`, `LOG_FILE` and `DEBUG`.
    pub fn from_env() -> color_eyre::eyre::Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> color_eyre::eyre::Result<Self> {
        let api_url = lookup("API_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(eyre!("API_URL must be an http(s) URL, got {api_url:?}"));
        }

        let log_file = lookup("LOG_FILE")
            .filter(|path| !path.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_LOG_FILE), PathBuf::from);

        let debug = lookup("DEBUG").is_some_and(|value| is_truthy(&value));

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            log_file,
            debug,
        })
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

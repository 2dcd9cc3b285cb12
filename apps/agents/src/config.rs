use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_ASI1_API_URL: &str = "https://api.asi1.ai/v1";
const DEFAULT_JSEARCH_API_HOST: &str = "jsearch.p.rapidapi.com";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub asi1_api_key: String,
    pub asi1_api_url: String,
    pub llm_max_retries: u32,
    pub llm_retry_delay: Duration,
    pub jsearch_api_key: Option<String>,
    pub jsearch_api_host: String,
    pub analysis_cache_ttl: Duration,
    /// Substitute a default analysis when the LLM is unreachable.
    pub analyzer_offline_fallback: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_source(|key| std::env::var(key).ok())
    }

    fn from_source(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let require = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .with_context(|| format!("Required environment variable '{key}' is not set"))
        };

        Ok(Config {
            asi1_api_key: require("ASI1_API_KEY")?,
            asi1_api_url: lookup("ASI1_API_URL")
                .unwrap_or_else(|| DEFAULT_ASI1_API_URL.to_string()),
            llm_max_retries: parse_or(&lookup, "LLM_MAX_RETRIES", 3)?,
            llm_retry_delay: Duration::from_millis(parse_or(&lookup, "LLM_RETRY_DELAY_MS", 1000)?),
            jsearch_api_key: lookup("JSEARCH_API_KEY").filter(|v| !v.trim().is_empty()),
            jsearch_api_host: lookup("JSEARCH_API_HOST")
                .unwrap_or_else(|| DEFAULT_JSEARCH_API_HOST.to_string()),
            analysis_cache_ttl: Duration::from_secs(parse_or(
                &lookup,
                "ANALYSIS_CACHE_TTL_SECS",
                3600,
            )?),
            analyzer_offline_fallback: parse_or(&lookup, "ANALYZER_OFFLINE_FALLBACK", true)?,
            port: parse_or(&lookup, "PORT", 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn jsearch_base_url(&self) -> String {
        format!("https://{}", self.jsearch_api_host)
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value: '{raw}'")),
        None => Ok(default),
    }
}

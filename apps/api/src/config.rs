use std::time::Duration;

use thiserror::Error;

use crate::documents::PageMode;
use crate::llm_client::{DEFAULT_API_URL, DEFAULT_MODEL};

const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Startup configuration failure. Fatal: the server never starts serving.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Required environment variable '{0}' is not set")]
    Missing(&'static str),

    #[error("Environment variable '{key}' is invalid: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Application configuration loaded from environment variables.
/// Startup fails if the API key is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub llm_model: String,
    pub llm_api_url: String,
    pub llm_timeout: Duration,
    pub pdf_page_mode: PageMode,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` delegates here.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let anthropic_api_key =
            var("ANTHROPIC_API_KEY").ok_or(ConfigError::Missing("ANTHROPIC_API_KEY"))?;

        let llm_timeout_secs = match var("LLM_TIMEOUT_SECS") {
            Some(raw) => parse_number::<u64>("LLM_TIMEOUT_SECS", &raw)?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if llm_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "LLM_TIMEOUT_SECS",
                message: "must be greater than zero".to_string(),
            });
        }

        let pdf_page_mode = match var("PDF_PAGE_MODE") {
            Some(raw) => raw.parse::<PageMode>().map_err(|message| ConfigError::Invalid {
                key: "PDF_PAGE_MODE",
                message,
            })?,
            None => PageMode::default(),
        };

        Ok(Config {
            anthropic_api_key,
            llm_model: var("LLM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            llm_api_url: var("LLM_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            llm_timeout: Duration::from_secs(llm_timeout_secs),
            pdf_page_mode,
            max_upload_bytes: match var("MAX_UPLOAD_BYTES") {
                Some(raw) => parse_number::<usize>("MAX_UPLOAD_BYTES", &raw)?,
                None => DEFAULT_MAX_UPLOAD_BYTES,
            },
            port: match var("PORT") {
                Some(raw) => parse_number::<u16>("PORT", &raw)?,
                None => 8000,
            },
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_number<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
        key,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("ANTHROPIC_API_KEY")));
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let err = Config::from_lookup(lookup_from(&[("ANTHROPIC_API_KEY", "   ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(_)));
    }

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_lookup(lookup_from(&[("ANTHROPIC_API_KEY", "sk-test")])).unwrap();
        assert_eq!(config.anthropic_api_key, "sk-test");
        assert_eq!(config.llm_model, DEFAULT_MODEL);
        assert_eq!(config.llm_api_url, DEFAULT_API_URL);
        assert_eq!(config.llm_timeout, Duration::from_secs(60));
        assert_eq!(config.pdf_page_mode, PageMode::FirstPage);
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(config.port, 8000);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_overrides_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("ANTHROPIC_API_KEY", "sk-test"),
            ("LLM_MODEL", "claude-haiku-4-5"),
            ("LLM_TIMEOUT_SECS", "15"),
            ("PDF_PAGE_MODE", "all"),
            ("PORT", "9090"),
        ]))
        .unwrap();
        assert_eq!(config.llm_model, "claude-haiku-4-5");
        assert_eq!(config.llm_timeout, Duration::from_secs(15));
        assert_eq!(config.pdf_page_mode, PageMode::AllPages);
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn test_invalid_port_rejected() {
        let err = Config::from_lookup(lookup_from(&[
            ("ANTHROPIC_API_KEY", "sk-test"),
            ("PORT", "not-a-port"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = Config::from_lookup(lookup_from(&[
            ("ANTHROPIC_API_KEY", "sk-test"),
            ("LLM_TIMEOUT_SECS", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "LLM_TIMEOUT_SECS",
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_page_mode_rejected() {
        let err = Config::from_lookup(lookup_from(&[
            ("ANTHROPIC_API_KEY", "sk-test"),
            ("PDF_PAGE_MODE", "middle"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "PDF_PAGE_MODE",
                ..
            }
        ));
    }
}

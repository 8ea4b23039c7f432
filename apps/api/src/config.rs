use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_AI_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
pub const DEFAULT_AI_MODEL: &str = "google/gemini-2.5-flash";
const DEFAULT_AI_TIMEOUT_SECS: u64 = 60;

/// Application configuration loaded from environment variables.
///
/// `ai_api_key` is optional at startup: a missing key is reported per request
/// as a configuration fault instead of refusing to boot.
#[derive(Debug, Clone)]
pub struct Config {
    pub ai_api_key: Option<String>,
    pub ai_gateway_url: String,
    pub ai_model: String,
    pub ai_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. `from_env` passes the process
    /// environment; tests pass a map.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        // Empty or whitespace-only values count as unset.
        let optional = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Ok(Config {
            ai_api_key: optional("AI_API_KEY"),
            ai_gateway_url: optional("AI_GATEWAY_URL")
                .unwrap_or_else(|| DEFAULT_AI_GATEWAY_URL.to_string()),
            ai_model: optional("AI_MODEL").unwrap_or_else(|| DEFAULT_AI_MODEL.to_string()),
            ai_timeout: Duration::from_secs(
                optional("AI_TIMEOUT_SECS")
                    .map(|v| v.parse::<u64>())
                    .transpose()
                    .context("AI_TIMEOUT_SECS must be a whole number of seconds")?
                    .unwrap_or(DEFAULT_AI_TIMEOUT_SECS),
            ),
            port: optional("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.ai_api_key, None);
        assert_eq!(config.ai_gateway_url, DEFAULT_AI_GATEWAY_URL);
        assert_eq!(config.ai_model, DEFAULT_AI_MODEL);
        assert_eq!(config.ai_timeout, Duration::from_secs(60));
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_blank_api_key_is_unset() {
        let config = config_from(&[("AI_API_KEY", "   ")]).unwrap();
        assert_eq!(config.ai_api_key, None);
    }

    #[test]
    fn test_api_key_is_trimmed() {
        let config = config_from(&[("AI_API_KEY", " sk-test \n")]).unwrap();
        assert_eq!(config.ai_api_key.as_deref(), Some("sk-test"));
    }

    #[test]
    fn test_timeout_is_parsed() {
        let config = config_from(&[("AI_TIMEOUT_SECS", "5")]).unwrap();
        assert_eq!(config.ai_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_non_numeric_timeout_is_an_error() {
        let err = config_from(&[("AI_TIMEOUT_SECS", "soon")]).unwrap_err();
        assert!(err.to_string().contains("AI_TIMEOUT_SECS"));
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = config_from(&[("PORT", "99999")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}

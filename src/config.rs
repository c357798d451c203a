use crate::error::{env_error, DigestResult};
use chrono_tz::Tz;
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_CALENDAR_URL: &str = "https://www.sefaria.org/api/calendars";
pub const DEFAULT_TEXTS_URL: &str = "https://www.sefaria.org/api/v3/texts";
pub const DEFAULT_COMPLETION_URL: &str = "https://api.deepseek.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "deepseek-chat";
pub const DEFAULT_TEMPERATURE: f32 = 0.4;
pub const DEFAULT_MAX_TOKENS: u32 = 1000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PORT: u16 = 5001;

/// Path of the optional summarizer overrides file
pub const SUMMARIZER_CONFIG_PATH: &str = "config/summarizer.toml";

/// Main configuration structure for the service
#[derive(Debug, Clone)]
pub struct Config {
    /// Chat-completion API key; summarization fails with a config error without it
    pub deepseek_api_key: Option<String>,
    /// Chat-completion endpoint
    pub completion_url: String,
    /// Model identifier sent with each completion request
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Sefaria calendar endpoint
    pub calendar_url: String,
    /// Sefaria texts endpoint, a reference is appended as a path segment
    pub texts_url: String,
    /// Timezone used to work out "tomorrow" for calendar lookups
    pub timezone: String,
    /// Per-call timeout for every outbound request
    pub request_timeout: Duration,
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            deepseek_api_key: None,
            completion_url: DEFAULT_COMPLETION_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            calendar_url: DEFAULT_CALENDAR_URL.to_string(),
            texts_url: DEFAULT_TEXTS_URL.to_string(),
            timezone: "UTC".to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Overrides read from `config/summarizer.toml`
#[derive(Debug, Default, Deserialize)]
pub struct SummarizerOverrides {
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> DigestResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let mut config = Self::from_lookup(|key| env::var(key).ok())?;

        if Path::new(SUMMARIZER_CONFIG_PATH).exists() {
            let content = fs::read_to_string(SUMMARIZER_CONFIG_PATH)?;
            config.apply_overrides(toml::from_str(&content)?);
        }

        Ok(config)
    }

    /// Build a config from any key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> DigestResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let deepseek_api_key = lookup("DEEPSEEK_API_KEY").filter(|key| !key.trim().is_empty());

        let timezone = lookup("TIMEZONE").unwrap_or(defaults.timezone);
        timezone.parse::<Tz>().map_err(|_| env_error("TIMEZONE"))?;

        let request_timeout = match lookup("HTTP_TIMEOUT_SECS") {
            Some(value) => Duration::from_secs(
                value
                    .parse::<u64>()
                    .map_err(|_| env_error("HTTP_TIMEOUT_SECS"))?,
            ),
            None => defaults.request_timeout,
        };

        let port = match lookup("PORT") {
            Some(value) => value.parse::<u16>().map_err(|_| env_error("PORT"))?,
            None => defaults.port,
        };

        Ok(Config {
            deepseek_api_key,
            completion_url: lookup("DEEPSEEK_API_URL").unwrap_or(defaults.completion_url),
            model: lookup("DEEPSEEK_MODEL").unwrap_or(defaults.model),
            temperature: defaults.temperature,
            max_tokens: defaults.max_tokens,
            calendar_url: lookup("SEFARIA_CALENDAR_URL").unwrap_or(defaults.calendar_url),
            texts_url: lookup("SEFARIA_TEXTS_URL").unwrap_or(defaults.texts_url),
            timezone,
            request_timeout,
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
        })
    }

    /// Merge file overrides on top of the current values
    pub fn apply_overrides(&mut self, overrides: SummarizerOverrides) {
        if let Some(model) = overrides.model {
            self.model = model;
        }
        if let Some(temperature) = overrides.temperature {
            self.temperature = temperature;
        }
        if let Some(max_tokens) = overrides.max_tokens {
            self.max_tokens = max_tokens;
        }
    }

    /// Parsed timezone; validated in `from_lookup`, so UTC only covers hand-built configs
    pub fn tz(&self) -> Tz {
        self.timezone.parse::<Tz>().unwrap_or(Tz::UTC)
    }
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
    fn defaults_apply_when_nothing_is_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert!(config.deepseek_api_key.is_none());
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let config = Config::from_lookup(lookup_from(&[("DEEPSEEK_API_KEY", "  ")])).unwrap();
        assert!(config.deepseek_api_key.is_none());
    }

    #[test]
    fn invalid_numbers_and_timezones_are_rejected() {
        assert!(Config::from_lookup(lookup_from(&[("PORT", "http")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("HTTP_TIMEOUT_SECS", "-1")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("TIMEZONE", "Mars/Olympus")])).is_err());
    }

    #[test]
    fn file_overrides_replace_summarizer_settings() {
        let mut config = Config::default();
        let overrides: SummarizerOverrides =
            toml::from_str("model = \"deepseek-reasoner\"\nmax_tokens = 400").unwrap();
        config.apply_overrides(overrides);
        assert_eq!(config.model, "deepseek-reasoner");
        assert_eq!(config.max_tokens, 400);
        assert_eq!(config.temperature, DEFAULT_TEMPERATURE);
    }
}

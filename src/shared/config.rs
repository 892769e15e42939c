use crate::shared::errors::{AppError, AppResult};

pub const DEFAULT_REST_URL: &str = "http://danceconvention.net/eventdirector/rest/eventinfo";
pub const DEFAULT_EVENTPAGE_URL: &str = "http://danceconvention.net/eventdirector";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = "dcnet/0.1 (+https://github.com/danceconvention/dcnet-public)";

/// Endpoint and client settings for talking to danceconvention.net
///
/// Defaults point at the production service. Every field can be overridden
/// from the environment (or a `.env` file) through [`DcnetConfig::from_env`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DcnetConfig {
    /// Base of the REST `eventinfo` resources, without trailing slash
    pub rest_base_url: String,
    /// Base of the HTML event pages, without trailing slash
    pub event_page_base_url: String,
    /// Language segment of the event page URL
    pub language: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for DcnetConfig {
    fn default() -> Self {
        Self {
            rest_base_url: DEFAULT_REST_URL.to_string(),
            event_page_base_url: DEFAULT_EVENTPAGE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl DcnetConfig {
    /// Load configuration from the process environment, reading `.env` first
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = non_empty(lookup("DCNET_REST_URL")) {
            config.rest_base_url = url;
        }
        if let Some(url) = non_empty(lookup("DCNET_EVENTPAGE_URL")) {
            config.event_page_base_url = url;
        }
        if let Some(language) = non_empty(lookup("DCNET_LANGUAGE")) {
            config.language = language;
        }
        if let Some(timeout) = non_empty(lookup("DCNET_TIMEOUT_SECS")) {
            config.timeout_secs = timeout.parse::<u64>().map_err(|e| {
                AppError::ConfigError(format!("DCNET_TIMEOUT_SECS '{}': {}", timeout, e))
            })?;
        }
        if let Some(user_agent) = non_empty(lookup("DCNET_USER_AGENT")) {
            config.user_agent = user_agent;
        }

        Ok(config.normalized())
    }

    /// Override the event page language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    fn normalized(mut self) -> Self {
        self.rest_base_url = self.rest_base_url.trim_end_matches('/').to_string();
        self.event_page_base_url = self.event_page_base_url.trim_end_matches('/').to_string();
        self
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
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
    fn test_defaults_when_environment_empty() {
        let config = DcnetConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, DcnetConfig::default());
        assert_eq!(config.language, "en");
    }

    #[test]
    fn test_overrides_and_trailing_slash() {
        let config = DcnetConfig::from_lookup(lookup_from(&[
            ("DCNET_REST_URL", "http://localhost:8080/rest/eventinfo/"),
            ("DCNET_LANGUAGE", "ru"),
            ("DCNET_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.rest_base_url, "http://localhost:8080/rest/eventinfo");
        assert_eq!(config.event_page_base_url, DEFAULT_EVENTPAGE_URL);
        assert_eq!(config.language, "ru");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = DcnetConfig::from_lookup(lookup_from(&[("DCNET_LANGUAGE", "  ")])).unwrap();
        assert_eq!(config.language, DEFAULT_LANGUAGE);
    }

    #[test]
    fn test_invalid_timeout_is_config_error() {
        let result = DcnetConfig::from_lookup(lookup_from(&[("DCNET_TIMEOUT_SECS", "soon")]));
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }
}

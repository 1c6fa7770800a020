//! Configuration options for the UI controller.

use std::str::FromStr;

use data_model_deck::Endpoint;
use url::Url;

use crate::errors::ConfigError;

/// Lookup key for the API root. Unset means endpoints are relative to the page.
pub const API_BASE_URL_KEY: &str = "api-base-url";
/// Lookup key for [`StalePolicy`].
pub const STALE_RESPONSES_KEY: &str = "stale-responses";
/// Lookup key for the value pre-filled in the topic prompt.
pub const DEFAULT_TOPIC_KEY: &str = "default-topic";
/// Lookup key for the tracing filter directives.
pub const LOG_FILTER_KEY: &str = "log-filter";

pub const DEFAULT_TOPIC: &str = "The Future of AI";
pub const DEFAULT_LOG_FILTER: &str = "front_deck=debug,core_deck=debug";

/// What to do with the outcome of a request that is no longer the most recent one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StalePolicy {
    /// Only the most recently issued request may render. Older outcomes are dropped.
    Discard,
    /// Every outcome renders as it arrives, so the last request to resolve wins.
    #[default]
    Render,
}

impl FromStr for StalePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "discard" => Ok(Self::Discard),
            "render" => Ok(Self::Render),
            _ => Err(ConfigError::InvalidStalePolicy(s.to_string())),
        }
    }
}

/// Configuration options for the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Root that endpoints and relative download links are resolved against.
    pub api_base_url: Option<Url>,
    pub stale_responses: StalePolicy,
    /// Value pre-filled in the topic prompt.
    pub default_topic: String,
    /// Tracing filter directives used when logging is installed.
    pub log_filter: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            stale_responses: StalePolicy::default(),
            default_topic: DEFAULT_TOPIC.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ControllerConfig {
    /// Creates a new builder for ControllerConfig.
    pub fn builder() -> ControllerConfigBuilder {
        ControllerConfigBuilder::default()
    }

    /// Reads every option through `lookup`. Missing or blank values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let mut builder = Self::builder();
        if let Some(base) = value(API_BASE_URL_KEY) {
            builder = builder.api_base_url(parse_base_url(&base)?);
        }
        if let Some(policy) = value(STALE_RESPONSES_KEY) {
            builder = builder.stale_responses(policy.parse()?);
        }
        if let Some(topic) = value(DEFAULT_TOPIC_KEY) {
            builder = builder.default_topic(topic);
        }
        if let Some(filter) = value(LOG_FILTER_KEY) {
            builder = builder.log_filter(filter);
        }
        Ok(builder.build())
    }

    /// Where a request for `endpoint` is sent.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        match &self.api_base_url {
            Some(base) => base
                .join(endpoint.path().trim_start_matches('/'))
                .map(String::from)
                .unwrap_or_else(|_| endpoint.path().to_string()),
            None => endpoint.path().to_string(),
        }
    }

    /// Resolves a download link from the server against the API root.
    /// Absolute links, and every link when no root is configured, are returned unchanged.
    pub fn resolve_download_url(&self, href: &str) -> String {
        match &self.api_base_url {
            Some(base) => base.join(href).map(String::from).unwrap_or_else(|_| href.to_string()),
            None => href.to_string(),
        }
    }
}

/// Parses an API root. The path always ends with `/` so endpoints are joined beneath it.
pub fn parse_base_url(value: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(value).map_err(|source| ConfigError::InvalidBaseUrl {
        value: value.to_string(),
        source,
    })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::UnusableBaseUrl(value.to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Builder for ControllerConfig.
#[derive(Debug, Clone, Default)]
pub struct ControllerConfigBuilder {
    api_base_url: Option<Url>,
    stale_responses: Option<StalePolicy>,
    default_topic: Option<String>,
    log_filter: Option<String>,
}

impl ControllerConfigBuilder {
    /// Sets the API root.
    pub fn api_base_url(mut self, url: Url) -> Self {
        self.api_base_url = Some(url);
        self
    }

    /// Sets how outcomes of superseded requests are handled.
    pub fn stale_responses(mut self, policy: StalePolicy) -> Self {
        self.stale_responses = Some(policy);
        self
    }

    /// Sets the value pre-filled in the topic prompt.
    pub fn default_topic(mut self, topic: String) -> Self {
        self.default_topic = Some(topic);
        self
    }

    /// Sets the tracing filter directives.
    pub fn log_filter(mut self, filter: String) -> Self {
        self.log_filter = Some(filter);
        self
    }

    /// Builds the ControllerConfig.
    pub fn build(self) -> ControllerConfig {
        ControllerConfig {
            api_base_url: self.api_base_url,
            stale_responses: self.stale_responses.unwrap_or_default(),
            default_topic: self.default_topic.unwrap_or_else(|| DEFAULT_TOPIC.to_string()),
            log_filter: self.log_filter.unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_configured() {
        let config = ControllerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ControllerConfig::default());
        assert_eq!(config.default_topic, "The Future of AI");
        assert_eq!(config.stale_responses, StalePolicy::Render);
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config = ControllerConfig::from_lookup(lookup_from(&[
            (API_BASE_URL_KEY, "   "),
            (DEFAULT_TOPIC_KEY, ""),
        ]))
        .unwrap();
        assert_eq!(config, ControllerConfig::default());
    }

    #[test]
    fn test_reads_every_key() {
        let config = ControllerConfig::from_lookup(lookup_from(&[
            (API_BASE_URL_KEY, "https://api.example.com/v1"),
            (STALE_RESPONSES_KEY, "Discard"),
            (DEFAULT_TOPIC_KEY, "Rust"),
            (LOG_FILTER_KEY, "core_deck=trace"),
        ]))
        .unwrap();
        assert_eq!(config.api_base_url.unwrap().as_str(), "https://api.example.com/v1/");
        assert_eq!(config.stale_responses, StalePolicy::Discard);
        assert_eq!(config.default_topic, "Rust");
        assert_eq!(config.log_filter, "core_deck=trace");
    }

    #[test]
    fn test_rejects_invalid_values() {
        let result = ControllerConfig::from_lookup(lookup_from(&[(API_BASE_URL_KEY, "not a url")]));
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));

        let result = ControllerConfig::from_lookup(lookup_from(&[(API_BASE_URL_KEY, "mailto:me@example.com")]));
        assert!(matches!(result, Err(ConfigError::UnusableBaseUrl(_))));

        let result = ControllerConfig::from_lookup(lookup_from(&[(STALE_RESPONSES_KEY, "sometimes")]));
        assert!(matches!(result, Err(ConfigError::InvalidStalePolicy(_))));
    }

    #[test]
    fn test_endpoint_url_is_page_relative_without_base() {
        let config = ControllerConfig::default();
        assert_eq!(config.endpoint_url(Endpoint::Generate), "/generate");
        assert_eq!(config.endpoint_url(Endpoint::GenerateFromUrl), "/generate-from-url");
    }

    #[test]
    fn test_endpoint_url_nests_under_base_path() {
        let config = ControllerConfig::builder()
            .api_base_url(parse_base_url("http://127.0.0.1:5000/app").unwrap())
            .build();
        assert_eq!(
            config.endpoint_url(Endpoint::GenerateFromText),
            "http://127.0.0.1:5000/app/generate-from-text"
        );
    }

    #[test]
    fn test_resolve_download_url() {
        let config = ControllerConfig::default();
        assert_eq!(config.resolve_download_url("/files/x.pptx"), "/files/x.pptx");

        let config = ControllerConfig::builder()
            .api_base_url(parse_base_url("http://127.0.0.1:5000/").unwrap())
            .build();
        assert_eq!(
            config.resolve_download_url("/static/outputs/presentation.pptx"),
            "http://127.0.0.1:5000/static/outputs/presentation.pptx"
        );
        assert_eq!(
            config.resolve_download_url("https://cdn.example.com/x.pptx"),
            "https://cdn.example.com/x.pptx"
        );
    }
}

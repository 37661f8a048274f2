use std::env;

use crate::ValidationError;

pub const DEFAULT_SPARK_URL: &str = "https://query1.finance.yahoo.com/v7/finance/spark";
pub const DEFAULT_QUOTE_URL: &str = "https://query1.finance.yahoo.com/v7/finance/quote";
pub const DEFAULT_SEARCH_URL: &str =
    "https://de.finance.yahoo.com/_finance_doubledown/api/resource/searchassist";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_USER_AGENT: &str = concat!("perftrack/", env!("CARGO_PKG_VERSION"));

/// Endpoints and transport settings for the Yahoo adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub spark_url: String,
    pub quote_url: String,
    pub search_url: String,
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            spark_url: String::from(DEFAULT_SPARK_URL),
            quote_url: String::from(DEFAULT_QUOTE_URL),
            search_url: String::from(DEFAULT_SEARCH_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: String::from(DEFAULT_USER_AGENT),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `PERFTRACK_*` environment variables.
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ValidationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("PERFTRACK_SPARK_URL") {
            config.spark_url = url;
        }
        if let Some(url) = lookup("PERFTRACK_QUOTE_URL") {
            config.quote_url = url;
        }
        if let Some(url) = lookup("PERFTRACK_SEARCH_URL") {
            config.search_url = url;
        }
        if let Some(agent) = lookup("PERFTRACK_USER_AGENT") {
            config.user_agent = agent;
        }
        if let Some(raw) = lookup("PERFTRACK_TIMEOUT_MS") {
            config.timeout_ms = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or(ValidationError::InvalidConfig {
                    key: "PERFTRACK_TIMEOUT_MS",
                    value: raw,
                })?;
        }

        Ok(config)
    }

    pub fn with_spark_url(mut self, url: impl Into<String>) -> Self {
        self.spark_url = url.into();
        self
    }

    pub fn with_quote_url(mut self, url: impl Into<String>) -> Self {
        self.quote_url = url.into();
        self
    }

    pub fn with_search_url(mut self, url: impl Into<String>) -> Self {
        self.search_url = url.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[])).expect("defaults are valid");
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.spark_url, DEFAULT_SPARK_URL);
    }

    #[test]
    fn environment_overrides_endpoints_and_timeout() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("PERFTRACK_QUOTE_URL", "http://localhost:8080/quote"),
            ("PERFTRACK_TIMEOUT_MS", "2500"),
        ]))
        .expect("must parse");

        assert_eq!(config.quote_url, "http://localhost:8080/quote");
        assert_eq!(config.timeout_ms, 2_500);
        assert_eq!(config.search_url, DEFAULT_SEARCH_URL);
    }

    #[test]
    fn rejects_unparsable_or_zero_timeout() {
        for raw in ["soon", "0"] {
            let err = ClientConfig::from_lookup(lookup(&[("PERFTRACK_TIMEOUT_MS", raw)]))
                .expect_err("must fail");
            assert!(matches!(
                err,
                ValidationError::InvalidConfig {
                    key: "PERFTRACK_TIMEOUT_MS",
                    ..
                }
            ));
        }
    }
}

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "https://opentdb.com/";
pub const DEFAULT_AMOUNT: u8 = 10;
pub const MAX_AMOUNT: u8 = 50;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Question format requested from the source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    #[default]
    Multiple,
    Boolean,
}

impl QuestionKind {
    /// Value of the `type` query parameter.
    #[must_use]
    pub fn as_query(self) -> &'static str {
        match self {
            QuestionKind::Multiple => "multiple",
            QuestionKind::Boolean => "boolean",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query())
    }
}

impl FromStr for QuestionKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "multiple" => Ok(Self::Multiple),
            "boolean" => Ok(Self::Boolean),
            _ => Err(ConfigError::InvalidKind { raw: s.to_string() }),
        }
    }
}

/// Where questions come from and how many are asked per quiz.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizConfig {
    api_base_url: Url,
    amount: u8,
    kind: QuestionKind,
    timeout: Duration,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_base_url(),
            amount: DEFAULT_AMOUNT,
            kind: QuestionKind::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl QuizConfig {
    /// Read overrides from `TRIVIA_API_URL`, `TRIVIA_AMOUNT`, `TRIVIA_TYPE` and
    /// `TRIVIA_TIMEOUT_SECS`. Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`QuizConfig::from_env`] with an injectable variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a looked-up value is invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(raw) = non_blank(lookup("TRIVIA_API_URL")) {
            config = config.with_api_base_url(&raw)?;
        }
        if let Some(raw) = non_blank(lookup("TRIVIA_AMOUNT")) {
            config = config.with_amount(parse_amount(&raw)?)?;
        }
        if let Some(raw) = non_blank(lookup("TRIVIA_TYPE")) {
            config = config.with_kind(raw.parse()?);
        }
        if let Some(raw) = non_blank(lookup("TRIVIA_TIMEOUT_SECS")) {
            config = config.with_timeout(parse_timeout(&raw)?);
        }
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` unless `raw` is an absolute http(s) URL.
    pub fn with_api_base_url(mut self, raw: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidUrl {
            raw: raw.to_string(),
        };
        let mut url = Url::parse(raw.trim()).map_err(|_| invalid())?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid());
        }
        // Endpoints are joined relative to the base, which needs a trailing slash.
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        self.api_base_url = url;
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidAmount` when `amount` is outside `1..=50`.
    pub fn with_amount(mut self, amount: u8) -> Result<Self, ConfigError> {
        if amount == 0 || amount > MAX_AMOUNT {
            return Err(ConfigError::InvalidAmount {
                raw: amount.to_string(),
            });
        }
        self.amount = amount;
        Ok(self)
    }

    #[must_use]
    pub fn with_kind(mut self, kind: QuestionKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn api_base_url(&self) -> &Url {
        &self.api_base_url
    }

    #[must_use]
    pub fn amount(&self) -> u8 {
        self.amount
    }

    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Parse a question amount as given on the command line or in the environment.
///
/// # Errors
///
/// Returns `ConfigError::InvalidAmount` for non-numeric or out-of-range input.
pub fn parse_amount(raw: &str) -> Result<u8, ConfigError> {
    raw.trim()
        .parse::<u8>()
        .ok()
        .filter(|amount| (1..=MAX_AMOUNT).contains(amount))
        .ok_or_else(|| ConfigError::InvalidAmount {
            raw: raw.to_string(),
        })
}

/// Parse a positive timeout in whole seconds.
///
/// # Errors
///
/// Returns `ConfigError::InvalidTimeout` for zero or non-numeric input.
pub fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .ok_or_else(|| ConfigError::InvalidTimeout {
            raw: raw.to_string(),
        })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn default_base_url() -> Url {
    match Url::parse(DEFAULT_API_BASE_URL) {
        Ok(url) => url,
        Err(_) => unreachable!("default base URL is a valid literal"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_open_trivia_db() {
        let config = QuizConfig::default();
        assert_eq!(config.api_base_url().as_str(), "https://opentdb.com/");
        assert_eq!(config.amount(), 10);
        assert_eq!(config.kind(), QuestionKind::Multiple);
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = QuizConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, QuizConfig::default());
    }

    #[test]
    fn environment_overrides_apply() {
        let config = QuizConfig::from_lookup(lookup_from(&[
            ("TRIVIA_API_URL", "http://localhost:8080/trivia"),
            ("TRIVIA_AMOUNT", "5"),
            ("TRIVIA_TYPE", "Boolean"),
            ("TRIVIA_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();

        assert_eq!(
            config.api_base_url().as_str(),
            "http://localhost:8080/trivia/"
        );
        assert_eq!(config.amount(), 5);
        assert_eq!(config.kind(), QuestionKind::Boolean);
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn blank_values_are_ignored() {
        let config =
            QuizConfig::from_lookup(lookup_from(&[("TRIVIA_AMOUNT", "  ")])).unwrap();
        assert_eq!(config.amount(), DEFAULT_AMOUNT);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            QuizConfig::from_lookup(lookup_from(&[("TRIVIA_API_URL", "ftp://x")])),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            QuizConfig::from_lookup(lookup_from(&[("TRIVIA_AMOUNT", "0")])),
            Err(ConfigError::InvalidAmount { .. })
        ));
        assert!(matches!(
            QuizConfig::from_lookup(lookup_from(&[("TRIVIA_AMOUNT", "51")])),
            Err(ConfigError::InvalidAmount { .. })
        ));
        assert!(matches!(
            QuizConfig::from_lookup(lookup_from(&[("TRIVIA_TYPE", "essay")])),
            Err(ConfigError::InvalidKind { .. })
        ));
        assert!(matches!(
            QuizConfig::from_lookup(lookup_from(&[("TRIVIA_TIMEOUT_SECS", "0")])),
            Err(ConfigError::InvalidTimeout { .. })
        ));
    }

    #[test]
    fn with_amount_enforces_bounds() {
        assert!(QuizConfig::default().with_amount(50).is_ok());
        assert!(QuizConfig::default().with_amount(0).is_err());
    }
}

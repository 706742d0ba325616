//! Client configuration.
//!
//! [`InstanceConfig`] and [`PartnerConfig`] carry credentials and hosts;
//! [`HttpConfig`] carries transport settings shared by both.

use std::collections::HashMap;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::error::{GreenApiError, Result};

/// HTTP transport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Whole-request timeout.
    #[serde(with = "duration_option_serde")]
    pub timeout: Option<Duration>,
    /// Connection timeout.
    #[serde(with = "duration_option_serde")]
    pub connect_timeout: Option<Duration>,
    /// Headers added to every request.
    pub headers: HashMap<String, String>,
    /// Proxy URL for all traffic.
    pub proxy: Option<String>,
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(defaults::http::REQUEST_TIMEOUT),
            connect_timeout: Some(defaults::http::CONNECT_TIMEOUT),
            headers: HashMap::new(),
            proxy: None,
            user_agent: Some(defaults::http::USER_AGENT.to_string()),
        }
    }
}

impl HttpConfig {
    pub fn builder() -> HttpConfigBuilder {
        HttpConfigBuilder::new()
    }

    /// Extra headers as a [`HeaderMap`](reqwest::header::HeaderMap).
    /// A name or value that is not valid HTTP is a configuration error.
    pub(crate) fn header_map(&self) -> Result<reqwest::header::HeaderMap> {
        use reqwest::header::{HeaderName, HeaderValue};

        self.headers
            .iter()
            .map(|(name, value)| {
                let header = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                    GreenApiError::Configuration(format!("header {name:?} has an invalid name: {e}"))
                })?;
                let value = HeaderValue::from_str(value).map_err(|e| {
                    GreenApiError::Configuration(format!("header {name:?} has an invalid value: {e}"))
                })?;
                Ok((header, value))
            })
            .collect()
    }
}

/// Builder for [`HttpConfig`]. Unset values fall back to the defaults.
#[derive(Debug, Clone, Default)]
pub struct HttpConfigBuilder {
    timeout: Option<Option<Duration>>,
    connect_timeout: Option<Option<Duration>>,
    headers: HashMap<String, String>,
    proxy: Option<String>,
    user_agent: Option<Option<String>>,
}

impl HttpConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` disables the request timeout.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = Some(timeout);
        self
    }
    pub fn connect_timeout(mut self, connect_timeout: Option<Duration>) -> Self {
        self.connect_timeout = Some(connect_timeout);
        self
    }
    pub fn user_agent<S: Into<String>>(mut self, user_agent: Option<S>) -> Self {
        self.user_agent = Some(user_agent.map(Into::into));
        self
    }
    pub fn proxy<S: Into<String>>(mut self, proxy: S) -> Self {
        self.proxy = Some(proxy.into());
        self
    }
    pub fn header<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers.extend(headers);
        self
    }

    pub fn build(self) -> HttpConfig {
        let base = HttpConfig::default();
        HttpConfig {
            timeout: self.timeout.unwrap_or(base.timeout),
            connect_timeout: self.connect_timeout.unwrap_or(base.connect_timeout),
            headers: self.headers,
            proxy: self.proxy,
            user_agent: self.user_agent.unwrap_or(base.user_agent),
        }
    }
}

mod duration_option_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match duration {
            Some(d) => d.as_secs().serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs: Option<u64> = Option::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}

/// Credentials and hosts of one instance.
#[derive(Debug, Clone)]
pub struct InstanceConfig {
    id_instance: u64,
    api_token_instance: SecretString,
    api_url: String,
    media_url: String,
    http: HttpConfig,
}

impl InstanceConfig {
    pub fn new(id_instance: u64, api_token_instance: impl Into<String>) -> Self {
        Self {
            id_instance,
            api_token_instance: SecretString::from(api_token_instance.into()),
            api_url: defaults::hosts::API_URL.to_string(),
            media_url: defaults::hosts::MEDIA_URL.to_string(),
            http: HttpConfig::default(),
        }
    }

    /// Read `GREEN_API_ID_INSTANCE` and `GREEN_API_TOKEN_INSTANCE`, plus the
    /// optional `GREEN_API_URL` and `GREEN_API_MEDIA_URL`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let id = required(&lookup, defaults::env::ID_INSTANCE)?;
        let id_instance = id.trim().parse::<u64>().map_err(|_| {
            GreenApiError::Configuration(format!(
                "{} must be a numeric instance id",
                defaults::env::ID_INSTANCE
            ))
        })?;
        let token = required(&lookup, defaults::env::TOKEN_INSTANCE)?;

        let mut config = Self::new(id_instance, token);
        if let Some(url) = optional(&lookup, defaults::env::API_URL) {
            config = config.with_api_url(url);
        }
        if let Some(url) = optional(&lookup, defaults::env::MEDIA_URL) {
            config = config.with_media_url(url);
        }
        Ok(config)
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_media_url(mut self, url: impl Into<String>) -> Self {
        self.media_url = url.into();
        self
    }

    pub fn with_http_config(mut self, http: HttpConfig) -> Self {
        self.http = http;
        self
    }

    pub fn id_instance(&self) -> u64 {
        self.id_instance
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn media_url(&self) -> &str {
        &self.media_url
    }

    pub fn http_config(&self) -> &HttpConfig {
        &self.http
    }

    pub(crate) fn api_token(&self) -> &str {
        self.api_token_instance.expose_secret()
    }
}

/// Credentials of a partner account.
#[derive(Debug, Clone)]
pub struct PartnerConfig {
    partner_token: SecretString,
    email: Option<String>,
    partner_url: String,
    http: HttpConfig,
}

impl PartnerConfig {
    pub fn new(partner_token: impl Into<String>) -> Self {
        Self {
            partner_token: SecretString::from(partner_token.into()),
            email: None,
            partner_url: defaults::hosts::PARTNER_URL.to_string(),
            http: HttpConfig::default(),
        }
    }

    /// Read `GREEN_API_PARTNER_TOKEN`, plus the optional
    /// `GREEN_API_PARTNER_URL` and `GREEN_API_PARTNER_EMAIL`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let token = required(&lookup, defaults::env::PARTNER_TOKEN)?;
        let mut config = Self::new(token);
        if let Some(url) = optional(&lookup, defaults::env::PARTNER_URL) {
            config = config.with_partner_url(url);
        }
        if let Some(email) = optional(&lookup, defaults::env::PARTNER_EMAIL) {
            config = config.with_email(email);
        }
        Ok(config)
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_partner_url(mut self, url: impl Into<String>) -> Self {
        self.partner_url = url.into();
        self
    }

    pub fn with_http_config(mut self, http: HttpConfig) -> Self {
        self.http = http;
        self
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn partner_url(&self) -> &str {
        &self.partner_url
    }

    pub fn http_config(&self) -> &HttpConfig {
        &self.http
    }

    pub(crate) fn partner_token(&self) -> &str {
        self.partner_token.expose_secret()
    }
}

fn required(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    optional(lookup, key)
        .ok_or_else(|| GreenApiError::Configuration(format!("{key} is not set")))
}

fn optional(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|v| !v.trim().is_empty())
}

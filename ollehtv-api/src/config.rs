//! Client configuration
//!
//! Credentials are per device and have to be captured from the official
//! mobile remote, so they are usually supplied through the environment.

use otp_client::{Credentials, OtpClient};
use thiserror::Error;

/// Set-top-box UUID
pub const DEVICE_ID_VAR: &str = "OLLEHTV_DEVICE_ID";
/// Shared `SVC_PW` secret
pub const SVC_PW_VAR: &str = "OLLEHTV_SVC_PW";
/// Optional override of the OTP base URL
pub const API_URL_VAR: &str = "OLLEHTV_API_URL";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(&'static str),
}

/// Everything needed to build an [`OllehTv`](crate::OllehTv)
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    /// `None` targets the production service
    pub base_url: Option<String>,
}

impl Config {
    pub fn new(device_id: impl Into<String>, svc_pw: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(device_id, svc_pw),
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Read `OLLEHTV_DEVICE_ID`, `OLLEHTV_SVC_PW` and `OLLEHTV_API_URL`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::MissingVar(name))
        };

        let config = Self::new(required(DEVICE_ID_VAR)?, required(SVC_PW_VAR)?);
        Ok(match lookup(API_URL_VAR).filter(|url| !url.trim().is_empty()) {
            Some(url) => config.with_base_url(url),
            None => config,
        })
    }

    /// Transport for this configuration
    pub fn otp_client(&self) -> OtpClient {
        match &self.base_url {
            Some(url) => OtpClient::with_base_url(url.as_str()),
            None => OtpClient::new(),
        }
    }
}

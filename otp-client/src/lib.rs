//! Private JSON-over-HTTP client for the Olleh TV OTP control API
//!
//! This crate provides the single request primitive the higher level
//! `ollehtv-api` crate builds on: POST a JSON body carrying the per-device
//! auth fields, then validate the `STATUS`/`DATA` envelope of the reply.

mod auth;
mod envelope;
mod error;

pub use auth::{Credentials, DEVICE_ID_KEY, RESERVED_KEYS, SERVICE_ID, SVC_ID_KEY, SVC_PW_KEY};
pub use envelope::{Envelope, Status, UNKNOWN_ERROR_CODE, UNKNOWN_ERROR_MESSAGE};
pub use error::OtpError;

use serde_json::Value;
use tracing::{debug, warn};

/// Request parameters, serialized as the top-level JSON object of the body
pub type Params = serde_json::Map<String, Value>;

/// Base URL of the OTP API, including the API version
pub const DEFAULT_BASE_URL: &str = "https://ollehtvplay.ktipmedia.co.kr/otp/v1";

/// User-Agent of the iOS tvplay application; the service rejects other clients
pub const USER_AGENT: &str =
    "%EC%98%AC%EB%A0%88%20tv%play/3.0.2 CFNetwork/808.2.16 Darwin/16.3.0";

/// Accept-Language sent with every request
pub const ACCEPT_LANGUAGE: &str = "ko-kr";

/// A minimal client for the OTP control API
#[derive(Debug, Clone)]
pub struct OtpClient {
    agent: ureq::Agent,
    base_url: String,
}

impl OtpClient {
    /// Create a client for the production OTP endpoint
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client that talks to another base URL (a proxy or a test server)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            agent: ureq::AgentBuilder::new().build(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint path such as `rmt/getCurrentState`
    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// POST one request and return the validated envelope
    ///
    /// # Arguments
    /// * `credentials` - Device credentials merged into the body
    /// * `endpoint` - Endpoint path relative to the base URL
    /// * `params` - Endpoint parameters; reserved auth keys are overwritten
    ///
    /// # Returns
    /// The decoded envelope when the vendor status code is 0
    pub fn call(
        &self,
        credentials: &Credentials,
        endpoint: &str,
        params: Params,
    ) -> Result<Envelope, OtpError> {
        let url = self.url_for(endpoint);
        if params.keys().any(|key| RESERVED_KEYS.contains(&key.as_str())) {
            debug!(endpoint = %endpoint, "replacing caller-supplied auth fields");
        }
        let body = Value::Object(credentials.merge_into(params));

        debug!(endpoint = %endpoint, "posting OTP request");

        let response = self
            .agent
            .post(&url)
            .set("Accept-Language", ACCEPT_LANGUAGE)
            .set("User-Agent", USER_AGENT)
            .send_json(&body)
            .map_err(|e| {
                let error = OtpError::from(e);
                warn!(endpoint = %endpoint, error = %error, "OTP transport failure");
                error
            })?;

        let text = response
            .into_string()
            .map_err(|e| OtpError::Network(e.to_string()))?;

        let json: Value = serde_json::from_str(&text)
            .map_err(|e| OtpError::Malformed(format!("invalid JSON body: {}", e)))?;

        let envelope = Envelope::from_json(json)?;
        debug!(
            endpoint = %endpoint,
            code = envelope.status.code,
            message = %envelope.status.message,
            "OTP response status"
        );

        envelope.check().map_err(|error| {
            warn!(endpoint = %endpoint, error = %error, "OTP request rejected");
            error
        })
    }
}

impl Default for OtpClient {
    fn default() -> Self {
        Self::new()
    }
}

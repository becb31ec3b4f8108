//! Error types for the OTP client

use thiserror::Error;

/// Errors that can occur while talking to the OTP control API
#[derive(Debug, Error)]
pub enum OtpError {
    /// Network-level failure (DNS, connect, TLS, reading the body)
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx HTTP status
    #[error("HTTP error: status {0}")]
    Http(u16),

    /// The body was not JSON, or lacked the mandatory envelope structure
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// The envelope carried a non-zero vendor status code
    #[error("{code}: {message}")]
    Status {
        code: i64,
        message: String,
    },
}

impl OtpError {
    /// True for failures raised below the envelope layer
    pub fn is_transport(&self) -> bool {
        matches!(self, OtpError::Network(_) | OtpError::Http(_))
    }
}

impl From<ureq::Error> for OtpError {
    fn from(error: ureq::Error) -> Self {
        match error {
            ureq::Error::Status(status, _) => OtpError::Http(status),
            ureq::Error::Transport(transport) => OtpError::Network(transport.to_string()),
        }
    }
}

use otp_client::{OtpError, UNKNOWN_ERROR_CODE, UNKNOWN_ERROR_MESSAGE};
use thiserror::Error;

/// Message carried by [`ApiError::Unreachable`]
pub const UNREACHABLE_MESSAGE: &str = "The STB is unreachable.";

/// High-level API errors for set-top-box operations
///
/// Three families matter to callers:
///
/// - transport failures (`NetworkError`, `HttpStatus`), raised before any
///   envelope could be read;
/// - application-shaped failures (`Status`, `MalformedResponse`,
///   `Unreachable`), which all expose a numeric [`code`](ApiError::code)
///   and a [`message`](ApiError::message);
/// - local vocabulary problems (`UnknownCode`, `InvalidParameter`).
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network communication error
    ///
    /// DNS, connect, TLS or read failures talking to the OTP service.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Non-2xx HTTP status from the OTP service
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),

    /// The response lacked the expected envelope structure
    ///
    /// Covers a missing `STATUS` object, a missing `DATA` object on
    /// endpoints that must return one, and undecodable bodies. The string is
    /// a diagnostic detail; the reported code and message are fixed.
    #[error("-1: Unknown API error ({0})")]
    MalformedResponse(String),

    /// Non-zero status code reported by the vendor, carried verbatim
    #[error("{code}: {message}")]
    Status { code: i64, message: String },

    /// The set-top-box reported the OFF power state
    #[error("-1: The STB is unreachable.")]
    Unreachable,

    /// A wire value outside one of the closed enumerations
    #[error("Unknown {kind} code: {code}")]
    UnknownCode { kind: &'static str, code: i64 },

    /// Invalid argument supplied by the caller
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl ApiError {
    /// Numeric code for the application-shaped kinds
    pub fn code(&self) -> Option<i64> {
        match self {
            ApiError::Status { code, .. } => Some(*code),
            ApiError::MalformedResponse(_) | ApiError::Unreachable => Some(UNKNOWN_ERROR_CODE),
            _ => None,
        }
    }

    /// Human readable message for the application-shaped kinds
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => Some(message),
            ApiError::MalformedResponse(_) => Some(UNKNOWN_ERROR_MESSAGE),
            ApiError::Unreachable => Some(UNREACHABLE_MESSAGE),
            _ => None,
        }
    }

    /// True when the failure happened below the envelope layer
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::NetworkError(_) | ApiError::HttpStatus(_))
    }

    pub(crate) fn missing_field(field: &str) -> Self {
        ApiError::MalformedResponse(format!("missing {} field", field))
    }
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

impl From<OtpError> for ApiError {
    fn from(error: OtpError) -> Self {
        match error {
            OtpError::Network(msg) => ApiError::NetworkError(msg),
            OtpError::Http(status) => ApiError::HttpStatus(status),
            OtpError::Malformed(msg) => ApiError::MalformedResponse(msg),
            OtpError::Status { code, message } => ApiError::Status { code, message },
        }
    }
}

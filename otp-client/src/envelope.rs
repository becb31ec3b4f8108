//! The `{"STATUS": {...}, "DATA": {...}}` wrapper around every OTP response

use serde_json::Value;

use crate::OtpError;

/// Message used when the vendor omits one, or the envelope is unusable
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown API error";

/// Code used when no vendor code is available
pub const UNKNOWN_ERROR_CODE: i64 = -1;

/// Decoded `STATUS` object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub code: i64,
    pub message: String,
}

impl Status {
    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

/// A decoded response envelope
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub status: Status,
    /// Endpoint-specific payload, absent for plain command endpoints
    pub data: Option<Value>,
}

impl Envelope {
    /// Decode the envelope structure without judging the status code
    pub fn from_json(value: Value) -> Result<Self, OtpError> {
        let Value::Object(mut root) = value else {
            return Err(OtpError::Malformed("response is not a JSON object".to_string()));
        };

        let status = match root.remove("STATUS") {
            Some(Value::Object(status)) => status,
            _ => return Err(OtpError::Malformed("missing STATUS object".to_string())),
        };

        let code = match status.get("CODE") {
            None | Some(Value::Null) => UNKNOWN_ERROR_CODE,
            Some(raw) => parse_code(raw)
                .ok_or_else(|| OtpError::Malformed(format!("unparseable status code: {}", raw)))?,
        };

        let message = status
            .get("MESSAGE")
            .and_then(Value::as_str)
            .map(|s| s.to_string())
            .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string());

        let data = match root.remove("DATA") {
            None | Some(Value::Null) => None,
            Some(data) => Some(data),
        };

        Ok(Self {
            status: Status { code, message },
            data,
        })
    }

    /// Turn a non-zero status into `OtpError::Status`
    pub fn check(self) -> Result<Self, OtpError> {
        if self.status.is_success() {
            Ok(self)
        } else {
            Err(OtpError::Status {
                code: self.status.code,
                message: self.status.message,
            })
        }
    }

    /// Take the `DATA` payload, failing when the endpoint should have sent one
    pub fn into_data(self) -> Result<Value, OtpError> {
        self.data
            .ok_or_else(|| OtpError::Malformed("missing DATA object".to_string()))
    }
}

// CODE arrives as "000" from the live service but plain numbers are accepted too
fn parse_code(raw: &Value) -> Option<i64> {
    match raw {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

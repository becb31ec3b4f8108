//! Per-device credentials and the reserved request fields

use std::fmt;

use crate::Params;
use serde_json::Value;

/// Request key carrying the set-top-box UUID
pub const DEVICE_ID_KEY: &str = "DEVICE_ID";
/// Request key carrying the service identifier
pub const SVC_ID_KEY: &str = "SVC_ID";
/// Request key carrying the shared secret
pub const SVC_PW_KEY: &str = "SVC_PW";
/// Service identifier the OTP API expects from the mobile remote
pub const SERVICE_ID: &str = "OTP";

/// Keys that callers can never override
pub const RESERVED_KEYS: [&str; 3] = [DEVICE_ID_KEY, SVC_ID_KEY, SVC_PW_KEY];

/// The two pre-shared secrets identifying one set-top-box
///
/// Both values are vendor-assigned and have to be captured from a proxied
/// session of the official mobile remote. They are stored verbatim; nothing
/// is validated locally, a bad pair only shows up as a rejected request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    device_id: String,
    svc_pw: String,
}

impl Credentials {
    /// Create credentials from a device UUID
    /// ("xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx") and the hex `SVC_PW` secret
    pub fn new(device_id: impl Into<String>, svc_pw: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
            svc_pw: svc_pw.into(),
        }
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    pub fn svc_pw(&self) -> &str {
        &self.svc_pw
    }

    /// Merge the reserved auth fields into `params`
    ///
    /// The reserved fields are written last, so any caller-supplied value
    /// under the same key is replaced.
    pub fn merge_into(&self, mut params: Params) -> Params {
        params.insert(DEVICE_ID_KEY.to_string(), Value::from(self.device_id.as_str()));
        params.insert(SVC_ID_KEY.to_string(), Value::from(SERVICE_ID));
        params.insert(SVC_PW_KEY.to_string(), Value::from(self.svc_pw.as_str()));
        params
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("device_id", &self.device_id)
            .field("svc_pw", &"<redacted>")
            .finish()
    }
}

use serde::Serialize;
use serde_json::{Map, Value};

use super::StbState;
use crate::{ApiError, Result};

/// Channel number reported when `CHNL_NO` is absent
pub const UNKNOWN_CHANNEL: i64 = -1;

/// Snapshot decoded from `rmt/getCurrentState`
///
/// Built fresh from every query and never updated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceState {
    pub channel_name: String,
    pub channel_num: i64,
    pub program_id: String,
    pub program_name: String,
    pub start_time: String,
    pub end_time: String,
    pub state: StbState,
}

impl DeviceState {
    /// Decode the `DATA` object of a current-state response
    ///
    /// Missing text fields become empty strings, a missing channel number
    /// becomes [`UNKNOWN_CHANNEL`] and a missing power state becomes
    /// [`StbState::Off`]. Present but undecodable values are errors.
    pub fn from_data(data: &Value) -> Result<Self> {
        let data = data
            .as_object()
            .ok_or_else(|| ApiError::MalformedResponse("DATA is not an object".to_string()))?;

        let channel_num = int_field(data, "CHNL_NO")?.unwrap_or(UNKNOWN_CHANNEL);
        let state = match int_field(data, "STB_STATE")? {
            Some(raw) => StbState::from_wire(raw)?,
            None => StbState::Off,
        };

        Ok(Self {
            channel_name: string_field(data, "CHNL_NM"),
            channel_num,
            program_id: string_field(data, "PRGM_ID"),
            program_name: string_field(data, "PRGM_NM"),
            start_time: string_field(data, "STRT_TM"),
            end_time: string_field(data, "FIN_TM"),
            state,
        })
    }

    pub fn is_on(&self) -> bool {
        self.state == StbState::On
    }
}

/// Read a text field, stringifying numbers; absent or null reads as empty
pub(crate) fn string_field(data: &Map<String, Value>, key: &str) -> String {
    match data.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Read an integer field sent either as a JSON number or a numeric string
///
/// An empty string counts as absent, like a missing key.
pub(crate) fn int_field(data: &Map<String, Value>, key: &str) -> Result<Option<i64>> {
    let parsed = match data.get(key) {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(None),
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        Some(_) => None,
    };

    parsed.map(Some).ok_or_else(|| {
        ApiError::MalformedResponse(format!("{} is not an integer", key))
    })
}

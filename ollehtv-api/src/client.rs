use otp_client::{Credentials, Envelope, OtpClient, Params};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::model::{Button, DeviceState, Genre, KeyCode, ListingDate, StbState};
use crate::operations::epg::{
    EpgDetailOperation, EpgDetailRequest, EpgListOperation, EpgListRequest,
    GetMyChannelOperation, GetMyChannelRequest,
};
use crate::operations::etc::{GetDateTimeOperation, GetDateTimeRequest};
use crate::operations::rmt::{
    ChangeChannelOperation, ChangeChannelRequest, GetCurrentStateOperation,
    GetCurrentStateRequest, GetMuteStateOperation, GetMuteStateRequest, InputButtonOperation,
    InputButtonRequest,
};
use crate::operations::srch::{SearchEpgOperation, SearchEpgRequest};
use crate::{ApiError, OtpOperation, Result};

/// Client for one Olleh TV set-top-box
///
/// Holds the device credentials and an [`OtpClient`]. Construction does no
/// I/O; bad credentials only surface when the service rejects a request.
/// Every method performs its requests synchronously and in order, and no
/// state other than the credentials is kept between calls.
///
/// The box only exposes power and mute *toggles*, so [`turn_on`](Self::turn_on),
/// [`turn_off`](Self::turn_off), [`mute`](Self::mute) and
/// [`unmute`](Self::unmute) read the current state first and press the key
/// only when it changes something.
///
/// # Example
/// ```rust,no_run
/// use ollehtv_api::{Button, OllehTv};
///
/// let stb = OllehTv::new("ABCDEF12-3456-7890-ABCD-EF1234567890", "abcdef1234567890");
/// stb.validate()?;
/// stb.turn_on()?;
/// stb.input_button(Button::VolumeUp)?;
/// # Ok::<(), ollehtv_api::ApiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct OllehTv {
    credentials: Credentials,
    otp_client: OtpClient,
}

impl OllehTv {
    /// Create a client for the production OTP service
    pub fn new(device_id: impl Into<String>, svc_pw: impl Into<String>) -> Self {
        Self::with_otp_client(Credentials::new(device_id, svc_pw), OtpClient::new())
    }

    /// Create a client with a custom transport (another base URL, tests)
    pub fn with_otp_client(credentials: Credentials, otp_client: OtpClient) -> Self {
        Self {
            credentials,
            otp_client,
        }
    }

    pub fn from_config(config: Config) -> Self {
        let otp_client = config.otp_client();
        Self::with_otp_client(config.credentials, otp_client)
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Execute a typed operation against the box
    pub fn execute<Op: OtpOperation>(&self, request: &Op::Request) -> Result<Op::Response> {
        debug!(operation = Op::ENDPOINT.name(), "executing operation");
        let envelope = self.request(Op::ENDPOINT.path(), Some(Op::build_params(request)))?;
        Op::parse_response(envelope)
    }

    /// POST to an arbitrary endpoint and return the full envelope
    ///
    /// # Arguments
    /// * `endpoint` - Path relative to the base URL, leading slash optional
    /// * `params` - Endpoint parameters, `None` for an empty body; the
    ///   reserved auth keys always carry this client's credentials
    pub fn request(&self, endpoint: &str, params: Option<Params>) -> Result<Envelope> {
        let params = params.unwrap_or_default();
        Ok(self.otp_client.call(&self.credentials, endpoint, params)?)
    }

    /// Check that the service accepts these credentials
    pub fn validate(&self) -> Result<()> {
        self.execute::<GetDateTimeOperation>(&GetDateTimeRequest)?;
        Ok(())
    }

    /// Current channel, program and power state
    ///
    /// An OFF box is reported as [`ApiError::Unreachable`] rather than as a
    /// snapshot. Use [`get_state_unchecked`](Self::get_state_unchecked) to
    /// observe OFF without an error.
    pub fn get_state(&self) -> Result<DeviceState> {
        let state = self.get_state_unchecked()?;
        if state.state == StbState::Off {
            warn!("set-top-box reported OFF state");
            return Err(ApiError::Unreachable);
        }
        Ok(state)
    }

    /// Current state as reported, OFF included
    pub fn get_state_unchecked(&self) -> Result<DeviceState> {
        self.execute::<GetCurrentStateOperation>(&GetCurrentStateRequest)
    }

    /// Send a single remote key press
    pub fn input_button(&self, key: impl Into<KeyCode>) -> Result<()> {
        let key = key.into();
        debug!(key = %key, button = ?key.button(), "input button");
        self.execute::<InputButtonOperation>(&InputButtonRequest { key })
    }

    /// Whether the box is muted
    pub fn muted(&self) -> Result<bool> {
        self.execute::<GetMuteStateOperation>(&GetMuteStateRequest)
    }

    /// Mute, doing nothing if already muted
    pub fn mute(&self) -> Result<()> {
        self.set_muted(true)
    }

    /// Unmute, doing nothing if not muted
    pub fn unmute(&self) -> Result<()> {
        self.set_muted(false)
    }

    fn set_muted(&self, muted: bool) -> Result<()> {
        if self.muted()? == muted {
            debug!(muted, "mute state already matches");
            return Ok(());
        }
        info!(muted, "toggling mute");
        self.input_button(Button::Mute)
    }

    /// Whether the box is ON, queried live
    pub fn powered_on(&self) -> Result<bool> {
        Ok(self.get_state()?.is_on())
    }

    /// Press POWER if the box is in standby
    pub fn turn_on(&self) -> Result<()> {
        self.toggle_power_from(StbState::Standby)
    }

    /// Press POWER if the box is on
    pub fn turn_off(&self) -> Result<()> {
        self.toggle_power_from(StbState::On)
    }

    fn toggle_power_from(&self, from: StbState) -> Result<()> {
        let current = self.get_state()?.state;
        if current != from {
            debug!(state = ?current, "power toggle not needed");
            return Ok(());
        }
        info!(state = ?current, "toggling power");
        self.input_button(Button::Power)
    }

    /// Tune to a channel number
    pub fn change_channel(&self, channel: u32) -> Result<()> {
        self.execute::<ChangeChannelOperation>(&ChangeChannelRequest { channel })
    }

    /// Program listing for one genre and date
    ///
    /// `Genre::default()` lists favorites and `ListingDate::Current` asks for
    /// today. The payload is returned as sent by the vendor.
    pub fn get_program_listing(&self, genre: Genre, date: impl Into<ListingDate>) -> Result<Value> {
        let request = EpgListRequest {
            genre,
            date: date.into(),
        };
        self.execute::<EpgListOperation>(&request)
    }

    pub fn get_favorite_channels(&self) -> Result<Value> {
        self.execute::<GetMyChannelOperation>(&GetMyChannelRequest)
    }

    pub fn get_channel_detail(&self, channel: u32) -> Result<Value> {
        self.execute::<EpgDetailOperation>(&EpgDetailRequest { channel })
    }

    /// Keyword search over the program guide
    pub fn search(&self, keyword: &str) -> Result<Value> {
        if keyword.trim().is_empty() {
            return Err(ApiError::InvalidParameter(
                "search keyword must not be empty".to_string(),
            ));
        }
        let request = SearchEpgRequest {
            keyword: keyword.to_string(),
        };
        self.execute::<SearchEpgOperation>(&request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation_does_no_io() {
        let stb = OllehTv::new("ABCDEF12-3456-7890-ABCD-EF1234567890", "abcdef1234567890");
        assert_eq!(stb.credentials().device_id(), "ABCDEF12-3456-7890-ABCD-EF1234567890");
        assert_eq!(stb.credentials().svc_pw(), "abcdef1234567890");
    }

    #[test]
    fn test_empty_search_keyword_is_rejected_locally() {
        // Unroutable base URL: a request attempt would surface as a network error
        let stb = OllehTv::with_otp_client(
            Credentials::new("device", "secret"),
            OtpClient::with_base_url("http://127.0.0.1:1/otp/v1"),
        );
        assert!(matches!(stb.search("  "), Err(ApiError::InvalidParameter(_))));
    }
}

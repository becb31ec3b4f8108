//! GetCurrentState operation

use otp_client::{Envelope, Params};

use crate::model::DeviceState;
use crate::{ApiError, Endpoint, OtpOperation};

/// GetCurrentState operation
///
/// Decodes the snapshot as reported, including [`StbState::Off`](crate::StbState::Off).
/// The unreachable policy lives in [`OllehTv::get_state`](crate::OllehTv::get_state).
pub struct GetCurrentStateOperation;

/// Request for GetCurrentState operation
#[derive(Debug, Clone, Default)]
pub struct GetCurrentStateRequest;

impl OtpOperation for GetCurrentStateOperation {
    type Request = GetCurrentStateRequest;
    type Response = DeviceState;

    const ENDPOINT: Endpoint = Endpoint::GetCurrentState;

    fn build_params(_request: &Self::Request) -> Params {
        Params::new()
    }

    fn parse_response(envelope: Envelope) -> Result<Self::Response, ApiError> {
        let data = envelope.into_data()?;
        DeviceState::from_data(&data)
    }
}

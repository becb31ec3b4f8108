//! GetMyChannel operation

use otp_client::{Envelope, Params};
use serde_json::Value;

use crate::{ApiError, Endpoint, OtpOperation};

/// GetMyChannel operation
pub struct GetMyChannelOperation;

/// Request for GetMyChannel operation
#[derive(Debug, Clone, Default)]
pub struct GetMyChannelRequest;

impl OtpOperation for GetMyChannelOperation {
    type Request = GetMyChannelRequest;
    type Response = Value;

    const ENDPOINT: Endpoint = Endpoint::GetMyChannel;

    fn build_params(_request: &Self::Request) -> Params {
        Params::new()
    }

    fn parse_response(envelope: Envelope) -> Result<Self::Response, ApiError> {
        Ok(envelope.into_data()?)
    }
}

//! EpgDetail operation

use otp_client::{Envelope, Params};
use serde_json::Value;

use crate::{ApiError, Endpoint, OtpOperation};

/// EpgDetail operation
pub struct EpgDetailOperation;

/// Request for EpgDetail operation
#[derive(Debug, Clone, Copy)]
pub struct EpgDetailRequest {
    pub channel: u32,
}

impl OtpOperation for EpgDetailOperation {
    type Request = EpgDetailRequest;
    type Response = Value;

    const ENDPOINT: Endpoint = Endpoint::EpgDetail;

    fn build_params(request: &Self::Request) -> Params {
        let mut params = Params::new();
        params.insert("CH_NO".to_string(), Value::from(request.channel.to_string()));
        params
    }

    fn parse_response(envelope: Envelope) -> Result<Self::Response, ApiError> {
        Ok(envelope.into_data()?)
    }
}

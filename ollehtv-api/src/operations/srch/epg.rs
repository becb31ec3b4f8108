//! SearchEpg operation

use otp_client::{Envelope, Params};
use serde_json::Value;

use crate::{ApiError, Endpoint, OtpOperation};

/// SearchEpg operation
pub struct SearchEpgOperation;

/// Request for SearchEpg operation
#[derive(Debug, Clone)]
pub struct SearchEpgRequest {
    pub keyword: String,
}

impl OtpOperation for SearchEpgOperation {
    type Request = SearchEpgRequest;
    type Response = Value;

    const ENDPOINT: Endpoint = Endpoint::SearchEpg;

    fn build_params(request: &Self::Request) -> Params {
        let mut params = Params::new();
        params.insert("SRCH_WORD".to_string(), Value::from(request.keyword.as_str()));
        params
    }

    fn parse_response(envelope: Envelope) -> Result<Self::Response, ApiError> {
        Ok(envelope.into_data()?)
    }
}

//! GetMuteState operation

use otp_client::{Envelope, Params};

use crate::model::int_field;
use crate::{ApiError, Endpoint, OtpOperation};

/// GetMuteState operation
pub struct GetMuteStateOperation;

/// Request for GetMuteState operation
#[derive(Debug, Clone, Default)]
pub struct GetMuteStateRequest;

impl OtpOperation for GetMuteStateOperation {
    type Request = GetMuteStateRequest;
    /// `true` when muted
    type Response = bool;

    const ENDPOINT: Endpoint = Endpoint::GetMuteState;

    fn build_params(_request: &Self::Request) -> Params {
        Params::new()
    }

    fn parse_response(envelope: Envelope) -> Result<Self::Response, ApiError> {
        let data = envelope.into_data()?;
        let data = data
            .as_object()
            .ok_or_else(|| ApiError::MalformedResponse("DATA is not an object".to_string()))?;

        let state = int_field(data, "STATE")?.ok_or_else(|| ApiError::missing_field("STATE"))?;
        Ok(state != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{json, Value};

    fn envelope(data: Value) -> Envelope {
        Envelope::from_json(json!({
            "STATUS": {"CODE": "000", "MESSAGE": "OK"},
            "DATA": data
        }))
        .unwrap()
    }

    #[rstest]
    #[case(json!({"STATE": "0"}), false)]
    #[case(json!({"STATE": "1"}), true)]
    #[case(json!({"STATE": 0}), false)]
    #[case(json!({"STATE": "3"}), true)]
    fn test_mute_state_parsing(#[case] data: Value, #[case] expected: bool) {
        assert_eq!(GetMuteStateOperation::parse_response(envelope(data)).unwrap(), expected);
    }

    #[test]
    fn test_mute_state_requires_state_field() {
        let result = GetMuteStateOperation::parse_response(envelope(json!({})));
        match result {
            Err(ApiError::MalformedResponse(msg)) => assert!(msg.contains("STATE")),
            other => panic!("Expected MalformedResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_mute_state_requires_data() {
        let envelope = Envelope::from_json(json!({
            "STATUS": {"CODE": "000", "MESSAGE": "OK"}
        }))
        .unwrap();
        assert!(matches!(
            GetMuteStateOperation::parse_response(envelope),
            Err(ApiError::MalformedResponse(_))
        ));
    }
}

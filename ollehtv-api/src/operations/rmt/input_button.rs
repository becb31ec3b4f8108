//! InputButton operation

use otp_client::{Envelope, Params};
use serde_json::Value;

use crate::model::KeyCode;
use crate::{ApiError, Endpoint, OtpOperation};

/// InputButton operation
pub struct InputButtonOperation;

/// Request for InputButton operation
#[derive(Debug, Clone, Copy)]
pub struct InputButtonRequest {
    pub key: KeyCode,
}

impl OtpOperation for InputButtonOperation {
    type Request = InputButtonRequest;
    type Response = ();

    const ENDPOINT: Endpoint = Endpoint::InputButton;

    fn build_params(request: &Self::Request) -> Params {
        let mut params = Params::new();
        params.insert("KEY_CD".to_string(), Value::from(request.key.to_string()));
        params
    }

    fn parse_response(_envelope: Envelope) -> Result<Self::Response, ApiError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Button;

    #[test]
    fn test_input_button_params() {
        let request = InputButtonRequest {
            key: Button::Power.into(),
        };
        let params = InputButtonOperation::build_params(&request);
        assert_eq!(params.len(), 1);
        assert_eq!(params["KEY_CD"], "409");
    }

    #[test]
    fn test_input_button_raw_code() {
        let request = InputButtonRequest { key: KeyCode(600) };
        assert_eq!(InputButtonOperation::build_params(&request)["KEY_CD"], "600");
    }
}

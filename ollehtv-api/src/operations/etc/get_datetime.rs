//! DateTime operation, the cheapest authenticated call the API offers

use otp_client::{Envelope, Params};
use serde_json::Value;

use crate::{ApiError, Endpoint, OtpOperation};

/// DateTime operation
pub struct GetDateTimeOperation;

/// Request for DateTime operation
#[derive(Debug, Clone, Default)]
pub struct GetDateTimeRequest;

impl OtpOperation for GetDateTimeOperation {
    type Request = GetDateTimeRequest;
    /// Raw clock payload, if the service sent one
    type Response = Option<Value>;

    const ENDPOINT: Endpoint = Endpoint::DateTime;

    fn build_params(_request: &Self::Request) -> Params {
        Params::new()
    }

    fn parse_response(envelope: Envelope) -> Result<Self::Response, ApiError> {
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_datetime_has_no_params() {
        assert!(GetDateTimeOperation::build_params(&GetDateTimeRequest).is_empty());
    }

    #[test]
    fn test_datetime_tolerates_missing_data() {
        let envelope = Envelope::from_json(json!({
            "STATUS": {"CODE": "000", "MESSAGE": "OK"}
        }))
        .unwrap();
        assert_eq!(GetDateTimeOperation::parse_response(envelope).unwrap(), None);
    }
}

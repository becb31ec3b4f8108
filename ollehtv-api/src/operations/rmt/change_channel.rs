//! ChangeChannel operation

use otp_client::{Envelope, Params};
use serde_json::Value;

use crate::{ApiError, Endpoint, OtpOperation};

/// `TYPE` discriminator the mobile remote sends with every channel change
pub const CHANNEL_TYPE: &str = "0";

/// ChangeChannel operation
pub struct ChangeChannelOperation;

/// Request for ChangeChannel operation
#[derive(Debug, Clone, Copy)]
pub struct ChangeChannelRequest {
    pub channel: u32,
}

impl OtpOperation for ChangeChannelOperation {
    type Request = ChangeChannelRequest;
    type Response = ();

    const ENDPOINT: Endpoint = Endpoint::ChangeChannel;

    fn build_params(request: &Self::Request) -> Params {
        let mut params = Params::new();
        params.insert("CH_NO".to_string(), Value::from(request.channel.to_string()));
        params.insert("TYPE".to_string(), Value::from(CHANNEL_TYPE));
        params
    }

    fn parse_response(_envelope: Envelope) -> Result<Self::Response, ApiError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_channel_params() {
        let params = ChangeChannelOperation::build_params(&ChangeChannelRequest { channel: 123 });
        assert_eq!(params["CH_NO"], "123");
        assert_eq!(params["TYPE"], "0");
        assert_eq!(params.len(), 2);
    }
}

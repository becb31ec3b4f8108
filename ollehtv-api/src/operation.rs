use otp_client::{Envelope, Params};

use crate::endpoint::Endpoint;
use crate::error::ApiError;

/// Base trait for all OTP API operations
///
/// Each operation pairs one [`Endpoint`] with a typed request and response.
/// Operations are stateless; the client supplies credentials and transport.
pub trait OtpOperation {
    /// The request type for this operation
    type Request;

    /// The response type for this operation
    type Response;

    /// The endpoint this operation posts to
    const ENDPOINT: Endpoint;

    /// Build the endpoint-specific body parameters
    ///
    /// Must return a fresh map on every call. Auth fields are added by the
    /// transport and do not belong here.
    fn build_params(request: &Self::Request) -> Params;

    /// Extract the typed response from a successful envelope
    fn parse_response(envelope: Envelope) -> Result<Self::Response, ApiError>;
}

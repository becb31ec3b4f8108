//! Transport tests against a local mock OTP server
//!
//! These tests verify the wire format of outgoing requests and the mapping
//! of HTTP and envelope failures onto `OtpError` variants.

use std::io::Write;
use std::time::Duration;

use mockito::{Matcher, Server, ServerGuard};
use otp_client::{Credentials, OtpClient, OtpError, Params, USER_AGENT};
use serde_json::{json, Value};

const DEVICE_ID: &str = "ABCDEF12-3456-7890-ABCD-EF1234567890";
const SVC_PW: &str = "abcdef1234567890";

fn credentials() -> Credentials {
    Credentials::new(DEVICE_ID, SVC_PW)
}

fn client_for(server: &ServerGuard) -> OtpClient {
    OtpClient::with_base_url(format!("{}/otp/v1", server.url()))
}

#[test]
fn test_call_sends_headers_and_auth_fields() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/otp/v1/etc/datetime")
        .match_header("accept-language", "ko-kr")
        .match_header("user-agent", USER_AGENT)
        .match_header("content-type", Matcher::Regex("application/json".to_string()))
        .match_body(Matcher::Json(json!({
            "DEVICE_ID": DEVICE_ID,
            "SVC_ID": "OTP",
            "SVC_PW": SVC_PW,
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"STATUS": {"CODE": "000", "MESSAGE": "OK"}}"#)
        .create();

    let envelope = client_for(&server)
        .call(&credentials(), "etc/datetime", Params::new())
        .unwrap();

    assert!(envelope.status.is_success());
    mock.assert();
}

#[test]
fn test_caller_cannot_override_auth_fields() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/otp/v1/rmt/changeChannel")
        .match_body(Matcher::Json(json!({
            "CH_NO": "7",
            "DEVICE_ID": DEVICE_ID,
            "SVC_ID": "OTP",
            "SVC_PW": SVC_PW,
        })))
        .with_status(200)
        .with_body(r#"{"STATUS": {"CODE": "000", "MESSAGE": "OK"}}"#)
        .create();

    let mut params = Params::new();
    params.insert("CH_NO".to_string(), Value::from("7"));
    params.insert("DEVICE_ID".to_string(), Value::from("spoofed"));
    params.insert("SVC_ID".to_string(), Value::from("NOT_OTP"));
    params.insert("SVC_PW".to_string(), Value::from("guess"));

    client_for(&server)
        .call(&credentials(), "/rmt/changeChannel", params)
        .unwrap();

    mock.assert();
}

#[test]
fn test_vendor_error_code() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/otp/v1/etc/datetime")
        .with_status(200)
        .with_body(r#"{"STATUS": {"CODE": "102", "MESSAGE": "FAILURE"}}"#)
        .create();

    let result = client_for(&server).call(&credentials(), "etc/datetime", Params::new());

    match result {
        Err(OtpError::Status { code, message }) => {
            assert_eq!(code, 102);
            assert_eq!(message, "FAILURE");
        }
        other => panic!("Expected OtpError::Status, got {:?}", other),
    }
}

#[test]
fn test_missing_status_with_http_200() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/otp/v1/etc/datetime")
        .with_status(200)
        .with_body(r#"{"DATA": {"DATETIME": "20170101000000"}}"#)
        .create();

    let result = client_for(&server).call(&credentials(), "etc/datetime", Params::new());
    assert!(matches!(result, Err(OtpError::Malformed(_))));
}

#[test]
fn test_non_json_body() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/otp/v1/etc/datetime")
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create();

    let result = client_for(&server).call(&credentials(), "etc/datetime", Params::new());
    match result {
        Err(error @ OtpError::Malformed(_)) => assert!(!error.is_transport()),
        other => panic!("Expected OtpError::Malformed, got {:?}", other),
    }
}

#[test]
fn test_http_error_status_is_transport_error() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/otp/v1/etc/datetime")
        .with_status(503)
        .with_body(r#"{"STATUS": {"CODE": "000", "MESSAGE": "OK"}}"#)
        .create();

    let result = client_for(&server).call(&credentials(), "etc/datetime", Params::new());
    match result {
        Err(error @ OtpError::Http(503)) => assert!(error.is_transport()),
        other => panic!("Expected OtpError::Http(503), got {:?}", other),
    }
}

#[test]
fn test_unreachable_host_is_network_error() {
    let client = OtpClient::with_base_url("http://127.0.0.1:1/otp/v1");
    let result = client.call(&credentials(), "etc/datetime", Params::new());

    match result {
        Err(error @ OtpError::Network(_)) => assert!(error.is_transport()),
        other => panic!("Expected OtpError::Network, got {:?}", other),
    }
}

#[test]
fn test_slow_reply_is_not_cut_short() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/otp/v1/rmt/getCurrentState")
        .with_status(200)
        .with_chunked_body(|w| {
            std::thread::sleep(Duration::from_secs(11));
            w.write_all(br#"{"STATUS": {"CODE": "000", "MESSAGE": "OK"}}"#)
        })
        .create();

    let envelope = client_for(&server)
        .call(&credentials(), "rmt/getCurrentState", Params::new())
        .unwrap();

    assert!(envelope.status.is_success());
    mock.assert();
}

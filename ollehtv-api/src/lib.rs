//! Type-safe client for Olleh TV set-top-boxes
//!
//! This crate drives a set-top-box through the vendor's OTP control API,
//! the same HTTP/JSON service the official mobile remote uses. It builds on
//! the private `otp-client` crate for transport and envelope handling.
//!
//! Two pre-shared secrets identify a box: its device UUID and the `SVC_PW`
//! hex string. Both have to be captured from a proxied session of the
//! mobile remote.
//!
//! ```rust,no_run
//! use ollehtv_api::{Genre, ListingDate, OllehTv};
//!
//! let stb = OllehTv::new("ABCDEF12-3456-7890-ABCD-EF1234567890", "abcdef1234567890");
//!
//! let state = stb.get_state()?;
//! println!("{} ({}) - {}", state.channel_name, state.channel_num, state.program_name);
//!
//! stb.mute()?;
//! stb.change_channel(11)?;
//! let listing = stb.get_program_listing(Genre::News, ListingDate::Current)?;
//! # let _ = listing;
//! # Ok::<(), ollehtv_api::ApiError>(())
//! ```
//!
//! Lower level access goes through [`OllehTv::execute`] with one of the
//! typed [`operations`], or [`OllehTv::request`] for raw endpoints.

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod logging;
pub mod model;
pub mod operation;
pub mod operations;

pub use client::OllehTv;
pub use config::{Config, ConfigError};
pub use endpoint::Endpoint;
pub use error::{ApiError, Result, UNREACHABLE_MESSAGE};
pub use model::{Button, DeviceState, Genre, KeyCode, ListingDate, StbState};
pub use operation::OtpOperation;

pub use otp_client::{Credentials, Envelope, OtpClient, Params, Status};

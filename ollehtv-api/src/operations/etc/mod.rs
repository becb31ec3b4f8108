//! Miscellaneous endpoints (`etc/*`)

pub mod get_datetime;

pub use get_datetime::{GetDateTimeOperation, GetDateTimeRequest};

//! OTP API operations organized by endpoint prefix
//!
//! One operation type per endpoint, grouped the way the vendor groups its
//! paths.

pub mod epg;
pub mod etc;
pub mod rmt;
pub mod srch;

// Re-export commonly used operations
pub use epg::{EpgDetailOperation, EpgListOperation, GetMyChannelOperation};
pub use etc::GetDateTimeOperation;
pub use rmt::{
    ChangeChannelOperation, GetCurrentStateOperation, GetMuteStateOperation, InputButtonOperation,
};
pub use srch::SearchEpgOperation;

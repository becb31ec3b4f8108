//! Program guide endpoints (`epg/*`)
//!
//! The listing payloads are owned by the vendor and returned unshaped.

pub mod detail;
pub mod get_my_channel;
pub mod list;

pub use detail::{EpgDetailOperation, EpgDetailRequest};
pub use get_my_channel::{GetMyChannelOperation, GetMyChannelRequest};
pub use list::{EpgListOperation, EpgListRequest};

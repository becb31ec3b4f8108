//! Remote-control endpoints (`rmt/*`)

pub mod change_channel;
pub mod get_current_state;
pub mod get_mute_state;
pub mod input_button;

pub use change_channel::{ChangeChannelOperation, ChangeChannelRequest, CHANNEL_TYPE};
pub use get_current_state::{GetCurrentStateOperation, GetCurrentStateRequest};
pub use get_mute_state::{GetMuteStateOperation, GetMuteStateRequest};
pub use input_button::{InputButtonOperation, InputButtonRequest};

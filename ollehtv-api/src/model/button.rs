use std::fmt;

use crate::{ApiError, Result};

wire_enum! {
    /// Remote-control keys accepted by `rmt/inputButton`
    ///
    /// The romanized names follow the Korean labels on the physical remote.
    pub enum Button: u16 as "button" {
        /// 지우기 (delete)
        Jiugi = 8,
        /// 확인 (OK)
        Hwagin = 10,
        /// 나가기 (exit)
        Nagagi = 27,
        Home = 36,
        Left = 37,
        Up = 38,
        Right = 39,
        Down = 40,
        Zero = 48,
        One = 49,
        Two = 50,
        Three = 51,
        Four = 52,
        Five = 53,
        Six = 54,
        Seven = 55,
        Eight = 56,
        Nine = 57,
        Star = 112,
        Pound = 113,
        /// 이전 (previous)
        Ijeon = 115,
        Red = 403,
        Green = 404,
        Yellow = 405,
        Blue = 406,
        Power = 409,
        Rewind = 412,
        Stop = 413,
        PlayPause = 415,
        FastForward = 417,
        ChannelUp = 427,
        ChannelDown = 428,
        VolumeUp = 447,
        VolumeDown = 448,
        Mute = 449,
    }
}

impl Button {
    /// Numeric key for a single digit
    pub fn digit(digit: u8) -> Result<Button> {
        if digit > 9 {
            return Err(ApiError::InvalidParameter(format!(
                "digit must be 0-9, got {}",
                digit
            )));
        }
        Button::try_from(Button::Zero.code() + u16::from(digit))
    }
}

/// Raw key code sent in `KEY_CD`
///
/// Built from a [`Button`] or from a plain integer, for keys the enumeration
/// does not know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCode(pub u16);

impl KeyCode {
    /// The symbolic button, if this code is a known one
    pub fn button(self) -> Option<Button> {
        Button::try_from(self.0).ok()
    }
}

impl From<Button> for KeyCode {
    fn from(button: Button) -> Self {
        KeyCode(button.code())
    }
}

impl From<u16> for KeyCode {
    fn from(code: u16) -> Self {
        KeyCode(code)
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

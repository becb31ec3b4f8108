wire_enum! {
    /// Power state reported in `STB_STATE`
    pub enum StbState: u8 as "STB state" {
        /// Unreachable, the box does not answer the remote service
        Off = 0,
        Standby = 1,
        On = 2,
    }
}

impl StbState {
    /// Decode a raw `STB_STATE` value of any width
    pub fn from_wire(raw: i64) -> crate::Result<Self> {
        u8::try_from(raw)
            .map_err(|_| crate::ApiError::UnknownCode {
                kind: "STB state",
                code: raw,
            })
            .and_then(StbState::try_from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ApiError;
    use rstest::rstest;

    #[rstest]
    #[case(0, StbState::Off)]
    #[case(1, StbState::Standby)]
    #[case(2, StbState::On)]
    fn test_from_wire(#[case] raw: i64, #[case] expected: StbState) {
        assert_eq!(StbState::from_wire(raw).unwrap(), expected);
    }

    #[rstest]
    #[case(3)]
    #[case(-1)]
    #[case(1024)]
    fn test_from_wire_rejects_unknown(#[case] raw: i64) {
        match StbState::from_wire(raw) {
            Err(ApiError::UnknownCode { kind, code }) => {
                assert_eq!(kind, "STB state");
                assert_eq!(code, raw);
            }
            other => panic!("Expected UnknownCode, got {:?}", other),
        }
    }
}

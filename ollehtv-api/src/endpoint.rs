/// The OTP endpoints used by the mobile remote
///
/// Paths are relative to the versioned base URL and grouped by the vendor's
/// prefixes: `etc` (misc), `rmt` (remote control), `epg` (program guide) and
/// `srch` (search).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Server clock, used as a credential check
    DateTime,
    /// Current channel, program and power state
    GetCurrentState,
    /// Single remote key press
    InputButton,
    /// Current mute state
    GetMuteState,
    /// Tune to a channel number
    ChangeChannel,
    /// Program listing filtered by genre and date
    EpgList,
    /// Favorite channels of the box
    GetMyChannel,
    /// Detailed listing for one channel
    EpgDetail,
    /// Keyword search over the program guide
    SearchEpg,
}

impl Endpoint {
    /// Every endpoint, in declaration order
    pub const ALL: [Endpoint; 9] = [
        Endpoint::DateTime,
        Endpoint::GetCurrentState,
        Endpoint::InputButton,
        Endpoint::GetMuteState,
        Endpoint::ChangeChannel,
        Endpoint::EpgList,
        Endpoint::GetMyChannel,
        Endpoint::EpgDetail,
        Endpoint::SearchEpg,
    ];

    /// Request path relative to the base URL
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::DateTime => "etc/datetime",
            Endpoint::GetCurrentState => "rmt/getCurrentState",
            Endpoint::InputButton => "rmt/inputButton",
            Endpoint::GetMuteState => "rmt/getMuteState",
            Endpoint::ChangeChannel => "rmt/changeChannel",
            Endpoint::EpgList => "epg/list",
            Endpoint::GetMyChannel => "epg/getMyChannel",
            Endpoint::EpgDetail => "epg/detail",
            Endpoint::SearchEpg => "srch/epg",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::DateTime => "DateTime",
            Endpoint::GetCurrentState => "GetCurrentState",
            Endpoint::InputButton => "InputButton",
            Endpoint::GetMuteState => "GetMuteState",
            Endpoint::ChangeChannel => "ChangeChannel",
            Endpoint::EpgList => "EpgList",
            Endpoint::GetMyChannel => "GetMyChannel",
            Endpoint::EpgDetail => "EpgDetail",
            Endpoint::SearchEpg => "SearchEpg",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_relative_and_unique() {
        let mut paths: Vec<&str> = Endpoint::ALL.iter().map(|e| e.path()).collect();
        for path in &paths {
            assert!(!path.starts_with('/'), "{} should be relative", path);
        }
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), Endpoint::ALL.len());
    }

    #[test]
    fn test_known_paths() {
        assert_eq!(Endpoint::DateTime.path(), "etc/datetime");
        assert_eq!(Endpoint::GetCurrentState.path(), "rmt/getCurrentState");
        assert_eq!(Endpoint::EpgDetail.path(), "epg/detail");
        assert_eq!(Endpoint::SearchEpg.name(), "SearchEpg");
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable numeric identity of a player account.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Human-facing handle of a player, unique within a game.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct PlayerHandle(pub String);

impl PlayerHandle {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Chip colour shared by partners.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Team {
    Red,
    Green,
    Blue,
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Team::Red => "Red",
            Team::Green => "Green",
            Team::Blue => "Blue",
        };
        f.write_str(s)
    }
}

/// A seated player as recorded in the game setup.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Account identifier
    pub id: PlayerId,
    /// Handle used to address the player in commands
    pub handle: PlayerHandle,
}

impl Player {
    pub fn new(id: u64, handle: impl Into<String>) -> Self {
        Self {
            id: PlayerId(id),
            handle: PlayerHandle::new(handle),
        }
    }
}

/// How a caller names the acting player: either by id or by handle.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PlayerRef {
    Id(PlayerId),
    Handle(PlayerHandle),
}

impl From<PlayerId> for PlayerRef {
    fn from(id: PlayerId) -> Self {
        PlayerRef::Id(id)
    }
}

impl From<PlayerHandle> for PlayerRef {
    fn from(handle: PlayerHandle) -> Self {
        PlayerRef::Handle(handle)
    }
}

impl From<&str> for PlayerRef {
    fn from(handle: &str) -> Self {
        PlayerRef::Handle(PlayerHandle::new(handle))
    }
}

impl fmt::Display for PlayerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerRef::Id(id) => write!(f, "#{}", id),
            PlayerRef::Handle(h) => write!(f, "{}", h),
        }
    }
}

/// Player counts a table can be set up with.
pub const SUPPORTED_PLAYER_COUNTS: [usize; 4] = [2, 3, 4, 6];

/// Team assignment by seat for a given player count.
///
/// Partners sit at fixed offsets: with four players seats 0 and 2 are Red,
/// with six players seats 0 and 3 are Red, and so on. Returns `None` for an
/// unsupported player count.
pub fn teams_for(player_count: usize) -> Option<Vec<Team>> {
    use Team::*;
    match player_count {
        2 => Some(vec![Red, Green]),
        3 => Some(vec![Red, Green, Blue]),
        4 => Some(vec![Red, Green, Red, Green]),
        6 => Some(vec![Red, Green, Blue, Red, Green, Blue]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partners_share_a_team() {
        let four = teams_for(4).unwrap();
        assert_eq!(four[0], four[2]);
        assert_ne!(four[0], four[1]);
        let six = teams_for(6).unwrap();
        assert_eq!(six[1], six[4]);
        assert_eq!(six[2], Team::Blue);
    }

    #[test]
    fn unsupported_counts_have_no_teams() {
        assert!(teams_for(1).is_none());
        assert!(teams_for(5).is_none());
        assert!(teams_for(8).is_none());
    }
}

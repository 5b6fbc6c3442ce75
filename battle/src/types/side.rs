//! Side identifiers

/// One of the two sides of a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SideId {
    Player,
    Enemy,
}

impl SideId {
    pub const BOTH: [SideId; 2] = [SideId::Player, SideId::Enemy];

    pub fn opponent(self) -> SideId {
        match self {
            SideId::Player => SideId::Enemy,
            SideId::Enemy => SideId::Player,
        }
    }

    /// Array index (player = 0, enemy = 1)
    pub fn index(self) -> usize {
        match self {
            SideId::Player => 0,
            SideId::Enemy => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SideId::Player => "player",
            SideId::Enemy => "enemy",
        }
    }
}

impl std::fmt::Display for SideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(SideId::Player.opponent(), SideId::Enemy);
        assert_eq!(SideId::Enemy.opponent(), SideId::Player);
    }

    #[test]
    fn test_index() {
        assert_eq!(SideId::Player.index(), 0);
        assert_eq!(SideId::Enemy.index(), 1);
    }
}

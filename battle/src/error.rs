//! Error types for battle setup and turn resolution

use thiserror::Error;

use crate::types::SideId;

/// What an out-of-range index was selecting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionKind {
    Move,
    Item,
    Member,
    Switch,
}

impl SelectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionKind::Move => "move",
            SelectionKind::Item => "item",
            SelectionKind::Member => "member",
            SelectionKind::Switch => "switch target",
        }
    }
}

impl std::fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a battle could not leave `NotStarted`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartFailure {
    EmptyRoster(SideId),
    NoUsableMember(SideId),
}

impl std::fmt::Display for StartFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartFailure::EmptyRoster(side) => write!(f, "{side} roster is empty"),
            StartFailure::NoUsableMember(side) => {
                write!(f, "{side} roster has no member able to fight")
            }
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    #[error("Cannot start battle: {0}")]
    CannotStart(StartFailure),

    #[error("Invalid {kind} selection {index} ({available} available)")]
    InvalidSelection {
        kind: SelectionKind,
        index: usize,
        available: usize,
    },

    #[error("Roster is full ({capacity} members)")]
    RosterFull { capacity: usize },

    #[error("{name} already knows 4 moves")]
    MoveSlotsFull { name: String },

    #[error("Battle is not in progress")]
    NotInProgress,
}

impl BattleError {
    pub(crate) fn invalid(kind: SelectionKind, index: usize, available: usize) -> Self {
        BattleError::InvalidSelection {
            kind,
            index,
            available,
        }
    }

    /// Only a bad selection can be retried; the caller re-prompts
    pub fn is_recoverable(&self) -> bool {
        matches!(self, BattleError::InvalidSelection { .. })
    }
}

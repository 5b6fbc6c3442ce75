//! Per-turn actions

use crate::error::{BattleError, SelectionKind};
use crate::types::Roster;

/// The single thing a side does in a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Use the active member's move at this slot
    UseMove(usize),

    /// Use an inventory item on a roster member
    UseItem { item: usize, target: usize },

    /// Bring in the roster member at this index
    Switch(usize),
}

impl Action {
    /// Check every index against the side's roster without mutating anything
    pub fn validate(&self, roster: &Roster, active: usize) -> Result<(), BattleError> {
        match *self {
            Action::UseMove(slot) => {
                let member = roster.check_member(active)?;
                if slot >= member.moves.len() {
                    return Err(BattleError::invalid(SelectionKind::Move, slot, member.moves.len()));
                }
            }
            Action::UseItem { item, target } => {
                roster.check_item(item)?;
                roster.check_member(target)?;
            }
            Action::Switch(index) => {
                let usable = roster
                    .member(index)
                    .is_some_and(|m| m.is_alive() && index != active);
                if !usable {
                    return Err(BattleError::invalid(SelectionKind::Switch, index, roster.len()));
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::UseMove(slot) => write!(f, "move {slot}"),
            Action::UseItem { item, target } => write!(f, "item {item} on member {target}"),
            Action::Switch(index) => write!(f, "switch to member {index}"),
        }
    }
}

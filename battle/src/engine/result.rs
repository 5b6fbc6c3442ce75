//! Battle outcome, per-turn reports and events

use crate::types::{Element, SideId, StatusCondition};

/// Engine lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleState {
    #[default]
    NotStarted,
    InProgress,
    /// Finished; `None` means nobody won
    Concluded(Option<SideId>),
}

impl BattleState {
    pub fn is_concluded(&self) -> bool {
        matches!(self, BattleState::Concluded(_))
    }

    pub fn winner(&self) -> Option<SideId> {
        match self {
            BattleState::Concluded(winner) => *winner,
            _ => None,
        }
    }
}

/// Running totals for one side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideTally {
    pub damage_dealt: u64,
    pub damage_taken: u64,

    /// Opposing members this side knocked out
    pub knocked_out: u32,

    /// Own members that fainted, from any cause
    pub fainted: u32,

    pub critical_hits: u32,
    pub status_inflicted: u32,
    pub items_used: u32,
}

/// Experience handed to one winning member
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperienceAward {
    /// Roster index of the member
    pub member: usize,

    /// Name after any evolution
    pub name: String,

    pub amount: u32,
    pub levels_gained: u32,

    /// Name before evolving, if the award triggered an evolution
    pub evolved_from: Option<String>,
}

/// Outcome record handed to the statistics sink
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleResult {
    /// `None` for a draw or a battle cut off by the turn limit
    pub winner: Option<SideId>,

    pub turns: u32,

    pub player: SideTally,
    pub enemy: SideTally,

    /// Sum of every award below
    pub experience_awarded: u32,

    pub awards: Vec<ExperienceAward>,
}

impl BattleResult {
    pub fn player_won(&self) -> bool {
        self.winner == Some(SideId::Player)
    }

    pub fn tally(&self, side: SideId) -> &SideTally {
        match side {
            SideId::Player => &self.player,
            SideId::Enemy => &self.enemy,
        }
    }

    pub fn level_ups(&self) -> u32 {
        self.awards.iter().map(|a| a.levels_gained).sum()
    }

    pub fn evolutions(&self) -> usize {
        self.awards.iter().filter(|a| a.evolved_from.is_some()).count()
    }
}

/// Something that happened during a turn, in resolution order
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    StatusRecovered {
        side: SideId,
        name: String,
        condition: StatusCondition,
    },
    /// Per-turn status effect before acting
    StatusEffect {
        side: SideId,
        name: String,
        condition: StatusCondition,
        hp_loss: u32,
        can_act: bool,
        message: String,
    },
    MoveUsed {
        side: SideId,
        attacker: String,
        move_name: String,
        element: Element,
    },
    Missed {
        side: SideId,
        attacker: String,
    },
    /// The target was already down when the move came
    MoveFailed {
        side: SideId,
        attacker: String,
    },
    Damage {
        /// Side of the member hit
        side: SideId,
        target: String,
        amount: u32,
        effectiveness: f32,
        critical: bool,
    },
    StatusInflicted {
        side: SideId,
        target: String,
        condition: StatusCondition,
    },
    ItemUsed {
        side: SideId,
        item: String,
        message: String,
        had_effect: bool,
    },
    Switched {
        side: SideId,
        from: String,
        to: String,
    },
    Defeated {
        side: SideId,
        name: String,
    },
    SentOut {
        side: SideId,
        name: String,
    },
    ExperienceGained {
        name: String,
        amount: u32,
        levels_gained: u32,
        level: u32,
    },
    Evolved {
        from: String,
        into: String,
    },
    Concluded {
        winner: Option<SideId>,
    },
}

impl std::fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BattleEvent::StatusRecovered { name, condition, .. } => {
                f.write_str(&crate::rules::recovery_message(name, *condition))
            }
            BattleEvent::StatusEffect { name, message, .. } => write!(f, "{name}: {message}"),
            BattleEvent::MoveUsed { attacker, move_name, .. } => write!(f, "{attacker} used {move_name}!"),
            BattleEvent::Missed { attacker, .. } => write!(f, "{attacker}'s attack missed!"),
            BattleEvent::MoveFailed { .. } => f.write_str("But there was no target..."),
            BattleEvent::Damage {
                target,
                amount,
                effectiveness,
                critical,
                ..
            } => {
                if *critical {
                    f.write_str("A critical hit! ")?;
                }
                if *effectiveness == 0.0 {
                    return write!(f, "It doesn't affect {target}...");
                }
                if *effectiveness > 1.0 {
                    f.write_str("It's super effective! ")?;
                } else if *effectiveness < 1.0 {
                    f.write_str("It's not very effective... ")?;
                }
                write!(f, "{target} took {amount} damage.")
            }
            BattleEvent::StatusInflicted { target, condition, .. } => {
                write!(f, "{target} is now {}!", condition.describe().to_ascii_lowercase())
            }
            BattleEvent::ItemUsed { item, message, .. } => write!(f, "Used {item}. {message}"),
            BattleEvent::Switched { side, from, to } => write!(f, "The {side} withdrew {from} and sent out {to}!"),
            BattleEvent::Defeated { name, .. } => write!(f, "{name} fainted!"),
            BattleEvent::SentOut { side, name } => write!(f, "The {side} sent out {name}!"),
            BattleEvent::ExperienceGained {
                name,
                amount,
                levels_gained,
                level,
            } => {
                write!(f, "{name} gained {amount} experience!")?;
                if *levels_gained > 0 {
                    write!(f, " {name} grew to level {level}!")?;
                }
                Ok(())
            }
            BattleEvent::Evolved { from, into } => write!(f, "{from} evolved into {into}!"),
            BattleEvent::Concluded { winner: Some(side) } => write!(f, "The {side} side wins!"),
            BattleEvent::Concluded { winner: None } => f.write_str("The battle ended with no winner."),
        }
    }
}

/// Everything one call to `play_turn` resolved
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    pub turn: u32,

    /// Side that acted first
    pub first: SideId,

    pub events: Vec<BattleEvent>,

    /// Engine state after the turn
    pub state: BattleState,
}

impl TurnReport {
    pub fn is_final(&self) -> bool {
        self.state.is_concluded()
    }

    /// Rendered messages, one per event
    pub fn messages(&self) -> impl Iterator<Item = String> + '_ {
        self.events.iter().map(ToString::to_string)
    }
}

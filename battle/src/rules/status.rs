//! Per-turn status effects and recovery
//!
//! Both entry points are pure apart from the dice they draw from. Only
//! conditions that actually roll consume a draw, so a scripted sequence
//! lines up with the checks a turn performs.

use super::dice::Dice;
use crate::types::StatusCondition;

/// Chance (percent) a paralyzed combatant is unable to move
pub const PARALYSIS_BLOCK_CHANCE: u8 = 25;

/// Chance (percent) a confused combatant hurts itself instead of acting
pub const CONFUSION_SELF_HIT_CHANCE: u8 = 33;

/// What a status condition does to its holder before it acts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusOutcome {
    pub can_act: bool,

    /// HP the holder loses this turn
    pub hp_loss: u32,

    pub message: Option<String>,
}

impl StatusOutcome {
    fn unaffected() -> Self {
        Self {
            can_act: true,
            hp_loss: 0,
            message: None,
        }
    }

    fn acts(hp_loss: u32, message: impl Into<String>) -> Self {
        Self {
            can_act: true,
            hp_loss,
            message: Some(message.into()),
        }
    }

    fn blocked(hp_loss: u32, message: impl Into<String>) -> Self {
        Self {
            can_act: false,
            hp_loss,
            message: Some(message.into()),
        }
    }
}

/// Fraction of max HP, truncated (a small holder can lose nothing)
fn fraction_of(max_hp: u32, divisor: u32) -> u32 {
    max_hp / divisor
}

/// Resolve the per-turn effect of `condition` on a holder with `max_hp`
pub fn resolve_turn_status<D: Dice + ?Sized>(
    condition: Option<StatusCondition>,
    max_hp: u32,
    dice: &mut D,
) -> StatusOutcome {
    let Some(condition) = condition else {
        return StatusOutcome::unaffected();
    };

    match condition {
        StatusCondition::Poison => {
            let loss = fraction_of(max_hp, 8);
            StatusOutcome::acts(loss, format!("It's hurt by poison! ({loss} damage)"))
        }
        StatusCondition::Burn => {
            let loss = fraction_of(max_hp, 16);
            StatusOutcome::acts(loss, format!("It's hurt by its burn! ({loss} damage)"))
        }
        StatusCondition::Paralysis => {
            if dice.chance(PARALYSIS_BLOCK_CHANCE) {
                StatusOutcome::blocked(0, "It's fully paralyzed!")
            } else {
                StatusOutcome::unaffected()
            }
        }
        StatusCondition::Sleep => StatusOutcome::blocked(0, "It's fast asleep!"),
        StatusCondition::Frozen => StatusOutcome::blocked(0, "It's frozen solid!"),
        StatusCondition::Confusion => {
            if dice.chance(CONFUSION_SELF_HIT_CHANCE) {
                let loss = fraction_of(max_hp, 8);
                StatusOutcome::blocked(loss, format!("It hurt itself in confusion! ({loss} damage)"))
            } else {
                StatusOutcome::acts(0, "It's confused!")
            }
        }
    }
}

/// Per-turn chance (percent) that `condition` wears off on its own
pub fn recovery_chance(condition: StatusCondition) -> u8 {
    match condition {
        StatusCondition::Sleep => 33,
        StatusCondition::Frozen => 20,
        StatusCondition::Confusion => 25,
        StatusCondition::Poison | StatusCondition::Paralysis | StatusCondition::Burn => 0,
    }
}

/// Roll for natural recovery. Conditions that never wear off draw nothing.
pub fn attempt_recovery<D: Dice + ?Sized>(condition: StatusCondition, dice: &mut D) -> bool {
    if !condition.recovers_naturally() {
        return false;
    }
    dice.chance(recovery_chance(condition))
}

/// Message shown when `name` recovers from `condition`
pub fn recovery_message(name: &str, condition: StatusCondition) -> String {
    match condition {
        StatusCondition::Sleep => format!("{name} woke up!"),
        StatusCondition::Frozen => format!("{name} thawed out!"),
        StatusCondition::Confusion => format!("{name} snapped out of confusion!"),
        other => format!("{name} is no longer {}!", other.describe().to_ascii_lowercase()),
    }
}

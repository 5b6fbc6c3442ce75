//! Item application
//!
//! One function dispatches over the closed set of item kinds. Consuming the
//! item is the caller's job; the outcome only says whether it did anything.

use crate::types::{Combatant, Item, ItemKind, Stat};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemOutcome {
    pub message: String,
    pub had_effect: bool,
}

impl ItemOutcome {
    fn effect(message: String) -> Self {
        Self {
            message,
            had_effect: true,
        }
    }

    fn no_effect() -> Self {
        Self {
            message: "It had no effect!".to_string(),
            had_effect: false,
        }
    }
}

fn boost_message(name: &str, stat: Stat, applied: i8, requested: i8) -> ItemOutcome {
    match applied {
        0 if requested >= 0 => ItemOutcome {
            message: format!("{name}'s {stat} won't go any higher!"),
            had_effect: false,
        },
        0 => ItemOutcome {
            message: format!("{name}'s {stat} won't go any lower!"),
            had_effect: false,
        },
        1 => ItemOutcome::effect(format!("{name}'s {stat} rose!")),
        n if n > 1 => ItemOutcome::effect(format!("{name}'s {stat} rose sharply!")),
        -1 => ItemOutcome::effect(format!("{name}'s {stat} fell!")),
        _ => ItemOutcome::effect(format!("{name}'s {stat} harshly fell!")),
    }
}

/// Apply `item` to `target` and describe what happened
pub fn apply_item(target: &mut Combatant, item: &Item) -> ItemOutcome {
    // Only a revive can reach a defeated combatant
    if target.is_defeated() && item.kind != ItemKind::Revive {
        return ItemOutcome::no_effect();
    }

    match &item.kind {
        ItemKind::Healing { amount } => {
            let recovered = target.heal(*amount);
            if recovered == 0 {
                return ItemOutcome {
                    message: format!("{}'s HP is already full!", target.name),
                    had_effect: false,
                };
            }
            ItemOutcome::effect(format!("{} recovered {recovered} HP!", target.name))
        }
        ItemKind::StatusHeal { cures } => match target.status {
            Some(active) if cures.is_none_or(|c| c == active) => {
                target.cure_status();
                ItemOutcome::effect(format!(
                    "{} is no longer {}!",
                    target.name,
                    active.describe().to_ascii_lowercase()
                ))
            }
            _ => ItemOutcome::no_effect(),
        },
        ItemKind::StatBoost { stat, stages } => {
            let applied = target.boost(*stat, *stages);
            boost_message(&target.name, *stat, applied, *stages)
        }
        ItemKind::Revive => {
            if target.revive() {
                ItemOutcome::effect(format!("{} was revived with {} HP!", target.name, target.hp))
            } else {
                ItemOutcome::no_effect()
            }
        }
    }
}

//! Consumable items

use super::stats::Stat;
use super::status::StatusCondition;

/// What an item does when applied
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Restore a flat amount of HP
    Healing { amount: u32 },

    /// Cure one condition, or any condition when `cures` is `None`
    StatusHeal { cures: Option<StatusCondition> },

    /// Shift a stat stage
    StatBoost { stat: Stat, stages: i8 },

    /// Bring a defeated combatant back at half HP
    Revive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    pub kind: ItemKind,
}

impl Item {
    pub fn new(name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn healing(name: impl Into<String>, amount: u32) -> Self {
        Self::new(name, ItemKind::Healing { amount })
    }

    pub fn status_heal(name: impl Into<String>, cures: Option<StatusCondition>) -> Self {
        Self::new(name, ItemKind::StatusHeal { cures })
    }

    pub fn stat_boost(name: impl Into<String>, stat: Stat, stages: i8) -> Self {
        Self::new(name, ItemKind::StatBoost { stat, stages })
    }

    pub fn revive(name: impl Into<String>) -> Self {
        Self::new(name, ItemKind::Revive)
    }

    pub fn is_healing(&self) -> bool {
        matches!(self.kind, ItemKind::Healing { .. })
    }

    /// Human-readable summary of the effect
    pub fn description(&self) -> String {
        match &self.kind {
            ItemKind::Healing { amount } => format!("Heals {amount} HP"),
            ItemKind::StatusHeal { cures: None } => "Heals all status conditions".to_string(),
            ItemKind::StatusHeal {
                cures: Some(condition),
            } => format!("Heals {condition}"),
            ItemKind::StatBoost { stat, stages } if *stages < 0 => {
                format!("Lowers {stat} by {}", stages.unsigned_abs())
            }
            ItemKind::StatBoost { stat, stages } => format!("Raises {stat} by {stages}"),
            ItemKind::Revive => "Revives a defeated member with half HP".to_string(),
        }
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptions() {
        assert_eq!(Item::healing("Potion", 20).description(), "Heals 20 HP");
        assert_eq!(
            Item::status_heal("Full Heal", None).description(),
            "Heals all status conditions"
        );
        assert_eq!(
            Item::status_heal("Antidote", Some(StatusCondition::Poison)).description(),
            "Heals Poison"
        );
        assert_eq!(
            Item::stat_boost("X Attack", Stat::Attack, 1).description(),
            "Raises Attack by 1"
        );
        assert_eq!(
            Item::revive("Revive").description(),
            "Revives a defeated member with half HP"
        );
    }

    #[test]
    fn test_is_healing() {
        assert!(Item::healing("Potion", 20).is_healing());
        assert!(!Item::revive("Revive").is_healing());
    }
}

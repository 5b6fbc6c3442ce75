//! Move definitions

use super::element::Element;
use super::status::StatusCondition;

/// Which attacking/defending stat pair a move uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveCategory {
    #[default]
    Physical,
    Special,
}

/// Immutable move definition
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub name: String,

    /// Base power (0 for pure status moves)
    pub power: u32,

    /// Hit chance in percent (0-100)
    pub accuracy: u8,

    pub element: Element,

    pub category: MoveCategory,

    /// Condition this move may inflict on a hit
    pub inflicts: Option<StatusCondition>,

    /// Infliction chance in percent (0-100)
    pub inflict_chance: u8,
}

impl Move {
    /// A physical damaging move with no secondary effect
    pub fn new(name: impl Into<String>, power: u32, accuracy: u8, element: Element) -> Self {
        Self {
            name: name.into(),
            power,
            accuracy: accuracy.min(100),
            element,
            category: MoveCategory::Physical,
            inflicts: None,
            inflict_chance: 0,
        }
    }

    pub fn special(mut self) -> Self {
        self.category = MoveCategory::Special;
        self
    }

    /// Attach a status condition inflicted with `chance` percent on hit
    pub fn with_status(mut self, condition: StatusCondition, chance: u8) -> Self {
        self.inflicts = Some(condition);
        self.inflict_chance = chance.min(100);
        self
    }

    /// True only when both a condition and a non-zero chance are set
    pub fn has_status_effect(&self) -> bool {
        self.inflicts.is_some() && self.inflict_chance > 0
    }

    pub fn is_status_only(&self) -> bool {
        self.power == 0
    }
}

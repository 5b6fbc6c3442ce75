//! Status conditions

/// Non-volatile status condition. A combatant carries at most one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusCondition {
    Poison,
    Paralysis,
    Burn,
    Sleep,
    Frozen,
    Confusion,
}

impl StatusCondition {
    pub const ALL: [StatusCondition; 6] = [
        StatusCondition::Poison,
        StatusCondition::Paralysis,
        StatusCondition::Burn,
        StatusCondition::Sleep,
        StatusCondition::Frozen,
        StatusCondition::Confusion,
    ];

    /// Parse a condition name ("poison", "Paralysis", ...)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "poison" | "poisoned" | "psn" => Some(StatusCondition::Poison),
            "paralysis" | "paralyzed" | "par" => Some(StatusCondition::Paralysis),
            "burn" | "burned" | "brn" => Some(StatusCondition::Burn),
            "sleep" | "asleep" | "slp" => Some(StatusCondition::Sleep),
            "frozen" | "freeze" | "frz" => Some(StatusCondition::Frozen),
            "confusion" | "confused" => Some(StatusCondition::Confusion),
            _ => None,
        }
    }

    /// Condition name ("Poison", "Sleep", ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCondition::Poison => "Poison",
            StatusCondition::Paralysis => "Paralysis",
            StatusCondition::Burn => "Burn",
            StatusCondition::Sleep => "Sleep",
            StatusCondition::Frozen => "Frozen",
            StatusCondition::Confusion => "Confusion",
        }
    }

    /// Adjective used in battle messages ("Poisoned", "Asleep", ...)
    pub fn describe(&self) -> &'static str {
        match self {
            StatusCondition::Poison => "Poisoned",
            StatusCondition::Paralysis => "Paralyzed",
            StatusCondition::Burn => "Burned",
            StatusCondition::Sleep => "Asleep",
            StatusCondition::Frozen => "Frozen",
            StatusCondition::Confusion => "Confused",
        }
    }

    /// Whether the condition can wear off by itself between turns
    pub fn recovers_naturally(&self) -> bool {
        matches!(
            self,
            StatusCondition::Sleep | StatusCondition::Frozen | StatusCondition::Confusion
        )
    }
}

impl std::fmt::Display for StatusCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

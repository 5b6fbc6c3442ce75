//! Base stats, stat stages and related types

/// Stats that can carry a stage modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stat {
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
    Accuracy,
    Evasion,
}

impl Stat {
    /// Parse from a stat name ("attack", "specialAttack", "sp. def", "spe", ...)
    pub fn from_name(s: &str) -> Option<Self> {
        let normalized = s.to_ascii_lowercase().replace([' ', '-', '_', '.'], "");
        match normalized.as_str() {
            "attack" | "atk" => Some(Stat::Attack),
            "defense" | "def" => Some(Stat::Defense),
            "specialattack" | "spatk" | "spa" => Some(Stat::SpecialAttack),
            "specialdefense" | "spdef" | "spd" => Some(Stat::SpecialDefense),
            "speed" | "spe" => Some(Stat::Speed),
            "accuracy" | "acc" => Some(Stat::Accuracy),
            "evasion" | "eva" => Some(Stat::Evasion),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stat::Attack => "Attack",
            Stat::Defense => "Defense",
            Stat::SpecialAttack => "Sp. Atk",
            Stat::SpecialDefense => "Sp. Def",
            Stat::Speed => "Speed",
            Stat::Accuracy => "Accuracy",
            Stat::Evasion => "Evasion",
        }
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Permanent stats of a combatant. `hp` is the maximum HP.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl BaseStats {
    pub fn new(
        hp: u32,
        attack: u32,
        defense: u32,
        special_attack: u32,
        special_defense: u32,
        speed: u32,
    ) -> Self {
        Self {
            hp,
            attack,
            defense,
            special_attack,
            special_defense,
            speed,
        }
    }

    /// Base value for a stageable stat. Accuracy and evasion have no base value.
    pub fn get(&self, stat: Stat) -> Option<u32> {
        match stat {
            Stat::Attack => Some(self.attack),
            Stat::Defense => Some(self.defense),
            Stat::SpecialAttack => Some(self.special_attack),
            Stat::SpecialDefense => Some(self.special_defense),
            Stat::Speed => Some(self.speed),
            Stat::Accuracy | Stat::Evasion => None,
        }
    }

    /// Add the same amount to every battle stat (not HP)
    pub(crate) fn grow_battle_stats(&mut self, amount: u32) {
        self.attack += amount;
        self.defense += amount;
        self.special_attack += amount;
        self.special_defense += amount;
        self.speed += amount;
    }
}

/// Stat stages (-6 to +6)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatStages {
    pub attack: i8,
    pub defense: i8,
    pub special_attack: i8,
    pub special_defense: i8,
    pub speed: i8,
    pub accuracy: i8,
    pub evasion: i8,
}

impl StatStages {
    pub const MIN: i8 = -6;
    pub const MAX: i8 = 6;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stat: Stat) -> i8 {
        match stat {
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpecialAttack => self.special_attack,
            Stat::SpecialDefense => self.special_defense,
            Stat::Speed => self.speed,
            Stat::Accuracy => self.accuracy,
            Stat::Evasion => self.evasion,
        }
    }

    /// Set stage for a stat (clamped to -6..+6)
    pub fn set(&mut self, stat: Stat, value: i8) {
        let clamped = value.clamp(Self::MIN, Self::MAX);
        let slot = match stat {
            Stat::Attack => &mut self.attack,
            Stat::Defense => &mut self.defense,
            Stat::SpecialAttack => &mut self.special_attack,
            Stat::SpecialDefense => &mut self.special_defense,
            Stat::Speed => &mut self.speed,
            Stat::Accuracy => &mut self.accuracy,
            Stat::Evasion => &mut self.evasion,
        };
        *slot = clamped;
    }

    /// Shift a stage by `amount` (either sign), returns the change actually applied
    pub fn boost(&mut self, stat: Stat, amount: i8) -> i8 {
        let current = self.get(stat);
        let target = current.saturating_add(amount).clamp(Self::MIN, Self::MAX);
        self.set(stat, target);
        target - current
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_clear(&self) -> bool {
        *self == Self::default()
    }

    /// Multiplier for a battle-stat stage.
    /// +1 = 1.5x, +2 = 2x, ..., +6 = 4x; -1 = 0.67x, -2 = 0.5x, ..., -6 = 0.25x
    pub fn multiplier(stage: i8) -> f32 {
        let stage = i32::from(stage.clamp(Self::MIN, Self::MAX));
        if stage >= 0 {
            (2 + stage) as f32 / 2.0
        } else {
            2.0 / (2 - stage) as f32
        }
    }

    /// Multiplier for accuracy/evasion stages.
    /// +1 = 1.33x, ..., +6 = 3x; -1 = 0.75x, ..., -6 = 0.33x
    pub fn accuracy_multiplier(stage: i8) -> f32 {
        let stage = i32::from(stage.clamp(Self::MIN, Self::MAX));
        if stage >= 0 {
            (3 + stage) as f32 / 3.0
        } else {
            3.0 / (3 - stage) as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stages_are_zero() {
        let stages = StatStages::new();
        assert!(stages.is_clear());
        assert_eq!(stages.get(Stat::Speed), 0);
    }

    #[test]
    fn test_set_clamps_to_bounds() {
        let mut stages = StatStages::new();
        stages.set(Stat::Attack, 10);
        assert_eq!(stages.attack, 6);

        stages.set(Stat::Defense, -10);
        assert_eq!(stages.defense, -6);
    }

    #[test]
    fn test_boost_reports_applied_change() {
        let mut stages = StatStages::new();
        assert_eq!(stages.boost(Stat::Attack, 2), 2);

        stages.attack = 5;
        assert_eq!(stages.boost(Stat::Attack, 3), 1);
        assert_eq!(stages.attack, 6);
        assert_eq!(stages.boost(Stat::Attack, 1), 0);

        stages.defense = -5;
        assert_eq!(stages.boost(Stat::Defense, -3), -1);
        assert_eq!(stages.defense, -6);
    }

    #[test]
    fn test_stages_stay_bounded_under_arbitrary_sequences() {
        let mut stages = StatStages::new();
        let deltas = [6, 6, -3, 127, -128, 4, -12, 1, -1, 9, -2, -6, -6, -6, 3];
        for (i, delta) in deltas.iter().enumerate() {
            let stat = [Stat::Attack, Stat::Speed, Stat::Evasion][i % 3];
            stages.boost(stat, *delta);
            for s in [Stat::Attack, Stat::Speed, Stat::Evasion] {
                let v = stages.get(s);
                assert!((StatStages::MIN..=StatStages::MAX).contains(&v));
            }
        }
    }

    #[test]
    fn test_clear() {
        let mut stages = StatStages {
            attack: 3,
            defense: -2,
            speed: 6,
            ..StatStages::default()
        };
        stages.clear();
        assert!(stages.is_clear());
    }

    #[test]
    fn test_stat_multiplier() {
        assert!((StatStages::multiplier(0) - 1.0).abs() < 0.001);
        assert!((StatStages::multiplier(1) - 1.5).abs() < 0.001);
        assert!((StatStages::multiplier(6) - 4.0).abs() < 0.001);
        assert!((StatStages::multiplier(-1) - 2.0 / 3.0).abs() < 0.001);
        assert!((StatStages::multiplier(-6) - 0.25).abs() < 0.001);
    }

    #[test]
    fn test_accuracy_multiplier() {
        assert!((StatStages::accuracy_multiplier(1) - 4.0 / 3.0).abs() < 0.001);
        assert!((StatStages::accuracy_multiplier(6) - 3.0).abs() < 0.001);
        assert!((StatStages::accuracy_multiplier(-1) - 0.75).abs() < 0.001);
    }

    #[test]
    fn test_stat_from_name() {
        assert_eq!(Stat::from_name("attack"), Some(Stat::Attack));
        assert_eq!(Stat::from_name("specialAttack"), Some(Stat::SpecialAttack));
        assert_eq!(Stat::from_name("Sp. Def"), Some(Stat::SpecialDefense));
        assert_eq!(Stat::from_name("spe"), Some(Stat::Speed));
        assert_eq!(Stat::from_name("hp"), None);
    }
}

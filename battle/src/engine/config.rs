//! Battle configuration

use crate::rules::{BattleRng, DamageRules};

/// Tunables for a single battle
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Generator seed; `None` seeds from entropy
    pub seed: Option<u64>,

    /// Turns played before the battle is called with no winner
    pub max_turns: u32,

    pub critical_chance_percent: u8,
    pub critical_multiplier: f32,

    /// Experience per level of each defeated member of the losing side
    pub experience_yield: u32,
}

impl BattleConfig {
    pub const DEFAULT_MAX_TURNS: u32 = 500;
    pub const DEFAULT_EXPERIENCE_YIELD: u32 = 20;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns.max(1);
        self
    }

    pub fn with_critical(mut self, chance_percent: u8, multiplier: f32) -> Self {
        self.critical_chance_percent = chance_percent.min(100);
        self.critical_multiplier = multiplier;
        self
    }

    pub fn with_experience_yield(mut self, experience_yield: u32) -> Self {
        self.experience_yield = experience_yield;
        self
    }

    pub fn damage_rules(&self) -> DamageRules {
        DamageRules {
            critical_chance_percent: self.critical_chance_percent,
            critical_multiplier: self.critical_multiplier,
        }
    }

    /// Build the battle's generator from the configured seed
    pub fn rng(&self) -> BattleRng {
        match self.seed {
            Some(seed) => BattleRng::from_seed(seed),
            None => BattleRng::from_entropy(),
        }
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_turns: Self::DEFAULT_MAX_TURNS,
            critical_chance_percent: DamageRules::DEFAULT_CRITICAL_CHANCE,
            critical_multiplier: DamageRules::DEFAULT_CRITICAL_MULTIPLIER,
            experience_yield: Self::DEFAULT_EXPERIENCE_YIELD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BattleConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.max_turns, 500);
        assert_eq!(config.critical_chance_percent, 6);
        assert_eq!(config.critical_multiplier, 1.5);
        assert_eq!(config.experience_yield, 20);
    }

    #[test]
    fn test_builders() {
        let config = BattleConfig::new()
            .with_seed(9)
            .with_max_turns(0)
            .with_critical(150, 2.0)
            .with_experience_yield(5);
        assert_eq!(config.rng().seed(), Some(9));
        assert_eq!(config.max_turns, 1);
        assert_eq!(config.damage_rules().critical_chance_percent, 100);
        assert_eq!(config.damage_rules().critical_multiplier, 2.0);
        assert_eq!(config.experience_yield, 5);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_config_uses_defaults() {
        let config: BattleConfig = serde_json::from_str(r#"{"seed": 3}"#).unwrap();
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.max_turns, BattleConfig::DEFAULT_MAX_TURNS);
    }
}

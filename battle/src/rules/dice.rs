//! Percent rolls and the seeded battle generator

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform percent rolls in `[1, 100]`
pub trait Dice {
    fn roll_percent(&mut self) -> u8;

    /// Draw once; succeeds when the roll is at most `percent`
    fn chance(&mut self, percent: u8) -> bool {
        self.roll_percent() <= percent
    }
}

/// The single generator a battle owns, seeded once at start
#[derive(Debug, Clone)]
pub struct BattleRng {
    rng: StdRng,
    seed: Option<u64>,
}

impl BattleRng {
    /// Deterministic generator; the same seed replays the same battle
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Seed used to build this generator, if it was deterministic
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for BattleRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl Dice for BattleRng {
    fn roll_percent(&mut self) -> u8 {
        self.rng.gen_range(1..=100)
    }
}

/// Dice that replay a fixed list of rolls, then repeat a fallback roll
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct ScriptedDice {
    rolls: std::collections::VecDeque<u8>,
    fallback: u8,
    pub(crate) drawn: usize,
}

#[cfg(test)]
impl ScriptedDice {
    pub(crate) fn new(rolls: &[u8], fallback: u8) -> Self {
        Self {
            rolls: rolls.iter().copied().collect(),
            fallback,
            drawn: 0,
        }
    }

    /// Every roll is 1: every check succeeds
    pub(crate) fn lucky() -> Self {
        Self::new(&[], 1)
    }

    /// Every roll is 100: every check below 100% fails
    pub(crate) fn unlucky() -> Self {
        Self::new(&[], 100)
    }
}

#[cfg(test)]
impl Dice for ScriptedDice {
    fn roll_percent(&mut self) -> u8 {
        self.drawn += 1;
        self.rolls.pop_front().unwrap_or(self.fallback)
    }
}

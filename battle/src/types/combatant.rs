//! Combatant state

use super::element::Element;
use super::moves::Move;
use super::stats::{BaseStats, Stat, StatStages};
use super::status::StatusCondition;
use crate::error::BattleError;

/// Pending evolution: becomes `into` once level reaches `level`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evolution {
    pub into: String,
    pub level: u32,
}

/// A single creature's mutable battle record
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub name: String,

    // === HP ===
    /// Current HP (never above `stats.hp`)
    pub hp: u32,

    /// Permanent stats; `stats.hp` is the maximum HP
    pub stats: BaseStats,

    // === Typing ===
    pub primary: Element,
    pub secondary: Option<Element>,

    // === Progression ===
    pub level: u32,
    pub experience: u32,
    /// Always `level^3`
    pub experience_to_next: u32,
    pub evolution: Option<Evolution>,

    // === Battle state ===
    pub status: Option<StatusCondition>,
    pub stages: StatStages,
    pub moves: Vec<Move>,
}

impl Combatant {
    pub const DEFAULT_LEVEL: u32 = 5;
    pub const MAX_LEVEL: u32 = 100;
    pub const MAX_MOVES: usize = 4;

    /// HP gained per level
    pub const HP_GROWTH: u32 = 4;
    /// Attack/Defense/Sp. Atk/Sp. Def/Speed gained per level
    pub const STAT_GROWTH: u32 = 2;

    /// Create a level 5 combatant at full HP with no moves
    pub fn new(
        name: impl Into<String>,
        stats: BaseStats,
        primary: Element,
        secondary: Option<Element>,
    ) -> Self {
        let stats = BaseStats {
            hp: stats.hp.max(1),
            ..stats
        };
        Self {
            name: name.into(),
            hp: stats.hp,
            stats,
            primary,
            // A repeated element is a single-typed creature
            secondary: secondary.filter(|s| *s != primary),
            level: Self::DEFAULT_LEVEL,
            experience: 0,
            experience_to_next: Self::threshold_for(Self::DEFAULT_LEVEL),
            evolution: None,
            status: None,
            stages: StatStages::new(),
            moves: Vec::new(),
        }
    }

    /// Builder form of [`Combatant::set_level`]
    pub fn with_level(mut self, level: u32) -> Self {
        self.set_level(level);
        self
    }

    pub fn with_evolution(mut self, into: impl Into<String>, level: u32) -> Self {
        self.evolution = Some(Evolution {
            into: into.into(),
            level,
        });
        self
    }

    /// Builder form of [`Combatant::add_move`]
    pub fn with_move(mut self, mv: Move) -> Result<Self, BattleError> {
        self.add_move(mv)?;
        Ok(self)
    }

    /// Experience required to leave `level`
    pub fn threshold_for(level: u32) -> u32 {
        level.saturating_pow(3)
    }

    /// Jump to a level, resetting progress toward the next one
    pub fn set_level(&mut self, level: u32) {
        self.level = level.clamp(1, Self::MAX_LEVEL);
        self.experience = 0;
        self.experience_to_next = Self::threshold_for(self.level);
    }

    /// Learn a move (up to four)
    pub fn add_move(&mut self, mv: Move) -> Result<(), BattleError> {
        if self.moves.len() >= Self::MAX_MOVES {
            return Err(BattleError::MoveSlotsFull {
                name: self.name.clone(),
            });
        }
        self.moves.push(mv);
        Ok(())
    }

    pub fn max_hp(&self) -> u32 {
        self.stats.hp
    }

    /// HP as percentage (0-100)
    pub fn hp_percent(&self) -> u32 {
        if self.stats.hp == 0 {
            return 0;
        }
        (u64::from(self.hp) * 100 / u64::from(self.stats.hp)) as u32
    }

    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }

    pub fn is_alive(&self) -> bool {
        !self.is_defeated()
    }

    /// Primary element followed by the secondary one, if any
    pub fn elements(&self) -> impl Iterator<Item = Element> + '_ {
        std::iter::once(self.primary).chain(self.secondary)
    }

    pub fn has_element(&self, element: Element) -> bool {
        self.elements().any(|e| e == element)
    }

    /// Combined multiplier of an attacking element against this combatant
    pub fn effectiveness_of(&self, attack: Element) -> f32 {
        self.elements().map(|e| attack.effectiveness(e)).product()
    }

    /// Lose up to `amount` HP, returns HP actually lost
    pub fn apply_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.hp);
        self.hp -= lost;
        lost
    }

    /// Recover up to `amount` HP (capped at max), returns HP actually recovered
    pub fn heal(&mut self, amount: u32) -> u32 {
        let recovered = amount.min(self.stats.hp.saturating_sub(self.hp));
        self.hp += recovered;
        recovered
    }

    /// Bring a defeated combatant back at half max HP. No-op if still standing.
    pub fn revive(&mut self) -> bool {
        if !self.is_defeated() {
            return false;
        }
        self.hp = (self.stats.hp / 2).max(1);
        self.status = None;
        self.stages.clear();
        true
    }

    /// Full HP, no status, no stage modifiers
    pub fn restore(&mut self) {
        self.hp = self.stats.hp;
        self.status = None;
        self.stages.clear();
    }

    /// Inflict a condition. The first condition wins until cured.
    pub fn apply_status(&mut self, condition: StatusCondition) -> bool {
        if self.status.is_some() {
            return false;
        }
        self.status = Some(condition);
        true
    }

    pub fn cure_status(&mut self) -> Option<StatusCondition> {
        self.status.take()
    }

    /// Shift a stat stage, returns the change actually applied
    pub fn boost(&mut self, stat: Stat, stages: i8) -> i8 {
        self.stages.boost(stat, stages)
    }

    /// Base stat scaled by its stage multiplier (at least 1).
    /// Accuracy and evasion have no base value and report 0.
    pub fn effective_stat(&self, stat: Stat) -> u32 {
        match self.stats.get(stat) {
            Some(base) => {
                let scaled = base as f32 * StatStages::multiplier(self.stages.get(stat));
                (scaled.floor() as u32).max(1)
            }
            None => 0,
        }
    }

    pub fn effective_speed(&self) -> u32 {
        self.effective_stat(Stat::Speed)
    }

    /// Gain experience, levelling up once per threshold crossed.
    /// Returns the number of levels gained.
    pub fn add_experience(&mut self, amount: u32) -> u32 {
        if self.level >= Self::MAX_LEVEL {
            return 0;
        }
        self.experience = self.experience.saturating_add(amount);

        let mut gained = 0;
        while self.level < Self::MAX_LEVEL && self.experience >= self.experience_to_next {
            self.experience -= self.experience_to_next;
            self.level += 1;
            self.stats.hp += Self::HP_GROWTH;
            self.hp += Self::HP_GROWTH;
            self.stats.grow_battle_stats(Self::STAT_GROWTH);
            self.experience_to_next = Self::threshold_for(self.level);
            gained += 1;
        }
        if self.level >= Self::MAX_LEVEL {
            self.experience = 0;
        }
        gained
    }

    pub fn can_evolve(&self) -> bool {
        self.evolution
            .as_ref()
            .is_some_and(|evo| !evo.into.is_empty() && self.level >= evo.level)
    }

    /// Evolve in place if eligible. Returns the previous name.
    pub fn evolve(&mut self) -> Option<String> {
        if !self.can_evolve() {
            return None;
        }
        let evo = self.evolution.take()?;
        let previous = std::mem::replace(&mut self.name, evo.into);

        self.stats.hp += 20;
        self.stats.grow_battle_stats(10);
        self.hp = self.stats.hp;
        Some(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Combatant {
        Combatant::new(
            "Sproutle",
            BaseStats::new(100, 50, 40, 60, 45, 70),
            Element::Grass,
            Some(Element::Poison),
        )
    }

    #[test]
    fn test_new_defaults() {
        let c = sample();
        assert_eq!(c.level, 5);
        assert_eq!(c.experience, 0);
        assert_eq!(c.experience_to_next, 125);
        assert_eq!(c.hp, 100);
        assert!(c.status.is_none());
        assert!(c.stages.is_clear());
        assert!(c.moves.is_empty());
    }

    #[test]
    fn test_duplicate_secondary_collapses() {
        let c = Combatant::new("Flare", BaseStats::new(10, 1, 1, 1, 1, 1), Element::Fire, Some(Element::Fire));
        assert_eq!(c.secondary, None);
        assert_eq!(c.elements().count(), 1);
    }

    #[test]
    fn test_damage_clamps_at_zero() {
        let mut c = sample();
        assert_eq!(c.apply_damage(30), 30);
        assert_eq!(c.hp, 70);
        assert_eq!(c.apply_damage(500), 70);
        assert_eq!(c.hp, 0);
        assert!(c.is_defeated());
    }

    #[test]
    fn test_hp_percent_with_huge_pools() {
        let mut c = Combatant::new("Colossus", BaseStats::new(100_000_000, 1, 1, 1, 1, 1), Element::Rock, None);
        assert_eq!(c.hp_percent(), 100);
        c.hp = 50_000_000;
        assert_eq!(c.hp_percent(), 50);
    }

    #[test]
    fn test_heal_caps_at_max() {
        let mut c = sample();
        c.hp = 90;
        assert_eq!(c.heal(20), 10);
        assert_eq!(c.hp, 100);
        assert_eq!(c.heal(5), 0);
    }

    #[test]
    fn test_first_status_wins() {
        let mut c = sample();
        assert!(c.apply_status(StatusCondition::Poison));
        assert!(!c.apply_status(StatusCondition::Burn));
        assert_eq!(c.status, Some(StatusCondition::Poison));

        assert_eq!(c.cure_status(), Some(StatusCondition::Poison));
        assert!(c.apply_status(StatusCondition::Burn));
        assert_eq!(c.status, Some(StatusCondition::Burn));
    }

    #[test]
    fn test_effective_stat_uses_stages() {
        let mut c = sample();
        assert_eq!(c.effective_speed(), 70);
        c.boost(Stat::Speed, 2);
        assert_eq!(c.effective_speed(), 140);
        c.boost(Stat::Speed, -4);
        assert_eq!(c.effective_speed(), 35);
        assert_eq!(c.effective_stat(Stat::Accuracy), 0);
    }

    #[test]
    fn test_dual_type_effectiveness() {
        let c = sample();
        // Fire vs Grass (2x) and Poison (1x)
        assert_eq!(c.effectiveness_of(Element::Fire), 2.0);
        // Water vs Grass (0.5x) and Poison (1x)
        assert_eq!(c.effectiveness_of(Element::Water), 0.5);
        // Poison vs Grass (2x) and Poison (0.5x)
        assert_eq!(c.effectiveness_of(Element::Poison), 1.0);
    }

    #[test]
    fn test_single_level_up() {
        let mut c = sample();
        assert_eq!(c.add_experience(125), 1);
        assert_eq!(c.level, 6);
        assert_eq!(c.experience, 0);
        assert_eq!(c.experience_to_next, 216);
        assert_eq!(c.stats.hp, 104);
        assert_eq!(c.hp, 104);
        assert_eq!(c.stats.attack, 52);
    }

    #[test]
    fn test_multi_level_up_in_one_award() {
        let mut c = sample();
        // 125 (5 -> 6) + 216 (6 -> 7) + 343 (7 -> 8) = 684, plus 10 left over
        assert_eq!(c.add_experience(694), 3);
        assert_eq!(c.level, 8);
        assert_eq!(c.experience, 10);
        assert_eq!(c.experience_to_next, 512);
    }

    #[test]
    fn test_below_threshold_does_not_level() {
        let mut c = sample();
        assert_eq!(c.add_experience(124), 0);
        assert_eq!(c.level, 5);
        assert_eq!(c.experience, 124);
    }

    #[test]
    fn test_level_cap() {
        let mut c = sample().with_level(99);
        assert_eq!(c.add_experience(u32::MAX), 1);
        assert_eq!(c.level, Combatant::MAX_LEVEL);
        assert_eq!(c.add_experience(1_000), 0);
    }

    #[test]
    fn test_set_level_resets_threshold() {
        let mut c = sample();
        c.experience = 40;
        c.set_level(10);
        assert_eq!(c.level, 10);
        assert_eq!(c.experience, 0);
        assert_eq!(c.experience_to_next, 1000);
    }

    #[test]
    fn test_move_slots() {
        let mut c = sample();
        for i in 0..4 {
            c.add_move(Move::new(format!("Move {i}"), 40, 100, Element::Normal))
                .unwrap();
        }
        let err = c
            .add_move(Move::new("Fifth", 40, 100, Element::Normal))
            .unwrap_err();
        assert!(matches!(err, BattleError::MoveSlotsFull { .. }));
        assert_eq!(c.moves.len(), 4);
    }

    #[test]
    fn test_evolution() {
        let mut c = sample().with_evolution("Bloomle", 7);
        assert!(!c.can_evolve());
        assert_eq!(c.evolve(), None);

        c.add_experience(125 + 216);
        assert_eq!(c.level, 7);
        assert!(c.can_evolve());

        c.hp = 10;
        assert_eq!(c.evolve().as_deref(), Some("Sproutle"));
        assert_eq!(c.name, "Bloomle");
        assert!(c.evolution.is_none());
        assert_eq!(c.hp, c.max_hp());
        assert!(!c.can_evolve());
    }

    #[test]
    fn test_revive_and_restore() {
        let mut c = sample();
        assert!(!c.revive());

        c.apply_damage(100);
        c.apply_status(StatusCondition::Burn);
        assert!(c.revive());
        assert_eq!(c.hp, 50);
        assert!(c.status.is_none());

        c.boost(Stat::Attack, 3);
        c.restore();
        assert_eq!(c.hp, 100);
        assert!(c.stages.is_clear());
    }
}

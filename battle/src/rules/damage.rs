//! Damage calculation
//!
//! A move resolves in a fixed order: accuracy roll, then (for moves with
//! power) a critical-hit roll, then the stat-ratio formula scaled by type
//! effectiveness and the environment boost.

use super::dice::Dice;
use crate::types::{Combatant, Environment, Move, MoveCategory, Stat, StatStages};

/// Critical-hit parameters taken from the battle configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageRules {
    /// Chance (percent) of a critical hit
    pub critical_chance_percent: u8,

    pub critical_multiplier: f32,
}

impl DamageRules {
    pub const DEFAULT_CRITICAL_CHANCE: u8 = 6;
    pub const DEFAULT_CRITICAL_MULTIPLIER: f32 = 1.5;
}

impl Default for DamageRules {
    fn default() -> Self {
        Self {
            critical_chance_percent: Self::DEFAULT_CRITICAL_CHANCE,
            critical_multiplier: Self::DEFAULT_CRITICAL_MULTIPLIER,
        }
    }
}

/// Result of one attack
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageOutcome {
    pub damage: u32,
    pub missed: bool,
    pub critical: bool,

    /// Combined type multiplier against the defender (1.0 on a miss)
    pub effectiveness: f32,
}

impl DamageOutcome {
    fn miss() -> Self {
        Self {
            damage: 0,
            missed: true,
            critical: false,
            effectiveness: 1.0,
        }
    }

    /// The move connected (it may still deal 0 damage)
    pub fn landed(&self) -> bool {
        !self.missed
    }

    pub fn is_super_effective(&self) -> bool {
        self.effectiveness > 1.0
    }

    pub fn is_not_very_effective(&self) -> bool {
        self.effectiveness > 0.0 && self.effectiveness < 1.0
    }

    pub fn is_immune(&self) -> bool {
        self.effectiveness == 0.0
    }
}

/// Attacking and defending stats for a move's category
fn stat_pair(category: MoveCategory) -> (Stat, Stat) {
    match category {
        MoveCategory::Physical => (Stat::Attack, Stat::Defense),
        MoveCategory::Special => (Stat::SpecialAttack, Stat::SpecialDefense),
    }
}

/// Stat-ratio formula before any multiplier:
/// `((2 * level / 5 + 2) * power * attack / defense) / 50 + 2`
pub fn base_damage(level: u32, power: u32, attack: u32, defense: u32) -> f32 {
    let level_factor = (2 * level / 5 + 2) as f32;
    let ratio = attack as f32 / defense.max(1) as f32;
    level_factor * power as f32 * ratio / 50.0 + 2.0
}

/// Hit threshold after accuracy and evasion stages (0-100)
fn hit_threshold(attacker: &Combatant, defender: &Combatant, mv: &Move) -> u8 {
    let stage = attacker
        .stages
        .accuracy
        .saturating_sub(defender.stages.evasion)
        .clamp(StatStages::MIN, StatStages::MAX);
    let scaled = f32::from(mv.accuracy) * StatStages::accuracy_multiplier(stage);
    scaled.round().clamp(0.0, 100.0) as u8
}

/// Type effectiveness, environment boost and the stat ratio, without rolls
fn scaled_damage(attacker: &Combatant, defender: &Combatant, mv: &Move, environment: &Environment) -> (f32, f32) {
    let (atk_stat, def_stat) = stat_pair(mv.category);
    let base = base_damage(
        attacker.level,
        mv.power,
        attacker.effective_stat(atk_stat),
        defender.effective_stat(def_stat),
    );
    let effectiveness = defender.effectiveness_of(mv.element);
    (base * effectiveness * environment.boost_for(mv.element), effectiveness)
}

/// Resolve `mv` from `attacker` against `defender`.
///
/// Draws one roll for accuracy and, if the move has power and connects,
/// one roll for a critical hit.
pub fn compute_damage<D: Dice + ?Sized>(
    attacker: &Combatant,
    defender: &Combatant,
    mv: &Move,
    environment: &Environment,
    rules: &DamageRules,
    dice: &mut D,
) -> DamageOutcome {
    if !dice.chance(hit_threshold(attacker, defender, mv)) {
        return DamageOutcome::miss();
    }

    let effectiveness = defender.effectiveness_of(mv.element);
    if mv.is_status_only() {
        return DamageOutcome {
            damage: 0,
            missed: false,
            critical: false,
            effectiveness,
        };
    }

    let critical = dice.chance(rules.critical_chance_percent);
    let (mut damage, effectiveness) = scaled_damage(attacker, defender, mv, environment);
    if critical {
        damage *= rules.critical_multiplier;
    }

    let damage = if effectiveness == 0.0 {
        0
    } else {
        (damage.floor() as u32).max(1)
    };

    DamageOutcome {
        damage,
        missed: false,
        critical,
        effectiveness,
    }
}

/// Average damage `mv` would deal, weighted by its hit chance.
/// Used for move selection; draws nothing.
pub fn expected_damage(attacker: &Combatant, defender: &Combatant, mv: &Move, environment: &Environment) -> f32 {
    if mv.is_status_only() {
        return 0.0;
    }
    let (damage, _) = scaled_damage(attacker, defender, mv, environment);
    damage * f32::from(hit_threshold(attacker, defender, mv)) / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::dice::ScriptedDice;
    use crate::types::{BaseStats, Element, StatusCondition, Terrain};

    fn combatant(primary: Element, secondary: Option<Element>) -> Combatant {
        Combatant::new("Test", BaseStats::new(200, 50, 50, 50, 50, 50), primary, secondary).with_level(50)
    }

    fn tackle() -> Move {
        Move::new("Tackle", 40, 100, Element::Normal)
    }

    /// Accuracy passes, no critical
    fn plain_hit() -> ScriptedDice {
        ScriptedDice::new(&[1, 100], 100)
    }

    #[test]
    fn test_base_formula() {
        // (22 * 40 * 1) / 50 + 2 = 19.6
        assert!((base_damage(50, 40, 50, 50) - 19.6).abs() < 0.001);
        // Level 5: (4 * 40 * 1) / 50 + 2 = 5.2
        assert!((base_damage(5, 40, 50, 50) - 5.2).abs() < 0.001);
    }

    #[test]
    fn test_neutral_hit() {
        let a = combatant(Element::Normal, None);
        let d = combatant(Element::Normal, None);
        let outcome = compute_damage(&a, &d, &tackle(), &Environment::neutral(), &DamageRules::default(), &mut plain_hit());
        assert_eq!(outcome.damage, 19);
        assert!(!outcome.missed);
        assert!(!outcome.critical);
        assert_eq!(outcome.effectiveness, 1.0);
    }

    #[test]
    fn test_critical_multiplies() {
        let a = combatant(Element::Normal, None);
        let d = combatant(Element::Normal, None);
        let mut dice = ScriptedDice::new(&[1, 6], 100);
        let outcome = compute_damage(&a, &d, &tackle(), &Environment::neutral(), &DamageRules::default(), &mut dice);
        assert!(outcome.critical);
        // 19.6 * 1.5 = 29.4
        assert_eq!(outcome.damage, 29);
    }

    #[test]
    fn test_miss_short_circuits() {
        let a = combatant(Element::Normal, None);
        let d = combatant(Element::Normal, None);
        let shaky = Move::new("Shaky", 90, 70, Element::Normal).with_status(StatusCondition::Burn, 100);
        let mut dice = ScriptedDice::new(&[71], 1);
        let outcome = compute_damage(&a, &d, &shaky, &Environment::neutral(), &DamageRules::default(), &mut dice);
        assert!(outcome.missed);
        assert!(!outcome.landed());
        assert_eq!(outcome.damage, 0);
        assert_eq!(dice.drawn, 1);
    }

    #[test]
    fn test_immunity_is_exactly_zero() {
        let a = combatant(Element::Normal, None);
        let d = combatant(Element::Ghost, None);
        let mut dice = ScriptedDice::lucky();
        let outcome = compute_damage(&a, &d, &tackle(), &Environment::neutral(), &DamageRules::default(), &mut dice);
        assert!(outcome.landed());
        assert!(outcome.is_immune());
        assert_eq!(outcome.damage, 0);
    }

    #[test]
    fn test_dual_type_effectiveness_multiplies() {
        let a = combatant(Element::Normal, None);
        let d = combatant(Element::Grass, Some(Element::Ground));
        let ember = Move::new("Ember", 40, 100, Element::Fire);
        let outcome = compute_damage(&a, &d, &ember, &Environment::neutral(), &DamageRules::default(), &mut plain_hit());
        assert_eq!(outcome.effectiveness, 2.0);
        assert!(outcome.is_super_effective());
        // 19.6 * 2 = 39.2
        assert_eq!(outcome.damage, 39);
    }

    #[test]
    fn test_resisted_still_deals_at_least_one() {
        let mut a = combatant(Element::Normal, None).with_level(1);
        a.boost(Stat::Attack, -6);
        let d = combatant(Element::Rock, Some(Element::Steel));
        let outcome = compute_damage(&a, &d, &tackle(), &Environment::neutral(), &DamageRules::default(), &mut plain_hit());
        assert!(outcome.is_not_very_effective());
        assert!(outcome.damage >= 1);
    }

    #[test]
    fn test_environment_boost_matches_element() {
        let a = combatant(Element::Normal, None);
        let d = combatant(Element::Normal, None);
        let ember = Move::new("Ember", 40, 100, Element::Fire);
        let volcano = Environment::from(Terrain::Volcano);

        let boosted = compute_damage(&a, &d, &ember, &volcano, &DamageRules::default(), &mut plain_hit());
        // 19.6 * 1.5 = 29.4
        assert_eq!(boosted.damage, 29);

        let unboosted = compute_damage(&a, &d, &tackle(), &volcano, &DamageRules::default(), &mut plain_hit());
        assert_eq!(unboosted.damage, 19);
    }

    #[test]
    fn test_special_moves_use_special_stats() {
        let a = Combatant::new("Caster", BaseStats::new(100, 10, 50, 100, 50, 50), Element::Normal, None).with_level(50);
        let d = Combatant::new("Wall", BaseStats::new(100, 50, 200, 50, 50, 50), Element::Normal, None);
        let beam = Move::new("Beam", 40, 100, Element::Normal).special();
        let outcome = compute_damage(&a, &d, &beam, &Environment::neutral(), &DamageRules::default(), &mut plain_hit());
        // (22 * 40 * 2) / 50 + 2 = 37.2
        assert_eq!(outcome.damage, 37);
    }

    #[test]
    fn test_stages_change_damage() {
        let mut a = combatant(Element::Normal, None);
        a.boost(Stat::Attack, 2);
        let d = combatant(Element::Normal, None);
        let outcome = compute_damage(&a, &d, &tackle(), &Environment::neutral(), &DamageRules::default(), &mut plain_hit());
        // (22 * 40 * 2) / 50 + 2 = 37.2
        assert_eq!(outcome.damage, 37);
    }

    #[test]
    fn test_status_move_deals_nothing_and_skips_critical() {
        let a = combatant(Element::Normal, None);
        let d = combatant(Element::Normal, None);
        let powder = Move::new("Sleep Powder", 0, 75, Element::Grass).with_status(StatusCondition::Sleep, 100);
        let mut dice = ScriptedDice::lucky();
        let outcome = compute_damage(&a, &d, &powder, &Environment::neutral(), &DamageRules::default(), &mut dice);
        assert!(outcome.landed());
        assert_eq!(outcome.damage, 0);
        assert!(!outcome.critical);
        assert_eq!(dice.drawn, 1);
    }

    #[test]
    fn test_evasion_lowers_hit_chance() {
        let a = combatant(Element::Normal, None);
        let mut d = combatant(Element::Normal, None);
        d.boost(Stat::Evasion, 1);
        // 100 * 0.75 = 75
        let mut dice = ScriptedDice::new(&[76], 100);
        let outcome = compute_damage(&a, &d, &tackle(), &Environment::neutral(), &DamageRules::default(), &mut dice);
        assert!(outcome.missed);
    }

    #[test]
    fn test_expected_damage_weights_accuracy() {
        let a = combatant(Element::Normal, None);
        let d = combatant(Element::Normal, None);
        let half = Move::new("Half", 40, 50, Element::Normal);
        assert!((expected_damage(&a, &d, &half, &Environment::neutral()) - 9.8).abs() < 0.01);
        assert_eq!(expected_damage(&a, &d, &Move::new("Growl", 0, 100, Element::Normal), &Environment::neutral()), 0.0);
    }
}

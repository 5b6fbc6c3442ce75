//! Decision providers
//!
//! The engine never prompts anyone itself. Each turn it hands a read-only
//! [`BattleView`] to a provider and gets an [`Action`] back; a rejected
//! choice is reported through [`DecisionProvider::rejected`] and the
//! provider is asked again.

use super::action::Action;
use crate::error::BattleError;
use crate::query;
use crate::rules::expected_damage;
use crate::types::{Combatant, Environment, Roster, SideId};

/// What one side can see when choosing
#[derive(Debug, Clone, Copy)]
pub struct BattleView<'b> {
    pub side: SideId,
    pub turn: u32,
    pub own: &'b Roster,
    pub own_active: usize,
    pub foe: &'b Roster,
    pub foe_active: usize,
    pub environment: &'b Environment,
}

impl<'b> BattleView<'b> {
    pub fn active(&self) -> Option<&'b Combatant> {
        self.own.member(self.own_active)
    }

    pub fn foe_active(&self) -> Option<&'b Combatant> {
        self.foe.member(self.foe_active)
    }
}

pub trait DecisionProvider {
    fn choose(&mut self, view: &BattleView<'_>) -> Action;

    /// Called when the last choice was out of range
    fn rejected(&mut self, _view: &BattleView<'_>, _error: &BattleError) {}
}

impl<F> DecisionProvider for F
where
    F: FnMut(&BattleView<'_>) -> Action,
{
    fn choose(&mut self, view: &BattleView<'_>) -> Action {
        self(view)
    }
}

/// Always uses the first move; a member without moves switches out
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstMoveProvider;

impl DecisionProvider for FirstMoveProvider {
    fn choose(&mut self, view: &BattleView<'_>) -> Action {
        let has_moves = view.active().is_some_and(|m| !m.moves.is_empty());
        if !has_moves {
            if let Some((index, _)) = view.own.bench(view.own_active).next() {
                return Action::Switch(index);
            }
        }
        Action::UseMove(0)
    }
}

/// Heals when low, otherwise picks the move with the best expected damage
#[derive(Debug, Clone, Copy)]
pub struct GreedyProvider {
    /// Use a healing item at or below this HP percentage
    pub heal_below_percent: u32,
}

impl GreedyProvider {
    pub const DEFAULT_HEAL_BELOW: u32 = 25;

    pub fn new() -> Self {
        Self::default()
    }

    fn healing_item(roster: &Roster) -> Option<usize> {
        roster.items().iter().position(|item| item.is_healing())
    }

    /// Score a move against the foe. Status-only moves only count while the
    /// foe is unafflicted and not immune to their element.
    fn score(view: &BattleView<'_>, user: &Combatant, foe: &Combatant, slot: usize) -> f32 {
        let mv = &user.moves[slot];
        if mv.is_status_only() {
            let foe_elements: Vec<_> = foe.elements().collect();
            let usable = mv.has_status_effect()
                && foe.status.is_none()
                && !query::is_immune_to(&foe_elements, mv.element);
            return if usable { 0.5 } else { 0.0 };
        }
        expected_damage(user, foe, mv, view.environment)
    }
}

impl Default for GreedyProvider {
    fn default() -> Self {
        Self {
            heal_below_percent: Self::DEFAULT_HEAL_BELOW,
        }
    }
}

impl DecisionProvider for GreedyProvider {
    fn choose(&mut self, view: &BattleView<'_>) -> Action {
        let Some(user) = view.active() else {
            return Action::UseMove(0);
        };

        if user.hp_percent() <= self.heal_below_percent {
            if let Some(item) = Self::healing_item(view.own) {
                return Action::UseItem {
                    item,
                    target: view.own_active,
                };
            }
        }

        let Some(foe) = view.foe_active() else {
            return Action::UseMove(0);
        };

        let mut best: Option<(usize, f32)> = None;
        for slot in 0..user.moves.len() {
            let score = Self::score(view, user, foe, slot);
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((slot, score));
            }
        }

        match best {
            Some((slot, _)) => Action::UseMove(slot),
            None => FirstMoveProvider.choose(view),
        }
    }
}

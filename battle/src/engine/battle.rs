//! Battle - the turn loop
//!
//! A battle borrows both rosters mutably for its whole lifetime and addresses
//! the active member of each side by index. Each turn validates both actions
//! first, so a rejected selection leaves every roster untouched.

use super::action::Action;
use super::config::BattleConfig;
use super::decision::{BattleView, DecisionProvider};
use super::result::{BattleEvent, BattleResult, BattleState, ExperienceAward, SideTally, TurnReport};
use crate::error::{BattleError, StartFailure};
use crate::rules::{attempt_recovery, compute_damage, resolve_turn_status, BattleRng, DamageRules, Dice};
use crate::types::{Combatant, Environment, Roster, SideId};

/// The roster belonging to `side`
fn pick<'r>(player: &'r mut Roster, enemy: &'r mut Roster, side: SideId) -> &'r mut Roster {
    match side {
        SideId::Player => player,
        SideId::Enemy => enemy,
    }
}

/// `(own, foe)` from the point of view of `side`
fn split<'r>(player: &'r mut Roster, enemy: &'r mut Roster, side: SideId) -> (&'r mut Roster, &'r mut Roster) {
    match side {
        SideId::Player => (player, enemy),
        SideId::Enemy => (enemy, player),
    }
}

/// A battle between a player roster and an enemy roster
#[derive(Debug)]
pub struct Battle<'a, D = BattleRng> {
    player: &'a mut Roster,
    enemy: &'a mut Roster,

    /// Active member index per side (indexed by `SideId::index`)
    active: [usize; 2],

    environment: Environment,
    config: BattleConfig,
    rules: DamageRules,
    dice: D,

    state: BattleState,
    turn: u32,

    tallies: [SideTally; 2],
    awards: Vec<ExperienceAward>,
}

impl<'a> Battle<'a> {
    /// Battle drawing from a generator seeded per `config`
    pub fn new(player: &'a mut Roster, enemy: &'a mut Roster, environment: Environment, config: BattleConfig) -> Self {
        let rng = config.rng();
        Self::with_dice(player, enemy, environment, config, rng)
    }

    /// Seed the generator was built from, if deterministic
    pub fn seed(&self) -> Option<u64> {
        self.dice.seed()
    }
}

impl<'a, D: Dice> Battle<'a, D> {
    /// Maximum consecutive rejected choices before `run` gives up
    pub const MAX_SELECTION_ATTEMPTS: usize = 16;

    pub fn with_dice(
        player: &'a mut Roster,
        enemy: &'a mut Roster,
        environment: Environment,
        config: BattleConfig,
        dice: D,
    ) -> Self {
        let rules = config.damage_rules();
        Self {
            player,
            enemy,
            active: [0, 0],
            environment,
            config,
            rules,
            dice,
            state: BattleState::NotStarted,
            turn: 0,
            tallies: [SideTally::default(); 2],
            awards: Vec::new(),
        }
    }

    // === Accessors ===

    pub fn state(&self) -> BattleState {
        self.state
    }

    /// Turns played so far (0 before the first turn)
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn roster(&self, side: SideId) -> &Roster {
        match side {
            SideId::Player => &*self.player,
            SideId::Enemy => &*self.enemy,
        }
    }

    pub fn active_index(&self, side: SideId) -> usize {
        self.active[side.index()]
    }

    pub fn active(&self, side: SideId) -> Option<&Combatant> {
        self.roster(side).member(self.active_index(side))
    }

    pub fn view(&self, side: SideId) -> BattleView<'_> {
        let foe = side.opponent();
        BattleView {
            side,
            turn: self.turn,
            own: self.roster(side),
            own_active: self.active_index(side),
            foe: self.roster(foe),
            foe_active: self.active_index(foe),
            environment: &self.environment,
        }
    }

    // === Lifecycle ===

    /// Move from `NotStarted` to `InProgress`, sending out each side's first
    /// usable member. Fails without changing state if either side cannot fight.
    pub fn start(&mut self) -> Result<(), BattleError> {
        match self.state {
            BattleState::NotStarted => {}
            BattleState::InProgress => return Ok(()),
            BattleState::Concluded(_) => return Err(BattleError::NotInProgress),
        }

        let mut leads = [0; 2];
        for side in SideId::BOTH {
            let roster = self.roster(side);
            if roster.is_empty() {
                return Err(BattleError::CannotStart(StartFailure::EmptyRoster(side)));
            }
            leads[side.index()] = roster
                .first_alive()
                .ok_or(BattleError::CannotStart(StartFailure::NoUsableMember(side)))?;
        }

        self.active = leads;
        self.state = BattleState::InProgress;
        tracing::info!(
            player = %self.player.members()[leads[0]].name,
            enemy = %self.enemy.members()[leads[1]].name,
            player_size = self.player.len(),
            enemy_size = self.enemy.len(),
            "battle started"
        );
        Ok(())
    }

    /// Resolve one turn with both sides' chosen actions.
    ///
    /// Both actions are validated before anything is resolved; an invalid
    /// selection is returned as a recoverable error and nothing changes.
    pub fn play_turn(&mut self, player_action: Action, enemy_action: Action) -> Result<TurnReport, BattleError> {
        if self.state != BattleState::InProgress {
            return Err(BattleError::NotInProgress);
        }

        for (side, action) in [(SideId::Player, player_action), (SideId::Enemy, enemy_action)] {
            if let Err(error) = action.validate(self.roster(side), self.active_index(side)) {
                tracing::warn!(side = %side, action = %action, error = %error, "rejected selection");
                return Err(error);
            }
        }

        self.turn += 1;
        let order = self.speed_order();
        let mut events = Vec::new();

        for side in order {
            let action = match side {
                SideId::Player => player_action,
                SideId::Enemy => enemy_action,
            };
            self.take_action(side, action, &mut events);
        }

        self.end_of_turn(&mut events);

        Ok(TurnReport {
            turn: self.turn,
            first: order[0],
            events,
            state: self.state,
        })
    }

    /// Drive the battle to conclusion, asking each provider for every turn's
    /// action and re-asking after a rejected selection.
    pub fn run<P, E>(&mut self, player: &mut P, enemy: &mut E) -> Result<BattleResult, BattleError>
    where
        P: DecisionProvider + ?Sized,
        E: DecisionProvider + ?Sized,
    {
        if self.state == BattleState::NotStarted {
            self.start()?;
        }

        while self.state == BattleState::InProgress {
            let player_action = self.select(SideId::Player, player)?;
            let enemy_action = self.select(SideId::Enemy, enemy)?;
            self.play_turn(player_action, enemy_action)?;
        }

        Ok(self.result())
    }

    /// Snapshot of the outcome so far
    pub fn result(&self) -> BattleResult {
        BattleResult {
            winner: self.state.winner(),
            turns: self.turn,
            player: self.tallies[SideId::Player.index()],
            enemy: self.tallies[SideId::Enemy.index()],
            experience_awarded: self.awards.iter().map(|a| a.amount).sum(),
            awards: self.awards.clone(),
        }
    }

    fn select<P>(&self, side: SideId, provider: &mut P) -> Result<Action, BattleError>
    where
        P: DecisionProvider + ?Sized,
    {
        let mut attempts = 0;
        loop {
            let view = self.view(side);
            let action = provider.choose(&view);
            match action.validate(view.own, view.own_active) {
                Ok(()) => return Ok(action),
                Err(error) if error.is_recoverable() && attempts + 1 < Self::MAX_SELECTION_ATTEMPTS => {
                    tracing::warn!(side = %side, action = %action, error = %error, "selection rejected, asking again");
                    provider.rejected(&view, &error);
                    attempts += 1;
                }
                Err(error) => return Err(error),
            }
        }
    }

    // === Turn resolution ===

    /// Faster active member first; ties go to the player
    fn speed_order(&self) -> [SideId; 2] {
        let speed = |side| self.active(side).map_or(0, Combatant::effective_speed);
        if speed(SideId::Player) >= speed(SideId::Enemy) {
            [SideId::Player, SideId::Enemy]
        } else {
            [SideId::Enemy, SideId::Player]
        }
    }

    fn take_action(&mut self, side: SideId, action: Action, events: &mut Vec<BattleEvent>) {
        // A member knocked out earlier this turn does nothing
        if self.active(side).is_none_or(Combatant::is_defeated) {
            return;
        }
        if !self.resolve_status(side, events) {
            return;
        }

        match action {
            Action::UseMove(slot) => self.use_move(side, slot, events),
            Action::UseItem { item, target } => self.use_item(side, item, target, events),
            Action::Switch(index) => self.switch(side, index, events),
        }
    }

    /// Recovery roll, then the per-turn effect. Returns whether the member may act.
    fn resolve_status(&mut self, side: SideId, events: &mut Vec<BattleEvent>) -> bool {
        let slot = self.active[side.index()];
        let Some(member) = pick(self.player, self.enemy, side).member_mut(slot) else {
            return false;
        };

        if let Some(condition) = member.status {
            if attempt_recovery(condition, &mut self.dice) {
                member.cure_status();
                tracing::debug!(side = %side, member = %member.name, condition = %condition, "status recovered");
                events.push(BattleEvent::StatusRecovered {
                    side,
                    name: member.name.clone(),
                    condition,
                });
            }
        }

        let Some(condition) = member.status else {
            return true;
        };
        let outcome = resolve_turn_status(Some(condition), member.max_hp(), &mut self.dice);
        let lost = member.apply_damage(outcome.hp_loss);
        self.tallies[side.index()].damage_taken += u64::from(lost);

        if let Some(message) = outcome.message {
            tracing::debug!(
                side = %side,
                member = %member.name,
                condition = %condition,
                hp_loss = lost,
                can_act = outcome.can_act,
                "status effect"
            );
            events.push(BattleEvent::StatusEffect {
                side,
                name: member.name.clone(),
                condition,
                hp_loss: lost,
                can_act: outcome.can_act,
                message,
            });
        }

        if member.is_defeated() {
            self.tallies[side.index()].fainted += 1;
            tracing::debug!(side = %side, member = %member.name, "defeated by status");
            events.push(BattleEvent::Defeated {
                side,
                name: member.name.clone(),
            });
            return false;
        }
        outcome.can_act
    }

    fn use_move(&mut self, side: SideId, slot: usize, events: &mut Vec<BattleEvent>) {
        let foe_side = side.opponent();
        let attacker_index = self.active[side.index()];
        let defender_index = self.active[foe_side.index()];

        let (own, foe) = split(self.player, self.enemy, side);
        let (Some(attacker), Some(defender)) = (own.member(attacker_index), foe.member_mut(defender_index)) else {
            return;
        };
        let Some(mv) = attacker.moves.get(slot) else {
            return;
        };

        events.push(BattleEvent::MoveUsed {
            side,
            attacker: attacker.name.clone(),
            move_name: mv.name.clone(),
            element: mv.element,
        });

        if defender.is_defeated() {
            tracing::debug!(side = %side, attacker = %attacker.name, mv = %mv.name, "no target");
            events.push(BattleEvent::MoveFailed {
                side,
                attacker: attacker.name.clone(),
            });
            return;
        }

        let outcome = compute_damage(attacker, defender, mv, &self.environment, &self.rules, &mut self.dice);
        if outcome.missed {
            tracing::debug!(side = %side, attacker = %attacker.name, mv = %mv.name, "missed");
            events.push(BattleEvent::Missed {
                side,
                attacker: attacker.name.clone(),
            });
            return;
        }

        let lost = defender.apply_damage(outcome.damage);
        {
            let own_tally = &mut self.tallies[side.index()];
            own_tally.damage_dealt += u64::from(lost);
            if outcome.critical {
                own_tally.critical_hits += 1;
            }
        }
        self.tallies[foe_side.index()].damage_taken += u64::from(lost);

        if !mv.is_status_only() {
            tracing::debug!(
                side = %side,
                attacker = %attacker.name,
                defender = %defender.name,
                mv = %mv.name,
                damage = lost,
                critical = outcome.critical,
                effectiveness = outcome.effectiveness,
                "move hit"
            );
            events.push(BattleEvent::Damage {
                side: foe_side,
                target: defender.name.clone(),
                amount: lost,
                effectiveness: outcome.effectiveness,
                critical: outcome.critical,
            });
        }

        if defender.is_defeated() {
            self.tallies[side.index()].knocked_out += 1;
            self.tallies[foe_side.index()].fainted += 1;
            tracing::debug!(side = %foe_side, member = %defender.name, "defeated");
            events.push(BattleEvent::Defeated {
                side: foe_side,
                name: defender.name.clone(),
            });
            return;
        }

        // Secondary effect: only rolled when it could actually stick
        let Some(condition) = mv.inflicts.filter(|_| mv.has_status_effect()) else {
            return;
        };
        if outcome.is_immune() || defender.status.is_some() {
            return;
        }
        if self.dice.chance(mv.inflict_chance) && defender.apply_status(condition) {
            self.tallies[side.index()].status_inflicted += 1;
            tracing::debug!(side = %foe_side, member = %defender.name, condition = %condition, "status inflicted");
            events.push(BattleEvent::StatusInflicted {
                side: foe_side,
                target: defender.name.clone(),
                condition,
            });
        }
    }

    fn use_item(&mut self, side: SideId, item: usize, target: usize, events: &mut Vec<BattleEvent>) {
        let roster = pick(self.player, self.enemy, side);
        let Some(name) = roster.items().get(item).map(|i| i.name.clone()) else {
            return;
        };

        match roster.use_item(item, target) {
            Ok(outcome) => {
                self.tallies[side.index()].items_used += 1;
                tracing::debug!(side = %side, item = %name, target, had_effect = outcome.had_effect, "item used");
                events.push(BattleEvent::ItemUsed {
                    side,
                    item: name,
                    message: outcome.message,
                    had_effect: outcome.had_effect,
                });
            }
            Err(error) => {
                tracing::warn!(side = %side, error = %error, "item selection no longer valid");
            }
        }
    }

    fn switch(&mut self, side: SideId, index: usize, events: &mut Vec<BattleEvent>) {
        let from = self.active[side.index()];
        let roster = self.roster(side);
        let (Some(outgoing), Some(incoming)) = (roster.member(from), roster.member(index)) else {
            return;
        };
        let event = BattleEvent::Switched {
            side,
            from: outgoing.name.clone(),
            to: incoming.name.clone(),
        };

        tracing::debug!(side = %side, from, to = index, "switched");
        self.active[side.index()] = index;
        events.push(event);
    }

    /// Check for a winner, replace fainted actives and enforce the turn limit
    fn end_of_turn(&mut self, events: &mut Vec<BattleEvent>) {
        let player_out = self.player.is_defeated();
        let enemy_out = self.enemy.is_defeated();

        match (player_out, enemy_out) {
            (true, true) => return self.conclude(None, events),
            (false, true) => return self.conclude(Some(SideId::Player), events),
            (true, false) => return self.conclude(Some(SideId::Enemy), events),
            (false, false) => {}
        }

        for side in SideId::BOTH {
            if self.active(side).is_some_and(Combatant::is_alive) {
                continue;
            }
            // A roster that is not defeated always has a usable member
            let Some(next) = self.roster(side).first_alive() else {
                unreachable!("{side} roster is not defeated but has no usable member");
            };
            self.active[side.index()] = next;
            let name = self.roster(side).members()[next].name.clone();
            tracing::debug!(side = %side, member = %name, "sent out");
            events.push(BattleEvent::SentOut { side, name });
        }

        if self.turn >= self.config.max_turns {
            tracing::info!(turns = self.turn, "turn limit reached");
            self.conclude(None, events);
        }
    }

    fn conclude(&mut self, winner: Option<SideId>, events: &mut Vec<BattleEvent>) {
        self.state = BattleState::Concluded(winner);
        if let Some(side) = winner {
            self.distribute_experience(side, events);
        }

        tracing::info!(
            winner = winner.map_or("none", SideId::as_str),
            turns = self.turn,
            experience = self.awards.iter().map(|a| a.amount).sum::<u32>(),
            "battle concluded"
        );
        events.push(BattleEvent::Concluded { winner });
    }

    /// Every defeated loser yields `experience_yield * level`. The total is
    /// split evenly over the winner's standing members, remainder going to
    /// the earliest ones.
    fn distribute_experience(&mut self, winner: SideId, events: &mut Vec<BattleEvent>) {
        let per_level = self.config.experience_yield;
        let total = self
            .roster(winner.opponent())
            .members()
            .iter()
            .filter(|m| m.is_defeated())
            .fold(0u32, |sum, m| sum.saturating_add(per_level.saturating_mul(m.level)));

        let roster = pick(self.player, self.enemy, winner);
        let recipients: Vec<usize> = roster
            .members()
            .iter()
            .enumerate()
            .filter(|(_, m)| m.is_alive())
            .map(|(index, _)| index)
            .collect();
        if total == 0 || recipients.is_empty() {
            return;
        }

        let count = recipients.len() as u32;
        let share = total / count;
        let mut remainder = total % count;

        for index in recipients {
            let mut amount = share;
            if remainder > 0 {
                amount += 1;
                remainder -= 1;
            }
            if amount == 0 {
                continue;
            }
            let Some(member) = roster.member_mut(index) else {
                continue;
            };

            let levels_gained = member.add_experience(amount);
            events.push(BattleEvent::ExperienceGained {
                name: member.name.clone(),
                amount,
                levels_gained,
                level: member.level,
            });

            let evolved_from = member.evolve();
            if let Some(from) = &evolved_from {
                tracing::info!(from = %from, into = %member.name, "evolved");
                events.push(BattleEvent::Evolved {
                    from: from.clone(),
                    into: member.name.clone(),
                });
            }

            tracing::debug!(member = %member.name, amount, levels_gained, "experience awarded");
            self.awards.push(ExperienceAward {
                member: index,
                name: member.name.clone(),
                amount,
                levels_gained,
                evolved_from,
            });
        }
    }

    #[cfg(test)]
    fn dice(&self) -> &D {
        &self.dice
    }
}

/// Run a full battle between two rosters, blocking until it concludes.
///
/// Fails only if the battle cannot start, or a provider keeps choosing
/// invalid actions.
pub fn run_battle<P, E>(
    player: &mut Roster,
    enemy: &mut Roster,
    environment: Environment,
    config: BattleConfig,
    player_provider: &mut P,
    enemy_provider: &mut E,
) -> Result<BattleResult, BattleError>
where
    P: DecisionProvider + ?Sized,
    E: DecisionProvider + ?Sized,
{
    let mut battle = Battle::new(player, enemy, environment, config);
    battle.run(player_provider, enemy_provider)
}

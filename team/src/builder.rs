//! TeamBuilder - assemble a player roster from catalog picks

use skirmish_battle::{Combatant, Roster};

use crate::catalog::Catalog;
use crate::error::TeamError;

pub struct TeamBuilder<'c> {
    catalog: &'c Catalog,
    level: u32,
    roster: Roster,
}

impl<'c> TeamBuilder<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            level: Combatant::DEFAULT_LEVEL,
            roster: Roster::new(),
        }
    }

    /// Level for members picked from now on
    pub fn at_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.roster.len() >= Roster::CAPACITY
    }

    /// Add the species at `index` in the catalog
    pub fn pick(&mut self, index: usize) -> Result<&Combatant, TeamError> {
        let species = self.catalog.species_at(index)?;
        let member = self.catalog.instantiate(species, self.level)?;
        self.push(member)
    }

    pub fn pick_named(&mut self, name: &str) -> Result<&Combatant, TeamError> {
        let member = self.catalog.instantiate_named(name, self.level)?;
        self.push(member)
    }

    pub fn add_item(&mut self, name: &str) -> Result<(), TeamError> {
        let item = self.catalog.item(name)?;
        self.roster.add_item(item);
        Ok(())
    }

    fn push(&mut self, member: Combatant) -> Result<&Combatant, TeamError> {
        tracing::debug!(member = %member.name, level = member.level, "picked");
        self.roster.add_member(member)?;
        let last = self.roster.len() - 1;
        self.roster.member(last).ok_or(TeamError::EmptyTeam)
    }

    /// Finish the team. A team needs at least one member.
    pub fn build(self) -> Result<Roster, TeamError> {
        if self.roster.is_empty() {
            return Err(TeamError::EmptyTeam);
        }
        Ok(self.roster)
    }
}

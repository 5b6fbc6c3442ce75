//! Catalog - every species, move and item a game can draw from

use serde::{Deserialize, Serialize};
use skirmish_battle::{BaseStats, Combatant, Element, Item, Move, Stat, StatusCondition};

use crate::error::TeamError;
use crate::species::Species;

/// In-memory catalog. Lookups by name are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub species: Vec<Species>,
    pub moves: Vec<Move>,
    pub items: Vec<Item>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The four starters, their moves and the standard item set
    pub fn starter() -> Self {
        let moves = vec![
            Move::new("Tackle", 40, 100, Element::Normal),
            Move::new("Scratch", 40, 100, Element::Normal),
            Move::new("Quick Attack", 40, 100, Element::Normal),
            Move::new("Vine Whip", 45, 100, Element::Grass),
            Move::new("Poison Powder", 0, 75, Element::Poison).with_status(StatusCondition::Poison, 100),
            Move::new("Sleep Powder", 0, 75, Element::Grass).with_status(StatusCondition::Sleep, 100),
            Move::new("Ember", 40, 100, Element::Fire)
                .special()
                .with_status(StatusCondition::Burn, 10),
            Move::new("Metal Claw", 50, 95, Element::Steel),
            Move::new("Water Gun", 40, 100, Element::Water).special(),
            Move::new("Bite", 60, 100, Element::Dark),
            Move::new("Thunder Shock", 40, 100, Element::Electric)
                .special()
                .with_status(StatusCondition::Paralysis, 10),
            Move::new("Thunder Wave", 0, 90, Element::Electric).with_status(StatusCondition::Paralysis, 100),
        ];

        let species = vec![
            Species::new(1, "Bulbasaur", Element::Grass, Some(Element::Poison), BaseStats::new(45, 49, 49, 65, 65, 45))
                .learns(&["Tackle", "Vine Whip", "Poison Powder", "Sleep Powder"])
                .evolves_into("Ivysaur", 16),
            Species::new(4, "Charmander", Element::Fire, None, BaseStats::new(39, 52, 43, 60, 50, 65))
                .learns(&["Scratch", "Ember", "Metal Claw"])
                .evolves_into("Charmeleon", 16),
            Species::new(7, "Squirtle", Element::Water, None, BaseStats::new(44, 48, 65, 50, 64, 43))
                .learns(&["Tackle", "Water Gun", "Bite"])
                .evolves_into("Wartortle", 16),
            Species::new(25, "Pikachu", Element::Electric, None, BaseStats::new(35, 55, 40, 50, 50, 90))
                .learns(&["Quick Attack", "Thunder Shock", "Thunder Wave"]),
        ];

        let items = vec![
            Item::healing("Potion", 20),
            Item::healing("Super Potion", 50),
            Item::healing("Hyper Potion", 200),
            Item::healing("Max Potion", 999),
            Item::status_heal("Full Heal", None),
            Item::status_heal("Antidote", Some(StatusCondition::Poison)),
            Item::stat_boost("X Attack", Stat::Attack, 1),
            Item::revive("Revive"),
        ];

        Self { species, moves, items }
    }

    /// Parse a catalog from JSON
    pub fn from_json(json: &str) -> Result<Self, TeamError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        tracing::debug!(
            species = catalog.species.len(),
            moves = catalog.moves.len(),
            items = catalog.items.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn to_json(&self) -> Result<String, TeamError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    // === Lookups ===

    pub fn species_by_name(&self, name: &str) -> Option<&Species> {
        self.species.iter().find(|s| s.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn move_by_name(&self, name: &str) -> Option<&Move> {
        self.moves.iter().find(|m| m.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn item_by_name(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn species_at(&self, index: usize) -> Result<&Species, TeamError> {
        self.species.get(index).ok_or(TeamError::InvalidChoice {
            index,
            available: self.species.len(),
        })
    }

    // === Instantiation ===

    /// A fresh combatant of `species` at `level`
    pub fn instantiate(&self, species: &Species, level: u32) -> Result<Combatant, TeamError> {
        species.instantiate(level, |name| self.move_by_name(name))
    }

    pub fn instantiate_named(&self, name: &str, level: u32) -> Result<Combatant, TeamError> {
        let species = self
            .species_by_name(name)
            .ok_or_else(|| TeamError::UnknownSpecies(name.to_string()))?;
        self.instantiate(species, level)
    }

    /// Copy of a catalog item
    pub fn item(&self, name: &str) -> Result<Item, TeamError> {
        self.item_by_name(name)
            .cloned()
            .ok_or_else(|| TeamError::UnknownItem(name.to_string()))
    }
}

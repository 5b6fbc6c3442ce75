//! Species - creature templates

use serde::{Deserialize, Serialize};
use skirmish_battle::{BaseStats, Combatant, Element, Evolution, Move};

use crate::error::TeamError;

/// Template a combatant is instantiated from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    /// Catalog number
    pub number: u16,
    pub name: String,
    pub primary: Element,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<Element>,
    pub stats: BaseStats,

    /// Names of up to four moves, resolved against the catalog
    #[serde(default)]
    pub learnset: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evolution: Option<Evolution>,
}

impl Species {
    pub fn new(number: u16, name: impl Into<String>, primary: Element, secondary: Option<Element>, stats: BaseStats) -> Self {
        Self {
            number,
            name: name.into(),
            primary,
            secondary,
            stats,
            learnset: Vec::new(),
            evolution: None,
        }
    }

    pub fn learns(mut self, moves: &[&str]) -> Self {
        self.learnset = moves.iter().map(|m| (*m).to_string()).collect();
        self
    }

    pub fn evolves_into(mut self, into: impl Into<String>, level: u32) -> Self {
        self.evolution = Some(Evolution {
            into: into.into(),
            level,
        });
        self
    }

    /// Elements as a slice-friendly list
    pub fn elements(&self) -> Vec<Element> {
        std::iter::once(self.primary).chain(self.secondary).collect()
    }

    /// Build a full-HP combatant at `level`, looking moves up with `find_move`
    pub fn instantiate<'m>(
        &self,
        level: u32,
        find_move: impl Fn(&str) -> Option<&'m Move>,
    ) -> Result<Combatant, TeamError> {
        let mut combatant = Combatant::new(&self.name, self.stats, self.primary, self.secondary).with_level(level);
        combatant.evolution = self.evolution.clone();

        if self.learnset.len() > Combatant::MAX_MOVES {
            tracing::warn!(
                species = %self.name,
                listed = self.learnset.len(),
                kept = Combatant::MAX_MOVES,
                "learnset longer than the move slots, extra moves ignored"
            );
        }
        for name in self.learnset.iter().take(Combatant::MAX_MOVES) {
            let mv = find_move(name).ok_or_else(|| TeamError::UnknownMove {
                species: self.name.clone(),
                name: name.clone(),
            })?;
            combatant.add_move(mv.clone())?;
        }
        Ok(combatant)
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:03} {} ({}", self.number, self.name, self.primary)?;
        if let Some(secondary) = self.secondary {
            write!(f, "/{secondary}")?;
        }
        write!(
            f,
            ", HP {} Atk {} Def {} SpA {} SpD {} Spe {})",
            self.stats.hp,
            self.stats.attack,
            self.stats.defense,
            self.stats.special_attack,
            self.stats.special_defense,
            self.stats.speed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pichu() -> Species {
        Species::new(172, "Pichu", Element::Electric, None, BaseStats::new(20, 40, 15, 35, 35, 60))
            .learns(&["Thunder Shock"])
            .evolves_into("Pikachu", 10)
    }

    #[test]
    fn test_instantiate() {
        let shock = Move::new("Thunder Shock", 40, 100, Element::Electric).special();
        let moves = [shock.clone()];
        let c = pichu()
            .instantiate(7, |name| moves.iter().find(|m| m.name == name))
            .unwrap();
        assert_eq!(c.name, "Pichu");
        assert_eq!(c.level, 7);
        assert_eq!(c.experience_to_next, 343);
        assert_eq!(c.hp, 20);
        assert_eq!(c.moves, vec![shock]);
        assert_eq!(c.evolution.as_ref().map(|e| e.level), Some(10));
    }

    #[test]
    fn test_instantiate_unknown_move() {
        let err = pichu().instantiate(5, |_| None).unwrap_err();
        assert!(matches!(err, TeamError::UnknownMove { ref name, .. } if name == "Thunder Shock"));
    }

    #[test]
    fn test_instantiate_keeps_first_four_moves() {
        let names = ["Tackle", "Growl", "Thunder Shock", "Quick Attack", "Thunderbolt"];
        let moves: Vec<Move> = names.iter().map(|n| Move::new(*n, 40, 100, Element::Normal)).collect();
        let species = Species::new(25, "Pikachu", Element::Electric, None, BaseStats::new(35, 55, 40, 50, 50, 90))
            .learns(&names);

        let c = species
            .instantiate(5, |name| moves.iter().find(|m| m.name == name))
            .unwrap();
        let known: Vec<&str> = c.moves.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(known, &names[..Combatant::MAX_MOVES]);
    }

    #[test]
    fn test_display() {
        let bulba = Species::new(1, "Bulbasaur", Element::Grass, Some(Element::Poison), BaseStats::new(45, 49, 49, 65, 65, 45));
        assert_eq!(
            bulba.to_string(),
            "#001 Bulbasaur (Grass/Poison, HP 45 Atk 49 Def 49 SpA 65 SpD 65 Spe 45)"
        );
    }
}

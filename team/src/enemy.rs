//! Enemy team generation

use rand::Rng;
use rand::seq::SliceRandom;
use skirmish_battle::{Combatant, Roster};

use crate::catalog::Catalog;
use crate::difficulty::Difficulty;
use crate::error::TeamError;

/// Enemy size: player size scaled by difficulty, truncated, kept within 1..=6
pub fn enemy_team_size(player_size: usize, difficulty: Difficulty) -> usize {
    let scaled = (player_size as f32 * difficulty.multiplier()) as usize;
    scaled.clamp(1, Roster::CAPACITY)
}

/// Enemy level: average player level scaled by difficulty, kept within 1..=100
pub fn enemy_level(player: &Roster, difficulty: Difficulty) -> u32 {
    if player.is_empty() {
        return 1;
    }
    let total: u32 = player.members().iter().map(|m| m.level).sum();
    let average = total as f32 / player.len() as f32;
    ((average * difficulty.multiplier()) as u32).clamp(1, Combatant::MAX_LEVEL)
}

/// Random enemy roster sized and levelled against the player's team
pub fn generate_enemy_team<R>(
    catalog: &Catalog,
    player: &Roster,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<Roster, TeamError>
where
    R: Rng + ?Sized,
{
    if catalog.is_empty() {
        return Err(TeamError::EmptyCatalog);
    }
    if player.is_empty() {
        return Err(TeamError::EmptyTeam);
    }

    let size = enemy_team_size(player.len(), difficulty);
    let level = enemy_level(player, difficulty);

    let mut enemy = Roster::new();
    for _ in 0..size {
        let species = catalog.species.choose(rng).ok_or(TeamError::EmptyCatalog)?;
        enemy.add_member(catalog.instantiate(species, level)?)?;
    }

    tracing::info!(size, level, difficulty = %difficulty, "enemy team generated");
    Ok(enemy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TeamBuilder;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn player_team(levels: &[u32]) -> Roster {
        let catalog = Catalog::starter();
        let mut roster = Roster::new();
        for (i, level) in levels.iter().enumerate() {
            let species = &catalog.species[i % catalog.species.len()];
            roster.add_member(catalog.instantiate(species, *level).unwrap()).unwrap();
        }
        roster
    }

    #[test]
    fn test_team_size_scaling() {
        assert_eq!(enemy_team_size(1, Difficulty::Easy), 1);
        assert_eq!(enemy_team_size(3, Difficulty::Easy), 2);
        assert_eq!(enemy_team_size(3, Difficulty::Hard), 3);
        assert_eq!(enemy_team_size(4, Difficulty::VeryHard), 6);
        assert_eq!(enemy_team_size(6, Difficulty::VeryHard), 6);
    }

    #[test]
    fn test_level_scaling() {
        assert_eq!(enemy_level(&player_team(&[10, 20]), Difficulty::Normal), 15);
        assert_eq!(enemy_level(&player_team(&[10, 20]), Difficulty::VeryHard), 22);
        assert_eq!(enemy_level(&player_team(&[1]), Difficulty::Easy), 1);
        assert_eq!(enemy_level(&player_team(&[90, 100]), Difficulty::VeryHard), Combatant::MAX_LEVEL);
    }

    #[test]
    fn test_generate() {
        let catalog = Catalog::starter();
        let mut builder = TeamBuilder::new(&catalog).at_level(10);
        builder.pick(0).unwrap();
        builder.pick(1).unwrap();
        let player = builder.build().unwrap();

        let mut rng = StdRng::seed_from_u64(3);
        let enemy = generate_enemy_team(&catalog, &player, Difficulty::VeryHard, &mut rng).unwrap();
        assert_eq!(enemy.len(), 3);
        assert!(enemy.members().iter().all(|m| m.level == 15 && m.hp == m.max_hp()));
        assert!(enemy.members().iter().all(|m| catalog.species_by_name(&m.name).is_some()));
    }

    #[test]
    fn test_same_seed_same_team() {
        let catalog = Catalog::starter();
        let player = player_team(&[5, 5, 5]);
        let a = generate_enemy_team(&catalog, &player, Difficulty::Normal, &mut StdRng::seed_from_u64(11)).unwrap();
        let b = generate_enemy_team(&catalog, &player, Difficulty::Normal, &mut StdRng::seed_from_u64(11)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_errors() {
        let mut rng = StdRng::seed_from_u64(0);
        let player = player_team(&[5]);
        assert!(matches!(
            generate_enemy_team(&Catalog::new(), &player, Difficulty::Normal, &mut rng),
            Err(TeamError::EmptyCatalog)
        ));
        assert!(matches!(
            generate_enemy_team(&Catalog::starter(), &Roster::new(), Difficulty::Normal, &mut rng),
            Err(TeamError::EmptyTeam)
        ));
    }
}

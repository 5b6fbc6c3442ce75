//! Catalog and team building for skirmish battles.
//!
//! Supplies `skirmish-battle` with its in-memory data: species templates,
//! the move and item catalog, player team selection and enemy teams scaled
//! by difficulty.
//!
//! # Example Usage
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use skirmish_team::{generate_enemy_team, Catalog, Difficulty, TeamBuilder};
//!
//! let catalog = Catalog::starter();
//!
//! let mut builder = TeamBuilder::new(&catalog);
//! builder.pick_named("Charmander")?;
//! builder.pick_named("Pikachu")?;
//! builder.add_item("Potion")?;
//! let player = builder.build()?;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let enemy = generate_enemy_team(&catalog, &player, Difficulty::Hard, &mut rng)?;
//! assert_eq!(enemy.len(), 2);
//! # Ok::<(), skirmish_team::TeamError>(())
//! ```

mod builder;
mod catalog;
mod difficulty;
mod enemy;
mod error;
mod species;

pub use builder::TeamBuilder;
pub use catalog::Catalog;
pub use difficulty::Difficulty;
pub use enemy::{enemy_level, enemy_team_size, generate_enemy_team};
pub use error::TeamError;
pub use species::Species;

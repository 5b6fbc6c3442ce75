//! Turn-based creature battle engine.
//!
//! This crate holds the domain types and the rules that resolve a battle
//! between two rosters of up to six creatures.
//!
//! # Overview
//!
//! `skirmish-battle` is the core; catalog data and front ends live elsewhere:
//!
//! ```text
//! skirmish-team (catalog, team building, enemy generation)
//!        │
//!        ▼
//! skirmish-battle (types + rules + engine) ← THIS CRATE
//!        │
//!        └─> BattleResult ─> RecordLog (cumulative statistics)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`Element`] - Elemental tags with the effectiveness chart
//! - [`StatusCondition`] - Poison, Paralysis, Burn, Sleep, Frozen, Confusion
//! - [`StatStages`] - Stat stage modifiers (-6 to +6)
//! - [`Move`], [`Item`] - Immutable move and item definitions
//! - [`Combatant`] - One creature's mutable battle record
//! - [`Roster`] - Up to six combatants plus an item inventory
//! - [`Environment`], [`Terrain`] - Element boost applied to matching moves
//!
//! ## Engine
//! - [`Battle`] - State machine driving a single battle
//! - [`DecisionProvider`] - Supplies each side's action every turn
//! - [`BattleResult`] - Outcome handed to the statistics sink
//! - [`RecordLog`] - Cumulative statistics across battles
//!
//! # Example Usage
//!
//! ```
//! use skirmish_battle::{
//!     run_battle, BaseStats, BattleConfig, Combatant, Element, Environment, GreedyProvider,
//!     Move, Roster,
//! };
//!
//! let charmander = Combatant::new("Charmander", BaseStats::new(39, 52, 43, 60, 50, 65), Element::Fire, None)
//!     .with_move(Move::new("Ember", 40, 100, Element::Fire).special())?;
//! let bulbasaur = Combatant::new("Bulbasaur", BaseStats::new(45, 49, 49, 65, 65, 45), Element::Grass, None)
//!     .with_move(Move::new("Vine Whip", 45, 100, Element::Grass))?;
//!
//! let mut player = Roster::from_members([charmander])?;
//! let mut enemy = Roster::from_members([bulbasaur])?;
//!
//! let result = run_battle(
//!     &mut player,
//!     &mut enemy,
//!     Environment::neutral(),
//!     BattleConfig::default().with_seed(7),
//!     &mut GreedyProvider::new(),
//!     &mut GreedyProvider::new(),
//! )?;
//! assert!(result.winner.is_some());
//! # Ok::<(), skirmish_battle::BattleError>(())
//! ```

pub mod engine;
pub mod error;
pub mod query;
pub mod rules;
pub mod tracking;
pub mod types;

// Re-export main types at crate root for convenience
pub use engine::{
    run_battle, Action, Battle, BattleConfig, BattleEvent, BattleResult, BattleState, BattleView,
    DecisionProvider, ExperienceAward, FirstMoveProvider, GreedyProvider, SideTally, TurnReport,
};
pub use error::{BattleError, SelectionKind, StartFailure};
pub use rules::{BattleRng, Dice};
pub use tracking::RecordLog;
pub use types::{
    BaseStats, Combatant, Element, Environment, Evolution, Item, ItemKind, Move, MoveCategory,
    Roster, SideId, Stat, StatStages, StatusCondition, Terrain,
};

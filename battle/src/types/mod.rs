//! Domain types for battle resolution

mod combatant;
mod element;
mod environment;
mod item;
mod moves;
mod roster;
mod side;
mod stats;
mod status;

pub use combatant::{Combatant, Evolution};
pub use element::Element;
pub use environment::{Environment, Terrain};
pub use item::{Item, ItemKind};
pub use moves::{Move, MoveCategory};
pub use roster::Roster;
pub use side::SideId;
pub use stats::{BaseStats, Stat, StatStages};
pub use status::StatusCondition;

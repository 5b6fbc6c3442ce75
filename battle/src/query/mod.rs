//! Query helpers for move selection
//!
//! Element matchup analysis used by the built-in decision providers and by
//! front ends that want to show a creature's weak spots.

mod matchup;

pub use matchup::{
    // Element-level queries
    immunities,
    is_immune_to,
    is_weak_to_any,
    resistances,
    resists_all,
    weaknesses,
};

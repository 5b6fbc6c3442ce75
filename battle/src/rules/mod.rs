//! Pure battle rules: randomness source, status effects, damage and items
//!
//! Nothing here owns state. Every probabilistic rule draws from a [`Dice`]
//! passed in by the caller, so a battle replays exactly from its seed.

pub mod damage;
pub mod dice;
pub mod items;
pub mod status;

pub use damage::{base_damage, compute_damage, expected_damage, DamageOutcome, DamageRules};
pub use dice::{BattleRng, Dice};
pub use items::{apply_item, ItemOutcome};
pub use status::{
    attempt_recovery, recovery_chance, recovery_message, resolve_turn_status, StatusOutcome,
};

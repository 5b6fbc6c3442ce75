//! Battle engine: configuration, actions, decision providers and the turn loop

mod action;
mod battle;
mod config;
mod decision;
mod result;

pub use action::Action;
pub use battle::{run_battle, Battle};
pub use config::BattleConfig;
pub use decision::{BattleView, DecisionProvider, FirstMoveProvider, GreedyProvider};
pub use result::{BattleEvent, BattleResult, BattleState, ExperienceAward, SideTally, TurnReport};

use skirmish_battle::BattleError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TeamError {
    #[error("Unknown species: {0}")]
    UnknownSpecies(String),

    #[error("{species} learns unknown move: {name}")]
    UnknownMove { species: String, name: String },

    #[error("Unknown item: {0}")]
    UnknownItem(String),

    #[error("Invalid choice {index} ({available} available)")]
    InvalidChoice { index: usize, available: usize },

    #[error("Team has no members")]
    EmptyTeam,

    #[error("Catalog has no species")]
    EmptyCatalog,

    #[error("Invalid catalog data: {0}")]
    InvalidData(#[from] serde_json::Error),

    #[error(transparent)]
    Battle(#[from] BattleError),
}

impl TeamError {
    /// Errors a front end can answer by asking the user again
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            TeamError::UnknownSpecies(_) | TeamError::UnknownItem(_) | TeamError::InvalidChoice { .. }
        )
    }
}

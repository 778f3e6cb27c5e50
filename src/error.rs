//! Crate-level error type.

use crate::builder::BuildErrors;
use crate::checkpoint::CheckpointError;
use crate::core::{Action, RadioState};
use thiserror::Error;

/// Convenient result alias for radio_fsm.
pub type Result<T> = std::result::Result<T, RadioError>;

/// Errors that can cross module boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RadioError {
    /// The action is not an outgoing action of the current state, or its
    /// destination is missing from the table. Indicates an invalid command
    /// sequence; never masked.
    #[error("Invalid transition from {from} via {action}")]
    InvalidTransition { from: RadioState, action: Action },

    #[error("State not found: {0}")]
    StateNotFound(String),

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Invalid transition table: {0}")]
    Table(#[from] BuildErrors),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Checkpoint error: {0}")]
    Checkpoint(#[from] CheckpointError),

    #[error("Radio service is no longer running")]
    ServiceClosed,
}

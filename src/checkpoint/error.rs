//! Errors raised while encoding, decoding or resuming a radio checkpoint.

use crate::core::{Action, RadioState};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckpointError {
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The pending trigger should already have fired at the checkpointed clock.
    #[error("Pending {action} trigger was due at tick {due} but the clock is at {clock}")]
    OverdueTrigger { action: Action, due: u64, clock: u64 },

    #[error("Checkpointed state {0} is not in the transition table")]
    UnknownState(RadioState),

    /// The pending trigger was not armed by the checkpointed state, or that
    /// state does not auto-trigger this action.
    #[error("Pending {action} trigger armed by {origin} does not belong to state {state}")]
    ForeignTrigger {
        state: RadioState,
        origin: RadioState,
        action: Action,
    },
}

//! Checkpoint and resume for a radio.
//!
//! A checkpoint captures the current state, latched events, logical clock,
//! pending auto-trigger, configuration and history. It does NOT include the
//! interrupt hook (not serializable) or the table (fixed domain data).

use crate::core::{RadioState, TransitionHistory};
use crate::radio::{EventLatch, PendingTrigger, RadioConfig};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a [`Radio`](crate::radio::Radio).
///
/// # Example
///
/// ```rust
/// use radio_fsm::checkpoint::RadioCheckpoint;
/// use radio_fsm::radio::{Radio, RadioConfig};
/// use std::sync::Arc;
///
/// let mut radio = Radio::new(RadioConfig::default()).unwrap();
/// radio.task_enable_rx(true).unwrap();
///
/// let json = radio.checkpoint().to_json().unwrap();
/// let restored = RadioCheckpoint::from_json(&json).unwrap();
/// let resumed = Radio::resume(restored, Arc::clone(radio.table())).unwrap();
/// assert_eq!(resumed.state(), radio.state());
/// assert_eq!(resumed.pending_trigger(), radio.pending_trigger());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioCheckpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    pub state: RadioState,

    pub events: EventLatch,

    /// Logical time in time units
    pub clock: u64,

    pub pending: Option<PendingTrigger>,

    pub config: RadioConfig,

    pub history: TransitionHistory,
}

impl RadioCheckpoint {
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        if let Some(pending) = self.pending {
            if pending.due < self.clock {
                return Err(CheckpointError::OverdueTrigger {
                    action: pending.action,
                    due: pending.due,
                    clock: self.clock,
                });
            }
        }
        Ok(())
    }

    /// Human-readable JSON encoding.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    /// Compact binary encoding.
    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }
}

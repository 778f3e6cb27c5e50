//! Transition history tracking.
//!
//! Every applied transition is recorded with both the logical tick it
//! happened at and a wall-clock timestamp. The history is bounded: once
//! `limit` records are held, the oldest is dropped.

use super::action::Action;
use super::state::RadioState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single applied transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state being transitioned from
    pub from: RadioState,
    /// The action that was consumed
    pub action: Action,
    /// The state being transitioned to
    pub to: RadioState,
    /// Logical time, in time units, when the transition was applied
    pub tick: u64,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// True when fired by an auto-trigger rather than a caller
    pub automatic: bool,
}

/// Ordered, bounded history of transitions.
///
/// # Example
///
/// ```rust
/// use radio_fsm::core::{Action, RadioState, TransitionHistory, TransitionRecord};
/// use chrono::Utc;
///
/// let mut history = TransitionHistory::with_limit(8);
/// history.record(TransitionRecord {
///     from: RadioState::Disabled,
///     action: Action::TxEn,
///     to: RadioState::TxRu,
///     tick: 0,
///     timestamp: Utc::now(),
///     automatic: false,
/// });
///
/// assert_eq!(history.get_path(), vec![RadioState::Disabled, RadioState::TxRu]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionHistory {
    records: VecDeque<TransitionRecord>,
    limit: usize,
}

impl Default for TransitionHistory {
    fn default() -> Self {
        Self::with_limit(256)
    }
}

impl TransitionHistory {
    /// Create an empty history holding at most `limit` records.
    ///
    /// A limit of zero disables recording.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(limit.min(1024)),
            limit,
        }
    }

    pub fn record(&mut self, record: TransitionRecord) {
        if self.limit == 0 {
            return;
        }
        while self.records.len() >= self.limit {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    /// Sequence of states visited, starting with the first recorded origin.
    pub fn get_path(&self) -> Vec<RadioState> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.front() {
            path.push(first.from);
        }
        path.extend(self.records.iter().map(|r| r.to));
        path
    }

    /// Wall-clock time between the first and last retained records.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.front()?, self.records.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn records(&self) -> impl Iterator<Item = &TransitionRecord> {
        self.records.iter()
    }

    pub fn last(&self) -> Option<&TransitionRecord> {
        self.records.back()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

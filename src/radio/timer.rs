//! Single-slot pending auto-trigger.
//!
//! At most one trigger is outstanding. Arming replaces whatever was pending;
//! every armed trigger carries a fresh generation so a superseded trigger can
//! always be told apart from the current one.

use crate::core::{Action, AutoTrigger, RadioState};
use serde::{Deserialize, Serialize};

/// A scheduled auto-trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTrigger {
    pub action: Action,
    /// State that armed the trigger.
    pub origin: RadioState,
    /// Logical time at which the trigger fires.
    pub due: u64,
    pub generation: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerSlot {
    pending: Option<PendingTrigger>,
    generation: u64,
}

impl TriggerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a slot holding `pending`.
    pub(crate) fn restore(pending: Option<PendingTrigger>) -> Self {
        Self {
            generation: pending.map_or(0, |p| p.generation),
            pending,
        }
    }

    /// Schedule `trigger` for `origin`, replacing any pending trigger.
    pub fn arm(&mut self, origin: RadioState, trigger: AutoTrigger, now: u64) -> PendingTrigger {
        self.generation = self.generation.wrapping_add(1);
        let pending = PendingTrigger {
            action: trigger.action,
            origin,
            due: now.saturating_add(trigger.delay),
            generation: self.generation,
        };
        self.pending = Some(pending);
        pending
    }

    pub fn cancel(&mut self) -> Option<PendingTrigger> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<&PendingTrigger> {
        self.pending.as_ref()
    }

    /// Take the pending trigger if it is due at or before `now`.
    pub fn take_due(&mut self, now: u64) -> Option<PendingTrigger> {
        match self.pending {
            Some(p) if p.due <= now => self.pending.take(),
            _ => None,
        }
    }
}

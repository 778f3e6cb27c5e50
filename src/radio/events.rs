//! Latched hardware events.

use crate::core::Action;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Event kinds exposed for polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Enable,
    End,
    Address,
    Disabled,
}

pub const ALL_EVENTS: [EventKind; 4] = [
    EventKind::Enable,
    EventKind::End,
    EventKind::Address,
    EventKind::Disabled,
];

impl EventKind {
    pub const fn name(self) -> &'static str {
        match self {
            EventKind::Enable => "EVENT_ENABLE",
            EventKind::End => "EVENT_END",
            EventKind::Address => "EVENT_ADDRESS",
            EventKind::Disabled => "EVENT_DISABLED",
        }
    }

    /// Event latched when `action` is applied successfully.
    pub const fn for_action(action: Action) -> Option<Self> {
        match action {
            Action::Ready => Some(EventKind::Enable),
            Action::End => Some(EventKind::End),
            Action::Address => Some(EventKind::Address),
            Action::Disabled => Some(EventKind::Disabled),
            _ => None,
        }
    }

    const fn index(self) -> usize {
        match self {
            EventKind::Enable => 0,
            EventKind::End => 1,
            EventKind::Address => 2,
            EventKind::Disabled => 3,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-kind counters: "has X occurred since it was last cleared".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLatch {
    counts: [u32; 4],
}

impl EventLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latch(&mut self, kind: EventKind) {
        let slot = &mut self.counts[kind.index()];
        *slot = slot.saturating_add(1);
    }

    pub fn clear(&mut self, kind: EventKind) {
        self.counts[kind.index()] = 0;
    }

    /// `true` latches one occurrence, `false` clears the event.
    pub fn set(&mut self, kind: EventKind, value: bool) {
        if value {
            self.latch(kind);
        } else {
            self.clear(kind);
        }
    }

    pub fn is_set(&self, kind: EventKind) -> bool {
        self.count(kind) > 0
    }

    pub fn count(&self, kind: EventKind) -> u32 {
        self.counts[kind.index()]
    }
}

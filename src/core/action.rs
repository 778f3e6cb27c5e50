//! Actions the radio consumes and the tasks that issue them.

use crate::error::RadioError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named stimulus the state machine may consume.
///
/// Actions come from task calls, from hardware events (`END`, `ADDRESS`,
/// `PAYLOAD`, ...) or from a state's auto-trigger. The vocabulary is closed
/// and names are case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Action {
    TxEn,
    RxEn,
    Disable,
    Ready,
    Start,
    End,
    Stop,
    RxStop,
    Address,
    Payload,
    Disabled,
}

/// Every action in the vocabulary.
pub const ALL_ACTIONS: [Action; 11] = [
    Action::TxEn,
    Action::RxEn,
    Action::Disable,
    Action::Ready,
    Action::Start,
    Action::End,
    Action::Stop,
    Action::RxStop,
    Action::Address,
    Action::Payload,
    Action::Disabled,
];

impl Action {
    pub const fn name(self) -> &'static str {
        match self {
            Action::TxEn => "TX_EN",
            Action::RxEn => "RX_EN",
            Action::Disable => "DISABLE",
            Action::Ready => "READY",
            Action::Start => "START",
            Action::End => "END",
            Action::Stop => "STOP",
            Action::RxStop => "RX_STOP",
            Action::Address => "ADDRESS",
            Action::Payload => "PAYLOAD",
            Action::Disabled => "DISABLED",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ALL_ACTIONS.into_iter().find(|a| a.name() == name)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = RadioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| RadioError::UnknownAction(s.to_string()))
    }
}

/// Externally invoked command entry point. Each task maps to exactly one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Task {
    EnableTx,
    EnableRx,
    Disable,
    Start,
}

impl Task {
    pub const fn action(self) -> Action {
        match self {
            Task::EnableTx => Action::TxEn,
            Task::EnableRx => Action::RxEn,
            Task::Disable => Action::Disable,
            Task::Start => Action::Start,
        }
    }

    /// Register-style task name, e.g. `TASKS_TXEN`.
    pub const fn name(self) -> &'static str {
        match self {
            Task::EnableTx => "TASKS_TXEN",
            Task::EnableRx => "TASKS_RXEN",
            Task::Disable => "TASKS_DISABLE",
            Task::Start => "TASKS_START",
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

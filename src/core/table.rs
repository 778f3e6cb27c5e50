//! The fixed radio transition table.
//!
//! The table is authored once through the [`TableBuilder`](crate::builder::TableBuilder)
//! (see [`radio_table`](crate::builder::radio_table)), validated at load time,
//! and read-only afterwards. Nothing here depends on how it was built.

use super::action::Action;
use super::state::RadioState;
use crate::error::{RadioError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Delay, in time units, of the ramp-up states before `READY` fires on its own.
pub const RAMP_UP_DELAY: u64 = 10;

/// An action fired automatically `delay` time units after its state is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoTrigger {
    pub action: Action,
    pub delay: u64,
}

/// A state together with what it allows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateDef {
    pub(crate) name: RadioState,
    pub(crate) incoming_actions: Vec<Action>,
    pub(crate) outgoing_actions: BTreeMap<Action, RadioState>,
    pub(crate) auto_trigger: Option<AutoTrigger>,
}

impl StateDef {
    pub fn name(&self) -> RadioState {
        self.name
    }

    /// Actions that may lead into this state. Documentation only; never enforced.
    pub fn incoming_actions(&self) -> &[Action] {
        &self.incoming_actions
    }

    pub fn outgoing_actions(&self) -> &BTreeMap<Action, RadioState> {
        &self.outgoing_actions
    }

    pub fn auto_trigger(&self) -> Option<AutoTrigger> {
        self.auto_trigger
    }

    /// Destination reached by `action`, if this state accepts it.
    pub fn destination(&self, action: Action) -> Option<RadioState> {
        self.outgoing_actions.get(&action).copied()
    }

    pub fn accepts(&self, action: Action) -> bool {
        self.outgoing_actions.contains_key(&action)
    }
}

/// Directed edge of the table.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TransitionEdge {
    pub from: RadioState,
    pub action: Action,
    pub to: RadioState,
}

/// Validated, immutable set of states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    pub(crate) initial: RadioState,
    pub(crate) states: BTreeMap<RadioState, StateDef>,
}

impl TransitionTable {
    /// State the radio starts in.
    pub fn initial(&self) -> RadioState {
        self.initial
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn states(&self) -> impl Iterator<Item = &StateDef> {
        self.states.values()
    }

    /// Every edge of the table.
    pub fn transitions(&self) -> impl Iterator<Item = TransitionEdge> + '_ {
        self.states.values().flat_map(|def| {
            def.outgoing_actions
                .iter()
                .map(move |(action, to)| TransitionEdge {
                    from: def.name,
                    action: *action,
                    to: *to,
                })
        })
    }

    pub fn state(&self, id: RadioState) -> Result<&StateDef> {
        self.states
            .get(&id)
            .ok_or_else(|| RadioError::StateNotFound(id.name().to_string()))
    }

    /// Look a state up by its canonical name.
    pub fn lookup_state(&self, name: &str) -> Result<&StateDef> {
        let id: RadioState = name.parse()?;
        self.state(id)
    }

    /// Destination of `action` from `state`.
    ///
    /// Fails with [`RadioError::InvalidTransition`] when the action is not one of
    /// the state's outgoing actions or the destination is missing from the table.
    pub fn resolve_transition(&self, state: &StateDef, action: Action) -> Result<&StateDef> {
        let invalid = || RadioError::InvalidTransition {
            from: state.name,
            action,
        };

        let destination = state.destination(action).ok_or_else(invalid)?;
        self.states.get(&destination).ok_or_else(invalid)
    }
}

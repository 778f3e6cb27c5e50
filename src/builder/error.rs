//! Build errors for the transition table builder.

use crate::core::{Action, RadioState};
use std::fmt;
use thiserror::Error;

/// A single problem found while validating a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states defined. Add at least one state")]
    NoStates,

    #[error("Initial state {0} is not defined in the table")]
    UnknownInitialState(RadioState),

    #[error("State {0} is defined more than once")]
    DuplicateState(RadioState),

    #[error("State {state} declares action {action} more than once")]
    DuplicateAction { state: RadioState, action: Action },

    #[error("State {state} routes {action} to {destination}, which is not in the table")]
    UnknownState {
        state: RadioState,
        action: Action,
        destination: RadioState,
    },

    #[error("State {state} auto-triggers {action} but has no outgoing {action} edge")]
    TriggerWithoutEdge { state: RadioState, action: Action },
}

/// Every problem found in one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct BuildErrors(pub Vec<BuildError>);

impl BuildErrors {
    pub fn errors(&self) -> &[BuildError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for BuildErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} table error(s)", self.0.len())?;
        for error in &self.0 {
            write!(f, "; {error}")?;
        }
        Ok(())
    }
}

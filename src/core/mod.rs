//! Core radio state machine types.
//!
//! This module contains the pure domain data of the radio:
//! - States and the closed action/task vocabulary
//! - The validated, read-only transition table
//! - Bounded transition history
//!
//! Nothing here has side effects. The [`Radio`](crate::radio::Radio)
//! controller owns the mutable parts.

mod action;
mod history;
mod state;
mod table;

pub use action::{Action, Task, ALL_ACTIONS};
pub use history::{TransitionHistory, TransitionRecord};
pub use state::{RadioState, ALL_STATES};
pub use table::{AutoTrigger, StateDef, TransitionEdge, TransitionTable, RAMP_UP_DELAY};

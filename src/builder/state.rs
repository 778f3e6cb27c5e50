//! Builder for a single state of the table.

use crate::core::{Action, AutoTrigger, RadioState};

/// Fluent description of one state: its documented incoming actions, its
/// outgoing edges in declaration order, and an optional auto-trigger.
///
/// Nothing is checked here; [`TableBuilder::build`](super::TableBuilder::build)
/// validates the whole table at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateBuilder {
    pub(crate) name: RadioState,
    pub(crate) incoming: Vec<Action>,
    pub(crate) outgoing: Vec<(Action, RadioState)>,
    pub(crate) auto_trigger: Option<AutoTrigger>,
}

impl StateBuilder {
    pub fn new(name: RadioState) -> Self {
        Self {
            name,
            incoming: Vec::new(),
            outgoing: Vec::new(),
            auto_trigger: None,
        }
    }

    /// Document the actions that may lead into this state.
    pub fn incoming(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.incoming.extend(actions);
        self
    }

    /// Add an outgoing edge.
    pub fn on(mut self, action: Action, destination: RadioState) -> Self {
        self.outgoing.push((action, destination));
        self
    }

    /// Fire `action` automatically `delay` time units after entering this state.
    pub fn auto_trigger(mut self, action: Action, delay: u64) -> Self {
        self.auto_trigger = Some(AutoTrigger { action, delay });
        self
    }
}

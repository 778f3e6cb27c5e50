//! Builder and load-time validation for the transition table.

use crate::builder::error::{BuildError, BuildErrors};
use crate::builder::state::StateBuilder;
use crate::core::{RadioState, StateDef, TransitionTable};
use std::collections::{BTreeMap, BTreeSet};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<BuildError>>;

/// Builder for the transition table.
///
/// `build()` validates the whole table and reports every problem at once
/// instead of stopping at the first one.
#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    initial: Option<RadioState>,
    states: Vec<StateBuilder>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: RadioState) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a state.
    pub fn state(mut self, state: StateBuilder) -> Self {
        self.states.push(state);
        self
    }

    /// Validate and build the table.
    pub fn build(self) -> Result<TransitionTable, BuildErrors> {
        let defined: BTreeSet<RadioState> = self.states.iter().map(|s| s.name).collect();
        let mut checks: Vec<Check> = Vec::new();

        if self.states.is_empty() {
            checks.push(Validation::fail(BuildError::NoStates));
        }
        checks.push(check_initial(self.initial, &defined));

        let mut seen = BTreeSet::new();
        for state in &self.states {
            checks.push(if seen.insert(state.name) {
                Validation::success(())
            } else {
                Validation::fail(BuildError::DuplicateState(state.name))
            });
            checks.extend(check_edges(state, &defined));
            checks.push(check_trigger(state));
        }

        if let Validation::Failure(errors) = Validation::all_vec(checks) {
            return Err(BuildErrors(errors.iter().cloned().collect()));
        }

        let initial = self
            .initial
            .ok_or_else(|| BuildErrors(vec![BuildError::MissingInitialState]))?;

        let states: BTreeMap<RadioState, StateDef> = self
            .states
            .into_iter()
            .map(|s| {
                let def = StateDef {
                    name: s.name,
                    incoming_actions: s.incoming,
                    outgoing_actions: s.outgoing.into_iter().collect(),
                    auto_trigger: s.auto_trigger,
                };
                (s.name, def)
            })
            .collect();

        Ok(TransitionTable { initial, states })
    }
}

fn check_initial(initial: Option<RadioState>, defined: &BTreeSet<RadioState>) -> Check {
    match initial {
        None => Validation::fail(BuildError::MissingInitialState),
        Some(state) if !defined.is_empty() && !defined.contains(&state) => {
            Validation::fail(BuildError::UnknownInitialState(state))
        }
        Some(_) => Validation::success(()),
    }
}

fn check_edges(state: &StateBuilder, defined: &BTreeSet<RadioState>) -> Vec<Check> {
    let mut seen = BTreeSet::new();
    let mut checks = Vec::with_capacity(state.outgoing.len());

    for &(action, destination) in &state.outgoing {
        if !seen.insert(action) {
            checks.push(Validation::fail(BuildError::DuplicateAction {
                state: state.name,
                action,
            }));
        }
        if !defined.contains(&destination) {
            checks.push(Validation::fail(BuildError::UnknownState {
                state: state.name,
                action,
                destination,
            }));
        }
    }

    checks
}

fn check_trigger(state: &StateBuilder) -> Check {
    match state.auto_trigger {
        Some(trigger) if !state.outgoing.iter().any(|(a, _)| *a == trigger.action) => {
            Validation::fail(BuildError::TriggerWithoutEdge {
                state: state.name,
                action: trigger.action,
            })
        }
        _ => Validation::success(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Action;

    #[test]
    fn builder_requires_initial_state() {
        let result = TableBuilder::new()
            .state(StateBuilder::new(RadioState::Disabled))
            .build();

        assert_eq!(
            result.unwrap_err().errors(),
            &[BuildError::MissingInitialState]
        );
    }

    #[test]
    fn builder_requires_states() {
        let errors = TableBuilder::new()
            .initial(RadioState::Disabled)
            .build()
            .unwrap_err();

        assert_eq!(errors.errors(), &[BuildError::NoStates]);
    }

    #[test]
    fn unknown_destination_is_rejected_at_load_time() {
        let errors = TableBuilder::new()
            .initial(RadioState::Disabled)
            .state(StateBuilder::new(RadioState::Disabled).on(Action::TxEn, RadioState::TxRu))
            .build()
            .unwrap_err();

        assert_eq!(
            errors.errors(),
            &[BuildError::UnknownState {
                state: RadioState::Disabled,
                action: Action::TxEn,
                destination: RadioState::TxRu,
            }]
        );
    }

    #[test]
    fn validation_accumulates_all_errors() {
        let errors = TableBuilder::new()
            .initial(RadioState::Tx)
            .state(
                StateBuilder::new(RadioState::Disabled)
                    .on(Action::TxEn, RadioState::TxRu)
                    .on(Action::TxEn, RadioState::Disabled),
            )
            .state(StateBuilder::new(RadioState::Disabled))
            .state(StateBuilder::new(RadioState::RxRu).auto_trigger(Action::Ready, 10))
            .build()
            .unwrap_err();

        let errors = errors.errors();
        assert_eq!(errors.len(), 5);
        assert!(errors.contains(&BuildError::UnknownInitialState(RadioState::Tx)));
        assert!(errors.contains(&BuildError::DuplicateState(RadioState::Disabled)));
        assert!(errors.contains(&BuildError::DuplicateAction {
            state: RadioState::Disabled,
            action: Action::TxEn,
        }));
        assert!(errors.contains(&BuildError::UnknownState {
            state: RadioState::Disabled,
            action: Action::TxEn,
            destination: RadioState::TxRu,
        }));
        assert!(errors.contains(&BuildError::TriggerWithoutEdge {
            state: RadioState::RxRu,
            action: Action::Ready,
        }));
    }

    #[test]
    fn valid_table_builds() {
        let table = TableBuilder::new()
            .initial(RadioState::Disabled)
            .state(StateBuilder::new(RadioState::Disabled).on(Action::TxEn, RadioState::TxRu))
            .state(
                StateBuilder::new(RadioState::TxRu)
                    .on(Action::Ready, RadioState::Disabled)
                    .auto_trigger(Action::Ready, 3),
            )
            .build()
            .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.initial(), RadioState::Disabled);
        assert_eq!(
            table.state(RadioState::TxRu).unwrap().auto_trigger().unwrap().delay,
            3
        );
    }

    #[test]
    fn build_errors_display_lists_every_error() {
        let errors = TableBuilder::new().build().unwrap_err();
        let text = errors.to_string();
        assert!(text.starts_with("2 table error(s)"));
        assert!(text.contains("No states defined"));
        assert!(text.contains("Initial state not specified"));
    }
}

//! Property-based tests for the radio controller.
//!
//! A small reference model of the peripheral is run side by side with the
//! real controller over randomly generated command sequences.

use proptest::prelude::*;
use radio_fsm::builder::radio_table;
use radio_fsm::core::{ALL_ACTIONS, ALL_STATES, RAMP_UP_DELAY};
use radio_fsm::radio::EventKind;
use radio_fsm::{Action, Radio, RadioConfig, RadioError, RadioState, Task};

/// Reference transition function for the peripheral.
fn expected(state: RadioState, action: Action) -> Option<RadioState> {
    use Action as A;
    use RadioState as S;
    match (state, action) {
        (S::Disabled, A::TxEn) => Some(S::TxRu),
        (S::Disabled, A::RxEn) => Some(S::RxRu),
        (S::RxRu, A::Ready) => Some(S::RxIdle),
        (S::RxRu | S::RxIdle | S::Rx, A::Disable) => Some(S::RxDisable),
        (S::RxIdle, A::Start) => Some(S::Rx),
        (S::Rx, A::End | A::RxStop) => Some(S::RxIdle),
        (S::Rx, A::Address | A::Payload) => Some(S::Rx),
        (S::TxRu, A::Ready) => Some(S::TxIdle),
        (S::TxRu | S::TxIdle | S::Tx, A::Disable) => Some(S::TxDisable),
        (S::TxIdle, A::Start) => Some(S::Tx),
        (S::Tx, A::End | A::Stop) => Some(S::TxIdle),
        (S::Tx, A::Address | A::Payload) => Some(S::Tx),
        (S::RxDisable | S::TxDisable, A::Disabled) => Some(S::Disabled),
        _ => None,
    }
}

#[derive(Debug, Clone)]
enum Step {
    Apply(Action),
    Advance(u64),
}

/// Mirror of the controller: state, logical clock and the one pending trigger.
struct Model {
    state: RadioState,
    clock: u64,
    due: Option<u64>,
}

impl Model {
    fn new() -> Self {
        Self {
            state: RadioState::Disabled,
            clock: 0,
            due: None,
        }
    }

    fn apply(&mut self, action: Action) -> Option<RadioState> {
        let next = expected(self.state, action)?;
        self.state = next;
        self.due = matches!(next, RadioState::RxRu | RadioState::TxRu)
            .then_some(self.clock + RAMP_UP_DELAY);
        Some(next)
    }

    fn advance(&mut self, units: u64) {
        let target = self.clock + units;
        if let Some(due) = self.due {
            if due <= target {
                self.clock = due;
                self.apply(Action::Ready);
            }
        }
        self.clock = target;
    }
}

prop_compose! {
    fn arbitrary_action()(index in 0..ALL_ACTIONS.len()) -> Action {
        ALL_ACTIONS[index]
    }
}

prop_compose! {
    fn arbitrary_state()(index in 0..ALL_STATES.len()) -> RadioState {
        ALL_STATES[index]
    }
}

fn arbitrary_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => arbitrary_action().prop_map(Step::Apply),
        1 => (0..2 * RAMP_UP_DELAY).prop_map(Step::Advance),
    ]
}

proptest! {
    #[test]
    fn controller_matches_reference_model(steps in prop::collection::vec(arbitrary_step(), 0..64)) {
        let mut radio = Radio::new(RadioConfig::default()).unwrap();
        let mut model = Model::new();

        for step in steps {
            match step {
                Step::Apply(action) => {
                    let before = radio.state();
                    match (radio.apply_action(action), model.apply(action)) {
                        (Ok(actual), Some(wanted)) => prop_assert_eq!(actual, wanted),
                        (Err(err), None) => {
                            prop_assert_eq!(err, RadioError::InvalidTransition { from: before, action });
                            prop_assert_eq!(radio.state(), before);
                        }
                        (actual, wanted) => {
                            prop_assert!(false, "{} from {}: got {:?}, wanted {:?}", action, before, actual, wanted);
                        }
                    }
                }
                Step::Advance(units) => {
                    radio.advance(units).unwrap();
                    model.advance(units);
                }
            }

            prop_assert_eq!(radio.state(), model.state);
            prop_assert_eq!(radio.now(), model.clock);
            prop_assert_eq!(radio.pending_trigger().map(|p| p.due), model.due);
        }
    }

    #[test]
    fn pending_trigger_always_belongs_to_current_state(steps in prop::collection::vec(arbitrary_step(), 0..64)) {
        let mut radio = Radio::new(RadioConfig::default()).unwrap();

        for step in steps {
            let _ = match step {
                Step::Apply(action) => radio.apply_action(action).map(|_| ()),
                Step::Advance(units) => radio.advance(units).map(|_| ()),
            };
            if let Some(pending) = radio.pending_trigger() {
                prop_assert_eq!(pending.origin, radio.state());
                prop_assert_eq!(pending.action, Action::Ready);
                prop_assert!(pending.due > radio.now());
            }
        }
    }

    #[test]
    fn history_path_is_connected(steps in prop::collection::vec(arbitrary_step(), 0..64)) {
        let mut radio = Radio::new(RadioConfig::default()).unwrap();
        for step in steps {
            let _ = match step {
                Step::Apply(action) => radio.apply_action(action).map(|_| ()),
                Step::Advance(units) => radio.advance(units).map(|_| ()),
            };
        }

        let records: Vec<_> = radio.history().records().cloned().collect();
        for pair in records.windows(2) {
            prop_assert_eq!(pair[0].to, pair[1].from);
            prop_assert!(pair[0].tick <= pair[1].tick);
        }
        for record in &records {
            prop_assert_eq!(expected(record.from, record.action), Some(record.to));
        }
    }

    #[test]
    fn table_agrees_with_reference(state in arbitrary_state(), action in arbitrary_action()) {
        let table = radio_table().unwrap();
        let def = table.state(state).unwrap();
        let resolved = table.resolve_transition(def, action).ok().map(|d| d.name());
        prop_assert_eq!(resolved, expected(state, action));
    }

    #[test]
    fn names_parse_back(state in arbitrary_state(), action in arbitrary_action()) {
        prop_assert_eq!(state.name().parse::<RadioState>().unwrap(), state);
        prop_assert_eq!(action.name().parse::<Action>().unwrap(), action);
    }

    #[test]
    fn unset_pulse_is_a_no_op(state_steps in prop::collection::vec(arbitrary_action(), 0..16)) {
        let mut radio = Radio::new(RadioConfig::default()).unwrap();
        for action in state_steps {
            let _ = radio.apply_action(action);
        }
        let before = radio.checkpoint();

        for task in [Task::EnableTx, Task::EnableRx, Task::Disable, Task::Start] {
            radio.task(task, false).unwrap();
        }

        let after = radio.checkpoint();
        prop_assert_eq!(after.state, before.state);
        prop_assert_eq!(after.pending, before.pending);
        prop_assert_eq!(after.events, before.events);
        prop_assert_eq!(after.history, before.history);
    }

    #[test]
    fn cleared_events_stay_clear_until_next_occurrence(action in arbitrary_action()) {
        let mut radio = Radio::new(RadioConfig::default()).unwrap();
        radio.task_enable_tx(true).unwrap();
        radio.advance(RAMP_UP_DELAY).unwrap();
        radio.task_start(true).unwrap();
        radio.set_event(EventKind::Enable, false);

        let outcome = radio.apply_action(action);
        let relatched = outcome.is_ok() && action == Action::Ready;
        prop_assert_eq!(radio.read_event(EventKind::Enable), relatched);
    }
}

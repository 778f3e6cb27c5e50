//! The radio peripheral's transition table.

use crate::builder::error::BuildErrors;
use crate::builder::state::StateBuilder;
use crate::builder::table::TableBuilder;
use crate::core::{Action, RadioState, TransitionTable, RAMP_UP_DELAY};

/// Build the radio peripheral table.
///
/// Every radio is created over this table.
///
/// | State | Outgoing | Auto-trigger |
/// |---|---|---|
/// | DISABLED | TX_EN→TXRU, RX_EN→RXRU | |
/// | RXRU | DISABLE→RXDISABLE, READY→RXIDLE | READY after 10 |
/// | RXIDLE | DISABLE→RXDISABLE, START→RX | |
/// | RX | DISABLE→RXDISABLE, END→RXIDLE, RX_STOP→RXIDLE, ADDRESS→RX, PAYLOAD→RX | |
/// | RXDISABLE | DISABLED→DISABLED | |
/// | TXRU | DISABLE→TXDISABLE, READY→TXIDLE | READY after 10 |
/// | TXIDLE | DISABLE→TXDISABLE, START→TX | |
/// | TX | DISABLE→TXDISABLE, END→TXIDLE, STOP→TXIDLE, ADDRESS→TX, PAYLOAD→TX | |
/// | TXDISABLE | DISABLED→DISABLED | |
///
/// # Example
///
/// ```rust
/// use radio_fsm::builder::radio_table;
/// use radio_fsm::core::{Action, RadioState};
///
/// let table = radio_table().unwrap();
/// let disabled = table.state(RadioState::Disabled).unwrap();
/// let next = table.resolve_transition(disabled, Action::TxEn).unwrap();
/// assert_eq!(next.name(), RadioState::TxRu);
/// assert!(table.resolve_transition(disabled, Action::Start).is_err());
/// ```
pub fn radio_table() -> Result<TransitionTable, BuildErrors> {
    TableBuilder::new()
        .initial(RadioState::Disabled)
        .state(
            StateBuilder::new(RadioState::Disabled)
                .incoming([Action::Disabled])
                .on(Action::TxEn, RadioState::TxRu)
                .on(Action::RxEn, RadioState::RxRu),
        )
        .state(
            StateBuilder::new(RadioState::RxRu)
                .incoming([Action::RxEn])
                .on(Action::Disable, RadioState::RxDisable)
                .on(Action::Ready, RadioState::RxIdle)
                .auto_trigger(Action::Ready, RAMP_UP_DELAY),
        )
        .state(
            StateBuilder::new(RadioState::RxIdle)
                .incoming([Action::Ready, Action::End, Action::RxStop])
                .on(Action::Disable, RadioState::RxDisable)
                .on(Action::Start, RadioState::Rx),
        )
        .state(
            StateBuilder::new(RadioState::Rx)
                .incoming([Action::Start, Action::Address, Action::Payload])
                .on(Action::Disable, RadioState::RxDisable)
                .on(Action::End, RadioState::RxIdle)
                .on(Action::RxStop, RadioState::RxIdle)
                .on(Action::Address, RadioState::Rx)
                .on(Action::Payload, RadioState::Rx),
        )
        .state(
            StateBuilder::new(RadioState::RxDisable)
                .incoming([Action::Disable])
                .on(Action::Disabled, RadioState::Disabled),
        )
        .state(
            StateBuilder::new(RadioState::TxRu)
                .incoming([Action::TxEn])
                .on(Action::Disable, RadioState::TxDisable)
                .on(Action::Ready, RadioState::TxIdle)
                .auto_trigger(Action::Ready, RAMP_UP_DELAY),
        )
        .state(
            StateBuilder::new(RadioState::TxIdle)
                .incoming([Action::Ready, Action::End, Action::Stop])
                .on(Action::Disable, RadioState::TxDisable)
                .on(Action::Start, RadioState::Tx),
        )
        .state(
            StateBuilder::new(RadioState::Tx)
                .incoming([Action::Start, Action::Address, Action::Payload])
                .on(Action::Disable, RadioState::TxDisable)
                .on(Action::End, RadioState::TxIdle)
                .on(Action::Stop, RadioState::TxIdle)
                .on(Action::Address, RadioState::Tx)
                .on(Action::Payload, RadioState::Tx),
        )
        .state(
            StateBuilder::new(RadioState::TxDisable)
                .incoming([Action::Disable])
                .on(Action::Disabled, RadioState::Disabled),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AutoTrigger, ALL_STATES};

    fn table() -> TransitionTable {
        radio_table().unwrap()
    }

    #[test]
    fn radio_table_has_every_state() {
        let table = table();
        assert_eq!(table.len(), ALL_STATES.len());
        assert_eq!(table.initial(), RadioState::Disabled);
        for state in ALL_STATES {
            assert_eq!(table.state(state).unwrap().name(), state);
        }
    }

    #[test]
    fn radio_table_edges_match_hardware_wiring() {
        use Action as A;
        use RadioState as S;

        let expected = [
            (S::Disabled, A::TxEn, S::TxRu),
            (S::Disabled, A::RxEn, S::RxRu),
            (S::RxRu, A::Disable, S::RxDisable),
            (S::RxRu, A::Ready, S::RxIdle),
            (S::RxIdle, A::Disable, S::RxDisable),
            (S::RxIdle, A::Start, S::Rx),
            (S::Rx, A::Disable, S::RxDisable),
            (S::Rx, A::End, S::RxIdle),
            (S::Rx, A::RxStop, S::RxIdle),
            (S::Rx, A::Address, S::Rx),
            (S::Rx, A::Payload, S::Rx),
            (S::RxDisable, A::Disabled, S::Disabled),
            (S::TxRu, A::Disable, S::TxDisable),
            (S::TxRu, A::Ready, S::TxIdle),
            (S::TxIdle, A::Disable, S::TxDisable),
            (S::TxIdle, A::Start, S::Tx),
            (S::Tx, A::Disable, S::TxDisable),
            (S::Tx, A::End, S::TxIdle),
            (S::Tx, A::Stop, S::TxIdle),
            (S::Tx, A::Address, S::Tx),
            (S::Tx, A::Payload, S::Tx),
            (S::TxDisable, A::Disabled, S::Disabled),
        ];

        let table = table();
        for (from, action, to) in expected {
            assert!(
                table
                    .transitions()
                    .any(|e| e.from == from && e.action == action && e.to == to),
                "missing edge {from} -({action})-> {to}"
            );
        }
        assert_eq!(table.transitions().count(), expected.len());
    }

    #[test]
    fn only_ramp_up_states_auto_trigger() {
        let table = table();
        for def in table.states() {
            match def.name() {
                RadioState::RxRu | RadioState::TxRu => assert_eq!(
                    def.auto_trigger(),
                    Some(AutoTrigger {
                        action: Action::Ready,
                        delay: RAMP_UP_DELAY,
                    })
                ),
                _ => assert_eq!(def.auto_trigger(), None),
            }
        }
    }
}

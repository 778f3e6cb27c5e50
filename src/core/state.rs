//! The nine modes of the radio peripheral.
//!
//! States are plain identifiers. What a state allows (its outgoing actions
//! and optional auto-trigger) lives in the [`TransitionTable`](super::TransitionTable).

use crate::error::RadioError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A mode of the radio peripheral.
///
/// The machine starts in `Disabled` and has no terminal state: it cycles
/// through ramp-up, idle, active and disable for either the TX or RX branch.
///
/// # Example
///
/// ```rust
/// use radio_fsm::core::RadioState;
///
/// let state: RadioState = "TXRU".parse().unwrap();
/// assert_eq!(state, RadioState::TxRu);
/// assert!(state.is_tx());
/// assert_eq!(state.to_string(), "TXRU");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RadioState {
    Disabled,
    RxRu,
    RxIdle,
    Rx,
    RxDisable,
    TxRu,
    TxIdle,
    Tx,
    TxDisable,
}

/// Canonical list of all radio states, in table order.
pub const ALL_STATES: [RadioState; 9] = [
    RadioState::Disabled,
    RadioState::RxRu,
    RadioState::RxIdle,
    RadioState::Rx,
    RadioState::RxDisable,
    RadioState::TxRu,
    RadioState::TxIdle,
    RadioState::Tx,
    RadioState::TxDisable,
];

impl RadioState {
    /// Stable, case-sensitive state name.
    pub const fn name(self) -> &'static str {
        match self {
            RadioState::Disabled => "DISABLED",
            RadioState::RxRu => "RXRU",
            RadioState::RxIdle => "RXIDLE",
            RadioState::Rx => "RX",
            RadioState::RxDisable => "RXDISABLE",
            RadioState::TxRu => "TXRU",
            RadioState::TxIdle => "TXIDLE",
            RadioState::Tx => "TX",
            RadioState::TxDisable => "TXDISABLE",
        }
    }

    /// True for states on the transmit branch.
    pub const fn is_tx(self) -> bool {
        matches!(
            self,
            RadioState::TxRu | RadioState::TxIdle | RadioState::Tx | RadioState::TxDisable
        )
    }

    /// True for states on the receive branch.
    pub const fn is_rx(self) -> bool {
        matches!(
            self,
            RadioState::RxRu | RadioState::RxIdle | RadioState::Rx | RadioState::RxDisable
        )
    }

    /// Look a state up by its canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_STATES.into_iter().find(|s| s.name() == name)
    }
}

impl fmt::Display for RadioState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RadioState {
    type Err = RadioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| RadioError::StateNotFound(s.to_string()))
    }
}

//! Radio FSM: control-logic state machine for a radio peripheral
//!
//! The radio is driven by pulsed tasks (enable TX, enable RX, start,
//! disable) and by hardware actions (`READY`, `END`, `ADDRESS`, ...). A fixed
//! transition table decides where each action leads. Ramp-up states complete
//! on their own after a fixed delay through a single pending auto-trigger.
//!
//! The crate follows a "pure core, imperative shell" layout:
//!
//! - **Core**: states, actions and the validated, read-only transition table
//! - **Radio**: the synchronous controller with a logical clock
//! - **Service**: a tokio task that owns a radio and maps time units onto
//!   wall-clock time
//! - **Checkpoint**: serializable snapshots for inspection and resume
//!
//! # Example
//!
//! ```rust
//! use radio_fsm::{Action, EventKind, Radio, RadioConfig, RadioState};
//!
//! let mut radio = Radio::new(RadioConfig::default()).unwrap();
//!
//! radio.task_enable_rx(true).unwrap();
//! assert_eq!(radio.state(), RadioState::RxRu);
//!
//! radio.advance(10).unwrap();
//! assert_eq!(radio.state(), RadioState::RxIdle);
//! assert!(radio.read_event(EventKind::Enable));
//!
//! radio.task_start(true).unwrap();
//! radio.apply_action(Action::End).unwrap();
//! radio.task_disable(true).unwrap();
//! radio.apply_action(Action::Disabled).unwrap();
//! assert_eq!(radio.state_name(), "DISABLED");
//!
//! // Actions outside the current state's outgoing set are rejected.
//! assert!(radio.apply_action(Action::Start).is_err());
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod error;
pub mod radio;
pub mod service;

// Re-export commonly used types
pub use crate::core::{Action, RadioState, Task, TransitionTable};
pub use error::{RadioError, Result};
pub use radio::{EventKind, Radio, RadioConfig};
pub use service::{RadioHandle, RadioService};

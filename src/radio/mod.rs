//! The radio controller and its owned parts.
//!
//! [`Radio`] is synchronous and never blocks: time only moves when the
//! caller advances it, which keeps the controller deterministic. The
//! [`service`](crate::service) module drives it from wall-clock time.

mod config;
mod controller;
mod events;
mod timer;

pub use config::RadioConfig;
pub use controller::{InterruptHook, Radio};
pub use events::{EventKind, EventLatch, ALL_EVENTS};
pub use timer::{PendingTrigger, TriggerSlot};

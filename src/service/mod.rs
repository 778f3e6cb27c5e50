//! Async shell around a [`Radio`](crate::radio::Radio).
//!
//! [`RadioService`] moves a radio onto a tokio task that owns it exclusively
//! and maps logical time units onto wall-clock time, so ramp-up triggers
//! fire on their own. Callers talk to it through cloneable
//! [`RadioHandle`]s.

pub(crate) mod command;
mod handle;
mod runner;

pub use handle::RadioHandle;
pub use runner::RadioService;

//! Builder API for authoring the transition table.
//!
//! The radio table is authored once with these builders and validated when it
//! is loaded, before any transition runs. Validation accumulates every problem
//! (unknown destinations, duplicate states or actions, auto-triggers without a
//! matching edge) rather than stopping at the first.

pub mod error;
mod radio;
pub mod state;
pub mod table;

pub use error::{BuildError, BuildErrors};
pub use radio::radio_table;
pub use state::StateBuilder;
pub use table::TableBuilder;

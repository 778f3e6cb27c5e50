//! Radio configuration.
//!
//! Values missing from a JSON document fall back to the defaults below.

use crate::error::{RadioError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Construction-time settings of a [`Radio`](super::Radio).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadioConfig {
    /// Invoke the interrupt hook whenever `END` is processed.
    pub trigger_on_end: bool,

    /// Invoke the interrupt hook whenever `ADDRESS` is processed.
    pub trigger_on_address: bool,

    /// Wall-clock length of one time unit, in microseconds. Only the async
    /// service uses it; the controller counts abstract units.
    pub time_unit_us: u64,

    /// Maximum number of retained transition records.
    pub history_limit: usize,

    /// Capacity of the service command queue.
    pub command_buffer: usize,
}

impl Default for RadioConfig {
    fn default() -> Self {
        Self {
            trigger_on_end: false,
            trigger_on_address: false,
            time_unit_us: 1_000,
            history_limit: 256,
            command_buffer: 32,
        }
    }
}

impl RadioConfig {
    pub fn trigger_on_end(mut self, enabled: bool) -> Self {
        self.trigger_on_end = enabled;
        self
    }

    pub fn trigger_on_address(mut self, enabled: bool) -> Self {
        self.trigger_on_address = enabled;
        self
    }

    pub fn time_unit(mut self, unit: Duration) -> Self {
        self.time_unit_us = u64::try_from(unit.as_micros()).unwrap_or(u64::MAX);
        self
    }

    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    pub fn command_buffer(mut self, capacity: usize) -> Self {
        self.command_buffer = capacity;
        self
    }

    /// Wall-clock duration of `units` time units.
    pub fn units(&self, units: u64) -> Duration {
        Duration::from_micros(self.time_unit_us.saturating_mul(units))
    }

    /// Parse a JSON document and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| RadioError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.time_unit_us == 0 {
            return Err(RadioError::Config(
                "time_unit_us must be greater than zero".to_string(),
            ));
        }
        if self.command_buffer == 0 {
            return Err(RadioError::Config(
                "command_buffer must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

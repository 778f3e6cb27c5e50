//! The radio controller: transition algorithm, tasks, events and the
//! timed auto-advance.

use crate::builder::radio_table;
use crate::checkpoint::{CheckpointError, RadioCheckpoint, CHECKPOINT_VERSION};
use crate::core::{
    Action, RadioState, StateDef, Task, TransitionHistory, TransitionRecord, TransitionTable,
};
use crate::error::Result;
use crate::radio::config::RadioConfig;
use crate::radio::events::{EventKind, EventLatch};
use crate::radio::timer::{PendingTrigger, TriggerSlot};
use chrono::Utc;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Caller-supplied side effect for short-circuit interrupts.
pub type InterruptHook = Arc<dyn Fn() + Send + Sync>;

/// One radio peripheral.
///
/// Owns its current state, latched events, trigger flags, the single pending
/// auto-trigger and a logical clock counted in time units. Instances share
/// nothing but the read-only table.
///
/// # Example
///
/// ```rust
/// use radio_fsm::core::RadioState;
/// use radio_fsm::radio::{Radio, RadioConfig};
///
/// let mut radio = Radio::new(RadioConfig::default()).unwrap();
/// radio.task_enable_tx(true).unwrap();
/// assert_eq!(radio.state(), RadioState::TxRu);
///
/// // The ramp-up completes on its own after 10 time units.
/// radio.advance(10).unwrap();
/// assert_eq!(radio.state(), RadioState::TxIdle);
/// ```
pub struct Radio {
    table: Arc<TransitionTable>,
    current: RadioState,
    events: EventLatch,
    config: RadioConfig,
    hook: Option<InterruptHook>,
    timer: TriggerSlot,
    clock: u64,
    history: TransitionHistory,
}

impl fmt::Debug for Radio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Radio")
            .field("current", &self.current)
            .field("events", &self.events)
            .field("config", &self.config)
            .field("hook", &self.hook.is_some())
            .field("pending", &self.timer.pending())
            .field("clock", &self.clock)
            .finish()
    }
}

impl Radio {
    /// Create a radio over the peripheral table, in `DISABLED`.
    ///
    /// The table is validated here, before any transition runs.
    pub fn new(config: RadioConfig) -> Result<Self> {
        let table = radio_table()?;
        Self::with_table(Arc::new(table), config)
    }

    /// Create a radio over an already validated table, in its initial state.
    pub fn with_table(table: Arc<TransitionTable>, config: RadioConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            current: table.initial(),
            table,
            events: EventLatch::new(),
            history: TransitionHistory::with_limit(config.history_limit),
            config,
            hook: None,
            timer: TriggerSlot::new(),
            clock: 0,
        })
    }

    pub fn with_interrupt_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.set_interrupt_hook(hook);
        self
    }

    pub fn set_interrupt_hook<F>(&mut self, hook: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.hook = Some(Arc::new(hook));
    }

    pub fn clear_interrupt_hook(&mut self) {
        self.hook = None;
    }

    /// Apply `action` to the current state.
    ///
    /// `END` and `ADDRESS` first invoke the interrupt hook when the matching
    /// trigger flag is set, whatever the outcome. An action outside the
    /// current state's outgoing set fails with
    /// [`RadioError::InvalidTransition`](crate::error::RadioError::InvalidTransition)
    /// and changes nothing. On success the pending auto-trigger is cancelled,
    /// the state replaced, and the destination's own auto-trigger armed.
    pub fn apply_action(&mut self, action: Action) -> Result<RadioState> {
        self.transition(action, false)
    }

    fn transition(&mut self, action: Action, automatic: bool) -> Result<RadioState> {
        if action == Action::End && self.config.trigger_on_end {
            self.interrupt(action);
        }
        if action == Action::Address && self.config.trigger_on_address {
            self.interrupt(action);
        }

        let table = Arc::clone(&self.table);
        let from = table.state(self.current)?;
        let to = match table.resolve_transition(from, action) {
            Ok(to) => to,
            Err(err) => {
                warn!(state = %self.current, %action, automatic, "rejected transition");
                return Err(err);
            }
        };

        if let Some(stale) = self.timer.cancel() {
            debug!(
                action = %stale.action,
                origin = %stale.origin,
                due = stale.due,
                "pending trigger superseded"
            );
        }

        let previous = self.current;
        self.current = to.name();
        self.history.record(TransitionRecord {
            from: previous,
            action,
            to: self.current,
            tick: self.clock,
            timestamp: Utc::now(),
            automatic,
        });
        debug!(from = %previous, %action, to = %self.current, tick = self.clock, automatic, "radio transition");

        if let Some(kind) = EventKind::for_action(action) {
            self.events.latch(kind);
            trace!(event = %kind, "event latched");
        }

        if let Some(trigger) = to.auto_trigger() {
            let pending = self.timer.arm(self.current, trigger, self.clock);
            debug!(action = %pending.action, due = pending.due, "auto-trigger armed");
        }

        Ok(self.current)
    }

    fn interrupt(&self, action: Action) {
        if let Some(hook) = &self.hook {
            trace!(%action, state = %self.current, "interrupt");
            hook();
        }
    }

    /// Issue `task`'s action if `pulse` is set.
    pub fn task(&mut self, task: Task, pulse: bool) -> Result<()> {
        if pulse {
            trace!(%task, "task pulse");
            self.apply_action(task.action())?;
        }
        Ok(())
    }

    pub fn task_enable_tx(&mut self, pulse: bool) -> Result<()> {
        self.task(Task::EnableTx, pulse)
    }

    pub fn task_enable_rx(&mut self, pulse: bool) -> Result<()> {
        self.task(Task::EnableRx, pulse)
    }

    pub fn task_disable(&mut self, pulse: bool) -> Result<()> {
        self.task(Task::Disable, pulse)
    }

    pub fn task_start(&mut self, pulse: bool) -> Result<()> {
        self.task(Task::Start, pulse)
    }

    /// Move the logical clock forward by `units`, firing the pending trigger
    /// (and any trigger it arms in turn) once it comes due.
    pub fn advance(&mut self, units: u64) -> Result<RadioState> {
        let target = self.clock.saturating_add(units);
        while let Some(trigger) = self.timer.take_due(target) {
            self.clock = self.clock.max(trigger.due);
            self.fire(trigger)?;
        }
        self.clock = target;
        Ok(self.current)
    }

    /// Fire the pending trigger now, without waiting for it to come due.
    pub fn fire_pending(&mut self) -> Result<Option<RadioState>> {
        match self.timer.cancel() {
            Some(trigger) => self.fire(trigger).map(Some),
            None => Ok(None),
        }
    }

    fn fire(&mut self, trigger: PendingTrigger) -> Result<RadioState> {
        trace!(
            action = %trigger.action,
            origin = %trigger.origin,
            generation = trigger.generation,
            "auto-trigger fired"
        );
        self.transition(trigger.action, true)
    }

    pub fn read_event(&self, kind: EventKind) -> bool {
        self.events.is_set(kind)
    }

    pub fn event_count(&self, kind: EventKind) -> u32 {
        self.events.count(kind)
    }

    /// `false` clears the event; `true` latches one occurrence.
    pub fn set_event(&mut self, kind: EventKind, value: bool) {
        self.events.set(kind, value);
    }

    pub fn events(&self) -> &EventLatch {
        &self.events
    }

    pub fn state(&self) -> RadioState {
        self.current
    }

    pub fn state_name(&self) -> &'static str {
        self.current.name()
    }

    pub fn current_state(&self) -> Result<&StateDef> {
        self.table.state(self.current)
    }

    pub fn pending_trigger(&self) -> Option<&PendingTrigger> {
        self.timer.pending()
    }

    /// Logical time in time units.
    pub fn now(&self) -> u64 {
        self.clock
    }

    pub fn history(&self) -> &TransitionHistory {
        &self.history
    }

    pub fn config(&self) -> &RadioConfig {
        &self.config
    }

    pub fn table(&self) -> &Arc<TransitionTable> {
        &self.table
    }

    /// Snapshot everything but the interrupt hook.
    pub fn checkpoint(&self) -> RadioCheckpoint {
        RadioCheckpoint {
            version: CHECKPOINT_VERSION,
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            state: self.current,
            events: self.events,
            clock: self.clock,
            pending: self.timer.pending().copied(),
            config: self.config,
            history: self.history.clone(),
        }
    }

    /// Rebuild a radio from a checkpoint over `table`.
    ///
    /// The interrupt hook is not part of a checkpoint; set it again afterwards.
    pub fn resume(checkpoint: RadioCheckpoint, table: Arc<TransitionTable>) -> Result<Self> {
        checkpoint.validate()?;
        checkpoint.config.validate()?;

        let def = table
            .state(checkpoint.state)
            .map_err(|_| CheckpointError::UnknownState(checkpoint.state))?;

        if let Some(pending) = checkpoint.pending {
            let expected = def.auto_trigger().map(|t| t.action);
            if pending.origin != checkpoint.state || expected != Some(pending.action) {
                return Err(CheckpointError::ForeignTrigger {
                    state: checkpoint.state,
                    origin: pending.origin,
                    action: pending.action,
                }
                .into());
            }
        }

        debug!(id = %checkpoint.id, state = %checkpoint.state, clock = checkpoint.clock, "radio resumed");

        Ok(Self {
            table,
            current: checkpoint.state,
            events: checkpoint.events,
            config: checkpoint.config,
            hook: None,
            timer: TriggerSlot::restore(checkpoint.pending),
            clock: checkpoint.clock,
            history: checkpoint.history,
        })
    }
}

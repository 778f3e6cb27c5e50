//! Tokio task that owns a radio.

use crate::radio::{Radio, RadioConfig};
use crate::service::command::Command;
use crate::service::handle::RadioHandle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::{error, info};

/// Runs a [`Radio`] on its own task.
///
/// All access goes through one command queue, so at most one action is
/// applied at a time and actions apply in submission order. The task sleeps
/// until the pending auto-trigger is due instead of polling.
///
/// # Example
///
/// ```rust
/// use radio_fsm::core::RadioState;
/// use radio_fsm::radio::{Radio, RadioConfig};
/// use radio_fsm::service::RadioService;
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let config = RadioConfig::default().time_unit(Duration::from_micros(100));
/// let (handle, service) = RadioService::spawn(Radio::new(config).unwrap());
///
/// handle.enable_tx(true).await.unwrap();
/// tokio::time::sleep(Duration::from_millis(5)).await;
/// assert_eq!(handle.state().await.unwrap(), RadioState::TxIdle);
///
/// drop(handle);
/// let radio = service.await.unwrap();
/// assert_eq!(radio.state(), RadioState::TxIdle);
/// # }
/// ```
pub struct RadioService;

impl RadioService {
    /// Spawn the service on the current tokio runtime.
    ///
    /// The service stops once every handle is dropped and hands the radio
    /// back through the join handle.
    pub fn spawn(radio: Radio) -> (RadioHandle, JoinHandle<Radio>) {
        let (commands, queue) = mpsc::channel(radio.config().command_buffer);
        let task = tokio::spawn(run(radio, queue));
        (RadioHandle::new(commands), task)
    }
}

/// Maps wall-clock time onto the radio's logical time units.
///
/// The logical clock only counts whole units, so a trigger's wall deadline is
/// measured from the instant it was armed rather than from its logical `due`.
struct WallClock {
    origin: Instant,
    base: u64,
    config: RadioConfig,
    armed: Option<Armed>,
}

#[derive(Clone, Copy)]
struct Armed {
    generation: u64,
    deadline: Option<Instant>,
}

impl WallClock {
    fn start(radio: &Radio) -> Self {
        let origin = Instant::now();
        let base = radio.now();
        let config = *radio.config();
        let armed = radio.pending_trigger().map(|pending| Armed {
            generation: pending.generation,
            deadline: origin.checked_add(config.units(pending.due.saturating_sub(base))),
        });
        Self {
            origin,
            base,
            config,
            armed,
        }
    }

    fn now_units(&self) -> u64 {
        let elapsed = u64::try_from(self.origin.elapsed().as_micros()).unwrap_or(u64::MAX);
        self.base
            .saturating_add(elapsed / self.config.time_unit_us)
    }

    /// Wall deadline of the radio's pending trigger. A trigger seen for the
    /// first time is taken to have been armed now.
    fn deadline(&mut self, radio: &Radio) -> Option<Instant> {
        let pending = radio.pending_trigger()?;
        match self.armed {
            Some(armed) if armed.generation == pending.generation => armed.deadline,
            _ => {
                let remaining = self.config.units(pending.due.saturating_sub(radio.now()));
                let deadline = Instant::now().checked_add(remaining);
                self.armed = Some(Armed {
                    generation: pending.generation,
                    deadline,
                });
                deadline
            }
        }
    }
}

async fn run(mut radio: Radio, mut queue: mpsc::Receiver<Command>) -> Radio {
    let mut clock = WallClock::start(&radio);
    info!(state = %radio.state(), tick = radio.now(), "radio service started");

    loop {
        let deadline = clock.deadline(&radio);

        tokio::select! {
            command = queue.recv() => {
                let Some(command) = command else { break };
                catch_up(&mut radio, &mut clock);
                command.execute(&mut radio);
            }
            _ = sleep_until(deadline) => catch_up(&mut radio, &mut clock),
        }
    }

    info!(state = %radio.state(), tick = radio.now(), "radio service stopped");
    radio
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

/// Bring the radio's clock up to wall time. The pending trigger fires only
/// once its wall deadline has passed; until then the clock stops short of it.
fn catch_up(radio: &mut Radio, clock: &mut WallClock) {
    let mut target = clock.now_units();
    if let Some(due) = radio.pending_trigger().map(|pending| pending.due) {
        let reached = clock
            .deadline(radio)
            .map_or(false, |deadline| Instant::now() >= deadline);
        target = if reached {
            target.max(due)
        } else {
            target.min(due.saturating_sub(1))
        };
    }
    if target <= radio.now() {
        return;
    }
    if let Err(err) = radio.advance(target - radio.now()) {
        error!(%err, state = %radio.state(), "auto-trigger failed");
    }
}

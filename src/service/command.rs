//! Requests carried over the service command queue.

use crate::checkpoint::RadioCheckpoint;
use crate::core::{Action, RadioState, Task};
use crate::error::Result;
use crate::radio::{EventKind, PendingTrigger, Radio};
use tokio::sync::oneshot;

#[derive(Debug)]
pub(crate) enum Command {
    Apply {
        action: Action,
        reply: oneshot::Sender<Result<RadioState>>,
    },
    Task {
        task: Task,
        pulse: bool,
        reply: oneshot::Sender<Result<()>>,
    },
    ReadEvent {
        kind: EventKind,
        reply: oneshot::Sender<bool>,
    },
    SetEvent {
        kind: EventKind,
        value: bool,
        reply: oneshot::Sender<()>,
    },
    State {
        reply: oneshot::Sender<RadioState>,
    },
    Pending {
        reply: oneshot::Sender<Option<PendingTrigger>>,
    },
    Checkpoint {
        reply: oneshot::Sender<RadioCheckpoint>,
    },
}

impl Command {
    /// Execute against `radio` and answer the requester. A requester that
    /// stopped waiting is not an error.
    pub(crate) fn execute(self, radio: &mut Radio) {
        match self {
            Command::Apply { action, reply } => {
                let _ = reply.send(radio.apply_action(action));
            }
            Command::Task { task, pulse, reply } => {
                let _ = reply.send(radio.task(task, pulse));
            }
            Command::ReadEvent { kind, reply } => {
                let _ = reply.send(radio.read_event(kind));
            }
            Command::SetEvent { kind, value, reply } => {
                radio.set_event(kind, value);
                let _ = reply.send(());
            }
            Command::State { reply } => {
                let _ = reply.send(radio.state());
            }
            Command::Pending { reply } => {
                let _ = reply.send(radio.pending_trigger().copied());
            }
            Command::Checkpoint { reply } => {
                let _ = reply.send(radio.checkpoint());
            }
        }
    }
}

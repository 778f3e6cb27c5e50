//! Cloneable client of a running radio service.

use crate::checkpoint::RadioCheckpoint;
use crate::core::{Action, RadioState, Task};
use crate::error::{RadioError, Result};
use crate::radio::{EventKind, PendingTrigger};
use crate::service::command::Command;
use tokio::sync::{mpsc, oneshot};

/// Async mirror of the [`Radio`](crate::radio::Radio) API.
///
/// Every call is queued behind earlier calls from any clone of the handle
/// and answered once the service has applied it. Calls fail with
/// [`RadioError::ServiceClosed`] once the service has stopped.
#[derive(Debug, Clone)]
pub struct RadioHandle {
    commands: mpsc::Sender<Command>,
}

impl RadioHandle {
    pub(crate) fn new(commands: mpsc::Sender<Command>) -> Self {
        Self { commands }
    }

    async fn request<T>(&self, command: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(command(reply))
            .await
            .map_err(|_| RadioError::ServiceClosed)?;
        response.await.map_err(|_| RadioError::ServiceClosed)
    }

    pub async fn apply_action(&self, action: Action) -> Result<RadioState> {
        self.request(|reply| Command::Apply { action, reply })
            .await?
    }

    pub async fn task(&self, task: Task, pulse: bool) -> Result<()> {
        self.request(|reply| Command::Task { task, pulse, reply })
            .await?
    }

    pub async fn enable_tx(&self, pulse: bool) -> Result<()> {
        self.task(Task::EnableTx, pulse).await
    }

    pub async fn enable_rx(&self, pulse: bool) -> Result<()> {
        self.task(Task::EnableRx, pulse).await
    }

    pub async fn disable(&self, pulse: bool) -> Result<()> {
        self.task(Task::Disable, pulse).await
    }

    pub async fn start(&self, pulse: bool) -> Result<()> {
        self.task(Task::Start, pulse).await
    }

    pub async fn read_event(&self, kind: EventKind) -> Result<bool> {
        self.request(|reply| Command::ReadEvent { kind, reply }).await
    }

    pub async fn set_event(&self, kind: EventKind, value: bool) -> Result<()> {
        self.request(|reply| Command::SetEvent { kind, value, reply })
            .await
    }

    pub async fn state(&self) -> Result<RadioState> {
        self.request(|reply| Command::State { reply }).await
    }

    pub async fn pending_trigger(&self) -> Result<Option<PendingTrigger>> {
        self.request(|reply| Command::Pending { reply }).await
    }

    pub async fn checkpoint(&self) -> Result<RadioCheckpoint> {
        self.request(|reply| Command::Checkpoint { reply }).await
    }
}

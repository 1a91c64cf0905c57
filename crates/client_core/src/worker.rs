//! Command queue in front of a [`TableEngine`].
//!
//! The worker task owns the engine and applies queued commands strictly one
//! at a time in issuance order; a `load` holds the queue until its fetch
//! resolves. Readers observe committed snapshots only.

use shared::protocol::{Command, TableEvent};
use tokio::{
    sync::{
        broadcast,
        mpsc::{self, error::TrySendError},
        watch,
    },
    task::JoinHandle,
};
use tracing::{debug, warn};

use crate::{engine::TableEngine, error::DispatchError, reducer::TableState, source::UserSource};

#[derive(Clone)]
pub struct TableHandle {
    commands: mpsc::Sender<Command>,
    snapshots: watch::Receiver<TableState>,
    events: broadcast::Sender<TableEvent>,
}

impl TableHandle {
    pub fn dispatch(&self, command: Command) -> Result<(), DispatchError> {
        let name = command.name();
        match self.commands.try_send(command) {
            Ok(()) => {
                debug!(command = name, "queued table command");
                Ok(())
            }
            Err(TrySendError::Full(_)) => Err(DispatchError::QueueFull),
            Err(TrySendError::Closed(_)) => Err(DispatchError::WorkerStopped),
        }
    }

    /// Like [`dispatch`](Self::dispatch) but waits for queue space instead of
    /// failing with `QueueFull`.
    pub async fn send(&self, command: Command) -> Result<(), DispatchError> {
        let name = command.name();
        self.commands
            .send(command)
            .await
            .map_err(|_| DispatchError::WorkerStopped)?;
        debug!(command = name, "queued table command");
        Ok(())
    }

    pub fn snapshot(&self) -> TableState {
        self.snapshots.borrow().clone()
    }

    pub fn watch(&self) -> watch::Receiver<TableState> {
        self.snapshots.clone()
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<TableEvent> {
        self.events.subscribe()
    }
}

/// Moves `engine` onto a task. The task ends once every handle is dropped
/// and the queue has drained.
pub fn spawn_table_worker<S>(
    mut engine: TableEngine<S>,
    queue_capacity: usize,
) -> (TableHandle, JoinHandle<()>)
where
    S: UserSource + 'static,
{
    let (commands, mut rx) = mpsc::channel(queue_capacity.max(1));
    let events = engine.event_sender();
    let handle = TableHandle {
        commands,
        snapshots: engine.watch(),
        events: events.clone(),
    };

    let task = tokio::spawn(async move {
        while let Some(command) = rx.recv().await {
            let name = command.name();
            if let Err(err) = engine.apply(command).await {
                warn!(command = name, error = %err, "table command rejected");
                let _ = events.send(TableEvent::CommandRejected {
                    command: name.to_string(),
                    reason: err.to_string(),
                });
            }
        }
        debug!("table worker stopped");
    });

    (handle, task)
}

#[cfg(test)]
#[path = "tests/worker_tests.rs"]
mod tests;

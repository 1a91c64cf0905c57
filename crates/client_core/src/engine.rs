//! The table engine: owns the state, runs the one-shot fetch and applies
//! filter and sort commands.

use shared::{
    domain::{FetchStatus, SortField, UserField},
    protocol::{Command, TableEvent},
};
use tokio::sync::{broadcast, watch};
use tracing::{info, warn};

use crate::{
    error::CommandError,
    reducer::{reduce, Action, TableState},
    source::UserSource,
};

pub struct TableEngine<S: UserSource> {
    source: S,
    state: TableState,
    snapshots: watch::Sender<TableState>,
    events: broadcast::Sender<TableEvent>,
}

impl<S: UserSource> TableEngine<S> {
    pub fn new(source: S) -> Self {
        let (snapshots, _) = watch::channel(TableState::default());
        let (events, _) = broadcast::channel(256);
        Self {
            source,
            state: TableState::default(),
            snapshots,
            events,
        }
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    /// Receiver that always holds the latest committed state, including the
    /// `loading` state published before the fetch suspends.
    pub fn watch(&self) -> watch::Receiver<TableState> {
        self.snapshots.subscribe()
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<TableEvent> {
        self.events.subscribe()
    }

    pub(crate) fn event_sender(&self) -> broadcast::Sender<TableEvent> {
        self.events.clone()
    }

    /// Fetches the records once. Only valid while idle; a failed retrieval is
    /// recorded in the state rather than returned.
    pub async fn load(&mut self) -> Result<FetchStatus, CommandError> {
        let status = self.state.status();
        if status != FetchStatus::Idle {
            warn!(%status, "rejecting load outside idle");
            return Err(CommandError::NotIdle { status });
        }

        self.commit(Action::FetchStarted);
        match self.source.fetch_users().await {
            Ok(users) => {
                info!(count = users.len(), "user table loaded");
                self.commit(Action::FetchSucceeded(users));
            }
            Err(err) => {
                let message = err.display_message();
                warn!(error = %message, "user table load failed");
                self.commit(Action::FetchFailed(message.clone()));
                let _ = self.events.send(TableEvent::LoadFailed { message });
            }
        }
        Ok(self.state.status())
    }

    pub fn set_filter(&mut self, field: UserField, pattern: impl Into<String>) {
        self.commit(Action::FilterChanged {
            field,
            pattern: pattern.into(),
        });
    }

    pub fn set_sort(&mut self, field: SortField) {
        self.commit(Action::SortToggled { field });
        let _ = self.events.send(TableEvent::SortChanged {
            sort: self.state.sort().active(),
        });
    }

    /// Drops records, filters and sort and returns to idle so `load` is
    /// valid again.
    pub fn reset(&mut self) {
        info!("user table reset");
        self.commit(Action::Reset);
    }

    pub async fn apply(&mut self, command: Command) -> Result<(), CommandError> {
        match command {
            Command::Load => self.load().await.map(|_| ()),
            Command::SetFilter { field, pattern } => {
                self.set_filter(field, pattern);
                Ok(())
            }
            Command::SetSort { field } => {
                self.set_sort(field);
                Ok(())
            }
            Command::Reset => {
                self.reset();
                Ok(())
            }
        }
    }

    fn commit(&mut self, action: Action) {
        let previous_status = self.state.status();
        let rederives = !matches!(action, Action::FetchStarted | Action::FetchFailed(_));
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);

        if self.state.status() != previous_status {
            let _ = self.events.send(TableEvent::StatusChanged {
                status: self.state.status(),
            });
        }
        if rederives {
            let _ = self.events.send(TableEvent::ViewUpdated {
                visible: self.state.view().len(),
                total: self.state.records().len(),
            });
        }
        self.snapshots.send_replace(self.state.clone());
    }
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;

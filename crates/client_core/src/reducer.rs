//! Table state and the reducer that applies every transition to it.

use std::sync::Arc;

use shared::domain::{FetchStatus, SortField, User, UserField};
use tracing::{debug, warn};

use crate::{filters::FilterSet, projector::project, sort::SortSpec};

/// Every transition the table state can take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    FetchStarted,
    FetchSucceeded(Vec<User>),
    FetchFailed(String),
    FilterChanged { field: UserField, pattern: String },
    SortToggled { field: SortField },
    Reset,
}

/// Raw records, fetch status, filters, sort and the rows derived from them.
///
/// Fields are only written by [`reduce`], which recomputes `view` whenever
/// one of its inputs changes. Clones share the record and view buffers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableState {
    records: Arc<Vec<User>>,
    status: FetchStatus,
    error: Option<String>,
    filters: FilterSet,
    sort: SortSpec,
    view: Arc<Vec<User>>,
}

impl TableState {
    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn records(&self) -> &[User] {
        &self.records
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn view(&self) -> &[User] {
        &self.view
    }

    /// Successful load whose filters exclude every row. Only meaningful
    /// alongside `status`: an unloaded table also has an empty view.
    pub fn is_empty_result(&self) -> bool {
        self.status == FetchStatus::Succeeded && self.view.is_empty()
    }

    fn rederive(&mut self) {
        self.view = Arc::new(project(&self.records, &self.filters, &self.sort));
    }
}

pub fn reduce(mut state: TableState, action: Action) -> TableState {
    match action {
        Action::FetchStarted => {
            if state.status != FetchStatus::Idle {
                warn!(status = %state.status, "ignoring fetch start outside idle");
                return state;
            }
            state.status = FetchStatus::Loading;
        }
        Action::FetchSucceeded(users) => {
            if state.status != FetchStatus::Loading {
                warn!(status = %state.status, "ignoring fetch result without a pending load");
                return state;
            }
            state.status = FetchStatus::Succeeded;
            state.error = None;
            state.records = Arc::new(users);
            state.rederive();
        }
        Action::FetchFailed(message) => {
            if state.status != FetchStatus::Loading {
                warn!(status = %state.status, "ignoring fetch failure without a pending load");
                return state;
            }
            state.status = FetchStatus::Failed;
            state.error = Some(message);
        }
        Action::FilterChanged { field, pattern } => {
            debug!(%field, %pattern, "filter changed");
            state.filters.set(field, pattern);
            state.rederive();
        }
        Action::SortToggled { field } => {
            state.sort = state.sort.toggled(field);
            debug!(%field, sort = ?state.sort.active(), "sort toggled");
            if state.sort.is_unsorted() {
                state.rederive();
            } else {
                // Ties keep the order the current view had before this click.
                let mut view = (*state.view).clone();
                state.sort.apply(&mut view);
                state.view = Arc::new(view);
            }
        }
        Action::Reset => return TableState::default(),
    }
    state
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;

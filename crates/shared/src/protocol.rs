use serde::{Deserialize, Serialize};

use crate::{
    domain::{FetchStatus, SortDirection, SortField, UserField},
    error::UnknownFieldError,
};

/// Commands the presentation layer may issue against a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Command {
    Load,
    SetFilter { field: UserField, pattern: String },
    SetSort { field: SortField },
    Reset,
}

impl Command {
    pub fn set_filter(field: &str, pattern: impl Into<String>) -> Result<Self, UnknownFieldError> {
        Ok(Command::SetFilter {
            field: field.parse()?,
            pattern: pattern.into(),
        })
    }

    pub fn set_sort(field: &str) -> Result<Self, UnknownFieldError> {
        Ok(Command::SetSort {
            field: field.parse()?,
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Load => "load",
            Command::SetFilter { .. } => "set_filter",
            Command::SetSort { .. } => "set_sort",
            Command::Reset => "reset",
        }
    }
}

/// Change notifications published after a command has been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum TableEvent {
    StatusChanged {
        status: FetchStatus,
    },
    ViewUpdated {
        visible: usize,
        total: usize,
    },
    SortChanged {
        #[serde(default)]
        sort: Option<(SortField, SortDirection)>,
    },
    LoadFailed {
        message: String,
    },
    CommandRejected {
        command: String,
        reason: String,
    },
}

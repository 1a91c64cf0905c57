//! Single-column, three-state sort.

use serde::{Deserialize, Serialize};
use shared::domain::{SortDirection, SortField, User};

/// The active sort column and direction, or unsorted.
///
/// A direction only exists together with a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    active: Option<(SortField, SortDirection)>,
}

impl SortSpec {
    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn by(field: SortField, direction: SortDirection) -> Self {
        Self {
            active: Some((field, direction)),
        }
    }

    pub fn field(&self) -> Option<SortField> {
        self.active.map(|(field, _)| field)
    }

    pub fn direction(&self) -> Option<SortDirection> {
        self.active.map(|(_, direction)| direction)
    }

    pub fn active(&self) -> Option<(SortField, SortDirection)> {
        self.active
    }

    pub fn is_unsorted(&self) -> bool {
        self.active.is_none()
    }

    /// Header click on `field`: ascending, then descending, then unsorted.
    /// Clicking a different column always starts over at ascending.
    pub fn toggled(self, field: SortField) -> Self {
        let active = match self.active {
            Some((current, SortDirection::Ascending)) if current == field => {
                Some((field, SortDirection::Descending))
            }
            Some((current, SortDirection::Descending)) if current == field => None,
            _ => Some((field, SortDirection::Ascending)),
        };
        Self { active }
    }

    /// Orders `users` in place. `sort_by` is stable, so rows with equal keys
    /// keep their relative order in both directions.
    pub fn apply(&self, users: &mut [User]) {
        if let Some((field, direction)) = self.active {
            users.sort_by(|a, b| direction.apply(field.compare(a, b)));
        }
    }
}

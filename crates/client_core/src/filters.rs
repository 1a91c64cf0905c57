//! Per-column substring filters.

use serde::{Deserialize, Serialize};
use shared::domain::{User, UserField};

/// One pattern per text column. An empty pattern admits every row; non-empty
/// patterns combine with AND.
///
/// The set of keys is fixed by construction, so a filter can never be created
/// for a column the table does not have.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    name: String,
    username: String,
    email: String,
    phone: String,
}

impl FilterSet {
    pub fn get(&self, field: UserField) -> &str {
        match field {
            UserField::Name => &self.name,
            UserField::Username => &self.username,
            UserField::Email => &self.email,
            UserField::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, field: UserField, pattern: impl Into<String>) {
        let slot = match field {
            UserField::Name => &mut self.name,
            UserField::Username => &mut self.username,
            UserField::Email => &mut self.email,
            UserField::Phone => &mut self.phone,
        };
        *slot = pattern.into();
    }

    pub fn iter(&self) -> impl Iterator<Item = (UserField, &str)> + '_ {
        UserField::ALL.into_iter().map(|field| (field, self.get(field)))
    }

    pub fn is_unconstrained(&self) -> bool {
        self.iter().all(|(_, pattern)| pattern.is_empty())
    }

    /// Lower-cases the active patterns once so a projection does not redo it
    /// per row.
    pub fn matcher(&self) -> FilterMatcher {
        FilterMatcher {
            needles: self
                .iter()
                .filter(|(_, pattern)| !pattern.is_empty())
                .map(|(field, pattern)| (field, pattern.to_lowercase()))
                .collect(),
        }
    }

    pub fn matches(&self, user: &User) -> bool {
        self.matcher().matches(user)
    }
}

#[derive(Debug, Clone)]
pub struct FilterMatcher {
    needles: Vec<(UserField, String)>,
}

impl FilterMatcher {
    pub fn matches(&self, user: &User) -> bool {
        self.needles
            .iter()
            .all(|(field, needle)| user.field(*field).to_lowercase().contains(needle.as_str()))
    }
}

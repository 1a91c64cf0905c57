//! Derivation of the visible rows from the raw records, filters and sort.

use shared::domain::User;

use crate::{filters::FilterSet, sort::SortSpec};

/// Rows of `records` that pass every filter, ordered by `sort`. With no
/// active sort the rows stay in fetch order.
pub fn project(records: &[User], filters: &FilterSet, sort: &SortSpec) -> Vec<User> {
    let matcher = filters.matcher();
    let mut view: Vec<User> = records
        .iter()
        .filter(|user| matcher.matches(user))
        .cloned()
        .collect();
    sort.apply(&mut view);
    view
}

#[cfg(test)]
#[path = "tests/projector_tests.rs"]
mod tests;

use super::*;
use proptest::prelude::*;
use shared::domain::{SortDirection, SortField, UserField, UserId};

fn user(id: i64, name: &str, email: &str) -> User {
    User {
        id: UserId(id),
        name: name.into(),
        username: format!("user{id}"),
        email: email.into(),
        phone: format!("555-{id:04}"),
    }
}

fn ids(users: &[User]) -> Vec<i64> {
    users.iter().map(|u| u.id.0).collect()
}

fn arb_users() -> impl Strategy<Value = Vec<User>> {
    prop::collection::vec(("[a-cA-C]{0,3}", "[a-c]{0,2}@[xy]\\.com"), 0..12).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(idx, (name, email))| user(idx as i64 + 1, &name, &email))
            .collect()
    })
}

fn arb_filters() -> impl Strategy<Value = FilterSet> {
    ("[a-cA-C]{0,2}", "[a-c@]{0,2}").prop_map(|(name, email)| {
        let mut filters = FilterSet::default();
        filters.set(UserField::Name, name);
        filters.set(UserField::Email, email);
        filters
    })
}

fn arb_sort() -> impl Strategy<Value = SortSpec> {
    prop_oneof![
        Just(SortSpec::unsorted()),
        Just(SortSpec::by(SortField::Name, SortDirection::Ascending)),
        Just(SortSpec::by(SortField::Name, SortDirection::Descending)),
        Just(SortSpec::by(SortField::Email, SortDirection::Ascending)),
        Just(SortSpec::by(SortField::Email, SortDirection::Descending)),
    ]
}

#[test]
fn and_semantics_over_two_columns() {
    let records = vec![user(1, "Bob", "b@x.com"), user(2, "Alice", "a@x.com")];
    let mut filters = FilterSet::default();

    filters.set(UserField::Name, "a");
    let view = project(&records, &filters, &SortSpec::unsorted());
    assert_eq!(ids(&view), vec![2], "'bob' does not contain 'a'");

    filters.set(UserField::Email, "b@x.com");
    let view = project(&records, &filters, &SortSpec::unsorted());
    assert!(view.is_empty());
}

#[test]
fn sort_applies_after_filtering() {
    let records = vec![
        user(1, "Carol", "c@x.com"),
        user(2, "alan", "a@x.com"),
        user(3, "Bart", "b@x.com"),
        user(4, "Zoe", "z@x.com"),
    ];
    let mut filters = FilterSet::default();
    filters.set(UserField::Name, "A");
    let view = project(
        &records,
        &filters,
        &SortSpec::by(SortField::Name, SortDirection::Ascending),
    );
    assert_eq!(ids(&view), vec![3, 1, 2], "ordinal order puts uppercase first");
}

proptest! {
    #[test]
    fn view_only_contains_matching_records(
        records in arb_users(),
        filters in arb_filters(),
        sort in arb_sort(),
    ) {
        let view = project(&records, &filters, &sort);
        for row in &view {
            prop_assert!(records.contains(row));
            prop_assert!(filters.matches(row));
        }
        let expected = records.iter().filter(|u| filters.matches(u)).count();
        prop_assert_eq!(view.len(), expected);
    }

    #[test]
    fn projection_is_idempotent(
        records in arb_users(),
        filters in arb_filters(),
        sort in arb_sort(),
    ) {
        let once = project(&records, &filters, &sort);
        let twice = project(&records, &filters.clone(), &sort);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn equal_keys_keep_fetch_order(records in arb_users(), sort in arb_sort()) {
        let view = project(&records, &FilterSet::default(), &sort);
        if let Some((field, _)) = sort.active() {
            for pair in view.windows(2) {
                if field.compare(&pair[0], &pair[1]).is_eq() {
                    prop_assert!(pair[0].id < pair[1].id);
                }
            }
        }
    }

    #[test]
    fn three_toggles_restore_filtered_order(records in arb_users(), filters in arb_filters()) {
        let base = project(&records, &filters, &SortSpec::unsorted());
        let mut sort = SortSpec::unsorted();
        for _ in 0..3 {
            sort = sort.toggled(SortField::Name);
        }
        prop_assert_eq!(project(&records, &filters, &sort), base);
    }
}

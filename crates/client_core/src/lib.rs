//! Client-side user table: fetches the user directory once, then derives the
//! visible rows from per-column filters and a single-column sort.

pub mod engine;
pub mod error;
pub mod filters;
pub mod projector;
pub mod reducer;
pub mod settings;
pub mod sort;
pub mod source;
pub mod worker;

pub use engine::TableEngine;
pub use error::{CommandError, DispatchError, FetchError};
pub use filters::FilterSet;
pub use projector::project;
pub use reducer::{reduce, Action, TableState};
pub use settings::{load_settings, ClientSettings};
pub use sort::SortSpec;
pub use source::{HttpUserSource, MissingUserSource, StaticUserSource, UserSource};
pub use worker::{spawn_table_worker, TableHandle};

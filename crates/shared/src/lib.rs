//! Types shared by the table engine, the fixture directory server and the CLI.

pub mod domain;
pub mod error;
pub mod protocol;

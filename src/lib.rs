//! Documentation examples for the MongoDB Rust driver.
//!
//! Each module under [`usage`] is a self-contained, runnable example meant to
//! be extracted into product documentation; the files under `tests/` exercise
//! the remaining documentation snippets against a live deployment. Snippets
//! are delimited with `:snippet-start:` / `:snippet-end:` comment markers for
//! the extraction tooling.
//!
//! The connection string is resolved by [`config::load`]; see that module for
//! the environment variables involved.

pub mod config;
pub mod usage;

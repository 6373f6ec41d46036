//! Complete, runnable usage examples.
//!
//! Each submodule holds one standalone example as it appears in the driver
//! documentation's "Usage Examples" pages. They all operate on the
//! `sample_mflix.movies` collection.

pub mod delete_many;
pub mod delete_one;
pub mod find;
pub mod find_one;
pub mod update_one;

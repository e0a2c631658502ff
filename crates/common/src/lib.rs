//! Shared plumbing for the catalog API crates: logging setup, runtime
//! directory checks and the small wire types every crate agrees on.

pub mod types;
pub mod utils;
pub mod env;

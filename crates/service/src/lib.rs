//! Service layer for the catalog API.
//! - `storage`: the document store interface and its JSON file implementation.
//! - `auth`: credential verification behind the token gate.
//! - `services`: per-collection business rules (lookups, duplicate checks, id allocation).

pub mod errors;
pub mod auth;
pub mod storage;
pub mod services;
#[cfg(test)]
pub mod test_support;

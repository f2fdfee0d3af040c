//! Backend trait definitions for the domain layer.
//!
//! The link engine depends only on [`KeyValueStore`]; concrete backends live
//! in `crate::infrastructure::store`. A mock is generated via `mockall` for
//! unit tests.

pub mod key_value_store;

pub use key_value_store::{KeyValueStore, StoreError, StoreResult};

#[cfg(test)]
pub use key_value_store::MockKeyValueStore;

//! Local persistence for the athlete document.
//!
//! Two layers:
//! - [`repository`]: an opaque key/value contract (`get`/`set`/`remove`) with a
//!   file-backed implementation and an in-memory one for tests
//! - [`DocumentStore`]: owns the current [`athly_core::Document`] snapshot and
//!   writes the whole document through a repository on every change

mod document_store;
pub mod repository;

pub use document_store::DocumentStore;
pub use repository::{
    FileKeyValueRepository, InMemoryKeyValueRepository, KeyValueRepository, Result, StoreError,
};

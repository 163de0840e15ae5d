//! Key/value repositories backing the document store.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{Result, StoreError};
pub use file::FileKeyValueRepository;
pub use memory::InMemoryKeyValueRepository;
pub use traits::KeyValueRepository;

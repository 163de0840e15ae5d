//! Application layer shared by every front-end.
//!
//! Houses configuration loading, the [`AthlyContext`] that owns the document
//! store and the player directory, the player link and sync services, and the
//! text formatting used when listing records.
pub mod config;
pub mod context;
pub mod dirs;
pub mod format;
pub mod services;

pub use config::ClientConfig;
pub use context::{AthlyContext, ContextBuilder};
pub use services::{PlayerLinkResolver, SearchState, SyncTrigger};

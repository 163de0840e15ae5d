//! Services driving the remote player directory on behalf of the user.

pub mod link;
pub mod sync;

pub use link::{PlayerLinkResolver, SearchState};
pub use sync::SyncTrigger;

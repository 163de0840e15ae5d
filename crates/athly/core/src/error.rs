//! Error types raised while parsing user-facing values.

use thiserror::Error;

/// Errors surfaced by `athly-core` parsers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("unknown home/away marker `{0}` (expected H or A)")]
    HomeAway(String),

    #[error("unknown bullpen context `{0}` (expected 경기 전, 경기 중, 경기 후 or 훈련)")]
    BullpenContext(String),

    #[error("unknown sync scope `{0}` (expected today or recent)")]
    SyncScope(String),

    #[error("invalid date `{0}` (expected YYYY-MM-DD)")]
    Date(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;

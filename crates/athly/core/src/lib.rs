//! Data model and derived views for pitcher self-tracking.
//!
//! `athly-core` defines the single persisted [`Document`] (linked player plus
//! three append-only record collections), the forms that turn raw text input
//! into entries, and the [`report`] aggregation over a document snapshot.
//! Nothing here performs I/O; storage and remote lookups depend on the types
//! re-exported below.
pub mod coerce;
pub mod date;
pub mod document;
pub mod entry;
pub mod error;
pub mod form;
pub mod player;
pub mod report;

pub use document::{Document, STORAGE_KEY};
pub use entry::{
    BullpenContext, BullpenEntry, Dated, GameEntry, HomeAway, WorkoutBlock, WorkoutEntry,
    latest_first,
};
pub use error::{CoreError, Result};
pub use form::{BullpenForm, GameForm, WorkoutForm};
pub use player::{Player, SyncScope};
pub use report::{DailyReport, DailyTotals, daily_totals};

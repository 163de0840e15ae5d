//! The single persisted document.
//!
//! The document is the only unit of persistence. Every change produces a new
//! full document (the `with_*` builders consume `self` and return the next
//! version) which the store then writes as a whole.

use serde::{Deserialize, Serialize};

use crate::entry::{BullpenEntry, GameEntry, WorkoutEntry, latest_first};
use crate::player::Player;

/// Storage key the document is persisted under.
pub const STORAGE_KEY: &str = "athly-beginner-v1";

/// Linked player plus the three append-only record collections.
///
/// Collections keep insertion order, which is the order entries were saved in,
/// not date order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Document {
    pub linked_player: Option<Player>,
    pub bullpen: Vec<BullpenEntry>,
    pub workouts: Vec<WorkoutEntry>,
    pub games: Vec<GameEntry>,
}

impl Document {
    /// The document used when nothing has been stored yet.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Links `player`, replacing any previously linked player.
    pub fn with_linked_player(mut self, player: Player) -> Self {
        self.linked_player = Some(player);
        self
    }

    pub fn with_game(mut self, entry: GameEntry) -> Self {
        self.games.push(entry);
        self
    }

    pub fn with_bullpen(mut self, entry: BullpenEntry) -> Self {
        self.bullpen.push(entry);
        self
    }

    pub fn with_workout(mut self, entry: WorkoutEntry) -> Self {
        self.workouts.push(entry);
        self
    }

    pub fn games_latest_first(&self) -> Vec<&GameEntry> {
        latest_first(&self.games)
    }

    pub fn bullpen_latest_first(&self) -> Vec<&BullpenEntry> {
        latest_first(&self.bullpen)
    }

    pub fn workouts_latest_first(&self) -> Vec<&WorkoutEntry> {
        latest_first(&self.workouts)
    }

    /// True when no entry has been logged in any collection.
    pub fn has_no_entries(&self) -> bool {
        self.bullpen.is_empty() && self.workouts.is_empty() && self.games.is_empty()
    }
}

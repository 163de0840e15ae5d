use serde::{Deserialize, Serialize};

use super::Dated;
use crate::coerce;

/// One block of a workout, e.g. 30 minutes of cardio.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkoutBlock {
    #[serde(rename = "type")]
    pub kind: String,
    /// Minutes.
    #[serde(deserialize_with = "coerce::lenient::count")]
    pub duration: u32,
}

impl WorkoutBlock {
    pub fn new(kind: impl Into<String>, duration: u32) -> Self {
        Self {
            kind: kind.into(),
            duration,
        }
    }

    /// Parses a `type:minutes` spec. A spec without `:` is a block of 0 minutes;
    /// the minutes part is coerced like any numeric input.
    pub fn from_spec(spec: &str) -> Self {
        match spec.rsplit_once(':') {
            Some((kind, minutes)) => Self::new(kind.trim(), coerce::count(minutes)),
            None => Self::new(spec.trim(), 0),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkoutEntry {
    pub date: String,
    pub blocks: Vec<WorkoutBlock>,
    #[serde(deserialize_with = "coerce::lenient::rpe")]
    pub rpe: i32,
    pub notes: String,
}

impl WorkoutEntry {
    /// Sum of block durations in minutes.
    pub fn total_minutes(&self) -> u64 {
        self.blocks.iter().map(|block| u64::from(block.duration)).sum()
    }
}

impl Dated for WorkoutEntry {
    fn date(&self) -> &str {
        &self.date
    }
}

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

use super::Dated;
use crate::coerce;
use crate::error::CoreError;

/// Whether the game was played at home or away. Stored as `"H"` / `"A"`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumIter,
)]
pub enum HomeAway {
    #[default]
    #[serde(rename = "H")]
    #[strum(serialize = "H")]
    Home,
    #[serde(rename = "A")]
    #[strum(serialize = "A")]
    Away,
}

impl HomeAway {
    pub fn label(self) -> &'static str {
        match self {
            HomeAway::Home => "홈",
            HomeAway::Away => "원정",
        }
    }
}

impl FromStr for HomeAway {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HomeAway::iter()
            .find(|side| side.as_ref().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::HomeAway(s.to_string()))
    }
}

/// How the pitcher was used in one game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameEntry {
    pub date: String,
    pub opponent: String,
    pub home_away: HomeAway,
    pub used_inning_from: String,
    pub used_inning_to: String,
    #[serde(deserialize_with = "coerce::lenient::count")]
    pub pitches: u32,
    pub notes: String,
}

impl Dated for GameEntry {
    fn date(&self) -> &str {
        &self.date
    }
}

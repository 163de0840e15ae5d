use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

use super::Dated;
use crate::coerce;
use crate::error::CoreError;

/// When the bullpen session happened relative to a game.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumIter,
)]
pub enum BullpenContext {
    #[default]
    #[serde(rename = "경기 전")]
    #[strum(serialize = "경기 전")]
    PreGame,
    #[serde(rename = "경기 중")]
    #[strum(serialize = "경기 중")]
    InGame,
    #[serde(rename = "경기 후")]
    #[strum(serialize = "경기 후")]
    PostGame,
    #[serde(rename = "훈련")]
    #[strum(serialize = "훈련")]
    Training,
}

impl FromStr for BullpenContext {
    type Err = CoreError;

    /// Accepts the stored label or the short English name (`pre`, `in`,
    /// `post`, `training`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let alias = match s.to_ascii_lowercase().as_str() {
            "pre" | "pre-game" => Some(BullpenContext::PreGame),
            "in" | "in-game" => Some(BullpenContext::InGame),
            "post" | "post-game" => Some(BullpenContext::PostGame),
            "training" => Some(BullpenContext::Training),
            _ => None,
        };

        alias
            .or_else(|| BullpenContext::iter().find(|context| context.as_ref() == s))
            .ok_or_else(|| CoreError::BullpenContext(s.to_string()))
    }
}

/// A practice throwing session outside live play.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BullpenEntry {
    pub date: String,
    pub context: BullpenContext,
    pub start_time: String,
    #[serde(deserialize_with = "coerce::lenient::count")]
    pub total_pitches: u32,
    /// Perceived exertion, expected 1-10 but not validated.
    #[serde(rename = "intensityRPE", deserialize_with = "coerce::lenient::rpe")]
    pub intensity_rpe: i32,
    /// Free-text pitch mix note, e.g. "직50 슬30 체20".
    pub mix: String,
    pub notes: String,
}

impl Dated for BullpenEntry {
    fn date(&self) -> &str {
        &self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_parses_labels_and_aliases() {
        assert_eq!("경기 후".parse::<BullpenContext>(), Ok(BullpenContext::PostGame));
        assert_eq!("training".parse::<BullpenContext>(), Ok(BullpenContext::Training));
        assert_eq!("PRE".parse::<BullpenContext>(), Ok(BullpenContext::PreGame));
        assert!("warmup".parse::<BullpenContext>().is_err());
    }

    #[test]
    fn bullpen_keeps_rpe_field_name() {
        let entry = BullpenEntry {
            date: "2024-05-01".to_string(),
            context: BullpenContext::InGame,
            intensity_rpe: 7,
            total_pitches: 30,
            ..BullpenEntry::default()
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["intensityRPE"], 7);
        assert_eq!(value["totalPitches"], 30);
        assert_eq!(value["context"], "경기 중");

        let back: BullpenEntry = serde_json::from_value(value).unwrap();
        assert_eq!(back, entry);
    }
}

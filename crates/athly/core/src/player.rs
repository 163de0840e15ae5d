//! Player identity and sync scope.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

use crate::error::CoreError;

/// A player the user links their record to. Identity key is `id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub team: String,
    pub position: String,
}

impl Player {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        team: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            team: team.into(),
            position: position.into(),
        }
    }
}

/// Time window for a sync request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SyncScope {
    Today,
    Recent,
}

impl SyncScope {
    /// Button label shown for this scope.
    pub fn label(self) -> &'static str {
        match self {
            SyncScope::Today => "오늘 경기 동기화",
            SyncScope::Recent => "최근 경기 동기화",
        }
    }
}

impl FromStr for SyncScope {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SyncScope::iter()
            .find(|scope| scope.as_ref() == s)
            .ok_or_else(|| CoreError::SyncScope(s.to_string()))
    }
}

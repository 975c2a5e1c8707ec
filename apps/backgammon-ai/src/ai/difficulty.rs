//! Difficulty tiers and the analyzer each one binds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{FurthestFromOffMoveAnalyzer, RandomMoveAnalyzer, StrategicMoveAnalyzer};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiDifficulty {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl AiDifficulty {
    pub const ALL: [AiDifficulty; 3] = [
        AiDifficulty::Beginner,
        AiDifficulty::Intermediate,
        AiDifficulty::Advanced,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            AiDifficulty::Beginner => "beginner",
            AiDifficulty::Intermediate => "intermediate",
            AiDifficulty::Advanced => "advanced",
        }
    }

    /// Registry name of the built-in analyzer for this tier.
    pub const fn analyzer_name(&self) -> &'static str {
        match self {
            AiDifficulty::Beginner => RandomMoveAnalyzer::NAME,
            AiDifficulty::Intermediate => FurthestFromOffMoveAnalyzer::NAME,
            AiDifficulty::Advanced => StrategicMoveAnalyzer::NAME,
        }
    }

    /// Parse a tier name; anything unrecognised plays as a beginner.
    pub fn parse_lenient(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            warn!(difficulty = %name, "Unknown difficulty, using beginner");
            AiDifficulty::Beginner
        })
    }
}

impl fmt::Display for AiDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AiDifficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "beginner" => Ok(AiDifficulty::Beginner),
            "intermediate" => Ok(AiDifficulty::Intermediate),
            "advanced" => Ok(AiDifficulty::Advanced),
            other => Err(format!("unknown difficulty '{other}'")),
        }
    }
}

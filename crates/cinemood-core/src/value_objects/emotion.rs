//! Emotion tag vocabulary
//!
//! Reviews and diary entries are tagged with emotions drawn from a closed
//! seven-value set. The enum is the write-boundary enforcement: anything
//! outside the vocabulary fails to deserialize or parse.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the seven recognized emotion labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Fear,
    Excitement,
    Calm,
    Depression,
}

impl Emotion {
    /// All recognized emotions, in vocabulary order
    pub const ALL: [Emotion; 7] = [
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Excitement,
        Emotion::Calm,
        Emotion::Depression,
    ];

    /// Wire code for this emotion
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Joy => "joy",
            Self::Sadness => "sadness",
            Self::Anger => "anger",
            Self::Fear => "fear",
            Self::Excitement => "excitement",
            Self::Calm => "calm",
            Self::Depression => "depression",
        }
    }

    /// Korean display label shown to clients
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Joy => "기쁨",
            Self::Sadness => "슬픔",
            Self::Anger => "분노",
            Self::Fear => "두려움",
            Self::Excitement => "흥분",
            Self::Calm => "평온",
            Self::Depression => "우울",
        }
    }

    /// Comma-separated list of valid codes, for error messages
    pub fn allowed_values() -> String {
        Self::ALL
            .iter()
            .map(Emotion::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing an emotion from string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized emotion: {0}")]
pub struct EmotionParseError(pub String);

impl FromStr for Emotion {
    type Err = EmotionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "joy" => Ok(Self::Joy),
            "sadness" => Ok(Self::Sadness),
            "anger" => Ok(Self::Anger),
            "fear" => Ok(Self::Fear),
            "excitement" => Ok(Self::Excitement),
            "calm" => Ok(Self::Calm),
            "depression" => Ok(Self::Depression),
            other => Err(EmotionParseError(other.to_string())),
        }
    }
}

/// Sort direction for the emotion ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingOrder {
    #[default]
    Desc,
    Asc,
}

impl RankingOrder {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Desc => "desc",
            Self::Asc => "asc",
        }
    }
}

impl fmt::Display for RankingOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a ranking order from string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid ranking order: {0} (expected 'desc' or 'asc')")]
pub struct RankingOrderParseError(pub String);

impl FromStr for RankingOrder {
    type Err = RankingOrderParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "desc" => Ok(Self::Desc),
            "asc" => Ok(Self::Asc),
            other => Err(RankingOrderParseError(other.to_string())),
        }
    }
}

//! Value objects - immutable types that represent domain concepts

mod emotion;
mod snowflake;

pub use emotion::{
    Emotion, EmotionParseError, RankingOrder, RankingOrderParseError,
};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};

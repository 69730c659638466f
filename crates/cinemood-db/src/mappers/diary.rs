//! Diary entry entity <-> model mapper

use cinemood_core::entities::DiaryEntry;
use cinemood_core::error::DomainError;
use cinemood_core::value_objects::Snowflake;

use crate::models::DiaryEntryModel;

/// Convert DiaryEntryModel to DiaryEntry entity
///
/// Fallible because the stored emotion code must be in the closed vocabulary.
impl TryFrom<DiaryEntryModel> for DiaryEntry {
    type Error = DomainError;

    fn try_from(model: DiaryEntryModel) -> Result<Self, Self::Error> {
        let emotion = model
            .emotion
            .parse()
            .map_err(|_| DomainError::InvalidEmotion(model.emotion.clone()))?;

        Ok(DiaryEntry {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            emotion,
            content: model.content,
            movie_id: model.movie_id,
            created_at: model.created_at,
        })
    }
}

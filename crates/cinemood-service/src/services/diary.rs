//! Diary service
//!
//! Emotion diary entries, private to their author.

use cinemood_core::{DiaryEntry, DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{CreateDiaryRequest, DiaryResponse, UpdateDiaryRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Diary service
pub struct DiaryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DiaryService<'a> {
    /// Create a new DiaryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List the user's diary entries, newest first
    #[instrument(skip(self))]
    pub async fn list(&self, user_id: Snowflake) -> ServiceResult<Vec<DiaryResponse>> {
        let entries = self.ctx.diary_repo().find_by_user(user_id).await?;

        Ok(entries.into_iter().map(DiaryResponse::from).collect())
    }

    /// Create a diary entry
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        user_id: Snowflake,
        request: CreateDiaryRequest,
    ) -> ServiceResult<DiaryResponse> {
        let entry_id = self.ctx.generate_id();
        let entry = DiaryEntry::new(
            entry_id,
            user_id,
            request.emotion,
            request.content,
            request.movie_id,
        );

        self.ctx.diary_repo().create(&entry).await?;

        info!(entry_id = %entry_id, "Diary entry created");

        Ok(DiaryResponse::from(entry))
    }

    /// Update a diary entry; only the author may edit
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        user_id: Snowflake,
        entry_id: Snowflake,
        request: UpdateDiaryRequest,
    ) -> ServiceResult<DiaryResponse> {
        let mut entry = self.owned_entry(user_id, entry_id).await?;

        if let Some(emotion) = request.emotion {
            entry.emotion = emotion;
        }
        if let Some(content) = request.content {
            entry.content = content;
        }
        if let Some(movie_id) = request.movie_id {
            entry.movie_id = Some(movie_id);
        }

        self.ctx.diary_repo().update(&entry).await?;

        info!(entry_id = %entry_id, "Diary entry updated");

        Ok(DiaryResponse::from(entry))
    }

    /// Delete a diary entry; only the author may delete
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: Snowflake, entry_id: Snowflake) -> ServiceResult<()> {
        self.owned_entry(user_id, entry_id).await?;

        self.ctx.diary_repo().delete(entry_id).await?;

        info!(entry_id = %entry_id, "Diary entry deleted");

        Ok(())
    }

    async fn owned_entry(
        &self,
        user_id: Snowflake,
        entry_id: Snowflake,
    ) -> ServiceResult<DiaryEntry> {
        let entry = self
            .ctx
            .diary_repo()
            .find_by_id(entry_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Diary entry", entry_id.to_string()))?;

        if entry.user_id != user_id {
            return Err(DomainError::NotDiaryEntryAuthor.into());
        }

        Ok(entry)
    }
}

//! PostgreSQL implementation of DiaryRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use cinemood_core::entities::DiaryEntry;
use cinemood_core::traits::{DiaryRepository, RepoResult};
use cinemood_core::value_objects::Snowflake;

use crate::models::DiaryEntryModel;

use super::error::{diary_entry_not_found, map_db_error};

/// PostgreSQL implementation of DiaryRepository
#[derive(Clone)]
pub struct PgDiaryRepository {
    pool: PgPool,
}

impl PgDiaryRepository {
    /// Create a new PgDiaryRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DiaryRepository for PgDiaryRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<DiaryEntry>> {
        let result = sqlx::query_as::<_, DiaryEntryModel>(
            r"
            SELECT id, user_id, emotion, content, movie_id, created_at
            FROM diary_entries
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(DiaryEntry::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<DiaryEntry>> {
        let results = sqlx::query_as::<_, DiaryEntryModel>(
            r"
            SELECT id, user_id, emotion, content, movie_id, created_at
            FROM diary_entries
            WHERE user_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(DiaryEntry::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn create(&self, entry: &DiaryEntry) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO diary_entries (id, user_id, emotion, content, movie_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(entry.id.into_inner())
        .bind(entry.user_id.into_inner())
        .bind(entry.emotion.as_str())
        .bind(&entry.content)
        .bind(entry.movie_id)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, entry: &DiaryEntry) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE diary_entries
            SET emotion = $2, content = $3, movie_id = $4
            WHERE id = $1
            ",
        )
        .bind(entry.id.into_inner())
        .bind(entry.emotion.as_str())
        .bind(&entry.content)
        .bind(entry.movie_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(diary_entry_not_found(entry.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM diary_entries WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(diary_entry_not_found(id));
        }

        Ok(())
    }
}

//! PostgreSQL implementation of ReviewRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use cinemood_core::entities::{EmotionMovieCount, Review, ReviewWithMeta};
use cinemood_core::traits::{RepoResult, ReviewRepository};
use cinemood_core::value_objects::{Emotion, RankingOrder, Snowflake};

use crate::mappers::emotion_tags_to_json;
use crate::models::{EmotionCountModel, ReviewModel, ReviewWithMetaModel};

use super::error::{map_db_error, review_not_found};

/// Shared SELECT for review rows with author and engagement metadata.
/// `$V` is the viewer binding slot; EXISTS over a NULL viewer is false,
/// so anonymous readers get `liked_by_viewer = false`.
fn with_meta_query(where_clause: &str, order_clause: &str) -> String {
    format!(
        "SELECT r.id, r.user_id, r.movie_id, r.title, r.content, r.rating, r.emotion_tags, \
                r.created_at, r.updated_at, \
                u.username AS author_username, \
                (SELECT COUNT(*) FROM review_likes l WHERE l.review_id = r.id) AS like_count, \
                (SELECT COUNT(*) FROM comments c WHERE c.review_id = r.id) AS comment_count, \
                EXISTS(SELECT 1 FROM review_likes v WHERE v.review_id = r.id AND v.user_id = $2) \
                    AS liked_by_viewer \
         FROM reviews r \
         JOIN users u ON u.id = r.user_id \
         WHERE {where_clause} {order_clause}"
    )
}

/// PostgreSQL implementation of ReviewRepository
#[derive(Clone)]
pub struct PgReviewRepository {
    pool: PgPool,
}

impl PgReviewRepository {
    /// Create a new PgReviewRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Review>> {
        let result = sqlx::query_as::<_, ReviewModel>(
            r"
            SELECT id, user_id, movie_id, title, content, rating, emotion_tags,
                   created_at, updated_at
            FROM reviews
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Review::from))
    }

    #[instrument(skip(self))]
    async fn find_with_meta(
        &self,
        id: Snowflake,
        viewer_id: Option<Snowflake>,
    ) -> RepoResult<Option<ReviewWithMeta>> {
        let result = sqlx::query_as::<_, ReviewWithMetaModel>(&with_meta_query("r.id = $1", ""))
            .bind(id.into_inner())
            .bind(viewer_id.map(Snowflake::into_inner))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(ReviewWithMeta::from))
    }

    #[instrument(skip(self))]
    async fn find_by_movie(
        &self,
        movie_id: i64,
        viewer_id: Option<Snowflake>,
    ) -> RepoResult<Vec<ReviewWithMeta>> {
        let results = sqlx::query_as::<_, ReviewWithMetaModel>(&with_meta_query(
            "r.movie_id = $1",
            "ORDER BY r.created_at DESC",
        ))
        .bind(movie_id)
        .bind(viewer_id.map(Snowflake::into_inner))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ReviewWithMeta::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_author(
        &self,
        author_id: Snowflake,
        viewer_id: Option<Snowflake>,
    ) -> RepoResult<Vec<ReviewWithMeta>> {
        let results = sqlx::query_as::<_, ReviewWithMetaModel>(&with_meta_query(
            "r.user_id = $1",
            "ORDER BY r.created_at DESC",
        ))
        .bind(author_id.into_inner())
        .bind(viewer_id.map(Snowflake::into_inner))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ReviewWithMeta::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, review: &Review) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO reviews (id, user_id, movie_id, title, content, rating, emotion_tags,
                                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(review.id.into_inner())
        .bind(review.user_id.into_inner())
        .bind(review.movie_id)
        .bind(&review.title)
        .bind(&review.content)
        .bind(review.rating)
        .bind(emotion_tags_to_json(&review.emotion_tags))
        .bind(review.created_at)
        .bind(review.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, review: &Review) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE reviews
            SET title = $2, content = $3, rating = $4, emotion_tags = $5, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(review.id.into_inner())
        .bind(&review.title)
        .bind(&review.content)
        .bind(review.rating)
        .bind(emotion_tags_to_json(&review.emotion_tags))
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(review_not_found(review.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        // Likes and comments cascade
        let result = sqlx::query(
            r"
            DELETE FROM reviews WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(review_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn add_like(&self, review_id: Snowflake, user_id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            INSERT INTO review_likes (review_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT (review_id, user_id) DO NOTHING
            ",
        )
        .bind(review_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn remove_like(&self, review_id: Snowflake, user_id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM review_likes WHERE review_id = $1 AND user_id = $2
            ",
        )
        .bind(review_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn count_likes(&self, review_id: Snowflake) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM review_likes WHERE review_id = $1
            ",
        )
        .bind(review_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn count_by_emotion(
        &self,
        emotion: Emotion,
        order: RankingOrder,
        limit: i64,
    ) -> RepoResult<Vec<EmotionMovieCount>> {
        let direction = match order {
            RankingOrder::Desc => "DESC",
            RankingOrder::Asc => "ASC",
        };

        // Counting and truncation happen in the database; the containment
        // test uses the GIN index on emotion_tags
        let results = sqlx::query_as::<_, EmotionCountModel>(&format!(
            "SELECT movie_id, COUNT(*) AS review_count \
             FROM reviews \
             WHERE emotion_tags @> jsonb_build_array($1::text) \
             GROUP BY movie_id \
             ORDER BY review_count {direction} \
             LIMIT $2"
        ))
        .bind(emotion.as_str())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(EmotionMovieCount::from).collect())
    }
}

//! PostgreSQL implementation of MovieRepository

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::instrument;

use cinemood_core::entities::Movie;
use cinemood_core::traits::{MovieRepository, RepoResult};

use crate::models::MovieModel;

use super::error::map_db_error;

const MOVIE_COLUMNS: &str = "id, title, original_title, overview, poster_path, backdrop_path, \
     release_date, runtime, vote_average, vote_count, popularity, genres, original_language, \
     created_at, updated_at";

/// PostgreSQL implementation of MovieRepository
#[derive(Clone)]
pub struct PgMovieRepository {
    pool: PgPool,
}

impl PgMovieRepository {
    /// Create a new PgMovieRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieRepository for PgMovieRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Movie>> {
        let result = sqlx::query_as::<_, MovieModel>(&format!(
            "SELECT {MOVIE_COLUMNS} FROM movies WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Movie::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, limit: i64, offset: i64) -> RepoResult<Vec<Movie>> {
        let limit = limit.clamp(1, 100);

        let results = sqlx::query_as::<_, MovieModel>(&format!(
            "SELECT {MOVIE_COLUMNS} FROM movies ORDER BY popularity DESC LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset.max(0))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Movie::from).collect())
    }

    #[instrument(skip(self, movie), fields(movie_id = movie.id))]
    async fn upsert(&self, movie: &Movie) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO movies (id, title, original_title, overview, poster_path, backdrop_path,
                                release_date, runtime, vote_average, vote_count, popularity,
                                genres, original_language, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, NOW(), NOW())
            ON CONFLICT (id) DO UPDATE
            SET title = EXCLUDED.title,
                original_title = EXCLUDED.original_title,
                overview = EXCLUDED.overview,
                poster_path = EXCLUDED.poster_path,
                backdrop_path = EXCLUDED.backdrop_path,
                release_date = EXCLUDED.release_date,
                runtime = EXCLUDED.runtime,
                vote_average = EXCLUDED.vote_average,
                vote_count = EXCLUDED.vote_count,
                popularity = EXCLUDED.popularity,
                genres = EXCLUDED.genres,
                original_language = EXCLUDED.original_language,
                updated_at = NOW()
            ",
        )
        .bind(movie.id)
        .bind(&movie.title)
        .bind(&movie.original_title)
        .bind(&movie.overview)
        .bind(&movie.poster_path)
        .bind(&movie.backdrop_path)
        .bind(movie.release_date)
        .bind(movie.runtime)
        .bind(movie.vote_average)
        .bind(movie.vote_count)
        .bind(movie.popularity)
        .bind(Json(&movie.genres))
        .bind(&movie.original_language)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM movies")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgMovieRepository>();
    }
}

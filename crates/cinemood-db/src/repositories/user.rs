//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::instrument;

use cinemood_core::entities::User;
use cinemood_core::error::DomainError;
use cinemood_core::traits::{RepoResult, UserRepository};
use cinemood_core::value_objects::Snowflake;

use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation, user_not_found};

const USER_COLUMNS: &str = "id, username, password_hash, nickname, favorite_genres, \
     favorite_actors, preferred_countries, profile_image, is_admin, created_at, updated_at";

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)
            ",
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, password_hash))]
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO users (id, username, password_hash, nickname, favorite_genres,
                               favorite_actors, preferred_countries, profile_image, is_admin,
                               created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(user.id.into_inner())
        .bind(&user.username)
        .bind(password_hash)
        .bind(&user.nickname)
        .bind(Json(&user.favorite_genres))
        .bind(&user.favorite_actors)
        .bind(Json(&user.preferred_countries))
        .bind(&user.profile_image)
        .bind(user.is_admin)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::UsernameAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_profile(&self, user: &User) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET nickname = $2, favorite_genres = $3, favorite_actors = $4,
                preferred_countries = $5, profile_image = $6, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(user.id.into_inner())
        .bind(&user.nickname)
        .bind(Json(&user.favorite_genres))
        .bind(&user.favorite_actors)
        .bind(Json(&user.preferred_countries))
        .bind(&user.profile_image)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(user.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        // Owned rows cascade via foreign keys
        let result = sqlx::query(
            r"
            DELETE FROM users WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT password_hash FROM users WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, password_hash))]
    async fn update_password(&self, id: Snowflake, password_hash: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users SET password_hash = $2, updated_at = NOW() WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn favorite_movie_ids(&self, user_id: Snowflake) -> RepoResult<Vec<i64>> {
        let results = sqlx::query_scalar::<_, i64>(
            r"
            SELECT movie_id FROM user_favorite_movies
            WHERE user_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results)
    }

    #[instrument(skip(self))]
    async fn add_favorite(&self, user_id: Snowflake, movie_id: i64) -> RepoResult<bool> {
        // ON CONFLICT DO NOTHING keeps concurrent toggles race-free;
        // rows_affected tells us whether the membership changed
        let result = sqlx::query(
            r"
            INSERT INTO user_favorite_movies (user_id, movie_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, movie_id) DO NOTHING
            ",
        )
        .bind(user_id.into_inner())
        .bind(movie_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn remove_favorite(&self, user_id: Snowflake, movie_id: i64) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM user_favorite_movies WHERE user_id = $1 AND movie_id = $2
            ",
        )
        .bind(user_id.into_inner())
        .bind(movie_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgUserRepository>();
    }
}

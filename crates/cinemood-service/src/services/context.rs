//! Service context - dependency container for services
//!
//! Holds all repositories, the catalog client, and other dependencies
//! needed by services.

use std::sync::Arc;

use cinemood_catalog::CatalogClient;
use cinemood_common::auth::JwtService;
use cinemood_core::traits::{
    CommentRepository, DiaryRepository, MovieRepository, ReviewRepository, UserRepository,
};
use cinemood_core::SnowflakeGenerator;
use cinemood_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - External catalog client
/// - JWT service for authentication
/// - Snowflake generator for ID generation
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    review_repo: Arc<dyn ReviewRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    movie_repo: Arc<dyn MovieRepository>,
    diary_repo: Arc<dyn DiaryRepository>,

    // External catalog
    catalog: CatalogClient,

    // Services
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        review_repo: Arc<dyn ReviewRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        movie_repo: Arc<dyn MovieRepository>,
        diary_repo: Arc<dyn DiaryRepository>,
        catalog: CatalogClient,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            review_repo,
            comment_repo,
            movie_repo,
            diary_repo,
            catalog,
            jwt_service,
            snowflake_generator,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the review repository
    pub fn review_repo(&self) -> &dyn ReviewRepository {
        self.review_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the movie cache repository
    pub fn movie_repo(&self) -> &dyn MovieRepository {
        self.movie_repo.as_ref()
    }

    /// Get the diary repository
    pub fn diary_repo(&self) -> &dyn DiaryRepository {
        self.diary_repo.as_ref()
    }

    // === External Catalog ===

    /// Get the external catalog client
    pub fn catalog(&self) -> &CatalogClient {
        &self.catalog
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> cinemood_core::Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("catalog", &self.catalog)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    review_repo: Option<Arc<dyn ReviewRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    movie_repo: Option<Arc<dyn MovieRepository>>,
    diary_repo: Option<Arc<dyn DiaryRepository>>,
    catalog: Option<CatalogClient>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            user_repo: None,
            review_repo: None,
            comment_repo: None,
            movie_repo: None,
            diary_repo: None,
            catalog: None,
            jwt_service: None,
            snowflake_generator: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn review_repo(mut self, repo: Arc<dyn ReviewRepository>) -> Self {
        self.review_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn movie_repo(mut self, repo: Arc<dyn MovieRepository>) -> Self {
        self.movie_repo = Some(repo);
        self
    }

    pub fn diary_repo(mut self, repo: Arc<dyn DiaryRepository>) -> Self {
        self.diary_repo = Some(repo);
        self
    }

    pub fn catalog(mut self, catalog: CatalogClient) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.review_repo
                .ok_or_else(|| ServiceError::validation("review_repo is required"))?,
            self.comment_repo
                .ok_or_else(|| ServiceError::validation("comment_repo is required"))?,
            self.movie_repo
                .ok_or_else(|| ServiceError::validation("movie_repo is required"))?,
            self.diary_repo
                .ok_or_else(|| ServiceError::validation("diary_repo is required"))?,
            self.catalog
                .ok_or_else(|| ServiceError::validation("catalog is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! Movie service
//!
//! Catalog passthrough endpoints, the local metadata cache, and the
//! emotion ranking aggregator.

use cinemood_core::{DomainError, Emotion, RankingOrder};
use tracing::{info, instrument, warn};

use crate::dto::{
    CachedMovieListResponse, CachedMovieResponse, CatalogMovieResponse, EmotionRankingResponse,
    EmotionTagResponse, MovieListResponse, RankedMovieResponse, RecommendRequest,
    RecommendResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Default number of ranking entries when the client does not ask for one
const DEFAULT_RANKING_LIMIT: i64 = 10;
/// Most ranking entries a single request may ask for
const MAX_RANKING_LIMIT: i64 = 50;

/// Movie service
pub struct MovieService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MovieService<'a> {
    /// Create a new MovieService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    // === Catalog passthrough ===

    /// Current popular movies, straight from the external catalog
    #[instrument(skip(self))]
    pub async fn popular(&self) -> ServiceResult<MovieListResponse> {
        let page = self.ctx.catalog().popular(1, None).await?;

        Ok(MovieListResponse {
            results: page
                .results
                .into_iter()
                .map(CatalogMovieResponse::from)
                .collect(),
        })
    }

    /// Full detail for one movie, straight from the external catalog
    #[instrument(skip(self))]
    pub async fn detail(&self, movie_id: i64) -> ServiceResult<CatalogMovieResponse> {
        let detail = self.ctx.catalog().movie_detail(movie_id).await?;

        Ok(CatalogMovieResponse::from(detail))
    }

    /// Placeholder recommendation: echoes the emotion with the popular list
    #[instrument(skip(self, request))]
    pub async fn recommend(&self, request: RecommendRequest) -> ServiceResult<RecommendResponse> {
        let page = self.ctx.catalog().popular(1, None).await?;

        Ok(RecommendResponse {
            emotion: request.emotion,
            results: page
                .results
                .into_iter()
                .map(CatalogMovieResponse::from)
                .collect(),
        })
    }

    // === Local metadata cache ===

    /// List cached movies by descending popularity
    #[instrument(skip(self))]
    pub async fn cached_list(
        &self,
        limit: i64,
        offset: i64,
    ) -> ServiceResult<CachedMovieListResponse> {
        let movies = self.ctx.movie_repo().list(limit, offset).await?;
        let total = self.ctx.movie_repo().count().await?;

        Ok(CachedMovieListResponse {
            results: movies.into_iter().map(CachedMovieResponse::from).collect(),
            total,
        })
    }

    /// Get one movie from the local cache
    #[instrument(skip(self))]
    pub async fn cached_detail(&self, movie_id: i64) -> ServiceResult<CachedMovieResponse> {
        let movie = self
            .ctx
            .movie_repo()
            .find_by_id(movie_id)
            .await?
            .ok_or(DomainError::MovieNotFound(movie_id))?;

        Ok(CachedMovieResponse::from(movie))
    }

    // === Emotion ranking ===

    /// Rank movies by how many reviews carry a given emotion tag
    ///
    /// Counting and ordering happen in the database; the catalog is only
    /// consulted to decorate the ranked ids with display metadata. A movie
    /// whose catalog lookup fails is dropped from the ranking rather than
    /// failing the request, unless every lookup fails.
    #[instrument(skip(self))]
    pub async fn emotion_ranking(
        &self,
        emotion: &str,
        order: Option<&str>,
        limit: Option<i64>,
    ) -> ServiceResult<EmotionRankingResponse> {
        let emotion: Emotion = emotion
            .parse()
            .map_err(|_| DomainError::InvalidEmotion(emotion.to_string()))?;
        let order: RankingOrder = match order {
            Some(raw) => raw.parse().map_err(|_| {
                ServiceError::validation("order must be 'desc' or 'asc'")
            })?,
            None => RankingOrder::default(),
        };
        let limit = limit
            .unwrap_or(DEFAULT_RANKING_LIMIT)
            .clamp(1, MAX_RANKING_LIMIT);

        let counts = self
            .ctx
            .review_repo()
            .count_by_emotion(emotion, order, limit)
            .await?;

        if counts.is_empty() {
            return Ok(EmotionRankingResponse {
                emotion: EmotionTagResponse::from(emotion),
                order,
                count: 0,
                message: Some(format!("No reviews tagged '{emotion}' yet")),
                results: Vec::new(),
            });
        }

        let candidates = counts.len();
        let mut results = Vec::with_capacity(candidates);
        for entry in counts {
            match self.ctx.catalog().movie_detail(entry.movie_id).await {
                Ok(detail) => results.push(RankedMovieResponse {
                    review_count: entry.review_count,
                    movie: CatalogMovieResponse::from(detail),
                }),
                Err(e) => {
                    warn!(movie_id = entry.movie_id, error = %e, "Dropping ranked movie: catalog lookup failed");
                }
            }
        }

        if results.is_empty() {
            return Err(ServiceError::Catalog(
                "All catalog lookups for the ranking failed".to_string(),
            ));
        }

        // Re-assert the requested order over what survived the lookups.
        // Sort is stable, so database tie-breaks are preserved.
        match order {
            RankingOrder::Desc => results.sort_by(|a, b| b.review_count.cmp(&a.review_count)),
            RankingOrder::Asc => results.sort_by(|a, b| a.review_count.cmp(&b.review_count)),
        }

        info!(
            emotion = %emotion,
            candidates,
            returned = results.len(),
            "Emotion ranking computed"
        );

        Ok(EmotionRankingResponse {
            emotion: EmotionTagResponse::from(emotion),
            order,
            count: results.len(),
            message: None,
            results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_clamping() {
        assert_eq!(77_i64.clamp(1, MAX_RANKING_LIMIT), 50);
        assert_eq!((-3_i64).clamp(1, MAX_RANKING_LIMIT), 1);
        assert_eq!(DEFAULT_RANKING_LIMIT.clamp(1, MAX_RANKING_LIMIT), 10);
    }
}

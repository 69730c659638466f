//! Catalog sync service
//!
//! Pulls pages of the popular listing (Korean region) from the external
//! catalog and upserts them into the local metadata cache. Runtime and
//! genres only exist on the detail endpoint, so each movie costs one
//! extra request; a short pause between movies keeps us under the
//! catalog's rate limit.

use std::time::Duration;

use chrono::{NaiveDate, Utc};
use cinemood_catalog::{MovieDetail, MovieSummary};
use cinemood_core::{Genre, Movie};
use tracing::{info, instrument, warn};

use crate::dto::SyncReport;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Popular-listing pages fetched when none are requested
pub const DEFAULT_SYNC_PAGES: u32 = 3;

/// Region hint sent with popular-listing requests
const SYNC_REGION: &str = "KR";

/// Pause between per-movie detail requests
const DETAIL_REQUEST_PAUSE: Duration = Duration::from_millis(250);

/// Catalog sync service
pub struct CatalogSyncService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CatalogSyncService<'a> {
    /// Create a new CatalogSyncService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch `pages` pages of popular movies and upsert them into the cache
    ///
    /// A failed detail lookup skips that movie; a failed page fetch skips
    /// that page. The run itself only fails on database errors.
    #[instrument(skip(self))]
    pub async fn run(&self, pages: u32) -> ServiceResult<SyncReport> {
        let mut report = SyncReport {
            pages_requested: pages,
            ..SyncReport::default()
        };

        for page in 1..=pages {
            let listing = match self.ctx.catalog().popular(page, Some(SYNC_REGION)).await {
                Ok(listing) => listing,
                Err(e) => {
                    warn!(page, error = %e, "Skipping page: popular listing fetch failed");
                    continue;
                }
            };

            for summary in listing.results {
                report.fetched += 1;

                match self.ctx.catalog().movie_detail(summary.id).await {
                    Ok(detail) => {
                        let movie = merge_catalog_movie(&summary, detail);
                        self.ctx.movie_repo().upsert(&movie).await?;
                        report.upserted += 1;
                    }
                    Err(e) => {
                        warn!(movie_id = summary.id, error = %e, "Skipping movie: detail fetch failed");
                        report.failed += 1;
                    }
                }

                tokio::time::sleep(DETAIL_REQUEST_PAUSE).await;
            }

            info!(page, upserted = report.upserted, "Page synced");
        }

        report.total_cached = self.ctx.movie_repo().count().await?;

        info!(
            pages = report.pages_requested,
            fetched = report.fetched,
            upserted = report.upserted,
            failed = report.failed,
            total_cached = report.total_cached,
            "Catalog sync finished"
        );

        Ok(report)
    }
}

/// Build a cache entry from the listing summary plus the detail response
///
/// Listing fields win for the shared metadata; the detail contributes
/// runtime and genre names, which the listing never carries.
fn merge_catalog_movie(summary: &MovieSummary, detail: MovieDetail) -> Movie {
    let now = Utc::now();
    Movie {
        id: summary.id,
        title: summary.title.clone(),
        original_title: summary.original_title.clone(),
        overview: summary.overview.clone(),
        poster_path: summary.poster_path.clone(),
        backdrop_path: summary.backdrop_path.clone(),
        release_date: parse_release_date(summary.release_date.as_deref()),
        runtime: detail.runtime,
        vote_average: summary.vote_average,
        vote_count: summary.vote_count,
        popularity: summary.popularity,
        genres: detail
            .genres
            .into_iter()
            .map(|g| Genre {
                id: g.id,
                name: g.name,
            })
            .collect(),
        original_language: summary.original_language.clone(),
        created_at: now,
        updated_at: now,
    }
}

// The catalog sends "" instead of omitting the date for unreleased titles.
fn parse_release_date(raw: Option<&str>) -> Option<NaiveDate> {
    raw.filter(|d| !d.is_empty())
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sync_pages_reachable_from_crate_root() {
        assert_eq!(crate::DEFAULT_SYNC_PAGES, DEFAULT_SYNC_PAGES);
        assert_eq!(DEFAULT_SYNC_PAGES, 3);
    }

    #[test]
    fn test_parse_release_date() {
        assert_eq!(
            parse_release_date(Some("1999-03-31")),
            NaiveDate::from_ymd_opt(1999, 3, 31)
        );
        assert_eq!(parse_release_date(Some("")), None);
        assert_eq!(parse_release_date(Some("not-a-date")), None);
        assert_eq!(parse_release_date(None), None);
    }

    #[test]
    fn test_merge_prefers_listing_fields_and_detail_extras() {
        let summary = MovieSummary {
            id: 603,
            title: "매트릭스".to_string(),
            original_title: "The Matrix".to_string(),
            overview: "가상 현실".to_string(),
            poster_path: Some("/p.jpg".to_string()),
            backdrop_path: None,
            release_date: Some("1999-03-31".to_string()),
            vote_average: 8.2,
            vote_count: 26000,
            popularity: 104.5,
            original_language: "en".to_string(),
            genre_ids: vec![28],
        };
        let detail = MovieDetail {
            id: 603,
            title: "다른 제목".to_string(),
            original_title: String::new(),
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
            release_date: None,
            runtime: Some(136),
            vote_average: 0.0,
            vote_count: 0,
            popularity: 0.0,
            genres: vec![cinemood_catalog::GenreWire {
                id: 28,
                name: "액션".to_string(),
            }],
            original_language: String::new(),
        };

        let movie = merge_catalog_movie(&summary, detail);
        assert_eq!(movie.title, "매트릭스");
        assert_eq!(movie.runtime, Some(136));
        assert_eq!(movie.genres[0].name, "액션");
        assert_eq!(movie.year(), Some(1999));
    }
}

//! Catalog fetch job
//!
//! Pulls popular movies from the external catalog into the local metadata
//! cache. Intended to run out of band (cron or by hand):
//!
//! ```bash
//! cargo run -p cinemood-api --bin fetch_movies -- --pages 5
//! ```

use std::sync::Arc;

use cinemood_catalog::CatalogClient;
use cinemood_common::{try_init_tracing, AppConfig, JwtService};
use cinemood_core::SnowflakeGenerator;
use cinemood_db::{
    create_pool, run_migrations, PgCommentRepository, PgDiaryRepository, PgMovieRepository,
    PgReviewRepository, PgUserRepository,
};
use cinemood_service::{CatalogSyncService, ServiceContextBuilder, DEFAULT_SYNC_PAGES};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {}", e);
    }

    let pages = match parse_pages(std::env::args().skip(1)) {
        Ok(pages) => pages,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("Usage: fetch_movies [--pages N]");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(pages).await {
        error!(error = %e, "Catalog fetch failed");
        std::process::exit(1);
    }
}

fn parse_pages(mut args: impl Iterator<Item = String>) -> Result<u32, String> {
    match args.next().as_deref() {
        None => Ok(DEFAULT_SYNC_PAGES),
        Some("--pages") => {
            let value = args.next().ok_or("--pages requires a value")?;
            let pages: u32 = value
                .parse()
                .map_err(|_| format!("Invalid page count: {value}"))?;
            if pages == 0 {
                return Err("--pages must be at least 1".to_string());
            }
            Ok(pages)
        }
        Some(other) => Err(format!("Unknown argument: {other}")),
    }
}

async fn run(pages: u32) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    let db_config = cinemood_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    let catalog = CatalogClient::from_config(&config.catalog)?;
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
        config.jwt.refresh_token_expiry,
    ));
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    let ctx = ServiceContextBuilder::new()
        .pool(pool.clone())
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .review_repo(Arc::new(PgReviewRepository::new(pool.clone())))
        .comment_repo(Arc::new(PgCommentRepository::new(pool.clone())))
        .movie_repo(Arc::new(PgMovieRepository::new(pool.clone())))
        .diary_repo(Arc::new(PgDiaryRepository::new(pool)))
        .catalog(catalog)
        .jwt_service(jwt_service)
        .snowflake_generator(snowflake_generator)
        .build()?;

    info!(pages, "Starting catalog fetch");

    let report = CatalogSyncService::new(&ctx).run(pages).await?;

    info!(
        fetched = report.fetched,
        upserted = report.upserted,
        failed = report.failed,
        total_cached = report.total_cached,
        "Catalog fetch complete"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pages_default() {
        let args: Vec<String> = vec![];
        assert_eq!(parse_pages(args.into_iter()).unwrap(), DEFAULT_SYNC_PAGES);
    }

    #[test]
    fn test_parse_pages_explicit() {
        let args = vec!["--pages".to_string(), "5".to_string()];
        assert_eq!(parse_pages(args.into_iter()).unwrap(), 5);
    }

    #[test]
    fn test_parse_pages_rejects_zero_and_garbage() {
        let args = vec!["--pages".to_string(), "0".to_string()];
        assert!(parse_pages(args.into_iter()).is_err());

        let args = vec!["--wat".to_string()];
        assert!(parse_pages(args.into_iter()).is_err());
    }
}

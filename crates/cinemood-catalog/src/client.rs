//! HTTP client for the external movie catalog
//!
//! Thin wrapper over `reqwest` with a client-wide timeout. No retries and
//! no response caching; callers decide how to handle upstream failures.

use std::time::Duration;

use cinemood_common::CatalogConfig;
use tracing::instrument;

use crate::error::{CatalogError, CatalogResult};
use crate::types::{MovieDetail, PopularPage};

/// Client for the external movie catalog API
#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    language: String,
}

impl CatalogClient {
    /// Build a client from catalog configuration
    ///
    /// # Errors
    /// Returns an error if the base URL is not http(s) or the underlying
    /// HTTP client cannot be constructed
    pub fn from_config(config: &CatalogConfig) -> CatalogResult<Self> {
        if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
            return Err(CatalogError::InvalidBaseUrl(config.base_url.clone()));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            language: config.language.clone(),
        })
    }

    /// Fetch one page of the popular movies listing
    ///
    /// # Errors
    /// Returns an error on network failure or a non-success status
    #[instrument(skip(self))]
    pub async fn popular(&self, page: u32, region: Option<&str>) -> CatalogResult<PopularPage> {
        let url = format!("{}/movie/popular", self.base_url);
        let page_str = page.to_string();

        let mut params = vec![
            ("api_key", self.api_key.as_str()),
            ("language", self.language.as_str()),
            ("page", page_str.as_str()),
        ];
        if let Some(region) = region {
            params.push(("region", region));
        }

        let response = self.http.get(&url).query(&params).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                path: "/movie/popular".to_string(),
            });
        }

        Ok(response.json().await?)
    }

    /// Fetch full detail for a single movie
    ///
    /// # Errors
    /// Returns an error on network failure or a non-success status
    #[instrument(skip(self))]
    pub async fn movie_detail(&self, movie_id: i64) -> CatalogResult<MovieDetail> {
        let path = format!("/movie/{movie_id}");
        let url = format!("{}{path}", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", self.language.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                path,
            });
        }

        Ok(response.json().await?)
    }
}

impl std::fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogClient")
            .field("base_url", &self.base_url)
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> CatalogConfig {
        CatalogConfig {
            api_key: "test-key".to_string(),
            base_url: "https://api.themoviedb.org/3/".to_string(),
            language: "ko-KR".to_string(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_from_config_trims_trailing_slash() {
        let client = CatalogClient::from_config(&test_config()).unwrap();
        assert_eq!(client.base_url, "https://api.themoviedb.org/3");
    }

    #[test]
    fn test_from_config_rejects_bad_base_url() {
        let mut config = test_config();
        config.base_url = "ftp://example.com".to_string();
        assert!(matches!(
            CatalogClient::from_config(&config),
            Err(CatalogError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_debug_hides_api_key() {
        let client = CatalogClient::from_config(&test_config()).unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("test-key"));
    }
}

//! Wire types for the external movie catalog API
//!
//! Field names mirror the catalog's JSON; absent numeric fields default
//! to zero and absent strings to empty, matching what the API actually
//! omits for obscure titles.

use serde::Deserialize;

const POSTER_BASE: &str = "https://image.tmdb.org/t/p/w500";
const BACKDROP_BASE: &str = "https://image.tmdb.org/t/p/original";

/// One page of the popular movies listing
#[derive(Debug, Clone, Deserialize)]
pub struct PopularPage {
    pub page: u32,
    #[serde(default)]
    pub results: Vec<MovieSummary>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u64,
}

/// Movie entry as delivered in list responses
#[derive(Debug, Clone, Deserialize)]
pub struct MovieSummary {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub original_title: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    /// `YYYY-MM-DD`, sometimes an empty string for unreleased titles
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: i64,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub original_language: String,
    #[serde(default)]
    pub genre_ids: Vec<i64>,
}

/// Genre object as delivered in detail responses
#[derive(Debug, Clone, Deserialize)]
pub struct GenreWire {
    pub id: i64,
    pub name: String,
}

/// Full movie detail response
#[derive(Debug, Clone, Deserialize)]
pub struct MovieDetail {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub original_title: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    pub runtime: Option<i32>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: i64,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub genres: Vec<GenreWire>,
    #[serde(default)]
    pub original_language: String,
}

/// Compose a full poster image URL (w500 size) from a catalog path
#[must_use]
pub fn poster_url(path: &str) -> String {
    format!("{POSTER_BASE}{path}")
}

/// Compose a full backdrop image URL (original size) from a catalog path
#[must_use]
pub fn backdrop_url(path: &str) -> String {
    format!("{BACKDROP_BASE}{path}")
}

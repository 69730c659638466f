//! # cinemood-catalog
//!
//! Client for the external movie catalog API (TMDB). Provides the popular
//! listing, per-movie detail, and artwork URL composition.

mod client;
mod error;
mod types;

pub use client::CatalogClient;
pub use error::{CatalogError, CatalogResult};
pub use types::{backdrop_url, poster_url, GenreWire, MovieDetail, MovieSummary, PopularPage};

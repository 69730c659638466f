//! Movie entity - a cached copy of external catalog metadata
//!
//! Keyed by the catalog's own identifier; populated by the out-of-band
//! fetch job and treated as read-mostly.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A genre label as delivered by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// Movie entity (cached catalog metadata)
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    /// External catalog identifier (primary key)
    pub id: i64,
    pub title: String,
    pub original_title: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub runtime: Option<i32>,
    pub vote_average: f64,
    pub vote_count: i64,
    pub popularity: f64,
    pub genres: Vec<Genre>,
    pub original_language: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Movie {
    /// Release year, when the release date is known
    pub fn year(&self) -> Option<i32> {
        use chrono::Datelike;
        self.release_date.map(|d| d.year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_from_release_date() {
        let now = Utc::now();
        let movie = Movie {
            id: 603,
            title: "매트릭스".to_string(),
            original_title: "The Matrix".to_string(),
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
            release_date: NaiveDate::from_ymd_opt(1999, 3, 31),
            runtime: Some(136),
            vote_average: 8.2,
            vote_count: 26000,
            popularity: 104.5,
            genres: vec![Genre { id: 28, name: "액션".to_string() }],
            original_language: "en".to_string(),
            created_at: now,
            updated_at: now,
        };
        assert_eq!(movie.year(), Some(1999));
    }
}

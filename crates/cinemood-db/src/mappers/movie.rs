//! Movie entity <-> model mapper

use cinemood_core::entities::Movie;

use crate::models::MovieModel;

/// Convert MovieModel to Movie entity
impl From<MovieModel> for Movie {
    fn from(model: MovieModel) -> Self {
        Movie {
            id: model.id,
            title: model.title,
            original_title: model.original_title,
            overview: model.overview,
            poster_path: model.poster_path,
            backdrop_path: model.backdrop_path,
            release_date: model.release_date,
            runtime: model.runtime,
            vote_average: model.vote_average,
            vote_count: model.vote_count,
            popularity: model.popularity,
            genres: model.genres.0,
            original_language: model.original_language,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

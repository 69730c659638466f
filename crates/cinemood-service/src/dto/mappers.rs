//! Entity and wire-type to response DTO conversions

use cinemood_catalog::{backdrop_url, poster_url, MovieDetail, MovieSummary};
use cinemood_core::{CommentWithAuthor, DiaryEntry, Movie, ReviewWithMeta, User};

use super::responses::{
    AuthorResponse, CachedMovieResponse, CatalogMovieResponse, CommentResponse,
    CurrentUserResponse, DiaryResponse, EmotionTagResponse, ProfileResponse, ReviewResponse,
};

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            nickname: user.nickname.clone(),
        }
    }
}

impl From<&User> for ProfileResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            nickname: user.nickname.clone(),
            favorite_genres: user.favorite_genres.clone(),
            favorite_actors: user.favorite_actors.clone(),
            preferred_countries: user.preferred_countries.clone(),
            profile_image: user.profile_image.clone(),
            is_admin: user.is_admin,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<ReviewWithMeta> for ReviewResponse {
    fn from(meta: ReviewWithMeta) -> Self {
        let review = meta.review;
        Self {
            id: review.id,
            movie_id: review.movie_id,
            author: AuthorResponse {
                id: review.user_id,
                username: meta.author_username,
            },
            title: review.title,
            content: review.content,
            rating: review.rating,
            emotion_tags: review
                .emotion_tags
                .into_iter()
                .map(EmotionTagResponse::from)
                .collect(),
            like_count: meta.like_count,
            comment_count: meta.comment_count,
            is_liked: meta.liked_by_viewer,
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}

impl From<CommentWithAuthor> for CommentResponse {
    fn from(with_author: CommentWithAuthor) -> Self {
        let comment = with_author.comment;
        Self {
            id: comment.id,
            review_id: comment.review_id,
            author: AuthorResponse {
                id: comment.user_id,
                username: with_author.author_username,
            },
            content: comment.content,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

impl From<DiaryEntry> for DiaryResponse {
    fn from(entry: DiaryEntry) -> Self {
        Self {
            id: entry.id,
            emotion: EmotionTagResponse::from(entry.emotion),
            content: entry.content,
            movie_id: entry.movie_id,
            created_at: entry.created_at,
        }
    }
}

impl From<Movie> for CachedMovieResponse {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            original_title: movie.original_title,
            overview: movie.overview,
            poster_url: movie.poster_path.as_deref().map(poster_url),
            backdrop_url: movie.backdrop_path.as_deref().map(backdrop_url),
            release_date: movie.release_date,
            runtime: movie.runtime,
            vote_average: movie.vote_average,
            vote_count: movie.vote_count,
            popularity: movie.popularity,
            genres: movie.genres,
            original_language: movie.original_language,
        }
    }
}

// Empty release_date strings show up for unreleased titles; normalize to None.
fn normalize_date(date: Option<String>) -> Option<String> {
    date.filter(|d| !d.is_empty())
}

impl From<MovieSummary> for CatalogMovieResponse {
    fn from(summary: MovieSummary) -> Self {
        Self {
            id: summary.id,
            title: summary.title,
            original_title: summary.original_title,
            overview: summary.overview,
            poster_url: summary.poster_path.as_deref().map(poster_url),
            backdrop_url: summary.backdrop_path.as_deref().map(backdrop_url),
            release_date: normalize_date(summary.release_date),
            runtime: None,
            vote_average: summary.vote_average,
            vote_count: summary.vote_count,
            popularity: summary.popularity,
            genres: Vec::new(),
            original_language: summary.original_language,
        }
    }
}

impl From<MovieDetail> for CatalogMovieResponse {
    fn from(detail: MovieDetail) -> Self {
        Self {
            id: detail.id,
            title: detail.title,
            original_title: detail.original_title,
            overview: detail.overview,
            poster_url: detail.poster_path.as_deref().map(poster_url),
            backdrop_url: detail.backdrop_path.as_deref().map(backdrop_url),
            release_date: normalize_date(detail.release_date),
            runtime: detail.runtime,
            vote_average: detail.vote_average,
            vote_count: detail.vote_count,
            popularity: detail.popularity,
            genres: detail
                .genres
                .into_iter()
                .map(|g| cinemood_core::Genre {
                    id: g.id,
                    name: g.name,
                })
                .collect(),
            original_language: detail.original_language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinemood_core::{Emotion, Review, Snowflake};

    #[test]
    fn test_review_response_from_meta() {
        let review = Review::new(
            Snowflake::new(1),
            Snowflake::new(100),
            603,
            "인생 영화".to_string(),
            "다시 봐도 좋다".to_string(),
            4.5,
            vec![Emotion::Joy],
        );
        let meta = ReviewWithMeta {
            review,
            author_username: "moviefan".to_string(),
            like_count: 3,
            comment_count: 1,
            liked_by_viewer: true,
        };

        let response = ReviewResponse::from(meta);
        assert_eq!(response.author.username, "moviefan");
        assert_eq!(response.like_count, 3);
        assert!(response.is_liked);
        assert_eq!(response.emotion_tags[0].code, "joy");
    }

    #[test]
    fn test_catalog_summary_normalizes_empty_release_date() {
        let summary = MovieSummary {
            id: 1,
            title: String::new(),
            original_title: String::new(),
            overview: String::new(),
            poster_path: Some("/p.jpg".to_string()),
            backdrop_path: None,
            release_date: Some(String::new()),
            vote_average: 0.0,
            vote_count: 0,
            popularity: 0.0,
            original_language: String::new(),
            genre_ids: vec![],
        };

        let response = CatalogMovieResponse::from(summary);
        assert_eq!(response.release_date, None);
        assert_eq!(
            response.poster_url.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/p.jpg")
        );
    }
}

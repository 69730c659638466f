//! Domain entities - core business objects

mod comment;
mod diary;
mod movie;
mod review;
mod user;

pub use comment::{Comment, CommentWithAuthor};
pub use diary::DiaryEntry;
pub use movie::{Genre, Movie};
pub use review::{EmotionMovieCount, Review, ReviewWithMeta, MAX_RATING, MIN_RATING};
pub use user::User;

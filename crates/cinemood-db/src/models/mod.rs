//! Database models with SQLx FromRow derives

mod comment;
mod diary;
mod movie;
mod review;
mod user;

pub use comment::{CommentModel, CommentWithAuthorModel};
pub use diary::DiaryEntryModel;
pub use movie::MovieModel;
pub use review::{EmotionCountModel, ReviewModel, ReviewWithMetaModel};
pub use user::UserModel;

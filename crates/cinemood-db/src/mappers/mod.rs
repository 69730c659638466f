//! Entity <-> model mappers

mod comment;
mod diary;
mod movie;
mod review;
mod user;

pub use review::emotion_tags_to_json;

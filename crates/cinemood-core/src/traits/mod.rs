//! Repository traits (ports)

mod repositories;

pub use repositories::{
    CommentRepository, DiaryRepository, MovieRepository, RepoResult, ReviewRepository,
    UserRepository,
};

//! User entity <-> model mapper

use cinemood_core::entities::User;
use cinemood_core::value_objects::Snowflake;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            username: model.username,
            nickname: model.nickname,
            favorite_genres: model.favorite_genres.0,
            favorite_actors: model.favorite_actors,
            preferred_countries: model.preferred_countries.0,
            profile_image: model.profile_image,
            is_admin: model.is_admin,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

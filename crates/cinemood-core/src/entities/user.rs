//! User entity - a community member account

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// User entity with movie-taste profile fields
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub nickname: Option<String>,
    /// Preferred genres, free-form labels chosen by the user
    pub favorite_genres: Vec<String>,
    /// Comma-separated actor names, kept as entered
    pub favorite_actors: Option<String>,
    pub preferred_countries: Vec<String>,
    pub profile_image: Option<String>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: Snowflake, username: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            nickname: None,
            favorite_genres: Vec::new(),
            favorite_actors: None,
            preferred_countries: Vec::new(),
            profile_image: None,
            is_admin: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Name shown in listings: nickname when set, otherwise username
    pub fn display_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.username)
    }

    /// Check whether this user may moderate other users' content
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_nickname() {
        let mut user = User::new(Snowflake::new(1), "moviefan".to_string());
        assert_eq!(user.display_name(), "moviefan");

        user.nickname = Some("씨네필".to_string());
        assert_eq!(user.display_name(), "씨네필");
    }

    #[test]
    fn test_new_user_is_not_admin() {
        let user = User::new(Snowflake::new(1), "moviefan".to_string());
        assert!(!user.is_admin());
    }
}

//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, TMDB_API_KEY, JWT_SECRET, API_PORT
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

/// Sign up a fresh user and return their tokens
async fn signup(server: &TestServer) -> (SignupRequest, AuthResponse) {
    let request = SignupRequest::unique();
    let response = server.post("/api/v1/auth/signup", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    (request, auth)
}

/// Create a review for a movie id and return it
async fn create_review(server: &TestServer, token: &str, movie_id: i64) -> ReviewResponse {
    let request = CreateReviewRequest::unique();
    let response = server
        .post_auth(&format!("/api/v1/movies/{movie_id}/reviews"), token, &request)
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_signup() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, auth) = signup(&server).await;

    assert_eq!(auth.user.username, request.username);
    assert_eq!(auth.token_type, "Bearer");
    assert!(auth.expires_in > 0);
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
}

#[tokio::test]
async fn test_signup_duplicate_username() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, _) = signup(&server).await;

    let response = server.post("/api/v1/auth/signup", &request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: ErrorResponse = response.json().await.unwrap();
    assert_eq!(body.error.code, "CONFLICT");
}

#[tokio::test]
async fn test_signup_password_mismatch() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = SignupRequest::unique();
    request.password2 = "somethingelse123".to_string();

    let response = server.post("/api/v1/auth/signup", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, _) = signup(&server).await;

    let login = LoginRequest::from_signup(&request);
    let response = server.post("/api/v1/auth/login", &login).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.username, request.username);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login = LoginRequest {
        username: "nosuchuser".to_string(),
        password: "wrongpass123".to_string(),
    };

    let response = server.post("/api/v1/auth/login", &login).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_refresh_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    let refresh = RefreshTokenRequest {
        refresh_token: auth.refresh_token,
    };
    let response = server
        .post("/api/v1/auth/token/refresh", &refresh)
        .await
        .unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!refreshed.access_token.is_empty());
    assert_eq!(refreshed.user.username, auth.user.username);
}

#[tokio::test]
async fn test_refresh_with_access_token_fails() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    let refresh = RefreshTokenRequest {
        refresh_token: auth.access_token,
    };
    let response = server
        .post("/api/v1/auth/token/refresh", &refresh)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_logout() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    let response = server
        .post_auth_empty("/api/v1/auth/logout", &auth.access_token)
        .await
        .unwrap();
    let ack: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ack.message, "Logged out");

    // Tokens are stateless, so the access token keeps working
    let response = server
        .get_auth("/api/v1/users/@me", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_delete_account() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    let response = server
        .post_auth_empty("/api/v1/auth/delete", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Token survives but the account is gone
    let response = server
        .get_auth("/api/v1/users/@me", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_get_current_user_requires_auth() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/users/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_get_current_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, auth) = signup(&server).await;

    let response = server
        .get_auth("/api/v1/users/@me", &auth.access_token)
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.username, request.username);
    assert_eq!(user.nickname, None);
}

#[tokio::test]
async fn test_update_profile_partial() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    // Set nickname and genres
    let update = UpdateProfileRequest {
        nickname: Some("cinephile".to_string()),
        favorite_genres: Some(vec!["drama".to_string(), "thriller".to_string()]),
        ..Default::default()
    };
    let response = server
        .patch_auth("/api/v1/users/@me/profile", &auth.access_token, &update)
        .await
        .unwrap();
    let profile: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile.nickname.as_deref(), Some("cinephile"));
    assert_eq!(profile.favorite_genres.len(), 2);

    // A second partial update leaves the nickname alone
    let update = UpdateProfileRequest {
        favorite_actors: Some("Song Kang-ho".to_string()),
        ..Default::default()
    };
    let response = server
        .patch_auth("/api/v1/users/@me/profile", &auth.access_token, &update)
        .await
        .unwrap();
    let profile: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile.nickname.as_deref(), Some("cinephile"));
    assert_eq!(profile.favorite_actors.as_deref(), Some("Song Kang-ho"));
}

#[tokio::test]
async fn test_favorite_movie_toggle() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    let toggle = FavoriteToggleRequest { movie_id: 603 };

    // First toggle adds
    let response = server
        .post_auth(
            "/api/v1/users/@me/favorite-movies/toggle",
            &auth.access_token,
            &toggle,
        )
        .await
        .unwrap();
    let result: FavoriteToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(result.favorited);

    let response = server
        .get_auth("/api/v1/users/@me/favorite-movies", &auth.access_token)
        .await
        .unwrap();
    let favorites: FavoriteMoviesResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(favorites.movie_ids.contains(&603));

    // Second toggle removes
    let response = server
        .post_auth(
            "/api/v1/users/@me/favorite-movies/toggle",
            &auth.access_token,
            &toggle,
        )
        .await
        .unwrap();
    let result: FavoriteToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!result.favorited);
}

// ============================================================================
// Review Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_list_reviews() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, auth) = signup(&server).await;

    let movie_id = 550 + unique_suffix() as i64;
    let review = create_review(&server, &auth.access_token, movie_id).await;
    assert_eq!(review.movie_id, movie_id);
    assert_eq!(review.author.username, request.username);
    assert_eq!(review.like_count, 0);
    assert_eq!(review.emotion_tags[0].code, "joy");
    assert_eq!(review.emotion_tags[0].label, "기쁨");

    let response = server
        .get(&format!("/api/v1/movies/{movie_id}/reviews"))
        .await
        .unwrap();
    let reviews: Vec<ReviewResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(reviews.len(), 1);
    // Anonymous viewer never sees is_liked = true
    assert!(!reviews[0].is_liked);
}

#[tokio::test]
async fn test_create_review_rejects_unknown_emotion() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    let body = serde_json::json!({
        "title": "t",
        "content": "c",
        "rating": 3.0,
        "emotion_tags": ["boredom"],
    });
    let response = server
        .post_auth("/api/v1/movies/603/reviews", &auth.access_token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_update_review_author_only() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, author) = signup(&server).await;
    let (_, other) = signup(&server).await;

    let movie_id = 9000 + unique_suffix() as i64;
    let review = create_review(&server, &author.access_token, movie_id).await;

    let update = serde_json::json!({ "rating": 2.0 });

    // Another user may not edit
    let response = server
        .patch_auth(
            &format!("/api/v1/reviews/{}", review.id),
            &other.access_token,
            &update,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // The author may
    let response = server
        .patch_auth(
            &format!("/api/v1/reviews/{}", review.id),
            &author.access_token,
            &update,
        )
        .await
        .unwrap();
    let updated: ReviewResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.rating, 2.0);
    // Untouched fields survive a partial update
    assert_eq!(updated.title, review.title);
}

#[tokio::test]
async fn test_like_toggle() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, author) = signup(&server).await;
    let (_, liker) = signup(&server).await;

    let movie_id = 20000 + unique_suffix() as i64;
    let review = create_review(&server, &author.access_token, movie_id).await;

    let path = format!("/api/v1/reviews/{}/like", review.id);

    // Like
    let response = server
        .post_auth_empty(&path, &liker.access_token)
        .await
        .unwrap();
    let result: LikeToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(result.liked);
    assert_eq!(result.like_count, 1);

    // Unlike
    let response = server
        .post_auth_empty(&path, &liker.access_token)
        .await
        .unwrap();
    let result: LikeToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!result.liked);
    assert_eq!(result.like_count, 0);
}

#[tokio::test]
async fn test_delete_review_author_or_admin() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, author) = signup(&server).await;
    let (_, other) = signup(&server).await;

    let movie_id = 30000 + unique_suffix() as i64;
    let review = create_review(&server, &author.access_token, movie_id).await;
    let path = format!("/api/v1/reviews/{}", review.id);

    // A non-author, non-admin user may not delete
    let response = server.delete_auth(&path, &other.access_token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // The author may
    let response = server
        .delete_auth(&path, &author.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Gone afterwards
    let response = server.delete_auth(&path, &author.access_token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_flow() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, author) = signup(&server).await;
    let (commenter_req, commenter) = signup(&server).await;

    let movie_id = 40000 + unique_suffix() as i64;
    let review = create_review(&server, &author.access_token, movie_id).await;
    let comments_path = format!("/api/v1/reviews/{}/comments", review.id);

    // Create two comments; listing returns oldest first
    let first = CreateCommentRequest {
        content: "First".to_string(),
    };
    let response = server
        .post_auth(&comments_path, &commenter.access_token, &first)
        .await
        .unwrap();
    let first: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(first.author.username, commenter_req.username);

    let second = CreateCommentRequest {
        content: "Second".to_string(),
    };
    let response = server
        .post_auth(&comments_path, &commenter.access_token, &second)
        .await
        .unwrap();
    let _: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.get(&comments_path).await.unwrap();
    let comments: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].content, "First");
    assert_eq!(comments[1].content, "Second");

    // Only the comment author may edit
    let update = CreateCommentRequest {
        content: "Edited".to_string(),
    };
    let response = server
        .patch_auth(
            &format!("/api/v1/comments/{}", first.id),
            &author.access_token,
            &update,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .patch_auth(
            &format!("/api/v1/comments/{}", first.id),
            &commenter.access_token,
            &update,
        )
        .await
        .unwrap();
    let edited: CommentResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(edited.content, "Edited");

    // Delete
    let response = server
        .delete_auth(
            &format!("/api/v1/comments/{}", first.id),
            &commenter.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

// ============================================================================
// Diary Tests
// ============================================================================

#[tokio::test]
async fn test_diary_flow() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;
    let (_, stranger) = signup(&server).await;

    // Create
    let request = CreateDiaryRequest::calm();
    let response = server
        .post_auth("/api/v1/diaries", &auth.access_token, &request)
        .await
        .unwrap();
    let entry: DiaryResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(entry.emotion.code, "calm");
    assert_eq!(entry.emotion.label, "평온");

    // Listed for the owner, newest first
    let response = server
        .get_auth("/api/v1/diaries", &auth.access_token)
        .await
        .unwrap();
    let entries: Vec<DiaryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(entries.len(), 1);

    // Not visible to anyone else
    let response = server
        .get_auth("/api/v1/diaries", &stranger.access_token)
        .await
        .unwrap();
    let entries: Vec<DiaryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(entries.is_empty());

    // Strangers may not edit or delete
    let path = format!("/api/v1/diaries/{}", entry.id);
    let update = serde_json::json!({ "emotion": "joy" });
    let response = server
        .patch_auth(&path, &stranger.access_token, &update)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // The owner may
    let response = server
        .patch_auth(&path, &auth.access_token, &update)
        .await
        .unwrap();
    let updated: DiaryResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.emotion.code, "joy");

    let response = server.delete_auth(&path, &auth.access_token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_diary_rejects_unknown_emotion() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    let body = serde_json::json!({ "emotion": "nostalgia", "content": "..." });
    let response = server
        .post_auth("/api/v1/diaries", &auth.access_token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Emotion Ranking Tests
// ============================================================================

#[tokio::test]
async fn test_emotion_ranking_rejects_unknown_emotion() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get("/api/v1/movies/emotion-ranking?emotion=boredom")
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_emotion_ranking_rejects_bad_order() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get("/api/v1/movies/emotion-ranking?emotion=joy&order=sideways")
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_emotion_ranking_requires_emotion() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/movies/emotion-ranking").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_emotion_ranking_empty_when_no_reviews_match() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // No test data ever tags "depression", so the ranking has nothing to rank
    let response = server
        .get("/api/v1/movies/emotion-ranking?emotion=depression")
        .await
        .unwrap();
    let ranking: EmotionRankingResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(ranking.emotion.code, "depression");
    assert_eq!(ranking.count, 0);
    assert!(ranking.results.is_empty());
    assert!(ranking.message.is_some());
}

#[tokio::test]
async fn test_emotion_ranking_honors_limit() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = signup(&server).await;

    // Three real catalog titles so ranking enrichment can resolve them
    for movie_id in [550, 603, 680] {
        let body = serde_json::json!({
            "title": "분노 유발",
            "content": "보는 내내 화가 났다",
            "rating": 3.0,
            "emotion_tags": ["anger"],
        });
        let response = server
            .post_auth(
                &format!("/api/v1/movies/{movie_id}/reviews"),
                &auth.access_token,
                &body,
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server
        .get("/api/v1/movies/emotion-ranking?emotion=anger&limit=2")
        .await
        .unwrap();
    let ranking: EmotionRankingResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(ranking.emotion.code, "anger");
    assert!(!ranking.results.is_empty());
    assert!(ranking.results.len() <= 2);
    assert_eq!(ranking.count, ranking.results.len());
}

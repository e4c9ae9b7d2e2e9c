//! API Integration Tests
//!
//! Most tests run against an in-memory store and need no services.
//! `test_postgres_*` tests additionally require DATABASE_URL and skip
//! otherwise.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use uuid::Uuid;

async fn register(server: &TestServer) -> UserResponse {
    let request = CreateUserRequest::unique(server.seed().degree_id);
    let response = server.post("/api/v1/users", &request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn publish(server: &TestServer, user_id: Uuid, tag_ids: Vec<i32>) -> PublicationResponse {
    let request = CreatePublicationRequest::new(user_id, server.seed().page_id, tag_ids);
    let response = server
        .post_as("/api/v1/publications", user_id, &request)
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn toggle(server: &TestServer, request: &ToggleReactionRequest) -> ReactionStatusResponse {
    let response = server.post("/api/v1/reactions/toggle", request).await.unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

async fn fetch(server: &TestServer, publication_id: Uuid) -> PublicationResponse {
    let response = server
        .get(&format!("/api/v1/publications/{publication_id}"))
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_postgres_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start_postgres()
        .await
        .expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_like_twice_removes_reaction() {
    let server = TestServer::start().await.unwrap();
    let user = register(&server).await;
    let publication = publish(&server, user.id, vec![]).await;

    let first = toggle(&server, &ToggleReactionRequest::like(user.id, publication.id)).await;
    assert_eq!(
        first,
        ReactionStatusResponse {
            exists: true,
            reaction_type: Some("like".into())
        }
    );

    let second = toggle(&server, &ToggleReactionRequest::like(user.id, publication.id)).await;
    assert!(!second.exists);
    assert!(second.reaction_type.is_none());

    let counts = fetch(&server, publication.id).await;
    assert_eq!((counts.likes_count, counts.dislikes_count), (0, 0));
}

#[tokio::test]
async fn test_like_then_dislike_switches() {
    let server = TestServer::start().await.unwrap();
    let user = register(&server).await;
    let publication = publish(&server, user.id, vec![]).await;

    toggle(&server, &ToggleReactionRequest::like(user.id, publication.id)).await;
    let status = toggle(&server, &ToggleReactionRequest::dislike(user.id, publication.id)).await;
    assert_eq!(status.reaction_type.as_deref(), Some("dislike"));

    let response = server
        .get(&format!("/api/v1/reactions/{}/{}", user.id, publication.id))
        .await
        .unwrap();
    let current: ReactionStatusResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(current, status);

    let counts = fetch(&server, publication.id).await;
    assert_eq!((counts.likes_count, counts.dislikes_count), (0, 1));
}

#[tokio::test]
async fn test_counts_aggregate_across_users() {
    let server = TestServer::start().await.unwrap();
    let author = register(&server).await;
    let publication = publish(&server, author.id, vec![]).await;

    for _ in 0..3 {
        let fan = register(&server).await;
        toggle(&server, &ToggleReactionRequest::like(fan.id, publication.id)).await;
    }
    let critic = register(&server).await;
    toggle(&server, &ToggleReactionRequest::dislike(critic.id, publication.id)).await;

    for _ in 0..2 {
        let counts = fetch(&server, publication.id).await;
        assert_eq!(counts.likes_count, 3);
        assert_eq!(counts.dislikes_count, 1);
    }

    let response = server.get("/api/v1/publications").await.unwrap();
    let all: Vec<PublicationResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(all[0].likes_count, 3);
}

#[tokio::test]
async fn test_concurrent_toggles_leave_one_consistent_state() {
    let server = TestServer::start().await.unwrap();
    let user = register(&server).await;
    let publication = publish(&server, user.id, vec![]).await;

    let request = ToggleReactionRequest::like(user.id, publication.id);
    let (a, b) = tokio::join!(toggle(&server, &request), toggle(&server, &request));
    // One toggle creates, the other removes, in some order
    assert_ne!(a.exists, b.exists);

    let counts = fetch(&server, publication.id).await;
    assert_eq!(counts.likes_count, 0);
}

// ============================================================================
// Publication Tests
// ============================================================================

#[tokio::test]
async fn test_unknown_tag_rejects_whole_publication() {
    let server = TestServer::start().await.unwrap();
    let user = register(&server).await;
    let tags = server.seed().tag_ids.clone();

    let request = CreatePublicationRequest::new(user.id, server.seed().page_id, vec![tags[0], tags[1], 999]);
    let response = server
        .post_as("/api/v1/publications", user.id, &request)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "INVALID_TAGS");
    assert_eq!(
        error.error.details.unwrap()["missing_tag_ids"],
        serde_json::json!([999])
    );

    let response = server
        .get(&format!("/api/v1/publications/by-user/{}", user.id))
        .await
        .unwrap();
    let mine: Vec<PublicationResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(mine.is_empty());
}

#[tokio::test]
async fn test_non_owner_cannot_update() {
    let server = TestServer::start().await.unwrap();
    let owner = register(&server).await;
    let intruder = register(&server).await;
    let publication = publish(&server, owner.id, vec![]).await;
    assert_eq!(publication.user.mail, owner.mail);
    assert_eq!(publication.page.id, server.seed().page_id);
    assert!(publication.tags.is_empty());

    let edit = UpdatePublicationRequest {
        title: "Overwritten".into(),
        content: String::new(),
        page_id: server.seed().page_id,
        tag_ids: vec![],
    };
    let response = server
        .put_as(&format!("/api/v1/publications/{}", publication.id), intruder.id, &edit)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.error.code, "NOT_PUBLICATION_OWNER");

    assert_eq!(fetch(&server, publication.id).await.title, publication.title);

    let response = server
        .put_as(&format!("/api/v1/publications/{}", publication.id), owner.id, &edit)
        .await
        .unwrap();
    let updated: PublicationResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.title, "Overwritten");
    assert_eq!(updated.created_at, publication.created_at);
}

#[tokio::test]
async fn test_delete_publication_cascades_reactions() {
    let server = TestServer::start().await.unwrap();
    let owner = register(&server).await;
    let fan = register(&server).await;
    let publication = publish(&server, owner.id, server.seed().tag_ids.clone()).await;
    toggle(&server, &ToggleReactionRequest::like(fan.id, publication.id)).await;

    let path = format!("/api/v1/publications/{}", publication.id);
    let response = server.delete_as(&path, owner.id).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/v1/users/{}/reactions/like", fan.id))
        .await
        .unwrap();
    let liked: Vec<PublicationResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(liked.is_empty());

    let response = server.delete_as(&path, owner.id).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_tag_filter_never_duplicates() {
    let server = TestServer::start().await.unwrap();
    let user = register(&server).await;
    let tags = server.seed().tag_ids.clone();

    let both = publish(&server, user.id, vec![tags[0], tags[1]]).await;
    let first_only = publish(&server, user.id, vec![tags[0]]).await;
    publish(&server, user.id, vec![tags[2]]).await;

    let response = server
        .get(&format!(
            "/api/v1/publications/by-tags?tag_ids={}&tag_ids={}",
            tags[0], tags[1]
        ))
        .await
        .unwrap();
    let found: Vec<PublicationResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let mut ids: Vec<Uuid> = found.iter().map(|p| p.id).collect();
    ids.sort();
    let mut expected = vec![both.id, first_only.id];
    expected.sort();
    assert_eq!(ids, expected);

    let response = server
        .get(&format!("/api/v1/publications/{}/tags", both.id))
        .await
        .unwrap();
    let attached: Vec<TagResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(attached.len(), 2);
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_profile_update_and_delete() {
    let server = TestServer::start().await.unwrap();
    let user = register(&server).await;

    let response = server.get_as("/api/v1/users/@me", user.id).await.unwrap();
    let profile: UserProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile.mail, user.mail);
    assert_eq!(profile.degree_title.as_deref(), Some("Physics"));

    let response = server
        .patch_as(
            "/api/v1/users/@me",
            user.id,
            &serde_json::json!({ "last_name": "Sklodowska" }),
        )
        .await
        .unwrap();
    let updated: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.last_name, "Sklodowska");
    assert_eq!(updated.name, user.name);

    publish(&server, user.id, vec![]).await;
    let response = server.delete_as("/api/v1/users/@me", user.id).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_as("/api/v1/users/@me", user.id).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_duplicate_mail_conflicts() {
    let server = TestServer::start().await.unwrap();
    let request = CreateUserRequest::unique(server.seed().degree_id);

    let response = server.post("/api/v1/users", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post("/api/v1/users", &request).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error.code, "EMAIL_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_missing_caller_header() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/v1/users/@me").await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.error.code, "MISSING_AUTHORIZATION");
}

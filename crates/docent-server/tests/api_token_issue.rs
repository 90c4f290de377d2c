use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use docent_server::api::TokenResponse;
use docent_server::{app, AppState};
use docent_token::decode_access_token;
use serde_json::{json, Value};
use tower::ServiceExt;

const API_KEY: &str = "test-api-key";
const API_SECRET: &str = "test-api-secret-0123456789abcdef";

fn test_state() -> AppState {
    AppState {
        api_key: API_KEY.to_string(),
        api_secret: API_SECRET.to_string(),
        token_ttl_secs: 300,
    }
}

fn token_request(body: Value) -> Request<Body> {
    Request::builder()
        .uri("/api/livekit/token")
        .method("POST")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn issues_token_with_default_participant_name() {
    let app = app(test_state());

    let response = app
        .oneshot(token_request(json!({"roomName": "gallery-42"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let resp: TokenResponse = serde_json::from_slice(&body).unwrap();

    assert_eq!(resp.room_name, "gallery-42");
    assert_eq!(resp.participant_name, "Guest");
    assert!(!resp.token.is_empty());
}

#[tokio::test]
async fn issued_token_decodes_to_participant_grant() {
    let app = app(test_state());

    let response = app
        .oneshot(token_request(json!({
            "roomName": "gallery-42",
            "participantName": "Ada",
            "metadata": "{\"title\":\"Water Lilies\",\"artist\":\"Monet\"}"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let resp: TokenResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(resp.participant_name, "Ada");

    let claims = decode_access_token(&resp.token, API_SECRET).unwrap();
    assert_eq!(claims.iss, API_KEY);
    assert_eq!(claims.sub, "Ada");
    assert_eq!(claims.name, "Ada");
    assert_eq!(
        claims.metadata,
        "{\"title\":\"Water Lilies\",\"artist\":\"Monet\"}"
    );
    assert_eq!(claims.video.room, "gallery-42");
    assert!(claims.video.room_join);
    assert!(claims.video.can_publish);
    assert!(claims.video.can_subscribe);
    assert!(claims.video.can_publish_data);
    assert!(!claims.video.can_update_own_metadata);
    assert_eq!(claims.exp - claims.nbf, 300);
}

#[tokio::test]
async fn omitted_metadata_defaults_to_empty() {
    let app = app(test_state());

    let response = app
        .oneshot(token_request(json!({"roomName": "gallery-42"})))
        .await
        .unwrap();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let resp: TokenResponse = serde_json::from_slice(&body).unwrap();

    let claims = decode_access_token(&resp.token, API_SECRET).unwrap();
    assert!(claims.metadata.is_empty());
}

#[tokio::test]
async fn missing_room_name_is_rejected() {
    let app = app(test_state());

    let response = app.oneshot(token_request(json!({}))).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "roomName is required");
}

#[tokio::test]
async fn empty_room_name_is_rejected() {
    let app = app(test_state());

    let response = app
        .oneshot(token_request(
            json!({"roomName": "", "participantName": "Ada"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "roomName is required");
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authenticated route tests (favorites, catalog refresh) and CORS.
//!
//! These tests verify that:
//! 1. Protected routes reject requests without valid tokens
//! 2. Favorites are toggled per user, and only for known activities
//! 3. Catalog refresh is limited to the admin role
//! 4. CORS preflight requests return correct headers

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

mod common;

fn authed(method: &str, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_protected_route_without_token() {
    let (app, _) = common::create_test_app(common::sample_catalog());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/favorites")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = common::json_body(response).await;
    assert_eq!(body["error"], "unauthorized");
}

#[tokio::test]
async fn test_protected_route_with_invalid_token() {
    let (app, _) = common::create_test_app(common::sample_catalog());

    let response = app
        .oneshot(authed("GET", "/api/favorites", "invalid.token.here"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = common::json_body(response).await;
    assert_eq!(body["error"], "unauthorized");
}

#[tokio::test]
async fn test_token_signed_with_other_key_rejected() {
    let (app, _) = common::create_test_app(common::sample_catalog());
    let token = common::create_test_jwt("u1", "user", b"some_other_key_that_is_32_bytes!");

    let response = app
        .oneshot(authed("GET", "/api/favorites", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_session_cookie_accepted() {
    let (app, state) = common::create_test_app(common::sample_catalog());
    let token = common::create_test_jwt("u1", "user", &state.config.jwt_signing_key);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/favorites")
                .header(header::COOKIE, format!("session_token={}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_toggle_favorite_round_trip() {
    let (app, state) = common::create_test_app(common::sample_catalog());
    let token = common::create_test_jwt("u1", "user", &state.config.jwt_signing_key);

    let response = app
        .clone()
        .oneshot(authed("POST", "/api/favorites/jazz", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::json_body(response).await;
    assert_eq!(body["activity_id"], "jazz");
    assert_eq!(body["favorite"], true);

    let response = app
        .clone()
        .oneshot(authed("GET", "/api/favorites", &token))
        .await
        .unwrap();
    let body = common::json_body(response).await;
    assert_eq!(body["favorites"][0]["activity_id"], "jazz");
    assert_eq!(body["activities"][0]["title"], "Concert de jazz");

    // Another user sees nothing
    let other = common::create_test_jwt("u2", "user", &state.config.jwt_signing_key);
    let response = app
        .clone()
        .oneshot(authed("GET", "/api/favorites", &other))
        .await
        .unwrap();
    let body = common::json_body(response).await;
    assert!(body["favorites"].as_array().unwrap().is_empty());

    // Toggling again removes it
    let response = app
        .oneshot(authed("POST", "/api/favorites/jazz", &token))
        .await
        .unwrap();
    let body = common::json_body(response).await;
    assert_eq!(body["favorite"], false);
}

#[tokio::test]
async fn test_favorite_unknown_activity() {
    let (app, state) = common::create_test_app(common::sample_catalog());
    let token = common::create_test_jwt("u1", "user", &state.config.jwt_signing_key);

    let response = app
        .oneshot(authed("POST", "/api/favorites/nope", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_catalog_refresh_requires_admin() {
    let (app, state) = common::create_test_app(common::sample_catalog());
    let token = common::create_test_jwt("u1", "user", &state.config.jwt_signing_key);

    let response = app
        .oneshot(authed("POST", "/api/catalog/refresh", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_catalog_refresh_backend_failure() {
    let (app, state) = common::create_test_app(common::sample_catalog());
    let token = common::create_test_jwt("root", "admin", &state.config.jwt_signing_key);

    // Offline catalog: the fetch fails and the snapshot is kept
    let response = app
        .oneshot(authed("POST", "/api/catalog/refresh", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(state.catalog.snapshot().await.len(), 4);
}

#[tokio::test]
async fn test_cors_preflight() {
    let (app, _) = common::create_test_app(vec![]);

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/activities")
                .header(header::ORIGIN, "http://localhost:5173")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
}

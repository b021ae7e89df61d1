// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Public discovery endpoint tests.
//!
//! These tests verify that:
//! 1. Query parameters map onto the where/when/what filters
//! 2. Invalid parameters are rejected with 400
//! 3. Stale exclusions are dropped instead of reported

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;

mod common;

async fn get(app: axum::Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

fn result_ids(body: &serde_json::Value) -> Vec<String> {
    body["activities"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_unfiltered_returns_whole_baseline() {
    let (app, _) = common::create_test_app(common::sample_catalog());

    let response = get(app, "/api/activities").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::json_body(response).await;
    assert_eq!(result_ids(&body), vec!["rugby", "tennis", "jazz", "musee"]);
    assert_eq!(body["total"], 4);
    assert_eq!(body["baseline_total"], 4);
}

#[tokio::test]
async fn test_radius_and_date_filters() {
    let (app, _) = common::create_test_app(common::sample_catalog());

    let response = get(
        app,
        "/api/activities?lat=43.6&lon=1.44&distance=20&when=12%2F06%2F2025",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::json_body(response).await;
    assert_eq!(result_ids(&body), vec!["tennis", "jazz"]);
    assert_eq!(body["baseline_total"], 4);

    let tennis = &body["activities"][0];
    assert_eq!(tennis["starts"], "2025-06-10");
    assert_eq!(tennis["ends"], "2025-06-15");
    assert_eq!(tennis["distance_km"], 0.0);
}

#[tokio::test]
async fn test_category_with_exclusion() {
    let (app, _) = common::create_test_app(common::sample_catalog());

    let response = get(
        app,
        "/api/activities?keyword=sport&category=Sport&excluded=Sports%20individuels",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // "tennis" is excluded by subcategory; "rugby" matches "sport" in its description
    let body = common::json_body(response).await;
    assert_eq!(result_ids(&body), vec!["rugby"]);
}

#[tokio::test]
async fn test_invalid_coordinates_rejected() {
    let (app, _) = common::create_test_app(common::sample_catalog());

    let response = get(app, "/api/activities?lat=95&lon=1.44&distance=10").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_distance_without_coordinates_rejected() {
    let (app, _) = common::create_test_app(common::sample_catalog());

    let response = get(app, "/api/activities?distance=10").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = common::json_body(response).await;
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_keyword_too_long_rejected() {
    let (app, _) = common::create_test_app(common::sample_catalog());

    let keyword = "a".repeat(101);
    let response = get(app, &format!("/api/activities?keyword={}", keyword)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_subcategories_match_and_selection() {
    let (app, _) = common::create_test_app(vec![]);

    let response = get(
        app,
        "/api/subcategories?keyword=Sports&excluded=Sports%20de%20glisse,Concert",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::json_body(response).await;
    assert_eq!(body["keyword"], "sports");
    assert_eq!(body["matched"].as_array().unwrap().len(), 4);
    assert_eq!(body["excluded"], serde_json::json!(["Sports de glisse"]));
    assert_eq!(body["selection"]["category"], "Sport");
    assert_eq!(body["selection"]["subcategory"], "Sports nautiques");
}

#[tokio::test]
async fn test_taxonomy_listing() {
    let (app, _) = common::create_test_app(vec![]);

    let response = get(app, "/api/taxonomy").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::json_body(response).await;
    let categories = body.as_array().unwrap();
    assert_eq!(categories.len(), 6);
    assert_eq!(categories[0]["name"], "Sport");
    assert_eq!(categories[0]["subcategories"][0], "Sports collectifs");
}

#[tokio::test]
async fn test_health() {
    let (app, _) = common::create_test_app(vec![]);

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use activity_finder::config::Config;
use activity_finder::models::{Activity, Taxonomy};
use activity_finder::routes::create_router;
use activity_finder::services::{CatalogService, FavoritesService};
use activity_finder::AppState;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Build an activity with the fields the filters look at.
#[allow(dead_code)]
pub fn activity(id: &str, title: &str, when: &str, coords: Option<(f64, f64)>) -> Activity {
    Activity {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        category: None,
        subcategory: None,
        when: when.to_string(),
        lat: coords.map(|(lat, _)| lat),
        lon: coords.map(|(_, lon)| lon),
        location: None,
        image: None,
    }
}

/// Same as `activity`, classified under a category.
#[allow(dead_code)]
pub fn categorized(id: &str, title: &str, category: &str, subcategory: &str) -> Activity {
    Activity {
        category: Some(category.to_string()),
        subcategory: Some(subcategory.to_string()),
        ..activity(id, title, "", None)
    }
}

/// A small catalog around Toulouse.
#[allow(dead_code)]
pub fn sample_catalog() -> Vec<Activity> {
    vec![
        Activity {
            description: "Tournoi amical de sports collectifs".to_string(),
            ..categorized("rugby", "Rugby au Capitole", "Sport", "Sports collectifs")
        },
        Activity {
            when: "10/06/2025 - 15/06/2025".to_string(),
            lat: Some(43.6),
            lon: Some(1.44),
            ..categorized("tennis", "Stage de tennis", "Sport", "Sports individuels")
        },
        Activity {
            when: "12/06/2025".to_string(),
            lat: Some(43.61),
            lon: Some(1.45),
            ..categorized("jazz", "Concert de jazz", "Musique", "Concert")
        },
        Activity {
            when: "01/01/2025".to_string(),
            lat: Some(44.35),
            lon: Some(2.57),
            ..categorized("musee", "Musée Soulages", "Culture", "Musée")
        },
    ]
}

/// Claims as issued by the auth service.
#[allow(dead_code)]
#[derive(Serialize)]
struct Claims<'a> {
    sub: &'a str,
    email: String,
    pseudo: &'a str,
    nom: &'a str,
    prenom: &'a str,
    role: &'a str,
    exp: usize,
    iat: usize,
}

/// Create a session token for a user with the given role.
#[allow(dead_code)]
pub fn create_test_jwt(user_id: &str, role: &str, signing_key: &[u8]) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as usize;

    let claims = Claims {
        sub: user_id,
        email: format!("{}@example.com", user_id),
        pseudo: user_id,
        nom: "Dupont",
        prenom: "Camille",
        role,
        exp: now + 86400,
        iat: now,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(signing_key),
    )
    .expect("Failed to create JWT")
}

/// Create a test app with an offline catalog.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(activities: Vec<Activity>) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::test_default(),
        taxonomy: Arc::new(Taxonomy::default()),
        catalog: CatalogService::new_offline(activities),
        favorites: FavoritesService::new(),
    });

    (create_router(state.clone()), state)
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}

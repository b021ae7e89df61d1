// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Bookmark routes for authenticated users.

use crate::error::{AppError, Result};
use crate::models::Session;
use crate::routes::api::ActivitySummary;
use crate::services::Favorite;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Extension, Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Favorites routes (require authentication).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/favorites", get(get_favorites))
        .route("/api/favorites/{activity_id}", post(toggle_favorite))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FavoritesResponse {
    /// Every bookmark, in the order it was added
    pub favorites: Vec<FavoriteEntry>,
    /// Bookmarked activities still present in the catalog
    pub activities: Vec<ActivitySummary>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FavoriteEntry {
    pub activity_id: String,
    pub added_at: String,
}

impl From<Favorite> for FavoriteEntry {
    fn from(favorite: Favorite) -> Self {
        Self {
            activity_id: favorite.activity_id,
            added_at: favorite.added_at,
        }
    }
}

/// List the current user's bookmarks.
async fn get_favorites(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
) -> Json<FavoritesResponse> {
    let favorites = state.favorites.list(&session);
    let baseline = state.catalog.snapshot().await;

    let activities = favorites
        .iter()
        .filter_map(|f| baseline.iter().find(|a| a.id == f.activity_id))
        .map(|a| ActivitySummary::new(a.clone(), None))
        .collect();

    Json(FavoritesResponse {
        favorites: favorites.into_iter().map(FavoriteEntry::from).collect(),
        activities,
    })
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ToggleFavoriteResponse {
    pub activity_id: String,
    /// Whether the activity is now bookmarked
    pub favorite: bool,
}

/// Add or remove a bookmark.
///
/// Unknown activities can only be removed, never added.
async fn toggle_favorite(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Path(activity_id): Path<String>,
) -> Result<Json<ToggleFavoriteResponse>> {
    if !state.favorites.is_favorite(&session, &activity_id)
        && state.catalog.find(&activity_id).await.is_none()
    {
        return Err(AppError::NotFound(format!(
            "Activity {} not found",
            activity_id
        )));
    }

    let favorite = state.favorites.toggle(&session, &activity_id);
    tracing::info!(
        user = %session.identity.id,
        activity_id = %activity_id,
        favorite,
        "Favorite toggled"
    );

    Ok(Json(ToggleFavoriteResponse {
        activity_id,
        favorite,
    }))
}

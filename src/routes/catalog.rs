// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Catalog administration routes.

use crate::error::{AppError, Result};
use crate::models::Session;
use crate::AppState;
use axum::{extract::State, routing::post, Extension, Json, Router};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Catalog routes (require authentication and the admin role).
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/catalog/refresh", post(refresh_catalog))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RefreshResponse {
    /// False when a concurrent, newer refresh won
    pub refreshed: bool,
    /// Size of the baseline now being served
    pub count: u32,
}

/// Refetch the baseline from the activity backend.
async fn refresh_catalog(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
) -> Result<Json<RefreshResponse>> {
    if !session.identity.is_admin() {
        tracing::warn!(user = %session.identity.id, "Catalog refresh denied");
        return Err(AppError::Forbidden);
    }

    tracing::info!(user = %session.identity.id, "Catalog refresh requested");
    let refreshed = state.catalog.refresh().await?.is_some();
    let count = state.catalog.snapshot().await.len() as u32;

    Ok(Json(RefreshResponse { refreshed, count }))
}

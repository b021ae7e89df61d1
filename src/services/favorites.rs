// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-user bookmarks, kept in memory for the lifetime of the process.

use crate::models::Session;
use crate::time_utils::format_utc_rfc3339;
use dashmap::DashMap;
use serde::Serialize;
use std::sync::Arc;

/// One bookmarked activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Favorite {
    pub activity_id: String,
    /// When the bookmark was added (RFC 3339)
    pub added_at: String,
}

/// Bookmarks keyed by user ID, in the order they were added.
#[derive(Default, Clone)]
pub struct FavoritesService {
    favorites: Arc<DashMap<String, Vec<Favorite>>>,
}

impl FavoritesService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bookmarks for the session's user.
    pub fn list(&self, session: &Session) -> Vec<Favorite> {
        self.favorites
            .get(&session.identity.id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    pub fn is_favorite(&self, session: &Session, activity_id: &str) -> bool {
        self.favorites
            .get(&session.identity.id)
            .is_some_and(|entry| entry.iter().any(|f| f.activity_id == activity_id))
    }

    /// Add or remove a bookmark. Returns `true` if the activity is now a
    /// favorite.
    pub fn toggle(&self, session: &Session, activity_id: &str) -> bool {
        let mut entry = self
            .favorites
            .entry(session.identity.id.clone())
            .or_default();

        if let Some(pos) = entry.iter().position(|f| f.activity_id == activity_id) {
            entry.remove(pos);
            tracing::debug!(user = %session.identity.id, activity_id, "Favorite removed");
            false
        } else {
            entry.push(Favorite {
                activity_id: activity_id.to_string(),
                added_at: format_utc_rfc3339(chrono::Utc::now()),
            });
            tracing::debug!(user = %session.identity.id, activity_id, "Favorite added");
            true
        }
    }
}

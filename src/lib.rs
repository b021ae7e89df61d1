// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity Finder: browse and filter listed activities.
//!
//! This crate provides the in-memory discovery engine (distance, date and
//! category predicates recomputed over a fetched baseline) and the HTTP API
//! that serves it.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use models::Taxonomy;
use services::{CatalogService, FavoritesService};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub taxonomy: Arc<Taxonomy>,
    pub catalog: CatalogService,
    pub favorites: FavoritesService,
}

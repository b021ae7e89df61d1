// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Public discovery routes: taxonomy, keyword matching, filtered activities.

use crate::error::{AppError, Result};
use crate::models::taxonomy::Category;
use crate::models::{Activity, Taxonomy, WhatFilter, WhenFilter, WhereFilter};
use crate::services::distance::distance_km;
use crate::services::filter::recompute;
use crate::services::matcher::{
    matched_subcategories, normalize_keyword, resolve_selection, retain_matched, Selection,
};
use crate::services::period::parse_period;
use crate::time_utils::format_iso_day;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use geo::Point;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// Discovery routes (no authentication).
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/taxonomy", get(get_taxonomy))
        .route("/api/subcategories", get(get_subcategories))
        .route("/api/activities", get(get_activities))
}

// ─── Taxonomy ────────────────────────────────────────────────

async fn get_taxonomy(State(state): State<Arc<AppState>>) -> Json<Vec<Category>> {
    Json(state.taxonomy.categories().to_vec())
}

// ─── Keyword Matching ────────────────────────────────────────

#[derive(Deserialize, Validate)]
struct SubcategoriesQuery {
    #[serde(default)]
    #[validate(length(max = 100))]
    keyword: String,
    /// Comma-separated subcategories to exclude
    #[serde(default)]
    #[validate(length(max = 1000))]
    excluded: String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SubcategoriesResponse {
    pub keyword: String,
    pub matched: Vec<String>,
    /// Exclusions that apply to `matched`; others are dropped
    pub excluded: Vec<String>,
    pub selection: Option<Selection>,
}

/// Match a keyword against the taxonomy and resolve the active pair.
async fn get_subcategories(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SubcategoriesQuery>,
) -> Result<Json<SubcategoriesResponse>> {
    params
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let keyword = normalize_keyword(&params.keyword);
    let matched = matched_subcategories(&state.taxonomy, &keyword);
    let excluded = retain_matched(&matched, &split_list(&params.excluded));
    let selection = resolve_selection(&state.taxonomy, &matched, &excluded);

    Ok(Json(SubcategoriesResponse {
        keyword,
        matched,
        excluded,
        selection,
    }))
}

// ─── Activities ──────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
struct ActivitiesQuery {
    /// Display label of the chosen place
    #[serde(default)]
    #[validate(length(max = 200))]
    label: String,
    #[serde(default)]
    #[validate(length(max = 200))]
    location: String,
    #[validate(range(min = -90.0, max = 90.0))]
    lat: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    lon: Option<f64>,
    /// Search radius in kilometers
    #[validate(range(min = 0.0, max = 20000.0))]
    distance: Option<f64>,
    /// Single date or "D1 - D2" range
    #[serde(default)]
    #[validate(length(max = 100))]
    when: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    keyword: String,
    #[validate(length(max = 100))]
    category: Option<String>,
    #[validate(length(max = 100))]
    subcategory: Option<String>,
    /// Comma-separated subcategories to exclude
    #[serde(default)]
    #[validate(length(max = 1000))]
    excluded: String,
}

impl ActivitiesQuery {
    /// Split the query into the three filter slices.
    fn into_filters(self, taxonomy: &Taxonomy) -> Result<(WhereFilter, WhenFilter, WhatFilter)> {
        if self.distance.is_some() && (self.lat.is_none() || self.lon.is_none()) {
            return Err(AppError::BadRequest(
                "'distance' requires both 'lat' and 'lon'".to_string(),
            ));
        }

        let category = self.category.filter(|c| !c.trim().is_empty());
        let subcategory = self.subcategory.filter(|s| !s.trim().is_empty());
        if let Some(sub) = subcategory.as_deref() {
            let Some(category) = category.as_deref() else {
                return Err(AppError::BadRequest(
                    "'subcategory' requires 'category'".to_string(),
                ));
            };
            // Subcategories unknown to the taxonomy are passed through
            if let Some(owner) = taxonomy.category_of(sub) {
                if owner != category {
                    return Err(AppError::BadRequest(format!(
                        "'{}' is not a subcategory of '{}'",
                        sub, category
                    )));
                }
            }
        }

        let keyword = normalize_keyword(&self.keyword);
        let matched = matched_subcategories(taxonomy, &keyword);
        let excluded_subcategories = retain_matched(&matched, &split_list(&self.excluded));

        let where_ = WhereFilter {
            label: self.label,
            location: self.location,
            distance: self.distance,
            lat: self.lat,
            lon: self.lon,
        };
        let what = WhatFilter {
            keyword,
            category,
            subcategory,
            excluded_subcategories,
        };

        Ok((where_, WhenFilter::new(self.when), what))
    }
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivitiesResponse {
    pub activities: Vec<ActivitySummary>,
    /// Number of activities passing the filters
    pub total: u32,
    /// Size of the unfiltered baseline
    pub baseline_total: u32,
}

#[derive(Serialize, Clone, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivitySummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub when: String,
    /// First day of the parsed period (YYYY-MM-DD)
    pub starts: Option<String>,
    /// Last day of the parsed period (YYYY-MM-DD)
    pub ends: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub location: Option<String>,
    pub image: Option<String>,
    /// Distance from the searched place, when one was given
    pub distance_km: Option<f64>,
}

impl ActivitySummary {
    pub fn new(activity: Activity, center: Option<Point<f64>>) -> Self {
        let period = parse_period(&activity.when);
        let distance = center
            .zip(activity.point())
            .map(|(center, point)| distance_km(point, center));

        Self {
            starts: period.map(|p| format_iso_day(p.from)),
            ends: period.map(|p| format_iso_day(p.to)),
            distance_km: distance,
            id: activity.id,
            title: activity.title,
            description: activity.description,
            category: activity.category,
            subcategory: activity.subcategory,
            when: activity.when,
            lat: activity.lat,
            lon: activity.lon,
            location: activity.location,
            image: activity.image,
        }
    }
}

/// Filter the current baseline.
async fn get_activities(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ActivitiesQuery>,
) -> Result<Json<ActivitiesResponse>> {
    params
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    tracing::debug!(
        keyword = %params.keyword,
        when = %params.when,
        category = ?params.category,
        distance = ?params.distance,
        "Searching activities"
    );

    let (where_, when, what) = params.into_filters(&state.taxonomy)?;
    let baseline = state.catalog.snapshot().await;
    let activities = recompute(&baseline, &where_, &when, &what);

    let center = where_.radius().map(|(center, _)| center);
    let summaries: Vec<ActivitySummary> = activities
        .into_iter()
        .map(|a| ActivitySummary::new(a, center))
        .collect();

    Ok(Json(ActivitiesResponse {
        total: summaries.len() as u32,
        baseline_total: baseline.len() as u32,
        activities: summaries,
    }))
}

/// Split a comma-separated list, dropping blanks.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

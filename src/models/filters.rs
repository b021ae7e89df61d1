// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Filter state slices (where / when / what).

use geo::Point;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Location filter. `distance` (km) and the coordinates are set together
/// when a geocoded place is chosen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WhereFilter {
    pub label: String,
    pub location: String,
    pub distance: Option<f64>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl WhereFilter {
    /// Radius constraint as (center, radius km). `None` means no constraint.
    pub fn radius(&self) -> Option<(Point<f64>, f64)> {
        match (self.lat, self.lon, self.distance) {
            (Some(lat), Some(lon), Some(distance)) => Some((Point::new(lon, lat), distance)),
            _ => None,
        }
    }
}

/// Date filter: empty, a single date, or a `"D1 - D2"` range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(transparent)]
pub struct WhenFilter(pub String);

impl WhenFilter {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

/// Keyword and category filter.
///
/// `excluded_subcategories` only makes sense relative to the matched set of
/// the current `keyword`; it must be cleared whenever the keyword changes
/// (see `FilterController::set_keyword`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WhatFilter {
    pub keyword: String,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    #[serde(default)]
    pub excluded_subcategories: Vec<String>,
}

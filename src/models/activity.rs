// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Listed activity model, as served by the activity backend.

use geo::Point;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// One listed event or place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Activity {
    /// Backend document ID
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Category name from the taxonomy
    #[serde(default)]
    pub category: Option<String>,
    /// Subcategory name from the taxonomy
    #[serde(default)]
    pub subcategory: Option<String>,
    /// Single date ("D1") or range ("D1 - D2"), may be unparsable
    #[serde(default)]
    pub when: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    /// Human-readable address
    #[serde(default)]
    pub location: Option<String>,
    /// Image URL
    #[serde(default)]
    pub image: Option<String>,
}

impl Activity {
    /// Coordinates as a point (x = longitude, y = latitude), if both are known.
    pub fn point(&self) -> Option<Point<f64>> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(Point::new(lon, lat)),
            _ => None,
        }
    }
}

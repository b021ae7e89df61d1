// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Great-circle distance between coordinates.

use geo::{Distance, HaversineMeasure, Point};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometers. Points are (x = longitude, y = latitude).
pub fn distance_km(a: Point<f64>, b: Point<f64>) -> f64 {
    HaversineMeasure::new(EARTH_RADIUS_KM).distance(a, b)
}

/// Whether `point` lies within `radius_km` of `center`, boundary included.
///
/// A missing point never satisfies a radius constraint.
pub fn within_radius(point: Option<Point<f64>>, center: Option<Point<f64>>, radius_km: f64) -> bool {
    match (point, center) {
        (Some(point), Some(center)) => distance_km(point, center) <= radius_km,
        _ => false,
    }
}

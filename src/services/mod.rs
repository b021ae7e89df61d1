// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - discovery engine and supporting services.

pub mod catalog;
pub mod controller;
pub mod distance;
pub mod favorites;
pub mod filter;
pub mod matcher;
pub mod period;

pub use catalog::CatalogService;
pub use controller::{FetchTicket, FilterController};
pub use distance::{distance_km, within_radius};
pub use favorites::{Favorite, FavoritesService};
pub use filter::recompute;
pub use matcher::{resolve_selection, toggle_exclusion, Selection};
pub use period::{parse_instant, parse_period, Instant, Period};

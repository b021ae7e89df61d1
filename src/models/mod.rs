// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod filters;
pub mod taxonomy;
pub mod user;

pub use activity::Activity;
pub use filters::{WhatFilter, WhenFilter, WhereFilter};
pub use taxonomy::{Category, Taxonomy, TaxonomyError};
pub use user::{Identity, Session};

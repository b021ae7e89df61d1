// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Baseline activity catalog fetched from the activity backend.
//!
//! The whole collection is fetched in one request (no paging, no
//! server-side filtering) and held as an immutable snapshot. Requests clone
//! the snapshot `Arc` and filter it without holding the lock.

use crate::error::AppError;
use crate::models::Activity;
use anyhow::Context;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Default)]
struct Snapshot {
    /// Generation of the fetch that produced this snapshot
    generation: u64,
    activities: Arc<Vec<Activity>>,
}

/// Holds the latest baseline snapshot.
pub struct CatalogService {
    http: Option<reqwest::Client>,
    url: String,
    snapshot: RwLock<Snapshot>,
    next_generation: AtomicU64,
}

impl CatalogService {
    /// Create a catalog backed by the activity backend at `url`.
    ///
    /// The snapshot starts empty; call `refresh` to load it.
    pub fn new(url: &str) -> Result<Self, AppError> {
        let url = reqwest::Url::parse(url)
            .with_context(|| format!("invalid catalog URL {:?}", url))?;
        let http = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .context("failed building catalog HTTP client")?;

        Ok(Self {
            http: Some(http),
            url: url.to_string(),
            snapshot: RwLock::new(Snapshot::default()),
            next_generation: AtomicU64::new(0),
        })
    }

    /// Create an offline catalog seeded with fixed activities (for testing).
    ///
    /// `refresh` returns an error.
    pub fn new_offline(activities: Vec<Activity>) -> Self {
        Self {
            http: None,
            url: String::new(),
            snapshot: RwLock::new(Snapshot {
                generation: 0,
                activities: Arc::new(activities),
            }),
            next_generation: AtomicU64::new(0),
        }
    }

    /// Current baseline.
    pub async fn snapshot(&self) -> Arc<Vec<Activity>> {
        self.snapshot.read().await.activities.clone()
    }

    /// Look up one activity in the current baseline.
    pub async fn find(&self, activity_id: &str) -> Option<Activity> {
        self.snapshot()
            .await
            .iter()
            .find(|a| a.id == activity_id)
            .cloned()
    }

    /// Refetch the baseline. Returns the number of activities loaded, or
    /// `None` if a newer refresh already replaced the snapshot.
    pub async fn refresh(&self) -> Result<Option<usize>, AppError> {
        let generation = self.begin_refresh();
        let activities = self.fetch_activities().await?;
        let count = activities.len();

        if self.apply(generation, activities).await {
            tracing::info!(generation, count, "Catalog refreshed");
            Ok(Some(count))
        } else {
            Ok(None)
        }
    }

    /// Reserve a generation number for a fetch about to start.
    pub fn begin_refresh(&self) -> u64 {
        self.next_generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Install a fetch result unless a newer one is already installed.
    pub async fn apply(&self, generation: u64, activities: Vec<Activity>) -> bool {
        let mut snapshot = self.snapshot.write().await;
        if generation <= snapshot.generation {
            tracing::warn!(
                generation,
                current = snapshot.generation,
                "Dropping stale catalog fetch"
            );
            return false;
        }

        snapshot.generation = generation;
        snapshot.activities = Arc::new(activities);
        true
    }

    /// Fetch the whole activity collection.
    async fn fetch_activities(&self) -> Result<Vec<Activity>, AppError> {
        let http = self
            .http
            .as_ref()
            .ok_or_else(|| AppError::Catalog("Catalog not connected (offline mode)".to_string()))?;

        let response = http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| AppError::Catalog(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Catalog(format!("HTTP {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Catalog(format!("JSON parse error: {}", e)))
    }
}

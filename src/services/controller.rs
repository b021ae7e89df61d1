// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Single-owner filter state with synchronous recomputation.
//!
//! Every setter replaces one slice of state and recomputes the view before
//! returning. Baseline fetches are tagged with tickets so that a slow fetch
//! resolving after a newer one has started cannot overwrite the baseline.

use crate::models::{Activity, Taxonomy, WhatFilter, WhenFilter, WhereFilter};
use crate::services::filter::recompute;
use crate::services::matcher::{
    matched_subcategories, normalize_keyword, resolve_selection, toggle_exclusion, Selection,
};
use std::sync::Arc;

/// Identifies one in-flight baseline fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

/// Filter state owned by one page-level actor.
#[derive(Debug, Clone)]
pub struct FilterController {
    taxonomy: Arc<Taxonomy>,
    baseline: Vec<Activity>,
    where_: WhereFilter,
    when: WhenFilter,
    what: WhatFilter,
    matched: Vec<String>,
    view: Vec<Activity>,
    /// Ticket of the most recently started fetch
    latest_fetch: u64,
}

impl FilterController {
    pub fn new(taxonomy: Arc<Taxonomy>) -> Self {
        Self {
            taxonomy,
            baseline: Vec::new(),
            where_: WhereFilter::default(),
            when: WhenFilter::default(),
            what: WhatFilter::default(),
            matched: Vec::new(),
            view: Vec::new(),
            latest_fetch: 0,
        }
    }

    // ─── Accessors ───────────────────────────────────────────────

    /// Current filtered view.
    pub fn view(&self) -> &[Activity] {
        &self.view
    }

    pub fn baseline(&self) -> &[Activity] {
        &self.baseline
    }

    pub fn where_filter(&self) -> &WhereFilter {
        &self.where_
    }

    pub fn when_filter(&self) -> &WhenFilter {
        &self.when
    }

    pub fn what_filter(&self) -> &WhatFilter {
        &self.what
    }

    /// Subcategories matched by the current keyword.
    pub fn matched_subcategories(&self) -> &[String] {
        &self.matched
    }

    /// Pair that the current keyword and exclusions resolve to.
    pub fn resolved_selection(&self) -> Option<Selection> {
        resolve_selection(&self.taxonomy, &self.matched, &self.what.excluded_subcategories)
    }

    // ─── Baseline ────────────────────────────────────────────────

    /// Replace the baseline directly.
    pub fn set_baseline(&mut self, activities: Vec<Activity>) {
        self.baseline = activities;
        self.refresh();
    }

    /// Start a fetch. Only the result of the latest started fetch is applied.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_fetch += 1;
        FetchTicket(self.latest_fetch)
    }

    /// Apply a completed fetch. Returns `false` when a newer fetch was
    /// started after this one, in which case the result is dropped.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, activities: Vec<Activity>) -> bool {
        if ticket.0 != self.latest_fetch {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.latest_fetch,
                "Dropping stale fetch result"
            );
            return false;
        }

        self.set_baseline(activities);
        true
    }

    // ─── Filter slices ───────────────────────────────────────────

    pub fn set_where(&mut self, where_: WhereFilter) {
        self.where_ = where_;
        self.refresh();
    }

    pub fn set_when(&mut self, when: WhenFilter) {
        self.when = when;
        self.refresh();
    }

    /// Change the keyword. Exclusions always reset, since they refer to the
    /// previous keyword's matched set.
    pub fn set_keyword(&mut self, keyword: &str) {
        self.what.keyword = normalize_keyword(keyword);
        self.what.excluded_subcategories.clear();
        self.matched = matched_subcategories(&self.taxonomy, &self.what.keyword);
        self.refresh();
    }

    pub fn set_category(&mut self, category: Option<String>, subcategory: Option<String>) {
        self.what.category = category;
        self.what.subcategory = subcategory;
        self.refresh();
    }

    /// Toggle a matched subcategory in or out of the exclusion set.
    pub fn toggle_exclusion(&mut self, subcategory: &str) {
        self.what.excluded_subcategories = toggle_exclusion(
            &self.what.excluded_subcategories,
            &self.matched,
            subcategory,
        );
        self.refresh();
    }

    /// Make the resolved pair the active category filter, or clear the
    /// category filter when nothing resolves.
    pub fn apply_resolved_selection(&mut self) {
        match self.resolved_selection() {
            Some(selection) => {
                self.set_category(Some(selection.category), Some(selection.subcategory))
            }
            None => self.set_category(None, None),
        }
    }

    /// Reset every filter slice, keeping the baseline.
    pub fn clear_filters(&mut self) {
        self.where_ = WhereFilter::default();
        self.when = WhenFilter::default();
        self.what = WhatFilter::default();
        self.matched.clear();
        self.refresh();
    }

    fn refresh(&mut self) {
        self.view = recompute(&self.baseline, &self.where_, &self.when, &self.what);
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Combined where/when/what predicate over the baseline set.
//!
//! `recompute` is a pure function: the output is the ordered subsequence of
//! the baseline that passes every predicate. Unparsable dates and missing
//! coordinates degrade to "this predicate does not admit the activity"
//! (or, for the filter side, "no constraint") and never abort the scan.

use crate::models::{Activity, WhatFilter, WhenFilter, WhereFilter};
use crate::services::distance::within_radius;
use crate::services::matcher::{matches_category, matches_keyword};
use crate::services::period::{is_range_text, parse_instant, parse_period, Instant, Period};
use geo::Point;

/// Filter the baseline, preserving its order.
pub fn recompute(
    baseline: &[Activity],
    where_: &WhereFilter,
    when: &WhenFilter,
    what: &WhatFilter,
) -> Vec<Activity> {
    let predicate = Predicate::new(where_, when, what);
    let activities: Vec<Activity> = baseline
        .iter()
        .filter(|activity| predicate.matches(activity))
        .cloned()
        .collect();

    tracing::debug!(
        baseline = baseline.len(),
        matched = activities.len(),
        "Recomputed activity view"
    );
    activities
}

/// Parsed form of the date filter, resolved once per recomputation.
#[derive(Debug, Clone, Copy)]
enum DateConstraint {
    /// Activity period must overlap this one.
    Overlaps(Period),
    /// Activity period must contain this day.
    Contains(Instant),
}

impl DateConstraint {
    fn parse(when: &WhenFilter) -> Option<Self> {
        if when.is_empty() {
            return None;
        }

        // Unparsable filters impose nothing
        let text = when.as_str();
        if is_range_text(text) {
            parse_period(text).map(DateConstraint::Overlaps)
        } else {
            parse_instant(text).map(DateConstraint::Contains)
        }
    }

    fn admits(&self, activity: &Activity) -> bool {
        let Some(period) = parse_period(&activity.when) else {
            return false;
        };

        match self {
            DateConstraint::Overlaps(filter) => filter.overlaps(&period),
            DateConstraint::Contains(day) => period.contains(*day),
        }
    }
}

/// All predicates combined, with filter-side parsing done up front.
struct Predicate<'a> {
    radius: Option<(Point<f64>, f64)>,
    date: Option<DateConstraint>,
    what: &'a WhatFilter,
}

impl<'a> Predicate<'a> {
    fn new(where_: &WhereFilter, when: &WhenFilter, what: &'a WhatFilter) -> Self {
        Self {
            radius: where_.radius(),
            date: DateConstraint::parse(when),
            what,
        }
    }

    fn matches(&self, activity: &Activity) -> bool {
        self.matches_where(activity)
            && self.matches_when(activity)
            && matches_category(activity, self.what)
            && matches_keyword(activity, &self.what.keyword)
    }

    fn matches_where(&self, activity: &Activity) -> bool {
        match self.radius {
            Some((center, radius_km)) => within_radius(activity.point(), Some(center), radius_km),
            None => true,
        }
    }

    fn matches_when(&self, activity: &Activity) -> bool {
        self.date.is_none_or(|date| date.admits(activity))
    }
}

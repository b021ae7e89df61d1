// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Keyword and category matching against the taxonomy.
//!
//! Exclusions only ever refer to subcategories matched by the current
//! keyword. Anything else is ignored rather than reported.

use crate::models::{Activity, Taxonomy, WhatFilter};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Category/subcategory pair chosen as the active filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Selection {
    pub category: String,
    pub subcategory: String,
}

/// Subcategories relevant to a keyword, in taxonomy order.
///
/// A subcategory matches when its label contains the keyword, or when its
/// category name does. Comparison is case-insensitive; an empty keyword
/// matches nothing.
pub fn matched_subcategories(taxonomy: &Taxonomy, keyword: &str) -> Vec<String> {
    let keyword = normalize_keyword(keyword);
    if keyword.is_empty() {
        return Vec::new();
    }

    taxonomy
        .pairs()
        .filter(|(category, sub)| {
            sub.to_lowercase().contains(&keyword) || category.to_lowercase().contains(&keyword)
        })
        .map(|(_, sub)| sub.to_string())
        .collect()
}

/// Toggle `sub` in the exclusion set. No-op when `sub` is not matched.
pub fn toggle_exclusion(current: &[String], matched: &[String], sub: &str) -> Vec<String> {
    if !matched.iter().any(|m| m == sub) {
        return current.to_vec();
    }

    if current.iter().any(|e| e == sub) {
        current.iter().filter(|e| *e != sub).cloned().collect()
    } else {
        let mut next = current.to_vec();
        next.push(sub.to_string());
        next
    }
}

/// Drop exclusions that are not part of the matched set.
pub fn retain_matched(matched: &[String], excluded: &[String]) -> Vec<String> {
    excluded.iter().fold(Vec::new(), |acc, sub| {
        if acc.contains(sub) {
            acc
        } else {
            toggle_exclusion(&acc, matched, sub)
        }
    })
}

/// Pick the active pair: the last matched, non-excluded subcategory in
/// taxonomy order.
pub fn resolve_selection(
    taxonomy: &Taxonomy,
    matched: &[String],
    excluded: &[String],
) -> Option<Selection> {
    taxonomy
        .pairs()
        .filter(|(_, sub)| {
            matched.iter().any(|m| m == *sub) && !excluded.iter().any(|e| e == *sub)
        })
        .last()
        .map(|(category, subcategory)| Selection {
            category: category.to_string(),
            subcategory: subcategory.to_string(),
        })
}

/// Case-insensitive substring match on title or description.
pub fn matches_keyword(activity: &Activity, keyword: &str) -> bool {
    let keyword = normalize_keyword(keyword);
    if keyword.is_empty() {
        return true;
    }

    activity.title.to_lowercase().contains(&keyword)
        || activity.description.to_lowercase().contains(&keyword)
}

/// Category/subcategory inclusion with exclusions applied.
pub fn matches_category(activity: &Activity, what: &WhatFilter) -> bool {
    let Some(category) = what.category.as_deref() else {
        return true;
    };

    if activity.category.as_deref() != Some(category) {
        return false;
    }

    if let Some(subcategory) = what.subcategory.as_deref() {
        if activity.subcategory.as_deref() != Some(subcategory) {
            return false;
        }
    }

    !activity
        .subcategory
        .as_ref()
        .is_some_and(|sub| what.excluded_subcategories.contains(sub))
}

pub fn normalize_keyword(keyword: &str) -> String {
    keyword.trim().to_lowercase()
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Free-form date and date-range parsing.
//!
//! Parsing never fails loudly: unparsable input yields `None`, and callers
//! decide what a missing date means for their predicate.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// A point in time used for date comparisons.
pub type Instant = DateTime<Utc>;

/// Typographic dashes accepted as range separators.
const DASH_VARIANTS: [char; 3] = ['\u{2013}', '\u{2014}', '\u{2212}'];

/// Closed interval of instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub from: Instant,
    pub to: Instant,
}

impl Period {
    pub fn single(instant: Instant) -> Self {
        Self {
            from: instant,
            to: instant,
        }
    }

    /// Closed-interval intersection test.
    pub fn overlaps(&self, other: &Period) -> bool {
        self.from <= other.to && other.from <= self.to
    }

    /// Inclusive of both endpoints.
    pub fn contains(&self, instant: Instant) -> bool {
        self.from <= instant && instant <= self.to
    }
}

/// Parse a single date.
///
/// Generic formats (RFC 3339, ISO 8601) are tried first. Otherwise the text
/// must be three integers separated by `/`, `-` or `.`: `YYYY/MM/DD` when the
/// first part is above 31, `DD/MM/YYYY` otherwise.
pub fn parse_instant(text: &str) -> Option<Instant> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    parse_generic(text).or_else(|| parse_numeric(text))
}

/// Parse a single date or a `"D1 - D2"` range.
///
/// A range whose second bound is unparsable collapses to the first day.
/// A range whose first bound is unparsable is rejected.
pub fn parse_period(text: &str) -> Option<Period> {
    let normalized = normalize_dashes(text);
    let normalized = normalized.trim();
    if normalized.is_empty() {
        return None;
    }

    // ISO dates contain hyphens of their own
    if let Some(instant) = parse_instant(normalized) {
        return Some(Period::single(instant));
    }

    // A typographic dash can only be the range separator
    if text.contains(DASH_VARIANTS) {
        let tokens: Vec<&str> = text
            .split(DASH_VARIANTS)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect();
        if let [first, second] = tokens.as_slice() {
            return period_from_bounds(first, second);
        }
    }

    let tokens = split_tokens(normalized, "-");
    match tokens.as_slice() {
        [single] => parse_instant(single).map(Period::single),
        [first, second] => period_from_bounds(first, second),
        _ => match split_tokens(normalized, " - ").as_slice() {
            [first, second] => period_from_bounds(first, second),
            _ => None,
        },
    }
}

/// Whether the text is written as a range (contains a dash of any kind).
pub fn is_range_text(text: &str) -> bool {
    text.contains('-') || text.contains(DASH_VARIANTS)
}

fn period_from_bounds(first: &str, second: &str) -> Option<Period> {
    let from = parse_instant(first)?;
    let to = parse_instant(second).unwrap_or(from);
    Some(Period { from, to })
}

fn normalize_dashes(text: &str) -> String {
    text.replace(DASH_VARIANTS, "-")
}

fn split_tokens<'a>(text: &'a str, separator: &str) -> Vec<&'a str> {
    text.split(separator)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

fn parse_generic(text: &str) -> Option<Instant> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(start_of_day)
}

fn parse_numeric(text: &str) -> Option<Instant> {
    let parts: Vec<u32> = text
        .split(['/', '-', '.'])
        .map(|part| part.trim().parse::<u32>().ok())
        .collect::<Option<_>>()?;

    let [a, b, c] = parts.as_slice() else {
        return None;
    };

    let (year, month, day) = if *a > 31 { (*a, *b, *c) } else { (*c, *b, *a) };
    let year = i32::try_from(year).ok()?;
    NaiveDate::from_ymd_opt(year, month, day).and_then(start_of_day)
}

fn start_of_day(date: NaiveDate) -> Option<Instant> {
    date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc())
}

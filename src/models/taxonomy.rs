// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fixed category → subcategory taxonomy.
//!
//! The taxonomy is ordered: category order, then subcategory order within a
//! category. Selection tie-breaks depend on this order, so it is never sorted.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A top-level category with its ordered subcategories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Category {
    pub name: String,
    pub subcategories: Vec<String>,
}

/// Immutable, ordered taxonomy shared by the matcher and the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Taxonomy {
    categories: Vec<Category>,
}

const DEFAULT_TAXONOMY: &[(&str, &[&str])] = &[
    (
        "Sport",
        &[
            "Sports collectifs",
            "Sports individuels",
            "Sports nautiques",
            "Sports de glisse",
            "Randonnée",
        ],
    ),
    (
        "Culture",
        &["Musée", "Exposition", "Théâtre", "Cinéma", "Patrimoine"],
    ),
    (
        "Musique",
        &["Concert", "Festival", "Opéra", "Karaoké", "Scène ouverte"],
    ),
    (
        "Gastronomie",
        &[
            "Restaurant",
            "Bar",
            "Marché",
            "Dégustation",
            "Cours de cuisine",
        ],
    ),
    (
        "Nature",
        &["Parc", "Jardin", "Plage", "Balade", "Observation"],
    ),
    (
        "Loisirs",
        &[
            "Jeux",
            "Atelier",
            "Parc d'attractions",
            "Escape game",
            "Bien-être",
        ],
    ),
];

impl Default for Taxonomy {
    fn default() -> Self {
        let categories = DEFAULT_TAXONOMY
            .iter()
            .map(|(name, subs)| Category {
                name: name.to_string(),
                subcategories: subs.iter().map(|s| s.to_string()).collect(),
            })
            .collect();
        Self { categories }
    }
}

impl Taxonomy {
    /// Build a taxonomy, rejecting empty input and duplicate names.
    pub fn new(categories: Vec<Category>) -> Result<Self, TaxonomyError> {
        if categories.is_empty() {
            return Err(TaxonomyError::Empty);
        }

        let mut category_names = HashSet::new();
        let mut subcategory_names = HashSet::new();
        for category in &categories {
            if !category_names.insert(category.name.as_str()) {
                return Err(TaxonomyError::Duplicate(category.name.clone()));
            }
            for sub in &category.subcategories {
                if !subcategory_names.insert(sub.as_str()) {
                    return Err(TaxonomyError::Duplicate(sub.clone()));
                }
            }
        }

        Ok(Self { categories })
    }

    /// Load a taxonomy from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, TaxonomyError> {
        let json_data = fs::read_to_string(path.as_ref())
            .map_err(|e| TaxonomyError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load a taxonomy from a JSON array of `{name, subcategories}` objects.
    pub fn load_from_json(json_data: &str) -> Result<Self, TaxonomyError> {
        let categories: Vec<Category> = serde_json::from_str(json_data)
            .map_err(|e| TaxonomyError::ParseError(e.to_string()))?;
        let taxonomy = Self::new(categories)?;

        tracing::info!(
            categories = taxonomy.categories.len(),
            subcategories = taxonomy.pairs().count(),
            "Loaded taxonomy"
        );
        Ok(taxonomy)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All `(category, subcategory)` pairs in enumeration order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.categories.iter().flat_map(|c| {
            c.subcategories
                .iter()
                .map(move |s| (c.name.as_str(), s.as_str()))
        })
    }

    /// Category owning the given subcategory.
    pub fn category_of(&self, subcategory: &str) -> Option<&str> {
        self.pairs()
            .find(|(_, sub)| *sub == subcategory)
            .map(|(category, _)| category)
    }
}

/// Errors from taxonomy loading.
#[derive(Debug, thiserror::Error)]
pub enum TaxonomyError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse taxonomy JSON: {0}")]
    ParseError(String),

    #[error("Taxonomy has no categories")]
    Empty,

    #[error("Duplicate taxonomy entry: {0}")]
    Duplicate(String),
}

//! Product catalog types
//!
//! The catalog service returns a list of products; the pipeline turns that list
//! into a [`CatalogMapping`] keyed by the numeric product id.

use super::error::SalesError;
use serde::Deserialize;
use std::collections::HashMap;

/// Product as returned by the catalog service
///
/// Only the fields used for enrichment are deserialized; everything else in
/// the payload is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogProduct {
    pub id: u64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}

/// Catalog response body: `{"products": [...]}`
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub products: Vec<CatalogProduct>,
}

/// Metadata attached to a matched transaction
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub category: Option<String>,
    pub brand: Option<String>,
    pub rating: Option<f64>,
}

/// Numeric product id -> catalog metadata
///
/// Built once per run. Lookups are exact integer matches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogMapping {
    entries: HashMap<u64, CatalogEntry>,
}

impl CatalogMapping {
    /// Create an empty mapping (every lookup misses)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mapping from a product list
    ///
    /// Later duplicates of the same id replace earlier ones.
    pub fn from_products(products: Vec<CatalogProduct>) -> Self {
        let entries = products
            .into_iter()
            .map(|product| {
                (
                    product.id,
                    CatalogEntry {
                        category: product.category,
                        brand: product.brand,
                        rating: product.rating,
                    },
                )
            })
            .collect();

        Self { entries }
    }

    /// Build a mapping from the outcome of a catalog fetch
    ///
    /// A failed fetch yields an empty mapping, so every record ends up
    /// unmatched instead of aborting the run.
    pub fn from_fetch(fetch: Result<Vec<CatalogProduct>, SalesError>) -> Self {
        match fetch {
            Ok(products) => Self::from_products(products),
            Err(_) => Self::new(),
        }
    }

    /// Look up the entry for a numeric product id
    pub fn get(&self, product_id: u64) -> Option<&CatalogEntry> {
        self.entries.get(&product_id)
    }

    /// Number of catalog entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

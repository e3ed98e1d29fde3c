//! Catalog enrichment
//!
//! Joins each clean record against the catalog mapping by the numeric suffix
//! of its product id (`P101` -> `101`). Each record is enriched independently;
//! a miss or an unparseable id only affects that record.

use crate::types::{CatalogMapping, EnrichedRecord, SaleRecord};

/// Numeric catalog key of a product id
///
/// Drops the one-letter prefix and parses the rest as an integer.
/// Returns `None` for empty or non-numeric suffixes.
pub fn catalog_key(product_id: &str) -> Option<u64> {
    let mut chars = product_id.chars();
    chars.next()?;
    chars.as_str().parse().ok()
}

/// Enrich a single record
pub fn enrich_record(record: SaleRecord, mapping: &CatalogMapping) -> EnrichedRecord {
    match catalog_key(&record.product_id).and_then(|key| mapping.get(key)) {
        Some(entry) => EnrichedRecord {
            api_category: entry.category.clone(),
            api_brand: entry.brand.clone(),
            api_rating: entry.rating,
            api_match: true,
            record,
        },
        None => EnrichedRecord {
            record,
            api_category: None,
            api_brand: None,
            api_rating: None,
            api_match: false,
        },
    }
}

/// Enrich every record, preserving order
pub fn enrich_sales_data(records: &[SaleRecord], mapping: &CatalogMapping) -> Vec<EnrichedRecord> {
    records
        .iter()
        .cloned()
        .map(|record| enrich_record(record, mapping))
        .collect()
}

/// Number of enriched records with a catalog match
pub fn matched_count(records: &[EnrichedRecord]) -> usize {
    records.iter().filter(|r| r.api_match).count()
}

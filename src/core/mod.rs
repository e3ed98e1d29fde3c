//! Core business logic module
//!
//! This module contains the pipeline stages that operate on in-memory records:
//! - `traits` - Seams for the catalog service and filter input
//! - `validator` - Record validation and optional region/amount filters
//! - `analytics` - Aggregate views over the clean working set
//! - `enricher` - Catalog join producing enriched records

pub mod analytics;
pub mod enricher;
pub mod traits;
pub mod validator;

pub use analytics::SalesAnalytics;
pub use enricher::enrich_sales_data;
pub use traits::{CatalogSource, FilterSource};
pub use validator::{validate_and_filter, FilterChoices, ValidationSummary};

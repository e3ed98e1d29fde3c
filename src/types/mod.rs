//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: Parsed and enriched sales records
//! - `catalog`: Product catalog payload and lookup mapping
//! - `error`: Error types for the pipeline

pub mod catalog;
pub mod error;
pub mod transaction;

pub use catalog::{CatalogEntry, CatalogMapping, CatalogProduct, CatalogResponse};
pub use error::SalesError;
pub use transaction::{CustomerId, DateToken, EnrichedRecord, ProductName, RegionCode, SaleRecord};

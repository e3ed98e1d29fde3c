//! I/O module
//!
//! Handles reading the sales log, the pipe-delimited format and the catalog service.
//!
//! # Components
//!
//! - `sales_reader` - File reading with encoding detection and header stripping
//! - `pipe_format` - Line parsing and enriched export serialization
//! - `catalog_client` - Catalog sources (HTTP, offline, static)

pub mod catalog_client;
pub mod pipe_format;
pub mod sales_reader;

pub use catalog_client::{HttpCatalog, OfflineCatalog, StaticCatalog};
pub use pipe_format::{parse_line, parse_transactions, write_enriched};
pub use sales_reader::read_sales_lines;

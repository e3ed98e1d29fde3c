//! Sales Analytics Library
//! # Overview
//!
//! This library processes a pipe-delimited sales transaction log: it parses and
//! cleans the raw lines, validates and optionally filters the records, computes
//! sales analytics, enriches each record from a product catalog service and
//! writes an enriched export plus a text report.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (SaleRecord, EnrichedRecord, CatalogMapping, etc.)
//! - [`config`] - Paths, catalog settings, analytics parameters and filters
//! - [`cli`] - CLI argument parsing and the interactive filter prompt
//! - [`io`] - Input decoding, the pipe-delimited format and catalog clients
//! - [`core`] - Business logic components:
//!   - [`core::validator`] - Validation and region/amount filtering
//!   - [`core::analytics`] - Revenue, region, product, customer and daily views
//!   - [`core::enricher`] - Catalog join by numeric product id
//! - [`report`] - Text report and enriched export
//! - [`pipeline`] - Stage orchestration for a full run
//! - [`logging`] - Tracing subscriber setup
//!
//! # Data Flow
//!
//! ```text
//! raw lines -> SaleRecord -> clean SaleRecord -> SalesAnalytics
//!                                  |
//!                                  +-> EnrichedRecord -> export file
//!                                                     -> report file
//! ```
//!
//! Malformed lines and invalid records are dropped and counted, never fatal.
//! A failed catalog fetch leaves every record unmatched.

// Module declarations
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod types;

pub use config::{AnalyticsConfig, FilterOptions, PipelineConfig};
pub use core::{enrich_sales_data, validate_and_filter, CatalogSource, FilterSource, SalesAnalytics};
pub use io::{parse_line, parse_transactions, read_sales_lines};
pub use pipeline::{create_catalog, PipelineOutcome, SalesPipeline};
pub use report::{export_enriched, render_report, write_report, ReportStatus};
pub use types::{CatalogMapping, CatalogProduct, EnrichedRecord, SaleRecord, SalesError};

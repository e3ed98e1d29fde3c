//! End-to-end pipeline
//!
//! Runs the ten stages of a sales analytics run in order:
//!
//! ```text
//! read -> parse -> offer filters -> validate/filter -> analytics
//!      -> fetch catalog -> enrich -> export -> report -> done
//! ```
//!
//! Every stage hands a value to the next; nothing flows backwards. Degraded
//! conditions (missing input, catalog failure, empty clean set) are logged
//! and the run continues with an empty or unmatched result.

use crate::config::PipelineConfig;
use crate::core::analytics::SalesAnalytics;
use crate::core::enricher::{enrich_sales_data, matched_count};
use crate::core::traits::{CatalogSource, FilterSource};
use crate::core::validator::{filter_choices, validate_and_filter, ValidationSummary};
use crate::io::catalog_client::{HttpCatalog, OfflineCatalog};
use crate::io::pipe_format::parse_transactions;
use crate::io::sales_reader::read_sales_lines;
use crate::report::export::export_enriched;
use crate::report::format::format_currency;
use crate::report::renderer::{write_report, ReportStatus};
use crate::types::{CatalogMapping, SalesError};
use rust_decimal::Decimal;
use tracing::{debug, error, info, warn};

/// What a pipeline run produced
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutcome {
    /// Non-blank input lines after header removal
    pub lines_read: usize,
    /// Lines that parsed into records
    pub parsed_count: usize,
    /// Validation and filter counters
    pub summary: ValidationSummary,
    /// Analytics over the clean working set
    pub analytics: SalesAnalytics,
    /// Products returned by the catalog (0 when the fetch failed)
    pub catalog_size: usize,
    /// Clean records that matched a catalog entry
    pub matched: usize,
    /// Whether the enriched export was written
    pub export_written: bool,
    /// Whether the report was written
    pub report: ReportStatus,
}

/// Pipeline bound to a configuration and a catalog source
pub struct SalesPipeline {
    config: PipelineConfig,
    catalog: Box<dyn CatalogSource>,
}

impl SalesPipeline {
    pub fn new(config: PipelineConfig, catalog: Box<dyn CatalogSource>) -> Self {
        Self { config, catalog }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run every stage once
    ///
    /// # Errors
    ///
    /// Returns an error only when the filter source fails or the report cannot
    /// be written. Input, catalog and export problems are logged and degrade
    /// the run instead.
    pub fn run(&self, filters: &mut dyn FilterSource) -> Result<PipelineOutcome, SalesError> {
        let config = &self.config;

        info!("[1/10] Reading sales data...");
        let lines = read_sales_lines(&config.input_path).unwrap_or_else(|e| {
            error!(error = %e, "could not read sales data");
            Vec::new()
        });
        info!(lines = lines.len(), "read transactions");

        info!("[2/10] Parsing and cleaning data...");
        let lines_read = lines.len();
        let records = parse_transactions(&lines);
        let parsed_count = records.len();
        info!(parsed = parsed_count, dropped = lines_read - parsed_count, "parsed records");

        info!("[3/10] Filter options available");
        let filter_options = filters.select_filters(&filter_choices(&records))?;
        if filter_options.is_active() {
            info!(?filter_options, "applying filters");
        } else {
            debug!("no filters selected");
        }

        info!("[4/10] Validating transactions...");
        let (clean, summary) = validate_and_filter(records, &filter_options);
        info!(
            valid = summary.final_count,
            invalid = summary.invalid,
            filtered_by_region = summary.filtered_by_region,
            filtered_by_amount = summary.filtered_by_amount,
            "validation complete"
        );

        info!("[5/10] Analyzing sales data...");
        let analytics = SalesAnalytics::compute(&clean, &config.analytics);
        info!("total revenue: {}", format_currency(analytics.total_revenue));
        if let Some(peak) = &analytics.peak_day {
            info!(
                date = %peak.date,
                transactions = peak.transaction_count,
                "peak sales day: {}",
                format_currency(peak.revenue)
            );
        }
        debug!(
            low_performers = analytics.low_performers.len(),
            threshold = config.analytics.low_stock_threshold,
            "low-performing products"
        );

        info!("[6/10] Fetching product data from API...");
        let fetch = self.catalog.fetch_products();
        if let Err(e) = &fetch {
            warn!(error = %e, "catalog unavailable, records will be unmatched");
        }
        let mapping = CatalogMapping::from_fetch(fetch);
        info!(products = mapping.len(), "fetched products");

        info!("[7/10] Enriching sales data...");
        let enriched = enrich_sales_data(&clean, &mapping);
        let matched = matched_count(&enriched);
        info!(
            "enriched {}/{} transactions ({:.1}%)",
            matched,
            clean.len(),
            match_rate(matched, clean.len()).round_dp(1)
        );

        info!("[8/10] Saving enriched data...");
        let export_written = match export_enriched(&config.enriched_output_path, &enriched) {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, "error saving enriched data");
                false
            }
        };

        info!("[9/10] Generating report...");
        let report = write_report(
            &config.report_output_path,
            &clean,
            &enriched,
            config.analytics.report_top_n,
        )?;

        info!("[10/10] Process complete!");

        Ok(PipelineOutcome {
            lines_read,
            parsed_count,
            summary,
            analytics,
            catalog_size: mapping.len(),
            matched,
            export_written,
            report,
        })
    }
}

fn match_rate(matched: usize, total: usize) -> Decimal {
    if total == 0 {
        Decimal::ZERO
    } else {
        Decimal::from(matched) * Decimal::ONE_HUNDRED / Decimal::from(total)
    }
}

/// Create the catalog source for a run
///
/// `offline` skips the network entirely. A client that cannot be built is
/// logged and replaced by the offline catalog.
pub fn create_catalog(config: &PipelineConfig, offline: bool) -> Box<dyn CatalogSource> {
    if offline {
        return Box::new(OfflineCatalog);
    }

    match HttpCatalog::new(&config.catalog_url, config.catalog_timeout) {
        Ok(catalog) => {
            debug!(url = %catalog.url(), timeout = ?config.catalog_timeout, "catalog client ready");
            Box::new(catalog)
        }
        Err(e) => {
            warn!(error = %e, "could not build catalog client, continuing offline");
            Box::new(OfflineCatalog)
        }
    }
}

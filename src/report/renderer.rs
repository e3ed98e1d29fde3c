//! Text report rendering
//!
//! [`render_report`] is pure: it takes the generation time as an argument and
//! returns the report text, or `None` when there is nothing to report.
//! [`write_report`] adds the clock and the file system.

use crate::core::analytics::{
    calculate_total_revenue, customer_analysis, daily_sales_trend, product_totals,
    region_wise_sales,
};
use crate::core::enricher::matched_count;
use crate::report::format::{format_currency, format_percentage};
use crate::types::{EnrichedRecord, SaleRecord, SalesError};
use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const TITLE_RULE_WIDTH: usize = 60;

/// Outcome of a report request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportStatus {
    /// The report was written to this path
    Written(PathBuf),
    /// There were no clean records; nothing was written
    Skipped,
}

/// Render the sales report
///
/// Sections, in order: header, overall summary, region-wise performance, top
/// products by revenue, top customers by spend, daily trend, enrichment
/// summary. `top_n` bounds the product and customer rankings.
///
/// Returns `None` when `clean` is empty.
pub fn render_report(
    clean: &[SaleRecord],
    enriched: &[EnrichedRecord],
    generated_at: NaiveDateTime,
    top_n: usize,
) -> Option<String> {
    if clean.is_empty() {
        return None;
    }

    let mut report = ReportBuilder::default();
    let total_revenue = calculate_total_revenue(clean);
    let count = clean.len();

    report.line("SALES ANALYTICS REPORT");
    report.line("=".repeat(TITLE_RULE_WIDTH));
    report.line(format!("Generated: {}", generated_at.format("%Y-%m-%d %H:%M:%S")));
    report.line(format!("Records Processed: {count}"));
    report.blank();

    report.section("OVERALL SUMMARY");
    let average = total_revenue / Decimal::from(count);
    let first_date = clean.iter().map(|r| r.date.as_str()).min().unwrap_or_default();
    let last_date = clean.iter().map(|r| r.date.as_str()).max().unwrap_or_default();
    report.line(format!("Total Revenue: {}", format_currency(total_revenue)));
    report.line(format!("Total Transactions: {count}"));
    report.line(format!("Average Order Value: {}", format_currency(average)));
    report.line(format!("Date Range: {first_date} to {last_date}"));
    report.blank();

    report.section("REGION-WISE PERFORMANCE");
    for region in region_wise_sales(clean) {
        report.line(format!(
            "{}: {} | {}% | {} transactions",
            region.region,
            format_currency(region.total_sales),
            format_percentage(region.percentage),
            region.transaction_count
        ));
    }
    report.blank();

    report.section(&format!("TOP {top_n} PRODUCTS"));
    let mut products = product_totals(clean);
    products.sort_by(|a, b| b.revenue.cmp(&a.revenue));
    for (rank, product) in products.iter().take(top_n).enumerate() {
        report.line(format!(
            "{}. {} | Qty: {} | Revenue: {}",
            rank + 1,
            product.product_name,
            product.quantity,
            format_currency(product.revenue)
        ));
    }
    report.blank();

    report.section(&format!("TOP {top_n} CUSTOMERS"));
    for (rank, customer) in customer_analysis(clean).iter().take(top_n).enumerate() {
        report.line(format!(
            "{}. {} | Total Spent: {}",
            rank + 1,
            customer.customer_id,
            format_currency(customer.total_spent)
        ));
    }
    report.blank();

    report.section("DAILY SALES TREND");
    for day in daily_sales_trend(clean) {
        report.line(format!(
            "{}: {} | {} txns | {} customers",
            day.date,
            format_currency(day.revenue),
            day.transaction_count,
            day.unique_customers
        ));
    }
    report.blank();

    report.section("API ENRICHMENT SUMMARY");
    let matched = matched_count(enriched);
    let success_rate = if enriched.is_empty() {
        Decimal::ZERO
    } else {
        Decimal::from(matched) / Decimal::from(enriched.len()) * Decimal::ONE_HUNDRED
    };
    let unmatched: BTreeSet<&str> = enriched
        .iter()
        .filter(|e| !e.api_match)
        .map(|e| e.record.product_name.as_str())
        .collect();
    report.line(format!("Total Products Enriched: {matched}"));
    report.line(format!("Success Rate: {}%", format_percentage(success_rate)));
    report.line("Products not enriched:");
    for name in unmatched {
        report.line(format!("- {name}"));
    }

    Some(report.finish())
}

/// Render the report and write it to `path`
///
/// Creates the parent directory if needed. When `clean` is empty, nothing is
/// written and [`ReportStatus::Skipped`] is returned.
pub fn write_report(
    path: &Path,
    clean: &[SaleRecord],
    enriched: &[EnrichedRecord],
    top_n: usize,
) -> Result<ReportStatus, SalesError> {
    let Some(text) = render_report(clean, enriched, Local::now().naive_local(), top_n) else {
        warn!("no transactions available, report not generated");
        return Ok(ReportStatus::Skipped);
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)?;

    info!(path = %path.display(), "sales report written");
    Ok(ReportStatus::Written(path.to_path_buf()))
}

#[derive(Default)]
struct ReportBuilder {
    lines: Vec<String>,
}

impl ReportBuilder {
    fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn section(&mut self, title: &str) {
        self.line(title);
        self.line("-".repeat(TITLE_RULE_WIDTH));
    }

    fn finish(self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

//! Pipeline configuration
//!
//! Output locations, catalog settings, analytics parameters and record filters
//! are carried explicitly in these structures rather than baked into call sites.

use crate::types::SalesError;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

/// Default location of the raw sales log
pub const DEFAULT_INPUT_PATH: &str = "data/sales_data.txt";

/// Default location of the enriched export
pub const DEFAULT_ENRICHED_OUTPUT_PATH: &str = "data/enriched_sales_data.txt";

/// Default location of the text report
pub const DEFAULT_REPORT_OUTPUT_PATH: &str = "output/sales_report.txt";

/// Default catalog endpoint
pub const DEFAULT_CATALOG_URL: &str = "https://dummyjson.com/products?limit=100";

/// Default catalog request timeout
pub const DEFAULT_CATALOG_TIMEOUT: Duration = Duration::from_secs(10);

/// Parameters for the analytics views
#[derive(Clone, Debug, PartialEq)]
pub struct AnalyticsConfig {
    /// Number of products in the quantity ranking (default: 5)
    pub top_n: usize,
    /// Products selling strictly fewer units are low performers (default: 10)
    pub low_stock_threshold: i64,
    /// Number of rows in the report's product and customer rankings (default: 5)
    pub report_top_n: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            top_n: 5,
            low_stock_threshold: 10,
            report_top_n: 5,
        }
    }
}

impl AnalyticsConfig {
    /// Create an AnalyticsConfig, falling back to defaults for non-positive values
    pub fn new(top_n: usize, low_stock_threshold: i64) -> Self {
        let default = Self::default();

        let top_n = if top_n == 0 {
            warn!(top_n, default = default.top_n, "invalid top_n, using default");
            default.top_n
        } else {
            top_n
        };

        let low_stock_threshold = if low_stock_threshold <= 0 {
            warn!(
                low_stock_threshold,
                default = default.low_stock_threshold,
                "invalid low_stock_threshold, using default"
            );
            default.low_stock_threshold
        } else {
            low_stock_threshold
        };

        Self {
            top_n,
            low_stock_threshold,
            ..default
        }
    }
}

/// Settings for one pipeline run
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineConfig {
    /// Raw sales log to read
    pub input_path: PathBuf,
    /// Where the enriched pipe-delimited export is written
    pub enriched_output_path: PathBuf,
    /// Where the text report is written
    pub report_output_path: PathBuf,
    /// Catalog endpoint returning `{"products": [...]}`
    pub catalog_url: String,
    /// Timeout for the single catalog request
    pub catalog_timeout: Duration,
    /// Analytics parameters
    pub analytics: AnalyticsConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            enriched_output_path: PathBuf::from(DEFAULT_ENRICHED_OUTPUT_PATH),
            report_output_path: PathBuf::from(DEFAULT_REPORT_OUTPUT_PATH),
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            catalog_timeout: DEFAULT_CATALOG_TIMEOUT,
            analytics: AnalyticsConfig::default(),
        }
    }
}

/// Optional record filters applied after validation
///
/// `None` leaves a dimension unconstrained. A threshold of zero is an
/// ordinary threshold, not "unset".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterOptions {
    /// Keep only records whose region matches exactly
    pub region: Option<String>,
    /// Drop records whose amount is below this value
    pub min_amount: Option<Decimal>,
    /// Drop records whose amount is above this value
    pub max_amount: Option<Decimal>,
}

impl FilterOptions {
    /// Whether any filter is set
    pub fn is_active(&self) -> bool {
        self.region.is_some() || self.min_amount.is_some() || self.max_amount.is_some()
    }
}

/// Parse an amount threshold typed by the operator
///
/// Thousands separators and surrounding whitespace are ignored.
pub fn parse_amount(value: &str) -> Result<Decimal, SalesError> {
    let cleaned = value.replace(',', "");
    Decimal::from_str(cleaned.trim()).map_err(|_| SalesError::invalid_amount(value))
}

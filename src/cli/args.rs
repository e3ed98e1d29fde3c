use crate::config::{
    parse_amount, AnalyticsConfig, FilterOptions, PipelineConfig, DEFAULT_CATALOG_URL,
    DEFAULT_ENRICHED_OUTPUT_PATH, DEFAULT_INPUT_PATH, DEFAULT_REPORT_OUTPUT_PATH,
};
use crate::logging::{LogConfig, LogFormat};
use clap::{ArgAction, Parser, ValueEnum};
use rust_decimal::Decimal;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::time::Duration;

/// Analyze a pipe-delimited sales log and write an enriched export and report
#[derive(Parser, Debug)]
#[command(name = "sales-analytics")]
#[command(about = "Analyze a sales transaction log and enrich it from the product catalog", long_about = None)]
pub struct CliArgs {
    /// Pipe-delimited sales log
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT_PATH, help = "Path to the sales data file")]
    pub input_file: PathBuf,

    /// Enriched export location
    #[arg(long = "enriched-output", value_name = "PATH", default_value = DEFAULT_ENRICHED_OUTPUT_PATH)]
    pub enriched_output: PathBuf,

    /// Text report location
    #[arg(long = "report-output", value_name = "PATH", default_value = DEFAULT_REPORT_OUTPUT_PATH)]
    pub report_output: PathBuf,

    /// Product catalog endpoint
    #[arg(long = "catalog-url", value_name = "URL", default_value = DEFAULT_CATALOG_URL)]
    pub catalog_url: String,

    /// Catalog request timeout in seconds
    #[arg(long = "catalog-timeout", value_name = "SECS", default_value_t = 10)]
    pub catalog_timeout_secs: u64,

    /// Skip the catalog request; every record is reported as unmatched
    #[arg(long)]
    pub offline: bool,

    /// Number of products in the quantity ranking
    #[arg(
        long = "top-n",
        value_name = "N",
        help = "Number of top-selling products (default: 5)"
    )]
    pub top_n: Option<usize>,

    /// Unit threshold for low-performing products
    #[arg(
        long = "low-threshold",
        value_name = "UNITS",
        help = "Products selling fewer units are low performers (default: 10)"
    )]
    pub low_threshold: Option<i64>,

    /// Keep only this region
    #[arg(long, value_name = "REGION")]
    pub region: Option<String>,

    /// Drop transactions below this amount
    #[arg(long = "min-amount", value_name = "AMOUNT", value_parser = parse_amount)]
    pub min_amount: Option<Decimal>,

    /// Drop transactions above this amount
    #[arg(long = "max-amount", value_name = "AMOUNT", value_parser = parse_amount)]
    pub max_amount: Option<Decimal>,

    /// Ask for filters on standard input instead of using the filter flags
    #[arg(short = 'i', long)]
    pub interactive: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Log output format
    #[arg(long = "log-format", value_name = "FORMAT", default_value = "pretty")]
    pub log_format: LogFormatArg,
}

/// Log formats selectable on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl CliArgs {
    /// Build the pipeline configuration from the arguments
    ///
    /// Analytics parameters that were not given keep their defaults; given
    /// values go through [`AnalyticsConfig::new`] validation.
    pub fn to_pipeline_config(&self) -> PipelineConfig {
        let analytics = if self.top_n.is_some() || self.low_threshold.is_some() {
            let default = AnalyticsConfig::default();
            AnalyticsConfig::new(
                self.top_n.unwrap_or(default.top_n),
                self.low_threshold.unwrap_or(default.low_stock_threshold),
            )
        } else {
            AnalyticsConfig::default()
        };

        PipelineConfig {
            input_path: self.input_file.clone(),
            enriched_output_path: self.enriched_output.clone(),
            report_output_path: self.report_output.clone(),
            catalog_url: self.catalog_url.clone(),
            catalog_timeout: Duration::from_secs(self.catalog_timeout_secs),
            analytics,
        }
    }

    /// Filters given with `--region`, `--min-amount` and `--max-amount`
    ///
    /// A blank region counts as not given.
    pub fn to_filter_options(&self) -> FilterOptions {
        FilterOptions {
            region: self
                .region
                .as_deref()
                .map(str::trim)
                .filter(|region| !region.is_empty())
                .map(str::to_string),
            min_amount: self.min_amount,
            max_amount: self.max_amount,
        }
    }

    /// Logging configuration for the chosen verbosity and format
    ///
    /// Colors are used only when stderr is a terminal. Module paths are shown
    /// at trace verbosity (`-vv`).
    pub fn to_log_config(&self) -> LogConfig {
        self.log_config_for(io::stderr().is_terminal())
    }

    fn log_config_for(&self, ansi: bool) -> LogConfig {
        let format = match self.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        };
        LogConfig::from_verbosity(self.verbose)
            .with_format(format)
            .with_ansi(ansi)
            .with_target(self.verbose >= 2)
    }
}

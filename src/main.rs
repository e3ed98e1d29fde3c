//! Sales Analytics CLI
//!
//! Command-line interface for analyzing a pipe-delimited sales log.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- data/sales_data.txt
//! cargo run -- --region North --min-amount 1000 data/sales_data.txt
//! cargo run -- --interactive data/sales_data.txt
//! cargo run -- --offline --report-output out/report.txt data/sales_data.txt
//! ```
//!
//! The program reads the sales log, validates and filters the records, fetches
//! the product catalog, and writes the enriched export and the text report.
//! Progress is logged to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success (including degraded runs such as a missing input file)
//! - 1: Error (logging setup failed, prompt failed, report not writable)

use sales_analytics::cli::{self, InteractivePrompt};
use sales_analytics::logging::init_logging;
use sales_analytics::pipeline::{create_catalog, SalesPipeline};
use sales_analytics::report::ReportStatus;
use std::io;
use std::process;
use tracing::{error, info};

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    if let Err(e) = init_logging(&args.to_log_config()) {
        eprintln!("Error: failed to initialize logging: {}", e);
        process::exit(1);
    }

    let config = args.to_pipeline_config();
    let catalog = create_catalog(&config, args.offline);
    let pipeline = SalesPipeline::new(config, catalog);
    info!(
        input = %pipeline.config().input_path.display(),
        report = %pipeline.config().report_output_path.display(),
        "starting sales analytics run"
    );

    let result = if args.interactive {
        let stdin = io::stdin();
        let mut prompt = InteractivePrompt::new(stdin.lock(), io::stdout());
        pipeline.run(&mut prompt)
    } else {
        pipeline.run(&mut args.to_filter_options())
    };

    match result {
        Ok(outcome) => {
            info!(
                records = outcome.summary.final_count,
                matched = outcome.matched,
                export_written = outcome.export_written,
                "run finished"
            );
            if let ReportStatus::Written(path) = &outcome.report {
                info!(path = %path.display(), "report available");
            }
        }
        Err(e) => {
            error!(error = %e, "pipeline failed");
            process::exit(1);
        }
    }
}

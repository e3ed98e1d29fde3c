//! Report module
//!
//! Produces the two run artifacts:
//! - `renderer` - The fixed-layout text report
//! - `export` - The enriched pipe-delimited dataset
//! - `format` - Currency and percentage formatting used by the report

pub mod export;
pub mod format;
pub mod renderer;

pub use export::export_enriched;
pub use renderer::{render_report, write_report, ReportStatus};

//! Core traits for the pipeline's external collaborators
//!
//! The catalog service and the source of filter parameters sit outside the
//! pipeline. These traits let the pipeline run against HTTP or in-memory
//! catalogs, and against command-line or interactive filter input.

use crate::config::FilterOptions;
use crate::core::validator::FilterChoices;
use crate::report::format::format_currency;
use crate::types::{CatalogProduct, SalesError};
use tracing::info;

/// Source of catalog products
pub trait CatalogSource {
    /// Fetch the full product list in one all-or-nothing call
    ///
    /// A failure is an ordinary value: the pipeline turns it into an
    /// empty catalog mapping.
    fn fetch_products(&self) -> Result<Vec<CatalogProduct>, SalesError>;
}

/// Source of record filters
pub trait FilterSource {
    /// Decide which filters to apply, given the choices present in the data
    fn select_filters(&mut self, choices: &FilterChoices) -> Result<FilterOptions, SalesError>;
}

/// Fixed filters, typically taken from command-line flags
///
/// The available choices are only logged; an interactive source shows them
/// to the operator instead.
impl FilterSource for FilterOptions {
    fn select_filters(&mut self, choices: &FilterChoices) -> Result<FilterOptions, SalesError> {
        info!(regions = %choices.regions.join(", "), "available regions");
        if let Some((low, high)) = choices.amount_range {
            info!(
                "amount range: {} - {}",
                format_currency(low),
                format_currency(high)
            );
        }
        Ok(self.clone())
    }
}

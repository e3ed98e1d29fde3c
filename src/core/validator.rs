//! Record validation and filtering
//!
//! Every parsed record lands in exactly one bucket:
//!
//! 1. **Invalid** - a required field is empty, quantity or price is not
//!    positive, or an id lacks its prefix (`T`, `P`, `C`)
//! 2. **Region-filtered** - valid, but the region filter does not match
//! 3. **Amount-filtered** - valid and in region, but the amount is below the
//!    minimum or above the maximum
//! 4. **Kept** - everything else
//!
//! Checks short-circuit in that order, so the four bucket counts always add
//! up to the number of input records.

use crate::config::FilterOptions;
use crate::types::{RegionCode, SaleRecord};
use rust_decimal::Decimal;
use std::collections::BTreeSet;

/// Counters describing one validation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    pub total_input: usize,
    pub invalid: usize,
    pub filtered_by_region: usize,
    pub filtered_by_amount: usize,
    pub final_count: usize,
}

impl ValidationSummary {
    /// Whether every input record was counted in exactly one bucket
    pub fn is_balanced(&self) -> bool {
        self.invalid + self.filtered_by_region + self.filtered_by_amount + self.final_count
            == self.total_input
    }
}

/// Bucket a record falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Invalid,
    RegionFiltered,
    AmountFiltered,
    Kept,
}

/// Filter values present in a record set, offered to the operator
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterChoices {
    /// Distinct regions, sorted
    pub regions: Vec<RegionCode>,
    /// Smallest and largest transaction amount among valid records
    pub amount_range: Option<(Decimal, Decimal)>,
}

/// Check the structural validity of a record
pub fn is_valid(record: &SaleRecord) -> bool {
    let required = [
        &record.transaction_id,
        &record.date,
        &record.product_id,
        &record.product_name,
        &record.customer_id,
        &record.region,
    ];
    if required.iter().any(|field| field.trim().is_empty()) {
        return false;
    }

    record.quantity > 0
        && record.unit_price > Decimal::ZERO
        && record.transaction_id.starts_with('T')
        && record.product_id.starts_with('P')
        && record.customer_id.starts_with('C')
}

/// Decide which bucket a record belongs to
pub fn classify(record: &SaleRecord, filters: &FilterOptions) -> Disposition {
    if !is_valid(record) {
        return Disposition::Invalid;
    }

    if filters
        .region
        .as_ref()
        .is_some_and(|region| *region != record.region)
    {
        return Disposition::RegionFiltered;
    }

    let amount = record.amount();
    if filters.min_amount.is_some_and(|min| amount < min) {
        return Disposition::AmountFiltered;
    }
    if filters.max_amount.is_some_and(|max| amount > max) {
        return Disposition::AmountFiltered;
    }

    Disposition::Kept
}

/// Validate records and apply the optional filters
///
/// # Returns
///
/// The kept records in input order, plus the per-bucket counts.
pub fn validate_and_filter(
    records: Vec<SaleRecord>,
    filters: &FilterOptions,
) -> (Vec<SaleRecord>, ValidationSummary) {
    let mut summary = ValidationSummary {
        total_input: records.len(),
        ..ValidationSummary::default()
    };

    let kept: Vec<SaleRecord> = records
        .into_iter()
        .filter(|record| match classify(record, filters) {
            Disposition::Invalid => {
                summary.invalid += 1;
                false
            }
            Disposition::RegionFiltered => {
                summary.filtered_by_region += 1;
                false
            }
            Disposition::AmountFiltered => {
                summary.filtered_by_amount += 1;
                false
            }
            Disposition::Kept => true,
        })
        .collect();

    summary.final_count = kept.len();
    (kept, summary)
}

/// Collect the region and amount choices present in `records`
pub fn filter_choices(records: &[SaleRecord]) -> FilterChoices {
    let regions: BTreeSet<&str> = records.iter().map(|r| r.region.as_str()).collect();

    let amount_range = records
        .iter()
        .filter(|record| is_valid(record))
        .map(SaleRecord::amount)
        .fold(None, |range: Option<(Decimal, Decimal)>, amount| match range {
            None => Some((amount, amount)),
            Some((lo, hi)) => Some((lo.min(amount), hi.max(amount))),
        });

    FilterChoices {
        regions: regions.into_iter().map(str::to_string).collect(),
        amount_range,
    }
}

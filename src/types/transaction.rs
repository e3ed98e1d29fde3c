//! Sales transaction types
//!
//! This module defines the parsed transaction record and the enriched record
//! produced by joining a transaction against the product catalog.

use rust_decimal::Decimal;

/// Region label as it appears in the sales log
pub type RegionCode = String;

/// Customer identifier (expected to start with `C`)
pub type CustomerId = String;

/// Product display name, used as the product grouping key
pub type ProductName = String;

/// Date token from the sales log
///
/// Dates are opaque: they are compared and grouped lexically, never parsed.
pub type DateToken = String;

/// A single parsed sales transaction
///
/// Created by the line parser with every field typed. Records are not mutated
/// after parsing; enrichment produces a separate [`EnrichedRecord`].
#[derive(Debug, Clone, PartialEq)]
pub struct SaleRecord {
    /// Transaction identifier (expected to start with `T`)
    pub transaction_id: String,

    /// Transaction date token
    pub date: DateToken,

    /// Product identifier (expected to start with `P`)
    ///
    /// The numeric suffix is the join key into the catalog.
    pub product_id: String,

    /// Product display name with thousands separators stripped
    pub product_name: ProductName,

    /// Units sold; valid records have a positive quantity
    pub quantity: i64,

    /// Price per unit; valid records have a positive price
    pub unit_price: Decimal,

    /// Customer identifier
    pub customer_id: CustomerId,

    /// Sales region
    pub region: RegionCode,
}

impl SaleRecord {
    /// Transaction amount: `quantity * unit_price`
    ///
    /// The parser only produces records whose amount is representable;
    /// hand-built records that overflow saturate at the `Decimal` bounds.
    pub fn amount(&self) -> Decimal {
        Decimal::from(self.quantity).saturating_mul(self.unit_price)
    }
}

/// A clean transaction joined with catalog metadata
///
/// The `api_*` fields are `None` whenever `api_match` is false.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRecord {
    /// The underlying transaction
    pub record: SaleRecord,

    /// Catalog category
    pub api_category: Option<String>,

    /// Catalog brand
    pub api_brand: Option<String>,

    /// Catalog rating
    pub api_rating: Option<f64>,

    /// Whether a catalog entry was found for the product id
    pub api_match: bool,
}

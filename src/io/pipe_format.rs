//! Pipe-delimited format handling for sales records
//!
//! This module centralizes the `|`-delimited line format, providing:
//! - Line parsing into typed [`SaleRecord`]s
//! - Serialization of enriched records for the export file
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::types::{EnrichedRecord, SaleRecord, SalesError};
use csv::{QuoteStyle, WriterBuilder};
use rust_decimal::Decimal;
use std::io::Write;
use std::str::FromStr;

/// Field delimiter used by both the input log and the export
pub const DELIMITER: u8 = b'|';

/// Number of fields in a raw sales line
pub const FIELD_COUNT: usize = 8;

/// Token written for absent catalog values
pub const NULL_MARKER: &str = "None";

/// Header row of the enriched export
pub const ENRICHED_HEADER: [&str; 12] = [
    "TransactionID",
    "Date",
    "ProductID",
    "ProductName",
    "Quantity",
    "UnitPrice",
    "CustomerID",
    "Region",
    "API_Category",
    "API_Brand",
    "API_Rating",
    "API_Match",
];

/// Parse a single raw line into a SaleRecord
///
/// Fields are assigned positionally: id, date, product id, product name,
/// quantity, unit price, customer id, region. Thousands separators are
/// stripped from the product name, quantity and price.
///
/// # Returns
///
/// * `Some(SaleRecord)` - The line has 8 fields and numeric quantity/price
/// * `None` - The line is malformed and should be discarded. This includes
///   lines whose amount (`quantity * unit_price`) is not representable.
pub fn parse_line(line: &str) -> Option<SaleRecord> {
    let fields: Vec<&str> = line.split(DELIMITER as char).collect();
    let [transaction_id, date, product_id, product_name, quantity, unit_price, customer_id, region] =
        fields.as_slice()
    else {
        return None;
    };

    let quantity = strip_separators(quantity).trim().parse::<i64>().ok()?;
    let unit_price = parse_price(&strip_separators(unit_price))?;
    Decimal::from(quantity).checked_mul(unit_price)?;

    Some(SaleRecord {
        transaction_id: transaction_id.to_string(),
        date: date.to_string(),
        product_id: product_id.to_string(),
        product_name: strip_separators(product_name),
        quantity,
        unit_price,
        customer_id: customer_id.to_string(),
        region: region.to_string(),
    })
}

/// Parse every line, silently dropping the malformed ones
pub fn parse_transactions<I, S>(lines: I) -> Vec<SaleRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| parse_line(line.as_ref()))
        .collect()
}

fn strip_separators(value: &str) -> String {
    value.replace(',', "")
}

fn parse_price(value: &str) -> Option<Decimal> {
    let value = value.trim();
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .ok()
}

/// Write enriched records in pipe-delimited form
///
/// Writes the [`ENRICHED_HEADER`] row followed by one row per record in the
/// same column order. Absent catalog values are written as [`NULL_MARKER`].
/// An empty slice produces a header-only output.
///
/// # Arguments
///
/// * `records` - Enriched records to write, in order
/// * `output` - Mutable reference to a writer
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(SalesError::IoError)` if a write error occurred
pub fn write_enriched(records: &[EnrichedRecord], output: &mut dyn Write) -> Result<(), SalesError> {
    let mut writer = WriterBuilder::new()
        .delimiter(DELIMITER)
        .quote_style(QuoteStyle::Never)
        .from_writer(output);

    writer
        .write_record(ENRICHED_HEADER)
        .map_err(|e| export_error("header", &e))?;

    for enriched in records {
        writer
            .write_record(enriched_row(enriched))
            .map_err(|e| export_error("record", &e))?;
    }

    writer.flush()?;

    Ok(())
}

fn enriched_row(enriched: &EnrichedRecord) -> [String; 12] {
    let record = &enriched.record;
    [
        record.transaction_id.clone(),
        record.date.clone(),
        record.product_id.clone(),
        record.product_name.clone(),
        record.quantity.to_string(),
        record.unit_price.to_string(),
        record.customer_id.clone(),
        record.region.clone(),
        optional_field(enriched.api_category.as_deref()),
        optional_field(enriched.api_brand.as_deref()),
        enriched
            .api_rating
            .map(|rating| format!("{rating:?}"))
            .unwrap_or_else(|| NULL_MARKER.to_string()),
        if enriched.api_match { "True" } else { "False" }.to_string(),
    ]
}

fn optional_field(value: Option<&str>) -> String {
    value.unwrap_or(NULL_MARKER).to_string()
}

fn export_error(what: &str, error: &csv::Error) -> SalesError {
    SalesError::IoError {
        message: format!("Failed to write enriched {what}: {error}"),
    }
}

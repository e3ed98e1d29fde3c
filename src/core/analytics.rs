//! Sales analytics
//!
//! Read-only aggregate views over the clean working set. Each view builds its
//! own accumulators, so no view depends on another's state, and each is
//! deterministic for a given input:
//!
//! - [`calculate_total_revenue`] - sum of all amounts
//! - [`region_wise_sales`] - per-region totals and revenue share
//! - [`top_selling_products`] - products ranked by units sold
//! - [`customer_analysis`] - per-customer spend and average order value
//! - [`daily_sales_trend`] - per-date revenue, count and distinct customers
//! - [`find_peak_sales_day`] - the highest-revenue date
//! - [`low_performing_products`] - products selling under a unit threshold
//!
//! Sums saturate at the `Decimal` (and `i64`) bounds instead of overflowing.
//!
//! Accumulators keyed by region, customer or date use ordered maps and are
//! sorted when the view is produced. Product accumulators keep encounter order
//! so that ranking ties resolve to the product seen first.

use crate::config::AnalyticsConfig;
use crate::types::{CustomerId, DateToken, ProductName, RegionCode, SaleRecord};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Sales for one region
#[derive(Debug, Clone, PartialEq)]
pub struct RegionSales {
    pub region: RegionCode,
    pub total_sales: Decimal,
    pub transaction_count: usize,
    /// Share of total revenue, in percent, rounded to 2 decimals
    pub percentage: Decimal,
}

/// Units and revenue for one product
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSales {
    pub product_name: ProductName,
    pub quantity: i64,
    pub revenue: Decimal,
}

/// Spend summary for one customer
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerSummary {
    pub customer_id: CustomerId,
    pub total_spent: Decimal,
    pub purchase_count: usize,
    /// `total_spent / purchase_count`, rounded to 2 decimals
    pub avg_order_value: Decimal,
}

/// Sales on one date
#[derive(Debug, Clone, PartialEq)]
pub struct DailySales {
    pub date: DateToken,
    pub revenue: Decimal,
    pub transaction_count: usize,
    pub unique_customers: usize,
}

/// The date with the highest revenue
#[derive(Debug, Clone, PartialEq)]
pub struct PeakDay {
    pub date: DateToken,
    pub revenue: Decimal,
    pub transaction_count: usize,
}

/// Every analytics view for one run
#[derive(Debug, Clone, PartialEq)]
pub struct SalesAnalytics {
    pub total_revenue: Decimal,
    pub regions: Vec<RegionSales>,
    pub top_products: Vec<ProductSales>,
    pub customers: Vec<CustomerSummary>,
    pub daily_trend: Vec<DailySales>,
    pub peak_day: Option<PeakDay>,
    pub low_performers: Vec<ProductSales>,
}

impl SalesAnalytics {
    /// Compute all views over `records`
    pub fn compute(records: &[SaleRecord], config: &AnalyticsConfig) -> Self {
        Self {
            total_revenue: calculate_total_revenue(records),
            regions: region_wise_sales(records),
            top_products: top_selling_products(records, config.top_n),
            customers: customer_analysis(records),
            daily_trend: daily_sales_trend(records),
            peak_day: find_peak_sales_day(records),
            low_performers: low_performing_products(records, config.low_stock_threshold),
        }
    }
}

fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Sum of `quantity * unit_price` over all records
pub fn calculate_total_revenue(records: &[SaleRecord]) -> Decimal {
    records
        .iter()
        .map(SaleRecord::amount)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Per-region totals, sorted by total sales descending
///
/// Regions with equal totals are ordered by name.
pub fn region_wise_sales(records: &[SaleRecord]) -> Vec<RegionSales> {
    let total_revenue = calculate_total_revenue(records);

    let mut totals: BTreeMap<&str, (Decimal, usize)> = BTreeMap::new();
    for record in records {
        let entry = totals.entry(record.region.as_str()).or_default();
        entry.0 = entry.0.saturating_add(record.amount());
        entry.1 += 1;
    }

    let mut regions: Vec<RegionSales> = totals
        .into_iter()
        .map(|(region, (total_sales, transaction_count))| RegionSales {
            region: region.to_string(),
            total_sales,
            transaction_count,
            percentage: share_of(total_sales, total_revenue),
        })
        .collect();

    regions.sort_by(|a, b| b.total_sales.cmp(&a.total_sales));
    regions
}

/// Percentage of `part` in `whole`, rounded to 2 decimals; zero when `whole` is zero
pub fn share_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        Decimal::ZERO
    } else {
        round2(part / whole * Decimal::ONE_HUNDRED)
    }
}

/// Units and revenue per product name, in first-seen order
pub fn product_totals(records: &[SaleRecord]) -> Vec<ProductSales> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut products: Vec<ProductSales> = Vec::new();

    for record in records {
        let slot = *index.entry(record.product_name.as_str()).or_insert_with(|| {
            products.push(ProductSales {
                product_name: record.product_name.clone(),
                quantity: 0,
                revenue: Decimal::ZERO,
            });
            products.len() - 1
        });
        let product = &mut products[slot];
        product.quantity = product.quantity.saturating_add(record.quantity);
        product.revenue = product.revenue.saturating_add(record.amount());
    }

    products
}

/// The `n` products with the most units sold
///
/// Ranked by cumulative quantity, descending; ties keep first-seen order.
pub fn top_selling_products(records: &[SaleRecord], n: usize) -> Vec<ProductSales> {
    let mut products = product_totals(records);
    products.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    products.truncate(n);
    products
}

/// Per-customer spend, sorted by total spent descending
///
/// Customers with equal spend are ordered by id.
pub fn customer_analysis(records: &[SaleRecord]) -> Vec<CustomerSummary> {
    let mut totals: BTreeMap<&str, (Decimal, usize)> = BTreeMap::new();
    for record in records {
        let entry = totals.entry(record.customer_id.as_str()).or_default();
        entry.0 = entry.0.saturating_add(record.amount());
        entry.1 += 1;
    }

    let mut customers: Vec<CustomerSummary> = totals
        .into_iter()
        .map(|(customer_id, (total_spent, purchase_count))| CustomerSummary {
            customer_id: customer_id.to_string(),
            total_spent,
            purchase_count,
            avg_order_value: round2(total_spent / Decimal::from(purchase_count)),
        })
        .collect();

    customers.sort_by(|a, b| b.total_spent.cmp(&a.total_spent));
    customers
}

/// Per-date sales, in ascending (lexical) date order
pub fn daily_sales_trend(records: &[SaleRecord]) -> Vec<DailySales> {
    let mut days: BTreeMap<&str, (Decimal, usize, BTreeSet<&str>)> = BTreeMap::new();
    for record in records {
        let entry = days.entry(record.date.as_str()).or_default();
        entry.0 = entry.0.saturating_add(record.amount());
        entry.1 += 1;
        entry.2.insert(record.customer_id.as_str());
    }

    days.into_iter()
        .map(|(date, (revenue, transaction_count, customers))| DailySales {
            date: date.to_string(),
            revenue,
            transaction_count,
            unique_customers: customers.len(),
        })
        .collect()
}

/// The date with the highest daily revenue
///
/// Returns `None` for an empty set or when no day has positive revenue.
/// When several days tie, the earliest date wins.
pub fn find_peak_sales_day(records: &[SaleRecord]) -> Option<PeakDay> {
    let mut peak: Option<PeakDay> = None;

    for day in daily_sales_trend(records) {
        let best = peak.as_ref().map_or(Decimal::ZERO, |p| p.revenue);
        if day.revenue > best {
            peak = Some(PeakDay {
                date: day.date,
                revenue: day.revenue,
                transaction_count: day.transaction_count,
            });
        }
    }

    peak
}

/// Products whose cumulative units sold are strictly below `threshold`
///
/// Returned in first-seen order; callers must not rely on any ranking.
pub fn low_performing_products(records: &[SaleRecord], threshold: i64) -> Vec<ProductSales> {
    product_totals(records)
        .into_iter()
        .filter(|product| product.quantity < threshold)
        .collect()
}

//! Pure aggregations over a filtered record subset.
//!
//! Every function only reads its input slice. Empty input yields zero totals,
//! empty series and `None` for means, never NaN.

use chrono::NaiveDate;
use contracts::dashboards::d100_sales_overview::{
    CityRanking, DailyRevenuePoint, KpiSummary, PlatformRevenue, ProductRanking, StoreRevenue,
};
use contracts::domain::a001_order_record::OrderRecord;
use contracts::enums::{City, Platform, Product, State, Store};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};

fn mean(total: f64, count: usize) -> Option<f64> {
    if count == 0 {
        None
    } else {
        Some(total / count as f64)
    }
}

/// Revenue descending; callers chain their own tie-break
fn by_revenue_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

pub fn summarize(records: &[&OrderRecord]) -> KpiSummary {
    let total_revenue: f64 = records.iter().map(|r| r.total_value).sum();
    let unique_customers = records
        .iter()
        .map(|r| r.customer_name.as_str())
        .collect::<HashSet<_>>()
        .len();

    KpiSummary {
        order_count: records.len(),
        total_revenue,
        avg_ticket: mean(total_revenue, records.len()),
        unique_customers,
    }
}

/// Revenue per day, ascending by date; days without orders are absent
pub fn daily_revenue(records: &[&OrderRecord]) -> Vec<DailyRevenuePoint> {
    let mut by_day: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for record in records {
        let entry = by_day.entry(record.date).or_insert((0.0, 0));
        entry.0 += record.total_value;
        entry.1 += 1;
    }

    by_day
        .into_iter()
        .map(|(date, (revenue, orders))| DailyRevenuePoint {
            date,
            revenue,
            orders,
        })
        .collect()
}

/// Revenue per platform, sorted by platform label
pub fn platform_revenue(records: &[&OrderRecord]) -> Vec<PlatformRevenue> {
    let mut by_platform: HashMap<Platform, (f64, usize)> = HashMap::new();
    for record in records {
        let entry = by_platform.entry(record.platform).or_insert((0.0, 0));
        entry.0 += record.total_value;
        entry.1 += 1;
    }

    let total: f64 = by_platform.values().map(|(revenue, _)| revenue).sum();

    let mut rows: Vec<PlatformRevenue> = by_platform
        .into_iter()
        .map(|(platform, (revenue, orders))| PlatformRevenue {
            platform,
            revenue,
            orders,
            share_percent: if total > 0.0 {
                revenue / total * 100.0
            } else {
                0.0
            },
        })
        .collect();
    rows.sort_by(|a, b| a.platform.label().cmp(b.platform.label()));
    rows
}

/// Best selling products by revenue, ties broken by product label
pub fn top_products(records: &[&OrderRecord], limit: usize) -> Vec<ProductRanking> {
    struct Acc<'a> {
        revenue: f64,
        quantity: u64,
        customers: HashSet<&'a str>,
    }

    let mut by_product: HashMap<Product, Acc> = HashMap::new();
    for record in records {
        let acc = by_product.entry(record.product_name).or_insert_with(|| Acc {
            revenue: 0.0,
            quantity: 0,
            customers: HashSet::new(),
        });
        acc.revenue += record.total_value;
        acc.quantity += u64::from(record.quantity);
        acc.customers.insert(record.customer_name.as_str());
    }

    let mut rows: Vec<ProductRanking> = by_product
        .into_iter()
        .map(|(product, acc)| ProductRanking {
            product,
            revenue: acc.revenue,
            quantity: acc.quantity,
            unique_customers: acc.customers.len(),
        })
        .collect();
    rows.sort_by(|a, b| {
        by_revenue_desc(a.revenue, b.revenue).then_with(|| a.product.label().cmp(b.product.label()))
    });
    rows.truncate(limit);
    rows
}

/// Best (state, city) pairs by revenue, ties broken by state then city
pub fn top_cities(records: &[&OrderRecord], limit: usize) -> Vec<CityRanking> {
    let mut by_region: HashMap<(State, City), (f64, usize)> = HashMap::new();
    for record in records {
        let entry = by_region
            .entry((record.state, record.city))
            .or_insert((0.0, 0));
        entry.0 += record.total_value;
        entry.1 += 1;
    }

    let mut rows: Vec<CityRanking> = by_region
        .into_iter()
        .map(|((state, city), (revenue, orders))| CityRanking {
            state,
            city,
            revenue,
            orders,
        })
        .collect();
    rows.sort_by(|a, b| {
        by_revenue_desc(a.revenue, b.revenue)
            .then_with(|| a.state.code().cmp(b.state.code()))
            .then_with(|| a.city.label().cmp(b.city.label()))
    });
    rows.truncate(limit);
    rows
}

/// Revenue per store, best first
pub fn store_revenue(records: &[&OrderRecord]) -> Vec<StoreRevenue> {
    let mut by_store: HashMap<Store, (f64, usize)> = HashMap::new();
    for record in records {
        let entry = by_store.entry(record.store_name).or_insert((0.0, 0));
        entry.0 += record.total_value;
        entry.1 += 1;
    }

    let mut rows: Vec<StoreRevenue> = by_store
        .into_iter()
        .map(|(store, (revenue, orders))| StoreRevenue {
            store,
            revenue,
            orders,
            avg_ticket: mean(revenue, orders),
        })
        .collect();
    rows.sort_by(|a, b| {
        by_revenue_desc(a.revenue, b.revenue).then_with(|| a.store.label().cmp(b.store.label()))
    });
    rows
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a001_order_record::OrderRecord;
use crate::enums::{City, Platform, Product, State, Store};
use crate::shared::indicators::IndicatorValue;

/// Wire value of the "every platform" selector entry
pub const ALL_PLATFORMS: &str = "all";
/// Display label of the "every platform" selector entry
pub const ALL_PLATFORMS_LABEL: &str = "Todas";

/// Number of rows in the ranking tables
pub const TOP_LIMIT: usize = 10;

/// Default and maximum page size of the order listing
pub const DEFAULT_PAGE_SIZE: usize = 50;
pub const MAX_PAGE_SIZE: usize = 500;

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Filter for the sales overview.
///
/// Dates are "YYYY-MM-DD". A missing bound means "from the first / up to the
/// last day of the dataset". `platform` may be omitted or set to
/// [`ALL_PLATFORMS`] to disable the platform predicate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesOverviewRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

/// Paginated order listing request (same filter fields plus paging).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderListRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// Zero-based page index
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub page_size: Option<usize>,
}

impl OrderListRequest {
    /// Filter part of the request
    pub fn filter(&self) -> SalesOverviewRequest {
        SalesOverviewRequest {
            date_from: self.date_from.clone(),
            date_to: self.date_to.clone(),
            platform: self.platform.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// Dataset bounds and selector values for the filter panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOptionsResponse {
    pub date_min: NaiveDate,
    pub date_max: NaiveDate,
    /// Distinct platforms present in the data, in first-appearance order
    pub platforms: Vec<Platform>,
    pub all_platforms_label: String,
    pub total_records: usize,
}

/// Filter actually applied after defaults and validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedFilter {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    /// `None` when every platform is included
    pub platform: Option<String>,
}

/// Headline metrics of the filtered subset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub order_count: usize,
    pub total_revenue: f64,
    /// Mean order value; `None` when the subset is empty
    pub avg_ticket: Option<f64>,
    pub unique_customers: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRevenuePoint {
    pub date: NaiveDate,
    pub revenue: f64,
    pub orders: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformRevenue {
    pub platform: Platform,
    pub revenue: f64,
    pub orders: usize,
    /// Share of the filtered revenue, 0..=100
    pub share_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRanking {
    pub product: Product,
    pub revenue: f64,
    pub quantity: u64,
    pub unique_customers: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRanking {
    pub state: State,
    pub city: City,
    pub revenue: f64,
    pub orders: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreRevenue {
    pub store: Store,
    pub revenue: f64,
    pub orders: usize,
    pub avg_ticket: Option<f64>,
}

/// Everything the overview page renders for one filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOverviewResponse {
    pub filter: AppliedFilter,
    /// `false` when no record matched the filter
    pub has_data: bool,
    pub kpis: KpiSummary,
    /// KPI cards in display order
    pub indicators: Vec<IndicatorValue>,
    pub daily_revenue: Vec<DailyRevenuePoint>,
    pub platform_revenue: Vec<PlatformRevenue>,
    pub top_products: Vec<ProductRanking>,
    pub top_cities: Vec<CityRanking>,
    pub store_revenue: Vec<StoreRevenue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderListResponse {
    pub items: Vec<OrderRecord>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

/// Body of a 4xx/5xx answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

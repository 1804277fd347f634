use contracts::dashboards::d100_sales_overview::{
    FilterOptionsResponse, KpiSummary, OrderListRequest, OrderListResponse, SalesOverviewRequest,
    SalesOverviewResponse, ALL_PLATFORMS_LABEL, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, TOP_LIMIT,
};
use contracts::domain::a001_order_record::OrderRecord;
use contracts::shared::indicators::{
    ids, IndicatorId, IndicatorStatus, IndicatorValue, ValueFormat,
};

use super::aggregation;
use super::filter::{apply_filter, SalesFilter};
use crate::shared::data::SalesDataset;
use crate::shared::error::DashboardError;

/// Selector values and bounds for the filter panel
pub fn get_filter_options(dataset: &SalesDataset) -> FilterOptionsResponse {
    FilterOptionsResponse {
        date_min: dataset.date_min(),
        date_max: dataset.date_max(),
        platforms: dataset.platforms(),
        all_platforms_label: ALL_PLATFORMS_LABEL.to_string(),
        total_records: dataset.len(),
    }
}

/// Filter the dataset and compute every overview block
pub fn get_sales_overview(
    dataset: &SalesDataset,
    request: &SalesOverviewRequest,
) -> Result<SalesOverviewResponse, DashboardError> {
    let filter = SalesFilter::from_request(request, dataset)?;
    let records = apply_filter(dataset, &filter);
    Ok(build_overview(&filter, &records))
}

pub fn build_overview(filter: &SalesFilter, records: &[&OrderRecord]) -> SalesOverviewResponse {
    let kpis = aggregation::summarize(records);

    SalesOverviewResponse {
        filter: filter.applied(),
        has_data: !records.is_empty(),
        indicators: build_indicators(&kpis),
        kpis,
        daily_revenue: aggregation::daily_revenue(records),
        platform_revenue: aggregation::platform_revenue(records),
        top_products: aggregation::top_products(records, TOP_LIMIT),
        top_cities: aggregation::top_cities(records, TOP_LIMIT),
        store_revenue: aggregation::store_revenue(records),
    }
}

/// KPI cards in display order
fn build_indicators(kpis: &KpiSummary) -> Vec<IndicatorValue> {
    let card = |id: &str, label: &str, icon: &str, value: Option<f64>, format: ValueFormat| {
        IndicatorValue {
            id: IndicatorId::new(id),
            label: label.to_string(),
            icon: icon.to_string(),
            value,
            format,
            status: if value.is_some() {
                IndicatorStatus::Neutral
            } else {
                IndicatorStatus::Warning
            },
            subtitle: if value.is_some() {
                None
            } else {
                Some("Sem dados no período".to_string())
            },
        }
    };

    vec![
        card(
            ids::ORDER_COUNT,
            "Total de Pedidos",
            "package",
            Some(kpis.order_count as f64),
            ValueFormat::Integer,
        ),
        card(
            ids::TOTAL_REVENUE,
            "Receita Total",
            "money",
            Some(kpis.total_revenue),
            ValueFormat::brl(),
        ),
        card(
            ids::AVG_TICKET,
            "Ticket Médio",
            "target",
            kpis.avg_ticket,
            ValueFormat::brl(),
        ),
        card(
            ids::UNIQUE_CUSTOMERS,
            "Clientes Únicos",
            "users",
            Some(kpis.unique_customers as f64),
            ValueFormat::Integer,
        ),
    ]
}

/// One page of the filtered records
pub fn list_orders(
    dataset: &SalesDataset,
    request: &OrderListRequest,
) -> Result<OrderListResponse, DashboardError> {
    let filter = SalesFilter::from_request(&request.filter(), dataset)?;

    let page = request.page.unwrap_or(0);
    let page_size = request.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
    if page_size == 0 || page_size > MAX_PAGE_SIZE {
        return Err(DashboardError::InvalidPagination(format!(
            "page_size must be between 1 and {}, got {}",
            MAX_PAGE_SIZE, page_size
        )));
    }

    let records = apply_filter(dataset, &filter);
    let total = records.len();
    let total_pages = total.div_ceil(page_size);

    let items: Vec<OrderRecord> = records
        .into_iter()
        .skip(page.saturating_mul(page_size))
        .take(page_size)
        .cloned()
        .collect();

    Ok(OrderListResponse {
        items,
        total,
        page,
        page_size,
        total_pages,
    })
}

/// Filtered records as CSV (header row plus one row per order)
pub fn export_orders_csv(
    dataset: &SalesDataset,
    request: &SalesOverviewRequest,
) -> Result<Vec<u8>, DashboardError> {
    let filter = SalesFilter::from_request(request, dataset)?;
    let records = apply_filter(dataset, &filter);

    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in &records {
        writer
            .serialize(record)
            .map_err(|e| DashboardError::Export(e.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| DashboardError::Export(e.to_string()))?;

    tracing::info!("Exported {} orders to CSV ({} bytes)", records.len(), bytes.len());
    Ok(bytes)
}

/// File name for a CSV export of the given filter
pub fn export_file_name(dataset: &SalesDataset, request: &SalesOverviewRequest) -> String {
    match SalesFilter::from_request(request, dataset) {
        Ok(filter) => format!(
            "pedidos_{}_{}.csv",
            filter.date_from.format("%Y%m%d"),
            filter.date_to.format("%Y%m%d")
        ),
        Err(_) => "pedidos.csv".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::DatasetConfig;
    use crate::shared::data::generator;

    fn dataset() -> SalesDataset {
        generator::generate(&DatasetConfig::default()).unwrap()
    }

    fn request(from: &str, to: &str, platform: &str) -> SalesOverviewRequest {
        SalesOverviewRequest {
            date_from: Some(from.to_string()),
            date_to: Some(to.to_string()),
            platform: Some(platform.to_string()),
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6 * b.abs().max(1.0)
    }

    #[test]
    fn test_revenue_consistency_across_breakdowns() {
        let dataset = dataset();
        for platform in ["all", "Shopee", "Site Próprio"] {
            let overview =
                get_sales_overview(&dataset, &request("2024-02-01", "2024-05-31", platform))
                    .unwrap();
            let daily: f64 = overview.daily_revenue.iter().map(|p| p.revenue).sum();
            let by_platform: f64 = overview.platform_revenue.iter().map(|p| p.revenue).sum();
            let by_store: f64 = overview.store_revenue.iter().map(|s| s.revenue).sum();
            assert!(close(daily, overview.kpis.total_revenue));
            assert!(close(by_platform, overview.kpis.total_revenue));
            assert!(close(by_store, overview.kpis.total_revenue));
            let orders: usize = overview.daily_revenue.iter().map(|p| p.orders).sum();
            assert_eq!(orders, overview.kpis.order_count);
        }
    }

    #[test]
    fn test_rankings_are_bounded_and_sorted() {
        let dataset = dataset();
        let overview = get_sales_overview(&dataset, &SalesOverviewRequest::default()).unwrap();
        assert!(overview.top_products.len() <= TOP_LIMIT);
        assert!(overview.top_cities.len() <= TOP_LIMIT);
        assert!(overview
            .top_products
            .windows(2)
            .all(|w| w[0].revenue >= w[1].revenue));
        assert!(overview
            .top_cities
            .windows(2)
            .all(|w| w[0].revenue >= w[1].revenue));
        // 5 states x 5 cities drawn independently: more pairs than the limit
        assert_eq!(overview.top_cities.len(), TOP_LIMIT);
    }

    #[test]
    fn test_single_day_scenario() {
        let dataset = dataset();
        let overview =
            get_sales_overview(&dataset, &request("2024-06-01", "2024-06-01", "all")).unwrap();
        let day: Vec<&OrderRecord> = dataset
            .records()
            .iter()
            .filter(|r| r.date.to_string() == "2024-06-01")
            .collect();
        assert_eq!(overview.kpis.order_count, day.len());
        let expected: f64 = day.iter().map(|r| r.total_value).sum();
        assert!(close(overview.kpis.total_revenue, expected));
        assert_eq!(overview.daily_revenue.len(), 1);
    }

    #[test]
    fn test_absent_platform_reports_empty_values() {
        let dataset = dataset();
        let overview =
            get_sales_overview(&dataset, &request("2024-01-01", "2024-12-31", "Magalu")).unwrap();
        assert!(!overview.has_data);
        assert_eq!(overview.kpis.order_count, 0);
        assert_eq!(overview.kpis.total_revenue, 0.0);
        assert_eq!(overview.kpis.avg_ticket, None);
        assert_eq!(overview.kpis.unique_customers, 0);
        assert!(overview.daily_revenue.is_empty());
        assert!(overview.top_products.is_empty());

        let ticket = overview
            .indicators
            .iter()
            .find(|i| i.id.0 == ids::AVG_TICKET)
            .unwrap();
        assert_eq!(ticket.value, None);
        assert_eq!(ticket.status, IndicatorStatus::Warning);
        assert!(overview
            .indicators
            .iter()
            .filter_map(|i| i.value)
            .all(|v| v.is_finite()));
    }

    #[test]
    fn test_inverted_range_is_an_error() {
        let dataset = dataset();
        let result = get_sales_overview(&dataset, &request("2024-06-02", "2024-06-01", "all"));
        assert!(matches!(result, Err(DashboardError::InvalidDateRange { .. })));
    }

    #[test]
    fn test_filter_options() {
        let dataset = dataset();
        let options = get_filter_options(&dataset);
        assert_eq!(options.date_min.to_string(), "2024-01-01");
        assert_eq!(options.date_max.to_string(), "2024-12-31");
        assert_eq!(options.platforms.len(), 5);
        assert_eq!(options.total_records, dataset.len());
        assert_eq!(options.all_platforms_label, "Todas");
    }

    #[test]
    fn test_list_orders_pagination() {
        let dataset = dataset();
        let request = OrderListRequest {
            date_from: Some("2024-03-01".to_string()),
            date_to: Some("2024-03-31".to_string()),
            page: Some(1),
            page_size: Some(20),
            ..Default::default()
        };
        let page = list_orders(&dataset, &request).unwrap();
        assert_eq!(page.items.len(), 20);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, page.total.div_ceil(20));

        let march: Vec<&OrderRecord> = dataset
            .records()
            .iter()
            .filter(|r| r.date.format("%Y-%m").to_string() == "2024-03")
            .collect();
        assert_eq!(page.total, march.len());
        assert_eq!(&page.items[0], march[20]);

        let past_end = list_orders(
            &dataset,
            &OrderListRequest {
                page: Some(page.total_pages + 1),
                ..request.clone()
            },
        )
        .unwrap();
        assert!(past_end.items.is_empty());
    }

    #[test]
    fn test_list_orders_rejects_bad_page_size() {
        let dataset = dataset();
        for size in [0, MAX_PAGE_SIZE + 1] {
            let result = list_orders(
                &dataset,
                &OrderListRequest {
                    page_size: Some(size),
                    ..Default::default()
                },
            );
            assert!(matches!(result, Err(DashboardError::InvalidPagination(_))));
        }
    }

    #[test]
    fn test_export_csv_rows() {
        let dataset = dataset();
        let request = request("2024-06-01", "2024-06-03", "Amazon");
        let bytes = export_orders_csv(&dataset, &request).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("date,store_name,platform,product_name,customer_name,total_value,quantity,city,state")
        );
        let expected = get_sales_overview(&dataset, &request).unwrap().kpis.order_count;
        assert_eq!(lines.count(), expected);
        assert!(text.contains(",Amazon,"));
        assert_eq!(export_file_name(&dataset, &request), "pedidos_20240601_20240603.csv");
    }
}

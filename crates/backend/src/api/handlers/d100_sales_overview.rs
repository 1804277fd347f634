use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use contracts::dashboards::d100_sales_overview::{
    FilterOptionsResponse, OrderListRequest, OrderListResponse, SalesOverviewRequest,
    SalesOverviewResponse,
};

use crate::dashboards::d100_sales_overview::service;
use crate::shared::app_state::AppState;
use crate::shared::error::DashboardError;

/// GET /api/d100/filters
pub async fn get_filter_options(State(state): State<AppState>) -> Json<FilterOptionsResponse> {
    Json(service::get_filter_options(&state.dataset))
}

/// GET /api/d100/overview?date_from=2024-01-01&date_to=2024-12-31&platform=all
pub async fn get_sales_overview(
    State(state): State<AppState>,
    query: Result<Query<SalesOverviewRequest>, QueryRejection>,
) -> Result<Json<SalesOverviewResponse>, DashboardError> {
    let Query(request) = query?;
    tracing::info!(
        "D100 Dashboard: overview for {}..{} platform={}",
        request.date_from.as_deref().unwrap_or("start"),
        request.date_to.as_deref().unwrap_or("end"),
        request.platform.as_deref().unwrap_or("all"),
    );

    let response = service::get_sales_overview(&state.dataset, &request)?;

    tracing::info!(
        "D100 Dashboard: {} orders, {} days, {} products",
        response.kpis.order_count,
        response.daily_revenue.len(),
        response.top_products.len()
    );
    Ok(Json(response))
}

/// GET /api/d100/orders?page=0&page_size=50
pub async fn list_orders(
    State(state): State<AppState>,
    query: Result<Query<OrderListRequest>, QueryRejection>,
) -> Result<Json<OrderListResponse>, DashboardError> {
    let Query(request) =
        query.map_err(|rejection| DashboardError::InvalidPagination(rejection.body_text()))?;
    let response = service::list_orders(&state.dataset, &request)?;
    Ok(Json(response))
}

/// GET /api/d100/orders.csv
pub async fn export_orders_csv(
    State(state): State<AppState>,
    query: Result<Query<SalesOverviewRequest>, QueryRejection>,
) -> Result<impl IntoResponse, DashboardError> {
    let Query(request) = query?;
    let bytes = service::export_orders_csv(&state.dataset, &request)?;
    let file_name = service::export_file_name(&state.dataset, &request);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        bytes,
    ))
}

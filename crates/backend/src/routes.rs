use axum::{routing::get, Router};

use crate::api::handlers;
use crate::shared::app_state::AppState;

/// All API routes of the application
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // D100 SALES OVERVIEW
        // ========================================
        .route(
            "/api/d100/filters",
            get(handlers::d100_sales_overview::get_filter_options),
        )
        .route(
            "/api/d100/overview",
            get(handlers::d100_sales_overview::get_sales_overview),
        )
        .route(
            "/api/d100/orders",
            get(handlers::d100_sales_overview::list_orders),
        )
        .route(
            "/api/d100/orders.csv",
            get(handlers::d100_sales_overview::export_orders_csv),
        )
        .with_state(state)
}

use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::dashboards::d100_sales_overview::ErrorResponse;
use thiserror::Error;

/// Errors a dashboard request can end with
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("invalid date '{value}' for {field}, expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },

    #[error("invalid date range: {from} is after {to}")]
    InvalidDateRange { from: String, to: String },

    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("invalid pagination: {0}")]
    InvalidPagination(String),

    #[error("export failed: {0}")]
    Export(String),
}

impl DashboardError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DashboardError::InvalidDate { .. }
            | DashboardError::InvalidDateRange { .. }
            | DashboardError::InvalidQuery(_)
            | DashboardError::InvalidPagination(_) => StatusCode::BAD_REQUEST,
            DashboardError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<QueryRejection> for DashboardError {
    fn from(rejection: QueryRejection) -> Self {
        DashboardError::InvalidQuery(rejection.body_text())
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Dashboard request failed: {}", self);
        } else {
            tracing::warn!("Dashboard request rejected: {}", self);
        }
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

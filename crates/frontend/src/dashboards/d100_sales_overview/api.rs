use contracts::dashboards::d100_sales_overview::{
    ErrorResponse, FilterOptionsResponse, SalesOverviewRequest, SalesOverviewResponse,
};
use gloo_net::http::{Request, Response};

const API_BASE: &str = "/api/d100";

/// Dataset bounds and platform list for the filter panel
pub async fn get_filter_options() -> Result<FilterOptionsResponse, String> {
    let url = format!("{}/filters", API_BASE);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Overview for the given filter
pub async fn get_sales_overview(
    request: &SalesOverviewRequest,
) -> Result<SalesOverviewResponse, String> {
    let url = format!("{}/overview?{}", API_BASE, query_string(request)?);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Link that downloads the filtered orders as CSV
pub fn export_csv_url(request: &SalesOverviewRequest) -> String {
    match query_string(request) {
        Ok(query) if !query.is_empty() => format!("{}/orders.csv?{}", API_BASE, query),
        _ => format!("{}/orders.csv", API_BASE),
    }
}

fn query_string(request: &SalesOverviewRequest) -> Result<String, String> {
    serde_qs::to_string(request).map_err(|e| format!("Failed to encode query: {}", e))
}

/// Prefer the backend's `{error}` body over the bare status code
async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => format!("HTTP error: {}", status),
    }
}

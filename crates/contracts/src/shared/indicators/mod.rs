use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Indicator identity & display metadata
// ---------------------------------------------------------------------------

/// Unique indicator identifier, used as key on both sides of the API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndicatorId(pub String);

impl IndicatorId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Well-known ids of the overview KPI cards.
pub mod ids {
    pub const ORDER_COUNT: &str = "order_count";
    pub const TOTAL_REVENUE: &str = "total_revenue";
    pub const AVG_TICKET: &str = "avg_ticket";
    pub const UNIQUE_CUSTOMERS: &str = "unique_customers";
}

/// How to format the numeric value on the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money { currency: String },
    Integer,
}

impl ValueFormat {
    pub fn brl() -> Self {
        ValueFormat::Money {
            currency: "R$".to_string(),
        }
    }
}

/// Visual status of the indicator (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Neutral,
    /// Value could not be computed for the current filter (no data)
    Warning,
}

// ---------------------------------------------------------------------------
// Computed values
// ---------------------------------------------------------------------------

/// A single computed KPI card returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorValue {
    pub id: IndicatorId,
    pub label: String,
    pub icon: String,
    /// Primary numeric value (`None` when there is no data to compute it from).
    pub value: Option<f64>,
    pub format: ValueFormat,
    pub status: IndicatorStatus,
    /// Optional secondary text displayed below the value.
    pub subtitle: Option<String>,
}

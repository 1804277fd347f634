use chrono::NaiveDate;
use contracts::dashboards::d100_sales_overview::{
    AppliedFilter, SalesOverviewRequest, ALL_PLATFORMS, ALL_PLATFORMS_LABEL,
};
use contracts::domain::a001_order_record::OrderRecord;
use contracts::enums::Platform;

use crate::shared::data::SalesDataset;
use crate::shared::error::DashboardError;

/// Platform part of the filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformFilter {
    All,
    Named(Platform),
    /// Label of no known platform; accepted, matches nothing
    Unknown(String),
}

impl PlatformFilter {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => PlatformFilter::All,
            Some(v) if v.eq_ignore_ascii_case(ALL_PLATFORMS) || v == ALL_PLATFORMS_LABEL => {
                PlatformFilter::All
            }
            Some(v) => match Platform::from_label(v) {
                Some(platform) => PlatformFilter::Named(platform),
                None => PlatformFilter::Unknown(v.to_string()),
            },
        }
    }

    pub fn matches(&self, record: &OrderRecord) -> bool {
        match self {
            PlatformFilter::All => true,
            PlatformFilter::Named(platform) => record.platform == *platform,
            PlatformFilter::Unknown(_) => false,
        }
    }
}

/// Validated dashboard filter: inclusive date range plus platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesFilter {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub platform: PlatformFilter,
}

impl SalesFilter {
    /// Whole dataset period, every platform
    pub fn everything(dataset: &SalesDataset) -> Self {
        Self {
            date_from: dataset.date_min(),
            date_to: dataset.date_max(),
            platform: PlatformFilter::All,
        }
    }

    /// Build a filter from query parameters.
    ///
    /// A missing bound is clamped to the dataset period; an inverted range is
    /// rejected.
    pub fn from_request(
        request: &SalesOverviewRequest,
        dataset: &SalesDataset,
    ) -> Result<Self, DashboardError> {
        let period = Self::everything(dataset);
        let date_from =
            parse_bound("date_from", request.date_from.as_deref())?.unwrap_or(period.date_from);
        let date_to =
            parse_bound("date_to", request.date_to.as_deref())?.unwrap_or(period.date_to);

        if date_from > date_to {
            return Err(DashboardError::InvalidDateRange {
                from: date_from.to_string(),
                to: date_to.to_string(),
            });
        }

        Ok(Self {
            date_from,
            date_to,
            platform: PlatformFilter::parse(request.platform.as_deref()),
        })
    }

    pub fn matches(&self, record: &OrderRecord) -> bool {
        self.date_from <= record.date && record.date <= self.date_to && self.platform.matches(record)
    }

    pub fn applied(&self) -> AppliedFilter {
        AppliedFilter {
            date_from: self.date_from,
            date_to: self.date_to,
            platform: match &self.platform {
                PlatformFilter::All => None,
                PlatformFilter::Named(platform) => Some(platform.label().to_string()),
                PlatformFilter::Unknown(label) => Some(label.clone()),
            },
        }
    }
}

fn parse_bound(field: &'static str, value: Option<&str>) -> Result<Option<NaiveDate>, DashboardError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => NaiveDate::parse_from_str(v, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| DashboardError::InvalidDate {
                field,
                value: v.to_string(),
            }),
    }
}

/// Records matching the filter, in their original order
pub fn apply_filter<'a>(dataset: &'a SalesDataset, filter: &SalesFilter) -> Vec<&'a OrderRecord> {
    dataset
        .records()
        .iter()
        .filter(|record| filter.matches(record))
        .collect()
}

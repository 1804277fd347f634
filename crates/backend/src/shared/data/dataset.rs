use chrono::NaiveDate;
use contracts::domain::a001_order_record::OrderRecord;
use contracts::enums::Platform;

/// Immutable in-memory record set the dashboard is computed from.
///
/// Built once at startup and shared behind an `Arc` by every request.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesDataset {
    records: Vec<OrderRecord>,
    date_min: NaiveDate,
    date_max: NaiveDate,
}

impl SalesDataset {
    pub fn new(records: Vec<OrderRecord>, date_min: NaiveDate, date_max: NaiveDate) -> Self {
        Self {
            records,
            date_min,
            date_max,
        }
    }

    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    /// First day of the generated period
    pub fn date_min(&self) -> NaiveDate {
        self.date_min
    }

    /// Last day of the generated period (inclusive)
    pub fn date_max(&self) -> NaiveDate {
        self.date_max
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Distinct platforms in the order they first appear in the data
    pub fn platforms(&self) -> Vec<Platform> {
        let mut seen = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.platform) {
                seen.push(record.platform);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::{City, Product, State, Store};

    fn record(day: u32, platform: Platform) -> OrderRecord {
        OrderRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            store_name: Store::LojaPrincipal,
            platform,
            product_name: Product::CaboUsbC,
            customer_name: OrderRecord::customer_label(1),
            total_value: 30.0,
            quantity: 1,
            city: City::SaoPaulo,
            state: State::Sp,
        }
    }

    #[test]
    fn test_platforms_in_first_appearance_order() {
        let dataset = SalesDataset::new(
            vec![
                record(1, Platform::Shopee),
                record(1, Platform::Amazon),
                record(2, Platform::Shopee),
                record(2, Platform::Shein),
            ],
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        );
        assert_eq!(
            dataset.platforms(),
            vec![Platform::Shopee, Platform::Amazon, Platform::Shein]
        );
        assert_eq!(dataset.len(), 4);
    }
}

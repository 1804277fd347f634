use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{City, Platform, Product, State, Store};

/// One synthetic sales transaction.
///
/// Records are produced once by the demo data generator and are never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub date: NaiveDate,
    pub store_name: Store,
    pub platform: Platform,
    pub product_name: Product,
    /// Synthetic customer id, e.g. "Cliente 042"
    pub customer_name: String,
    /// Order total in BRL
    pub total_value: f64,
    pub quantity: u32,
    pub city: City,
    pub state: State,
}

impl OrderRecord {
    /// Format a customer number the way the generator names customers
    pub fn customer_label(number: u32) -> String {
        format!("Cliente {:03}", number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_label_is_zero_padded() {
        assert_eq!(OrderRecord::customer_label(7), "Cliente 007");
        assert_eq!(OrderRecord::customer_label(999), "Cliente 999");
    }

    #[test]
    fn test_serializes_labels() {
        let record = OrderRecord {
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            store_name: Store::FilialSp,
            platform: Platform::MercadoLivre,
            product_name: Product::PowerBank,
            customer_name: OrderRecord::customer_label(12),
            total_value: 120.5,
            quantity: 2,
            city: City::Salvador,
            state: State::Ba,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2024-06-01");
        assert_eq!(json["platform"], "Mercado Livre");
        assert_eq!(json["product_name"], "Power Bank");
        assert_eq!(json["state"], "BA");
    }
}

//! Synthetic demo data.
//!
//! Produces one order stream per calendar day with a yearly sine-shaped
//! seasonality plus gaussian noise. Output is fully determined by
//! [`DatasetConfig`]: same seed and period, same records in the same order.

use anyhow::{bail, Result};
use chrono::{Datelike, NaiveDate};
use contracts::domain::a001_order_record::OrderRecord;
use contracts::enums::{City, Platform, Product, State, Store};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use std::f64::consts::PI;

use super::dataset::SalesDataset;
use crate::shared::config::{DatasetConfig, RegionMode};

const BASE_ORDERS: f64 = 50.0;
const SEASONAL_AMPLITUDE: f64 = 30.0;
const NOISE_STD_DEV: f64 = 10.0;

const MIN_ORDER_VALUE: f64 = 25.0;
const MAX_ORDER_VALUE: f64 = 500.0;
/// Quantity is drawn from `1..MAX_QUANTITY`
const MAX_QUANTITY: u32 = 5;
/// Customer numbers are drawn from `1..MAX_CUSTOMER`
const MAX_CUSTOMER: u32 = 1000;

/// Expected number of orders for a day (before noise)
pub fn seasonal_base(date: NaiveDate) -> f64 {
    let day_of_year = date.ordinal() as f64;
    BASE_ORDERS + SEASONAL_AMPLITUDE * (2.0 * PI * day_of_year / 365.0).sin()
}

/// Number of orders for a day given the drawn noise; never below 1
pub fn daily_order_count(base: f64, noise: f64) -> usize {
    (base + noise).round().max(1.0) as usize
}

fn pick<T: Copy, const N: usize>(rng: &mut StdRng, items: &[T; N]) -> T {
    items[rng.gen_range(0..N)]
}

/// Generate the demo dataset for the configured period
pub fn generate(config: &DatasetConfig) -> Result<SalesDataset> {
    if config.date_from > config.date_to {
        bail!(
            "dataset period is inverted: {} > {}",
            config.date_from,
            config.date_to
        );
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let noise = Normal::new(0.0, NOISE_STD_DEV)
        .map_err(|e| anyhow::anyhow!("invalid noise distribution: {e}"))?;

    let stores = Store::all();
    let platforms = Platform::all();
    let products = Product::all();
    let cities = City::all();
    let states = State::all();

    let mut records = Vec::new();
    let mut day = config.date_from;
    loop {
        let count = daily_order_count(seasonal_base(day), noise.sample(&mut rng));

        for _ in 0..count {
            let store_name = pick(&mut rng, &stores);
            let platform = pick(&mut rng, &platforms);
            let product_name = pick(&mut rng, &products);
            let customer_name = OrderRecord::customer_label(rng.gen_range(1..MAX_CUSTOMER));
            let total_value = rng.gen_range(MIN_ORDER_VALUE..MAX_ORDER_VALUE);
            let quantity = rng.gen_range(1..MAX_QUANTITY);
            let city = pick(&mut rng, &cities);
            let state = match config.region_mode {
                RegionMode::Independent => pick(&mut rng, &states),
                RegionMode::Correlated => city.home_state(),
            };

            records.push(OrderRecord {
                date: day,
                store_name,
                platform,
                product_name,
                customer_name,
                total_value,
                quantity,
                city,
                state,
            });
        }

        if day >= config.date_to {
            break;
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }

    tracing::info!(
        "Generated {} demo orders for {}..{} (seed {})",
        records.len(),
        config.date_from,
        config.date_to,
        config.seed
    );

    Ok(SalesDataset::new(records, config.date_from, config.date_to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn config() -> DatasetConfig {
        DatasetConfig::default()
    }

    #[test]
    fn test_seasonal_base_shape() {
        // Peak near day 91, trough near day 274
        assert!(seasonal_base(date(2024, 3, 31)) > 79.0);
        assert!(seasonal_base(date(2024, 9, 30)) < 21.0);
        assert!((seasonal_base(date(2024, 12, 30)) - 50.0).abs() < 1.0);
    }

    #[test]
    fn test_daily_order_count_floor() {
        assert_eq!(daily_order_count(20.0, -40.0), 1);
        assert_eq!(daily_order_count(0.2, 0.0), 1);
        assert_eq!(daily_order_count(50.0, 0.4), 50);
        assert_eq!(daily_order_count(50.0, 0.6), 51);
    }

    #[test]
    fn test_at_least_one_record_per_day() {
        let dataset = generate(&config()).unwrap();
        let mut per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
        for record in dataset.records() {
            *per_day.entry(record.date).or_insert(0) += 1;
        }
        // 2024 is a leap year
        assert_eq!(per_day.len(), 366);
        assert!(per_day.values().all(|&n| n >= 1));
        assert_eq!(per_day.keys().next(), Some(&date(2024, 1, 1)));
        assert_eq!(per_day.keys().last(), Some(&date(2024, 12, 31)));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let first = generate(&config()).unwrap();
        let second = generate(&config()).unwrap();
        assert_eq!(first.len(), second.len());
        assert_eq!(first, second);
    }

    #[test]
    fn test_other_seed_changes_data() {
        let first = generate(&config()).unwrap();
        let other = generate(&DatasetConfig {
            seed: 7,
            ..config()
        })
        .unwrap();
        assert_ne!(first, other);
    }

    #[test]
    fn test_field_domains() {
        let dataset = generate(&config()).unwrap();
        for record in dataset.records() {
            assert!(record.total_value >= 25.0 && record.total_value < 500.0);
            assert!((1..5).contains(&record.quantity));
            let number: u32 = record
                .customer_name
                .strip_prefix("Cliente ")
                .unwrap()
                .parse()
                .unwrap();
            assert!((1..1000).contains(&number));
        }
    }

    #[test]
    fn test_records_are_in_date_order() {
        let dataset = generate(&config()).unwrap();
        assert!(dataset
            .records()
            .windows(2)
            .all(|pair| pair[0].date <= pair[1].date));
    }

    #[test]
    fn test_correlated_regions_are_consistent() {
        let dataset = generate(&DatasetConfig {
            region_mode: RegionMode::Correlated,
            date_to: date(2024, 1, 31),
            ..config()
        })
        .unwrap();
        assert!(dataset
            .records()
            .iter()
            .all(|r| r.city.home_state() == r.state));
    }

    #[test]
    fn test_independent_regions_mix_pairs() {
        let dataset = generate(&config()).unwrap();
        assert!(dataset
            .records()
            .iter()
            .any(|r| r.city.home_state() != r.state));
    }

    #[test]
    fn test_single_day_period() {
        let dataset = generate(&DatasetConfig {
            date_from: date(2024, 6, 1),
            date_to: date(2024, 6, 1),
            ..config()
        })
        .unwrap();
        assert!(dataset.len() > 0);
        assert!(dataset.records().iter().all(|r| r.date == date(2024, 6, 1)));
    }

    #[test]
    fn test_inverted_period_fails() {
        let result = generate(&DatasetConfig {
            date_from: date(2024, 2, 1),
            date_to: date(2024, 1, 1),
            ..config()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_every_platform_present_over_a_year() {
        let dataset = generate(&config()).unwrap();
        assert_eq!(dataset.platforms().len(), Platform::all().len());
    }
}

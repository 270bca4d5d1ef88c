use crate::daily::DailyOrders;
use crate::demographics::{AgeBreakdown, CategoryCount, GenderBreakdown};
use crate::products::ProductQuantity;
use crate::rfm::RfmRow;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Everything the sales dashboard shows, derived from one filtered set of orders.
///
/// This struct is the final output of the `AnalyticsEngine` and the data transfer
/// object handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesReport {
    // I. Period covered by the input
    pub first_order_date: Option<NaiveDate>,
    pub last_order_date: Option<NaiveDate>,

    // II. Daily orders
    pub total_orders: usize,
    pub total_revenue: Decimal,
    pub daily_orders: DailyOrders,

    // III. Product performance
    pub best_products: Vec<ProductQuantity>,
    pub worst_products: Vec<ProductQuantity>,

    // IV. Customer demographics
    pub customers_by_gender: GenderBreakdown,
    pub customers_by_age_group: AgeBreakdown,
    /// States ordered by customer count, largest first.
    pub customers_by_state: Vec<CategoryCount<String>>,

    // V. RFM
    pub rfm: RfmSummary,
}

/// Averages and leaderboards taken from the RFM table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RfmSummary {
    pub average_recency_days: Option<Decimal>, // None when there are no customers
    pub average_frequency: Option<Decimal>,
    pub average_monetary: Option<Decimal>,
    pub top_by_recency: Vec<RfmRow>,
    pub top_by_frequency: Vec<RfmRow>,
    pub top_by_monetary: Vec<RfmRow>,
}

impl SalesReport {
    /// Creates an empty report, which is what an empty input produces.
    pub fn new() -> Self {
        Self {
            first_order_date: None,
            last_order_date: None,
            total_orders: 0,
            total_revenue: Decimal::ZERO,
            daily_orders: DailyOrders::default(),
            best_products: Vec::new(),
            worst_products: Vec::new(),
            customers_by_gender: GenderBreakdown::default(),
            customers_by_age_group: AgeBreakdown::default(),
            customers_by_state: Vec::new(),
            rfm: RfmSummary::default(),
        }
    }
}

impl Default for SalesReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::AnalyticsEngine;
    use crate::test_support::order;
    use rust_decimal_macros::dec;

    #[test]
    fn serializes_views_as_plain_arrays() {
        let orders = vec![
            order("1", "A", "Mouse", 2, dec!(100), (2024, 1, 1)),
            order("2", "B", "Keyboard", 5, dec!(200), (2024, 1, 3)),
        ];
        let report = AnalyticsEngine::new().build_report(&orders, 5).unwrap();

        let json = serde_json::to_value(&report).unwrap();

        let daily = json["daily_orders"].as_array().unwrap();
        assert_eq!(daily.len(), 2);
        assert_eq!(daily[0]["date"], "2024-01-01");
        assert_eq!(daily[0]["order_count"], 1);
        assert!(json["customers_by_gender"].is_array());
        assert_eq!(json["customers_by_age_group"][0]["category"], "Adults");
        assert_eq!(json["best_products"][0]["product_name"], "Keyboard");
        assert_eq!(json["rfm"]["top_by_monetary"][0]["customer_id"], "B");
    }

    #[test]
    fn json_round_trip_preserves_the_report() {
        let orders = vec![order("1", "A", "Mouse", 2, dec!(100.25), (2024, 1, 1))];
        let report = AnalyticsEngine::new().build_report(&orders, 5).unwrap();

        let json = serde_json::to_string(&report).unwrap();
        let restored: SalesReport = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, report);
    }
}

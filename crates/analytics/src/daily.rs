use crate::error::AnalyticsError;
use crate::util::add_decimal;
use chrono::NaiveDate;
use core_types::OrderRecord;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Orders and revenue for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyOrdersRow {
    pub date: NaiveDate,
    /// Distinct `order_id`s seen that day.
    pub order_count: usize,
    pub revenue: Decimal,
}

/// Orders resampled to daily granularity, ascending by date.
///
/// Days without orders are not synthesized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailyOrders {
    pub rows: Vec<DailyOrdersRow>,
}

impl DailyOrders {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of the per-day distinct order counts.
    pub fn total_orders(&self) -> usize {
        self.rows.iter().map(|row| row.order_count).sum()
    }

    pub fn total_revenue(&self) -> Result<Decimal, AnalyticsError> {
        self.rows
            .iter()
            .try_fold(Decimal::ZERO, |acc, row| add_decimal(acc, row.revenue, "revenue"))
    }
}

/// Groups line items by the calendar day of `order_date`.
pub fn daily_orders(orders: &[OrderRecord]) -> Result<DailyOrders, AnalyticsError> {
    let mut days: BTreeMap<NaiveDate, (HashSet<&str>, Decimal)> = BTreeMap::new();

    for order in orders {
        let (order_ids, revenue) = days.entry(order.order_day()).or_default();
        order_ids.insert(order.order_id.as_str());
        *revenue = add_decimal(*revenue, order.total_price, "revenue")?;
    }

    let rows = days
        .into_iter()
        .map(|(date, (order_ids, revenue))| DailyOrdersRow {
            date,
            order_count: order_ids.len(),
            revenue,
        })
        .collect();

    Ok(DailyOrders { rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{day, order};
    use rust_decimal_macros::dec;

    #[test]
    fn counts_distinct_orders_per_day() {
        // Order #1 has two line items on the same day.
        let orders = vec![
            order("1", "A", "Mouse", 1, dec!(10), (2024, 1, 1)),
            order("1", "A", "Keyboard", 1, dec!(30), (2024, 1, 1)),
            order("2", "B", "Mouse", 1, dec!(10), (2024, 1, 1)),
        ];

        let daily = daily_orders(&orders).unwrap();

        assert_eq!(
            daily.rows,
            vec![DailyOrdersRow {
                date: day(2024, 1, 1),
                order_count: 2,
                revenue: dec!(50),
            }]
        );
    }

    #[test]
    fn skips_days_without_orders() {
        let orders = vec![
            order("1", "A", "Mouse", 1, dec!(10), (2024, 1, 1)),
            order("2", "A", "Mouse", 1, dec!(15), (2024, 1, 5)),
        ];

        let daily = daily_orders(&orders).unwrap();

        let dates: Vec<_> = daily.rows.iter().map(|row| row.date).collect();
        assert_eq!(dates, vec![day(2024, 1, 1), day(2024, 1, 5)]);
        assert_eq!(daily.total_orders(), 2);
        assert_eq!(daily.total_revenue().unwrap(), dec!(25));
    }

    #[test]
    fn output_is_date_ascending_for_unsorted_input() {
        let orders = vec![
            order("2", "A", "Mouse", 1, dec!(15), (2024, 2, 1)),
            order("1", "A", "Mouse", 1, dec!(10), (2024, 1, 1)),
        ];

        let daily = daily_orders(&orders).unwrap();

        assert_eq!(daily.rows[0].date, day(2024, 1, 1));
        assert_eq!(daily.rows[1].date, day(2024, 2, 1));
    }

    #[test]
    fn empty_input_gives_empty_view() {
        let daily = daily_orders(&[]).unwrap();
        assert!(daily.is_empty());
        assert_eq!(daily.total_revenue().unwrap(), Decimal::ZERO);
    }

    #[test]
    fn revenue_overflow_is_an_error() {
        let orders = vec![
            order("1", "A", "Mouse", 1, Decimal::MAX, (2024, 1, 1)),
            order("2", "B", "Mouse", 1, Decimal::MAX, (2024, 1, 1)),
        ];

        let err = daily_orders(&orders).unwrap_err();
        assert_eq!(err, AnalyticsError::Overflow("revenue".to_string()));
    }
}

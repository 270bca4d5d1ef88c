use crate::error::AnalyticsError;
use crate::util::{add_decimal, mean};
use chrono::NaiveDate;
use core_types::OrderRecord;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Recency, frequency and monetary value of a single customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RfmRow {
    pub customer_id: String,
    /// Whole days between the customer's last order and the reference date.
    pub recency_days: i64,
    /// Distinct orders placed by the customer.
    pub frequency: usize,
    /// Total spend across all of the customer's line items.
    pub monetary: Decimal,
}

/// One RFM row per distinct customer.
///
/// Rows are kept in `customer_id` order; consumers apply their own ranking
/// through the `top_by_*` helpers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RfmTable {
    /// The latest order date across the whole input, `None` for an empty input.
    pub reference_date: Option<NaiveDate>,
    pub rows: Vec<RfmRow>,
}

impl RfmTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Most recently active customers first.
    pub fn top_by_recency(&self, n: usize) -> Vec<RfmRow> {
        self.top_by(n, |a, b| a.recency_days.cmp(&b.recency_days))
    }

    /// Customers with the most distinct orders first.
    pub fn top_by_frequency(&self, n: usize) -> Vec<RfmRow> {
        self.top_by(n, |a, b| b.frequency.cmp(&a.frequency))
    }

    /// Highest spenders first.
    pub fn top_by_monetary(&self, n: usize) -> Vec<RfmRow> {
        self.top_by(n, |a, b| b.monetary.cmp(&a.monetary))
    }

    pub fn average_recency(&self) -> Option<Decimal> {
        let total: i64 = self.rows.iter().map(|row| row.recency_days).sum();
        mean(Decimal::from(total), self.rows.len())
    }

    pub fn average_frequency(&self) -> Option<Decimal> {
        let total: usize = self.rows.iter().map(|row| row.frequency).sum();
        mean(Decimal::from(total), self.rows.len())
    }

    pub fn average_monetary(&self) -> Result<Option<Decimal>, AnalyticsError> {
        let total = self
            .rows
            .iter()
            .try_fold(Decimal::ZERO, |acc, row| add_decimal(acc, row.monetary, "monetary"))?;
        Ok(mean(total, self.rows.len()))
    }

    // Rows are already in customer_id order and sort_by is stable, so ties fall back to the id.
    fn top_by<F>(&self, n: usize, compare: F) -> Vec<RfmRow>
    where
        F: Fn(&RfmRow, &RfmRow) -> std::cmp::Ordering,
    {
        let mut rows = self.rows.clone();
        rows.sort_by(compare);
        rows.truncate(n);
        rows
    }
}

struct CustomerActivity<'a> {
    last_order_day: NaiveDate,
    order_ids: HashSet<&'a str>,
    monetary: Decimal,
}

/// Computes the RFM metrics of every customer in `orders`.
///
/// Recency is measured against the latest order date of the entire input,
/// truncated to the calendar day, so it is never negative.
pub fn rfm_table(orders: &[OrderRecord]) -> Result<RfmTable, AnalyticsError> {
    let Some(reference_date) = orders.iter().map(OrderRecord::order_day).max() else {
        return Ok(RfmTable::default());
    };

    let mut customers: BTreeMap<&str, CustomerActivity> = BTreeMap::new();
    for order in orders {
        let order_day = order.order_day();
        let activity = customers
            .entry(order.customer_id.as_str())
            .or_insert_with(|| CustomerActivity {
                last_order_day: order_day,
                order_ids: HashSet::new(),
                monetary: Decimal::ZERO,
            });

        activity.last_order_day = activity.last_order_day.max(order_day);
        activity.order_ids.insert(order.order_id.as_str());
        activity.monetary = add_decimal(activity.monetary, order.total_price, "monetary")?;
    }

    tracing::debug!(
        %reference_date,
        customers = customers.len(),
        "Computed RFM activity."
    );

    let rows = customers
        .into_iter()
        .map(|(customer_id, activity)| RfmRow {
            customer_id: customer_id.to_string(),
            recency_days: (reference_date - activity.last_order_day).num_days(),
            frequency: activity.order_ids.len(),
            monetary: activity.monetary,
        })
        .collect();

    Ok(RfmTable {
        reference_date: Some(reference_date),
        rows,
    })
}

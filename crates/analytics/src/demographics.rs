use core_types::{AgeGroup, OrderRecord};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// The number of distinct customers falling into one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount<C> {
    pub category: C,
    pub customer_count: usize,
}

/// Distinct customers per category, in the category's natural order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Breakdown<C> {
    pub rows: Vec<CategoryCount<C>>,
}

pub type GenderBreakdown = Breakdown<String>;
pub type StateBreakdown = Breakdown<String>;
/// Always in `Youth, Adults, Seniors` order; groups absent from the data are omitted.
pub type AgeBreakdown = Breakdown<AgeGroup>;

impl<C> Default for Breakdown<C> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<C: Clone> Breakdown<C> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows sorted by customer count, largest first. Equal counts keep category order.
    pub fn by_count_desc(&self) -> Vec<CategoryCount<C>> {
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| b.customer_count.cmp(&a.customer_count));
        rows
    }
}

fn distinct_customers_by<'a, C, F>(orders: &'a [OrderRecord], category: F) -> Breakdown<C>
where
    C: Ord,
    F: Fn(&'a OrderRecord) -> C,
{
    let mut groups: BTreeMap<C, HashSet<&'a str>> = BTreeMap::new();
    for order in orders {
        groups
            .entry(category(order))
            .or_default()
            .insert(order.customer_id.as_str());
    }

    let rows = groups
        .into_iter()
        .map(|(category, customers)| CategoryCount {
            category,
            customer_count: customers.len(),
        })
        .collect();

    Breakdown { rows }
}

pub fn customers_by_gender(orders: &[OrderRecord]) -> GenderBreakdown {
    distinct_customers_by(orders, |order| order.gender.clone())
}

pub fn customers_by_age_group(orders: &[OrderRecord]) -> AgeBreakdown {
    distinct_customers_by(orders, |order| order.age_group)
}

pub fn customers_by_state(orders: &[OrderRecord]) -> StateBreakdown {
    distinct_customers_by(orders, |order| order.state.clone())
}

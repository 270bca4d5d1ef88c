use crate::error::AnalyticsError;
use crate::util::add_quantity;
use core_types::OrderRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductQuantity {
    pub product_name: String,
    pub total_quantity: u64,
}

/// Products ordered by units sold, highest first.
///
/// Products with equal quantities are ordered by name, ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductRanking {
    pub rows: Vec<ProductQuantity>,
}

impl ProductRanking {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The `n` best-selling products, highest quantity first.
    pub fn best(&self, n: usize) -> &[ProductQuantity] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// The `n` worst-selling products, lowest quantity first.
    ///
    /// This is the tail of the ranking read backwards, so at a tie on the
    /// boundary the product that sorts last by name is the one reported.
    pub fn worst(&self, n: usize) -> Vec<ProductQuantity> {
        self.rows.iter().rev().take(n).cloned().collect()
    }
}

/// Sums `quantity_x` per product and ranks the products by total units.
pub fn product_ranking(orders: &[OrderRecord]) -> Result<ProductRanking, AnalyticsError> {
    let mut totals: BTreeMap<&str, u64> = BTreeMap::new();

    for order in orders {
        let total = totals.entry(order.product_name.as_str()).or_default();
        *total = add_quantity(*total, order.quantity_x, "quantity_x")?;
    }

    // BTreeMap yields names in lexical order and sort_by is stable, which fixes the tie-break.
    let mut rows: Vec<ProductQuantity> = totals
        .into_iter()
        .map(|(product_name, total_quantity)| ProductQuantity {
            product_name: product_name.to_string(),
            total_quantity,
        })
        .collect();
    rows.sort_by(|a, b| b.total_quantity.cmp(&a.total_quantity));

    Ok(ProductRanking { rows })
}

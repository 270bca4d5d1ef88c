use crate::enums::AgeGroup;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line item of an order, as handed to the aggregators.
///
/// A single `order_id` may span several records (one per product line).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: String,
    pub customer_id: String,
    pub product_name: String,
    /// Units sold in this line item.
    pub quantity_x: u32,
    /// Monetary amount for this line item.
    pub total_price: Decimal,
    pub order_date: NaiveDateTime,
    pub gender: String,
    pub age_group: AgeGroup,
    pub state: String,
}

impl OrderRecord {
    /// The calendar day this line item was ordered on.
    pub fn order_day(&self) -> NaiveDate {
        self.order_date.date()
    }
}

use chrono::NaiveDate;
use core_types::{AgeGroup, OrderRecord};
use rust_decimal::Decimal;

/// Builds a line item dated at noon on the given day.
pub(crate) fn order(
    order_id: &str,
    customer_id: &str,
    product: &str,
    quantity: u32,
    total_price: Decimal,
    (year, month, day): (i32, u32, u32),
) -> OrderRecord {
    OrderRecord {
        order_id: order_id.to_string(),
        customer_id: customer_id.to_string(),
        product_name: product.to_string(),
        quantity_x: quantity,
        total_price,
        order_date: NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap(),
        gender: "F".to_string(),
        age_group: AgeGroup::Adults,
        state: "Victoria".to_string(),
    }
}

pub(crate) fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

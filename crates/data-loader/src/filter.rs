use crate::error::LoaderError;
use chrono::NaiveDate;
use core_types::OrderRecord;

/// The first and last calendar day present in `orders`, or `None` when empty.
///
/// This is the default reporting range when the caller does not pick one.
pub fn date_bounds(orders: &[OrderRecord]) -> Option<(NaiveDate, NaiveDate)> {
    let first = orders.iter().map(OrderRecord::order_day).min()?;
    let last = orders.iter().map(OrderRecord::order_day).max()?;
    Some((first, last))
}

/// Keeps the lines whose calendar day falls within `start..=end`.
///
/// Input order is preserved, so sorted input stays sorted.
pub fn filter_by_date_range(
    orders: &[OrderRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<OrderRecord>, LoaderError> {
    if start > end {
        return Err(LoaderError::InvalidDateRange { start, end });
    }

    let filtered: Vec<OrderRecord> = orders
        .iter()
        .filter(|order| (start..=end).contains(&order.order_day()))
        .cloned()
        .collect();

    tracing::debug!(
        %start,
        %end,
        kept = filtered.len(),
        dropped = orders.len() - filtered.len(),
        "Applied date range filter."
    );

    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::AgeGroup;
    use rust_decimal_macros::dec;

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn line(order_id: &str, date: NaiveDate, hour: u32) -> OrderRecord {
        OrderRecord {
            order_id: order_id.to_string(),
            customer_id: "A".to_string(),
            product_name: "Mouse".to_string(),
            quantity_x: 1,
            total_price: dec!(10),
            order_date: date.and_hms_opt(hour, 0, 0).unwrap(),
            gender: "F".to_string(),
            age_group: AgeGroup::Adults,
            state: "Victoria".to_string(),
        }
    }

    fn sample() -> Vec<OrderRecord> {
        vec![
            line("1", day(2024, 1, 1), 8),
            line("2", day(2024, 1, 2), 23),
            line("3", day(2024, 1, 3), 0),
            line("4", day(2024, 1, 4), 12),
        ]
    }

    #[test]
    fn bounds_span_first_and_last_day() {
        assert_eq!(date_bounds(&sample()), Some((day(2024, 1, 1), day(2024, 1, 4))));
        assert_eq!(date_bounds(&[]), None);
    }

    #[test]
    fn range_is_inclusive_on_calendar_days() {
        let filtered = filter_by_date_range(&sample(), day(2024, 1, 2), day(2024, 1, 3)).unwrap();

        let ids: Vec<_> = filtered.iter().map(|o| o.order_id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn range_outside_data_is_empty() {
        let filtered = filter_by_date_range(&sample(), day(2025, 1, 1), day(2025, 2, 1)).unwrap();
        assert!(filtered.is_empty());
    }

    #[test]
    fn reversed_range_is_rejected() {
        let err = filter_by_date_range(&sample(), day(2024, 1, 4), day(2024, 1, 1)).unwrap_err();
        assert!(matches!(err, LoaderError::InvalidDateRange { .. }));
    }
}

use crate::error::AnalyticsError;
use rust_decimal::Decimal;

/// Adds two decimals, reporting overflow against the named metric instead of panicking.
pub(crate) fn add_decimal(
    acc: Decimal,
    value: Decimal,
    metric: &str,
) -> Result<Decimal, AnalyticsError> {
    acc.checked_add(value)
        .ok_or_else(|| AnalyticsError::Overflow(metric.to_string()))
}

pub(crate) fn add_quantity(acc: u64, value: u32, metric: &str) -> Result<u64, AnalyticsError> {
    acc.checked_add(u64::from(value))
        .ok_or_else(|| AnalyticsError::Overflow(metric.to_string()))
}

/// Arithmetic mean of `total` over `count` items, `None` when there is nothing to average.
pub(crate) fn mean(total: Decimal, count: usize) -> Option<Decimal> {
    if count == 0 {
        return None;
    }
    Some(total / Decimal::from(count))
}

use crate::error::LoaderError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use core_types::{AgeGroup, OrderRecord};
use csv::StringRecord;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Header positions of the columns the aggregators need. Other columns are ignored.
#[derive(Debug)]
struct Columns {
    order_id: usize,
    customer_id: usize,
    product_name: usize,
    quantity_x: usize,
    total_price: usize,
    order_date: usize,
    gender: usize,
    age_group: usize,
    state: usize,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self, LoaderError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|header| header == name)
                .ok_or_else(|| LoaderError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            order_id: find("order_id")?,
            customer_id: find("customer_id")?,
            product_name: find("product_name")?,
            quantity_x: find("quantity_x")?,
            total_price: find("total_price")?,
            order_date: find("order_date")?,
            gender: find("gender")?,
            age_group: find("age_group")?,
            state: find("state")?,
        })
    }

    fn parse_row(&self, record: &StringRecord, row: usize) -> Result<OrderRecord, LoaderError> {
        let cell = |index: usize| record.get(index).unwrap_or("");

        Ok(OrderRecord {
            order_id: parse_required(cell(self.order_id), row, "order_id")?,
            customer_id: parse_required(cell(self.customer_id), row, "customer_id")?,
            product_name: parse_required(cell(self.product_name), row, "product_name")?,
            quantity_x: parse_quantity(cell(self.quantity_x), row)?,
            total_price: parse_price(cell(self.total_price), row)?,
            order_date: parse_order_date(cell(self.order_date), row)?,
            gender: parse_required(cell(self.gender), row, "gender")?,
            age_group: parse_age_group(cell(self.age_group), row)?,
            state: parse_required(cell(self.state), row, "state")?,
        })
    }
}

fn invalid(row: usize, column: &str, value: &str, reason: impl Into<String>) -> LoaderError {
    LoaderError::InvalidValue {
        row,
        column: column.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Identifiers and grouping keys must be present; a blank cell would otherwise form its own group.
fn parse_required(value: &str, row: usize, column: &str) -> Result<String, LoaderError> {
    if value.is_empty() {
        return Err(LoaderError::EmptyField {
            row,
            column: column.to_string(),
        });
    }
    Ok(value.to_string())
}

/// Accepts plain integers and integral decimals such as `3.0`, which spreadsheet exports produce.
fn parse_quantity(value: &str, row: usize) -> Result<u32, LoaderError> {
    if let Ok(quantity) = value.parse::<u32>() {
        return Ok(quantity);
    }

    let decimal = Decimal::from_str(value)
        .map_err(|_| invalid(row, "quantity_x", value, "expected a non-negative integer"))?;
    if !decimal.fract().is_zero() || decimal.is_sign_negative() {
        return Err(invalid(row, "quantity_x", value, "expected a non-negative integer"));
    }
    decimal
        .to_u32()
        .ok_or_else(|| invalid(row, "quantity_x", value, "quantity out of range"))
}

fn parse_price(value: &str, row: usize) -> Result<Decimal, LoaderError> {
    let price = Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .map_err(|_| invalid(row, "total_price", value, "expected a decimal number"))?;
    if price.is_sign_negative() && !price.is_zero() {
        return Err(invalid(row, "total_price", value, "price must not be negative"));
    }
    Ok(price)
}

fn parse_order_date(value: &str, row: usize) -> Result<NaiveDateTime, LoaderError> {
    parse_datetime(value)
        .ok_or_else(|| invalid(row, "order_date", value, "unrecognised date format"))
}

/// Parses the timestamp layouts seen in order exports. Offsets are dropped, keeping wall-clock time.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.naive_local());
    }
    if let Some(datetime) = DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
    {
        return Some(datetime);
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .map(|date| date.and_time(NaiveTime::MIN))
}

fn parse_age_group(value: &str, row: usize) -> Result<AgeGroup, LoaderError> {
    value
        .parse::<AgeGroup>()
        .map_err(|e| invalid(row, "age_group", value, e.to_string()))
}

/// Loads order lines from any CSV source and sorts them by `order_date`.
///
/// The header row must contain every column of `OrderRecord`; the first absent
/// one is reported as a schema error. The sort is stable, so lines with the same
/// timestamp keep their file order.
pub fn load_orders<R: Read>(reader: R) -> Result<Vec<OrderRecord>, LoaderError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns = Columns::from_headers(csv_reader.headers()?)?;

    let mut orders = Vec::new();
    for (index, result) in csv_reader.records().enumerate() {
        let record = result?;
        // Header is line 1; prefer the reader's own line count when quoted fields span lines.
        let row = record
            .position()
            .map(|position| position.line() as usize)
            .unwrap_or(index + 2);
        orders.push(columns.parse_row(&record, row)?);
    }

    orders.sort_by_key(|order| order.order_date);

    tracing::info!(rows = orders.len(), "Loaded order lines.");
    Ok(orders)
}

/// Opens `path` and delegates to [`load_orders`].
pub fn load_orders_file(path: impl AsRef<Path>) -> Result<Vec<OrderRecord>, LoaderError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoaderError::Io {
        path: path.display().to_string(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "Reading order export.");
    load_orders(file)
}

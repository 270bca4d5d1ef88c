//! # Order Data Loader
//!
//! The ingestion boundary of the workspace. It turns a CSV order export into
//! typed `OrderRecord`s, raising schema and type errors here so the analytics
//! crate can assume well-formed input.
//!
//! - `load_orders` / `load_orders_file`: read, coerce and sort by `order_date`.
//! - `date_bounds`: the min/max calendar day, used as the default range.
//! - `filter_by_date_range`: inclusive calendar-day filter.

pub mod error;
pub mod filter;
pub mod loader;

pub use error::LoaderError;
pub use filter::{date_bounds, filter_by_date_range};
pub use loader::{load_orders, load_orders_file, parse_datetime};

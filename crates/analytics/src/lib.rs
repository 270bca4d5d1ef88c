//! # Sales Analytics Aggregator
//!
//! This crate derives the reporting views of the sales dashboard from a set of
//! order line items.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of files,
//!   CSV or rendering. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** Every aggregator is a plain function over
//!   `&[OrderRecord]`. Nothing is cached between calls; the caller passes in
//!   whatever subset of orders it has filtered and gets fresh views back.
//! - **Empty is not an error:** each aggregator returns an empty view for an
//!   empty input. The only failure inside this crate is decimal overflow.
//!
//! ## Public API
//!
//! - `daily_orders`, `product_ranking`, `customers_by_gender`,
//!   `customers_by_age_group`, `customers_by_state`, `rfm_table`: the aggregators.
//! - `AnalyticsEngine`: builds a complete `SalesReport` from the aggregators.
//! - `AnalyticsError`: the error type returned from this crate.

// Declare the modules that constitute this crate.
pub mod daily;
pub mod demographics;
pub mod engine;
pub mod error;
pub mod products;
pub mod report;
pub mod rfm;
mod util;

#[cfg(test)]
mod test_support;

// Re-export the key components to create a clean, public-facing API.
pub use daily::{daily_orders, DailyOrders, DailyOrdersRow};
pub use demographics::{
    customers_by_age_group, customers_by_gender, customers_by_state, AgeBreakdown, Breakdown,
    CategoryCount, GenderBreakdown, StateBreakdown,
};
pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use products::{product_ranking, ProductQuantity, ProductRanking};
pub use report::{RfmSummary, SalesReport};
pub use rfm::{rfm_table, RfmRow, RfmTable};

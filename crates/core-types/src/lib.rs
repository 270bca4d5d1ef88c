//! # Core Types
//!
//! Layer 0 of the workspace: the statically typed order line that every other
//! crate agrees on. No I/O and no aggregation logic lives here.

pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::AgeGroup;
pub use error::CoreError;
pub use structs::OrderRecord;

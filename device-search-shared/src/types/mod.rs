//! This module defines the core data structures used across the device search crates.
//! It re-exports `ParsedQuery`, `Query` and `CategoryCounts`.

pub mod category_counts;
pub mod parsed_query;
pub mod query;

pub use category_counts::CategoryCounts;
pub use parsed_query::ParsedQuery;
pub use query::{Query, WeightedQuery};

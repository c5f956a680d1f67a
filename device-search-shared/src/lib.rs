//! # Device Search Shared
//!
//! This crate defines the data structures shared between the device search
//! provider, its callers and the catalog implementations it queries: the
//! parsed user query, the boolean catalog query tree and category counts.

pub mod types;

pub use types::category_counts::{CategoryCounts, DEVICE_CATEGORY};
pub use types::parsed_query::ParsedQuery;
pub use types::query::{fields, Query, WeightedQuery};

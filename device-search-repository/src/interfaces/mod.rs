//! Interface definitions for the device search provider.
//!
//! This module defines the traits at every seam of the provider: the catalogs
//! it queries, the permission checker and sorter it delegates to, and the
//! capability contracts it exposes to the host search framework.

mod catalog;
mod permission_checker;
mod search_provider;
mod sorter;

pub use catalog::{CatalogBrain, DeviceSearchCatalog, ModelCatalog};
pub use permission_checker::PermissionChecker;
pub use search_provider::{SearchProvider, SearchResultItem};
pub use sorter::Sorter;

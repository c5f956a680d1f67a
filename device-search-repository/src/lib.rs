//! # Device Search Repository
//!
//! This crate provides the device search provider: it translates parsed user
//! queries into boolean catalog queries, runs them against either the model
//! catalog or the legacy device search catalog, and wraps the hits as uniform
//! search results. The catalogs, the permission system and the sorter are
//! supplied by the host through the traits in [`interfaces`].

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod provider;
pub mod queries;
pub mod result;
pub mod types;

pub use config::{CatalogBackend, SearchProviderConfig};
pub use errors::DeviceSearchError;
pub use interfaces::{
    CatalogBrain, DeviceSearchCatalog, ModelCatalog, PermissionChecker, SearchProvider,
    SearchResultItem, Sorter,
};
pub use provider::{Catalogs, DeviceSearchCatalogs, DeviceSearchProvider, VIEW_PERMISSION};
pub use result::DeviceSearchResult;
pub use types::{
    DeviceObject, ModelCatalogRequest, ModelCatalogResults, ResultFilter, SearchOptions,
    SearchOutcome,
};

//! Device search error types.
//!
//! The provider defines no failure modes of its own beyond configuration.
//! Catalogs, permission checks, entity loading and sorters report failures
//! through this type and the provider hands them back to the caller as-is.

use thiserror::Error;

/// Unified errors from device search operations.
///
/// Used by the collaborator traits (`ModelCatalog`, `DeviceSearchCatalog`,
/// `PermissionChecker`, `CatalogBrain`, `Sorter`) and by `DeviceSearchProvider`.
#[derive(Debug, Clone, Error)]
pub enum DeviceSearchError {
    /// The catalog rejected the query or failed to execute it.
    #[error("Catalog error: {0}")]
    CatalogError(String),

    /// The query could not be constructed (e.g. an unknown index field).
    #[error("Query error: {0}")]
    QueryError(String),

    /// Loading the entity behind a catalog hit failed.
    #[error("Object load error: {0}")]
    ObjectLoadError(String),

    /// The permission check itself failed.
    #[error("Permission error: {0}")]
    PermissionError(String),

    /// The sorter failed to sort or limit results.
    #[error("Sort error: {0}")]
    SortError(String),

    /// The provider was configured with a backend that is not available.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Unknown error.
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl DeviceSearchError {
    /// Create a catalog error.
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::CatalogError(msg.into())
    }

    /// Create a query error.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::QueryError(msg.into())
    }

    /// Create an object load error.
    pub fn object_load(msg: impl Into<String>) -> Self {
        Self::ObjectLoadError(msg.into())
    }

    /// Create a permission error.
    pub fn permission(msg: impl Into<String>) -> Self {
        Self::PermissionError(msg.into())
    }

    /// Create a sort error.
    pub fn sort(msg: impl Into<String>) -> Self {
        Self::SortError(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create an unknown error.
    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::Unknown(msg.into())
    }
}

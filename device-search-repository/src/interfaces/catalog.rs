//! Catalog trait definitions.
//!
//! This module defines the abstract interface of the two catalog back ends a
//! deployment may provide, and of the lightweight records ("brains") they
//! return.

use std::sync::Arc;

use device_search_shared::Query;

use crate::errors::DeviceSearchError;
use crate::types::{DeviceObject, ModelCatalogRequest, ModelCatalogResults};

/// A lightweight catalog record referencing a persisted device.
///
/// `path`, `meta_type` and `id` are read from the catalog record itself.
/// `get_object` loads the full entity from storage and may perform I/O.
pub trait CatalogBrain: Send + Sync {
    /// Path of the referenced object.
    fn path(&self) -> &str;

    /// Catalog-indexed type tag of the referenced object.
    fn meta_type(&self) -> &str;

    /// Identifier of the referenced object.
    fn id(&self) -> &str;

    /// Load the referenced object.
    ///
    /// # Returns
    ///
    /// * `Ok(DeviceObject)` - The loaded entity
    /// * `Err(DeviceSearchError)` - If the object could not be loaded
    fn get_object(&self) -> Result<DeviceObject, DeviceSearchError>;
}

/// The generalized model catalog.
///
/// Scores hits by relevance, filters permissions in bulk and reports the
/// total number of matches independently of the returned page.
pub trait ModelCatalog: Send + Sync {
    /// Execute a search.
    ///
    /// # Arguments
    ///
    /// * `request` - Query, ordering, permission filtering and limit
    ///
    /// # Returns
    ///
    /// * `Ok(ModelCatalogResults)` - Hits (at most `limit`) and the total match count
    /// * `Err(DeviceSearchError)` - If the query is invalid or the catalog is unavailable
    fn search(&self, request: &ModelCatalogRequest)
        -> Result<ModelCatalogResults, DeviceSearchError>;
}

/// The legacy device search glob-index catalog.
///
/// Deprecated in favour of `ModelCatalog`, but still served while a
/// deployment selects it. It performs no permission filtering.
pub trait DeviceSearchCatalog: Send + Sync {
    /// Evaluate `query` and order the hits using `rankers`.
    fn eval_advanced_query(
        &self,
        query: &Query,
        rankers: &[Query],
    ) -> Result<Vec<Arc<dyn CatalogBrain>>, DeviceSearchError>;
}

//! Device search provider implementation.
//!
//! This module provides the search provider registered with the host search
//! framework. It turns parsed queries into catalog queries for whichever
//! catalog back end was selected at construction, runs them and wraps the hits
//! as `DeviceSearchResult`s.

use std::fmt;
use std::sync::Arc;

use device_search_shared::{CategoryCounts, ParsedQuery};
use tracing::{debug, info, instrument};

use crate::config::{CatalogBackend, SearchProviderConfig};
use crate::errors::DeviceSearchError;
use crate::interfaces::{DeviceSearchCatalog, ModelCatalog, PermissionChecker, SearchProvider};
use crate::queries::{device_search_catalog, model_catalog};
use crate::result::DeviceSearchResult;
use crate::types::{ModelCatalogRequest, ResultFilter, SearchOptions, SearchOutcome};

/// Permission a user needs on a device to see it in device search catalog results.
pub const VIEW_PERMISSION: &str = "View";

/// The legacy catalog together with the permission checker it relies on.
#[derive(Clone)]
pub struct DeviceSearchCatalogs {
    pub catalog: Arc<dyn DeviceSearchCatalog>,
    pub permissions: Arc<dyn PermissionChecker>,
}

/// Catalogs the current deployment provides.
#[derive(Clone, Default)]
pub struct Catalogs {
    pub model: Option<Arc<dyn ModelCatalog>>,
    pub device_search: Option<DeviceSearchCatalogs>,
}

enum Backend {
    ModelCatalog(Arc<dyn ModelCatalog>),
    DeviceSearchCatalog(DeviceSearchCatalogs),
}

/// Search provider for devices.
///
/// Searches exactly one catalog back end, chosen when the provider is built.
/// Catalog, permission, loading and sorter failures are returned unchanged.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use device_search_repository::{
///     Catalogs, DeviceSearchProvider, ModelCatalog, SearchOptions, SearchProviderConfig,
/// };
/// use device_search_shared::ParsedQuery;
///
/// # fn example(model_catalog: Arc<dyn ModelCatalog>) -> Result<(), Box<dyn std::error::Error>> {
/// let catalogs = Catalogs {
///     model: Some(model_catalog),
///     device_search: None,
/// };
/// let provider = DeviceSearchProvider::from_catalogs(catalogs, &SearchProviderConfig::from_env())?;
///
/// let query = ParsedQuery::new(["10.0.0"]);
/// if let Some(outcome) = provider.get_search_results(&query, SearchOptions::new().max_results(20))? {
///     println!("{:?}", outcome);
/// }
/// # Ok(())
/// # }
/// ```
pub struct DeviceSearchProvider {
    backend: Backend,
}

impl DeviceSearchProvider {
    /// Create a provider searching the model catalog.
    pub fn model_catalog(catalog: Arc<dyn ModelCatalog>) -> Self {
        Self::with_backend(Backend::ModelCatalog(catalog))
    }

    /// Create a provider searching the legacy device search catalog.
    pub fn device_search_catalog(
        catalog: Arc<dyn DeviceSearchCatalog>,
        permissions: Arc<dyn PermissionChecker>,
    ) -> Self {
        Self::with_backend(Backend::DeviceSearchCatalog(DeviceSearchCatalogs {
            catalog,
            permissions,
        }))
    }

    /// Create a provider from the catalogs the deployment provides.
    ///
    /// # Arguments
    ///
    /// * `catalogs` - Available catalogs
    /// * `config` - Backend selection; automatic selection prefers the model catalog
    ///
    /// # Returns
    ///
    /// * `Ok(DeviceSearchProvider)` - Provider bound to the resolved backend
    /// * `Err(DeviceSearchError::ConfigError)` - If the resolved backend is not available
    pub fn from_catalogs(
        catalogs: Catalogs,
        config: &SearchProviderConfig,
    ) -> Result<Self, DeviceSearchError> {
        let backend = config.resolve_backend(catalogs.model.is_some());
        let backend = match backend {
            CatalogBackend::ModelCatalog => catalogs.model.map(Backend::ModelCatalog),
            CatalogBackend::DeviceSearchCatalog => {
                catalogs.device_search.map(Backend::DeviceSearchCatalog)
            }
        }
        .ok_or_else(|| {
            DeviceSearchError::config(format!("Catalog backend '{}' is not available", backend))
        })?;

        Ok(Self::with_backend(backend))
    }

    fn with_backend(backend: Backend) -> Self {
        let provider = Self { backend };
        info!(backend = %provider.backend(), "Created device search provider");
        provider
    }

    /// The backend this provider searches.
    pub fn backend(&self) -> CatalogBackend {
        match self.backend {
            Backend::ModelCatalog(_) => CatalogBackend::ModelCatalog,
            Backend::DeviceSearchCatalog(_) => CatalogBackend::DeviceSearchCatalog,
        }
    }

    /// Search the catalog for devices matching the query keywords.
    ///
    /// # Arguments
    ///
    /// * `parsed_query` - The parsed user query; only keywords are used
    /// * `options` - Sorter, count-only mode, client filter and result limit
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - The query has no keywords; no catalog is called
    /// * `Ok(Some(SearchOutcome::Counts(_)))` - `{Device: n}` in count-only mode
    /// * `Ok(Some(SearchOutcome::Results(_)))` - Wrapped, filtered and sorted hits
    /// * `Err(DeviceSearchError)` - A collaborator failed
    #[instrument(
        skip(self, parsed_query, options),
        fields(
            backend = %self.backend(),
            keyword_count = parsed_query.keywords.len(),
            count_only = options.count_only,
        )
    )]
    pub fn get_search_results(
        &self,
        parsed_query: &ParsedQuery,
        options: SearchOptions<'_>,
    ) -> Result<Option<SearchOutcome>, DeviceSearchError> {
        if !parsed_query.has_keywords() {
            debug!("No keywords, skipping search");
            return Ok(None);
        }

        let keywords = &parsed_query.keywords;
        let outcome = match &self.backend {
            Backend::ModelCatalog(catalog) => {
                Self::search_model_catalog(catalog.as_ref(), keywords, &options)?
            }
            Backend::DeviceSearchCatalog(catalogs) => {
                Self::search_device_search_catalog(catalogs, keywords, &options)?
            }
        };

        Ok(Some(outcome))
    }

    /// Count matching devices.
    ///
    /// Without a filter the model catalog path returns the catalog's reported
    /// total without wrapping any hit.
    pub fn get_category_counts(
        &self,
        parsed_query: &ParsedQuery,
        filter_fn: Option<ResultFilter<'_>>,
    ) -> Result<Option<CategoryCounts>, DeviceSearchError> {
        let options = SearchOptions {
            count_only: true,
            filter_fn,
            ..SearchOptions::default()
        };
        Ok(self
            .get_search_results(parsed_query, options)?
            .and_then(SearchOutcome::into_counts))
    }

    /// Results for the quick-search drop-down.
    ///
    /// `max_results` is accepted but never becomes the catalog limit: quick
    /// search runs the same unlimited, unsorted search as a bare
    /// `get_search_results` call.
    pub fn get_quick_search_results(
        &self,
        parsed_query: &ParsedQuery,
        max_results: Option<usize>,
    ) -> Result<Option<SearchOutcome>, DeviceSearchError> {
        debug!(
            max_results = ?max_results,
            "Quick search does not forward max_results as a limit"
        );
        self.get_search_results(parsed_query, SearchOptions::default())
    }

    fn search_model_catalog(
        catalog: &dyn ModelCatalog,
        keywords: &[String],
        options: &SearchOptions<'_>,
    ) -> Result<SearchOutcome, DeviceSearchError> {
        let query = model_catalog::build_query(keywords);

        // A zero limit asks the catalog for its total only
        let count_without_hits = options.count_only && options.filter_fn.is_none();
        let limit = if count_without_hits {
            Some(0)
        } else {
            options.max_results
        };

        debug!(query = %query, limit = ?limit, "Searching model catalog");

        let request = ModelCatalogRequest::ranked(query).with_limit(limit);
        let found = catalog.search(&request)?;

        debug!(hits = found.hits.len(), total = found.total, "Model catalog returned");

        if count_without_hits {
            return Ok(SearchOutcome::Counts(CategoryCounts::devices(found.total)));
        }

        let results = found
            .hits
            .into_iter()
            .map(DeviceSearchResult::new)
            .collect();

        Self::finish(results, options)
    }

    fn search_device_search_catalog(
        catalogs: &DeviceSearchCatalogs,
        keywords: &[String],
        options: &SearchOptions<'_>,
    ) -> Result<SearchOutcome, DeviceSearchError> {
        let query = device_search_catalog::build_query(keywords);
        let ranker = device_search_catalog::build_ranker(keywords);

        debug!(query = %query, ranker = %ranker, "Searching device search catalog");

        let hits = catalogs
            .catalog
            .eval_advanced_query(&query, std::slice::from_ref(&ranker))?;
        let hit_count = hits.len();

        let mut results = Vec::with_capacity(hit_count);
        for brain in hits {
            let device = brain.get_object()?;
            if catalogs
                .permissions
                .check_permission(VIEW_PERMISSION, &device)?
            {
                results.push(DeviceSearchResult::new(brain));
            }
        }

        debug!(
            hits = hit_count,
            viewable = results.len(),
            "Device search catalog returned"
        );

        Self::finish(results, options)
    }

    /// Apply the client filter, then count or sort.
    fn finish(
        mut results: Vec<DeviceSearchResult>,
        options: &SearchOptions<'_>,
    ) -> Result<SearchOutcome, DeviceSearchError> {
        if let Some(filter_fn) = options.filter_fn {
            results.retain(|result| filter_fn(result));
        }

        if options.count_only {
            return Ok(SearchOutcome::Counts(CategoryCounts::devices(results.len())));
        }

        if let Some(sorter) = options.sorter {
            results = sorter.limit_sort(results)?;
        }

        Ok(SearchOutcome::Results(results))
    }
}

impl SearchProvider for DeviceSearchProvider {
    fn get_search_results(
        &self,
        parsed_query: &ParsedQuery,
        options: SearchOptions<'_>,
    ) -> Result<Option<SearchOutcome>, DeviceSearchError> {
        DeviceSearchProvider::get_search_results(self, parsed_query, options)
    }

    fn get_category_counts(
        &self,
        parsed_query: &ParsedQuery,
        filter_fn: Option<ResultFilter<'_>>,
    ) -> Result<Option<CategoryCounts>, DeviceSearchError> {
        DeviceSearchProvider::get_category_counts(self, parsed_query, filter_fn)
    }

    fn get_quick_search_results(
        &self,
        parsed_query: &ParsedQuery,
        max_results: Option<usize>,
    ) -> Result<Option<SearchOutcome>, DeviceSearchError> {
        DeviceSearchProvider::get_quick_search_results(self, parsed_query, max_results)
    }
}

impl fmt::Debug for DeviceSearchProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceSearchProvider")
            .field("backend", &self.backend())
            .finish()
    }
}

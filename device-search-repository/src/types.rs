//! Request and response types for device search operations.

use std::fmt;
use std::sync::Arc;

use device_search_shared::{CategoryCounts, Query};
use serde::Serialize;

use crate::interfaces::{CatalogBrain, Sorter};
use crate::result::DeviceSearchResult;

/// Client-side predicate applied to wrapped results.
pub type ResultFilter<'a> = &'a dyn Fn(&DeviceSearchResult) -> bool;

/// A device loaded from storage through `CatalogBrain::get_object`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceObject {
    /// The device identifier.
    pub id: String,
    /// The device path.
    pub path: String,
    /// URL of the icon configured for the device.
    pub z_icon: String,
}

/// Search request sent to a `ModelCatalog`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelCatalogRequest {
    /// The boolean query to evaluate.
    pub query: Query,
    /// Index to sort by. `None` lets the catalog order hits by relevance score.
    pub order_by: Option<String>,
    /// Whether the catalog drops hits the current user may not view.
    pub filter_permissions: bool,
    /// Maximum number of hits to return. `Some(0)` asks for the total only.
    pub limit: Option<usize>,
}

impl ModelCatalogRequest {
    /// Request ranked by relevance with permission filtering and no limit.
    pub fn ranked(query: Query) -> Self {
        Self {
            query,
            order_by: None,
            filter_permissions: true,
            limit: None,
        }
    }

    /// Set the maximum number of hits.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }
}

/// Hits returned by a `ModelCatalog` search.
#[derive(Clone, Default)]
pub struct ModelCatalogResults {
    /// The returned hits, in catalog order.
    pub hits: Vec<Arc<dyn CatalogBrain>>,
    /// Total number of matches, regardless of the requested limit.
    pub total: usize,
}

impl fmt::Debug for ModelCatalogResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelCatalogResults")
            .field("hits", &self.hits.len())
            .field("total", &self.total)
            .finish()
    }
}

/// Optional parameters of `SearchProvider::get_search_results`.
///
/// # Example
///
/// ```
/// use device_search_repository::SearchOptions;
///
/// let options = SearchOptions::new().max_results(20);
/// assert_eq!(options.max_results, Some(20));
/// assert!(!options.count_only);
/// ```
#[derive(Clone, Copy, Default)]
pub struct SearchOptions<'a> {
    /// Sort/limit helper applied to the final result list.
    pub sorter: Option<&'a dyn Sorter>,
    /// Preferred category requested by the host. Not used to narrow device queries.
    pub category: Option<&'a str>,
    /// Return counts instead of results.
    pub count_only: bool,
    /// Requested by the host for unrestricted searches. Permission filtering still applies.
    pub unrestricted: bool,
    /// Client-side predicate over wrapped results.
    pub filter_fn: Option<ResultFilter<'a>>,
    /// Maximum number of hits requested from the catalog.
    pub max_results: Option<usize>,
}

impl<'a> SearchOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sorter(mut self, sorter: &'a dyn Sorter) -> Self {
        self.sorter = Some(sorter);
        self
    }

    pub fn category(mut self, category: &'a str) -> Self {
        self.category = Some(category);
        self
    }

    pub fn count_only(mut self) -> Self {
        self.count_only = true;
        self
    }

    pub fn unrestricted(mut self) -> Self {
        self.unrestricted = true;
        self
    }

    pub fn filter(mut self, filter_fn: ResultFilter<'a>) -> Self {
        self.filter_fn = Some(filter_fn);
        self
    }

    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

impl fmt::Debug for SearchOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchOptions")
            .field("sorter", &self.sorter.is_some())
            .field("category", &self.category)
            .field("count_only", &self.count_only)
            .field("unrestricted", &self.unrestricted)
            .field("filter_fn", &self.filter_fn.is_some())
            .field("max_results", &self.max_results)
            .finish()
    }
}

/// What a search returns when the query had keywords.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    /// Count-only mode.
    Counts(CategoryCounts),
    /// Wrapped results, in catalog (or sorter) order.
    Results(Vec<DeviceSearchResult>),
}

impl SearchOutcome {
    /// The counts, if this is a count-only outcome.
    pub fn into_counts(self) -> Option<CategoryCounts> {
        match self {
            Self::Counts(counts) => Some(counts),
            Self::Results(_) => None,
        }
    }

    /// The results, if this is not a count-only outcome.
    pub fn into_results(self) -> Option<Vec<DeviceSearchResult>> {
        match self {
            Self::Results(results) => Some(results),
            Self::Counts(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_request_defaults() {
        let request = ModelCatalogRequest::ranked(Query::contains("name", "sw"));

        assert_eq!(request.order_by, None);
        assert!(request.filter_permissions);
        assert_eq!(request.limit, None);
        assert_eq!(request.with_limit(Some(0)).limit, Some(0));
    }

    #[test]
    fn test_request_serialization() {
        let request = ModelCatalogRequest::ranked(Query::contains("name", "sw")).with_limit(Some(5));

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["order_by"], serde_json::Value::Null);
        assert_eq!(json["filter_permissions"], true);
        assert_eq!(json["limit"], 5);
        assert_eq!(json["query"]["Glob"]["pattern"], "*sw*");
    }

    #[test]
    fn test_search_options_builder() {
        let filter = |_: &DeviceSearchResult| true;
        let options = SearchOptions::new()
            .category("Device")
            .count_only()
            .unrestricted()
            .filter(&filter)
            .max_results(3);

        assert_eq!(options.category, Some("Device"));
        assert!(options.count_only);
        assert!(options.unrestricted);
        assert!(options.filter_fn.is_some());
        assert!(options.sorter.is_none());
        assert_eq!(options.max_results, Some(3));
        assert_eq!(
            format!("{:?}", options),
            "SearchOptions { sorter: false, category: Some(\"Device\"), count_only: true, \
             unrestricted: true, filter_fn: true, max_results: Some(3) }"
        );
    }

    #[test]
    fn test_outcome_accessors() {
        let counts = SearchOutcome::Counts(CategoryCounts::devices(2));
        assert_eq!(counts.clone().into_counts(), Some(CategoryCounts::devices(2)));
        assert!(counts.into_results().is_none());

        let results = SearchOutcome::Results(Vec::new());
        assert!(results.clone().into_counts().is_none());
        assert_eq!(results.into_results().map(|r| r.len()), Some(0));
    }
}

//! Search capability contracts exposed to the host search framework.
//!
//! The host looks up providers and result items through these traits only, so
//! it can mix device search with other providers.

use device_search_shared::{CategoryCounts, ParsedQuery};

use crate::errors::DeviceSearchError;
use crate::types::{ResultFilter, SearchOptions, SearchOutcome};

/// A provider of search results for one area of the host application.
pub trait SearchProvider {
    /// Run a search.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - The query had no keywords; nothing was searched
    /// * `Ok(Some(SearchOutcome::Counts(_)))` - When `options.count_only` is set
    /// * `Ok(Some(SearchOutcome::Results(_)))` - Otherwise
    /// * `Err(DeviceSearchError)` - Any collaborator failure, unchanged
    fn get_search_results(
        &self,
        parsed_query: &ParsedQuery,
        options: SearchOptions<'_>,
    ) -> Result<Option<SearchOutcome>, DeviceSearchError>;

    /// Count matches per category.
    fn get_category_counts(
        &self,
        parsed_query: &ParsedQuery,
        filter_fn: Option<ResultFilter<'_>>,
    ) -> Result<Option<CategoryCounts>, DeviceSearchError>;

    /// Results for the quick-search drop-down.
    fn get_quick_search_results(
        &self,
        parsed_query: &ParsedQuery,
        max_results: Option<usize>,
    ) -> Result<Option<SearchOutcome>, DeviceSearchError>;
}

/// A single search result as rendered by the host.
pub trait SearchResultItem {
    /// Location of the matched object.
    fn url(&self) -> &str;

    /// Category label shown next to the result.
    fn category(&self) -> &str;

    /// Short text shown in result listings.
    fn excerpt(&self) -> &str;

    /// Icon markup. May load the underlying object.
    fn icon_template(&self) -> Result<String, DeviceSearchError>;

    /// Icon shown in listings. May load the underlying object.
    fn icon(&self) -> Result<String, DeviceSearchError>;

    /// Whether the result opens in a pop-out window.
    fn popout(&self) -> bool;
}

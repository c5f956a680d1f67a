//! Sorter trait definition.

use crate::errors::DeviceSearchError;
use crate::result::DeviceSearchResult;

/// Sort and pagination helper supplied by the host search framework.
///
/// The provider does not sort or paginate on its own; when a sorter is given
/// the final result list is handed to it unchanged.
pub trait Sorter {
    /// Sort `results` and cut them down to the requested page.
    fn limit_sort(
        &self,
        results: Vec<DeviceSearchResult>,
    ) -> Result<Vec<DeviceSearchResult>, DeviceSearchError>;
}

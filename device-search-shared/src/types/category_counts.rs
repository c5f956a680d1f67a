//! Category count types returned by count-only searches.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Category key under which device matches are counted.
pub const DEVICE_CATEGORY: &str = "Device";

/// Number of matches per result category.
///
/// Serializes as a plain JSON object, e.g. `{"Device": 12}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct CategoryCounts(BTreeMap<String, usize>);

impl CategoryCounts {
    /// Counts holding a single entry for the `Device` category.
    pub fn devices(count: usize) -> Self {
        let mut counts = BTreeMap::new();
        counts.insert(DEVICE_CATEGORY.to_string(), count);
        Self(counts)
    }

    /// Count recorded for a category.
    pub fn get(&self, category: &str) -> Option<usize> {
        self.0.get(category).copied()
    }

    /// Count recorded for the `Device` category, zero if absent.
    pub fn device_count(&self) -> usize {
        self.get(DEVICE_CATEGORY).unwrap_or(0)
    }

    /// Iterate over `(category, count)` pairs in category order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Returns the number of categories.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no category was counted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

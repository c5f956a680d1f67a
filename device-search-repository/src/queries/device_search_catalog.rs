//! Query construction for the legacy device search catalog.
//!
//! Unlike the model catalog query, the filtering query here is conjunctive:
//! a device matches only if every keyword appears in its title or id AND every
//! keyword appears in its IP. Ranking is a separate weighted-sum ranker.

use device_search_shared::{fields, Query};

/// Weight given to title/id matches by the ranker.
pub const TITLE_MATCH_BOOST: u32 = 10;

/// `And(every keyword in titleOrId, every keyword in getDeviceIp)`.
pub fn build_query<S: AsRef<str>>(keywords: &[S]) -> Query {
    Query::and([
        Query::contains_all(fields::TITLE_OR_ID, keywords),
        Query::contains_all(fields::DEVICE_IP, keywords),
    ])
}

/// Boosts devices whose title or id contains any keyword.
pub fn build_ranker<S: AsRef<str>>(keywords: &[S]) -> Query {
    Query::weighted_sum([(
        Query::contains_any(fields::TITLE_OR_ID, keywords),
        TITLE_MATCH_BOOST,
    )])
}

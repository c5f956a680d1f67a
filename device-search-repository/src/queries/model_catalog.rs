//! Query construction for the model catalog.
//!
//! The model catalog offers no per-clause boosts. Name matches are ranked
//! higher by OR-ing a name-only clause into the query, which the catalog's
//! relevance scoring rewards.

use device_search_shared::{fields, Query};

/// Every keyword in the device name, or every keyword in its IP address text.
pub fn keyword_query<S: AsRef<str>>(keywords: &[S]) -> Query {
    Query::or([
        Query::contains_all(fields::NAME, keywords),
        Query::contains_all(fields::TEXT_IP_ADDRESS, keywords),
    ])
}

/// Any single keyword in the device name.
pub fn name_ranker<S: AsRef<str>>(keywords: &[S]) -> Query {
    Query::contains_any(fields::NAME, keywords)
}

/// The full model catalog query: `Or(keyword_query, name_ranker)`.
pub fn build_query<S: AsRef<str>>(keywords: &[S]) -> Query {
    Query::or([keyword_query(keywords), name_ranker(keywords)])
}

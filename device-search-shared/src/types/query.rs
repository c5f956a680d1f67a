//! Boolean catalog query types.
//!
//! This module defines the expression tree handed to catalog implementations.
//! Queries are plain values: building one has no side effects, and two queries
//! compare equal when their structure is identical, which lets callers assert on
//! the exact shape sent to a catalog.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Names of the catalog indexes queried for devices.
pub mod fields {
    /// Device name index in the model catalog.
    pub const NAME: &str = "name";
    /// Textual IP address index in the model catalog.
    pub const TEXT_IP_ADDRESS: &str = "text_ipAddress";
    /// Title-or-id index in the device search catalog.
    pub const TITLE_OR_ID: &str = "titleOrId";
    /// Device IP index in the device search catalog.
    pub const DEVICE_IP: &str = "getDeviceIp";
}

/// A boolean query over named catalog indexes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Query {
    /// Matches when every child matches.
    And(Vec<Query>),

    /// Matches when at least one child matches.
    Or(Vec<Query>),

    /// Wildcard match of `pattern` against the value indexed under `field`.
    Glob { field: String, pattern: String },

    /// Ranking construct: sums the weights of the children that match.
    ///
    /// Only meaningful as a ranker passed alongside a filtering query.
    WeightedSum(Vec<WeightedQuery>),
}

/// A query paired with the weight it contributes to a `WeightedSum`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedQuery {
    pub query: Query,
    pub weight: u32,
}

impl Query {
    /// Conjunction of `children`.
    pub fn and(children: impl IntoIterator<Item = Query>) -> Self {
        Self::And(children.into_iter().collect())
    }

    /// Disjunction of `children`.
    pub fn or(children: impl IntoIterator<Item = Query>) -> Self {
        Self::Or(children.into_iter().collect())
    }

    /// Glob match of `pattern` against `field`.
    pub fn glob(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::Glob {
            field: field.into(),
            pattern: pattern.into(),
        }
    }

    /// Glob match for values of `field` containing `term` anywhere.
    ///
    /// # Example
    ///
    /// ```
    /// use device_search_shared::Query;
    ///
    /// assert_eq!(Query::contains("name", "core"), Query::glob("name", "*core*"));
    /// ```
    pub fn contains(field: &str, term: &str) -> Self {
        Self::glob(field, format!("*{}*", term))
    }

    /// Requires every term to be contained in `field`.
    pub fn contains_all<S: AsRef<str>>(field: &str, terms: &[S]) -> Self {
        Self::and(terms.iter().map(|t| Self::contains(field, t.as_ref())))
    }

    /// Requires at least one term to be contained in `field`.
    pub fn contains_any<S: AsRef<str>>(field: &str, terms: &[S]) -> Self {
        Self::or(terms.iter().map(|t| Self::contains(field, t.as_ref())))
    }

    /// Ranker summing the weights of whichever `(query, weight)` pairs match.
    pub fn weighted_sum(children: impl IntoIterator<Item = (Query, u32)>) -> Self {
        Self::WeightedSum(
            children
                .into_iter()
                .map(|(query, weight)| WeightedQuery { query, weight })
                .collect(),
        )
    }

    /// Direct children of a compound query; empty for globs.
    pub fn children(&self) -> Vec<&Query> {
        match self {
            Self::And(children) | Self::Or(children) => children.iter().collect(),
            Self::WeightedSum(children) => children.iter().map(|c| &c.query).collect(),
            Self::Glob { .. } => Vec::new(),
        }
    }

    /// Every index field referenced anywhere in the tree, in first-seen order.
    pub fn fields(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        self.collect_fields(&mut seen);
        seen
    }

    fn collect_fields<'a>(&'a self, seen: &mut Vec<&'a str>) {
        match self {
            Self::Glob { field, .. } => {
                if !seen.contains(&field.as_str()) {
                    seen.push(field);
                }
            }
            _ => {
                for child in self.children() {
                    child.collect_fields(seen);
                }
            }
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join(f: &mut fmt::Formatter<'_>, name: &str, children: &[Query]) -> fmt::Result {
            write!(f, "{}(", name)?;
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", child)?;
            }
            write!(f, ")")
        }

        match self {
            Self::And(children) => join(f, "And", children),
            Self::Or(children) => join(f, "Or", children),
            Self::Glob { field, pattern } => write!(f, "MatchGlob({}, '{}')", field, pattern),
            Self::WeightedSum(children) => {
                write!(f, "RankByQueries_Sum(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "({}, {})", child.query, child.weight)?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_wraps_term_in_wildcards() {
        assert_eq!(
            Query::contains(fields::NAME, "10.0"),
            Query::Glob {
                field: "name".to_string(),
                pattern: "*10.0*".to_string(),
            }
        );
    }

    #[test]
    fn test_contains_all_and_any() {
        let terms = ["a", "b"];
        assert_eq!(
            Query::contains_all("name", &terms),
            Query::And(vec![Query::glob("name", "*a*"), Query::glob("name", "*b*")])
        );
        assert_eq!(
            Query::contains_any("name", &terms),
            Query::Or(vec![Query::glob("name", "*a*"), Query::glob("name", "*b*")])
        );
    }

    #[test]
    fn test_fields_deduplicates_in_order() {
        let query = Query::or([
            Query::contains_all("name", &["a", "b"]),
            Query::contains_all("text_ipAddress", &["a"]),
            Query::contains("name", "c"),
        ]);
        assert_eq!(query.fields(), vec!["name", "text_ipAddress"]);
    }

    #[test]
    fn test_weighted_sum_children() {
        let ranker = Query::weighted_sum([(Query::contains("titleOrId", "x"), 10)]);
        assert_eq!(ranker.children(), vec![&Query::glob("titleOrId", "*x*")]);
        match ranker {
            Query::WeightedSum(children) => assert_eq!(children[0].weight, 10),
            other => panic!("unexpected query: {:?}", other),
        }
    }

    #[test]
    fn test_display() {
        let query = Query::or([
            Query::contains_all("name", &["a"]),
            Query::weighted_sum([(Query::contains("titleOrId", "a"), 10)]),
        ]);
        assert_eq!(
            query.to_string(),
            "Or(And(MatchGlob(name, '*a*')), RankByQueries_Sum((MatchGlob(titleOrId, '*a*'), 10)))"
        );
    }

    #[test]
    fn test_serialization() {
        let query = Query::or([
            Query::contains_all("name", &["sw"]),
            Query::weighted_sum([(Query::contains("name", "sw"), 10)]),
        ]);

        let json = serde_json::to_string(&query).unwrap();
        let deserialized: Query = serde_json::from_str(&json).unwrap();

        assert_eq!(query, deserialized);
    }
}

//! Parsed query types for the device search provider.
//!
//! The query parser lives outside this workspace. It hands the provider a
//! `ParsedQuery` holding the operators it recognised and the remaining
//! free-text keywords.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A user query after parsing.
///
/// `keywords` keep the order the user typed them in. `operators` maps an
/// operator name (e.g. `category`) to the values given for it. The device
/// search ranking does not consult operators, but they are part of the
/// contract and travel with the query.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedQuery {
    /// Operators recognised by the parser, keyed by operator name.
    #[serde(default)]
    pub operators: BTreeMap<String, Vec<String>>,

    /// Free-text search terms, in input order.
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl ParsedQuery {
    /// Create a query from keywords with no operators.
    ///
    /// # Example
    ///
    /// ```
    /// use device_search_shared::ParsedQuery;
    ///
    /// let query = ParsedQuery::new(["switch", "10.0"]);
    /// assert_eq!(query.keywords, vec!["switch", "10.0"]);
    /// ```
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            operators: BTreeMap::new(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    /// Attach an operator and its values.
    pub fn with_operator<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.operators
            .entry(name.into())
            .or_default()
            .extend(values.into_iter().map(Into::into));
        self
    }

    /// Returns true if there is at least one keyword to search for.
    ///
    /// A query without keywords is vacuous: providers return nothing for it
    /// instead of matching everything.
    pub fn has_keywords(&self) -> bool {
        !self.keywords.is_empty()
    }

    /// Values given for an operator, if any.
    pub fn operator(&self, name: &str) -> Option<&[String]> {
        self.operators.get(name).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_keyword_order() {
        let query = ParsedQuery::new(["b", "a", "c"]);
        assert_eq!(query.keywords, vec!["b", "a", "c"]);
        assert!(query.operators.is_empty());
        assert!(query.has_keywords());
    }

    #[test]
    fn test_empty_query_has_no_keywords() {
        let query = ParsedQuery::new(Vec::<String>::new());
        assert!(!query.has_keywords());
        assert!(!ParsedQuery::default().has_keywords());
    }

    #[test]
    fn test_with_operator_accumulates_values() {
        let query = ParsedQuery::new(["router"])
            .with_operator("category", ["Device"])
            .with_operator("category", ["Event"]);

        assert_eq!(
            query.operator("category"),
            Some(&["Device".to_string(), "Event".to_string()][..])
        );
        assert!(query.operator("missing").is_none());
    }

    #[test]
    fn test_deserialize_without_operators() {
        let query: ParsedQuery = serde_json::from_str(r#"{"keywords":["core"]}"#).unwrap();
        assert_eq!(query.keywords, vec!["core"]);
        assert!(query.operators.is_empty());
    }
}

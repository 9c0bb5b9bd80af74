//! Query parameter building

use std::fmt::Display;

/// An ordered set of query parameters with `None` values skipped.
///
/// List endpoints take optional filters; the builder keeps only the filters
/// the caller actually set, so URLs stay free of `page=&search=` noise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPairs {
    items: Vec<(String, String)>,
}

impl QueryPairs {
    /// Creates an empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Adds a parameter.
    pub fn push(&mut self, key: &str, value: impl Display) {
        self.items.push((key.to_owned(), value.to_string()));
    }

    /// Adds a parameter only when a value is present.
    pub fn push_opt(&mut self, key: &str, value: Option<impl Display>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Builder-style [`push`](Self::push).
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Display) -> Self {
        self.push(key, value);
        self
    }

    /// The collected pairs, in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[(String, String)] {
        &self.items
    }

    /// True when no parameters were set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A type that can render itself as query parameters.
pub trait ToQuery {
    /// Builds the query pairs for this value.
    fn to_query(&self) -> QueryPairs;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_none_values_are_skipped() {
        let mut pairs = QueryPairs::new();
        pairs.push("page", 2);
        pairs.push_opt("search", Some("delta"));
        pairs.push_opt("status", None::<&str>);
        assert_eq!(
            pairs.as_slice(),
            &[
                ("page".to_owned(), "2".to_owned()),
                ("search".to_owned(), "delta".to_owned()),
            ]
        );
    }

    #[test]
    fn test_bool_rendering() {
        let pairs = QueryPairs::new().with("is_active", true);
        assert_eq!(pairs.as_slice(), &[("is_active".to_owned(), "true".to_owned())]);
    }
}

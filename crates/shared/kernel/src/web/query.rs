//! An ordered query-string multi-map and its rewrite helper.

use std::fmt;

/// An immutable, ordered collection of query-string pairs.
///
/// Keys may repeat. Iteration yields pairs in insertion order, and that order
/// is part of the observable contract since the collection serializes directly
/// into a URL query string. Rebuilding always produces a new value; no
/// in-place mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPairs {
    pairs: Vec<(String, String)>,
}

impl QueryPairs {
    /// An empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Parses a raw (percent-encoded) query string.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        form_urlencoded::parse(raw.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    /// Iterates over the pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The value of the last occurrence of `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryPairs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { pairs: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

impl fmt::Display for QueryPairs {
    /// Percent-encoded `k=v&k2=v2` form, in insertion order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        f.write_str(&serializer.finish())
    }
}

/// Returns `query` with `key` bound to exactly one occurrence of `value`.
///
/// Every existing occurrence of `key` is dropped (all other pairs keep their
/// relative order and multiplicity) and a single `(key, value)` pair is
/// appended at the end. The input is not mutated. Key comparison happens on
/// the string form of `key`.
#[must_use]
pub fn set_query_param(
    query: &QueryPairs,
    key: impl ToString,
    value: impl ToString,
) -> QueryPairs {
    let key = key.to_string();

    let mut pairs: Vec<(String, String)> = query
        .iter()
        .filter(|(k, _)| *k != key)
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect();
    pairs.push((key, value.to_string()));

    QueryPairs { pairs }
}

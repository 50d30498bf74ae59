use super::{BoundaryFeature, FeatureKind};

/// Queries shorter than this (in characters) match nothing
pub const MIN_QUERY_LEN: usize = 2;
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Searchable collection of boundary features, kept in load order
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    features: Vec<BoundaryFeature>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, features: impl IntoIterator<Item = BoundaryFeature>) {
        self.features.extend(features);
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Case-insensitive substring search over feature names
    ///
    /// Returns at most `limit` matches, in catalog order.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&BoundaryFeature> {
        if query.chars().count() < MIN_QUERY_LEN {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        self.features
            .iter()
            .filter(|f| f.name.to_lowercase().contains(&needle))
            .take(limit)
            .collect()
    }

    /// Exact, case-insensitive name lookup, optionally restricted to one kind
    pub fn find(&self, name: &str, kind: Option<FeatureKind>) -> Option<&BoundaryFeature> {
        let needle = name.to_lowercase();
        self.features
            .iter()
            .filter(|f| kind.is_none_or(|k| f.kind == k))
            .find(|f| f.name.to_lowercase() == needle)
    }
}

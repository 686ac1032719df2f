//! Dimension mappings: which positional rank each axis name occupies.

use alloc::vec::Vec;

use crate::error::DuplicateName;

/// Ordered list of axis names, one per positional rank of the underlying container.
///
/// Rank `i` of the container is addressed by the name at index `i`. The order is both the presentation order of
/// the axes and the order in which positions are passed to the container.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DimensionMapping<K> {
    labels: Vec<K>,
}

impl<K: Eq> DimensionMapping<K> {
    /// Creates a dimension mapping from names in rank order, rejecting duplicates.
    pub fn from_labels(labels: impl IntoIterator<Item = K>) -> Result<Self, DuplicateName<K>> {
        let mut v: Vec<K> = Vec::new();
        for label in labels {
            if v.contains(&label) {
                return Err(DuplicateName(label));
            }
            v.push(label);
        }
        Ok(Self { labels: v })
    }

    /// Creates a dimension mapping from names that are unique by construction.
    pub(crate) fn from_raw_unchecked(labels: Vec<K>) -> Self {
        Self { labels }
    }

    /// Number of ranks.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if the mapping has no rank (a scalar).
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The names, in rank order.
    pub fn labels(&self) -> &[K] {
        &self.labels
    }

    /// Returns the rank of `name`, or `None` if it is not mapped.
    pub fn index_of(&self, name: &K) -> Option<usize> {
        self.labels.iter().position(|l| l == name)
    }

    /// Returns `true` if `name` is mapped.
    pub fn contains(&self, name: &K) -> bool {
        self.labels.contains(name)
    }

    /// Returns the name at `rank`, if any.
    pub fn get(&self, rank: usize) -> Option<&K> {
        self.labels.get(rank)
    }

    /// Iterates over the names in rank order.
    pub fn iter(&self) -> core::slice::Iter<'_, K> {
        self.labels.iter()
    }
}

impl<'a, K> IntoIterator for &'a DimensionMapping<K> {
    type Item = &'a K;
    type IntoIter = core::slice::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.iter()
    }
}

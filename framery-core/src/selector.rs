//! Selectors: per-axis selection requests keyed by axis name.

use alloc::collections::BTreeMap;

use crate::slice::AxisSlice;

/// Construct a [`Selector`] from `name => slice` pairs.
///
/// ```
/// use framery_core::{sel, slice::AxisSlice};
///
/// let s = sel!["x" => AxisSlice::squeeze('b'), "y" => AxisSlice::range('p', 'q')];
/// assert_eq!(s.len(), 2);
/// ```
#[macro_export]
macro_rules! sel {
    () => {
        $crate::selector::Selector::new()
    };
    ( $( $name:expr => $slice:expr ),+ $(,)? ) => {
        <$crate::selector::Selector<_, _> as ::core::iter::FromIterator<_>>::from_iter([$(($name, $slice)),+])
    };
}

/// Selection request for a whole labeled source: a mapping from axis name to [`AxisSlice`].
///
/// Axes left out of the selector keep their full range. The iteration order of a selector never influences the
/// shape of a result; results follow the source's dimension order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector<K, L> {
    slices: BTreeMap<K, AxisSlice<L>>,
}

impl<K: Ord, L> Selector<K, L> {
    /// Creates an empty selector, keeping every axis in full.
    pub fn new() -> Self {
        Self {
            slices: BTreeMap::new(),
        }
    }

    /// Adds a request for `name`, replacing an earlier one.
    pub fn with(mut self, name: K, slice: AxisSlice<L>) -> Self {
        self.slices.insert(name, slice);
        self
    }

    /// Adds a request for `name`, returning the one it replaces.
    pub fn insert(&mut self, name: K, slice: AxisSlice<L>) -> Option<AxisSlice<L>> {
        self.slices.insert(name, slice)
    }

    /// Returns the request for `name`, if any.
    pub fn get(&self, name: &K) -> Option<&AxisSlice<L>> {
        self.slices.get(name)
    }

    /// Number of axes with a request.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Returns `true` if no axis has a request.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Names with a request, in name order.
    pub fn names(&self) -> impl Iterator<Item = &K> {
        self.slices.keys()
    }

    /// Iterates over `(name, slice)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &AxisSlice<L>)> {
        self.slices.iter()
    }
}

impl<K: Ord, L> Default for Selector<K, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, L> FromIterator<(K, AxisSlice<L>)> for Selector<K, L> {
    fn from_iter<T: IntoIterator<Item = (K, AxisSlice<L>)>>(iter: T) -> Self {
        Self {
            slices: iter.into_iter().collect(),
        }
    }
}

impl<K: Ord, L, const N: usize> From<[(K, AxisSlice<L>); N]> for Selector<K, L> {
    fn from(pairs: [(K, AxisSlice<L>); N]) -> Self {
        pairs.into_iter().collect()
    }
}

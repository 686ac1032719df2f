//! Coordinates: the named axes of a labeled array or view.

use alloc::collections::BTreeMap;

use crate::{axis::Axis, error::DuplicateName};

/// Mapping from axis name to [`Axis`], describing every named axis a labeled array or view exposes.
///
/// The mapping is ordered by name; presentation order is given separately by a
/// [`DimensionMapping`](crate::dimension::DimensionMapping).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate<K, L> {
    axes: BTreeMap<K, Axis<L>>,
}

impl<K: Ord, L: Ord> Coordinate<K, L> {
    /// Creates a coordinate from `(name, axis)` pairs, rejecting duplicate names.
    pub fn from_axes(axes: impl IntoIterator<Item = (K, Axis<L>)>) -> Result<Self, DuplicateName<K>> {
        let mut map = BTreeMap::new();
        for (name, axis) in axes {
            if map.contains_key(&name) {
                return Err(DuplicateName(name));
            }
            map.insert(name, axis);
        }
        Ok(Self { axes: map })
    }

    /// Creates a coordinate from a map whose keys are unique by construction.
    pub(crate) fn from_map(axes: BTreeMap<K, Axis<L>>) -> Self {
        Self { axes }
    }

    /// Returns the axis named `name`, if any.
    pub fn get(&self, name: &K) -> Option<&Axis<L>> {
        self.axes.get(name)
    }

    /// Returns `true` if an axis is named `name`.
    pub fn contains(&self, name: &K) -> bool {
        self.axes.contains_key(name)
    }

    /// Number of axes.
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    /// Returns `true` if the coordinate holds no axis.
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Axis names, in name order.
    pub fn names(&self) -> impl Iterator<Item = &K> {
        self.axes.keys()
    }

    /// Iterates over `(name, axis)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &Axis<L>)> {
        self.axes.iter()
    }

    /// Number of elements addressed by the coordinate: the product of the axis sizes.
    pub fn size(&self) -> usize {
        self.axes.values().map(Axis::size).product()
    }
}

impl<'a, K, L> IntoIterator for &'a Coordinate<K, L> {
    type Item = (&'a K, &'a Axis<L>);
    type IntoIter = alloc::collections::btree_map::Iter<'a, K, Axis<L>>;

    fn into_iter(self) -> Self::IntoIter {
        self.axes.iter()
    }
}

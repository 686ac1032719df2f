//! Label tables: the ordered mapping from label values to positions along one dimension.

use alloc::{collections::BTreeMap, vec::Vec};

use crate::error::DuplicateLabel;

/// Ordered label → position table for one dimension.
///
/// An axis built with [`Axis::from_labels`] maps its `n` labels to the positions `0..n`, in order. Axes produced by
/// selecting a sub-range of another axis keep the *source* positions of their surviving labels, so a lookup on a
/// reduced axis still yields a position that the underlying dense container understands.
///
/// Labels are unique on an axis. Besides the position, every label has an "ordinal": its rank in the axis' own
/// order, which is what label ranges are resolved against.
#[derive(Debug, Clone)]
pub struct Axis<L> {
    labels: Vec<L>,
    positions: Vec<usize>,
    ordinals: BTreeMap<L, usize>,
}

impl<L: Ord + Clone> Axis<L> {
    /// Creates an axis mapping the given labels to `0..n`, rejecting duplicates.
    pub fn from_labels(labels: impl IntoIterator<Item = L>) -> Result<Self, DuplicateLabel<L>> {
        let labels: Vec<L> = labels.into_iter().collect();
        let mut ordinals = BTreeMap::new();
        for (i, label) in labels.iter().enumerate() {
            if ordinals.insert(label.clone(), i).is_some() {
                return Err(DuplicateLabel(label.clone()));
            }
        }
        let positions = (0..labels.len()).collect();
        Ok(Self {
            labels,
            positions,
            ordinals,
        })
    }

    /// Creates an axis over the entries at the given ordinals of `self`, in the given order.
    ///
    /// The caller MUST pass distinct ordinals, each less than `self.size()`.
    pub(crate) fn take_ordinals(&self, ordinals: impl IntoIterator<Item = usize>) -> Self {
        let mut labels = Vec::new();
        let mut positions = Vec::new();
        let mut index = BTreeMap::new();
        for (i, ordinal) in ordinals.into_iter().enumerate() {
            let label = self.labels[ordinal].clone();
            index.insert(label.clone(), i);
            labels.push(label);
            positions.push(self.positions[ordinal]);
        }
        Self {
            labels,
            positions,
            ordinals: index,
        }
    }
}

impl<L: Ord> Axis<L> {
    /// Returns the number of labels.
    pub fn size(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if the axis holds no label.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the position for `label`, or `None` if the label is not on the axis.
    pub fn position(&self, label: &L) -> Option<usize> {
        self.ordinal(label).map(|i| self.positions[i])
    }

    /// Returns the rank of `label` in the axis order, or `None` if the label is not on the axis.
    pub fn ordinal(&self, label: &L) -> Option<usize> {
        self.ordinals.get(label).copied()
    }

    /// Returns `true` if `label` is on the axis.
    pub fn contains(&self, label: &L) -> bool {
        self.ordinals.contains_key(label)
    }

    /// The labels, in axis order.
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// The positions, in axis order.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Iterates over `(label, position)` pairs in axis order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&L, usize)> + '_ {
        self.labels.iter().zip(self.positions.iter().copied())
    }

    /// Returns `true` if the positions are exactly `0..size` in order.
    pub fn is_contiguous(&self) -> bool {
        self.positions.iter().copied().eq(0..self.positions.len())
    }
}

impl<L: PartialEq> PartialEq for Axis<L> {
    fn eq(&self, other: &Self) -> bool {
        self.labels == other.labels && self.positions == other.positions
    }
}
impl<L: Eq> Eq for Axis<L> {}

impl<L: Ord + Clone> TryFrom<Vec<L>> for Axis<L> {
    type Error = DuplicateLabel<L>;

    fn try_from(labels: Vec<L>) -> Result<Self, Self::Error> {
        Self::from_labels(labels)
    }
}

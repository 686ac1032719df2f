//! Error types shared by the construction and selection APIs.

use alloc::vec::Vec;
use thiserror::Error;

/// Error raised while resolving a selection against labeled axes.
///
/// `K` is the axis-name type and `L` the label type of the source, so callers can match on the offending values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError<K, L> {
    /// The selector names an axis the source does not have.
    #[error("unknown axis `{0:?}`")]
    UnknownAxis(K),
    /// A squeezed label, range boundary or listed label is not on the axis.
    #[error("label `{label:?}` not found on axis `{axis:?}`")]
    LabelNotFound {
        /// The axis that was searched.
        axis: K,
        /// The missing label.
        label: L,
    },
    /// Element access needs a single label for the axis, but got a range, a label list, or nothing.
    #[error("expected a single label for axis `{0:?}`")]
    ExpectedScalarSelection(K),
    /// A label range was given a step of zero.
    #[error("zero step in range over axis `{axis:?}`")]
    InvalidStep {
        /// The axis the range was applied to.
        axis: K,
    },
    /// The positional index built for the source does not cover every rank exactly once.
    ///
    /// This indicates a defect in view construction rather than a caller mistake.
    #[error("positional index covers {filled} of {rank} ranks")]
    RankMismatch {
        /// Number of ranks filled exactly once.
        filled: usize,
        /// Rank of the source.
        rank: usize,
    },
    /// A positional index is not carried by the view's axes, or the dense container rejected a completed index.
    #[error("positional index {index:?} is out of bounds")]
    OutOfBounds {
        /// The rejected index, in the rank order of the source that rejected it.
        index: Vec<usize>,
    },
}

/// Error raised while constructing axes, coordinates, dimension mappings and labeled arrays.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError<K, L> {
    /// A label appears twice on the same axis.
    #[error("duplicate label `{0:?}`")]
    DuplicateLabel(L),
    /// An axis name appears twice.
    #[error("duplicate axis name `{0:?}`")]
    DuplicateName(K),
    /// A dimension name has no axis in the coordinate.
    #[error("no axis for dimension `{0:?}`")]
    MissingAxis(K),
    /// The coordinate holds an axis that no dimension refers to.
    #[error("axis `{0:?}` is not mapped to any dimension")]
    UnmappedAxis(K),
    /// The dimension mapping and the data disagree on the rank.
    #[error("dimension mapping has {dims} names but data has {naxes} axes")]
    NaxesMismatch {
        /// Number of names in the dimension mapping.
        dims: usize,
        /// Number of axes of the data.
        naxes: usize,
    },
    /// An axis carries positions other than `0..size`, as a reduced axis taken from a view does.
    #[error("axis `{0:?}` does not cover positions 0..size in order")]
    NonContiguousAxis(K),
    /// An axis does not match the data along its rank.
    #[error("axis `{axis:?}` has {labels} labels but data has length {len}")]
    LengthMismatch {
        /// The offending axis.
        axis: K,
        /// Number of labels on the axis.
        labels: usize,
        /// Length of the data along the axis' rank.
        len: usize,
    },
}

/// A label appears twice in the labels given for one axis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicate label `{0:?}`")]
pub struct DuplicateLabel<L>(pub L);

/// An axis name appears twice in a dimension mapping or coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicate axis name `{0:?}`")]
pub struct DuplicateName<K>(pub K);

impl<K, L> From<DuplicateLabel<L>> for BuildError<K, L> {
    fn from(DuplicateLabel(label): DuplicateLabel<L>) -> Self {
        BuildError::DuplicateLabel(label)
    }
}

impl<K, L> From<DuplicateName<K>> for BuildError<K, L> {
    fn from(DuplicateName(name): DuplicateName<K>) -> Self {
        BuildError::DuplicateName(name)
    }
}

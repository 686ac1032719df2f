//! Per-axis slice specifications and their translation to axis ordinals.

use alloc::{collections::BTreeSet, vec::Vec};

use crate::axis::Axis;

/// Whether the stop label of a [`LabelRange`] belongs to the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum StopBound {
    /// The stop label is part of the range. This is the default for label ranges.
    #[default]
    Inclusive,
    /// The range ends right before the stop label.
    Exclusive,
}

/// A range of labels, located on an axis by its boundary labels.
///
/// Boundaries are label values, not positions: `start` and `stop` are looked up on the axis and the range covers the
/// labels between them in axis order, taking every `step`-th one. Open boundaries extend to the ends of the axis.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LabelRange<L> {
    start: Option<L>,
    stop: Option<L>,
    step: usize,
    stop_bound: StopBound,
}

impl<L> LabelRange<L> {
    /// The inclusive range `start..=stop`.
    pub fn new(start: L, stop: L) -> Self {
        Self {
            start: Some(start),
            stop: Some(stop),
            step: 1,
            stop_bound: StopBound::Inclusive,
        }
    }

    /// The range from `start` to the end of the axis.
    pub fn starting_at(start: L) -> Self {
        Self {
            start: Some(start),
            stop: None,
            step: 1,
            stop_bound: StopBound::Inclusive,
        }
    }

    /// The range from the beginning of the axis to `stop`, inclusive.
    pub fn ending_at(stop: L) -> Self {
        Self {
            start: None,
            stop: Some(stop),
            step: 1,
            stop_bound: StopBound::Inclusive,
        }
    }

    /// Takes every `step`-th label, starting from the first one in the range.
    pub fn step_by(mut self, step: usize) -> Self {
        self.step = step;
        self
    }

    /// Excludes the stop label from the range.
    pub fn exclusive(mut self) -> Self {
        self.stop_bound = StopBound::Exclusive;
        self
    }

    /// The start label, `None` if the range is open at the start.
    pub fn start(&self) -> Option<&L> {
        self.start.as_ref()
    }

    /// The stop label, `None` if the range is open at the end.
    pub fn stop(&self) -> Option<&L> {
        self.stop.as_ref()
    }

    /// The step between taken labels.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Whether the stop label is included.
    pub fn stop_bound(&self) -> StopBound {
        self.stop_bound
    }
}

/// Selection request for one axis.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AxisSlice<L> {
    /// Pin a single label: the axis is removed from the result and its position recorded.
    Squeeze(L),
    /// Keep a sub-range of labels.
    Range(LabelRange<L>),
    /// Keep the listed labels, in the listed order.
    Keep(Vec<L>),
    /// Keep every label except the listed ones, in axis order.
    Drop(Vec<L>),
    /// Keep the whole axis. Same as leaving the axis out of the selector.
    All,
}

impl<L> AxisSlice<L> {
    /// Selects a single label, squeezing the axis out.
    pub fn squeeze(label: L) -> Self {
        AxisSlice::Squeeze(label)
    }

    /// Selects the inclusive label range `start..=stop`.
    pub fn range(start: L, stop: L) -> Self {
        AxisSlice::Range(LabelRange::new(start, stop))
    }

    /// Selects every `step`-th label of the inclusive range `start..=stop`.
    pub fn range_step(start: L, stop: L, step: usize) -> Self {
        AxisSlice::Range(LabelRange::new(start, stop).step_by(step))
    }

    /// Selects the listed labels.
    pub fn keep(labels: impl IntoIterator<Item = L>) -> Self {
        AxisSlice::Keep(labels.into_iter().collect())
    }

    /// Selects all but the listed labels.
    pub fn drop(labels: impl IntoIterator<Item = L>) -> Self {
        AxisSlice::Drop(labels.into_iter().collect())
    }

    /// Selects the whole axis.
    pub fn all() -> Self {
        AxisSlice::All
    }

    /// Returns the squeezed label if this slice pins a single label.
    pub fn get_squeeze(&self) -> Option<&L> {
        match self {
            AxisSlice::Squeeze(label) => Some(label),
            _ => None,
        }
    }
}

impl<L> From<LabelRange<L>> for AxisSlice<L> {
    fn from(range: LabelRange<L>) -> Self {
        AxisSlice::Range(range)
    }
}

/// Why a slice could not be laid on an axis. The resolver attaches the axis name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SliceFault<L> {
    Missing(L),
    ZeroStep,
}

impl<L: Ord + Clone> AxisSlice<L> {
    /// Translates the slice to ordinals of `axis`, in the order the resulting axis presents them.
    pub(crate) fn build_ordinals(&self, axis: &Axis<L>) -> Result<Vec<usize>, SliceFault<L>> {
        let locate = |label: &L| axis.ordinal(label).ok_or_else(|| SliceFault::Missing(label.clone()));
        match self {
            AxisSlice::Squeeze(label) => Ok(alloc::vec![locate(label)?]),
            AxisSlice::Range(range) => {
                if range.step == 0 {
                    return Err(SliceFault::ZeroStep);
                }
                let begin = match &range.start {
                    Some(label) => locate(label)?,
                    None => 0,
                };
                let end = match (&range.stop, range.stop_bound) {
                    (Some(label), StopBound::Inclusive) => locate(label)? + 1,
                    (Some(label), StopBound::Exclusive) => locate(label)?,
                    (None, _) => axis.size(),
                };
                Ok((begin..end.max(begin)).step_by(range.step).collect())
            }
            AxisSlice::Keep(labels) => {
                let mut seen = BTreeSet::new();
                let mut ordinals = Vec::with_capacity(labels.len());
                for label in labels {
                    let i = locate(label)?;
                    if seen.insert(i) {
                        ordinals.push(i);
                    }
                }
                Ok(ordinals)
            }
            AxisSlice::Drop(labels) => {
                let dropped = labels.iter().map(locate).collect::<Result<BTreeSet<_>, _>>()?;
                Ok((0..axis.size()).filter(|i| !dropped.contains(i)).collect())
            }
            AxisSlice::All => Ok((0..axis.size()).collect()),
        }
    }
}

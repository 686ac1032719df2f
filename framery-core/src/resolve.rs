//! Selection resolver: turns selectors into reduced axes, pinned positions and positional indices.

use alloc::{collections::BTreeMap, vec, vec::Vec};
use core::fmt::Debug;

use crate::{
    axis::Axis,
    coordinate::Coordinate,
    dimension::DimensionMapping,
    error::SelectError,
    selector::Selector,
    slice::{AxisSlice, SliceFault},
};

/// Outcome of laying one slice on one axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Resolved<L> {
    /// The axis is squeezed out at this position.
    Pinned(usize),
    /// The axis survives with these labels.
    Axis(Axis<L>),
}

/// Coordinate, dimension mapping and squeeze map of a view under construction.
#[derive(Debug)]
pub(crate) struct Reduction<K, L> {
    pub(crate) coordinate: Coordinate<K, L>,
    pub(crate) dims: DimensionMapping<K>,
    pub(crate) squeeze: BTreeMap<K, usize>,
}

fn slice_error<K, L>(name: &K, fault: SliceFault<L>) -> SelectError<K, L>
where
    K: Clone,
{
    match fault {
        SliceFault::Missing(label) => SelectError::LabelNotFound {
            axis: name.clone(),
            label,
        },
        SliceFault::ZeroStep => SelectError::InvalidStep { axis: name.clone() },
    }
}

fn check_names<K: Ord + Clone, L>(
    selector: &Selector<K, L>,
    dims: &DimensionMapping<K>,
) -> Result<(), SelectError<K, L>> {
    for name in selector.names() {
        if !dims.contains(name) {
            return Err(SelectError::UnknownAxis(name.clone()));
        }
    }
    Ok(())
}

/// Lays `slice` on `axis`; `None` keeps the whole axis.
pub(crate) fn resolve_axis<K, L>(
    name: &K,
    axis: &Axis<L>,
    slice: Option<&AxisSlice<L>>,
) -> Result<Resolved<L>, SelectError<K, L>>
where
    K: Clone,
    L: Ord + Clone,
{
    match slice {
        Some(AxisSlice::Squeeze(label)) => {
            axis.position(label)
                .map(Resolved::Pinned)
                .ok_or_else(|| SelectError::LabelNotFound {
                    axis: name.clone(),
                    label: label.clone(),
                })
        }
        Some(AxisSlice::All) | None => Ok(Resolved::Axis(axis.clone())),
        Some(slice) => {
            let ordinals = slice.build_ordinals(axis).map_err(|f| slice_error(name, f))?;
            Ok(Resolved::Axis(axis.take_ordinals(ordinals)))
        }
    }
}

/// Reduces a source's axes by `selector`, walking the source dimensions in order.
///
/// Nothing is returned unless every requested axis resolves.
pub(crate) fn reduce<K, L>(
    coordinate: &Coordinate<K, L>,
    dims: &DimensionMapping<K>,
    selector: &Selector<K, L>,
) -> Result<Reduction<K, L>, SelectError<K, L>>
where
    K: Ord + Clone + Debug,
    L: Ord + Clone + Debug,
{
    check_names(selector, dims)?;

    let mut axes = BTreeMap::new();
    let mut names = Vec::with_capacity(dims.len());
    let mut squeeze = BTreeMap::new();

    for name in dims {
        let axis = coordinate
            .get(name)
            .ok_or_else(|| SelectError::UnknownAxis(name.clone()))?;
        match resolve_axis(name, axis, selector.get(name))? {
            Resolved::Pinned(position) => {
                tracing::trace!(axis = ?name, position, "squeezed axis");
                squeeze.insert(name.clone(), position);
            }
            Resolved::Axis(axis) => {
                tracing::trace!(axis = ?name, size = axis.size(), "kept axis");
                axes.insert(name.clone(), axis);
                names.push(name.clone());
            }
        }
    }

    Ok(Reduction {
        coordinate: Coordinate::from_map(axes),
        dims: DimensionMapping::from_raw_unchecked(names),
        squeeze,
    })
}

/// Resolves a selector naming a single label on every axis to positions, in the rank order of `dims`.
pub(crate) fn locate<K, L>(
    coordinate: &Coordinate<K, L>,
    dims: &DimensionMapping<K>,
    selector: &Selector<K, L>,
) -> Result<Vec<usize>, SelectError<K, L>>
where
    K: Ord + Clone,
    L: Ord + Clone,
{
    check_names(selector, dims)?;

    dims.iter()
        .map(|name| {
            let axis = coordinate
                .get(name)
                .ok_or_else(|| SelectError::UnknownAxis(name.clone()))?;
            match selector.get(name) {
                Some(AxisSlice::Squeeze(label)) => {
                    axis.position(label).ok_or_else(|| SelectError::LabelNotFound {
                        axis: name.clone(),
                        label: label.clone(),
                    })
                }
                _ => Err(SelectError::ExpectedScalarSelection(name.clone())),
            }
        })
        .collect()
}

/// Builds the positional index of a view's source from positions in the view's rank order and the squeeze map.
///
/// Every source rank must be filled exactly once.
pub(crate) fn fill_source_index<K, L>(
    dims: &DimensionMapping<K>,
    index: &[usize],
    squeeze: &BTreeMap<K, usize>,
    source_dims: &DimensionMapping<K>,
) -> Result<Vec<usize>, SelectError<K, L>>
where
    K: Eq,
{
    let rank = source_dims.len();
    let mut slots: Vec<Option<usize>> = vec![None; rank];
    let filled = |slots: &[Option<usize>]| slots.iter().filter(|s| s.is_some()).count();

    if index.len() != dims.len() {
        return Err(SelectError::RankMismatch { filled: 0, rank });
    }

    let entries = dims
        .iter()
        .zip(index.iter().copied())
        .chain(squeeze.iter().map(|(name, &position)| (name, position)));
    for (name, position) in entries {
        let Some(r) = source_dims.index_of(name).filter(|&r| slots[r].is_none()) else {
            return Err(SelectError::RankMismatch {
                filled: filled(&slots),
                rank,
            });
        };
        slots[r] = Some(position);
    }

    let count = filled(&slots);
    slots
        .into_iter()
        .collect::<Option<Vec<_>>>()
        .ok_or(SelectError::RankMismatch {
            filled: count,
            rank,
        })
}

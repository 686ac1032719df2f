//! Labeled views: reduced or reindexed axes over a labeled source, without copying elements.

use alloc::{collections::BTreeMap, vec::Vec};

use crate::{
    coordinate::Coordinate,
    dimension::DimensionMapping,
    error::SelectError,
    labeled::{Labeled, LabeledMut},
    resolve,
    selector::Selector,
};

/// Builds a view of `source` reduced by `selector`.
///
/// The view's axes follow the source's dimension order: squeezed axes are removed and recorded with their source
/// position, every other axis is kept (restricted by its slice, or in full if the selector leaves it out). Whether
/// the view borrows the source immutably, mutably, or owns it is given by `S`: pass `&A`, `&mut A` or `A`.
///
/// Nothing is built unless every requested axis resolves.
pub fn select<S: Labeled>(
    source: S,
    selector: &Selector<S::Name, S::Label>,
) -> Result<LabeledView<S>, SelectError<S::Name, S::Label>> {
    let reduction = resolve::reduce(source.coordinates(), source.dimension_mapping(), selector)?;
    tracing::debug!(
        source_rank = source.dimension(),
        view_rank = reduction.dims.len(),
        squeezed = ?reduction.squeeze.keys().collect::<Vec<_>>(),
        "built labeled view"
    );
    Ok(LabeledView {
        source,
        coordinate: reduction.coordinate,
        dims: reduction.dims,
        squeeze: reduction.squeeze,
    })
}

/// A labeled source seen through a selection.
///
/// In practice, this struct is the compound of the source, the reduced [`Coordinate`], the reduced
/// [`DimensionMapping`] and the squeeze map, which records the source position of every axis pinned to a single
/// label. Element access translates positions in the view's rank order, together with the squeeze map, into a
/// positional index for the source.
///
/// Two views compare equal when their sources, coordinates and dimension mappings are equal. Squeeze maps are not
/// compared: views pinning the same axis at different labels are equal.
#[derive(Debug, Clone)]
pub struct LabeledView<S: Labeled> {
    source: S,
    coordinate: Coordinate<S::Name, S::Label>,
    dims: DimensionMapping<S::Name>,
    squeeze: BTreeMap<S::Name, usize>,
}

impl<S: Labeled> LabeledView<S> {
    /// Assemble a view from its raw parts.
    ///
    /// # Safety
    ///
    /// The caller MUST ensure that the dimension mapping names exactly the axes of `coordinate`, that neither shares
    /// a name with `squeeze`, that together they name every rank of `source` once, and that every position stored on
    /// the axes and in `squeeze` is a position of `source` along the corresponding rank.
    pub unsafe fn from_raw_unchecked(
        source: S,
        coordinate: Coordinate<S::Name, S::Label>,
        dims: DimensionMapping<S::Name>,
        squeeze: BTreeMap<S::Name, usize>,
    ) -> Self {
        Self {
            source,
            coordinate,
            dims,
            squeeze,
        }
    }

    /// Decompose the view into source, coordinate, dimension mapping and squeeze map.
    pub fn into_raw(
        self,
    ) -> (
        S,
        Coordinate<S::Name, S::Label>,
        DimensionMapping<S::Name>,
        BTreeMap<S::Name, usize>,
    ) {
        (self.source, self.coordinate, self.dims, self.squeeze)
    }

    /// Get the immutable reference to the source.
    pub fn data(&self) -> &S {
        &self.source
    }

    /// Get the mutable reference to the source.
    ///
    /// Replacing the source with one of a different shape makes later element access fail with
    /// [`SelectError::OutOfBounds`] or [`SelectError::RankMismatch`].
    pub fn data_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Give the source back, dropping the view.
    pub fn into_data(self) -> S {
        self.source
    }

    /// The squeezed axes with their source positions.
    pub fn squeezed(&self) -> &BTreeMap<S::Name, usize> {
        &self.squeeze
    }

    /// Create a view of this view.
    pub fn view(
        &self,
        selector: &Selector<S::Name, S::Label>,
    ) -> Result<LabeledView<&Self>, SelectError<S::Name, S::Label>> {
        select(self, selector)
    }

    /// Create a mutable view of this view.
    pub fn view_mut(
        &mut self,
        selector: &Selector<S::Name, S::Label>,
    ) -> Result<LabeledView<&mut Self>, SelectError<S::Name, S::Label>>
    where
        S: LabeledMut,
    {
        select(self, selector)
    }

    /// Create a view taking ownership of this view.
    pub fn into_view(
        self,
        selector: &Selector<S::Name, S::Label>,
    ) -> Result<LabeledView<Self>, SelectError<S::Name, S::Label>> {
        select(self, selector)
    }

    /// Positions outside the view's own axes are rejected, even where the source has them.
    fn source_index(&self, index: &[usize]) -> Result<Vec<usize>, SelectError<S::Name, S::Label>> {
        let full = resolve::fill_source_index(&self.dims, index, &self.squeeze, self.source.dimension_mapping())?;
        let carried = self.dims.iter().zip(index).all(|(name, position)| {
            self.coordinate
                .get(name)
                .is_some_and(|axis| axis.positions().contains(position))
        });
        if !carried {
            return Err(SelectError::OutOfBounds { index: index.to_vec() });
        }
        Ok(full)
    }
}

impl<S: Labeled + PartialEq> PartialEq for LabeledView<S> {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.coordinate == other.coordinate && self.dims == other.dims
    }
}
impl<S: Labeled + Eq> Eq for LabeledView<S> {}

impl<S: Labeled> Labeled for LabeledView<S> {
    type Name = S::Name;
    type Label = S::Label;
    type Elem = S::Elem;

    fn coordinates(&self) -> &Coordinate<S::Name, S::Label> {
        &self.coordinate
    }
    fn dimension_mapping(&self) -> &DimensionMapping<S::Name> {
        &self.dims
    }
    fn element(&self, index: &[usize]) -> Option<&S::Elem> {
        let full = self.source_index(index).ok()?;
        self.source.element(&full)
    }
    fn select(
        &self,
        selector: &Selector<S::Name, S::Label>,
    ) -> Result<&S::Elem, SelectError<S::Name, S::Label>> {
        let index = self.locate(selector)?;
        let full = self.source_index(&index)?;
        match self.source.element(&full) {
            Some(elem) => Ok(elem),
            None => Err(SelectError::OutOfBounds { index: full }),
        }
    }
}

impl<S: LabeledMut> LabeledMut for LabeledView<S> {
    fn element_mut(&mut self, index: &[usize]) -> Option<&mut S::Elem> {
        let full = self.source_index(index).ok()?;
        self.source.element_mut(&full)
    }
    fn select_mut(
        &mut self,
        selector: &Selector<S::Name, S::Label>,
    ) -> Result<&mut S::Elem, SelectError<S::Name, S::Label>> {
        let index = self.locate(selector)?;
        let full = self.source_index(&index)?;
        match self.source.element_mut(&full) {
            Some(elem) => Ok(elem),
            None => Err(SelectError::OutOfBounds { index: full }),
        }
    }
}

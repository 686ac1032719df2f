//! Labeled sources: dense data presented through named, labeled axes.

use core::fmt::Debug;

use alloc::vec::Vec;

use crate::{
    axis::Axis,
    coordinate::Coordinate,
    dimension::DimensionMapping,
    error::{BuildError, SelectError},
    repr::{DenseRepr, ElemMutRepr, ElemRepr},
    resolve,
    selector::Selector,
    view::{self, LabeledView},
};

/// Anything that presents elements through named, labeled axes: labeled arrays, views, and references to them.
///
/// A labeled source exposes a [`Coordinate`] (the labels of every axis), a [`DimensionMapping`] (the rank of every
/// axis) and positional element access in that rank order. The positions accepted by [`Labeled::element`] are the
/// ones stored on the source's axes, so for a view they are positions of the underlying data that its axes carry.
pub trait Labeled {
    /// Axis-name type.
    type Name: Ord + Clone + Debug;
    /// Label type.
    type Label: Ord + Clone + Debug;
    /// Element type.
    type Elem;

    /// The named axes.
    fn coordinates(&self) -> &Coordinate<Self::Name, Self::Label>;

    /// The rank of every named axis.
    fn dimension_mapping(&self) -> &DimensionMapping<Self::Name>;

    /// Returns the element at the given positions, one per rank, or `None` if they do not address an element.
    fn element(&self, index: &[usize]) -> Option<&Self::Elem>;

    /// Number of axes.
    fn dimension(&self) -> usize {
        self.dimension_mapping().len()
    }

    /// Axis names in rank order.
    fn dimension_labels(&self) -> &[Self::Name] {
        self.dimension_mapping().labels()
    }

    /// Number of elements.
    fn size(&self) -> usize {
        self.coordinates().size()
    }

    /// Resolves a selector pinning every axis to a single label into positions, in rank order.
    fn locate(
        &self,
        selector: &Selector<Self::Name, Self::Label>,
    ) -> Result<Vec<usize>, SelectError<Self::Name, Self::Label>> {
        resolve::locate(self.coordinates(), self.dimension_mapping(), selector)
    }

    /// Returns the element whose labels are given by `selector`.
    ///
    /// Every axis must be selected by a single label ([`AxisSlice::Squeeze`](crate::slice::AxisSlice::Squeeze)).
    fn select(
        &self,
        selector: &Selector<Self::Name, Self::Label>,
    ) -> Result<&Self::Elem, SelectError<Self::Name, Self::Label>> {
        let index = self.locate(selector)?;
        match self.element(&index) {
            Some(elem) => Ok(elem),
            None => Err(SelectError::OutOfBounds { index }),
        }
    }
}

/// Labeled source providing mutable element access.
pub trait LabeledMut: Labeled {
    /// Returns the mutable element at the given positions, or `None` if they do not address an element.
    fn element_mut(&mut self, index: &[usize]) -> Option<&mut Self::Elem>;

    /// Returns the mutable element whose labels are given by `selector`.
    fn select_mut(
        &mut self,
        selector: &Selector<Self::Name, Self::Label>,
    ) -> Result<&mut Self::Elem, SelectError<Self::Name, Self::Label>> {
        let index = self.locate(selector)?;
        match self.element_mut(&index) {
            Some(elem) => Ok(elem),
            None => Err(SelectError::OutOfBounds { index }),
        }
    }
}

impl<T: Labeled + ?Sized> Labeled for &T {
    type Name = T::Name;
    type Label = T::Label;
    type Elem = T::Elem;

    fn coordinates(&self) -> &Coordinate<Self::Name, Self::Label> {
        (**self).coordinates()
    }
    fn dimension_mapping(&self) -> &DimensionMapping<Self::Name> {
        (**self).dimension_mapping()
    }
    fn element(&self, index: &[usize]) -> Option<&Self::Elem> {
        (**self).element(index)
    }
    fn select(
        &self,
        selector: &Selector<Self::Name, Self::Label>,
    ) -> Result<&Self::Elem, SelectError<Self::Name, Self::Label>> {
        (**self).select(selector)
    }
}

impl<T: Labeled + ?Sized> Labeled for &mut T {
    type Name = T::Name;
    type Label = T::Label;
    type Elem = T::Elem;

    fn coordinates(&self) -> &Coordinate<Self::Name, Self::Label> {
        (**self).coordinates()
    }
    fn dimension_mapping(&self) -> &DimensionMapping<Self::Name> {
        (**self).dimension_mapping()
    }
    fn element(&self, index: &[usize]) -> Option<&Self::Elem> {
        (**self).element(index)
    }
    fn select(
        &self,
        selector: &Selector<Self::Name, Self::Label>,
    ) -> Result<&Self::Elem, SelectError<Self::Name, Self::Label>> {
        (**self).select(selector)
    }
}

impl<T: LabeledMut + ?Sized> LabeledMut for &mut T {
    fn element_mut(&mut self, index: &[usize]) -> Option<&mut Self::Elem> {
        (**self).element_mut(index)
    }
    fn select_mut(
        &mut self,
        selector: &Selector<Self::Name, Self::Label>,
    ) -> Result<&mut Self::Elem, SelectError<Self::Name, Self::Label>> {
        (**self).select_mut(selector)
    }
}

/// A dense representation bound to a full set of labeled axes.
///
/// In the conceptual model, a labeled array is a dense array whose every rank carries a name and whose every
/// position along a rank carries a label.
///
/// In practice, this struct is a wrapper of the compound of a dense representation, a [`Coordinate`] and a
/// [`DimensionMapping`], ensuring that they agree: the dimension mapping names every rank of the data, the
/// coordinate holds exactly one axis per name, and the axis for rank `i` labels the positions `0..axis_len(i)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledArray<R, K, L> {
    data: R,
    coordinate: Coordinate<K, L>,
    dims: DimensionMapping<K>,
}

impl<R: DenseRepr, K: Ord + Clone, L: Ord + Clone> LabeledArray<R, K, L> {
    /// Create a labeled array from raw data, coordinate and dimension mapping, checking that they agree.
    pub fn from_raw(
        data: R,
        coordinate: Coordinate<K, L>,
        dims: DimensionMapping<K>,
    ) -> Result<Self, BuildError<K, L>> {
        if data.naxes() != dims.len() {
            return Err(BuildError::NaxesMismatch {
                dims: dims.len(),
                naxes: data.naxes(),
            });
        }
        for (i, name) in dims.iter().enumerate() {
            let axis = coordinate
                .get(name)
                .ok_or_else(|| BuildError::MissingAxis(name.clone()))?;
            let len = data.axis_len(i);
            if axis.size() != len {
                return Err(BuildError::LengthMismatch {
                    axis: name.clone(),
                    labels: axis.size(),
                    len,
                });
            }
            if !axis.is_contiguous() {
                return Err(BuildError::NonContiguousAxis(name.clone()));
            }
        }
        if let Some(name) = coordinate.names().find(|name| !dims.contains(name)) {
            return Err(BuildError::UnmappedAxis(name.clone()));
        }
        Ok(unsafe { Self::from_raw_unchecked(data, coordinate, dims) })
    }

    /// Create a labeled array from raw data and `(name, axis)` pairs in rank order.
    pub fn from_axes(
        data: R,
        axes: impl IntoIterator<Item = (K, Axis<L>)>,
    ) -> Result<Self, BuildError<K, L>> {
        let axes: Vec<(K, Axis<L>)> = axes.into_iter().collect();
        let dims = DimensionMapping::from_labels(axes.iter().map(|(name, _)| name.clone()))?;
        let coordinate = Coordinate::from_axes(axes)?;
        Self::from_raw(data, coordinate, dims)
    }

    /// Create a labeled array without checking that data, coordinate and dimension mapping agree.
    ///
    /// # Safety
    ///
    /// The caller must ensure the invariants checked by [`LabeledArray::from_raw`].
    pub unsafe fn from_raw_unchecked(data: R, coordinate: Coordinate<K, L>, dims: DimensionMapping<K>) -> Self {
        Self {
            data,
            coordinate,
            dims,
        }
    }

    /// Decompose the labeled array into data, coordinate and dimension mapping.
    pub fn into_raw(self) -> (R, Coordinate<K, L>, DimensionMapping<K>) {
        (self.data, self.coordinate, self.dims)
    }

    /// Get the immutable reference to the data.
    pub fn data(&self) -> &R {
        &self.data
    }

    /// Get the mutable reference to the data.
    pub fn data_mut(&mut self) -> &mut R {
        &mut self.data
    }
}

impl<R, K, L> LabeledArray<R, K, L>
where
    R: ElemRepr,
    K: Ord + Clone + Debug,
    L: Ord + Clone + Debug,
{
    /// Create a view borrowing this array.
    pub fn view(&self, selector: &Selector<K, L>) -> Result<LabeledView<&Self>, SelectError<K, L>> {
        view::select(self, selector)
    }

    /// Create a view borrowing this array mutably; elements selected through the view can be written.
    pub fn view_mut(&mut self, selector: &Selector<K, L>) -> Result<LabeledView<&mut Self>, SelectError<K, L>>
    where
        R: ElemMutRepr,
    {
        view::select(self, selector)
    }

    /// Create a view taking ownership of this array. The array is dropped if the selection fails.
    pub fn into_view(self, selector: &Selector<K, L>) -> Result<LabeledView<Self>, SelectError<K, L>> {
        view::select(self, selector)
    }
}

impl<R, K, L> Labeled for LabeledArray<R, K, L>
where
    R: ElemRepr,
    K: Ord + Clone + Debug,
    L: Ord + Clone + Debug,
{
    type Name = K;
    type Label = L;
    type Elem = R::Elem;

    fn coordinates(&self) -> &Coordinate<K, L> {
        &self.coordinate
    }
    fn dimension_mapping(&self) -> &DimensionMapping<K> {
        &self.dims
    }
    fn element(&self, index: &[usize]) -> Option<&R::Elem> {
        self.data.element(index)
    }
}

impl<R, K, L> LabeledMut for LabeledArray<R, K, L>
where
    R: ElemMutRepr,
    K: Ord + Clone + Debug,
    L: Ord + Clone + Debug,
{
    fn element_mut(&mut self, index: &[usize]) -> Option<&mut R::Elem> {
        self.data.element_mut(index)
    }
}

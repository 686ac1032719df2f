//! ndarray-backed dense storage for framery labeled arrays.

#![no_std]
extern crate alloc;
#[cfg(test)]
extern crate std;

use core::fmt::Debug;

use alloc::vec::Vec;
use framery_core::{
    axis::Axis,
    error::BuildError,
    labeled::{Labeled, LabeledArray},
    repr::{DenseRepr, ElemMutReprImpl, ElemReprImpl},
};
use ndarray::{ArrayD, ArrayViewD, ArrayViewMutD};
use num_traits::Zero;
use rand::{
    Rng,
    distributions::{Distribution, Standard},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdDenseRepr<E> {
    data: ArrayD<E>,
}
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdDenseViewRepr<'a, E> {
    data: ArrayViewD<'a, E>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct NdDenseViewMutRepr<'a, E> {
    data: ArrayViewMutD<'a, E>,
}

impl<E> NdDenseRepr<E> {
    pub fn from_array(data: ArrayD<E>) -> Self {
        Self { data }
    }
    pub fn array(&self) -> &ArrayD<E> {
        &self.data
    }
    pub fn into_array(self) -> ArrayD<E> {
        self.data
    }
    pub fn view(&self) -> NdDenseViewRepr<'_, E> {
        NdDenseViewRepr {
            data: self.data.view(),
        }
    }
    pub fn view_mut(&mut self) -> NdDenseViewMutRepr<'_, E> {
        NdDenseViewMutRepr {
            data: self.data.view_mut(),
        }
    }

    fn zero(sizes: impl Iterator<Item = usize>) -> Self
    where
        E: Clone + Zero,
    {
        let sizes: Vec<usize> = sizes.collect();
        Self {
            data: ArrayD::zeros(sizes),
        }
    }
    fn random_using(sizes: impl Iterator<Item = usize>, rng: &mut impl Rng) -> Self
    where
        Standard: Distribution<E>,
    {
        let sizes: Vec<usize> = sizes.collect();
        Self {
            data: ArrayD::from_shape_simple_fn(sizes, || rng.sample(Standard)),
        }
    }
    fn map<E2, F: FnMut(&E) -> E2>(&self, f: F) -> NdDenseRepr<E2> {
        NdDenseRepr {
            data: self.data.map(f),
        }
    }
}

impl<'a, E> From<ArrayViewD<'a, E>> for NdDenseViewRepr<'a, E> {
    fn from(data: ArrayViewD<'a, E>) -> Self {
        Self { data }
    }
}
impl<'a, E> From<ArrayViewMutD<'a, E>> for NdDenseViewMutRepr<'a, E> {
    fn from(data: ArrayViewMutD<'a, E>) -> Self {
        Self { data }
    }
}

unsafe impl<E> DenseRepr for NdDenseRepr<E> {
    fn naxes(&self) -> usize {
        self.data.shape().len()
    }
    fn axis_len(&self, i: usize) -> usize {
        self.data.shape()[i]
    }
}
unsafe impl<E> DenseRepr for NdDenseViewRepr<'_, E> {
    fn naxes(&self) -> usize {
        self.data.shape().len()
    }
    fn axis_len(&self, i: usize) -> usize {
        self.data.shape()[i]
    }
}
unsafe impl<E> DenseRepr for NdDenseViewMutRepr<'_, E> {
    fn naxes(&self) -> usize {
        self.data.shape().len()
    }
    fn axis_len(&self, i: usize) -> usize {
        self.data.shape()[i]
    }
}

impl<E> ElemReprImpl for NdDenseRepr<E> {
    type Elem = E;

    unsafe fn element_unchecked(&self, index: &[usize]) -> Option<&E> {
        self.data.get(index)
    }
}
impl<E> ElemMutReprImpl for NdDenseRepr<E> {
    unsafe fn element_mut_unchecked(&mut self, index: &[usize]) -> Option<&mut E> {
        self.data.get_mut(index)
    }
}

impl<E> ElemReprImpl for NdDenseViewRepr<'_, E> {
    type Elem = E;

    unsafe fn element_unchecked(&self, index: &[usize]) -> Option<&E> {
        self.data.get(index)
    }
}

impl<E> ElemReprImpl for NdDenseViewMutRepr<'_, E> {
    type Elem = E;

    unsafe fn element_unchecked(&self, index: &[usize]) -> Option<&E> {
        self.data.get(index)
    }
}
impl<E> ElemMutReprImpl for NdDenseViewMutRepr<'_, E> {
    unsafe fn element_mut_unchecked(&mut self, index: &[usize]) -> Option<&mut E> {
        self.data.get_mut(index)
    }
}

pub type NdLabeledArray<E, K, L> = LabeledArray<NdDenseRepr<E>, K, L>;

/// Constructors for labeled arrays stored in an [`ArrayD`].
///
/// Axes are given as `(name, axis)` pairs in rank order; the shape of generated data follows the axis sizes.
pub trait NdLabeledArrayExt<E, K, L>: Sized {
    /// Label an existing array.
    fn from_array(
        data: ArrayD<E>,
        axes: impl IntoIterator<Item = (K, Axis<L>)>,
    ) -> Result<Self, BuildError<K, L>>;

    /// Fill with zeros.
    fn zeros(axes: impl IntoIterator<Item = (K, Axis<L>)>) -> Result<Self, BuildError<K, L>>
    where
        E: Clone + Zero;

    /// Fill with values drawn from the standard distribution of `E`.
    fn random_using(
        axes: impl IntoIterator<Item = (K, Axis<L>)>,
        rng: &mut impl Rng,
    ) -> Result<Self, BuildError<K, L>>
    where
        Standard: Distribution<E>;

    /// Apply `f` to every element, keeping the axes.
    fn map<E2, F: FnMut(&E) -> E2>(&self, f: F) -> NdLabeledArray<E2, K, L>;
}
impl<E, K, L> NdLabeledArrayExt<E, K, L> for NdLabeledArray<E, K, L>
where
    K: Ord + Clone + Debug,
    L: Ord + Clone + Debug,
{
    fn from_array(
        data: ArrayD<E>,
        axes: impl IntoIterator<Item = (K, Axis<L>)>,
    ) -> Result<Self, BuildError<K, L>> {
        LabeledArray::from_axes(NdDenseRepr::from_array(data), axes)
    }

    fn zeros(axes: impl IntoIterator<Item = (K, Axis<L>)>) -> Result<Self, BuildError<K, L>>
    where
        E: Clone + Zero,
    {
        let axes: Vec<(K, Axis<L>)> = axes.into_iter().collect();
        let data = NdDenseRepr::zero(axes.iter().map(|(_, axis)| axis.size()));
        LabeledArray::from_axes(data, axes)
    }

    fn random_using(
        axes: impl IntoIterator<Item = (K, Axis<L>)>,
        rng: &mut impl Rng,
    ) -> Result<Self, BuildError<K, L>>
    where
        Standard: Distribution<E>,
    {
        let axes: Vec<(K, Axis<L>)> = axes.into_iter().collect();
        let data = NdDenseRepr::random_using(axes.iter().map(|(_, axis)| axis.size()), rng);
        LabeledArray::from_axes(data, axes)
    }

    fn map<E2, F: FnMut(&E) -> E2>(&self, mut f: F) -> NdLabeledArray<E2, K, L> {
        unsafe {
            LabeledArray::from_raw_unchecked(
                self.data().map(&mut f),
                self.coordinates().clone(),
                self.dimension_mapping().clone(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use std::vec;

    use framery_basic::{Label, Tag, label_axis};
    use framery_core::prelude::*;
    use ndarray::{Array, IxDyn, array};
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn weather() -> anyhow::Result<NdLabeledArray<f64, Tag, Label>> {
        let data = Array::from_shape_vec(IxDyn(&[2, 3]), (0..6).map(f64::from).collect())?;
        Ok(NdLabeledArray::from_array(
            data,
            [
                ("time".into(), label_axis([2020, 2021])?),
                ("location".into(), label_axis(["paris", "tokyo", "lima"])?),
            ],
        )?)
    }

    fn at(time: i32, location: &str) -> Selector<Tag, Label> {
        sel![
            "time".into() => AxisSlice::squeeze(time.into()),
            "location".into() => AxisSlice::squeeze(location.into()),
        ]
    }

    #[test]
    fn nd_select_test() -> anyhow::Result<()> {
        let t = weather()?;
        assert_eq!(*t.select(&at(2021, "tokyo"))?, 4.0);
        assert_eq!(t.data().array()[[0, 2]], *t.select(&at(2020, "lima"))?);
        Ok(())
    }

    #[test]
    fn nd_view_test() -> anyhow::Result<()> {
        let t = weather()?;
        let asia_and_americas = t.view(&sel![
            "location".into() => AxisSlice::drop([Label::from("paris")]),
        ])?;
        assert_eq!(asia_and_americas.size(), 4);

        let latest = asia_and_americas.view(&sel!["time".into() => AxisSlice::squeeze(2021.into())])?;
        assert_eq!(latest.dimension_labels(), &[Tag::from("location")]);
        assert_eq!(
            *latest.select(&sel!["location".into() => AxisSlice::squeeze("lima".into())])?,
            5.0
        );
        Ok(())
    }

    #[test]
    fn nd_view_mut_test() -> anyhow::Result<()> {
        let mut t = weather()?;
        {
            let mut paris = t.view_mut(&sel!["location".into() => AxisSlice::squeeze("paris".into())])?;
            for year in [2020, 2021] {
                *paris.select_mut(&sel!["time".into() => AxisSlice::squeeze(year.into())])? = -1.0;
            }
        }
        assert_eq!(
            t.data().array(),
            &array![[-1.0, 1.0, 2.0], [-1.0, 4.0, 5.0]].into_dyn()
        );
        Ok(())
    }

    #[test]
    fn nd_zeros_and_map_test() -> anyhow::Result<()> {
        let z = NdLabeledArray::<i32, _, _>::zeros([
            ("x", Axis::from_labels(['a', 'b'])?),
            ("y", Axis::from_labels(['p', 'q', 'r'])?),
        ])?;
        assert_eq!(z.data().array().shape(), &[2, 3]);

        let ones = z.map(|v| v + 1);
        assert_eq!(ones.coordinates(), z.coordinates());
        assert_eq!(
            *ones.select(&sel!["x" => AxisSlice::squeeze('b'), "y" => AxisSlice::squeeze('r')])?,
            1
        );
        Ok(())
    }

    #[test]
    fn nd_random_using_test() -> anyhow::Result<()> {
        let axes = || -> anyhow::Result<_> {
            Ok([
                ("x", Axis::from_labels([0usize, 1, 2])?),
                ("y", Axis::from_labels([10usize, 20])?),
            ])
        };
        let a = NdLabeledArray::<f64, _, _>::random_using(axes()?, &mut StdRng::seed_from_u64(7))?;
        let b = NdLabeledArray::<f64, _, _>::random_using(axes()?, &mut StdRng::seed_from_u64(7))?;
        assert_eq!(a, b);
        assert!(a.data().array().iter().all(|v| (0.0..1.0).contains(v)));
        Ok(())
    }

    #[test]
    fn nd_borrowed_repr_test() -> anyhow::Result<()> {
        let mut raw = array![[1, 2], [3, 4]].into_dyn();
        let axes = || -> anyhow::Result<_> {
            Ok([
                ("row", Axis::from_labels(['u', 'd'])?),
                ("col", Axis::from_labels(['l', 'r'])?),
            ])
        };
        let corner = sel!["row" => AxisSlice::squeeze('d'), "col" => AxisSlice::squeeze('l')];

        {
            let borrowed = LabeledArray::from_axes(NdDenseViewRepr::from(raw.view()), axes()?)?;
            assert_eq!(*borrowed.select(&corner)?, 3);
        }
        {
            let mut borrowed = LabeledArray::from_axes(NdDenseViewMutRepr::from(raw.view_mut()), axes()?)?;
            *borrowed.select_mut(&corner)? = 30;
        }
        assert_eq!(raw[[1, 0]], 30);
        Ok(())
    }

    #[test]
    fn nd_shape_mismatch_test() -> anyhow::Result<()> {
        let err = NdLabeledArray::from_array(
            ArrayD::<f64>::zeros(IxDyn(&[2, 2])),
            [("x", Axis::from_labels([1, 2, 3])?), ("y", Axis::from_labels([1, 2])?)],
        )
        .unwrap_err();
        assert_eq!(
            err,
            BuildError::LengthMismatch {
                axis: "x",
                labels: 3,
                len: 2
            }
        );
        Ok(())
    }
}

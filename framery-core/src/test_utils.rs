//! Row-major dense container and labeled fixtures for unit tests.

use alloc::vec::Vec;

use crate::{
    axis::Axis,
    labeled::LabeledArray,
    repr::{DenseRepr, ElemMutReprImpl, ElemReprImpl},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RowMajor<E> {
    shape: Vec<usize>,
    data: Vec<E>,
}

impl RowMajor<usize> {
    /// Every element holds its own row-major offset.
    pub(crate) fn iota(shape: &[usize]) -> Self {
        let len = shape.iter().product();
        Self {
            shape: shape.to_vec(),
            data: (0..len).collect(),
        }
    }
}

impl<E> RowMajor<E> {
    fn offset(&self, index: &[usize]) -> Option<usize> {
        let mut offset = 0;
        for (&i, &len) in index.iter().zip(&self.shape) {
            if i >= len {
                return None;
            }
            offset = offset * len + i;
        }
        Some(offset)
    }

    pub(crate) fn get(&self, index: &[usize]) -> Option<&E> {
        if index.len() != self.shape.len() {
            return None;
        }
        self.data.get(self.offset(index)?)
    }

    pub(crate) fn map<F, T>(self, f: F) -> RowMajor<T>
    where
        F: FnMut(E) -> T,
    {
        RowMajor {
            shape: self.shape,
            data: self.data.into_iter().map(f).collect(),
        }
    }
}

unsafe impl<E> DenseRepr for RowMajor<E> {
    fn naxes(&self) -> usize {
        self.shape.len()
    }
    fn axis_len(&self, i: usize) -> usize {
        self.shape[i]
    }
}

impl<E> ElemReprImpl for RowMajor<E> {
    type Elem = E;
    unsafe fn element_unchecked(&self, index: &[usize]) -> Option<&E> {
        self.data.get(self.offset(index)?)
    }
}

impl<E> ElemMutReprImpl for RowMajor<E> {
    unsafe fn element_mut_unchecked(&mut self, index: &[usize]) -> Option<&mut E> {
        let offset = self.offset(index)?;
        self.data.get_mut(offset)
    }
}

pub(crate) type TestArray = LabeledArray<RowMajor<usize>, &'static str, char>;

/// x: [a, b, c], y: [p, q]; element (i, j) holds `2i + j`.
pub(crate) fn xy_array() -> TestArray {
    LabeledArray::from_axes(
        RowMajor::iota(&[3, 2]),
        [
            ("x", Axis::from_labels(['a', 'b', 'c']).unwrap()),
            ("y", Axis::from_labels(['p', 'q']).unwrap()),
        ],
    )
    .unwrap()
}

/// x: [a, b, c], y: [p, q], z: [s, t, u, v]; element (i, j, k) holds `8i + 4j + k`.
pub(crate) fn xyz_array() -> TestArray {
    LabeledArray::from_axes(
        RowMajor::iota(&[3, 2, 4]),
        [
            ("x", Axis::from_labels(['a', 'b', 'c']).unwrap()),
            ("y", Axis::from_labels(['p', 'q']).unwrap()),
            ("z", Axis::from_labels(['s', 't', 'u', 'v']).unwrap()),
        ],
    )
    .unwrap()
}

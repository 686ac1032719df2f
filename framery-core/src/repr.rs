//! Layer 1 array concept: dense container with axes 0-indexed with usize, addressed by position only.

/// Minimal interface for dense container representations.
///
/// In the conceptual model, a dense representation is a structured data object with multiple axes, each indexed from `0` up to `axis_len(i) - 1`. It knows nothing about labels.
///
/// # Safety
///
/// The implementor MUST ensure the following invariants:
///
/// - The number of axes is fixed for the same object, even through mutable operations.
/// - The length of every axis is fixed for the same object, even through mutable operations.
///
/// Labeled arrays rely on these invariants to keep their coordinates in agreement with the data.
pub unsafe trait DenseRepr {
    /// Returns the number of axes (the rank) of the container.
    fn naxes(&self) -> usize;
    /// Returns the length of axis `i`. `i` MUST be less than `naxes()`.
    fn axis_len(&self, i: usize) -> usize;
}

/// Dense representation providing immutable element access, WITHOUT checking the number of indices.
pub trait ElemReprImpl: DenseRepr {
    /// The element type.
    type Elem;
    /// Returns the element at the given positions, or `None` if a position is out of bounds.
    ///
    /// # Safety
    ///
    /// The caller MUST pass exactly `naxes()` positions.
    unsafe fn element_unchecked(&self, index: &[usize]) -> Option<&Self::Elem>;
}

/// Dense representation providing mutable element access, WITHOUT checking the number of indices.
pub trait ElemMutReprImpl: ElemReprImpl {
    /// Returns the mutable element at the given positions, or `None` if a position is out of bounds.
    ///
    /// # Safety
    ///
    /// The caller MUST pass exactly `naxes()` positions.
    unsafe fn element_mut_unchecked(&mut self, index: &[usize]) -> Option<&mut Self::Elem>;
}

/// Safe version of `ElemReprImpl`.
///
/// The blanket implementation checks the number of indices.
pub trait ElemRepr: ElemReprImpl {
    /// Returns the element at the given positions, or `None` if the index does not address an element.
    fn element(&self, index: &[usize]) -> Option<&Self::Elem>;
}
impl<T: ElemReprImpl + ?Sized> ElemRepr for T {
    fn element(&self, index: &[usize]) -> Option<&Self::Elem> {
        if index.len() != self.naxes() {
            return None;
        }
        unsafe { self.element_unchecked(index) }
    }
}

/// Safe version of `ElemMutReprImpl`.
///
/// The blanket implementation checks the number of indices.
pub trait ElemMutRepr: ElemMutReprImpl {
    /// Returns the mutable element at the given positions, or `None` if the index does not address an element.
    fn element_mut(&mut self, index: &[usize]) -> Option<&mut Self::Elem>;
}
impl<T: ElemMutReprImpl + ?Sized> ElemMutRepr for T {
    fn element_mut(&mut self, index: &[usize]) -> Option<&mut Self::Elem> {
        if index.len() != self.naxes() {
            return None;
        }
        unsafe { self.element_mut_unchecked(index) }
    }
}
